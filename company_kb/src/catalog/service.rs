//! Service definitions.

use serde::{Deserialize, Serialize};

/// A service offered by the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Stable identifier, unique within the catalog.
    pub id: String,

    /// Display title, unique within the catalog.
    pub title: String,

    /// One-paragraph description shown in detail replies.
    pub description: String,

    /// Opaque icon name resolved by the rendering layer.
    pub icon: String,
}

impl Service {
    /// Create a new service entry.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }

    /// Check whether already-lowercased text mentions this service's title.
    pub fn mentioned_in(&self, lower_text: &str) -> bool {
        lower_text.contains(&self.title.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = Service::new("web-dev", "Web Development", "Apps.", "Code");
        assert_eq!(service.id, "web-dev");
        assert_eq!(service.title, "Web Development");
    }

    #[test]
    fn test_mentioned_in() {
        let service = Service::new("cloud", "Cloud Solutions", "Infra.", "Cloud");

        assert!(service.mentioned_in("tell me about cloud solutions please"));
        assert!(!service.mentioned_in("tell me about the weather"));
        // Caller is expected to lowercase first.
        assert!(!service.mentioned_in("Cloud Solutions"));
    }
}
