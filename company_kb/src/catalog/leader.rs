//! Leadership roster definitions.

use serde::{Deserialize, Serialize};

/// A member of the leadership team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Full name, unique within the roster.
    pub name: String,

    /// Role title (e.g. "CEO", "CTO").
    pub role: String,

    /// Short biography shown in detail replies.
    pub bio: String,
}

impl Leader {
    /// Create a new roster entry.
    pub fn new(name: impl Into<String>, role: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            bio: bio.into(),
        }
    }

    /// Check whether already-lowercased text mentions this leader by name or role.
    pub fn mentioned_in(&self, lower_text: &str) -> bool {
        lower_text.contains(&self.name.to_lowercase()) || lower_text.contains(&self.role.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentioned_by_name() {
        let leader = Leader::new("Alex Kim", "CEO", "Founded the company.");
        assert!(leader.mentioned_in("who is alex kim?"));
    }

    #[test]
    fn test_mentioned_by_role() {
        let leader = Leader::new("Alex Kim", "CEO", "Founded the company.");
        assert!(leader.mentioned_in("introduce your ceo"));
        assert!(!leader.mentioned_in("introduce your cfo"));
    }
}
