//! About-page facts: company history and core values.

use serde::{Deserialize, Serialize};

/// A single core value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyValue {
    /// Short title, unique within the value list.
    pub title: String,

    /// One-sentence description.
    pub desc: String,
}

impl CompanyValue {
    /// Create a new value entry.
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }
}

/// Facts rendered on the about page and quoted by the assistant.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AboutFacts {
    /// Free-text founding history.
    pub history: String,

    /// Ordered list of core values.
    pub values: Vec<CompanyValue>,
}

impl AboutFacts {
    /// Create about facts from a history string and a value list.
    pub fn new(history: impl Into<String>, values: Vec<CompanyValue>) -> Self {
        Self {
            history: history.into(),
            values,
        }
    }

    /// Titles of all values, in order.
    pub fn value_titles(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_titles_preserve_order() {
        let about = AboutFacts::new(
            "Founded long ago.",
            vec![
                CompanyValue::new("Integrity", "Honest guidance."),
                CompanyValue::new("Innovation", "Constant curiosity."),
            ],
        );

        assert_eq!(about.value_titles(), vec!["Integrity", "Innovation"]);
    }
}
