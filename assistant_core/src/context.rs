//! Conversation context - the engine's entire persistent state.

use serde::{Deserialize, Serialize};

/// The active conversational mode.
///
/// Exactly one context is active at any time. It gates which classifier
/// rules pre-empt the others (bio-gen) and which suggestion set the widget
/// shows. There is no terminal context; a session runs until the widget is
/// torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationContext {
    /// Initial mode; general questions and the main menu.
    #[default]
    General,
    /// Browsing the service catalog.
    Services,
    /// Asking about the leadership roster.
    Leadership,
    /// Company history, values, and mission.
    About,
    /// The next message is treated as raw biography seed content.
    BioGen,
}

impl ConversationContext {
    /// All contexts, in a stable order (useful for exhaustive tests).
    pub const ALL: [ConversationContext; 5] = [
        ConversationContext::General,
        ConversationContext::Services,
        ConversationContext::Leadership,
        ConversationContext::About,
        ConversationContext::BioGen,
    ];

    /// Stable string form, matching the wire names used by the widget.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationContext::General => "general",
            ConversationContext::Services => "services",
            ConversationContext::Leadership => "leadership",
            ConversationContext::About => "about",
            ConversationContext::BioGen => "bio-gen",
        }
    }
}

impl std::fmt::Display for ConversationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
