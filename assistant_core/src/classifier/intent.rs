//! Intent - the outcome of classifying one user message.

use company_kb::{Leader, Service};

use crate::context::ConversationContext;

/// The rule a message matched, with the matched entity where one exists.
///
/// An intent fully determines the reply template and the next context; the
/// composer never re-inspects the input text (the bio seed travels inside
/// [`Intent::BioDraft`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Bio-gen mode consumed the whole message as biography seed text.
    BioDraft { seed: String },

    /// Context switch: browse the service catalog.
    OpenServices,

    /// Context switch: meet the leadership team.
    OpenLeadership,

    /// Context switch: company history, values, and mission.
    OpenAbout,

    /// Context switch: enter bio-gen mode.
    EnterBioGen,

    /// Lookup: a specific leader was named by name or role.
    LeaderDetail(Leader),

    /// Lookup: a specific service was named by title.
    ServiceDetail(Service),

    /// Lookup: founding history.
    History,

    /// Lookup: core values.
    Values,

    /// Lookup: office location.
    Location,

    /// Nothing matched.
    Fallback,
}

impl Intent {
    /// The context after this intent is applied.
    ///
    /// Transitions are total: switches move to their target, the bio draft
    /// drops back to general, and every lookup leaves the context unchanged.
    pub fn next_context(&self, current: ConversationContext) -> ConversationContext {
        match self {
            Intent::BioDraft { .. } => ConversationContext::General,
            Intent::OpenServices => ConversationContext::Services,
            Intent::OpenLeadership => ConversationContext::Leadership,
            Intent::OpenAbout => ConversationContext::About,
            Intent::EnterBioGen => ConversationContext::BioGen,
            Intent::LeaderDetail(_)
            | Intent::ServiceDetail(_)
            | Intent::History
            | Intent::Values
            | Intent::Location
            | Intent::Fallback => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_targets() {
        let current = ConversationContext::About;
        assert_eq!(
            Intent::OpenServices.next_context(current),
            ConversationContext::Services
        );
        assert_eq!(
            Intent::EnterBioGen.next_context(current),
            ConversationContext::BioGen
        );
    }

    #[test]
    fn test_bio_draft_resets_to_general() {
        let intent = Intent::BioDraft {
            seed: "Jane Doe".to_string(),
        };
        assert_eq!(
            intent.next_context(ConversationContext::BioGen),
            ConversationContext::General
        );
    }

    #[test]
    fn test_lookups_keep_context() {
        for current in ConversationContext::ALL {
            assert_eq!(Intent::History.next_context(current), current);
            assert_eq!(Intent::Fallback.next_context(current), current);
        }
    }
}
