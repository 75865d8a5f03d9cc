//! Intent classifier - keyword rules mapping raw input to an [`Intent`].
//!
//! Matching is case-insensitive substring search, evaluated in a fixed
//! priority order with first-match-wins:
//!
//! 1. **Bio-gen pre-emption**: in bio-gen context the whole message is seed
//!    text and no other rule runs
//! 2. **Context switches**: services, leadership, about, bio-gen keywords
//! 3. **Knowledge lookups**: leader by name/role, service by title, history,
//!    values, location
//! 4. **Fallback**
//!
//! The order is normative. It is the tie-break for ambiguous input: "history
//! of your services" switches to services because the service keywords are
//! tested first, and the label "Company History" lands on the about switch,
//! not the history lookup, because "history" is an about keyword.

mod intent;

pub use intent::*;

use company_kb::KnowledgeBase;

use crate::context::ConversationContext;

/// Keywords that switch to the services context.
const SERVICE_KEYWORDS: &[&str] = &["service", "offer"];

/// Keywords that switch to the leadership context.
const LEADERSHIP_KEYWORDS: &[&str] = &["leadership", "founder", "ceo", "cto"];

/// Keywords that switch to the about context.
const ABOUT_KEYWORDS: &[&str] = &["about", "history", "values", "vision"];

/// Phrases that enter bio-gen mode.
const BIO_GEN_KEYWORDS: &[&str] = &["generate bio", "write bio", "draft bio"];

/// Keywords answered with the founding history.
const HISTORY_KEYWORDS: &[&str] = &["history", "founded"];

/// Keywords answered with the office address.
const LOCATION_KEYWORDS: &[&str] = &["location", "address"];

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Classify one user message against the current context.
///
/// Total over strings: every input yields exactly one intent. The caller is
/// responsible for rejecting empty submissions before classification.
pub fn classify(context: ConversationContext, text: &str, kb: &KnowledgeBase) -> Intent {
    // Rule 1: bio-gen consumes the whole message as seed text.
    if context == ConversationContext::BioGen {
        return Intent::BioDraft {
            seed: text.to_string(),
        };
    }

    let lower = text.to_lowercase();

    // Rule 2: global context switches, in order.
    if contains_any(&lower, SERVICE_KEYWORDS) {
        return Intent::OpenServices;
    }
    if contains_any(&lower, LEADERSHIP_KEYWORDS) {
        return Intent::OpenLeadership;
    }
    if contains_any(&lower, ABOUT_KEYWORDS) {
        return Intent::OpenAbout;
    }
    if contains_any(&lower, BIO_GEN_KEYWORDS) {
        return Intent::EnterBioGen;
    }

    // Rule 3: knowledge lookups, context unchanged.
    if let Some(leader) = kb.leaders().iter().find(|l| l.mentioned_in(&lower)) {
        return Intent::LeaderDetail(leader.clone());
    }
    if let Some(service) = kb.services().iter().find(|s| s.mentioned_in(&lower)) {
        return Intent::ServiceDetail(service.clone());
    }
    if contains_any(&lower, HISTORY_KEYWORDS) {
        return Intent::History;
    }
    if lower.contains("value") {
        return Intent::Values;
    }
    if contains_any(&lower, LOCATION_KEYWORDS) {
        return Intent::Location;
    }

    // Rule 4: nothing matched.
    Intent::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::sample()
    }

    #[test]
    fn test_service_keyword_switches_from_every_context() {
        for context in ConversationContext::ALL {
            if context == ConversationContext::BioGen {
                continue; // pre-empted by rule 1
            }
            let intent = classify(context, "What services do you offer?", &kb());
            assert_eq!(intent, Intent::OpenServices, "from {context}");
        }
    }

    #[test]
    fn test_bio_gen_preempts_all_keywords() {
        let intent = classify(
            ConversationContext::BioGen,
            "What services do you offer?",
            &kb(),
        );
        assert_eq!(
            intent,
            Intent::BioDraft {
                seed: "What services do you offer?".to_string()
            }
        );
    }

    #[test]
    fn test_leadership_keywords() {
        for input in ["Tell me about leadership", "who is the founder", "CEO?", "your CTO"] {
            let intent = classify(ConversationContext::General, input, &kb());
            // "Tell me about leadership" still lands on leadership: the
            // service keywords do not match and leadership is tested before
            // the about keyword set.
            assert_eq!(intent, Intent::OpenLeadership, "input {input:?}");
        }
    }

    #[test]
    fn test_about_keywords() {
        for input in ["About the company", "Company History", "Core Values", "your vision"] {
            let intent = classify(ConversationContext::General, input, &kb());
            assert_eq!(intent, Intent::OpenAbout, "input {input:?}");
        }
    }

    #[test]
    fn test_services_beats_about_on_ambiguous_input() {
        let intent = classify(ConversationContext::General, "history of your services", &kb());
        assert_eq!(intent, Intent::OpenServices);
    }

    #[test]
    fn test_enter_bio_gen() {
        let intent = classify(ConversationContext::General, "please generate bio", &kb());
        assert_eq!(intent, Intent::EnterBioGen);
    }

    #[test]
    fn test_leader_lookup_by_name() {
        let intent = classify(ConversationContext::Leadership, "who is alex kim", &kb());
        assert!(matches!(intent, Intent::LeaderDetail(l) if l.name == "Alex Kim"));
    }

    #[test]
    fn test_leader_lookup_by_role() {
        // "Head of Training" is not a switch keyword, so the roster lookup
        // gets a chance to match the role.
        let intent = classify(
            ConversationContext::Leadership,
            "who runs head of training",
            &kb(),
        );
        assert!(matches!(intent, Intent::LeaderDetail(l) if l.name == "Marcus Webb"));
    }

    #[test]
    fn test_service_lookup_by_title() {
        // No switch keyword in the input, so the title lookup gets to run.
        let intent = classify(ConversationContext::Services, "Cybersecurity", &kb());
        assert!(matches!(intent, Intent::ServiceDetail(s) if s.title == "Cybersecurity"));
    }

    #[test]
    fn test_leader_lookup_wins_over_service_lookup() {
        // Both a leader name and a service title present: leaders are
        // checked first.
        let intent = classify(
            ConversationContext::General,
            "did priya sharma build cybersecurity",
            &kb(),
        );
        assert!(matches!(intent, Intent::LeaderDetail(l) if l.name == "Priya Sharma"));
    }

    #[test]
    fn test_history_lookup_reachable_via_founded() {
        // "history" alone is consumed by the about switch; "founded" reaches
        // the lookup.
        let intent = classify(ConversationContext::About, "when were you founded", &kb());
        assert_eq!(intent, Intent::History);
    }

    #[test]
    fn test_values_lookup() {
        // Singular "value" misses the about switch (which needs "values")
        // and reaches the lookup.
        let intent = classify(ConversationContext::About, "what do you value most", &kb());
        assert_eq!(intent, Intent::Values);
    }

    #[test]
    fn test_location_lookup() {
        let intent = classify(ConversationContext::General, "what's your address", &kb());
        assert_eq!(intent, Intent::Location);
    }

    #[test]
    fn test_fallback() {
        let intent = classify(ConversationContext::General, "banana", &kb());
        assert_eq!(intent, Intent::Fallback);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let intent = classify(ConversationContext::General, "WHAT DO YOU OFFER", &kb());
        assert_eq!(intent, Intent::OpenServices);
    }

    #[test]
    fn test_empty_kb_degrades_to_fallback() {
        let empty = KnowledgeBase::default();
        let intent = classify(ConversationContext::General, "who is alex kim", &empty);
        assert_eq!(intent, Intent::Fallback);
    }
}
