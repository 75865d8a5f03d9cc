//! Suggestion provider - quick-reply labels for the active context.
//!
//! A pure function of the context (and the service catalog); calling it
//! twice with the same inputs yields identical ordered output. Labels other
//! than the two forced actions are resubmitted through the classifier as if
//! the user had typed them.

use company_kb::KnowledgeBase;

use crate::context::ConversationContext;

/// Forced action: return to the general context without classification.
pub const BACK_TO_MAIN_MENU: &str = "Back to Main Menu";

/// Forced action: leave bio-gen mode without classification.
pub const CANCEL_BIO_GENERATION: &str = "Cancel Bio Generation";

/// How many service titles the services context suggests directly.
const SUGGESTED_SERVICES: usize = 3;

/// Ordered quick-reply labels for a context.
pub fn for_context(context: ConversationContext, kb: &KnowledgeBase) -> Vec<String> {
    match context {
        ConversationContext::General => vec![
            "What services do you offer?".to_string(),
            "Tell me about leadership".to_string(),
            "About the company".to_string(),
            "Generate Bio (Admin)".to_string(),
        ],
        ConversationContext::Services => {
            let mut labels: Vec<String> = kb
                .services()
                .iter()
                .take(SUGGESTED_SERVICES)
                .map(|s| s.title.clone())
                .collect();
            labels.push("View All Services".to_string());
            labels.push(BACK_TO_MAIN_MENU.to_string());
            labels
        }
        ConversationContext::Leadership => vec![
            "Who is the CEO?".to_string(),
            "Who is the CTO?".to_string(),
            "Leadership Vision".to_string(),
            BACK_TO_MAIN_MENU.to_string(),
        ],
        ConversationContext::About => vec![
            "Company History".to_string(),
            "Core Values".to_string(),
            "Location".to_string(),
            BACK_TO_MAIN_MENU.to_string(),
        ],
        ConversationContext::BioGen => vec![CANCEL_BIO_GENERATION.to_string()],
    }
}
