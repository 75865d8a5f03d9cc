//! Response composer - turns a classified intent into reply text.
//!
//! Pure template substitution: each intent selects one fixed template and
//! interpolates the matched entity's fields. The bio draft embeds the user's
//! raw seed text verbatim; no generation service is involved.

use company_kb::KnowledgeBase;

use crate::classifier::Intent;

/// Greeting posted as the first bot message of every session.
pub const GREETING: &str =
    "Hello! I'm AK-AI, your virtual assistant. Ask me about our services, leadership, or company vision!";

/// Acknowledgement for the forced "Back to Main Menu" action.
pub const BACK_TO_MENU_ACK: &str = "Back to main menu. How can I help?";

/// Acknowledgement for the forced "Cancel Bio Generation" action.
pub const BIO_GEN_CANCELLED: &str = "Bio generation cancelled.";

const ABOUT_INVITATION: &str =
    "AK Tech Hub is built on strong values and a clear vision. I can tell you about our History, Core Values, or Mission.";

const BIO_MODE_PROMPT: &str = "Entering Bio Generation Mode 🤖.\n\nPlease type the employee's details (Name, Role, Department, Skills, Key Projects) and I will craft a professional biography for you.";

const ADDRESS_LINE: &str = "We are located at 123 Tech Park Avenue, Silicon Valley. Come visit us!";

const FALLBACK: &str = "I'm not sure about that specific detail, but I can help you navigate our Services, Leadership, or Company Info. Try using the suggestions below!";

/// Render the reply for a classified intent.
pub fn compose(intent: &Intent, kb: &KnowledgeBase) -> String {
    match intent {
        Intent::BioDraft { seed } => bio_draft(seed),
        Intent::OpenServices => service_overview(kb),
        Intent::OpenLeadership => leadership_overview(kb),
        Intent::OpenAbout => ABOUT_INVITATION.to_string(),
        Intent::EnterBioGen => BIO_MODE_PROMPT.to_string(),
        Intent::LeaderDetail(leader) => {
            format!("{} serves as our {}. {}", leader.name, leader.role, leader.bio)
        }
        Intent::ServiceDetail(service) => {
            format!("**{}**: {}", service.title, service.description)
        }
        Intent::History => kb.about().history.clone(),
        Intent::Values => values_summary(kb),
        Intent::Location => ADDRESS_LINE.to_string(),
        Intent::Fallback => FALLBACK.to_string(),
    }
}

fn bio_draft(seed: &str) -> String {
    format!(
        "Here is a professional bio draft based on your input:\n\n\"{seed} is a dedicated professional at AK Tech Hub. Leveraging their expertise, they drive innovation and excellence within their team, contributing significantly to our mission of technological advancement.\"\n\n(Tip: For a more specific bio, include Name, Role, Department, and Key Projects in your prompt next time!)"
    )
}

fn service_overview(kb: &KnowledgeBase) -> String {
    let titles: Vec<&str> = kb.services().iter().map(|s| s.title.as_str()).collect();
    format!(
        "We offer a wide range of services including {}. Select a service below or ask about one to learn more.",
        titles.join(", ")
    )
}

fn leadership_overview(kb: &KnowledgeBase) -> String {
    // The roster is expected to hold at least two leaders; degrade to a
    // generic sentence when it does not.
    match kb.leaders() {
        [first, second, ..] => format!(
            "Our company is led by industry veterans like {} and {}. What would you like to know about them?",
            first.name, second.name
        ),
        _ => "Our leadership team would be happy to tell you more. What would you like to know?"
            .to_string(),
    }
}

fn values_summary(kb: &KnowledgeBase) -> String {
    let values = &kb.about().values;
    match values.first() {
        Some(first) => format!(
            "Our core values are: {}. We believe in {}",
            kb.about().value_titles().join(", "),
            first.desc.to_lowercase()
        ),
        None => FALLBACK.to_string(),
    }
}
