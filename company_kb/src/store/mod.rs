//! Knowledge base store - the aggregate the assistant reads from.
//!
//! The store holds three ordered, read-only collections:
//! - **Services**: what the company offers
//! - **Leaders**: the leadership roster
//! - **AboutFacts**: founding history and core values
//!
//! Content can be authored in TOML or JSON; both loaders validate the
//! uniqueness invariants before handing the base to the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::catalog::{AboutFacts, CompanyValue, Leader, Service};

/// Errors raised while loading or validating knowledge base content.
#[derive(Debug, Error)]
pub enum KbError {
    #[error("failed to parse knowledge base TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse knowledge base JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate service title: {0}")]
    DuplicateService(String),

    #[error("duplicate leader name: {0}")]
    DuplicateLeader(String),

    #[error("duplicate value title: {0}")]
    DuplicateValue(String),
}

/// The complete read-only knowledge base.
///
/// Collections keep their authored order; the engine relies on it (the
/// leadership overview names the first two leaders, the services context
/// suggests the first three titles).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KnowledgeBase {
    services: Vec<Service>,
    leaders: Vec<Leader>,
    about: AboutFacts,
}

impl KnowledgeBase {
    /// Create a knowledge base from already-built collections.
    pub fn new(services: Vec<Service>, leaders: Vec<Leader>, about: AboutFacts) -> Self {
        Self {
            services,
            leaders,
            about,
        }
    }

    /// Parse TOML content and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, KbError> {
        let base: Self = toml::from_str(content)?;
        base.validate()?;
        Ok(base)
    }

    /// Parse JSON content and validate it.
    pub fn from_json_str(content: &str) -> Result<Self, KbError> {
        let base: Self = serde_json::from_str(content)?;
        base.validate()?;
        Ok(base)
    }

    /// All services, in authored order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// The leadership roster, in authored order.
    pub fn leaders(&self) -> &[Leader] {
        &self.leaders
    }

    /// About-page facts.
    pub fn about(&self) -> &AboutFacts {
        &self.about
    }

    /// Check the uniqueness invariants: service titles, leader names, and
    /// value titles must each be unique within their collection.
    pub fn validate(&self) -> Result<(), KbError> {
        let mut titles = HashSet::new();
        for service in &self.services {
            if !titles.insert(service.title.to_lowercase()) {
                return Err(KbError::DuplicateService(service.title.clone()));
            }
        }

        let mut names = HashSet::new();
        for leader in &self.leaders {
            if !names.insert(leader.name.to_lowercase()) {
                return Err(KbError::DuplicateLeader(leader.name.clone()));
            }
        }

        let mut value_titles = HashSet::new();
        for value in &self.about.values {
            if !value_titles.insert(value.title.to_lowercase()) {
                return Err(KbError::DuplicateValue(value.title.clone()));
            }
        }

        Ok(())
    }

    /// Demonstration content for AK Tech Hub, used by the widget and tests
    /// when no authored content file is supplied.
    pub fn sample() -> Self {
        Self::new(
            vec![
                Service::new(
                    "web-dev",
                    "Web Development",
                    "Modern, responsive web applications built with current frameworks and production-grade practices.",
                    "Code",
                ),
                Service::new(
                    "cloud",
                    "Cloud Solutions",
                    "Scalable cloud architecture, migration, and managed infrastructure for growing teams.",
                    "Cloud",
                ),
                Service::new(
                    "training",
                    "Tech Training",
                    "Hands-on technology courses and corporate upskilling programs led by industry practitioners.",
                    "GraduationCap",
                ),
                Service::new(
                    "security",
                    "Cybersecurity",
                    "Security audits, penetration testing, and hardening for applications and infrastructure.",
                    "Shield",
                ),
                Service::new(
                    "data",
                    "Data Analytics",
                    "Turning raw data into dashboards, insight, and decision support.",
                    "BarChart",
                ),
            ],
            vec![
                Leader::new(
                    "Alex Kim",
                    "CEO",
                    "Alex founded AK Tech Hub to close the gap between classroom theory and production engineering, and has led the company since day one.",
                ),
                Leader::new(
                    "Priya Sharma",
                    "CTO",
                    "Priya oversees engineering and curriculum, bringing fifteen years of experience building large-scale distributed systems.",
                ),
                Leader::new(
                    "Marcus Webb",
                    "Head of Training",
                    "Marcus designs the hands-on course catalog and mentors the instructor team.",
                ),
            ],
            AboutFacts::new(
                "Founded in 2015 in a single classroom, AK Tech Hub has grown into a full-service technology education company serving students and businesses across the region.",
                vec![
                    CompanyValue::new("Integrity", "Honest guidance and transparent pricing in everything we do."),
                    CompanyValue::new("Innovation", "Constant curiosity about better tools and better ways to teach."),
                    CompanyValue::new("Community", "Technology education that lifts the whole neighborhood."),
                ],
            ),
        )
    }
}
