//! # Company KB
//!
//! The "Content Bible" crate - the read-only knowledge base behind the AK
//! assistant. It holds the service catalog, the leadership roster, and the
//! about-page facts, and it is the single source of truth for that content.
//! No dialogue logic lives here.

pub mod catalog;
pub mod store;

pub use catalog::*;
pub use store::*;
