//! # Assistant Core (AK-AI)
//!
//! The conversational context engine behind the floating assistant widget.
//! This crate reads from `company_kb`, tracks the active conversation
//! context, classifies free-text input against a fixed rule order, and
//! produces both a reply and the quick-reply suggestions for the new context.
//!
//! ## Core Components
//!
//! - **context**: The conversation-mode state machine
//! - **classifier**: Keyword rules mapping input to an [`Intent`]
//! - **composer**: Templates turning an intent into reply text
//! - **suggestions**: Quick-reply labels for the active context
//! - **session**: The message log and turn processing with simulated latency
//!
//! ## Design Philosophy
//!
//! - **Rule-Driven**: Matching is case-insensitive substring search in a
//!   fixed priority order; the order is the behavior, not an optimization
//! - **Call-Driven**: The engine never spawns threads or timers; the UI
//!   drives reply delivery through [`Session::poll`]
//! - **Total**: Every input yields exactly one reply and one next context;
//!   missing content degrades to generic sentences instead of failing

pub mod classifier;
pub mod composer;
pub mod context;
pub mod session;
pub mod suggestions;

pub use classifier::*;
pub use composer::*;
pub use context::*;
pub use session::*;
pub use suggestions::{BACK_TO_MAIN_MENU, CANCEL_BIO_GENERATION};
