//! Catalog entries - the record types the knowledge base is built from.

mod about;
mod leader;
mod service;

pub use about::*;
pub use leader::*;
pub use service::*;
