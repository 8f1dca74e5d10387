//! Teams message cards.
//!
//! This module provides:
//! - The serialized card payload ([`MessageCard`], [`PotentialAction`])
//! - The event-to-card mapping ([`CardBuilder`])

mod builder;
mod message;

#[cfg(test)]
mod builder_tests;

pub use builder::{CardBuilder, MAX_TEXT_CHARS, permalink};
pub use message::{MessageCard, PotentialAction};
