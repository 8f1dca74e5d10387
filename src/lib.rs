//! seq-teams: Seq to Microsoft Teams notification connector
//!
//! A library for turning Seq log events into Teams message cards and
//! delivering them to an incoming webhook with best-effort, single-attempt
//! semantics.

pub mod card;
pub mod config;
pub mod connector;
pub mod event;
pub mod sink;
pub mod webhook;
