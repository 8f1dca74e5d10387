//! Webhook layer for delivering cards to Teams.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-attempt delivery with outcome reporting ([`Dispatcher`], [`DeliveryOutcome`])

mod client;
mod dispatcher;
mod error;
mod http;


pub use client::ReqwestClient;
pub use dispatcher::{DeliveryOutcome, Dispatcher};
pub use error::{DispatchError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
