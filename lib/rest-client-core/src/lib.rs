//! Core types and pipeline steps for the rest-client blocking HTTP helper.
//!
//! This crate provides the transport-agnostic half of rest-client:
//! - [`Request`] and [`RequestBuilder`] - Prepared HTTP request descriptor
//! - [`Response`] and [`Body`] - Response descriptor with a read-once body
//! - [`StatusSeries`] - Status code classification by leading digit
//! - [`Error`], [`TransportError`] and [`Result`] - Error handling
//! - [`Transport`] - Trait for sending a [`Request`]
//! - [`RestOperations`] - The four client operations
//! - [`validate`], [`read_body`], [`bind_object`], [`bind_list`] - The
//!   steps every operation is composed of

mod client;
mod content;
mod error;
mod json;
pub mod prelude;
mod request;
mod response;
mod status;
mod validate;

pub use client::{RestOperations, Transport};
pub use content::read_body;
pub use error::{Error, InvalidStatusCode, Result, TransportError};
pub use json::{bind_list, bind_object};
pub use request::{Request, RequestBuilder};
pub use response::{Body, Response};
pub use status::StatusSeries;
pub use validate::validate;

// Re-export http crate types for methods, status codes and headers
pub use http::{Method, StatusCode, header};
