//! Blocking REST client helper.
//!
//! Send an already-built request, reject 4xx/5xx responses with a typed
//! error, and bind successful JSON bodies to your own types.
//!
//! # Example
//!
//! ```ignore
//! use rest_client::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Item {
//!     id: u64,
//!     name: String,
//! }
//!
//! let client = RestClient::with_config(ClientConfig::default())?;
//! let url = Url::parse("https://api.example.com/items")?;
//!
//! let items: Vec<Item> = client.fetch_list(Request::builder(Method::GET, url).build())?;
//! ```
//!
//! [`RestClient`] works with any [`Transport`]; [`HyperTransport`] is the
//! production one and [`LoggingTransport`] adds `tracing` events around
//! another transport.

mod config;
mod connector;
mod logging;
pub mod prelude;
mod rest_client;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use logging::{LogLevel, LoggingTransport};
pub use rest_client::RestClient;
pub use transport::HyperTransport;

// Re-export core types
pub use rest_client_core::{
    Body, Error, InvalidStatusCode, Request, RequestBuilder, Response, RestOperations, Result,
    StatusSeries, Transport, TransportError, bind_list, bind_object, read_body, validate,
};

// Re-export http types for methods, status codes and headers
pub use rest_client_core::{Method, StatusCode, header};

pub use url;
