//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy glob
//! importing:
//!
//! ```ignore
//! use rest_client::prelude::*;
//! ```

pub use crate::{
    ClientConfig, Error, HyperTransport, LoggingTransport, Method, Request, RestClient,
    RestOperations, Result, Transport,
};

pub use serde::Deserialize;
pub use url::Url;
