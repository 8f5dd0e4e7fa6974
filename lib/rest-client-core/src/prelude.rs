//! Prelude module for convenient imports.
//!
//! ```ignore
//! use rest_client_core::prelude::*;
//! ```

pub use crate::{
    Body, Error, Method, Request, RequestBuilder, Response, RestOperations, Result, StatusSeries,
    Transport, TransportError,
};
