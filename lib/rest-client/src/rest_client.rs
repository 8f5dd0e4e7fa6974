//! The REST client facade.
//!
//! [`RestClient`] wraps any [`Transport`] and implements [`RestOperations`]
//! by chaining the core steps: send, [`validate`], [`read_body`], then
//! [`bind_object`] or [`bind_list`]. The first failing step ends the
//! operation.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{
    ClientConfig, Error, HyperTransport, Request, Response, RestOperations, Result, Transport,
    TransportError, bind_list, bind_object, read_body, validate,
};

/// Blocking REST client over a [`Transport`].
///
/// # Example
///
/// ```ignore
/// use rest_client::prelude::*;
///
/// let client = RestClient::new(HyperTransport::new()?);
///
/// let url = Url::parse("https://api.example.com/items/1")?;
/// let item: Item = client.fetch_object(Request::builder(Method::GET, url).build())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RestClient<T> {
    transport: T,
}

impl<T> RestClient<T> {
    /// Create a client sending through `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Unwrap the underlying transport.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl RestClient<HyperTransport> {
    /// Create a client over a [`HyperTransport`] built from `config`.
    pub fn with_config(config: ClientConfig) -> std::result::Result<Self, TransportError> {
        HyperTransport::with_config(config).map(Self::new)
    }
}

impl<T: Transport> RestClient<T> {
    /// Send the request and validate the response status.
    ///
    /// A response handed back from here never carries a 4xx/5xx status.
    fn send_request(&self, request: Request) -> Result<Response> {
        trace!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.transport.send(request).map_err(Error::Send)?;

        if let Err(err) = validate(&response) {
            debug!(status = response.status(), error = %err, "response rejected");
            return Err(err);
        }

        trace!(status = response.status(), "response accepted");
        Ok(response)
    }

    fn send_request_for_string(&self, request: Request) -> Result<String> {
        let response = self.send_request(request)?;
        read_body(response)
    }
}

impl<T: Transport> RestOperations for RestClient<T> {
    fn fetch_object<R: DeserializeOwned>(&self, request: Request) -> Result<R> {
        bind_object(&self.send_request_for_string(request)?)
    }

    fn fetch_list<R: DeserializeOwned>(&self, request: Request) -> Result<Vec<R>> {
        bind_list(&self.send_request_for_string(request)?)
    }

    fn execute(&self, request: Request) -> Result<()> {
        self.send_request(request).map(drop)
    }

    fn execute_for_string(&self, request: Request) -> Result<String> {
        self.send_request_for_string(request)
    }
}
