//! Client traits.
//!
//! - [`Transport`] - Low-level, blocking request execution
//! - [`RestOperations`] - The four operations offered to callers
//!
//! Code that talks to a REST API should depend on [`RestOperations`] so it
//! can be handed a stub in tests.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{Request, Response, Result, TransportError};

/// Blocking HTTP transport.
///
/// A transport turns a prepared [`Request`] into a [`Response`] whose status
/// has not been checked yet. Connection handling, TLS and timeouts are its
/// business; it must not read the body.
pub trait Transport: Send + Sync {
    /// Send `request` and return the response as received.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Requests that cannot be put on the wire
    fn send(&self, request: Request) -> std::result::Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: Request) -> std::result::Result<Response, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: Request) -> std::result::Result<Response, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: Request) -> std::result::Result<Response, TransportError> {
        (**self).send(request)
    }
}

/// Operations of a REST client.
///
/// Every operation sends the request and validates the response status
/// before doing anything else, so a 4xx/5xx response never reaches the body
/// reader or the JSON binder.
///
/// # Example
///
/// ```ignore
/// use rest_client_core::{Request, RestOperations, Result};
///
/// fn load_items(client: &impl RestOperations, request: Request) -> Result<Vec<Item>> {
///     client.fetch_list(request)
/// }
/// ```
pub trait RestOperations {
    /// Send `request` and bind the response body to a single `T`.
    fn fetch_object<T: DeserializeOwned>(&self, request: Request) -> Result<T>;

    /// Send `request` and bind the response body, a JSON array, to a `Vec<T>`.
    fn fetch_list<T: DeserializeOwned>(&self, request: Request) -> Result<Vec<T>>;

    /// Send `request` and only check the response status; the body is not read.
    fn execute(&self, request: Request) -> Result<()>;

    /// Send `request` and return the response body as text.
    fn execute_for_string(&self, request: Request) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{Body, Error, Method, bind_list, bind_object};

    /// Stand-in that answers every request with the same JSON document.
    struct Canned(&'static str);

    impl RestOperations for Canned {
        fn fetch_object<T: DeserializeOwned>(&self, _request: Request) -> Result<T> {
            bind_object(self.0)
        }

        fn fetch_list<T: DeserializeOwned>(&self, _request: Request) -> Result<Vec<T>> {
            bind_list(self.0)
        }

        fn execute(&self, _request: Request) -> Result<()> {
            Ok(())
        }

        fn execute_for_string(&self, _request: Request) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Teapot;

    impl Transport for Teapot {
        fn send(&self, _request: Request) -> std::result::Result<Response, TransportError> {
            Ok(Response::new(418, "I'm a teapot", HashMap::new(), Body::empty()))
        }
    }

    fn request() -> Request {
        let url = url::Url::parse("https://api.example.com/ids").expect("valid URL");
        Request::builder(Method::GET, url).build()
    }

    fn count_ids(client: &impl RestOperations) -> Result<usize> {
        client.fetch_list::<u32>(request()).map(|ids| ids.len())
    }

    #[test]
    fn operations_can_be_stubbed() {
        let client = Canned("[1, 2, 3]");
        assert_eq!(count_ids(&client).expect("ids"), 3);
        assert_eq!(client.execute_for_string(request()).expect("text"), "[1, 2, 3]");

        let err = client.fetch_object::<u32>(request()).expect_err("not a number");
        assert!(matches!(err, Error::JsonObject { .. }));
    }

    #[test]
    fn transport_through_pointers() {
        fn status_of(transport: impl Transport) -> u16 {
            transport.send(request()).expect("response").status()
        }

        assert_eq!(status_of(&Teapot), 418);
        assert_eq!(status_of(Box::new(Teapot) as Box<dyn Transport>), 418);
        assert_eq!(status_of(Arc::new(Teapot)), 418);
    }
}
