//! Blocking transport on top of hyper-util.
//!
//! [`HyperTransport`] owns a small tokio runtime and blocks on it for every
//! call. The response body is not buffered: it is pulled frame by frame from
//! the connection as the caller reads it, and dropping it drops the stream.

use std::collections::HashMap;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Duration;

use bytes::{Buf, Bytes};
use http_body_util::{BodyExt, Full, combinators::UnsyncBoxBody};
use hyper::ext::ReasonPhrase;
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::{TokioExecutor, TokioTimer},
};
use tokio::runtime::Runtime;

use crate::{
    Body, ClientConfig, Request, Response, Transport, TransportError, connector::https_connector,
};

type HttpsClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

// ============================================================================
// Transport
// ============================================================================

/// Production [`Transport`] using hyper-util with connection pooling and TLS.
///
/// Calls block the current thread, so a `HyperTransport` must be used (and
/// dropped) outside of any async runtime.
///
/// # Example
///
/// ```ignore
/// use rest_client::{ClientConfig, HyperTransport};
/// use std::time::Duration;
///
/// let transport = HyperTransport::with_config(
///     ClientConfig::builder().timeout(Duration::from_secs(5)).build(),
/// )?;
/// ```
#[derive(Clone)]
pub struct HyperTransport {
    inner: HttpsClient,
    runtime: Arc<Runtime>,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a transport with default configuration.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a transport with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, TransportError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("rest-client-io")
            .enable_all()
            .build()?;

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .pool_timer(TokioTimer::new())
            .build(https_connector(&config));

        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
            config,
        })
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_hyper_request(
        request: Request,
    ) -> Result<http::Request<Full<Bytes>>, TransportError> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder().method(method).uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| TransportError::invalid_request(e.to_string()))
    }

    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Reason phrase as received, else the canonical one for the code.
    fn status_text(parts: &http::response::Parts) -> String {
        parts
            .extensions
            .get::<ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
            .or_else(|| parts.status.canonical_reason().map(str::to_string))
            .unwrap_or_default()
    }

    fn map_hyper_error(err: &hyper_util::client::legacy::Error) -> TransportError {
        if err.is_connect() && timed_out(err) {
            return TransportError::Timeout;
        }

        let msg = describe(err);
        let lowercase = msg.to_lowercase();

        if lowercase.contains("ssl")
            || lowercase.contains("tls")
            || lowercase.contains("certificate")
        {
            return TransportError::tls(msg);
        }

        TransportError::connection(msg)
    }
}

impl Transport for HyperTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        let hyper_request = Self::build_hyper_request(request)?;

        // Timers must be created inside the runtime context.
        let response = self
            .runtime
            .block_on(async {
                tokio::time::timeout(self.config.timeout, self.inner.request(hyper_request)).await
            })
            .map_err(|_| TransportError::Timeout)?
            .map_err(|e| Self::map_hyper_error(&e))?;

        let (parts, incoming) = response.into_parts();
        let status_text = Self::status_text(&parts);
        let headers = Self::extract_headers(&parts.headers);

        let body = StreamingBody {
            body: incoming.map_err(io::Error::other).boxed_unsync(),
            runtime: Arc::clone(&self.runtime),
            timeout: self.config.timeout,
            chunk: Bytes::new(),
            finished: false,
        };

        Ok(Response::new(
            parts.status.as_u16(),
            status_text,
            headers,
            Body::new(body),
        ))
    }
}

/// Render an error with its chain of causes.
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Whether a timeout sits anywhere in the error chain.
fn timed_out(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = Some(err);
    while let Some(cause) = source {
        if cause.is::<tokio::time::error::Elapsed>()
            || cause
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::TimedOut)
        {
            return true;
        }
        source = cause.source();
    }
    false
}

// ============================================================================
// Streaming body
// ============================================================================

/// Blocking reader over a hyper response body.
struct StreamingBody {
    body: UnsyncBoxBody<Bytes, io::Error>,
    runtime: Arc<Runtime>,
    timeout: Duration,
    chunk: Bytes,
    finished: bool,
}

impl Read for StreamingBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while !self.chunk.has_remaining() {
            if self.finished {
                return Ok(0);
            }

            let body = &mut self.body;
            let timeout = self.timeout;
            let frame = self
                .runtime
                .block_on(async move { tokio::time::timeout(timeout, body.frame()).await })
                .map_err(|_| {
                    io::Error::new(io::ErrorKind::TimedOut, "timed out reading response body")
                })?;

            match frame {
                None => self.finished = true,
                Some(frame) => {
                    // Trailers carry no content.
                    if let Ok(data) = frame?.into_data() {
                        self.chunk = data;
                    }
                }
            }
        }

        (&mut self.chunk).reader().read(buf)
    }
}

#[cfg(test)]
mod tests {
    use assert2::let_assert;

    use super::*;
    use crate::Method;

    #[test]
    fn transport_default() {
        let transport = HyperTransport::new().expect("transport");
        assert_eq!(transport.config().timeout, Duration::from_secs(30));
    }

    #[test]
    fn transport_with_config() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(60))
            .pool_idle_per_host(16)
            .build();
        let transport = HyperTransport::with_config(config).expect("transport");

        assert_eq!(transport.config().timeout, Duration::from_secs(60));
        assert_eq!(transport.config().pool_idle_per_host, 16);
    }

    #[test]
    fn transport_is_clone_and_debug() {
        let transport = HyperTransport::new().expect("transport");
        let cloned = transport.clone();
        let debug = format!("{cloned:?}");
        assert!(debug.contains("HyperTransport"));
    }

    #[test]
    fn invalid_header_is_rejected_before_sending() {
        let transport = HyperTransport::new().expect("transport");
        let url = url::Url::parse("http://127.0.0.1:9/").expect("valid URL");
        let request = Request::builder(Method::GET, url)
            .header("bad header", "value")
            .build();

        let_assert!(Err(TransportError::InvalidRequest(_)) = transport.send(request));
    }

    #[test]
    fn describe_includes_causes() {
        #[derive(Debug)]
        struct Wrapper(io::Error);

        impl std::fmt::Display for Wrapper {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("client error (Connect)")
            }
        }

        impl std::error::Error for Wrapper {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let err = Wrapper(io::Error::other("invalid peer certificate"));
        assert_eq!(describe(&err), "client error (Connect): invalid peer certificate");
    }

    #[test]
    fn status_text_prefers_received_reason() {
        let (mut parts, ()) = http::Response::builder()
            .status(404)
            .body(())
            .expect("response")
            .into_parts();
        assert_eq!(HyperTransport::status_text(&parts), "Not Found");

        parts
            .extensions
            .insert(ReasonPhrase::from_static(b"Item Missing"));
        assert_eq!(HyperTransport::status_text(&parts), "Item Missing");

        let (parts, ()) = http::Response::builder()
            .status(599)
            .body(())
            .expect("response")
            .into_parts();
        assert_eq!(HyperTransport::status_text(&parts), "");
    }

    #[test]
    fn timeouts_are_found_in_the_chain() {
        #[derive(Debug)]
        struct Connect(Box<dyn std::error::Error + Send + Sync>);

        impl std::fmt::Display for Connect {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("tcp connect error")
            }
        }

        impl std::error::Error for Connect {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&*self.0)
            }
        }

        let os_timeout = Connect(Box::new(io::Error::from(io::ErrorKind::TimedOut)));
        assert!(timed_out(&os_timeout));

        let refused = Connect(Box::new(io::Error::from(io::ErrorKind::ConnectionRefused)));
        assert!(!timed_out(&refused));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");
        let _guard = runtime.enter();
        let elapsed = runtime
            .block_on(tokio::time::timeout(
                Duration::ZERO,
                std::future::pending::<()>(),
            ))
            .expect_err("elapsed");
        assert!(timed_out(&Connect(Box::new(elapsed))));
    }

    #[test]
    fn streaming_body_reads_all_frames() {
        let runtime = Arc::new(
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime"),
        );
        let body = StreamingBody {
            body: Full::new(Bytes::from_static(b"hello world"))
                .map_err(|never: std::convert::Infallible| -> io::Error { match never {} })
                .boxed_unsync(),
            runtime,
            timeout: Duration::from_secs(1),
            chunk: Bytes::new(),
            finished: false,
        };

        let mut content = String::new();
        Body::new(body).read_to_string(&mut content).expect("read");
        assert_eq!(content, "hello world");
    }
}
