//! Customer API Client
//!
//! Reqwest-backed access to the customer records endpoint. Owns transport
//! details only: one GET, status mapping and JSON decoding.

use std::future::Future;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use snafu::ResultExt;

use crate::domain::Customer;
use crate::error::{DecodeSnafu, RequestSnafu, Result, StatusSnafu};

/// Anything that can produce the full customer collection
pub trait CustomerSource: Send + Sync + 'static {
    /// Fetch every customer record, in backend order
    fn fetch_customers(&self) -> impl Future<Output = Result<Vec<Customer>>> + Send;
}

/// HTTP client for the records endpoint
#[derive(Clone)]
pub struct CustomerClient {
    client: Client,
    endpoint: Url,
}

impl CustomerClient {
    /// Create a client with default reqwest settings
    ///
    /// No request timeout is configured; a silent endpoint keeps the
    /// request pending.
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = Client::builder().build().context(RequestSnafu)?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// The records endpoint this client queries
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CustomerSource for CustomerClient {
    async fn fetch_customers(&self) -> Result<Vec<Customer>> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching customers");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context(RequestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            return StatusSnafu {
                status: status.as_u16(),
            }
            .fail();
        }

        let body = response.bytes().await.context(RequestSnafu)?;
        decode_customers(&body)
    }
}

impl std::fmt::Debug for CustomerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

/// Decode a JSON array of customer objects
pub fn decode_customers(body: &[u8]) -> Result<Vec<Customer>> {
    serde_json::from_slice(body).context(DecodeSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP response and return the records URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        Url::parse(&format!("http://{addr}/users")).expect("stub url")
    }

    fn test_client(endpoint: Url) -> CustomerClient {
        let client = Client::builder()
            .no_proxy()
            .build()
            .expect("build test client");
        CustomerClient::with_client(client, endpoint)
    }

    #[test]
    fn test_decode_customers_keeps_order() {
        let body = br#"[
            {"id": 1, "name": "Alice Smith", "email": "alice@x.com"},
            {"id": 2, "name": "Bob Jones", "email": "bob@y.com"}
        ]"#;
        let customers = decode_customers(body).expect("valid body");
        let ids: Vec<_> = customers.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_decode_customers_rejects_object() {
        let result = decode_customers(br#"{"detail": "Not Found"}"#);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[tokio::test]
    async fn test_fetch_customers_success() {
        let endpoint = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"id": 1, "first_name": "Alice", "email": "alice@example.com"}]"#,
        )
        .await;

        let customers = test_client(endpoint)
            .fetch_customers()
            .await
            .expect("fetch succeeds");

        assert_eq!(customers, vec![Customer::new(1, "Alice", "alice@example.com")]);
    }

    #[tokio::test]
    async fn test_fetch_customers_maps_status() {
        let endpoint = serve_once("HTTP/1.1 404 Not Found", r#"{"detail": "Not Found"}"#).await;

        let result = test_client(endpoint).fetch_customers().await;

        assert!(matches!(result, Err(Error::Status { status: 404 })));
    }

    #[tokio::test]
    async fn test_fetch_customers_maps_decode_error() {
        let endpoint = serve_once("HTTP/1.1 200 OK", "not json").await;

        let result = test_client(endpoint).fetch_customers().await;

        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[tokio::test]
    async fn test_fetch_customers_maps_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind probe");
        let addr = listener.local_addr().expect("probe address");
        drop(listener);

        let endpoint = Url::parse(&format!("http://{addr}/users")).expect("probe url");
        let result = test_client(endpoint).fetch_customers().await;

        assert!(matches!(result, Err(Error::Request { .. })));
    }
}
