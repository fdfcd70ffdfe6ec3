//! The blocking transport capability and its HTTP implementation
//!
//! The query core only needs `get(params) -> bytes`; everything about how
//! those bytes move (timeouts, proxies, retries) belongs to the transport
//! implementation, not to the core.

mod error;

pub use error::TransportError;

use url::Url;

/// Service endpoint of the public Ensembl mart
pub const DEFAULT_SERVICE_URL: &str = "http://www.ensembl.org/biomart/martservice";

/// Synchronous `get(params) -> bytes` capability
///
/// Implementations block the caller until a complete response is available
/// and surface any failure as a [`TransportError`]. The core performs no
/// retries; a failed call propagates immediately.
pub trait Transport {
    fn get(&self, params: &[(&str, &str)]) -> Result<Vec<u8>, TransportError>;
}

/// HTTP transport against one mart service URL
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: Url,
}

impl HttpTransport {
    /// Build a transport for the given service URL
    pub fn new(url: &str) -> Result<Self, TransportError> {
        let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl {
            url: url.to_string(),
            source: e,
        })?;
        Ok(Self {
            client: reqwest::blocking::Client::new(),
            url,
        })
    }

    /// The service URL this transport talks to
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn get(&self, params: &[(&str, &str)]) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(self.url.clone())
            .query(params)
            .send()?
            .error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_service_url() {
        let err = HttpTransport::new("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }

    #[test]
    fn test_default_service_url_parses() {
        let transport = HttpTransport::new(DEFAULT_SERVICE_URL).unwrap();
        assert_eq!(transport.url().host_str(), Some("www.ensembl.org"));
    }
}
