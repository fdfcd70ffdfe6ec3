//! Shared test utilities for integration tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;

use biomart::transport::{Transport, TransportError};
use biomart::Dataset;

/// Transport double: replays canned responses in order and records every
/// call's parameters
pub struct MockTransport {
    responses: RefCell<VecDeque<Vec<u8>>>,
    calls: RefCell<Vec<Vec<(String, String)>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Queue a response for the next call
    pub fn push_response(&self, bytes: impl Into<Vec<u8>>) {
        self.responses.borrow_mut().push_back(bytes.into());
    }

    /// Drop any queued responses so the next call fails
    pub fn clear_responses(&self) {
        self.responses.borrow_mut().clear();
    }

    /// Parameters of every call made so far, oldest first
    pub fn calls(&self) -> Vec<Vec<(String, String)>> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for MockTransport {
    fn get(&self, params: &[(&str, &str)]) -> Result<Vec<u8>, TransportError> {
        self.calls.borrow_mut().push(
            params
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        );
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no canned response queued".to_string()))
    }
}

/// Load a test fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Vec<u8> {
    let path = format!("tests/test_data/{}", name);
    fs::read(&path).unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Returns the default dataset for testing, with the configuration fixture
/// queued as the first transport response
pub fn mouse_dataset() -> Dataset<MockTransport> {
    let transport = MockTransport::new();
    transport.push_response(load_fixture("mmusculus_config.xml"));
    Dataset::new(
        "mmusculus_gene_ensembl",
        "Mus musculus genes (GRCm38.p4)",
        transport,
    )
}
