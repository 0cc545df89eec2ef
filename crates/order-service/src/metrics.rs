//! # Request Metrics
//!
//! One Prometheus counter series per order endpoint, counting every request whether it
//! succeeds or not:
//!
//! ```text
//! api_requests_total{method="POST",path="/orders"}
//! api_requests_total{method="GET",path="/orders/{id}"}
//! ...
//! ```
//!
//! [`OrderLifecycle`](crate::lifecycle::OrderLifecycle) records each operation as it starts.
//! [`Metrics::render`] produces the text exposition format for a scrape or a log line.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// A lifecycle operation and the endpoint it is served on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Get,
    List,
    Cancel,
    Complete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Get,
        Operation::List,
        Operation::Cancel,
        Operation::Complete,
    ];

    pub fn method(self) -> &'static str {
        match self {
            Operation::Create => "POST",
            Operation::Get | Operation::List => "GET",
            Operation::Cancel => "DELETE",
            Operation::Complete => "PUT",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Operation::Create | Operation::List => "/orders",
            Operation::Get => "/orders/{id}",
            Operation::Cancel => "/orders/{id}/cancel",
            Operation::Complete => "/orders/{id}/complete",
        }
    }
}

/// Registry and counters for the order endpoints. Clones share the same counters.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    api_requests: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let api_requests = IntCounterVec::new(
            Opts::new("api_requests_total", "Number of requests per endpoint"),
            &["method", "path"],
        )?;
        registry.register(Box::new(api_requests.clone()))?;

        // Every endpoint shows up in a scrape, at zero until first used
        for operation in Operation::ALL {
            api_requests.with_label_values(&[operation.method(), operation.path()]);
        }

        Ok(Self {
            registry,
            api_requests,
        })
    }

    /// Get the Prometheus registry for exposing metrics
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_request(&self, operation: Operation) {
        self.api_requests
            .with_label_values(&[operation.method(), operation.path()])
            .inc();
    }

    /// Requests recorded so far for `operation`.
    pub fn requests(&self, operation: Operation) -> u64 {
        self.api_requests
            .with_label_values(&[operation.method(), operation.path()])
            .get()
    }

    /// All registered metrics in the Prometheus text format.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for Metrics {
    // Registration only fails for malformed or duplicate descriptors; the names above are
    // fixed and the registry is fresh.
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_endpoint_starts_at_zero() {
        let metrics = Metrics::new().unwrap();
        for operation in Operation::ALL {
            assert_eq!(metrics.requests(operation), 0);
        }
        assert_eq!(metrics.registry().gather().len(), 1);
    }

    #[test]
    fn test_record_request() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request(Operation::Cancel);
        metrics.record_request(Operation::Cancel);
        metrics.record_request(Operation::List);

        assert_eq!(metrics.requests(Operation::Cancel), 2);
        assert_eq!(metrics.requests(Operation::List), 1);
        assert_eq!(metrics.requests(Operation::Get), 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new().unwrap();
        metrics.clone().record_request(Operation::Create);
        assert_eq!(metrics.requests(Operation::Create), 1);
    }

    #[test]
    fn test_render_text_format() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request(Operation::Complete);

        let text = metrics.render().unwrap();

        assert!(text.contains("# TYPE api_requests_total counter"));
        assert!(text.contains(r#"api_requests_total{method="PUT",path="/orders/{id}/complete"} 1"#));
    }
}
