use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for the dispatch workflow
// ============================================================================
//
// Tracks:
// - Messages accepted by the application (by kind and variant)
// - Messages produced by handlers
// - Messages rejected as unsupported
// - Time spent dispatching and rendering
//
// All metrics are registered with Prometheus and served via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub messages_handled: IntCounterVec,
    pub messages_emitted: IntCounterVec,
    pub messages_unsupported: IntCounterVec,
    pub dispatch_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let messages_handled = IntCounterVec::new(
            Opts::new("messages_handled_total", "Total inbound messages dispatched"),
            &["kind", "message_type"],
        )?;
        registry.register(Box::new(messages_handled.clone()))?;

        let messages_emitted = IntCounterVec::new(
            Opts::new("messages_emitted_total", "Total messages produced by handlers"),
            &["message_type"],
        )?;
        registry.register(Box::new(messages_emitted.clone()))?;

        let messages_unsupported = IntCounterVec::new(
            Opts::new(
                "messages_unsupported_total",
                "Total inbound messages with no registered handler",
            ),
            &["message_type"],
        )?;
        registry.register(Box::new(messages_unsupported.clone()))?;

        let dispatch_duration = HistogramVec::new(
            HistogramOpts::new("dispatch_duration_seconds", "Dispatch and render duration")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),
            &["message_type"],
        )?;
        registry.register(Box::new(dispatch_duration.clone()))?;

        Ok(Self {
            registry,
            messages_handled,
            messages_emitted,
            messages_unsupported,
            dispatch_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_handled(&self, kind: &str, message_type: &str, duration_secs: f64) {
        self.messages_handled.with_label_values(&[kind, message_type]).inc();
        self.dispatch_duration.with_label_values(&[message_type]).observe(duration_secs);
    }

    pub fn record_emitted(&self, message_type: &str) {
        self.messages_emitted.with_label_values(&[message_type]).inc();
    }

    pub fn record_unsupported(&self, message_type: &str) {
        self.messages_unsupported.with_label_values(&[message_type]).inc();
    }
}
