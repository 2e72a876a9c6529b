use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::domain::purge::Message;
use crate::metrics::Metrics;

use super::errors::DispatchError;
use super::router::Route;
use super::workflow::Workflow;

// ============================================================================
// Application - one inbound message per call
// ============================================================================
//
// Flow: Message → Workflow → Route → sink
//
// Produced messages are rendered only. A command derived from an event is
// never executed here.
//
// ============================================================================

pub struct Application<W: Write> {
    workflow: Workflow,
    route: Route,
    sink: W,
    metrics: Option<Arc<Metrics>>,
}

impl<W: Write> Application<W> {
    pub fn new(workflow: Workflow, route: Route, sink: W) -> Self {
        Self {
            workflow,
            route,
            sink,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Dispatch, render, and write the result as a single line.
    pub fn handle(&mut self, message: &Message) -> Result<(), DispatchError> {
        let correlation_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "dispatch",
            correlation_id = %correlation_id,
            kind = message.kind(),
            message_type = message.message_type(),
        );
        let _entered = span.enter();

        if tracing::enabled!(tracing::Level::DEBUG) {
            let payload = serde_json::to_string(message).unwrap_or_default();
            tracing::debug!(payload = %payload, "Dispatching message");
        }

        let started = Instant::now();
        let produced = match self.workflow.handle(message) {
            Ok(produced) => produced,
            Err(e) => {
                tracing::warn!(error = %e, "Message rejected");
                if let Some(metrics) = &self.metrics {
                    metrics.record_unsupported(message.message_type());
                }
                return Err(e);
            }
        };

        let rendered = (self.route)(&produced);

        if let Some(metrics) = &self.metrics {
            metrics.record_handled(
                message.kind(),
                message.message_type(),
                started.elapsed().as_secs_f64(),
            );
            for m in &produced {
                metrics.record_emitted(m.message_type());
            }
        }

        tracing::debug!(produced = produced.len(), "Message handled");

        self.sink.write_all(format!("{}\n", rendered).as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn sink(&self) -> &W {
        &self.sink
    }
}
