//! Conversation loop controller.
//!
//! Drives exactly one citizen request to completion, then hands control back
//! with a clean slate for the next. Strictly sequential: one conversation at
//! a time, one responder invocation at a time, each awaited in full before
//! routing again.

use std::sync::Arc;

use tracing::{debug, info, warn};

use frontdesk_core::config::PipelineConfig;
use frontdesk_core::types::Conversation;

use crate::error::PipelineError;
use crate::io::{RequestSource, TranscriptSink};
use crate::registry::ResponderRegistry;
use crate::router::{next_responder, RoutingDecision};
use crate::termination::interaction_complete;

/// How one request's loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The termination predicate fired (audit marker observed).
    Complete,
    /// Routing reached a halting state before the predicate fired.
    Halted,
    /// The request was rejected or a responder invocation failed.
    Failed,
}

/// Totals for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub completed: usize,
    pub halted: usize,
    pub failed: usize,
}

/// Drives citizen requests through the responder pipeline.
pub struct PipelineController {
    registry: Arc<ResponderRegistry>,
    config: PipelineConfig,
}

impl PipelineController {
    pub fn new(registry: Arc<ResponderRegistry>, config: PipelineConfig) -> Self {
        Self { registry, config }
    }

    /// Drive one citizen request to completion.
    ///
    /// A fresh conversation is created here and dropped on every exit path,
    /// so each request starts from an empty history. Failures are contained
    /// to this request: they are reported through the sink and the outcome,
    /// never propagated.
    pub async fn run_request(
        &self,
        request: &str,
        sink: &mut dyn TranscriptSink,
    ) -> RequestOutcome {
        sink.begin_request(request);

        if let Err(e) = self.validate(request) {
            warn!(error = %e, "Request rejected");
            sink.failure(request, &e);
            return RequestOutcome::Failed;
        }

        let mut conversation = Conversation::new();
        conversation.history.append_user(request);
        debug!(conversation = %conversation.id, "Request accepted");

        let mut hops = 0usize;
        loop {
            let responder = match next_responder(&self.registry, &conversation.history) {
                RoutingDecision::Halt => {
                    debug!(conversation = %conversation.id, hops, "Routing halted");
                    return RequestOutcome::Halted;
                }
                RoutingDecision::Invoke(responder) => responder,
            };

            if hops >= self.config.max_hops {
                let e = PipelineError::HopLimitExceeded(self.config.max_hops);
                warn!(conversation = %conversation.id, error = %e, "Loop guard tripped");
                sink.failure(request, &e);
                return RequestOutcome::Failed;
            }
            hops += 1;

            debug!(conversation = %conversation.id, responder = %responder.name(), hop = hops, "Invoking responder");
            match responder.respond(&conversation.history).await {
                Ok(units) => {
                    for unit in units {
                        let content = unit.body.to_text();
                        conversation.history.append_responder(&unit.name, &content);
                        sink.line(&unit.name, &content);
                    }
                    if interaction_complete(&conversation.history) {
                        info!(conversation = %conversation.id, hops, "Interaction complete");
                        return RequestOutcome::Complete;
                    }
                }
                Err(source) => {
                    let e = PipelineError::Invocation {
                        name: responder.name().to_string(),
                        source,
                    };
                    warn!(conversation = %conversation.id, error = %e, "Responder invocation failed");
                    sink.failure(request, &e);
                    return RequestOutcome::Failed;
                }
            }
        }
    }

    /// Run every request the source yields.
    ///
    /// Per-request failures never stop the batch; every supplied request is
    /// attempted.
    pub async fn run_batch(
        &self,
        source: &mut dyn RequestSource,
        sink: &mut dyn TranscriptSink,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();
        while let Some(request) = source.next_request() {
            summary.total += 1;
            match self.run_request(&request, sink).await {
                RequestOutcome::Complete => summary.completed += 1,
                RequestOutcome::Halted => summary.halted += 1,
                RequestOutcome::Failed => summary.failed += 1,
            }
        }
        info!(
            total = summary.total,
            completed = summary.completed,
            halted = summary.halted,
            failed = summary.failed,
            "Batch finished"
        );
        summary
    }

    fn validate(&self, request: &str) -> Result<(), PipelineError> {
        if request.trim().is_empty() {
            return Err(PipelineError::EmptyRequest);
        }
        if request.len() > self.config.max_request_length {
            return Err(PipelineError::RequestTooLong(
                self.config.max_request_length,
            ));
        }
        Ok(())
    }
}
