//! Routing and termination control loop for Frontdesk.
//!
//! Provides the responder capability interface, the responder registry, the
//! routing state machine, the termination predicate, and the conversation
//! loop controller that drives one citizen request at a time.

pub mod controller;
pub mod error;
pub mod io;
pub mod registry;
pub mod responder;
pub mod router;
pub mod termination;

pub use controller::{BatchSummary, PipelineController, RequestOutcome};
pub use error::{PipelineError, ResponderError};
pub use io::{ConsoleSink, RecordingSink, RequestSource, StaticRequests, TranscriptSink};
pub use registry::ResponderRegistry;
pub use responder::{MockResponder, Responder, ResponseBody, ResponseUnit};
pub use router::{next_responder, RoutingDecision};
pub use termination::interaction_complete;
