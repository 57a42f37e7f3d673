//! Request sources and transcript sinks.
//!
//! The core is agnostic to how requests arrive and where transcripts go;
//! both integration points are injectable rather than hardcoded.

use std::collections::VecDeque;
use std::io::Write;

use crate::error::PipelineError;

/// Supplies the batch of citizen requests to drive.
pub trait RequestSource {
    /// The next request, or `None` when the batch is exhausted.
    fn next_request(&mut self) -> Option<String>;
}

/// Vec-backed request source.
pub struct StaticRequests {
    queue: VecDeque<String>,
}

impl StaticRequests {
    pub fn new<I, S>(requests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: requests.into_iter().map(Into::into).collect(),
        }
    }
}

impl RequestSource for StaticRequests {
    fn next_request(&mut self) -> Option<String> {
        self.queue.pop_front()
    }
}

/// Receives the per-request transcript and failure diagnostics.
pub trait TranscriptSink {
    /// A new citizen request is about to run.
    fn begin_request(&mut self, request: &str);
    /// One responder said something.
    fn line(&mut self, speaker: &str, content: &str);
    /// The request failed; the batch continues.
    fn failure(&mut self, request: &str, error: &PipelineError);
}

/// Writes the transcript in console form: `Citizen: ...` / `<name>: ...`.
///
/// Write errors are swallowed; the transcript is best-effort output, not
/// pipeline state.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptSink for ConsoleSink<W> {
    fn begin_request(&mut self, request: &str) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Citizen: {}", request);
    }

    fn line(&mut self, speaker: &str, content: &str) {
        let _ = writeln!(self.out, "{}: {}", speaker, content);
    }

    fn failure(&mut self, request: &str, error: &PipelineError) {
        let _ = writeln!(self.out, "[error] request failed: {} ({})", error, request);
    }
}

/// Records transcript lines in memory; useful in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub requests: Vec<String>,
    pub lines: Vec<(String, String)>,
    pub failures: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speakers in emission order.
    pub fn speakers(&self) -> Vec<&str> {
        self.lines.iter().map(|(speaker, _)| speaker.as_str()).collect()
    }
}

impl TranscriptSink for RecordingSink {
    fn begin_request(&mut self, request: &str) {
        self.requests.push(request.to_string());
    }

    fn line(&mut self, speaker: &str, content: &str) {
        self.lines.push((speaker.to_string(), content.to_string()));
    }

    fn failure(&mut self, _request: &str, error: &PipelineError) {
        self.failures.push(error.to_string());
    }
}
