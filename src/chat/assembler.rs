//! Frame assembly for the chat event stream.
//!
//! The service sends newline-delimited frames. Lines starting with
//! `data: ` carry a JSON completion chunk whose
//! `choices[0].delta.content` is the next fragment of the reply, and
//! `data: [DONE]` ends the stream. Comment (`:`) lines, blank lines,
//! and any other line are skipped.
use serde_json::Value;

pub const DATA_PREFIX: &str = "data: ";
pub const SENTINEL: &str = "[DONE]";
const DELTA_POINTER: &str = "/choices/0/delta/content";

/// How a single frame is interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Comment, blank, or non-data line
    Ignored,
    Sentinel,
    Delta(String),
    /// A record without any content e.g. a role or finish chunk
    NoDelta,
    /// The payload didn't parse so it might still be arriving
    Incomplete,
}

/// Classifies one frame with the line feed and optional carriage
/// return already removed.
pub fn classify_line(line: &str) -> Line {
    if line.starts_with(':') || line.trim().is_empty() {
        return Line::Ignored;
    }
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Line::Ignored;
    };

    let payload = payload.trim();
    if payload == SENTINEL {
        return Line::Sentinel;
    }
    // Data can sometimes be empty. There's nothing to wait for.
    if payload.is_empty() {
        return Line::NoDelta;
    }

    match serde_json::from_str::<Value>(payload) {
        Ok(record) => match extract_delta(&record) {
            Some(delta) => Line::Delta(delta.to_string()),
            None => Line::NoDelta,
        },
        Err(_) => Line::Incomplete,
    }
}

/// Looks up the content delta of a completion chunk. Any other shape
/// means there is no delta.
pub fn extract_delta(record: &Value) -> Option<&str> {
    record
        .pointer(DELTA_POINTER)
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
}

/// Buffers decoded text and turns complete frames into deltas.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    buffer: String,
    done: bool,
}

impl FrameAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends decoded text. Text arriving after the sentinel is dropped.
    pub fn push_text(&mut self, text: &str) {
        if !self.done {
            self.buffer.push_str(text);
        }
    }

    /// True once the sentinel frame has been processed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Buffered text that hasn't been consumed as a frame yet.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Returns the next delta, or `None` when the buffer has no more
    /// complete frames, the sentinel was reached, or a frame failed to
    /// parse and was put back to wait for more text.
    ///
    /// NOTE: Putting a frame back only helps if more bytes for the
    /// same line are still to come. A payload that contains a literal
    /// newline never parses and stalls the stream until it ends.
    pub fn next_delta(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        while let Some(newline) = self.buffer.find('\n') {
            let mut line: String = self.buffer.drain(..=newline).collect();
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }

            match classify_line(&line) {
                Line::Ignored | Line::NoDelta => continue,
                Line::Delta(delta) => return Some(delta),
                Line::Sentinel => {
                    self.done = true;
                    self.buffer.clear();
                    return None;
                }
                Line::Incomplete => {
                    tracing::debug!("Incomplete frame, waiting for more data: {}", line);
                    line.push('\n');
                    self.buffer.insert_str(0, &line);
                    return None;
                }
            }
        }

        None
    }
}
