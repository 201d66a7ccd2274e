use crate::foundation::error::{CardError, CardResult};
use crate::render::node::{DisplayNode, OutputFormat};
use std::io::Write;

/// Sink contract for consuming mounted nodes in document order.
pub trait NodeSink {
    /// Called once before any nodes are pushed.
    fn begin(&mut self, format: OutputFormat) -> CardResult<()>;
    /// Push one node, in document order.
    fn push_node(&mut self, node: &DisplayNode) -> CardResult<()>;
    /// Called once after the last node is pushed.
    fn end(&mut self) -> CardResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    format: Option<OutputFormat>,
    nodes: Vec<DisplayNode>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format captured in `begin`, if any.
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// Borrow the captured nodes.
    pub fn nodes(&self) -> &[DisplayNode] {
        &self.nodes
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl NodeSink for InMemorySink {
    fn begin(&mut self, format: OutputFormat) -> CardResult<()> {
        self.format = Some(format);
        self.nodes.clear();
        self.finished = false;
        Ok(())
    }

    fn push_node(&mut self, node: &DisplayNode) -> CardResult<()> {
        self.nodes.push(node.clone());
        Ok(())
    }

    fn end(&mut self) -> CardResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Sink that serializes each node onto its own line of a writer.
pub struct WriterSink<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            format: OutputFormat::default(),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NodeSink for WriterSink<W> {
    fn begin(&mut self, format: OutputFormat) -> CardResult<()> {
        self.format = format;
        Ok(())
    }

    fn push_node(&mut self, node: &DisplayNode) -> CardResult<()> {
        writeln!(self.out, "{}", node.serialize(self.format))
            .map_err(|e| CardError::Other(anyhow::Error::new(e).context("write node")))
    }

    fn end(&mut self) -> CardResult<()> {
        self.out
            .flush()
            .map_err(|e| CardError::Other(anyhow::Error::new(e).context("flush sink")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mount/sink.rs"]
mod tests;
