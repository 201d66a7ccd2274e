use crate::foundation::error::CardResult;
use crate::mount::sink::NodeSink;
use crate::props::person::Person;
use crate::render::node::{DisplayNode, OutputFormat};
use crate::render::sentence::render;

/// Page root: an ordered list of rendered nodes handed to a sink in one pass.
#[derive(Clone, Debug, Default)]
pub struct Root {
    children: Vec<DisplayNode>,
}

impl Root {
    /// Create an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `person` and append the card.
    pub fn person(mut self, person: &Person) -> Self {
        self.children.push(render(person));
        self
    }

    /// Append an already rendered node.
    pub fn node(mut self, node: DisplayNode) -> Self {
        self.children.push(node);
        self
    }

    /// Mounted nodes in order.
    pub fn children(&self) -> &[DisplayNode] {
        &self.children
    }

    /// Push every child into `sink`, bracketed by `begin` and `end`.
    #[tracing::instrument(skip_all, fields(nodes = self.children.len()))]
    pub fn mount(&self, sink: &mut dyn NodeSink, format: OutputFormat) -> CardResult<()> {
        sink.begin(format)?;
        for node in &self.children {
            sink.push_node(node)?;
        }
        sink.end()?;
        tracing::info!("mounted {} node(s)", self.children.len());
        Ok(())
    }
}

impl FromIterator<DisplayNode> for Root {
    fn from_iter<I: IntoIterator<Item = DisplayNode>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}
