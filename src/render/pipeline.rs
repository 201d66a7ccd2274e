use crate::foundation::error::CardResult;
use crate::render::node::{DisplayNode, OutputFormat};
use crate::render::sentence::render_resolved;
use crate::schema::validate::PropsSchema;
use serde_json::Value;

/// Options for rendering loose props.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOpts {
    /// Serialization used when nodes are written out.
    pub format: OutputFormat,
    /// Reject props with any shape warning instead of rendering them.
    pub strict: bool,
}

/// Shape-check `props` against the person schema and render a card.
///
/// Warnings are logged and rendering continues unless `opts.strict` is set.
pub fn render_props(props: &Value, opts: &RenderOpts) -> CardResult<DisplayNode> {
    let report = PropsSchema::person().check(props);
    let resolved = if opts.strict {
        report.into_strict()?
    } else {
        report.props
    };
    render_resolved(&resolved)
}

/// Render every props object in `input`, which is either one object or an array of them.
///
/// Stops at the first failure.
pub fn render_all(input: &Value, opts: &RenderOpts) -> CardResult<Vec<DisplayNode>> {
    match input {
        Value::Array(items) => items.iter().map(|p| render_props(p, opts)).collect(),
        single => Ok(vec![render_props(single, opts)?]),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
