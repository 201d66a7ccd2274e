use std::fmt::Write as _;

/// How a [`DisplayNode`] is serialized for the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Concatenated text content only.
    #[default]
    Text,
    /// HTML markup with text escaped.
    Html,
}

/// Framework-neutral description of renderable content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayNode {
    /// Element with an optional class and child nodes.
    Element {
        /// Tag name, e.g. `div`.
        tag: &'static str,
        /// Value of the `class` attribute.
        class: Option<&'static str>,
        /// Children in document order.
        children: Vec<DisplayNode>,
    },
    /// Plain text.
    Text(String),
}

impl DisplayNode {
    /// Element node without a class.
    pub fn element(tag: &'static str, children: Vec<DisplayNode>) -> Self {
        Self::Element {
            tag,
            class: None,
            children,
        }
    }

    /// Text node.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Set the class of an element. Text nodes are returned unchanged.
    pub fn with_class(self, class: &'static str) -> Self {
        match self {
            Self::Element { tag, children, .. } => Self::Element {
                tag,
                class: Some(class),
                children,
            },
            text => text,
        }
    }

    /// All text in document order, without markup.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Element { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
        }
    }

    /// Serialize as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(s) => escape_into(s, out),
            Self::Element {
                tag,
                class,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(class) = class {
                    out.push_str(" class=\"");
                    escape_into(class, out);
                    out.push('"');
                }
                out.push('>');
                for c in children {
                    c.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }

    /// Serialize in the requested format.
    pub fn serialize(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.text_content(),
            OutputFormat::Html => self.to_html(),
        }
    }
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/node.rs"]
mod tests;
