//! Person profile cards.
//!
//! A card turns a person's props into one sentence:
//!
//! > Johnny (aged 27) lives at 1 Zuckerberg Avenue, San Francisco. He likes to playing piano,
//! > cooking, knitting. What a person!
//!
//! There are two ways in:
//!
//! - Typed: build a [`Person`] with [`Person::builder`] (or decode one from JSON) and call
//!   [`render`]. Optional props are resolved to their defaults at construction.
//! - Loose: pass any `serde_json::Value` through [`PropsSchema::check`], which logs a warning for
//!   each mismatch, fills defaults and never fails, then call [`render_resolved`].
//!
//! Rendered [`DisplayNode`]s are attached to a [`Root`] and mounted into a [`NodeSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod mount;
pub(crate) mod props;
pub(crate) mod render;
pub(crate) mod schema;

/// Built-in demo cards.
pub mod demo;

pub use crate::foundation::error::{CardError, CardResult};

pub use crate::mount::root::Root;
pub use crate::mount::sink::{InMemorySink, NodeSink, WriterSink};
pub use crate::props::builder::PersonBuilder;
pub use crate::props::person::{Address, DEFAULT_HOBBY, DEFAULT_PRONOUN, Person};
pub use crate::render::node::{DisplayNode, OutputFormat};
pub use crate::render::pipeline::{RenderOpts, render_all, render_props};
pub use crate::render::sentence::{
    card_node, describe, describe_resolved, formatted_address, hobby_list, render,
    render_resolved,
};
pub use crate::schema::resolved::{ResolvedProps, UNDEFINED};
pub use crate::schema::validate::{
    FieldKind, FieldSpec, PropsReport, PropsSchema, SchemaPathElem, SchemaWarning,
};
