//! `certify-core` -- certificate template engine.
//!
//! Holds the editor's linear content history, the catalog of recognized
//! `{{namespace.field}}` variables, the substitution pass that renders a
//! template against a [`context::VariableContext`], and the session and
//! issuing logic built on top of them. No I/O happens here; the CLI crate
//! owns files and environment.

pub mod certificate;
pub mod context;
pub mod editor;
pub mod error;
pub mod history;
pub mod records;
pub mod substitution;
pub mod template;
pub mod types;
pub mod variables;
