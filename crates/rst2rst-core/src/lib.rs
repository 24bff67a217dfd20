//! rst2rst-core - document tree and reStructuredText serialization
//!
//! This crate provides the document tree handed over by a markup parser and
//! the translator that writes it back as normalized reStructuredText. It is
//! used by `rst2rst`, which adds a docutils XML loader and the command-line
//! tool.
//!
//! # Architecture
//!
//! ```text
//!                 ┌────────────────────────────────────────────┐
//!                 │ Translator                                 │
//! DocumentNode ──▶│  enter/leave handlers ──▶ IndentStack      │──▶ RST String
//!                 │        │                  Spacer           │
//!                 │        └──▶ wrap()        output buffers   │
//!                 └────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use rst2rst_core::{serialize, DocumentNode, FormattingOptions, NodeKind};
//!
//! let document = DocumentNode::document().with_child(
//!     DocumentNode::element(NodeKind::Section)
//!         .with_child(DocumentNode::element(NodeKind::Title).with_child(DocumentNode::text("Hello")))
//!         .with_child(DocumentNode::element(NodeKind::Paragraph).with_child(DocumentNode::text("World"))),
//! );
//!
//! let rst = serialize(&document, &FormattingOptions::default()).unwrap();
//! assert_eq!(rst, "#####\nHello\n#####\n\nWorld\n");
//! ```

mod ast;
mod indent;
mod options;
mod spacer;
mod translator;
mod wrap;

pub use ast::{DocumentNode, NodeKind};
pub use indent::IndentStack;
pub use options::FormattingOptions;
pub use spacer::Spacer;
pub use translator::{serialize, Translator};
pub use wrap::{wrap, wrap_lines};

/// Error type for serialization
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("Unsupported node kind: {0}")]
    UnsupportedNodeKind(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, WriterError>;
