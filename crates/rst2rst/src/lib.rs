//! # rst2rst
//!
//! Normalize reStructuredText documents.
//!
//! rst2rst takes the document tree a reStructuredText parser produced and
//! writes it back as canonical markup: consistent title adornments per
//! heading level, wrapped paragraphs, indented block quotes and nested
//! bullet lists, one blank line between elements.
//!
//! ## Design
//!
//! The writer does not parse reStructuredText itself. It accepts either:
//!
//! - **A [`DocumentNode`] tree**: built by any parser front end
//! - **docutils XML**: the tree as `rst2xml` emits it (feature `xml`)
//!
//! ## Example (tree)
//!
//! ```rust
//! use rst2rst::{DocumentNode, NodeKind, RstWriter};
//!
//! let writer = RstWriter::new();
//!
//! let document = DocumentNode::document().with_child(
//!     DocumentNode::element(NodeKind::Paragraph).with_child(DocumentNode::text("Hello World")),
//! );
//!
//! let rst = writer.write(&document).unwrap();
//! assert_eq!(rst, "Hello World\n");
//! ```
//!
//! ## Example (docutils XML)
//!
//! ```rust
//! use rst2rst::RstWriter;
//!
//! let writer = RstWriter::new();
//! let rst = writer
//!     .write_xml("<document><paragraph>Hello World</paragraph></document>")
//!     .unwrap();
//! assert_eq!(rst, "Hello World\n");
//! ```

#[cfg(feature = "xml")]
pub mod xml;
mod writer;

#[cfg(feature = "xml")]
pub use xml::parse_xml;
pub use writer::RstWriter;

pub use rst2rst_core::{DocumentNode, FormattingOptions, NodeKind, WriterError};

/// Version of the rst2rst crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for rst2rst operations
#[derive(Debug, thiserror::Error)]
pub enum Rst2RstError {
    #[error(transparent)]
    Writer(#[from] WriterError),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Rst2RstError>;
