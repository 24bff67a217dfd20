//! RstWriter - the main entry point for writing reStructuredText

use rst2rst_core::{serialize, DocumentNode, FormattingOptions};

use crate::Result;

/// Output formats the writer supports
const SUPPORTED_FORMATS: &[&str] = &["txt"];

/// The main service for turning document trees into reStructuredText
#[derive(Debug, Clone, Default)]
pub struct RstWriter {
    options: FormattingOptions,
}

impl RstWriter {
    /// Create an RstWriter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an RstWriter with custom options
    pub fn with_options(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Output formats this writer produces
    pub fn supported(&self) -> &'static [&'static str] {
        SUPPORTED_FORMATS
    }

    /// Serialize a document tree.
    ///
    /// Each call runs a fresh translation, so the same tree always gives
    /// the same text.
    pub fn write(&self, document: &DocumentNode) -> Result<String> {
        let output = serialize(document, &self.options)?;
        log::debug!("wrote {} bytes of reStructuredText", output.len());
        Ok(output)
    }

    /// Load a docutils XML document tree and serialize it
    #[cfg(feature = "xml")]
    pub fn write_xml(&self, xml: &str) -> Result<String> {
        let document = crate::xml::parse_xml(xml)?;
        self.write(&document)
    }

    /// Get the current options
    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut FormattingOptions {
        &mut self.options
    }
}
