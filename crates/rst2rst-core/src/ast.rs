//! Document tree
//!
//! This module defines the tree handed over by the markup parser. The tree
//! mirrors docutils' node hierarchy: one `document` root, nested `section`
//! nodes forming the heading hierarchy, body elements, inline elements and
//! text leaves.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::{Result, WriterError};

macro_rules! node_kinds {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal, )+) => {
        /// The kind of a document tree node.
        ///
        /// The set is closed: every kind the parser can produce has a variant,
        /// and the translator matches on all of them.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $( $(#[$meta])* $variant, )+
        }

        impl NodeKind {
            /// Every known node kind, in declaration order
            pub const ALL: &'static [NodeKind] = &[$( NodeKind::$variant, )+];

            /// The docutils name of this kind (`bullet_list`, `#text`, ...)
            pub fn name(self) -> &'static str {
                match self {
                    $( NodeKind::$variant => $name, )+
                }
            }

            /// Look up a kind by its docutils name.
            ///
            /// Fails with [`WriterError::UnsupportedNodeKind`] for names the
            /// writer does not know.
            pub fn from_name(name: &str) -> Result<Self> {
                match name {
                    $( $name => Ok(NodeKind::$variant), )+
                    other => Err(WriterError::UnsupportedNodeKind(other.to_string())),
                }
            }
        }
    };
}

node_kinds! {
    /// Text leaf
    Text => "#text",

    /// Root of the tree
    Document => "document",
    /// Heading hierarchy level
    Section => "section",
    /// Section or document title
    Title => "title",
    Subtitle => "subtitle",
    /// Paragraph of prose
    Paragraph => "paragraph",
    /// Indented block quote
    BlockQuote => "block_quote",
    BulletList => "bullet_list",
    ListItem => "list_item",

    EnumeratedList => "enumerated_list",
    DefinitionList => "definition_list",
    DefinitionListItem => "definition_list_item",
    Term => "term",
    Classifier => "classifier",
    Definition => "definition",
    FieldList => "field_list",
    Field => "field",
    FieldName => "field_name",
    FieldBody => "field_body",
    OptionList => "option_list",
    OptionListItem => "option_list_item",
    OptionGroup => "option_group",
    Option => "option",
    OptionString => "option_string",
    OptionArgument => "option_argument",
    Description => "description",
    LiteralBlock => "literal_block",
    DoctestBlock => "doctest_block",
    LineBlock => "line_block",
    Line => "line",
    Attribution => "attribution",
    Transition => "transition",
    Rubric => "rubric",
    Compound => "compound",
    Container => "container",
    Topic => "topic",
    Sidebar => "sidebar",
    Comment => "comment",
    SubstitutionDefinition => "substitution_definition",
    Target => "target",
    Footnote => "footnote",
    Citation => "citation",
    Label => "label",
    Figure => "figure",
    Caption => "caption",
    Legend => "legend",
    Image => "image",
    SystemMessage => "system_message",

    /// Generic admonition with a custom title
    Admonition => "admonition",
    Attention => "attention",
    Caution => "caution",
    Danger => "danger",
    Error => "error",
    Hint => "hint",
    Important => "important",
    Note => "note",
    Tip => "tip",
    Warning => "warning",

    Docinfo => "docinfo",
    Author => "author",
    Authors => "authors",
    Organization => "organization",
    Address => "address",
    Contact => "contact",
    Version => "version",
    Revision => "revision",
    Status => "status",
    Date => "date",
    Copyright => "copyright",
    Decoration => "decoration",
    Header => "header",
    Footer => "footer",
    Meta => "meta",

    /// Tables are acknowledged but not laid out
    Table => "table",
    Tgroup => "tgroup",
    Colspec => "colspec",
    Thead => "thead",
    Tbody => "tbody",
    Row => "row",
    Entry => "entry",

    /// Math blocks are acknowledged but not rendered
    MathBlock => "math_block",
    /// Raw passthrough content is dropped
    Raw => "raw",

    Emphasis => "emphasis",
    Strong => "strong",
    Literal => "literal",
    Reference => "reference",
    TitleReference => "title_reference",
    FootnoteReference => "footnote_reference",
    CitationReference => "citation_reference",
    SubstitutionReference => "substitution_reference",
    Abbreviation => "abbreviation",
    Acronym => "acronym",
    Subscript => "subscript",
    Superscript => "superscript",
    Inline => "inline",
    Math => "math",
    Problematic => "problematic",
    Generated => "generated",
}

impl NodeKind {
    /// Whether whitespace between this kind's children is significant.
    ///
    /// Text-bearing kinds hold prose or inline markup, so whitespace-only
    /// text leaves inside them are content rather than source indentation.
    pub fn is_text_bearing(self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Title
                | NodeKind::Subtitle
                | NodeKind::Rubric
                | NodeKind::Term
                | NodeKind::Classifier
                | NodeKind::FieldName
                | NodeKind::Attribution
                | NodeKind::Caption
                | NodeKind::Line
                | NodeKind::Label
                | NodeKind::OptionString
                | NodeKind::OptionArgument
                | NodeKind::LiteralBlock
                | NodeKind::DoctestBlock
                | NodeKind::MathBlock
                | NodeKind::Raw
                | NodeKind::Comment
                | NodeKind::Target
                | NodeKind::Author
                | NodeKind::Organization
                | NodeKind::Address
                | NodeKind::Contact
                | NodeKind::Version
                | NodeKind::Revision
                | NodeKind::Status
                | NodeKind::Date
                | NodeKind::Copyright
                | NodeKind::Emphasis
                | NodeKind::Strong
                | NodeKind::Literal
                | NodeKind::Reference
                | NodeKind::TitleReference
                | NodeKind::FootnoteReference
                | NodeKind::CitationReference
                | NodeKind::SubstitutionReference
                | NodeKind::Abbreviation
                | NodeKind::Acronym
                | NodeKind::Subscript
                | NodeKind::Superscript
                | NodeKind::Inline
                | NodeKind::Math
                | NodeKind::Problematic
                | NodeKind::Generated
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = WriterError;

    fn from_str(s: &str) -> Result<Self> {
        NodeKind::from_name(s)
    }
}

/// A node of the parsed document tree.
///
/// Only [`NodeKind::Text`] nodes carry `text`; every other kind holds its
/// content in `children`. Attributes are kept in the order the parser
/// produced them and are not interpreted by the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentNode {
    pub kind: NodeKind,
    pub children: Vec<DocumentNode>,
    pub text: Option<String>,
    pub attributes: IndexMap<String, String>,
}

impl DocumentNode {
    /// Create an empty node of the given kind
    pub fn element(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            text: None,
            attributes: IndexMap::new(),
        }
    }

    /// Create an empty document root
    pub fn document() -> Self {
        Self::element(NodeKind::Document)
    }

    /// Create a text leaf
    pub fn text(content: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            children: Vec::new(),
            text: Some(content.to_string()),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style variant of [`add_child`](Self::add_child)
    pub fn with_child(mut self, child: DocumentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = DocumentNode>,
    {
        self.children.extend(children);
        self
    }

    /// Builder-style variant of [`set_attr`](Self::set_attr)
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child node
    pub fn add_child(&mut self, child: DocumentNode) {
        self.children.push(child);
    }

    /// Set an attribute, replacing any previous value in place
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Check whether a direct child has the given kind
    pub fn has_child_of_kind(&self, kind: NodeKind) -> bool {
        self.children.iter().any(|child| child.kind == kind)
    }

    /// Flattened text of this node: the concatenation of every descendant
    /// text leaf, in document order.
    pub fn astext(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Number of nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DocumentNode::node_count).sum::<usize>()
    }
}
