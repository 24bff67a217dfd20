//! Document tree to reStructuredText translation
//!
//! The translator walks the tree once in document order, calling an enter
//! handler before a node's children and a leave handler after them. The
//! handlers write to the output buffers and keep the indentation stack,
//! the heading and list depths, and the pending separator up to date.

use crate::ast::{DocumentNode, NodeKind};
use crate::indent::IndentStack;
use crate::options::FormattingOptions;
use crate::spacer::Spacer;
use crate::wrap::wrap;
use crate::Result;

/// Indentation of list item bodies, in columns
const LIST_ITEM_INDENT: usize = 2;

/// Separator pending after a list item
const LIST_ITEM_SPACER: &str = "\n  ";

/// Kinds with no formatting rules. Their children are still visited.
macro_rules! passthrough_kinds {
    () => {
        NodeKind::Subtitle
            | NodeKind::DefinitionList
            | NodeKind::DefinitionListItem
            | NodeKind::Term
            | NodeKind::Classifier
            | NodeKind::Definition
            | NodeKind::FieldList
            | NodeKind::Field
            | NodeKind::FieldName
            | NodeKind::FieldBody
            | NodeKind::OptionList
            | NodeKind::OptionListItem
            | NodeKind::OptionGroup
            | NodeKind::Option
            | NodeKind::OptionString
            | NodeKind::OptionArgument
            | NodeKind::Description
            | NodeKind::LiteralBlock
            | NodeKind::DoctestBlock
            | NodeKind::LineBlock
            | NodeKind::Line
            | NodeKind::Attribution
            | NodeKind::Transition
            | NodeKind::Rubric
            | NodeKind::Compound
            | NodeKind::Container
            | NodeKind::Topic
            | NodeKind::Sidebar
            | NodeKind::Comment
            | NodeKind::SubstitutionDefinition
            | NodeKind::Target
            | NodeKind::Footnote
            | NodeKind::Citation
            | NodeKind::Label
            | NodeKind::Figure
            | NodeKind::Caption
            | NodeKind::Legend
            | NodeKind::Image
            | NodeKind::SystemMessage
            | NodeKind::Admonition
            | NodeKind::Attention
            | NodeKind::Caution
            | NodeKind::Danger
            | NodeKind::Error
            | NodeKind::Hint
            | NodeKind::Important
            | NodeKind::Note
            | NodeKind::Tip
            | NodeKind::Warning
            | NodeKind::Docinfo
            | NodeKind::Author
            | NodeKind::Authors
            | NodeKind::Organization
            | NodeKind::Address
            | NodeKind::Contact
            | NodeKind::Version
            | NodeKind::Revision
            | NodeKind::Status
            | NodeKind::Date
            | NodeKind::Copyright
            | NodeKind::Decoration
            | NodeKind::Header
            | NodeKind::Footer
            | NodeKind::Meta
            | NodeKind::Table
            | NodeKind::Tgroup
            | NodeKind::Colspec
            | NodeKind::Thead
            | NodeKind::Tbody
            | NodeKind::Row
            | NodeKind::Entry
            | NodeKind::MathBlock
            | NodeKind::Raw
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
    };
}

/// Serialize a document tree to reStructuredText
pub fn serialize(document: &DocumentNode, options: &FormattingOptions) -> Result<String> {
    let mut translator = Translator::new(options)?;
    translator.walkabout(document);
    Ok(translator.astext())
}

/// A node being visited and the index of its next child
struct Frame<'n> {
    node: &'n DocumentNode,
    next_child: usize,
}

/// State of one serialization pass.
///
/// A translator serves a single document: build it, [`walkabout`] the
/// tree, then read [`astext`].
///
/// [`walkabout`]: Translator::walkabout
/// [`astext`]: Translator::astext
pub struct Translator<'a> {
    options: &'a FormattingOptions,

    header: String,
    title: String,
    subtitle: String,
    body: String,
    footer: String,

    indents: IndentStack,
    spacer: Spacer,
    section_level: usize,
    list_level: usize,
    /// Kinds of the enclosing lists, innermost last
    open_lists: Vec<NodeKind>,
    visited: usize,
}

impl<'a> Translator<'a> {
    /// Create a translator, rejecting options whose tables can't be indexed
    pub fn new(options: &'a FormattingOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            header: String::new(),
            title: String::new(),
            subtitle: String::new(),
            body: String::with_capacity(4096),
            footer: String::new(),
            indents: IndentStack::new(options.indentation_char),
            spacer: Spacer::new(),
            section_level: 0,
            list_level: 0,
            open_lists: Vec::new(),
            visited: 0,
        })
    }

    /// Visit `root` and its descendants depth-first in document order.
    ///
    /// Uses an explicit stack, so deep trees don't grow the call stack.
    pub fn walkabout(&mut self, root: &DocumentNode) {
        log::debug!("translating tree rooted at {}", root.kind);

        self.enter(root);
        let mut stack = vec![Frame {
            node: root,
            next_child: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match node.children.get(frame.next_child) {
                Some(child) => {
                    frame.next_child += 1;
                    self.enter(child);
                    stack.push(Frame {
                        node: child,
                        next_child: 0,
                    });
                }
                None => {
                    stack.pop();
                    self.leave(node);
                }
            }
        }

        log::debug!(
            "visited {} nodes, {} bytes of output",
            self.visited,
            self.body.len()
        );
    }

    /// Run the enter handler for `node`'s kind
    pub fn enter(&mut self, node: &DocumentNode) {
        log::trace!("enter {}", node.kind);
        self.visited += 1;

        match node.kind {
            NodeKind::Text => self.visit_text(node),
            NodeKind::Document => {
                // A promoted document title is the outermost heading level.
                if node.has_child_of_kind(NodeKind::Title) {
                    self.section_level += 1;
                }
            }
            NodeKind::Section => self.section_level += 1,
            NodeKind::Title => self.visit_title(node),
            NodeKind::Paragraph => {}
            NodeKind::BlockQuote => {
                self.indents.push(self.options.blockquote_indent, None);
            }
            NodeKind::BulletList => {
                // A list nested right after an item's bare text needs a blank line.
                if self.list_level > 0 && !self.spacer.is_pending() && self.end_line() {
                    self.spacer.set("\n");
                }
                self.spacer.flush_into(&mut self.body);
                self.list_level += 1;
                self.open_lists.push(NodeKind::BulletList);
                self.spacer.clear();
            }
            NodeKind::EnumeratedList => self.open_lists.push(NodeKind::EnumeratedList),
            NodeKind::ListItem => {
                if self.in_bullet_list() {
                    self.visit_list_item();
                }
            }
            passthrough_kinds!() => {}
        }
    }

    /// Run the leave handler for `node`'s kind
    pub fn leave(&mut self, node: &DocumentNode) {
        log::trace!("leave {}", node.kind);

        match node.kind {
            NodeKind::Text => {}
            NodeKind::Document => {
                if node.has_child_of_kind(NodeKind::Title) {
                    self.section_level = self.section_level.saturating_sub(1);
                }
            }
            NodeKind::Section => self.section_level = self.section_level.saturating_sub(1),
            NodeKind::Title => self.depart_title(node),
            NodeKind::Paragraph => {
                self.body.push('\n');
                self.spacer.set("\n");
            }
            NodeKind::BlockQuote => {
                self.indents.pop();
            }
            NodeKind::BulletList => {
                self.spacer.set("\n");
                self.list_level = self.list_level.saturating_sub(1);
                self.open_lists.pop();
            }
            NodeKind::EnumeratedList => {
                self.open_lists.pop();
            }
            NodeKind::ListItem => {
                if self.in_bullet_list() {
                    self.end_line();
                    self.indents.pop();
                    self.spacer.set(LIST_ITEM_SPACER);
                }
            }
            passthrough_kinds!() => {}
        }
    }

    fn visit_text(&mut self, node: &DocumentNode) {
        self.spacer.flush_into(&mut self.body);

        let text = node.text.as_deref().unwrap_or_default();
        let indent = self.indents.current_indent();
        let first_line_indent = self.indents.current_first_line_indent();
        let wrapped = wrap(text, self.options.wrap_length, &indent, &first_line_indent);

        // The bullet belongs to the first line actually written.
        if !wrapped.is_empty() {
            self.indents.take_first_line_indent();
        }
        self.body.push_str(&wrapped);
    }

    fn visit_title(&mut self, node: &DocumentNode) {
        let depth = self.heading_depth();
        self.body.push_str(self.options.title_prefix(depth));

        if self.options.title_overline(depth) {
            self.spacer.flush_into(&mut self.body);
            let overline = adornment(self.options.title_char(depth), node);
            self.body.push_str(&overline);
            self.body.push('\n');
            self.spacer.clear();
        }
    }

    fn depart_title(&mut self, node: &DocumentNode) {
        let depth = self.heading_depth();
        let underline = adornment(self.options.title_char(depth), node);
        self.body.push('\n');
        self.body.push_str(&underline);
        self.spacer.set(self.options.title_suffix(depth));
    }

    fn visit_list_item(&mut self) {
        let bullet = self.options.bullet(self.list_level.saturating_sub(1));
        let first_line = format!("{}{} ", self.indents.current_indent(), bullet);
        self.indents.push(LIST_ITEM_INDENT, Some(first_line));
        self.spacer.clear();
    }

    /// Whether the innermost enclosing list is a bullet list
    fn in_bullet_list(&self) -> bool {
        self.open_lists.last() == Some(&NodeKind::BulletList)
    }

    /// Terminate a line left open by a bare text leaf. Returns whether a
    /// newline was written.
    fn end_line(&mut self) -> bool {
        if self.body.is_empty() || self.body.ends_with('\n') {
            return false;
        }
        self.body.push('\n');
        true
    }

    /// Index into the per-depth title tables
    fn heading_depth(&self) -> usize {
        self.section_level.saturating_sub(1)
    }

    /// Concatenate the output buffers
    pub fn astext(&self) -> String {
        [
            &self.header,
            &self.title,
            &self.subtitle,
            &self.body,
            &self.footer,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }

    pub fn section_level(&self) -> usize {
        self.section_level
    }

    pub fn list_level(&self) -> usize {
        self.list_level
    }

    /// Entries on the indentation stack, the root included
    pub fn indent_depth(&self) -> usize {
        self.indents.depth()
    }

    pub fn pending_spacer(&self) -> Option<&str> {
        self.spacer.pending()
    }
}

/// Title over/underline: `symbol` repeated once per character of the
/// title's flattened text
fn adornment(symbol: char, title: &DocumentNode) -> String {
    std::iter::repeat(symbol)
        .take(title.astext().chars().count())
        .collect()
}
