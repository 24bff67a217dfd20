//! docutils XML loading.
//!
//! This module reads the XML form of a docutils document tree (what
//! `rst2xml` emits) into a [`DocumentNode`] tree, so documents parsed by
//! docutils can be written back as reStructuredText.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use rst2rst_core::{DocumentNode, NodeKind};

use crate::{Result, Rst2RstError};

/// Parse a docutils XML string into a document tree.
///
/// Element names map to node kinds; an element the writer does not know
/// fails with [`WriterError::UnsupportedNodeKind`](crate::WriterError).
/// Whitespace-only text between structural elements is source formatting
/// and is dropped; inside paragraphs, titles and inline markup it is kept.
///
/// # Example
///
/// ```rust
/// use rst2rst::{parse_xml, NodeKind};
///
/// let document = parse_xml(
///     r#"<?xml version="1.0" encoding="utf-8"?>
/// <document source="example.rst">
///     <paragraph>Hello <emphasis>World</emphasis></paragraph>
/// </document>"#,
/// )
/// .unwrap();
///
/// assert_eq!(document.kind, NodeKind::Document);
/// assert_eq!(document.children[0].kind, NodeKind::Paragraph);
/// assert_eq!(document.astext(), "Hello World");
/// ```
pub fn parse_xml(xml: &str) -> Result<DocumentNode> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<DocumentNode> = Vec::new();
    let mut root: Option<DocumentNode> = None;
    // Text, CDATA and entity events of one run of character data
    let mut in_text = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            Rst2RstError::Xml(format!("at byte {}: {}", reader.buffer_position(), e))
        })?;

        match event {
            Event::Start(e) => {
                open.push(element(&e)?);
                in_text = false;
            }
            Event::Empty(e) => {
                let node = finish(element(&e)?);
                attach(&mut open, &mut root, node)?;
                in_text = false;
            }
            Event::End(_) => {
                if let Some(node) = open.pop() {
                    attach(&mut open, &mut root, finish(node))?;
                }
                in_text = false;
            }
            Event::Text(e) => {
                push_text(&mut open, &String::from_utf8_lossy(e.as_ref()), in_text)?;
                in_text = true;
            }
            Event::CData(e) => {
                push_text(&mut open, &String::from_utf8_lossy(e.as_ref()), in_text)?;
                in_text = true;
            }
            Event::GeneralRef(e) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                let resolved = resolve_entity(&entity)?;
                push_text(&mut open, resolved.encode_utf8(&mut [0; 4]), in_text)?;
                in_text = true;
            }
            Event::Eof => break,
            // Declaration, doctype, comments and processing instructions
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Rst2RstError::InvalidInput(format!(
            "unclosed element <{}>",
            unclosed.kind
        )));
    }

    let document = root.ok_or_else(|| {
        Rst2RstError::InvalidInput("no document element found".to_string())
    })?;
    log::debug!("loaded docutils XML tree of {} nodes", document.node_count());
    Ok(document)
}

/// Build an (empty) node from a start tag
fn element(tag: &BytesStart) -> Result<DocumentNode> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let kind = NodeKind::from_name(&name)?;
    if kind == NodeKind::Text {
        return Err(Rst2RstError::InvalidInput(format!(
            "<{name}> is not an element name"
        )));
    }

    let mut node = DocumentNode::element(kind);
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| Rst2RstError::Xml(format!("in <{name}>: {e}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        let value = unescape(&raw)
            .map_err(|e| Rst2RstError::Xml(format!("in <{name} {key}>: {e}")))?;
        node.set_attr(&key, &value);
    }
    Ok(node)
}

/// Drop whitespace-only text leaves of structural elements
fn finish(mut node: DocumentNode) -> DocumentNode {
    if !node.kind.is_text_bearing() {
        node.children.retain(|child| !is_blank_text(child));
    }
    node
}

fn is_blank_text(node: &DocumentNode) -> bool {
    node.is_text()
        && node
            .text
            .as_deref()
            .is_some_and(|text| text.chars().all(|c| c.is_ascii_whitespace()))
}

/// Hand a finished node to its parent, or make it the root
fn attach(
    open: &mut [DocumentNode],
    root: &mut Option<DocumentNode>,
    node: DocumentNode,
) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.add_child(node);
        return Ok(());
    }

    if root.is_some() {
        return Err(Rst2RstError::InvalidInput(
            "more than one root element".to_string(),
        ));
    }
    if node.kind != NodeKind::Document {
        return Err(Rst2RstError::InvalidInput(format!(
            "root element is <{}>, expected <document>",
            node.kind
        )));
    }
    *root = Some(node);
    Ok(())
}

/// Add character data to the innermost open element.
///
/// `continues` joins it to the preceding text leaf, so text split around
/// entity references stays one leaf.
fn push_text(open: &mut [DocumentNode], text: &str, continues: bool) -> Result<()> {
    let Some(parent) = open.last_mut() else {
        if text.chars().all(|c| c.is_ascii_whitespace()) {
            return Ok(());
        }
        return Err(Rst2RstError::InvalidInput(
            "text outside the document element".to_string(),
        ));
    };

    if continues {
        if let Some(last) = parent.children.last_mut().filter(|child| child.is_text()) {
            last.text.get_or_insert_with(String::new).push_str(text);
            return Ok(());
        }
    }
    parent.add_child(DocumentNode::text(text));
    Ok(())
}

/// Resolve a predefined or numeric character reference
fn resolve_entity(entity: &str) -> Result<char> {
    let resolved = match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(decimal) = entity.strip_prefix('#') {
                decimal.parse().ok()
            } else {
                None
            };
            code.and_then(char::from_u32)
        }
    };

    resolved.ok_or_else(|| Rst2RstError::Xml(format!("unknown entity &{entity};")))
}
