//! Properties of the serializer over generated document trees.

use proptest::collection::vec;
use proptest::prelude::*;

use rst2rst_core::{serialize, wrap, DocumentNode, FormattingOptions, NodeKind, Translator};

fn node(kind: NodeKind, children: Vec<DocumentNode>) -> DocumentNode {
    DocumentNode::element(kind).with_children(children)
}

fn paragraph(content: String) -> DocumentNode {
    node(NodeKind::Paragraph, vec![DocumentNode::text(&content)])
}

fn title(content: String) -> DocumentNode {
    node(NodeKind::Title, vec![DocumentNode::text(&content)])
}

fn prose() -> impl Strategy<Value = String> {
    "[a-z]{1,12}( [a-z]{1,12}){0,30}"
}

fn title_text() -> impl Strategy<Value = String> {
    "[A-Za-zé]{1,10}( [A-Za-z]{1,10}){0,3}"
}

/// Body elements: paragraphs, block quotes, bullet lists and tables
fn block() -> impl Strategy<Value = DocumentNode> {
    let leaf = prose().prop_map(paragraph);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 1..4).prop_map(|children| node(NodeKind::BlockQuote, children)),
            vec(
                vec(inner.clone(), 1..3).prop_map(|children| node(NodeKind::ListItem, children)),
                1..4,
            )
            .prop_map(|items| node(NodeKind::BulletList, items)),
            vec(inner, 1..3).prop_map(|children| node(NodeKind::Table, children)),
        ]
    })
}

fn section() -> impl Strategy<Value = DocumentNode> {
    let leaf = (title_text(), vec(block(), 0..3)).prop_map(|(heading, blocks)| {
        node(NodeKind::Section, vec![title(heading)]).with_children(blocks)
    });
    leaf.prop_recursive(3, 16, 3, |inner| {
        (title_text(), vec(block(), 0..3), vec(inner, 1..3)).prop_map(
            |(heading, blocks, subsections)| {
                node(NodeKind::Section, vec![title(heading)])
                    .with_children(blocks)
                    .with_children(subsections)
            },
        )
    })
}

fn document() -> impl Strategy<Value = DocumentNode> {
    (
        proptest::option::of(title_text()),
        vec(block(), 0..3),
        vec(section(), 0..3),
    )
        .prop_map(|(heading, blocks, sections)| {
            let mut doc = DocumentNode::document();
            if let Some(heading) = heading {
                doc.add_child(title(heading));
            }
            doc.with_children(blocks).with_children(sections)
        })
}

proptest! {
    #[test]
    fn wrapped_lines_fit_unless_single_word(text in prose(), width in 8usize..80) {
        let wrapped = wrap(&text, width, "  ", "  ");
        for line in wrapped.lines() {
            let content = &line[2..];
            prop_assert!(line.chars().count() <= width || !content.contains(' '));
        }
        let words: Vec<&str> = wrapped.split_whitespace().collect();
        let expected: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(words, expected);
    }

    #[test]
    fn serialization_is_repeatable(doc in document()) {
        let options = FormattingOptions::default();
        prop_assert_eq!(serialize(&doc, &options).unwrap(), serialize(&doc, &options).unwrap());
    }

    #[test]
    fn traversal_leaves_state_balanced(doc in document()) {
        let options = FormattingOptions::default();
        let mut translator = Translator::new(&options).unwrap();
        translator.walkabout(&doc);
        prop_assert_eq!(translator.indent_depth(), 1);
        prop_assert_eq!(translator.section_level(), 0);
        prop_assert_eq!(translator.list_level(), 0);
    }

    #[test]
    fn output_has_no_trailing_separator(doc in document()) {
        let output = serialize(&doc, &FormattingOptions::default()).unwrap();
        prop_assert!(!output.ends_with("\n\n"));
        prop_assert!(!output.ends_with("\n  "));
    }

    #[test]
    fn adornments_match_title_length(heading in title_text(), depth in 0usize..6) {
        let options = FormattingOptions::default();
        let mut innermost = node(NodeKind::Section, vec![title(heading.clone())]);
        for _ in 0..depth {
            innermost = node(NodeKind::Section, vec![innermost]);
        }
        let doc = node(NodeKind::Document, vec![innermost]);

        let output = serialize(&doc, &options).unwrap();
        let lines: Vec<&str> = output.trim_start_matches('\n').lines().collect();
        let adornment: String = std::iter::repeat(options.title_char(depth))
            .take(heading.chars().count())
            .collect();

        if options.title_overline(depth) {
            prop_assert_eq!(lines, vec![adornment.as_str(), heading.as_str(), adornment.as_str()]);
        } else {
            prop_assert_eq!(lines, vec![heading.as_str(), adornment.as_str()]);
        }
    }
}
