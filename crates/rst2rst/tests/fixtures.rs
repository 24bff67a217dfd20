//! Writer behaviour on sample documents.
//!
//! Every `tests/fixtures/<name>-input.xml` docutils tree must serialize to
//! the text in `tests/fixtures/<name>-output.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use rst2rst::{Rst2RstError, RstWriter, WriterError};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Names of all fixtures, i.e. input files with `-input.xml` stripped
fn fixture_names() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("fixtures directory is readable")
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(|name| name.strip_suffix("-input.xml"))
                .map(str::to_string)
        })
        .collect();
    names.sort();
    names
}

fn read_fixture(name: &str, suffix: &str) -> String {
    let path = fixtures_dir().join(format!("{name}-{suffix}"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Line-by-line comparison with newlines made visible
fn describe_mismatch(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let mut report = String::new();

    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let want = expected_lines.get(i);
        let got = actual_lines.get(i);
        if want != got {
            report.push_str(&format!("line {}:\n-{:?}\n+{:?}\n", i + 1, want, got));
        }
    }
    report
}

#[test]
fn test_fixtures_dir() {
    assert!(fixtures_dir().is_dir());
    assert!(!fixture_names().is_empty(), "no fixtures found");
}

#[test]
fn test_fixture_output() {
    let writer = RstWriter::new();
    let mut failures = Vec::new();

    for name in fixture_names() {
        let input = read_fixture(&name, "input.xml");
        let expected = read_fixture(&name, "output.txt");

        match writer.write_xml(&input) {
            Ok(actual) if actual == expected => {}
            Ok(actual) => failures.push(format!(
                "{name}-input.xml differs from {name}-output.txt\n{}",
                describe_mismatch(&expected, &actual)
            )),
            Err(e) => failures.push(format!("{name}-input.xml failed: {e}")),
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_repeatability() {
    let writer = RstWriter::new();
    for name in fixture_names() {
        let input = read_fixture(&name, "input.xml");
        let first = writer.write_xml(&input).unwrap();
        let second = writer.write_xml(&input).unwrap();
        assert_eq!(first, second, "{name} is not repeatable");
    }
}

#[test]
fn test_unregistered_node_kind_aborts() {
    let writer = RstWriter::new();
    let err = writer
        .write_xml("<document><paragraph>a</paragraph><hologram><paragraph>b</paragraph></hologram></document>")
        .unwrap_err();

    assert!(matches!(
        err,
        Rst2RstError::Writer(WriterError::UnsupportedNodeKind(ref name)) if name == "hologram"
    ));
    assert_eq!(err.to_string(), "Unsupported node kind: hologram");
}

#[test]
fn test_version() {
    assert_eq!(rst2rst::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!rst2rst::VERSION.is_empty());
}
