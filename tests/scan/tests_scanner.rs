//! Lifecycle handling of the event-stream driver.

use rstest::rstest;
use vhdoc::{ScanConfig, ScanError, ScanEvent, Scanner, VhdlSpec};

use crate::helpers::event_builders::*;
use crate::helpers::tree_assertions::child_names;

#[rstest]
#[case::declaration(decl("top", VhdlSpec::Entity, 1), "declaration")]
#[case::comment(comment("--! orphan", 1), "comment")]
#[case::commit(ScanEvent::Commit, "commit")]
#[case::end_file(end(), "end_file")]
fn test_event_outside_file_is_rejected(#[case] event: ScanEvent, #[case] expected: &str) {
    let mut scanner = Scanner::new(ScanConfig::default());
    let err = scanner.handle(event).unwrap_err();
    assert!(
        matches!(err, ScanError::NoOpenFile { event } if event == expected),
        "unexpected error: {err}"
    );
}

#[test]
fn test_nested_begin_is_rejected() {
    let mut scanner = Scanner::new(ScanConfig::default());
    scanner.handle(begin("a.vhd")).unwrap();

    let err = scanner.handle(begin("b.vhd")).unwrap_err();
    match err {
        ScanError::FileAlreadyOpen { open, requested } => {
            assert_eq!(open, "a.vhd");
            assert_eq!(requested, "b.vhd");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(scanner.open_file(), Some("a.vhd"));
}

#[test]
fn test_unterminated_file_fails_finish() {
    let mut scanner = Scanner::new(ScanConfig::default());
    scanner
        .run([begin("open.vhd"), decl("top", VhdlSpec::Entity, 1)])
        .unwrap();

    let err = scanner.finish().unwrap_err();
    assert!(matches!(err, ScanError::UnterminatedFile(name) if name == "open.vhd"));
}

#[test]
fn test_error_message_names_the_event() {
    let err = ScanError::no_open_file("comment");
    assert_eq!(err.to_string(), "comment event outside of a file scan");
}

#[test]
fn test_files_kept_in_scan_order() {
    let mut scanner = Scanner::new(ScanConfig::default());
    scanner
        .run([
            begin("b.vhd"),
            decl("b", VhdlSpec::Entity, 1),
            end(),
            begin("a.vhd"),
            decl("a", VhdlSpec::Entity, 1),
            end(),
        ])
        .unwrap();

    let files = scanner.finish().unwrap();
    let order: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["b.vhd", "a.vhd"]);
    assert_eq!(child_names(&files["a.vhd"].root), vec!["a"]);
}

#[test]
fn test_rescan_replaces_earlier_result() {
    let mut scanner = Scanner::new(ScanConfig::default());
    scanner
        .run([
            begin("top.vhd"),
            decl("old_top", VhdlSpec::Entity, 1),
            end(),
            begin("other.vhd"),
            end(),
            begin("top.vhd"),
            decl("new_top", VhdlSpec::Entity, 1),
            end(),
        ])
        .unwrap();

    let files = scanner.files();
    assert_eq!(files.len(), 2);
    assert_eq!(files.get_index_of("top.vhd"), Some(0));
    assert_eq!(child_names(&files["top.vhd"].root), vec!["new_top"]);
}

#[test]
fn test_state_does_not_leak_between_files() {
    let mut scanner = Scanner::new(ScanConfig::default());
    scanner
        .run([
            begin("first.vhd"),
            decl("first", VhdlSpec::Entity, 1),
            comment("--! dangling", 5),
            comment("--! still dangling", 6),
            end(),
            begin("second.vhd"),
            decl("x", VhdlSpec::Signal, 1),
            end(),
        ])
        .unwrap();

    let second = &scanner.files()["second.vhd"];
    // No scope is open in the second file, so the signal lands on the root.
    assert_eq!(child_names(&second.root), vec!["x"]);
    let x = &second.root.children()[0];
    assert!(x.brief.is_empty());
    assert_eq!(x.file_name, "second.vhd");
}

#[test]
fn test_scan_file_without_brackets() {
    let scan = vhdoc::scan::scan_file(
        ScanConfig::default(),
        "pkg.vhd",
        vhdoc::Entry::new(),
        [
            decl("util", VhdlSpec::Package, 1),
            procedure("reset_all", 3),
            parameter("a, b", "std_logic"),
            ScanEvent::Commit,
        ],
    )
    .unwrap();

    assert_eq!(scan.file_name, "pkg.vhd");
    let util = &scan.root.children()[0];
    let reset_all = &util.children()[0];
    assert_eq!(reset_all.name, "reset_all");
    assert_eq!(reset_all.args, "a,b,");
    assert_eq!(reset_all.arguments.len(), 2);
}

#[test]
fn test_scan_file_rejects_nested_begin() {
    let result = vhdoc::scan::scan_file(
        ScanConfig::default(),
        "pkg.vhd",
        vhdoc::Entry::new(),
        [begin("other.vhd")],
    );
    assert!(matches!(result, Err(ScanError::FileAlreadyOpen { .. })));
}

#[test]
fn test_scan_file_rejects_end_file() {
    let result = vhdoc::scan::scan_file(
        ScanConfig::default(),
        "pkg.vhd",
        vhdoc::Entry::new(),
        [decl("util", VhdlSpec::Package, 1), end()],
    );
    assert!(
        matches!(result, Err(ScanError::NoOpenFile { event: "end_file" })),
        "unexpected result: {result:?}"
    );
}
