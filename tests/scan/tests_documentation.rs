//! End-to-end documentation of small VHDL files, replayed as the event
//! streams a grammar engine would emit for them.

use rstest::rstest;
use vhdoc::entry::Mode;
use vhdoc::scan::{DeclSection, FileScan, InterfaceElement, SubprogramKind};
use vhdoc::{EntryKind, ScanConfig, ScanEvent, Scanner, VhdlSpec};

use crate::helpers::event_builders::*;
use crate::helpers::tree_assertions::{assert_classified, child_names, get_child};

/// Events for:
///
/// ```vhdl
///  1 library ieee;
///  2 use ieee.std_logic_1164.all;
///  3 use work.util.all;
///  4 --! Up counter
///  5 entity counter is
///  6   generic (WIDTH : natural := 8);  --! counter width
///  7   port (
///  8     clk, rst : in  std_logic;       --! clock and reset
///  9     q        : out std_logic_vector(WIDTH-1 downto 0));
/// 10 end entity;
/// 11
/// 12 architecture rtl of counter is
/// 13   --! state
/// 14   signal cnt : unsigned(WIDTH-1 downto 0);
/// 15 begin
/// 16   --! register process
/// 17   sync : process (clk, rst)
/// 18     variable tmp : natural;
/// 19   begin
/// 20   end process;
/// 21   --! output register
/// 22   u_reg : entity work.reg port map (d => cnt, q => q);
/// 23 end architecture;
/// ```
fn counter_events() -> Vec<ScanEvent> {
    vec![
        begin("counter.vhd"),
        decl("ieee", VhdlSpec::Library, 1),
        decl("ieee.std_logic_1164.all", VhdlSpec::Use, 2),
        decl("work.util.all", VhdlSpec::Use, 3),
        comment("--! Up counter", 4),
        decl("counter", VhdlSpec::Entity, 5),
        ScanEvent::Section {
            section: DeclSection::Generic,
        },
        typed_decl("WIDTH", VhdlSpec::Constant, "natural", 6),
        trailing("--! counter width", 6),
        ScanEvent::Section {
            section: DeclSection::Port,
        },
        typed_decl("clk, rst", VhdlSpec::Port, "std_logic", 8),
        trailing("--! clock and reset", 8),
        typed_decl("q", VhdlSpec::Port, "std_logic_vector", 9),
        ScanEvent::Section {
            section: DeclSection::Body,
        },
        decl("rtl", VhdlSpec::Architecture, 12),
        comment("--! state", 13),
        typed_decl("cnt", VhdlSpec::Signal, "unsigned", 14),
        comment("--! register process", 16),
        process("sync", "clk, rst", 17),
        ScanEvent::Commit,
        ScanEvent::EnterBody {
            kind: SubprogramKind::Process,
        },
        typed_decl("tmp", VhdlSpec::Variable, "natural", 18),
        ScanEvent::LeaveBody,
        comment("--! output register", 21),
        instance("u_reg", "work.reg", 22, "|rtl"),
        end(),
    ]
}

fn scan(config: ScanConfig, events: Vec<ScanEvent>) -> FileScan {
    let mut scanner = Scanner::new(config);
    scanner.run(events).unwrap();
    let mut files = scanner.finish().unwrap();
    assert_eq!(files.len(), 1);
    files.swap_remove_index(0).unwrap().1
}

#[test]
fn test_counter_tree_shape() {
    let result = scan(ScanConfig::default(), counter_events());

    assert_eq!(child_names(&result.root), vec!["counter", "rtl"]);

    let counter = get_child(&result.root, "counter");
    assert_classified(counter, EntryKind::Compound, VhdlSpec::Entity);
    assert_eq!(counter.brief, "Up counter");
    assert_eq!(counter.brief_line, Some(4));
    assert_eq!(
        child_names(counter),
        vec![
            "WIDTH",
            "clk",
            "rst",
            "q",
            "ieee",
            "ieee.std_logic_1164.all",
            "work.util.all"
        ]
    );

    let rtl = get_child(&result.root, "rtl");
    assert_classified(rtl, EntryKind::Compound, VhdlSpec::Architecture);
    assert_eq!(child_names(rtl), vec!["cnt", "sync"]);
}

#[test]
fn test_counter_documentation() {
    let result = scan(ScanConfig::default(), counter_events());
    let counter = get_child(&result.root, "counter");

    let width = get_child(counter, "WIDTH");
    assert_classified(width, EntryKind::Variable, VhdlSpec::Generic);
    assert_eq!(width.brief, "counter width");
    assert_eq!(width.type_name, "natural");

    for port in ["clk", "rst"] {
        let entry = get_child(counter, port);
        assert_classified(entry, EntryKind::Variable, VhdlSpec::Port);
        assert_eq!(entry.brief, "clock and reset");
        assert_eq!(entry.brief_line, Some(8));
    }
    assert!(get_child(counter, "q").brief.is_empty());

    let rtl = get_child(&result.root, "rtl");
    assert_eq!(get_child(rtl, "cnt").brief, "state");

    let sync = get_child(rtl, "sync");
    assert_classified(sync, EntryKind::Function, VhdlSpec::Process);
    assert_eq!(sync.brief, "register process");
    assert_eq!(sync.args, "clk,rst");
    assert_eq!(sync.start_line, 17);
}

#[test]
fn test_counter_process_locals_are_not_documented() {
    let result = scan(ScanConfig::default(), counter_events());
    assert!(result.root.descendants().all(|e| e.name != "tmp"));
}

#[test]
fn test_counter_instantiation_record() {
    let result = scan(ScanConfig::default(), counter_events());

    assert_eq!(result.instantiations.len(), 1);
    let record = &result.instantiations[0];
    assert_eq!(record.label, "u_reg");
    assert_eq!(record.unit, "work.reg");
    assert_eq!(record.architecture.as_deref(), Some("rtl"));
    assert_eq!(record.file_name, "counter.vhd");
    assert_eq!(record.brief, "output register");
    assert_eq!(record.label_path, "|rtl");
    // Instances never enter the tree.
    assert!(result.root.descendants().all(|e| e.name != "u_reg"));
}

#[rstest]
#[case::kept(false, vec!["ieee", "ieee.std_logic_1164.all", "work.util.all"])]
#[case::suppressed(true, vec!["work.util.all"])]
fn test_standard_library_suppression(#[case] suppress: bool, #[case] expected: Vec<&str>) {
    let config = ScanConfig::default().with_suppress_standard_libraries(suppress);
    let result = scan(config, counter_events());

    let counter = get_child(&result.root, "counter");
    let clauses: Vec<&str> = counter
        .children()
        .iter()
        .filter(|e| e.spec.is_some_and(VhdlSpec::is_context_clause))
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(clauses, expected);
}

#[test]
fn test_context_clauses_between_units() {
    // Only clauses ahead of every unit are deferred. Later ones commit
    // under the open unit like any declaration.
    let result = scan(
        ScanConfig::default(),
        vec![
            begin("two.vhd"),
            decl("ieee", VhdlSpec::Library, 1),
            decl("a", VhdlSpec::Entity, 3),
            decl("b_lib", VhdlSpec::Library, 8),
            decl("b", VhdlSpec::Entity, 10),
            end(),
        ],
    );

    assert_eq!(child_names(&result.root), vec!["a", "b"]);
    assert_eq!(child_names(&result.root.children()[0]), vec!["b_lib", "ieee"]);
    assert!(result.root.children()[1].children().is_empty());
}

#[test]
fn test_package_with_documented_procedure() {
    let result = scan(
        ScanConfig::default(),
        vec![
            begin("util.vhd"),
            decl("util", VhdlSpec::Package, 1),
            long_comment("--! Drive every output low.\n--! Blocks for one cycle.", 2),
            procedure("reset_all", 4),
            ScanEvent::Section {
                section: DeclSection::Parameter,
            },
            ScanEvent::Interface(InterfaceElement {
                names: "sig".to_string(),
                mode: Some(Mode::Out),
                type_name: " std_logic ".to_string(),
                default_value: None,
            }),
            ScanEvent::Section {
                section: DeclSection::Body,
            },
            ScanEvent::Commit,
            end(),
        ],
    );

    let util = get_child(&result.root, "util");
    let reset_all = get_child(util, "reset_all");
    assert_classified(reset_all, EntryKind::Function, VhdlSpec::Procedure);
    assert_eq!(reset_all.doc, "Drive every output low.\n Blocks for one cycle.");
    assert_eq!(reset_all.doc_line, Some(2));
    assert_eq!(reset_all.args, "sig,");

    let sig = &reset_all.arguments[0];
    assert_eq!(sig.name, "sig");
    assert_eq!(sig.type_name, "std_logic");
    assert_eq!(sig.direction, Some(Mode::Out));
    assert!(!sig.generic);
}

#[test]
fn test_configuration_label_paths() {
    let result = scan(
        ScanConfig::default(),
        vec![
            begin("cfg.vhd"),
            ScanEvent::BeginConfiguration {
                entity: "Top".to_string(),
            },
            config_block("rtl", 0),
            config_block("u_core", 1),
            config_block("u_alu", 2),
            config_block("u_mem", 1),
            end(),
        ],
    );

    let paths: Vec<&str> = result
        .config_nodes
        .iter()
        .map(|n| n.label_path.as_str())
        .collect();
    assert_eq!(paths, vec!["|rtl", "|rtl|u_core", "|rtl|u_core|u_alu", "|rtl|u_core"]);
    assert!(result.config_nodes.iter().all(|n| n.entity == "top"));
}
