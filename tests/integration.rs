//! Integration tests that load complete fixture guides end-to-end.

use guide_render::nav::{self, NavEntry};
use guide_render::{
    Block, BlocksBuilder, ColumnBuilder, CompileOptions, Compiler, Element, Guide, GuideError,
    GuideRenderer, MarkupPolicy, Node, PageConfig,
};
use pretty_assertions::assert_eq;

fn fixtures_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", path.display(), e))
}

fn load_guide() -> Guide {
    Guide::from_json(&read_fixture("guide.json")).expect("guide.json should load")
}

fn compile_chapter(guide: &Guide, index: usize) -> Vec<Node> {
    let options = CompileOptions::default();
    Compiler::new(&options)
        .compile(&guide.chapters[index].blocks)
        .expect("chapter should compile")
}

fn entry(id: &str, level: u8, title: &str) -> NavEntry {
    NavEntry {
        id: id.into(),
        level,
        title: title.into(),
    }
}

fn elements(nodes: &[Node]) -> Vec<&Element> {
    nodes.iter().filter_map(Node::as_element).collect()
}

#[test]
fn json_fixture_loads() {
    let guide = load_guide();
    assert_eq!(guide.title, "Panduan Aplikasi");
    assert_eq!(guide.chapters.len(), 2);
    assert_eq!(guide.chapters[0].tag.as_deref(), Some("Dasar"));

    let blocks = &guide.chapters[0].blocks;
    assert_eq!(blocks.len(), 11);
    assert!(matches!(&blocks[4], Block::Unknown { kind, .. } if kind == "foo"));
    assert_eq!(blocks[5].columns().len(), 2);
}

#[test]
fn first_chapter_compiles_block_by_block() {
    let guide = load_guide();
    let nodes = compile_chapter(&guide, 0);
    // Unknown block dropped, captioned image emits two nodes.
    assert_eq!(nodes.len(), 11);

    let els = elements(&nodes);
    let intro = els[0];
    assert_eq!(intro.get_id(), Some("1"));
    assert_eq!(intro.get_attr("data-level"), Some("1"));
    let h2 = intro.child_elements().next().unwrap();
    assert_eq!(h2.text_content(), "Intro");
    assert_eq!(h2.get_attr("data-section-title"), Some("Intro"));
    assert!(!h2.has_class("with-margin"));

    assert!(els[1].has_class("with-align-justify"));
    assert!(els[1].has_class("with-indent"));
    assert!(els[2].has_class("info"));
    assert!(els[3].has_class("danger"));
    assert!(els[3].text_content().contains("Warning"));
}

#[test]
fn grid_columns_resolve_layout_and_ids() {
    let guide = load_guide();
    let nodes = compile_chapter(&guide, 0);
    let grid = elements(&nodes)
        .into_iter()
        .find(|el| el.has_class("ug-grid-container"))
        .expect("grid container");
    let row = grid.child_elements().next().unwrap();
    assert!(row.has_class("ug-align-center"));

    let columns: Vec<&Element> = row.child_elements().collect();
    assert_eq!(columns.len(), 2);
    assert_eq!(
        columns[0].class_list(),
        ["ug-grid-col-wrapper", "ug-grid-row-item", "ug-grid-sm-6"].map(String::from)
    );
    assert_eq!(columns[0].get_style("padding"), Some("8px"));
    assert_eq!(
        columns[1].class_list(),
        ["ug-grid-col-wrapper", "ug-grid-row-item", "ug-grid-12", "ug-grid-md-6"].map(String::from)
    );

    assert_eq!(
        grid.find_by_id("6-1-1").map(Element::text_content).as_deref(),
        Some("Kiri")
    );
    assert_eq!(
        grid.find_by_id("6-2-1").map(Element::text_content).as_deref(),
        Some("Kanan")
    );
    let list = grid.find(|el| el.tag() == "ul").unwrap();
    assert_eq!(list.child_elements().count(), 2);
}

#[test]
fn parameter_table_rows_in_order() {
    let guide = load_guide();
    let nodes = compile_chapter(&guide, 0);
    let wrapper = elements(&nodes)
        .into_iter()
        .find(|el| el.has_class("ug-param-table-wrapper"))
        .expect("parameter table");
    assert_eq!(wrapper.find_all(|el| el.tag() == "thead").len(), 1);
    let body = wrapper.find(|el| el.tag() == "tbody").unwrap();
    let rows: Vec<Vec<String>> = body
        .child_elements()
        .map(|tr| tr.child_elements().map(Element::text_content).collect())
        .collect();
    assert_eq!(rows, vec![vec!["id", "int"], vec!["aktif", "bool"]]);
}

#[test]
fn unknown_block_keeps_later_ids() {
    let guide = load_guide();
    let nodes = compile_chapter(&guide, 0);
    let ids: Vec<&str> = elements(&nodes)
        .into_iter()
        .filter_map(Element::get_id)
        .collect();
    assert_eq!(ids, vec!["1"]);
    // `foo` sits at position 5, so the grid row after it is still 6.
    let index = nav::index_nodes(&nodes);
    assert!(index.iter().any(|e| e.id == "6-1-1"));
}

#[test]
fn nav_index_matches_compiled_sections() {
    let guide = load_guide();
    let nodes = compile_chapter(&guide, 0);
    assert_eq!(
        nav::index_nodes(&nodes),
        vec![
            entry("1", 1, "Intro"),
            entry("6-1-1", 2, "Kiri"),
            entry("6-2-1", 2, "Kanan"),
        ]
    );

    let second = compile_chapter(&guide, 1);
    assert_eq!(nav::index_nodes(&second), vec![entry("1", 1, "Konfigurasi")]);
}

#[test]
fn compile_is_idempotent_on_fixture() {
    let guide = load_guide();
    for i in 0..guide.chapters.len() {
        let a: Vec<String> = compile_chapter(&guide, i).iter().map(Node::to_html).collect();
        let b: Vec<String> = compile_chapter(&guide, i).iter().map(Node::to_html).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn yaml_fixture_matches_json_semantics() {
    let guide = Guide::from_yaml(&read_fixture("guide.yaml")).expect("guide.yaml should load");
    let nodes = compile_chapter(&guide, 0);
    assert_eq!(
        nav::index_nodes(&nodes),
        vec![
            entry("1", 1, "Intro"),
            entry("3-1-1", 2, "Kiri"),
            entry("3-2-1", 2, "Kanan"),
        ]
    );
    let note = elements(&nodes)[1];
    assert!(note.has_class("secondary"));
    assert!(note.text_content().contains("Catatan"));
}

#[test]
fn json_round_trip_preserves_guide() {
    let guide = load_guide();
    let json = guide.to_json().unwrap();
    let again = Guide::from_json(&json).unwrap();
    assert_eq!(again, guide);
}

#[test]
fn malformed_payload_is_a_decode_error() {
    let err = Guide::from_json(&read_fixture("malformed.json")).unwrap_err();
    assert!(matches!(err, GuideError::Json(_)), "{err:?}");
    assert!(err.to_string().contains("`spacer` block"), "{err}");
}

#[test]
fn ragged_table_is_reported_with_position() {
    let blocks = guide_render::blocks_from_json(&read_fixture("ragged.json")).unwrap();
    let err = guide_render::compile(&blocks).unwrap_err();
    match err {
        GuideError::TableShape {
            section,
            row,
            expected,
            found,
        } => assert_eq!((section.as_str(), row, expected, found), ("2", 2, 2, 1)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn options_load_from_toml() {
    let options: CompileOptions = toml::from_str(&read_fixture("options.toml")).unwrap();
    assert_eq!(
        options,
        CompileOptions {
            max_depth: 4,
            markup: MarkupPolicy::Trusted,
            strict_tables: true,
        }
    );
}

fn nested_rows(depth: usize) -> Vec<Block> {
    let mut blocks = BlocksBuilder::new().paragraph("leaf").build();
    for _ in 0..depth {
        blocks = BlocksBuilder::new()
            .grid_row(vec![ColumnBuilder::new().children(blocks).build()])
            .build();
    }
    blocks
}

#[test]
fn nesting_beyond_configured_depth_fails() {
    let options: CompileOptions = toml::from_str(&read_fixture("options.toml")).unwrap();
    let compiler = Compiler::new(&options);

    let nodes = compiler.compile(&nested_rows(4)).unwrap();
    let leaf = nodes[0]
        .as_element()
        .unwrap()
        .find(|el| el.has_class("ug-paragraph"))
        .unwrap();
    assert_eq!(leaf.text_content(), "leaf");

    match compiler.compile(&nested_rows(5)).unwrap_err() {
        GuideError::DepthExceeded { section, limit } => {
            assert_eq!(section, "1-1-1-1-1-1-1-1-1");
            assert_eq!(limit, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn guide_page_renders_open_chapter_and_navs() {
    let guide = load_guide();
    let options = CompileOptions::default();
    let config = PageConfig {
        open_chapter: Some("lanjut".into()),
        ..Default::default()
    };
    let view = GuideRenderer::new(&options).render(&guide, &config).unwrap();

    assert_eq!(
        view.find_by_id("mulai").unwrap().get_style("display"),
        Some("none")
    );
    assert_eq!(
        view.find_by_id("lanjut").unwrap().get_style("display"),
        Some("block")
    );

    let chapter_nav = view.find_by_id("chapter-nav").unwrap();
    let labels: Vec<String> = chapter_nav.child_elements().map(Element::text_content).collect();
    assert_eq!(labels, vec!["Dasar", "Memulai", "Lanjutan"]);
    let active = chapter_nav.find(|el| el.has_class("active")).unwrap();
    assert_eq!(active.get_attr("data-chapter"), Some("lanjut"));

    let section_nav = view.find_by_id("section-nav").unwrap();
    let hrefs: Vec<&str> = section_nav
        .find_all(|el| el.has_class("tree-nav-link"))
        .iter()
        .filter_map(|el| el.get_attr("href"))
        .collect();
    assert_eq!(hrefs, vec!["#2-1"]);
    assert_eq!(
        view.find_by_id("2-1").map(Element::text_content).as_deref(),
        Some("Konfigurasi")
    );
    assert!(section_nav.find(|el| el.has_class("promotion-sidebar")).is_some());
}

#[test]
fn guide_page_element_ids_are_unique() {
    let guide = load_guide();
    let options = CompileOptions::default();
    let view = GuideRenderer::new(&options)
        .render(&guide, &PageConfig::default())
        .unwrap();
    let ids: Vec<&str> = view
        .find_all(|el| el.get_id().is_some())
        .iter()
        .filter_map(|el| el.get_id())
        .collect();
    let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
    assert!(ids.contains(&"1-6-2-1"));
    assert!(ids.contains(&"2-1"));
}

#[test]
fn full_page_html() {
    let guide = load_guide();
    let html = guide
        .to_html_page(&CompileOptions::default(), &PageConfig::default())
        .unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Panduan Aplikasi</title>"));
    assert!(html.contains("📚 Panduan Aplikasi"));
    assert!(html.contains("class=\"ug-pre-code-block line-numbers\""));
    assert!(html.contains("Lihat Video"));
    assert!(html.contains(".ug-grid-sm-6{"));
}
