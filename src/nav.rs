//! Navigation index and sidebars.
//!
//! The section index is rediscovered from a compiled tree rather than from
//! the blocks: any element carrying `data-level` is a section, its `id` is
//! the anchor, and the first descendant with `data-section-title` names it.
//! This keeps the index consistent with whatever the compiler emitted.

use serde::Serialize;

use crate::node::{Element, Node};
use crate::types::Chapter;

/// Title used when a section has no titled descendant.
pub const UNTITLED_SECTION: &str = "Bagian Tanpa Judul";

/// One entry of the in-page section index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub id: String,
    pub level: u8,
    pub title: String,
}

impl NavEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Scan `root` in document order for sections.
pub fn index(root: &Element) -> Vec<NavEntry> {
    root.find_all(|el| el.get_attr("data-level").is_some())
        .into_iter()
        .map(entry_for)
        .collect()
}

/// Scan a list of top-level nodes, as returned by the compiler.
pub fn index_nodes(nodes: &[Node]) -> Vec<NavEntry> {
    nodes
        .iter()
        .filter_map(Node::as_element)
        .flat_map(index)
        .collect()
}

fn entry_for(section: &Element) -> NavEntry {
    let level = section
        .get_attr("data-level")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0);
    let title = section
        .find(|el| el.get_attr("data-section-title").is_some())
        .map(|el| match el.get_attr("data-section-title") {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => el.text_content(),
        })
        .unwrap_or_else(|| UNTITLED_SECTION.to_string());
    NavEntry {
        id: section.get_id().unwrap_or_default().to_string(),
        level,
        title,
    }
}

/// Right-hand sidebar: one link per section, then the promotion panel.
pub fn section_nav(entries: &[NavEntry]) -> Element {
    Element::new("nav")
        .id("section-nav")
        .children(entries.iter().map(section_link))
        .child(promotion())
}

fn section_link(entry: &NavEntry) -> Element {
    let link = Element::new("a")
        .classes(["nav-link", "tree-nav-link", "doc-link"])
        .class(format!("level-{}", entry.level))
        .class("text-truncate")
        .attr("href", entry.href());
    let link = match entry.level {
        1 => link.child(Element::new("i").classes(["bi", "bi-arrow-right", "me-2"])),
        2 => link.child(Element::new("i").classes(["bi", "bi-dot", "me-1"])),
        _ => link,
    };
    link.text(entry.title.as_str())
}

/// The call-to-action panel shown under the section index.
pub fn promotion() -> Element {
    Element::new("div")
        .classes(["promotion-sidebar", "mt-4", "p-3", "border", "rounded"])
        .child(
            Element::new("p")
                .classes(["fw-bold", "mb-1", "text-primary", "small"])
                .text("Butuh Dokumentasi Cepat?"),
        )
        .child(
            Element::new("p")
                .classes(["small", "text-muted", "mb-3"])
                .text("Buat panduan elegan dan siap pakai dalam hitungan menit."),
        )
        .child(
            Element::new("a")
                .attr("href", "#solusi-dokumentasi")
                .classes(["btn", "btn-primary", "btn-sm", "w-100"])
                .text("Buat Dokumentasi →"),
        )
}

/// Left-hand chapter list. The open chapter's link is `active`; a tag label
/// precedes each run of chapters sharing a new tag.
pub fn chapter_nav(chapters: &[Chapter], open_id: Option<&str>) -> Element {
    let mut nav = Element::new("nav").id("chapter-nav");
    let mut current_tag: Option<&str> = None;
    for chapter in chapters {
        let tag = chapter.tag.as_deref().filter(|t| !t.is_empty());
        if tag.is_some() && tag != current_tag {
            nav = nav.child(
                Element::new("a")
                    .classes(["nav-link", "doc-link", "tag-name"])
                    .attr("href", "#")
                    .text(tag.unwrap_or_default()),
            );
        }
        current_tag = tag;
        nav = nav.child(
            Element::new("a")
                .classes(["nav-link", "doc-link"])
                .class_if(open_id == Some(chapter.id.as_str()), "active")
                .attr("href", "#")
                .attr("data-chapter", chapter.id.as_str())
                .text(chapter.title.as_str()),
        );
    }
    nav
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: &str, level: u8, title: &str) -> Element {
        Element::new("section")
            .id(id)
            .attr("data-level", level.to_string())
            .child(
                Element::new("h2")
                    .attr("data-section-title", title)
                    .text(title),
            )
    }

    #[test]
    fn index_in_document_order() {
        let root = Element::new("article")
            .child(section("1", 1, "Intro"))
            .child(Element::new("p").text("body"))
            .child(
                Element::new("div").child(
                    Element::new("div").child(section("3-1-1", 2, "Nested")),
                ),
            );
        assert_eq!(
            index(&root),
            vec![
                NavEntry { id: "1".into(), level: 1, title: "Intro".into() },
                NavEntry { id: "3-1-1".into(), level: 2, title: "Nested".into() },
            ]
        );
    }

    #[test]
    fn untitled_section_falls_back() {
        let root = Element::new("div").child(
            Element::new("section").id("9").attr("data-level", "3"),
        );
        let entries = index(&root);
        assert_eq!(entries[0].title, UNTITLED_SECTION);
        assert_eq!(entries[0].level, 3);
    }

    #[test]
    fn empty_title_attribute_uses_text() {
        let root = Element::new("section")
            .id("1")
            .attr("data-level", "1")
            .child(Element::new("h2").attr("data-section-title", "").text("Shown"));
        assert_eq!(index(&root)[0].title, "Shown");
    }

    #[test]
    fn section_links_carry_level_icons() {
        let nav = section_nav(&[
            NavEntry { id: "1".into(), level: 1, title: "A".into() },
            NavEntry { id: "2".into(), level: 2, title: "B".into() },
            NavEntry { id: "2-1-1".into(), level: 3, title: "C".into() },
        ]);
        let links: Vec<&Element> = nav.child_elements().filter(|el| el.tag() == "a").collect();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].get_attr("href"), Some("#1"));
        assert!(links[0].has_class("level-1"));
        assert!(links[0].child_elements().next().unwrap().has_class("bi-arrow-right"));
        assert!(links[1].child_elements().next().unwrap().has_class("bi-dot"));
        assert_eq!(links[2].child_elements().count(), 0);
        assert!(nav.child_elements().last().unwrap().has_class("promotion-sidebar"));
    }

    #[test]
    fn chapter_nav_marks_active_and_tags() {
        let chapters = vec![
            Chapter { id: "c1".into(), title: "Start".into(), tag: Some("Basics".into()), blocks: vec![] },
            Chapter { id: "c2".into(), title: "Install".into(), tag: Some("Basics".into()), blocks: vec![] },
            Chapter { id: "c3".into(), title: "Tuning".into(), tag: Some("Advanced".into()), blocks: vec![] },
        ];
        let nav = chapter_nav(&chapters, Some("c2"));
        let labels: Vec<String> = nav.child_elements().map(Element::text_content).collect();
        assert_eq!(labels, vec!["Basics", "Start", "Install", "Advanced", "Tuning"]);
        let active: Vec<&str> = nav
            .find_all(|el| el.has_class("active"))
            .iter()
            .filter_map(|el| el.get_attr("data-chapter"))
            .collect();
        assert_eq!(active, vec!["c2"]);
    }
}
