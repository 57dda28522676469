//! Block-tree compiler.
//!
//! Walks a list of [`Block`]s and produces the visual tree, one output unit
//! per block, in order. Section ids are assigned up front by
//! [`assign_section_ids`]; the compiler only reads them. Grid columns are
//! laid out by [`crate::grid`], which calls back into the compiler for the
//! column's children.

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};
use crate::grid;
use crate::node::{Element, Node};
use crate::section::{SectionId, Sectioned, assign_section_ids};
use crate::types::{
    AlertKind, Block, CodeContent, GridRowContent, HeadingContent, ImageContent, LinkContent,
    ParagraphContent, StepsContent, TableContent, TrustedHtml, VideoContent,
};

/// Link target that opens a new browsing context.
const NEW_CONTEXT: &str = "_blank";

/// Classes of the external-link glyph.
const EXTERNAL_ICON: [&str; 2] = ["bi", "bi-box-arrow-up-right"];

// ------------------------------------------------------------------
// Options
// ------------------------------------------------------------------

/// How author-supplied markup (rich text, video embeds) is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupPolicy {
    /// Render markup as escaped text.
    #[default]
    Escape,
    /// The caller vouches for the markup; emit it verbatim.
    Trusted,
}

/// Compiler configuration. Every field has a default, so a partial TOML or
/// JSON table is enough to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Maximum grid nesting depth.
    pub max_depth: usize,
    pub markup: MarkupPolicy,
    /// Reject tables whose rows do not match the header width.
    pub strict_tables: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: 32,
            markup: MarkupPolicy::Escape,
            strict_tables: true,
        }
    }
}

/// Syntax highlighting collaborator, called once per code block.
pub trait Highlighter {
    /// Receives the finished `code` element and returns the element to emit.
    fn highlight(&self, code: Element, language: &str) -> Element;
}

// ------------------------------------------------------------------
// Compiler
// ------------------------------------------------------------------

/// Compiles block lists into visual trees.
///
/// Holds no state between calls: compiling the same blocks twice yields
/// equal trees.
#[derive(Clone, Copy)]
pub struct Compiler<'h> {
    options: &'h CompileOptions,
    highlighter: Option<&'h dyn Highlighter>,
}

impl<'h> Compiler<'h> {
    pub fn new(options: &'h CompileOptions) -> Self {
        Self {
            options,
            highlighter: None,
        }
    }

    pub fn with_highlighter(mut self, highlighter: &'h dyn Highlighter) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Compile `blocks` into a list of top-level nodes.
    pub fn compile(&self, blocks: &[Block]) -> Result<Vec<Node>> {
        self.compile_with_prefix(blocks, None)
    }

    /// Compile `blocks` with section ids rooted under `prefix`, so the
    /// first block of a list compiled under `2` is `2-1`.
    pub fn compile_with_prefix(
        &self,
        blocks: &[Block],
        prefix: Option<&SectionId>,
    ) -> Result<Vec<Node>> {
        let sectioned = assign_section_ids(blocks, prefix, self.options.max_depth)?;
        self.render_list(&sectioned)
    }

    /// Compile `blocks` and append the result to `into`.
    pub fn compile_into(&self, blocks: &[Block], into: Element) -> Result<Element> {
        Ok(into.children(self.compile(blocks)?))
    }

    pub(crate) fn render_list(&self, items: &[Sectioned<'_>]) -> Result<Vec<Node>> {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.extend(self.render_block(item)?);
        }
        Ok(out)
    }

    fn render_block(&self, item: &Sectioned<'_>) -> Result<Vec<Node>> {
        let one = |el: Element| -> Result<Vec<Node>> { Ok(vec![Node::Element(el)]) };
        match item.block {
            Block::Heading(c) => one(heading(item, c, "h2", "ug-heading-h2")),
            Block::Subheading(c) => one(heading(item, c, "h3", "ug-heading-h3")),
            Block::Paragraph(c) => one(paragraph(c)),
            Block::RichText(markup) => {
                one(Element::new("div").class("ug-rich-text").child(self.markup(markup)))
            }
            Block::Alert { kind, text } => one(alert(*kind, text)),
            Block::Spacer(size) => one(spacer(*size)),
            Block::BulletList(items) => one(list("ul", "ug-bullet-list", items)),
            Block::NumberedList(items) => one(list("ol", "ug-numbered-list", items)),
            Block::Steps(c) => one(steps(c)),
            Block::CodeBlock(c) => one(self.code_block(item, c)),
            Block::GeneralTable(c) => one(self.table(item, c, &GENERAL_TABLE)?),
            Block::ParameterTable(c) => one(self.table(item, c, &PARAMETER_TABLE)?),
            Block::Image(c) => Ok(image(c)),
            Block::Link(c) => one(link(c)),
            Block::Video(c) => one(self.video(c)),
            Block::GridRow(c) => one(self.grid_row(item, c)?),
            Block::Unknown { kind, .. } => {
                tracing::debug!("skipping unknown block type `{}` at section {}", kind, item.id);
                Ok(Vec::new())
            }
        }
    }

    fn markup(&self, markup: &TrustedHtml) -> Node {
        match self.options.markup {
            MarkupPolicy::Trusted => Node::Raw(markup.clone()),
            MarkupPolicy::Escape => {
                tracing::debug!("escaping author markup; compile with MarkupPolicy::Trusted to emit it");
                Node::text(markup.as_str())
            }
        }
    }

    fn code_block(&self, item: &Sectioned<'_>, c: &CodeContent) -> Element {
        let language = c
            .language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("none");
        let code = Element::new("code")
            .class("ug-code-block")
            .class(format!("language-{language}"))
            .text(c.code.as_str());
        let code = match self.highlighter {
            Some(h) => h.highlight(code, language),
            None => {
                tracing::warn!(
                    "no syntax highlighter configured; code block at section {} left unhighlighted",
                    item.id
                );
                code
            }
        };
        Element::new("pre")
            .classes(["ug-pre-code-block", "line-numbers"])
            .child(code)
    }

    fn table(&self, item: &Sectioned<'_>, c: &TableContent, style: &TableStyle) -> Result<Element> {
        if self.options.strict_tables {
            for (i, row) in c.rows.iter().enumerate() {
                if row.cells.len() != c.header.len() {
                    return Err(GuideError::TableShape {
                        section: item.id.to_string(),
                        row: i + 1,
                        expected: c.header.len(),
                        found: row.cells.len(),
                    });
                }
            }
        }

        let header_row = Element::new("tr").children(c.header.iter().map(|title| {
            Element::new("th")
                .attr("scope", "col")
                .class(style.header_cell)
                .text(title.as_str())
        }));
        let body = Element::new("tbody").class("ug-table-body").children(c.rows.iter().map(|row| {
            Element::new("tr").class(style.row).children(
                row.cells
                    .iter()
                    .map(|cell| Element::new("td").class(style.cell).text(cell.as_str())),
            )
        }));
        let table = Element::new("table")
            .classes(style.table.iter().copied())
            .child(Element::new("thead").class(style.head).child(header_row))
            .child(body);
        Ok(Element::new("div").class(style.wrapper).child(table))
    }

    fn video(&self, c: &VideoContent) -> Element {
        let mut container = Element::new("div").class("ug-video-container");
        if let Some(embed) = c.embed_code.as_ref().filter(|e| !e.is_empty()) {
            container = container.child(
                Element::new("div")
                    .class("ug-video-embed-wrapper")
                    .child(Element::new("div").child(self.markup(embed))),
            );
        }
        if let Some(url) = non_empty(&c.url) {
            let link = Element::new("a")
                .attr("href", url)
                .attr("target", NEW_CONTEXT)
                .class("ug-element-text-decoration-none")
                .text("Lihat Video")
                .child(Element::new("i").classes(EXTERNAL_ICON));
            container = container.child(Element::new("div").class("ug-video-url-link").child(link));
        }
        if let Some(description) = non_empty(&c.description) {
            container = container.child(
                Element::new("div")
                    .class("ug-video-description")
                    .text(description),
            );
        }
        container
    }

    fn grid_row(&self, item: &Sectioned<'_>, c: &GridRowContent) -> Result<Element> {
        let mut row = Element::new("div").class("ug-grid-row-preview");
        if let Some(align) = non_empty(&c.align) {
            row = row.class(format!("ug-{align}"));
        }
        for (column, children) in c.columns.iter().zip(&item.columns) {
            row = row.child(grid::resolve_column(self, column, children)?);
        }
        Ok(Element::new("div").class("ug-grid-container").child(row))
    }
}

// ------------------------------------------------------------------
// Stateless builders
// ------------------------------------------------------------------

fn heading(item: &Sectioned<'_>, c: &HeadingContent, tag: &str, class: &str) -> Element {
    let title = Element::new(tag)
        .class(class)
        .class_if(c.margin, "with-margin")
        .attr("data-section-title", c.text.as_str())
        .text(c.text.as_str());
    Element::new("section")
        .id(item.id.as_str())
        .attr("data-level", item.level.to_string())
        .child(title)
}

fn paragraph(c: &ParagraphContent) -> Element {
    let mut p = Element::new("p").class("ug-paragraph");
    if let Some(align) = non_empty(&c.align) {
        p = p.class(format!("with-align-{align}"));
    }
    p.class_if(c.indent, "with-indent")
        .class_if(c.margin, "with-margin")
        .text(c.text.as_str())
}

/// Style class for an alert flavour.
pub fn alert_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "info",
        AlertKind::Warning => "danger",
        AlertKind::Tips => "success",
        AlertKind::Note => "secondary",
    }
}

/// Icon and label shown at the start of an alert.
pub fn alert_label(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "💡 Info",
        AlertKind::Warning => "⚠️ Warning",
        AlertKind::Tips => "✅ Tips",
        AlertKind::Note => "📝 Catatan",
    }
}

fn alert(kind: AlertKind, text: &str) -> Element {
    Element::new("div")
        .classes(["ug-alert-preview", "alert", alert_class(kind)])
        .child(Element::new("strong").text(alert_label(kind)))
        .text(format!(" {text}"))
}

fn spacer(size: f64) -> Element {
    Element::new("div")
        .class("ug-space")
        .style("height", format!("{}rem", size * 1.5))
        .style("width", "100%")
}

fn list(tag: &str, class: &str, items: &[String]) -> Element {
    Element::new(tag).class(class).children(
        items
            .iter()
            .map(|text| Element::new("li").class("ug-list-group-item").text(text.as_str())),
    )
}

fn steps(c: &StepsContent) -> Element {
    let mut ol = Element::new("ol").class("ug-steps");
    if let Some(orientation) = non_empty(&c.orientation) {
        ol = ol.class(format!("ug-steps-{orientation}"));
    }
    ol.children(c.items.iter().enumerate().map(|(i, step)| {
        let description = non_empty(&step.description);
        let mut content = Element::new("div")
            .class("ug-steps-content")
            .child(Element::new("div").class("ug-steps-content-text").text(step.text.as_str()));
        if let Some(d) = description {
            content = content.child(
                Element::new("div")
                    .class("ug-steps-content-description")
                    .text(d),
            );
        }
        Element::new("li")
            .class("ug-steps-item")
            .class_if(description.is_some(), "ug-steps-item-desction")
            .child(
                Element::new("span")
                    .class("ug-steps-indicator")
                    .text((i + 1).to_string()),
            )
            .child(content)
    }))
}

/// Image plus, when captioned, the caption block right after it.
fn image(c: &ImageContent) -> Vec<Node> {
    let img = Element::new("img")
        .attr("src", c.url.as_deref().unwrap_or(""))
        .attr("alt", c.alt_text.as_deref().unwrap_or(""))
        .style("width", "100%")
        .class("ug-image");
    let mut out = vec![Node::Element(img)];
    if let Some(caption) = non_empty(&c.caption) {
        out.push(
            Element::new("div")
                .class("ug-image-caption")
                .text(caption)
                .into(),
        );
    }
    out
}

fn link(c: &LinkContent) -> Element {
    let mut a = Element::new("a").attr("href", non_empty(&c.url).unwrap_or("#"));
    if let Some(target) = non_empty(&c.target) {
        a = a.attr("target", target);
    }
    let text = non_empty(&c.text).or(non_empty(&c.url)).unwrap_or("");
    a = a.text(text);
    if c.target.as_deref() == Some(NEW_CONTEXT) {
        a = a.child(
            Element::new("i")
                .classes(EXTERNAL_ICON)
                .class("ug-element-ms-1"),
        );
    }
    a.class("ug-link")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Class names for one of the two table variants.
struct TableStyle {
    wrapper: &'static str,
    table: &'static [&'static str],
    head: &'static str,
    header_cell: &'static str,
    row: &'static str,
    cell: &'static str,
}

const GENERAL_TABLE: TableStyle = TableStyle {
    wrapper: "ug-table-wrapper",
    table: &["ug-table-general"],
    head: "ug-table-head",
    header_cell: "ug-table-header-cell",
    row: "ug-table-row",
    cell: "ug-table-cell",
};

const PARAMETER_TABLE: TableStyle = TableStyle {
    wrapper: "ug-param-table-wrapper",
    table: &["ug-table-parameter", "table", "table-bordered", "table-hover"],
    head: "ug-param-table-head",
    header_cell: "ug-param-header-cell",
    row: "ug-param-table-row",
    cell: "ug-param-table-cell",
};
