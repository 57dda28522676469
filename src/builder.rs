//! Programmatic guide builders.
//!
//! [`BlocksBuilder`] assembles a block list with a fluent API,
//! [`ColumnBuilder`] does the same for one grid column, and [`GuideBuilder`]
//! collects chapters into a [`Guide`].

use crate::types::{
    AlertKind, Block, Chapter, CodeContent, ColumnSpec, GridRowContent, GridSpan, Guide,
    HeadingContent, ImageContent, LinkContent, ParagraphContent, StepItem, StepsContent,
    TableContent, TableRow, TrustedHtml, VideoContent,
};

// -----------------------------------------------------------------------
// BlocksBuilder
// -----------------------------------------------------------------------

/// Fluent builder for a block list.
///
/// # Example
///
/// ```
/// use guide_render::builder::BlocksBuilder;
/// use guide_render::types::AlertKind;
///
/// let blocks = BlocksBuilder::new()
///     .heading("Welcome")
///     .alert(AlertKind::Tips, "Save often")
///     .build();
///
/// assert_eq!(blocks.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct BlocksBuilder {
    blocks: Vec<Block>,
}

impl BlocksBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-built block.
    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn heading(self, text: &str) -> Self {
        self.block(Block::Heading(HeadingContent {
            text: text.to_string(),
            margin: false,
        }))
    }

    pub fn subheading(self, text: &str) -> Self {
        self.block(Block::Subheading(HeadingContent {
            text: text.to_string(),
            margin: false,
        }))
    }

    pub fn paragraph(self, text: &str) -> Self {
        self.block(Block::Paragraph(ParagraphContent {
            text: text.to_string(),
            align: None,
            indent: false,
            margin: false,
        }))
    }

    pub fn rich_text(self, markup: TrustedHtml) -> Self {
        self.block(Block::RichText(markup))
    }

    pub fn alert(self, kind: AlertKind, text: &str) -> Self {
        self.block(Block::Alert {
            kind,
            text: text.to_string(),
        })
    }

    pub fn spacer(self, units: f64) -> Self {
        self.block(Block::Spacer(units))
    }

    pub fn bullet_list(self, items: &[&str]) -> Self {
        self.block(Block::BulletList(strings(items)))
    }

    pub fn numbered_list(self, items: &[&str]) -> Self {
        self.block(Block::NumberedList(strings(items)))
    }

    /// Add a steps block from `(text, description)` pairs.
    pub fn steps(self, items: &[(&str, Option<&str>)]) -> Self {
        self.block(Block::Steps(StepsContent {
            orientation: None,
            items: items
                .iter()
                .map(|(text, description)| StepItem {
                    text: text.to_string(),
                    description: description.map(str::to_string),
                })
                .collect(),
        }))
    }

    pub fn code(self, language: Option<&str>, code: &str) -> Self {
        self.block(Block::CodeBlock(CodeContent {
            code: code.to_string(),
            language: language.map(str::to_string),
        }))
    }

    pub fn general_table(self, header: &[&str], rows: &[&[&str]]) -> Self {
        self.block(Block::GeneralTable(table(header, rows)))
    }

    pub fn parameter_table(self, header: &[&str], rows: &[&[&str]]) -> Self {
        self.block(Block::ParameterTable(table(header, rows)))
    }

    pub fn image(self, url: &str, alt: &str, caption: Option<&str>) -> Self {
        self.block(Block::Image(ImageContent {
            url: Some(url.to_string()),
            alt_text: Some(alt.to_string()),
            caption: caption.map(str::to_string),
        }))
    }

    pub fn link(self, url: &str, text: Option<&str>, target: Option<&str>) -> Self {
        self.block(Block::Link(LinkContent {
            url: Some(url.to_string()),
            target: target.map(str::to_string),
            text: text.map(str::to_string),
        }))
    }

    pub fn video(self, content: VideoContent) -> Self {
        self.block(Block::Video(content))
    }

    pub fn grid_row(self, columns: Vec<ColumnSpec>) -> Self {
        self.block(Block::GridRow(GridRowContent {
            align: None,
            columns,
        }))
    }

    pub fn build(self) -> Vec<Block> {
        self.blocks
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn table(header: &[&str], rows: &[&[&str]]) -> TableContent {
    TableContent {
        header: strings(header),
        rows: rows.iter().map(|cells| TableRow { cells: strings(cells) }).collect(),
    }
}

// -----------------------------------------------------------------------
// ColumnBuilder
// -----------------------------------------------------------------------

/// Fluent builder for a grid column. Spans above 12 are clamped to 12.
#[derive(Debug, Default)]
pub struct ColumnBuilder {
    column: ColumnSpec,
}

fn clamp(span: u8) -> Option<GridSpan> {
    GridSpan::new(span.min(GridSpan::MAX))
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xs(mut self, span: u8) -> Self {
        self.column.xs = clamp(span);
        self
    }

    pub fn sm(mut self, span: u8) -> Self {
        self.column.sm = clamp(span);
        self
    }

    pub fn md(mut self, span: u8) -> Self {
        self.column.md = clamp(span);
        self
    }

    pub fn lg(mut self, span: u8) -> Self {
        self.column.lg = clamp(span);
        self
    }

    pub fn xl(mut self, span: u8) -> Self {
        self.column.xl = clamp(span);
        self
    }

    pub fn xxl(mut self, span: u8) -> Self {
        self.column.xxl = clamp(span);
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.column.style.insert(property.to_string(), value.to_string());
        self
    }

    pub fn children(mut self, blocks: Vec<Block>) -> Self {
        self.column.children = blocks;
        self
    }

    pub fn build(self) -> ColumnSpec {
        self.column
    }
}

// -----------------------------------------------------------------------
// GuideBuilder
// -----------------------------------------------------------------------

/// Fluent builder for a whole guide.
#[derive(Debug)]
pub struct GuideBuilder {
    guide: Guide,
}

impl GuideBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            guide: Guide {
                title: title.to_string(),
                chapters: Vec::new(),
            },
        }
    }

    pub fn chapter(mut self, id: &str, title: &str, blocks: Vec<Block>) -> Self {
        self.guide.chapters.push(Chapter {
            id: id.to_string(),
            title: title.to_string(),
            tag: None,
            blocks,
        });
        self
    }

    /// Add a chapter listed under a tag label in the chapter nav.
    pub fn tagged_chapter(mut self, tag: &str, id: &str, title: &str, blocks: Vec<Block>) -> Self {
        self.guide.chapters.push(Chapter {
            id: id.to_string(),
            title: title.to_string(),
            tag: Some(tag.to_string()),
            blocks,
        });
        self
    }

    pub fn build(self) -> Guide {
        self.guide
    }
}
