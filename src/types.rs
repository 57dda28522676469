//! Data model for guide documents.
//!
//! A guide is an ordered list of chapters, each holding an ordered list of
//! typed [`Block`]s. Blocks are read-only input: the compiler never mutates
//! them, it builds an annotated view alongside (see [`crate::section`]).

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::blocks::RawBlock;

// ------------------------------------------------------------------
// Guide / Chapter
// ------------------------------------------------------------------

/// A complete guide: a title and its chapters in navigation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// One chapter of a guide. Rendered as its own article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Element id of the chapter article; also the `data-chapter` nav key.
    pub id: String,
    pub title: String,
    /// Optional group label shown above the chapter in the chapter nav.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

// ------------------------------------------------------------------
// Block
// ------------------------------------------------------------------

/// A typed content block.
///
/// The wire form is `{ "type": <tag>, "content": <payload> }`. Tags that are
/// not recognised decode to [`Block::Unknown`] and are skipped at compile time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBlock")]
pub enum Block {
    Heading(HeadingContent),
    Subheading(HeadingContent),
    Paragraph(ParagraphContent),
    RichText(TrustedHtml),
    Alert { kind: AlertKind, text: String },
    /// Vertical gap; the payload is in spacer units (1 unit = 1.5rem).
    Spacer(f64),
    BulletList(Vec<String>),
    NumberedList(Vec<String>),
    Steps(StepsContent),
    CodeBlock(CodeContent),
    GeneralTable(TableContent),
    ParameterTable(TableContent),
    Image(ImageContent),
    Link(LinkContent),
    Video(VideoContent),
    GridRow(GridRowContent),
    Unknown {
        kind: String,
        content: serde_json::Value,
    },
}

impl Block {
    /// The wire `type` tag of this block.
    pub fn type_tag(&self) -> &str {
        match self {
            Block::Heading(_) => "heading",
            Block::Subheading(_) => "subheading",
            Block::Paragraph(_) => "paragraph",
            Block::RichText(_) => "rich-text",
            Block::Alert { kind, .. } => kind.as_str(),
            Block::Spacer(_) => "spacer",
            Block::BulletList(_) => "bullet-list",
            Block::NumberedList(_) => "numbered-list",
            Block::Steps(_) => "steps",
            Block::CodeBlock(_) => "code-block",
            Block::GeneralTable(_) => "general-table",
            Block::ParameterTable(_) => "parameter-table",
            Block::Image(_) => "image",
            Block::Link(_) => "link",
            Block::Video(_) => "video",
            Block::GridRow(_) => "grid-row",
            Block::Unknown { kind, .. } => kind,
        }
    }

    /// Columns of a grid row; empty for every other block.
    pub fn columns(&self) -> &[ColumnSpec] {
        match self {
            Block::GridRow(row) => &row.columns,
            _ => &[],
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.type_tag())?;
        match self {
            Block::Heading(c) | Block::Subheading(c) => map.serialize_entry("content", c)?,
            Block::Paragraph(c) => map.serialize_entry("content", c)?,
            Block::RichText(html) => map.serialize_entry("content", html)?,
            Block::Alert { text, .. } => map.serialize_entry("content", text)?,
            Block::Spacer(size) => map.serialize_entry("content", size)?,
            Block::BulletList(items) | Block::NumberedList(items) => {
                map.serialize_entry("content", items)?
            }
            Block::Steps(c) => map.serialize_entry("content", c)?,
            Block::CodeBlock(c) => map.serialize_entry("content", c)?,
            Block::GeneralTable(c) | Block::ParameterTable(c) => {
                map.serialize_entry("content", c)?
            }
            Block::Image(c) => map.serialize_entry("content", c)?,
            Block::Link(c) => map.serialize_entry("content", c)?,
            Block::Video(c) => map.serialize_entry("content", c)?,
            Block::GridRow(c) => map.serialize_entry("content", c)?,
            Block::Unknown { content, .. } => map.serialize_entry("content", content)?,
        }
        map.end()
    }
}

// ------------------------------------------------------------------
// Block payloads
// ------------------------------------------------------------------

/// Payload of `heading` and `subheading` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingContent {
    pub text: String,
    #[serde(default)]
    pub margin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphContent {
    pub text: String,
    /// Alignment keyword (`left`, `center`, `right`, `justify`), passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default)]
    pub indent: bool,
    #[serde(default)]
    pub margin: bool,
}

/// The four alert flavours. The block's own `type` tag selects the flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Note,
    Info,
    Warning,
    Tips,
}

impl AlertKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "note" => Some(AlertKind::Note),
            "info" => Some(AlertKind::Info),
            "warning" => Some(AlertKind::Warning),
            "tips" => Some(AlertKind::Tips),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Note => "note",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Tips => "tips",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsContent {
    /// Layout keyword (e.g. `horizontal`), passed through as a class suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default)]
    pub items: Vec<StepItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeContent {
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Payload shared by `general-table` and `parameter-table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableContent {
    pub header: Vec<String>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_code: Option<TrustedHtml>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRowContent {
    /// Row alignment keyword, passed through as `ug-{align}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    pub columns: Vec<ColumnSpec>,
}

// ------------------------------------------------------------------
// Grid columns
// ------------------------------------------------------------------

/// A column's share of a 12-unit row at one breakpoint. Always in `0..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSpan(u8);

impl GridSpan {
    pub const MAX: u8 = 12;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GridSpan {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GridSpan::new(value)
            .ok_or_else(|| format!("grid span {value} is outside 0..={}", GridSpan::MAX))
    }
}

impl From<GridSpan> for u8 {
    fn from(span: GridSpan) -> u8 {
        span.0
    }
}

/// One column of a `grid-row`.
///
/// An absent breakpoint inherits from the next smaller one; `Some(0)` is an
/// explicit zero-width column at that breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<GridSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<GridSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<GridSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<GridSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<GridSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xxl: Option<GridSpan>,
    /// Inline style declarations, applied verbatim in insertion order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub style: IndexMap<String, String>,
    #[serde(default)]
    pub children: Vec<Block>,
}

// ------------------------------------------------------------------
// Trusted markup
// ------------------------------------------------------------------

/// Author-supplied markup (rich text, video embeds).
///
/// Emitted verbatim only when the caller compiles with
/// [`MarkupPolicy::Trusted`](crate::compile::MarkupPolicy::Trusted);
/// otherwise it is rendered as escaped text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
