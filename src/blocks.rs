//! Wire-level block decoding.
//!
//! Blocks arrive as `{ "type": ..., "content": ... }`. [`resolve_block`]
//! turns that raw pair into a typed [`Block`]. Unknown tags pass through as
//! [`Block::Unknown`] so newer documents still load in older renderers.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::types::{AlertKind, Block, TrustedHtml};

/// A block as it appears on the wire, before its payload is typed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
}

impl TryFrom<RawBlock> for Block {
    type Error = String;

    fn try_from(raw: RawBlock) -> std::result::Result<Self, Self::Error> {
        let kind = raw.kind.clone();
        resolve_block(raw).map_err(|e| format!("`{kind}` block: {e}"))
    }
}

/// Resolve a raw block into a typed variant based on its tag.
pub fn resolve_block(raw: RawBlock) -> std::result::Result<Block, serde_json::Error> {
    let RawBlock { kind, content } = raw;

    if let Some(alert) = AlertKind::from_tag(&kind) {
        return Ok(Block::Alert {
            kind: alert,
            text: payload(content)?,
        });
    }

    let block = match kind.as_str() {
        "heading" => Block::Heading(payload(content)?),
        "subheading" => Block::Subheading(payload(content)?),
        "paragraph" => Block::Paragraph(payload(content)?),
        "rich-text" => Block::RichText(payload::<TrustedHtml>(content)?),
        "spacer" => Block::Spacer(payload(content)?),
        "bullet-list" => Block::BulletList(payload(content)?),
        "numbered-list" => Block::NumberedList(payload(content)?),
        "steps" => Block::Steps(payload(content)?),
        "code-block" => Block::CodeBlock(payload(content)?),
        "general-table" => Block::GeneralTable(payload(content)?),
        "parameter-table" => Block::ParameterTable(payload(content)?),
        "image" => Block::Image(payload(content)?),
        "link" => Block::Link(payload(content)?),
        "video" => Block::Video(payload(content)?),
        "grid-row" => Block::GridRow(payload(content)?),
        _ => Block::Unknown { kind, content },
    };
    Ok(block)
}

/// Decode a payload, treating an absent `content` like an empty object so
/// payloads made only of optional fields still load.
fn payload<T: DeserializeOwned>(content: Value) -> std::result::Result<T, serde_json::Error> {
    match content {
        Value::Null => serde_json::from_value(Value::Object(Default::default()))
            .or_else(|_| serde_json::from_value(Value::Null)),
        other => serde_json::from_value(other),
    }
}

// ------------------------------------------------------------------
// Loaders
// ------------------------------------------------------------------

/// Decode a JSON array of blocks.
pub fn blocks_from_json(source: &str) -> Result<Vec<Block>> {
    Ok(serde_json::from_str(source)?)
}

/// Decode a YAML sequence of blocks.
pub fn blocks_from_yaml(source: &str) -> Result<Vec<Block>> {
    Ok(serde_yaml::from_str(source)?)
}
