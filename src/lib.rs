//! `guide-render`: compiler from guide block trees to navigable views.
//!
//! A guide is a list of chapters, each an ordered list of typed blocks
//! (headings, paragraphs, tables, grids, code, steps, media). This crate
//! assigns every block a hierarchical section id, compiles the blocks into
//! an immutable visual tree, and derives the navigation index from that tree.
//!
//! # Quick start
//!
//! ```
//! let blocks = guide_render::blocks_from_json(r#"[
//!     {"type": "heading", "content": {"text": "Intro"}},
//!     {"type": "paragraph", "content": {"text": "Hello."}}
//! ]"#).unwrap();
//!
//! let nodes = guide_render::compile(&blocks).unwrap();
//! assert_eq!(nodes.len(), 2);
//!
//! let index = guide_render::nav::index_nodes(&nodes);
//! assert_eq!(index[0].id, "1");
//! assert_eq!(index[0].title, "Intro");
//! ```

pub mod blocks;
pub mod builder;
pub mod compile;
pub mod error;
pub mod grid;
pub mod nav;
pub mod node;
pub mod render_html;
#[cfg(feature = "terminal")]
pub mod render_term;
pub mod section;
#[cfg(feature = "axum")]
pub mod serve;
pub mod types;

pub use blocks::{blocks_from_json, blocks_from_yaml};
pub use builder::{BlocksBuilder, ColumnBuilder, GuideBuilder};
pub use compile::{CompileOptions, Compiler, Highlighter, MarkupPolicy};
pub use error::{GuideError, Result};
pub use node::{Element, Node};
pub use render_html::{GuideRenderer, PageConfig};
pub use section::{SectionId, Sectioned, assign_section_ids};
pub use types::*;

/// Compile `blocks` with default options and no highlighter.
pub fn compile(blocks: &[Block]) -> Result<Vec<Node>> {
    Compiler::new(&CompileOptions::default()).compile(blocks)
}

impl Guide {
    /// Load a guide from JSON.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a guide from YAML.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Serialize back to the JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the guide view as an HTML fragment with default options.
    pub fn to_html(&self) -> Result<String> {
        GuideRenderer::new(&CompileOptions::default()).to_html(self, &PageConfig::default())
    }

    /// Render a complete HTML page.
    pub fn to_html_page(&self, options: &CompileOptions, config: &PageConfig) -> Result<String> {
        GuideRenderer::new(options).to_html_page(self, config)
    }

    /// Render the chapter and section outline as ANSI-colored terminal text.
    #[cfg(feature = "terminal")]
    pub fn to_terminal(&self, options: &CompileOptions) -> Result<String> {
        render_term::guide_outline(self, options)
    }
}
