//! Hierarchical section identifiers.
//!
//! Every block gets a dash-joined path of 1-based sibling positions. A block
//! nested in a grid column extends its row's path with the column position
//! and then its own position inside the column: child 1 of column 2 of
//! top-level block 3 is `3-2-1`.
//!
//! The pass is pure. Input blocks are left untouched and a parallel
//! [`Sectioned`] tree is returned for the compiler to walk.

use std::fmt;

use crate::error::{GuideError, Result};
use crate::types::Block;

/// A dash-joined path of 1-based sibling indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    /// Id of the `position`-th (1-based) block under `parent`, or at the root.
    pub fn child(parent: Option<&SectionId>, position: usize) -> Self {
        match parent {
            Some(p) => SectionId(format!("{}-{position}", p.0)),
            None => SectionId(position.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.0.split('-').count()
    }

    /// Parse an existing id, rejecting anything but 1-based numeric segments.
    pub fn parse(s: &str) -> Option<Self> {
        let valid = !s.is_empty()
            && s.split('-').all(|seg| {
                !seg.is_empty()
                    && !seg.starts_with('0')
                    && seg.bytes().all(|b| b.is_ascii_digit())
            });
        valid.then(|| SectionId(s.to_string()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigation level of a block: 1 for headings, 2 for subheadings, 3 for the rest.
///
/// This is a fixed per-type value, not the nesting depth.
pub fn level_of(block: &Block) -> u8 {
    match block {
        Block::Heading(_) => 1,
        Block::Subheading(_) => 2,
        _ => 3,
    }
}

/// A block annotated with its section id and level.
#[derive(Debug, Clone, PartialEq)]
pub struct Sectioned<'a> {
    pub block: &'a Block,
    pub id: SectionId,
    pub level: u8,
    /// For grid rows, the annotated children of each column in order.
    pub columns: Vec<Vec<Sectioned<'a>>>,
    /// Whether the block sits inside a grid column.
    pub nested: bool,
}

impl<'a> Sectioned<'a> {
    /// Headings, subheadings, and anything inside a grid column.
    pub fn is_navigable(&self) -> bool {
        self.nested || matches!(self.block, Block::Heading(_) | Block::Subheading(_))
    }

    /// This block followed by everything nested in it, depth-first.
    pub fn walk(&self) -> Vec<&Sectioned<'a>> {
        let mut out = vec![self];
        for column in &self.columns {
            for child in column {
                out.extend(child.walk());
            }
        }
        out
    }
}

/// Assign section ids to `blocks` and everything nested in their grid columns.
///
/// `prefix` is the id of the enclosing path, `None` at the root. Grid
/// nesting deeper than `max_depth` fails with [`GuideError::DepthExceeded`].
pub fn assign_section_ids<'a>(
    blocks: &'a [Block],
    prefix: Option<&SectionId>,
    max_depth: usize,
) -> Result<Vec<Sectioned<'a>>> {
    assign_inner(blocks, prefix, 0, max_depth)
}

fn assign_inner<'a>(
    blocks: &'a [Block],
    prefix: Option<&SectionId>,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<Sectioned<'a>>> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let id = SectionId::child(prefix, i + 1);
            let columns = block
                .columns()
                .iter()
                .enumerate()
                .map(|(j, column)| {
                    if depth + 1 > max_depth {
                        return Err(GuideError::DepthExceeded {
                            section: id.to_string(),
                            limit: max_depth,
                        });
                    }
                    let column_id = SectionId::child(Some(&id), j + 1);
                    assign_inner(&column.children, Some(&column_id), depth + 1, max_depth)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Sectioned {
                block,
                level: level_of(block),
                id,
                columns,
                nested: depth > 0,
            })
        })
        .collect()
}
