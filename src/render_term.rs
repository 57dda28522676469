//! Terminal outline of a guide.
//!
//! Prints the chapter list and, for each chapter, its section index with
//! ANSI colors. Useful for checking section ids without a browser.

use colored::Colorize;

use crate::compile::{CompileOptions, Compiler};
use crate::error::Result;
use crate::nav::{self, NavEntry};
use crate::section::SectionId;
use crate::types::Guide;

/// Render one section index as indented, colored lines.
pub fn outline(entries: &[NavEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
        let title = match entry.level {
            1 => entry.title.bold().to_string(),
            2 => entry.title.normal().to_string(),
            _ => entry.title.dimmed().to_string(),
        };
        lines.push(format!("{indent}{} {title}", entry.href().cyan()));
    }
    lines.join("\n")
}

/// Compile every chapter and render the whole guide outline. Anchors match
/// the ones [`GuideRenderer`](crate::render_html::GuideRenderer) emits.
pub fn guide_outline(guide: &Guide, options: &CompileOptions) -> Result<String> {
    let compiler = Compiler::new(options);
    let mut parts = vec![guide.title.bold().underline().to_string()];
    for (i, chapter) in guide.chapters.iter().enumerate() {
        let root = SectionId::child(None, i + 1);
        let nodes = compiler.compile_with_prefix(&chapter.blocks, Some(&root))?;
        parts.push(format!("{} {}", "▸".yellow(), chapter.title.bold()));
        let body = outline(&nav::index_nodes(&nodes));
        if !body.is_empty() {
            parts.push(body);
        }
    }
    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BlocksBuilder, GuideBuilder};

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn outline_indents_by_level() {
        let text = plain(|| {
            outline(&[
                NavEntry { id: "1".into(), level: 1, title: "Top".into() },
                NavEntry { id: "2".into(), level: 2, title: "Sub".into() },
            ])
        });
        assert_eq!(text, "#1 Top\n  #2 Sub");
    }

    #[test]
    fn guide_outline_lists_chapters() {
        let guide = GuideBuilder::new("Manual")
            .chapter(
                "a",
                "Alpha",
                BlocksBuilder::new().heading("One").subheading("Two").build(),
            )
            .chapter("b", "Beta", BlocksBuilder::new().paragraph("no sections").build())
            .build();
        let text = plain(|| guide_outline(&guide, &CompileOptions::default())).unwrap();
        assert_eq!(text, "Manual\n▸ Alpha\n#1-1 One\n  #1-2 Two\n▸ Beta");
    }
}
