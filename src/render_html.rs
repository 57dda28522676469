//! Guide page renderer.
//!
//! Assembles a whole guide into one view: title header, chapter nav, one
//! article per chapter, and the section index of the open chapter. Only the
//! open chapter is displayed; switching chapters is left to the client.

use crate::compile::{CompileOptions, Compiler, Highlighter};
use crate::error::Result;
use crate::grid::grid_css;
use crate::nav;
use crate::node::{Element, Node, escape_html};
use crate::section::SectionId;
use crate::types::Guide;

/// Configuration for full-page HTML rendering.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Page title. Falls back to the guide title.
    pub title: Option<String>,
    /// Language code for `<html lang>` (default: "id").
    pub lang: Option<String>,
    /// Chapter shown initially. Falls back to the first chapter.
    pub open_chapter: Option<String>,
    /// Stylesheet URLs linked from `<head>`, in order.
    pub stylesheets: Vec<String>,
    /// Embed the generated grid stylesheet in a `<style>` tag.
    pub inline_grid_css: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: None,
            lang: None,
            open_chapter: None,
            stylesheets: Vec::new(),
            inline_grid_css: true,
        }
    }
}

/// Renders guides with a fixed compiler configuration.
pub struct GuideRenderer<'h> {
    compiler: Compiler<'h>,
}

impl<'h> GuideRenderer<'h> {
    pub fn new(options: &'h CompileOptions) -> Self {
        Self {
            compiler: Compiler::new(options),
        }
    }

    pub fn with_highlighter(self, highlighter: &'h dyn Highlighter) -> Self {
        Self {
            compiler: self.compiler.with_highlighter(highlighter),
        }
    }

    /// Build the guide view.
    ///
    /// All chapters share one document, so each chapter's section ids are
    /// rooted at its 1-based position: the first heading of chapter 2 is
    /// `2-1`. The section index lists the open article only.
    pub fn render(&self, guide: &Guide, config: &PageConfig) -> Result<Element> {
        let open_id = config
            .open_chapter
            .as_deref()
            .filter(|id| guide.chapters.iter().any(|c| c.id == *id))
            .or_else(|| guide.chapters.first().map(|c| c.id.as_str()));

        let mut main = Element::new("main").class("main-content");
        let mut sections = Vec::new();
        for (i, chapter) in guide.chapters.iter().enumerate() {
            let is_open = open_id == Some(chapter.id.as_str());
            let root = SectionId::child(None, i + 1);
            let article = Element::new("article")
                .id(chapter.id.as_str())
                .class("article-content")
                .style("display", if is_open { "block" } else { "none" })
                .children(self.compiler.compile_with_prefix(&chapter.blocks, Some(&root))?);
            if is_open {
                sections = nav::index(&article);
            }
            main = main.child(article);
        }

        Ok(Element::new("div")
            .class("ug-guide")
            .child(
                Element::new("header").child(
                    Element::new("h1")
                        .id("ug-title-header")
                        .text(format!("📚 {}", guide.title)),
                ),
            )
            .child(
                Element::new("aside")
                    .class("sidebar-left")
                    .child(nav::chapter_nav(&guide.chapters, open_id)),
            )
            .child(main)
            .child(
                Element::new("aside")
                    .class("sidebar-right")
                    .child(nav::section_nav(&sections)),
            ))
    }

    /// Render the guide view as an HTML fragment.
    pub fn to_html(&self, guide: &Guide, config: &PageConfig) -> Result<String> {
        Ok(Node::from(self.render(guide, config)?).to_html())
    }

    /// Render the guide as a complete `<!DOCTYPE html>` document.
    pub fn to_html_page(&self, guide: &Guide, config: &PageConfig) -> Result<String> {
        let body = self.to_html(guide, config)?;
        let lang = config.lang.as_deref().unwrap_or("id");
        let title = config.title.as_deref().unwrap_or(&guide.title);

        let mut head_extra = String::new();
        for href in &config.stylesheets {
            head_extra.push_str(&format!(
                "\n    <link rel=\"stylesheet\" href=\"{}\">",
                escape_html(href)
            ));
        }
        if config.inline_grid_css {
            head_extra.push_str(&format!("\n    <style>{}</style>", grid_css()));
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>{head_extra}
</head>
<body>
{body}
</body>
</html>"#,
            lang = escape_html(lang),
            title = escape_html(title),
            head_extra = head_extra,
            body = body,
        ))
    }
}
