//! Grid layout resolver.
//!
//! A `grid-row` column carries up to six responsive widths on a 12-unit
//! grid. Widths cascade mobile-first: an absent breakpoint inherits from the
//! next smaller one, while an explicit `0` collapses the column at that
//! breakpoint.

use std::fmt::Write;

use crate::compile::Compiler;
use crate::error::Result;
use crate::node::Element;
use crate::section::Sectioned;
use crate::types::{ColumnSpec, GridSpan};

/// Class every column wrapper carries before its breakpoint classes.
pub const BASE_CLASS: &str = "ug-grid-row-item";

/// A named responsive tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: &'static str,
    /// Viewport width (px) where the tier starts; 0 for the implicit tier.
    pub min_width: u32,
}

/// Breakpoints in cascade order. `xs` is the implicit default tier and has
/// no infix in its class name.
pub const BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint { name: "xs", min_width: 0 },
    Breakpoint { name: "sm", min_width: 576 },
    Breakpoint { name: "md", min_width: 768 },
    Breakpoint { name: "lg", min_width: 992 },
    Breakpoint { name: "xl", min_width: 1200 },
    Breakpoint { name: "xxl", min_width: 1400 },
];

/// The column's widths paired with their breakpoints, in cascade order.
fn spans(column: &ColumnSpec) -> [(Breakpoint, Option<GridSpan>); 6] {
    let values = [column.xs, column.sm, column.md, column.lg, column.xl, column.xxl];
    std::array::from_fn(|i| (BREAKPOINTS[i], values[i]))
}

fn span_class(bp: Breakpoint, span: u8) -> String {
    if bp.min_width == 0 {
        format!("ug-grid-{span}")
    } else {
        format!("ug-grid-{}-{span}", bp.name)
    }
}

/// Layout classes for a column: the base class, then one class per present
/// breakpoint in `xs, sm, md, lg, xl, xxl` order.
pub fn layout_classes(column: &ColumnSpec) -> Vec<String> {
    let mut classes = vec![BASE_CLASS.to_string()];
    classes.extend(
        spans(column)
            .into_iter()
            .filter_map(|(bp, span)| span.map(|s| span_class(bp, s.get()))),
    );
    classes
}

/// Short human-readable summary of the column's breakpoints, e.g.
/// `(XS:12, MD:6)`. A column with no breakpoints spans the full row.
pub fn breakpoint_label(column: &ColumnSpec) -> String {
    let parts: Vec<String> = spans(column)
        .into_iter()
        .filter_map(|(bp, span)| span.map(|s| format!("{}:{}", bp.name.to_uppercase(), s.get())))
        .collect();
    if parts.is_empty() {
        "(Default Penuh)".to_string()
    } else {
        format!("({})", parts.join(", "))
    }
}

/// Build one column: wrapper with layout classes and inline style, and a
/// content region holding the compiled children.
pub fn resolve_column(
    compiler: &Compiler<'_>,
    column: &ColumnSpec,
    children: &[Sectioned<'_>],
) -> Result<Element> {
    let content = Element::new("div")
        .class("ug-grid-col-content")
        .children(compiler.render_list(children)?);
    let mut wrapper = Element::new("div")
        .class("ug-grid-col-wrapper")
        .classes(layout_classes(column));
    for (property, value) in &column.style {
        wrapper = wrapper.style(property.as_str(), value.as_str());
    }
    Ok(wrapper.child(content))
}

/// Stylesheet for every `ug-grid-*` class, mobile-first.
pub fn grid_css() -> String {
    let mut css = String::from(
        ".ug-grid-row-preview{display:flex;flex-wrap:wrap}\n\
         .ug-grid-row-item{flex:1 0 0%;box-sizing:border-box;min-width:0}\n",
    );
    for bp in BREAKPOINTS {
        let mut rules = String::new();
        for span in 0..=GridSpan::MAX {
            let class = span_class(bp, span);
            if span == 0 {
                let _ = writeln!(rules, ".{class}{{display:none}}");
            } else {
                let width = f64::from(span) * 100.0 / f64::from(GridSpan::MAX);
                let _ = writeln!(
                    rules,
                    ".{class}{{display:block;flex:0 0 auto;width:{}%}}",
                    trim_float(width)
                );
            }
        }
        if bp.min_width == 0 {
            css.push_str(&rules);
        } else {
            let _ = writeln!(css, "@media (min-width:{}px){{\n{rules}}}", bp.min_width);
        }
    }
    css
}

/// Percentages with at most four decimals and no trailing zeros.
fn trim_float(value: f64) -> String {
    let s = format!("{value:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
