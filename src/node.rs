//! The visual tree produced by the compiler.
//!
//! A [`Node`] tree is built bottom-up with the consuming builder methods on
//! [`Element`] and is not modified afterwards. It is independent of any live
//! view; [`Node::to_html`] serializes it for surfaces that take markup.

use indexmap::IndexMap;

use crate::types::TrustedHtml;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// One unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Markup the caller has affirmed as trusted; serialized verbatim.
    Raw(TrustedHtml),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants. Raw markup is
    /// included as written.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Raw(html) => out.push_str(html.as_str()),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serialize to an HTML fragment. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape_html(t)),
            Node::Raw(html) => out.push_str(html.as_str()),
            Node::Element(el) => el.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// A tagged element with classes, attributes, inline styles, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: IndexMap::new(),
            styles: IndexMap::new(),
            children: Vec::new(),
        }
    }

    // -- Builders -------------------------------------------------------

    /// Add a class. Duplicates are ignored, like `classList.add`.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes.into_iter().fold(self, |el, c| el.class(c))
    }

    pub fn class_if(self, cond: bool, class: impl Into<String>) -> Self {
        if cond { self.class(class) } else { self }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    // -- Accessors ------------------------------------------------------

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn get_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn styles(&self) -> &IndexMap<String, String> {
        &self.styles
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child nodes that are elements, in order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// All descendant elements in document order, excluding `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for child in self.child_elements() {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// First element in document order (including `self`) matching `pred`.
    pub fn find(&self, pred: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(pred))
    }

    /// Every element in document order (including `self`) matching `pred`.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        std::iter::once(self)
            .chain(self.descendants())
            .filter(|el| pred(*el))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|el| el.get_id() == Some(id))
    }

    // -- Serialization --------------------------------------------------

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_html(&self.classes.join(" "))));
        }
        if !self.styles.is_empty() {
            let decls: Vec<String> = self
                .styles
                .iter()
                .map(|(prop, value)| format!("{prop}: {value}"))
                .collect();
            out.push_str(&format!(" style=\"{}\"", escape_html(&decls.join("; "))));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escape HTML special characters to prevent XSS.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
