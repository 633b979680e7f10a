//! SVG markup tree and serializer

use super::SvgConfig;

/// A node in an SVG document
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A tag with attributes and children
    Element(Element),
    /// Character data, escaped on output
    Text(String),
    /// Markup or CSS emitted verbatim
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An SVG element under construction
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: vec![],
            children: vec![],
        }
    }

    /// Append an attribute; values are escaped when serialized
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.push((name.into(), value.to_string()));
        self
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes
    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append escaped text content
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append verbatim markup
    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    /// Look up an attribute value by name
    #[cfg(test)]
    pub(crate) fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Serialize `root` as a complete SVG document
pub fn render_document(root: &Element, config: &SvgConfig) -> String {
    let mut writer = SvgWriter::new(config);
    if config.standalone {
        let nl = writer.newline();
        writer.out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        writer.out.push_str(nl);
    }
    writer.write_element(root);
    let trimmed_len = writer.out.trim_end().len();
    writer.out.truncate(trimmed_len);
    writer.out
}

/// Serialize a single element without any XML declaration
#[cfg(test)]
pub(crate) fn render_fragment(element: &Element, config: &SvgConfig) -> String {
    render_document(element, &config.clone().with_standalone(false))
}

struct SvgWriter<'a> {
    config: &'a SvgConfig,
    out: String,
    depth: usize,
}

impl<'a> SvgWriter<'a> {
    fn new(config: &'a SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            " ".repeat(self.depth * self.config.indent_width)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn write_element(&mut self, element: &Element) {
        let nl = self.newline();
        let indent = self.indent_str();
        self.out.push_str(&indent);
        self.out.push('<');
        self.out.push_str(&element.name);
        for (name, value) in &element.attrs {
            self.out
                .push_str(&format!(r#" {}="{}""#, name, escape_attribute(value)));
        }

        if element.children.is_empty() {
            self.out.push_str("/>");
            self.out.push_str(nl);
            return;
        }

        if is_inline(element) {
            self.out.push('>');
            for child in &element.children {
                match child {
                    Node::Text(text) => self.out.push_str(&escape_text(text)),
                    Node::Raw(markup) => self.out.push_str(markup),
                    Node::Element(_) => {}
                }
            }
        } else {
            self.out.push('>');
            self.out.push_str(nl);
            self.depth += 1;
            for child in &element.children {
                self.write_node(child);
            }
            self.depth -= 1;
            self.out.push_str(&indent);
        }

        self.out.push_str("</");
        self.out.push_str(&element.name);
        self.out.push('>');
        self.out.push_str(nl);
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.write_element(element),
            Node::Text(text) => {
                let nl = self.newline();
                let indent = self.indent_str();
                self.out.push_str(&indent);
                self.out.push_str(&escape_text(text));
                self.out.push_str(nl);
            }
            Node::Raw(markup) => self.write_raw(markup),
        }
    }

    /// Raw content is copied untouched; only the indent before its first line
    /// and a closing newline belong to the pretty printer.
    fn write_raw(&mut self, markup: &str) {
        if markup.is_empty() {
            return;
        }
        if !self.config.pretty_print {
            self.out.push_str(markup);
            return;
        }

        let indent = self.indent_str();
        self.out.push_str(&indent);
        self.out.push_str(markup);
        if !markup.ends_with('\n') {
            self.out.push('\n');
        }
    }
}

/// Elements holding only single-line character data stay on one line
fn is_inline(element: &Element) -> bool {
    element.children.iter().all(|child| match child {
        Node::Text(text) | Node::Raw(text) => !text.contains('\n'),
        Node::Element(_) => false,
    })
}

/// Escape special characters in character data
pub fn escape_text(s: &str) -> String {
    htmlize::escape_text(s).into_owned()
}

/// Escape special characters in an attribute value
pub fn escape_attribute(s: &str) -> String {
    htmlize::escape_attribute(s).into_owned()
}
