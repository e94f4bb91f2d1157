//! Content trees, route layouts and the loading placeholder.

/// An owned tree of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

/// Wraps a route's content. Every route registers one.
pub type Layout = fn(Node) -> Node;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

const LOADING_STYLE: &str = "display:flex;align-items:center;justify-content:center;min-height:60vh;font-family:system-ui,sans-serif;font-size:1rem;color:#6b7280";

impl Node {
    pub fn element(tag: &'static str, children: Vec<Node>) -> Self {
        Node::Element { tag, attrs: Vec::new(), children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element { tag, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(tag) {
                    return;
                }
                for child in children {
                    child.render_into(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Layout that renders its children unchanged.
pub fn passthrough(children: Node) -> Node {
    children
}

/// Placeholder shown while a route's content is pending.
pub fn loading() -> Node {
    Node::element("div", vec![Node::text("Loading...")])
        .with_attr("role", "status")
        .with_attr("style", LOADING_STYLE)
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
