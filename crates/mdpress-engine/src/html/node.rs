use thiserror::Error;

/// A node that cannot be rendered. With a two-variant tree, a leaf without
/// a value and a parent without a children list are unrepresentable, so the
/// only invalid shape left is a parent whose tag is empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("parent nodes need a tag")]
    MissingParentTag,
}

/// Elements that render without a closing tag.
const VOID_TAGS: [&str; 1] = ["img"];

/// The render tree: a terminal text-bearing leaf, or a tag-bearing parent
/// that exclusively owns an ordered list of children.
///
/// Nodes are built bottom-up and never mutated afterwards; rendering is a
/// pure read. Attributes are ordered `(key, value)` pairs, with an empty
/// list meaning "no attributes".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        /// `None` or an empty tag renders the value as raw text.
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A tagless leaf rendering its value as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Renders the node and its subtree to an HTML fragment.
    ///
    /// Values and attribute values are emitted verbatim; the dialect treats
    /// them as already-safe text. A parent with an empty children list
    /// renders as `<tag></tag>`.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            Self::Leaf { tag, value, attrs } => Ok(render_leaf(tag.as_deref(), value, attrs)),
            Self::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingParentTag);
                }
                let mut html = format!("<{tag}{}>", render_attrs(attrs));
                for child in children {
                    html.push_str(&child.render()?);
                }
                html.push_str("</");
                html.push_str(tag);
                html.push('>');
                Ok(html)
            }
        }
    }
}

fn render_leaf(tag: Option<&str>, value: &str, attrs: &[(String, String)]) -> String {
    match tag {
        None | Some("") => value.to_string(),
        Some(tag) if VOID_TAGS.contains(&tag) => format!("<{tag}{}>", render_attrs(attrs)),
        Some(tag) => format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs)),
    }
}

/// A single leading space and `key="value"` pairs in insertion order, or
/// nothing when there are no attributes. Values are not escaped.
fn render_attrs(attrs: &[(String, String)]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect();
    format!(" {}", pairs.join(" "))
}
