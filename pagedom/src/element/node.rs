use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

/// Tag used for text nodes.
pub const TEXT_TAG: &str = "#text";

/// Prefix of generated ids. An `id` attribute with this prefix never becomes
/// an element's identity, so markup cannot collide with a generated id.
pub const GENERATED_ID_PREFIX: &str = "__pagedom-";

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id() -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{GENERATED_ID_PREFIX}{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup
    /// Attributes in source order, excluding `class`.
    pub attributes: Vec<(String, String)>,
    /// Class list in insertion order, never containing duplicates.
    pub classes: Vec<String>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(),
            tag,
            attributes: Vec::new(),
            classes: Vec::new(),
            content: Content::None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            tag: TEXT_TAG.to_string(),
            attributes: Vec::new(),
            classes: Vec::new(),
            content: Content::Text(content.into()),
        }
    }

    // Attributes

    /// Set an attribute, replacing any previous value.
    ///
    /// `class` is split into the class list and `id` also sets the element
    /// identity, unless it is empty or uses the generated-id prefix.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();

        match name.as_str() {
            "class" => {
                self.classes.clear();
                for class in value.split_ascii_whitespace() {
                    self.add_class(class);
                }
                return;
            }
            "id" if !value.is_empty() && !value.starts_with(GENERATED_ID_PREFIX) => {
                self.id = value.clone();
            }
            _ => {}
        }

        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    // Classes

    /// Add a class unless already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(self, &mut out);
        out
    }
}

fn push_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                push_text(child, out);
            }
        }
        Content::None => {}
    }
}
