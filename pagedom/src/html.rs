//! Conversion of server-rendered markup into an [`Element`] tree.

use std::collections::{HashMap, HashSet};

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node};

use crate::element::{generate_id, Element};
use crate::selector::Selector;

/// Parsed markup: the `scraper` tree selectors run against, and the mutable
/// [`Element`] tree built from it.
///
/// Selectors see the markup as served. Classes and attributes changed on the
/// element tree afterwards are not visible to them.
#[derive(Debug, Clone)]
pub struct Markup {
    html: Html,
    root: Element,
    identities: HashMap<NodeId, String>,
}

impl Markup {
    /// Parse a full HTML document. The root is the `html` element.
    ///
    /// Comments and whitespace-only text are dropped; unknown and custom
    /// elements are kept as-is.
    pub fn document(source: &str) -> Self {
        Self::build(Html::parse_document(source))
    }

    /// Parse an HTML fragment; the root is a synthetic `html` element
    /// wrapping the fragment's nodes.
    pub fn fragment(source: &str) -> Self {
        Self::build(Html::parse_fragment(source))
    }

    fn build(html: Html) -> Self {
        let mut identities = HashMap::new();
        let mut seen = HashSet::new();
        let root = convert(html.root_element(), &mut identities, &mut seen);

        Self {
            html,
            root,
            identities,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Identities of the elements matching `selector`, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<&str> {
        self.html
            .select(selector.compiled())
            .filter_map(|el| self.identities.get(&el.id()))
            .map(String::as_str)
            .collect()
    }
}

/// Builds the element for `source` and its descendants, recording each
/// element's identity under its node id.
///
/// A markup `id` becomes the identity of the first element carrying it; later
/// duplicates get a generated identity instead.
fn convert(
    source: ElementRef<'_>,
    identities: &mut HashMap<NodeId, String>,
    seen: &mut HashSet<String>,
) -> Element {
    let value = source.value();
    let mut element = Element::new(value.name());

    for (name, attr) in value.attrs() {
        element.set_attribute(name, attr);
    }

    if !seen.insert(element.id.clone()) {
        log::trace!("[html] duplicate id {:?}", element.id);
        element.id = generate_id();
    }
    identities.insert(source.id(), element.id.clone());

    let mut children = Vec::new();
    for child in source.children() {
        match child.value() {
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    children.push(convert(child, identities, seen));
                }
            }
            Node::Text(text) => {
                if !text.trim().is_empty() {
                    children.push(Element::text(&**text));
                }
            }
            _ => {}
        }
    }

    if children.is_empty() {
        element
    } else {
        element.children(children)
    }
}
