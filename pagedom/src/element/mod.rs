mod content;
mod node;

pub use content::Content;
pub use node::{Element, GENERATED_ID_PREFIX, TEXT_TAG};
pub(crate) use node::generate_id;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the chain of elements from `root` down to the element with `id`.
///
/// The last entry is the element itself. Returns an empty vector when the
/// element is not part of the tree.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);

    if element.id == id {
        return true;
    }

    for child in element.content.children() {
        if collect_path(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}
