use crate::element::{ancestors, Element};
use crate::event::EventType;

/// Elements an event visits while bubbling: the target first, then each
/// ancestor up to the root. Empty when the target is not in the tree.
pub fn event_path<'a>(root: &'a Element, target: &str) -> Vec<&'a Element> {
    let mut path = ancestors(root, target);
    path.reverse();
    path
}

/// Listener registry keyed by element id.
///
/// The payload `A` describes what the listener does; interpreting it is left
/// to the caller, which keeps dispatch free of side effects.
#[derive(Debug, Clone)]
pub struct Listeners<A> {
    entries: Vec<(String, EventType, A)>,
}

impl<A> Default for Listeners<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A> Listeners<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: impl Into<String>, event_type: EventType, payload: A) {
        self.entries.push((id.into(), event_type, payload));
    }

    /// Payloads registered on `id` for `event_type`, in registration order.
    pub fn for_element<'a>(
        &'a self,
        id: &'a str,
        event_type: EventType,
    ) -> impl Iterator<Item = &'a A> + 'a {
        self.entries
            .iter()
            .filter(move |(el, ty, _)| el == id && *ty == event_type)
            .map(|(_, _, payload)| payload)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
