use std::collections::HashSet;
use std::fmt;

use crate::dispatch::{event_path, Listeners};
use crate::element::{find_element, find_element_mut, Element};
use crate::event::{Event, EventType};
use crate::html::Markup;
use crate::selector::Selector;

/// Parsing progress of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    Loading,
    Interactive,
    Complete,
}

type ReadyCallback<A> = Box<dyn FnOnce(&mut Document<A>)>;

/// A page snapshot: the parsed markup plus its ready state and listeners.
pub struct Document<A> {
    markup: Markup,
    ready_state: ReadyState,
    ready_queue: Vec<ReadyCallback<A>>,
    listeners: Listeners<A>,
}

impl<A> Document<A> {
    /// A document that is still being parsed.
    pub fn loading(markup: Markup) -> Self {
        Self {
            markup,
            ready_state: ReadyState::Loading,
            ready_queue: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    /// A document that has finished parsing.
    pub fn parsed(markup: Markup) -> Self {
        Self {
            ready_state: ReadyState::Complete,
            ..Self::loading(markup)
        }
    }

    pub fn root(&self) -> &Element {
        self.markup.root()
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Run `callback` once the document is parsed.
    ///
    /// Runs immediately unless the document is still loading, in which case
    /// the callback waits for [`Document::finish_parsing`].
    pub fn on_ready(&mut self, callback: impl FnOnce(&mut Document<A>) + 'static) {
        if self.ready_state == ReadyState::Loading {
            log::trace!("[document] deferring ready callback");
            self.ready_queue.push(Box::new(callback));
        } else {
            callback(self);
        }
    }

    /// Mark parsing as done and drain the ready queue in registration order.
    ///
    /// Has no effect once the document has left the loading state.
    pub fn finish_parsing(&mut self) {
        if self.ready_state != ReadyState::Loading {
            return;
        }

        self.ready_state = ReadyState::Interactive;
        let queue = std::mem::take(&mut self.ready_queue);
        log::debug!("[document] content loaded, running {} callbacks", queue.len());

        for callback in queue {
            callback(self);
        }
    }

    // Queries

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(self.markup.root(), id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(self.markup.root_mut(), id)
    }

    /// First element matching `selector` in document order.
    pub fn query_selector(&self, selector: &Selector) -> Option<&Element> {
        let id = self.markup.select(selector).into_iter().next()?;
        self.element(id)
    }

    /// All elements matching `selector` in document order.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<&Element> {
        let ids: HashSet<&str> = self.markup.select(selector).into_iter().collect();
        let mut out = Vec::with_capacity(ids.len());
        collect_matching(self.markup.root(), &ids, &mut out);
        out
    }

    /// Ids of all elements matching `selector`, for callers that go on to
    /// mutate them.
    pub fn select_ids(&self, selector: &Selector) -> Vec<String> {
        self.markup
            .select(selector)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    // Listeners

    pub fn add_event_listener(&mut self, id: impl Into<String>, event_type: EventType, payload: A) {
        self.listeners.add(id, event_type, payload);
    }

    pub fn listeners(&self) -> &Listeners<A> {
        &self.listeners
    }

    /// Deliver `event`, returning each listener hit as
    /// `(current target, payload)` in bubbling order.
    pub fn dispatch(&self, event: &Event) -> Vec<(&Element, &A)> {
        let event_type = event.event_type();
        let path = event_path(self.markup.root(), event.target());

        if path.is_empty() {
            log::debug!("[document] event target {} not in tree", event.target());
        }

        path.into_iter()
            .flat_map(|el| {
                self.listeners
                    .for_element(&el.id, event_type)
                    .map(move |payload| (el, payload))
            })
            .collect()
    }
}

impl<A> fmt::Debug for Document<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", self.markup.root())
            .field("ready_state", &self.ready_state)
            .field("ready_queue", &self.ready_queue.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn collect_matching<'a>(element: &'a Element, ids: &HashSet<&str>, out: &mut Vec<&'a Element>) {
    if ids.contains(element.id.as_str()) {
        out.push(element);
    }
    for child in element.content.children() {
        collect_matching(child, ids, out);
    }
}
