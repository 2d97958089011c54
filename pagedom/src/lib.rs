pub mod dispatch;
pub mod document;
pub mod element;
pub mod event;
pub mod html;
pub mod selector;

pub use dispatch::{event_path, Listeners};
pub use document::{Document, ReadyState};
pub use element::{find_element, find_element_mut, Content, Element, GENERATED_ID_PREFIX};
pub use event::{Event, EventType};
pub use html::Markup;
pub use selector::{Selector, SelectorError};
