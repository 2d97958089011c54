/// Events delivered to a document, targeted at an element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary-button click. `detail` is the click counter: 1 for a single
    /// click, 2 for the second click of a double click, and so on.
    Click { target: String, detail: u32 },
}

/// Event kinds a listener can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
}

impl Event {
    pub fn click(target: impl Into<String>, detail: u32) -> Self {
        Self::Click {
            target: target.into(),
            detail,
        }
    }

    pub fn double_click(target: impl Into<String>) -> Self {
        Self::click(target, 2)
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Self::Click { .. } => EventType::Click,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Click { target, .. } => target,
        }
    }

    /// Click counter for click events.
    pub fn detail(&self) -> u32 {
        match self {
            Self::Click { detail, .. } => *detail,
        }
    }
}
