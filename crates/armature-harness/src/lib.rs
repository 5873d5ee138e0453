#![forbid(unsafe_code)]

//! Recording test doubles for foundation adapters.
//!
//! [`FakeElement`] stands in for a host element in tests: it keeps real
//! class/attribute/listener state so derived queries behave like a live
//! host, and it records every mutating adapter call in order so tests can
//! assert on exactly what a foundation asked the host to do.
//!
//! # Invariants
//!
//! - Only mutating calls are recorded; `has_class` is a pure query and
//!   leaves no trace in the log.
//! - The double is strict about listener bookkeeping: duplicate
//!   registrations accumulate rather than coalesce, so a foundation that
//!   over-registers is visible as `listener_count > 1`.
//! - `seed_class`/`unseed_class` mutate state without logging, for
//!   arranging preconditions and simulating out-of-band host changes.

use ahash::{AHashMap, AHashSet};
use armature_tab::{TabAdapter, TabHandler};

/// One mutating adapter call, in the order the host received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    AddClass(String),
    RemoveClass(String),
    SetAttribute(String, String),
    RegisterHandler(String, TabHandler),
    DeregisterHandler(String, TabHandler),
}

/// In-memory host element with a call log.
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    classes: AHashSet<String>,
    attributes: AHashMap<String, String>,
    listeners: Vec<(String, TabHandler)>,
    calls: Vec<HostCall>,
}

impl FakeElement {
    /// Empty element: no classes, no attributes, no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Element pre-seeded with classes, with nothing in the call log.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut element = Self::new();
        for class in classes {
            element.classes.insert(class.into());
        }
        element
    }

    /// Insert a class without recording a call.
    pub fn seed_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    /// Remove a class without recording a call.
    pub fn unseed_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Current classes, sorted for stable assertions.
    pub fn class_list(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.classes.iter().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }

    /// Current value of an attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Number of live bindings for an event (duplicates counted).
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.iter().filter(|(e, _)| e == event).count()
    }

    /// Tokens currently bound to an event, in registration order.
    pub fn handlers(&self, event: &str) -> Vec<TabHandler> {
        self.listeners
            .iter()
            .filter(|(e, _)| e == event)
            .map(|(_, handler)| *handler)
            .collect()
    }

    /// The mutating calls recorded so far, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Drain the call log, leaving element state untouched.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl TabAdapter for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_class(&mut self, class: &str) {
        self.calls.push(HostCall::AddClass(class.to_owned()));
        self.classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.calls.push(HostCall::RemoveClass(class.to_owned()));
        self.classes.remove(class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.calls
            .push(HostCall::SetAttribute(name.to_owned(), value.to_owned()));
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn register_event_handler(&mut self, event: &str, handler: TabHandler) {
        self.calls
            .push(HostCall::RegisterHandler(event.to_owned(), handler));
        self.listeners.push((event.to_owned(), handler));
    }

    fn deregister_event_handler(&mut self, event: &str, handler: TabHandler) {
        self.calls
            .push(HostCall::DeregisterHandler(event.to_owned(), handler));
        if let Some(index) = self
            .listeners
            .iter()
            .position(|(e, h)| e == event && *h == handler)
        {
            self.listeners.remove(index);
        }
    }
}
