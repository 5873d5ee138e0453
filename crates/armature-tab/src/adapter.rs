#![forbid(unsafe_code)]

//! Host capability surface for the tab foundation.
//!
//! [`TabAdapter`] is the boundary between [`TabFoundation`] and whatever is
//! actually rendering the tab — a browser element, a retained-mode scene
//! node, a terminal cell region. The foundation only ever expresses itself
//! through these six operations; everything else (layout, painting,
//! animation timing) stays on the host side of the line.
//!
//! Event delivery is inverted rather than closure-based: the foundation
//! registers a [`TabHandler`] token for a named host event, and the host
//! routes the event back by calling the matching foundation entry point
//! (today only [`TabFoundation::handle_transition_end`]). Foundations never
//! hand out callbacks that capture themselves.
//!
//! [`TabFoundation`]: crate::foundation::TabFoundation
//! [`TabFoundation::handle_transition_end`]: crate::foundation::TabFoundation::handle_transition_end

/// Foundation entry point a host binds to a host event.
///
/// Copyable identity token, not a callback: hosts store `(event, handler)`
/// pairs and dispatch by matching on the token when the event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabHandler {
    /// Route to [`TabFoundation::handle_transition_end`].
    ///
    /// [`TabFoundation::handle_transition_end`]: crate::foundation::TabFoundation::handle_transition_end
    TransitionEnd,
}

/// Operations the tab foundation requires from its host.
///
/// All mutating operations are assumed infallible at this layer: a host that
/// can fail these calls handles that below the adapter. Queries must reflect
/// the live host state — the foundation treats the host, not itself, as the
/// single source of truth for the active class.
pub trait TabAdapter {
    /// Whether the host element currently carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` to the host element. Adding a present class is a no-op.
    fn add_class(&mut self, class: &str);

    /// Remove `class` from the host element. Removing an absent class is a
    /// no-op.
    fn remove_class(&mut self, class: &str);

    /// Set attribute `name` to `value` on the host element, replacing any
    /// previous value.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Bind `handler` to the named host event.
    ///
    /// The foundation guards its own registrations (at most one live
    /// transition-end binding), so hosts may treat repeated registration of
    /// the same pair as either accumulation or coalescing.
    fn register_event_handler(&mut self, event: &str, handler: TabHandler);

    /// Release a binding made by
    /// [`register_event_handler`](TabAdapter::register_event_handler).
    /// Releasing an unknown pair is a no-op.
    fn deregister_event_handler(&mut self, event: &str, handler: TabHandler);
}

/// Adapter whose host is empty and inert.
///
/// Queries report an element with no classes; mutations go nowhere. Stands in
/// where a foundation is constructed before a real host exists, and in doc
/// examples.
///
/// ```
/// use armature_tab::{NoopTabAdapter, TabFoundation};
///
/// let mut tab = TabFoundation::new(NoopTabAdapter);
/// tab.activate();
/// // The inert host swallowed the writes; derived state follows the host.
/// assert!(!tab.is_active());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopTabAdapter;

impl TabAdapter for NoopTabAdapter {
    fn has_class(&self, _class: &str) -> bool {
        false
    }

    fn add_class(&mut self, _class: &str) {}

    fn remove_class(&mut self, _class: &str) {}

    fn set_attribute(&mut self, _name: &str, _value: &str) {}

    fn register_event_handler(&mut self, _event: &str, _handler: TabHandler) {}

    fn deregister_event_handler(&mut self, _event: &str, _handler: TabHandler) {}
}
