#![forbid(unsafe_code)]
#![doc = "Foundation lifecycle trait for armature widget foundations."]
#![doc = ""]
#![doc = "A foundation is the behavior half of a widget: a state machine that never"]
#![doc = "touches the rendering host directly, only an injected adapter. This crate"]
#![doc = "defines the boundary every foundation shares — construction happens in the"]
#![doc = "concrete crate (the adapter is owned by the foundation value), while the"]
#![doc = "host wrapper drives the lifecycle uniformly through [`Foundation`]."]

/// Lifecycle contract between a host widget wrapper and a foundation.
///
/// The wrapper constructs the foundation with a live adapter, calls
/// [`init`](Foundation::init) once the host element is attached, routes host
/// events into the foundation's entry points for as long as the widget is
/// mounted, and calls [`destroy`](Foundation::destroy) before tearing the
/// element down. Both hooks default to no-ops; foundations override them only
/// when they hold host-side registrations to set up or release.
pub trait Foundation {
    /// Host capability surface this foundation drives.
    type Adapter: ?Sized;

    /// Called by the host wrapper after the adapter is live.
    ///
    /// Runs at most once per widget instance, before any other operation.
    fn init(&mut self) {}

    /// Called by the host wrapper before the widget is torn down.
    ///
    /// Foundations that registered host event handlers release them here.
    /// Must be safe to call more than once.
    fn destroy(&mut self) {}
}
