#![forbid(unsafe_code)]

//! Host-agnostic tab behavior.
//!
//! The tab itself is two small pieces:
//!
//! - [`TabAdapter`] — the capability surface a host implements: class and
//!   attribute writes plus handler (de)registration, all keyed by plain
//!   strings and the copyable [`TabHandler`] token.
//! - [`TabFoundation`] — the state machine that drives those capabilities:
//!   `activate`, `deactivate`, and the host-fed `handle_transition_end`,
//!   with `is_active`/`phase` derived from host classes on every query.
//!
//! The class and attribute names the foundation writes live in
//! [`css_classes`] and [`strings`]; hosts that style or assert on them
//! should import the constants rather than repeat the literals.
//!
//! Wiring a host up looks like:
//!
//! ```
//! use armature_base::Foundation;
//! use armature_harness::FakeElement;
//! use armature_tab::{TabFoundation, TabHandler};
//!
//! let mut tab = TabFoundation::new(FakeElement::new());
//! tab.activate();
//!
//! // The host delivers its transition-end event by routing the token it
//! // was handed back into the foundation:
//! for handler in tab.adapter().handlers("transitionend") {
//!     match handler {
//!         TabHandler::TransitionEnd => tab.handle_transition_end(),
//!     }
//! }
//! assert!(tab.is_active());
//!
//! tab.destroy();
//! ```
//!
//! # Feature flags
//!
//! - `tracing` — emit `tracing` debug events (`tab.activate`,
//!   `tab.deactivate`, `tab.settle`) on state changes. Off by default.

pub mod adapter;
pub mod constants;
pub mod foundation;

pub use adapter::{NoopTabAdapter, TabAdapter, TabHandler};
pub use constants::{css_classes, strings};
pub use foundation::{TabFoundation, TabPhase};
