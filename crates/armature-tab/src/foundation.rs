#![forbid(unsafe_code)]

//! Tab behavior state machine.
//!
//! [`TabFoundation`] toggles a tab between active and inactive entirely
//! through its [`TabAdapter`]: it flips the class and attribute names from
//! [`constants`](crate::constants) and leaves rendering, animation timing,
//! and event plumbing to the host. Active state is never stored here — every
//! query goes back to the host, so the two can not drift apart.
//!
//! # State machine
//!
//! ```text
//!  Inactive ──activate()──▶ Activating ──transition-end──▶ Active
//!     ▲                                                      │
//!     └────transition-end── Deactivating ◀──deactivate()─────┘
//! ```
//!
//! `activate` on an active tab and `deactivate` on an inactive tab are
//! no-ops; the animating phases end when the host delivers its
//! transition-end notification to [`handle_transition_end`]
//! ([`TabFoundation::handle_transition_end`]).
//!
//! # Invariants
//!
//! - The active class on the host is the single source of truth; `is_active`
//!   and `phase` are derived queries, never cached fields.
//! - At most one live transition-end registration exists per foundation, and
//!   `destroy` releases it.
//! - A redundant `activate`/`deactivate` issues zero mutating adapter calls.
//! - Animating classes are only ever removed in `handle_transition_end`.
//!
//! # Failure modes
//!
//! - Adapter calls are assumed infallible; hosts absorb their own errors.
//! - A spurious transition-end (host fires while settled) still issues both
//!   class removals, which the host treats as no-ops.
//!
//! # Example
//!
//! ```
//! use armature_harness::FakeElement;
//! use armature_tab::{TabAdapter, TabFoundation, css_classes};
//!
//! let mut tab = TabFoundation::new(FakeElement::new());
//! tab.activate();
//! assert!(tab.is_active());
//! assert!(tab.adapter().has_class(css_classes::ANIMATING_ACTIVATE));
//!
//! // Host reports the visual transition finished:
//! tab.handle_transition_end();
//! assert!(tab.is_active());
//! assert!(!tab.adapter().has_class(css_classes::ANIMATING_ACTIVATE));
//! ```

use crate::adapter::{TabAdapter, TabHandler};
use crate::constants::{css_classes, strings};
use armature_base::Foundation;

/// Host event the transition handler is bound to.
const TRANSITION_END: &str = "transitionend";

/// Derived view of the tab's current place in the state machine.
///
/// Computed from host classes on demand; never stored. Both animating
/// classes can sit on the host at once (a reversal before the transition-end
/// fires leaves the first animation's class in place, and external mutation
/// can produce the same state); such a host reads as `Activating` because
/// the derivation checks activate before deactivate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabPhase {
    /// Settled without the active class.
    Inactive,
    /// Activation requested; host transition still running.
    Activating,
    /// Settled with the active class.
    Active,
    /// Deactivation requested; host transition still running.
    Deactivating,
}

impl TabPhase {
    /// Whether a host transition is in flight.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Activating | Self::Deactivating)
    }

    /// Whether the tab has settled (no transition in flight).
    #[inline]
    pub fn is_settled(self) -> bool {
        !self.is_animating()
    }
}

/// Behavior object for a single tab, generic over its host adapter.
#[derive(Debug, Clone)]
pub struct TabFoundation<A> {
    adapter: A,
    transition_handler_registered: bool,
}

impl<A: TabAdapter> TabFoundation<A> {
    /// Wrap a live host adapter.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            transition_handler_registered: false,
        }
    }

    /// Shared access to the host adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Exclusive access to the host adapter.
    ///
    /// Intended for the owning wrapper; mutating host state underneath the
    /// foundation is fine — state is derived, so the next query sees it.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Whether the host currently carries the active class.
    pub fn is_active(&self) -> bool {
        self.adapter.has_class(css_classes::ACTIVE)
    }

    /// Current derived phase. See [`TabPhase`] for the derivation order.
    pub fn phase(&self) -> TabPhase {
        if self.adapter.has_class(css_classes::ANIMATING_ACTIVATE) {
            TabPhase::Activating
        } else if self.adapter.has_class(css_classes::ANIMATING_DEACTIVATE) {
            TabPhase::Deactivating
        } else if self.is_active() {
            TabPhase::Active
        } else {
            TabPhase::Inactive
        }
    }

    /// Activate the tab.
    ///
    /// No-op when already active. Otherwise ensures the transition handler is
    /// registered, starts the activate animation, sets the active class, and
    /// mirrors the state into the accessibility attribute.
    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }
        self.ensure_transition_handler();
        self.adapter.add_class(css_classes::ANIMATING_ACTIVATE);
        self.adapter.add_class(css_classes::ACTIVE);
        self.adapter.set_attribute(strings::ARIA_SELECTED, "true");
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "tab.activate");
    }

    /// Deactivate the tab.
    ///
    /// No-op when already inactive; otherwise the mirror image of
    /// [`activate`](TabFoundation::activate).
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            return;
        }
        self.ensure_transition_handler();
        self.adapter.add_class(css_classes::ANIMATING_DEACTIVATE);
        self.adapter.remove_class(css_classes::ACTIVE);
        self.adapter.set_attribute(strings::ARIA_SELECTED, "false");
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "tab.deactivate");
    }

    /// Entry point for the host's transition-end notification.
    ///
    /// Removes both animating classes — the sole cleanup path for them.
    /// Removing the class the current animation never added is a host-level
    /// no-op, so no branching on direction is needed.
    pub fn handle_transition_end(&mut self) {
        #[cfg(feature = "tracing")]
        let was_animating = self.phase().is_animating();
        self.adapter.remove_class(css_classes::ANIMATING_ACTIVATE);
        self.adapter.remove_class(css_classes::ANIMATING_DEACTIVATE);
        #[cfg(feature = "tracing")]
        if was_animating {
            tracing::debug!(message = "tab.settle");
        }
    }

    // Register-once guard: the host keeps a single live binding no matter how
    // many toggles happen before destroy.
    fn ensure_transition_handler(&mut self) {
        if self.transition_handler_registered {
            return;
        }
        self.adapter
            .register_event_handler(TRANSITION_END, TabHandler::TransitionEnd);
        self.transition_handler_registered = true;
    }
}

impl<A: TabAdapter> Foundation for TabFoundation<A> {
    type Adapter = A;

    fn destroy(&mut self) {
        if self.transition_handler_registered {
            self.adapter
                .deregister_event_handler(TRANSITION_END, TabHandler::TransitionEnd);
            self.transition_handler_registered = false;
        }
    }
}
