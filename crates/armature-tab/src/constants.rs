#![forbid(unsafe_code)]

//! Names the tab foundation writes to its host.
//!
//! Class names follow the `block--modifier` convention with `arm-tab` as the
//! block. Hosts style these however they like; the foundation only toggles
//! them.

/// CSS classes toggled on the host element.
pub mod css_classes {
    /// Present exactly while the tab is active.
    ///
    /// Presence of this class on the host is the single source of truth for
    /// the active state; the foundation never caches it.
    pub const ACTIVE: &str = "arm-tab--active";

    /// Present from `activate` until the host's transition-end fires.
    pub const ANIMATING_ACTIVATE: &str = "arm-tab--animating-activate";

    /// Present from `deactivate` until the host's transition-end fires.
    pub const ANIMATING_DEACTIVATE: &str = "arm-tab--animating-deactivate";
}

/// Attribute names written on the host element.
pub mod strings {
    /// Accessibility attribute mirroring the active state (`"true"` /
    /// `"false"`). Host-standard name, kept verbatim.
    pub const ARIA_SELECTED: &str = "aria-selected";
}
