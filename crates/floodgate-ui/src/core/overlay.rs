//! Overlay visibility policy for the app shell.
//!
//! # Design
//! - Derived from store snapshots on every render; never cached.
//! - `is_authenticating` is set once the verification check has settled, so a
//!   false value means the shell is still waiting on it.

use crate::core::store::{AppStore, have_ui_dependencies_resolved};
use floodgate_api_models::AuthMethod;

/// Store flags the overlays depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayFlags {
    /// Verification check has settled.
    pub is_authenticating: bool,
    /// Session is authenticated.
    pub is_authenticated: bool,
    /// No registered UI dependency is pending.
    pub have_ui_dependencies_resolved: bool,
    /// Backend connection is up.
    pub is_connected: bool,
    /// Configured authentication scheme.
    pub auth_method: AuthMethod,
}

/// Which overlays should currently be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayVisibility {
    /// Dependency-loading overlay.
    pub show_dependencies: bool,
    /// Connection-interruption overlay.
    pub show_connection_lost: bool,
}

/// Snapshot the overlay flags from the app store.
#[must_use]
pub fn select_overlay_flags(store: &AppStore) -> OverlayFlags {
    OverlayFlags {
        is_authenticating: store.auth.is_authenticating,
        is_authenticated: store.auth.is_authenticated,
        have_ui_dependencies_resolved: have_ui_dependencies_resolved(&store.ui),
        is_connected: store.connection.is_connected,
        auth_method: store.config.auth_method,
    }
}

/// Compute overlay visibility from the store flags.
#[must_use]
pub fn overlay_visibility(flags: OverlayFlags) -> OverlayVisibility {
    OverlayVisibility {
        show_dependencies: !flags.is_authenticating
            || (flags.is_authenticated && !flags.have_ui_dependencies_resolved),
        show_connection_lost: flags.is_authenticated
            && !flags.is_connected
            && flags.auth_method != AuthMethod::None,
    }
}
