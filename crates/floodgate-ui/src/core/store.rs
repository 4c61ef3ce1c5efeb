//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - The shell only issues commands through these reducers and reads snapshots
//!   through selectors.

use crate::core::intent::ModalIntent;
use floodgate_api_models::{AuthMethod, AuthVerification};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Authentication state.
    pub auth: AuthSlice,
    /// Modal and dependency state.
    pub ui: UiSlice,
    /// Backend connection state.
    pub connection: ConnectionSlice,
    /// Server configuration mirrored into the UI.
    pub config: ConfigSlice,
}

/// Authentication flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AuthSlice {
    /// Set once the verification check has settled, whatever its outcome.
    pub is_authenticating: bool,
    /// Session is authenticated.
    pub is_authenticated: bool,
}

/// Data sets a view needs before the dependency overlay can close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DependencyId {
    /// Torrent list snapshot.
    TorrentList,
    /// Torrent client settings.
    ClientSettings,
}

impl DependencyId {
    /// Dependencies loaded by the overview screen.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::TorrentList, Self::ClientSettings]
    }

    /// API path that satisfies the dependency.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::TorrentList => "/api/torrents",
            Self::ClientSettings => "/api/client/settings",
        }
    }

    /// Human-readable label shown on the loading overlay.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TorrentList => "Torrent list",
            Self::ClientSettings => "Client settings",
        }
    }
}

/// Load state of a registered dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyState {
    /// Fetch issued, no answer yet.
    Pending,
    /// Data arrived.
    Resolved,
    /// Last fetch failed; waiting for a retry.
    Failed,
}

/// One registered UI dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiDependency {
    /// Dependency identifier.
    pub id: DependencyId,
    /// Current load state.
    pub state: DependencyState,
}

/// Modal and dependency state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UiSlice {
    /// Currently open modal, if any.
    pub active_modal: Option<ModalIntent>,
    /// Registered dependencies in registration order.
    pub dependencies: Vec<UiDependency>,
}

/// Delay before failed dependencies are fetched again.
pub const DEPENDENCY_RETRY_MS: u32 = 5_000;

/// Backend connection flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionSlice {
    /// Backend connection is up.
    pub is_connected: bool,
}

impl Default for ConnectionSlice {
    fn default() -> Self {
        Self { is_connected: true }
    }
}

/// Server configuration mirrored into the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ConfigSlice {
    /// Configured authentication scheme.
    pub auth_method: AuthMethod,
}

/// Open a modal, replacing any modal already open.
pub fn set_active_modal(ui: &mut UiSlice, intent: ModalIntent) {
    ui.active_modal = Some(intent);
}

/// Close the active modal.
pub fn clear_active_modal(ui: &mut UiSlice) {
    ui.active_modal = None;
}

/// Register dependencies as pending; already registered ids are reset to pending.
pub fn register_dependencies(store: &mut AppStore, ids: &[DependencyId]) {
    for id in ids {
        match store.ui.dependencies.iter_mut().find(|dep| dep.id == *id) {
            Some(dep) => dep.state = DependencyState::Pending,
            None => store.ui.dependencies.push(UiDependency {
                id: *id,
                state: DependencyState::Pending,
            }),
        }
    }
    sync_connection(store);
}

/// Mark a dependency as resolved. Unknown ids are ignored.
pub fn resolve_dependency(store: &mut AppStore, id: DependencyId) {
    set_dependency_state(store, id, DependencyState::Resolved);
}

/// Mark a dependency as failed; the connection stays lost until every failure is retried.
pub fn fail_dependency(store: &mut AppStore, id: DependencyId) {
    set_dependency_state(store, id, DependencyState::Failed);
}

/// Ids whose last fetch failed, in registration order.
#[must_use]
pub fn failed_dependencies(ui: &UiSlice) -> Vec<DependencyId> {
    ui.dependencies
        .iter()
        .filter(|dep| dep.state == DependencyState::Failed)
        .map(|dep| dep.id)
        .collect()
}

/// Put failed dependencies back to pending before they are fetched again.
pub fn retry_dependencies(store: &mut AppStore, ids: &[DependencyId]) {
    for dep in &mut store.ui.dependencies {
        if dep.state == DependencyState::Failed && ids.contains(&dep.id) {
            dep.state = DependencyState::Pending;
        }
    }
    sync_connection(store);
}

/// Whether every registered dependency has resolved.
#[must_use]
pub fn have_ui_dependencies_resolved(ui: &UiSlice) -> bool {
    ui.dependencies
        .iter()
        .all(|dep| dep.state == DependencyState::Resolved)
}

fn set_dependency_state(store: &mut AppStore, id: DependencyId, state: DependencyState) {
    if let Some(dep) = store.ui.dependencies.iter_mut().find(|dep| dep.id == id) {
        dep.state = state;
    }
    sync_connection(store);
}

// Any failed dependency means the backend is unreachable, whatever finished last.
fn sync_connection(store: &mut AppStore) {
    store.connection.is_connected = failed_dependencies(&store.ui).is_empty();
}

/// Record a successful verification.
pub fn record_verification_success(store: &mut AppStore, verification: &AuthVerification) {
    store.auth.is_authenticating = true;
    store.auth.is_authenticated = !verification.requires_registration();
    if let Some(configs) = &verification.configs {
        store.config.auth_method = configs.auth_method;
    }
}

/// Record a failed verification; any failure means unauthenticated.
pub fn record_verification_failure(store: &mut AppStore) {
    store.auth.is_authenticating = true;
    store.auth.is_authenticated = false;
}

/// Drop the session after logout while keeping the settled verification flag.
pub fn reset_session(store: &mut AppStore) {
    store.auth.is_authenticated = false;
    store.ui = UiSlice::default();
    store.connection = ConnectionSlice::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlay::{overlay_visibility, select_overlay_flags};
    use floodgate_api_models::ServerConfigs;

    #[test]
    fn active_modal_is_replaced_by_latest_intent() {
        let mut ui = UiSlice::default();
        set_active_modal(&mut ui, ModalIntent::add_by_url("magnet:?a"));
        set_active_modal(&mut ui, ModalIntent::add_by_url("magnet:?b"));
        assert_eq!(ui.active_modal, Some(ModalIntent::add_by_url("magnet:?b")));
        clear_active_modal(&mut ui);
        assert!(ui.active_modal.is_none());
    }

    #[test]
    fn dependencies_resolve_individually() {
        let mut store = AppStore::default();
        assert!(have_ui_dependencies_resolved(&store.ui));
        register_dependencies(&mut store, &DependencyId::all());
        assert!(!have_ui_dependencies_resolved(&store.ui));
        resolve_dependency(&mut store, DependencyId::TorrentList);
        assert!(!have_ui_dependencies_resolved(&store.ui));
        resolve_dependency(&mut store, DependencyId::ClientSettings);
        assert!(have_ui_dependencies_resolved(&store.ui));
        assert!(store.connection.is_connected);
    }

    #[test]
    fn re_registering_resets_without_duplicating() {
        let mut store = AppStore::default();
        register_dependencies(&mut store, &[DependencyId::TorrentList]);
        fail_dependency(&mut store, DependencyId::TorrentList);
        register_dependencies(&mut store, &[DependencyId::TorrentList]);
        assert_eq!(store.ui.dependencies.len(), 1);
        assert!(!have_ui_dependencies_resolved(&store.ui));
        assert!(store.connection.is_connected);
    }

    #[test]
    fn failure_wins_regardless_of_completion_order() {
        let orders: [[(DependencyId, bool); 2]; 2] = [
            [
                (DependencyId::TorrentList, false),
                (DependencyId::ClientSettings, true),
            ],
            [
                (DependencyId::ClientSettings, true),
                (DependencyId::TorrentList, false),
            ],
        ];
        let mut outcomes = Vec::new();
        for order in orders {
            let mut store = AppStore::default();
            store.auth.is_authenticating = true;
            store.auth.is_authenticated = true;
            register_dependencies(&mut store, &DependencyId::all());
            for (id, ok) in order {
                if ok {
                    resolve_dependency(&mut store, id);
                } else {
                    fail_dependency(&mut store, id);
                }
            }
            assert!(!store.connection.is_connected);
            assert_eq!(failed_dependencies(&store.ui), vec![DependencyId::TorrentList]);
            outcomes.push(overlay_visibility(select_overlay_flags(&store)));
        }
        assert_eq!(outcomes[0], outcomes[1]);
        assert!(outcomes[0].show_connection_lost);
    }

    #[test]
    fn retry_recovers_a_failed_dependency() {
        let mut store = AppStore::default();
        store.auth.is_authenticating = true;
        store.auth.is_authenticated = true;
        register_dependencies(&mut store, &DependencyId::all());
        fail_dependency(&mut store, DependencyId::TorrentList);
        resolve_dependency(&mut store, DependencyId::ClientSettings);

        let retried = failed_dependencies(&store.ui);
        retry_dependencies(&mut store, &retried);
        assert!(store.connection.is_connected);
        assert!(failed_dependencies(&store.ui).is_empty());
        assert!(!have_ui_dependencies_resolved(&store.ui));

        resolve_dependency(&mut store, DependencyId::TorrentList);
        let visibility = overlay_visibility(select_overlay_flags(&store));
        assert!(!visibility.show_dependencies);
        assert!(!visibility.show_connection_lost);
    }

    #[test]
    fn retry_ignores_dependencies_that_did_not_fail() {
        let mut store = AppStore::default();
        register_dependencies(&mut store, &DependencyId::all());
        resolve_dependency(&mut store, DependencyId::ClientSettings);
        retry_dependencies(&mut store, &DependencyId::all());
        assert_eq!(store.ui.dependencies[1].state, DependencyState::Resolved);
        assert_eq!(store.ui.dependencies[0].state, DependencyState::Pending);
    }

    #[test]
    fn verification_outcomes_update_auth_and_config() {
        let mut store = AppStore::default();
        record_verification_success(
            &mut store,
            &AuthVerification {
                initial_user: Some(false),
                configs: Some(ServerConfigs {
                    auth_method: AuthMethod::None,
                }),
            },
        );
        assert!(store.auth.is_authenticating);
        assert!(store.auth.is_authenticated);
        assert_eq!(store.config.auth_method, AuthMethod::None);

        let mut registering = AppStore::default();
        record_verification_success(
            &mut registering,
            &AuthVerification {
                initial_user: Some(true),
                configs: None,
            },
        );
        assert!(!registering.auth.is_authenticated);

        let mut failed = AppStore::default();
        record_verification_failure(&mut failed);
        assert!(failed.auth.is_authenticating);
        assert!(!failed.auth.is_authenticated);
    }

    #[test]
    fn reset_session_clears_modal_and_dependencies() {
        let mut store = AppStore::default();
        store.auth.is_authenticating = true;
        store.auth.is_authenticated = true;
        store.connection.is_connected = false;
        set_active_modal(&mut store.ui, ModalIntent::add_by_url("magnet:?a"));
        register_dependencies(&mut store, &DependencyId::all());
        reset_session(&mut store);
        assert!(store.auth.is_authenticating);
        assert!(!store.auth.is_authenticated);
        assert_eq!(store.ui, UiSlice::default());
        assert!(store.connection.is_connected);
    }
}
