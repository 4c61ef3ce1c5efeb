//! Bootstrap authentication: initial route selection and mount guards.
//!
//! # Design
//! - Verification runs once per shell mount; [`BootstrapOnce`] makes that explicit
//!   instead of relying on the effect primitive alone.
//! - The async continuation only navigates while the [`MountGuard`] is live, so a
//!   shell torn down mid-request never acts on a stale router.
//! - Any verification failure means "unauthenticated"; error kinds are not
//!   distinguished.

use floodgate_api_models::AuthVerification;
use std::cell::Cell;
use std::rc::Rc;

/// Route chosen once the verification call settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialRoute {
    /// First-user registration.
    Register,
    /// Main torrent overview.
    Overview,
    /// Login form.
    Login,
}

impl InitialRoute {
    /// Path the router should replace the current entry with.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Overview => "/overview",
            Self::Login => "/login",
        }
    }
}

/// Pick the initial route from the verification outcome.
#[must_use]
pub fn initial_route<E>(outcome: &Result<AuthVerification, E>) -> InitialRoute {
    match outcome {
        Ok(verification) if verification.requires_registration() => InitialRoute::Register,
        Ok(_) => InitialRoute::Overview,
        Err(_) => InitialRoute::Login,
    }
}

/// Liveness flag shared between a mounted component and its async continuations.
#[derive(Clone, Debug)]
pub struct MountGuard {
    live: Rc<Cell<bool>>,
}

impl MountGuard {
    /// Create a guard for a freshly mounted component.
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    /// Whether the owning component is still mounted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Mark the owning component as unmounted; shared by every clone.
    pub fn release(&self) {
        self.live.set(false);
    }

    /// Resolve the initial route, or `None` when the component already unmounted.
    #[must_use]
    pub fn settle<E>(&self, outcome: &Result<AuthVerification, E>) -> Option<InitialRoute> {
        self.is_live().then(|| initial_route(outcome))
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot latch for the verification call.
#[derive(Debug, Default)]
pub struct BootstrapOnce {
    started: Cell<bool>,
}

impl BootstrapOnce {
    /// Returns `true` the first time only.
    #[must_use]
    pub fn try_start(&self) -> bool {
        !self.started.replace(true)
    }

    /// Begin the verification run for a mount; `None` once a run has started.
    #[must_use]
    pub fn begin(&self, guard: &MountGuard) -> Option<BootstrapRun> {
        self.try_start().then(|| BootstrapRun {
            guard: guard.clone(),
        })
    }
}

/// A started verification run. Finishing consumes it, so it yields at most one route.
#[derive(Debug)]
#[must_use]
pub struct BootstrapRun {
    guard: MountGuard,
}

impl BootstrapRun {
    /// Route to navigate to, or `None` when the component unmounted first.
    #[must_use]
    pub fn finish<E>(self, outcome: &Result<AuthVerification, E>) -> Option<InitialRoute> {
        self.guard.settle(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verified(initial_user: Option<bool>) -> Result<AuthVerification, ()> {
        Ok(AuthVerification {
            initial_user,
            configs: None,
        })
    }

    #[test]
    fn routes_follow_verification_outcome() {
        assert_eq!(initial_route(&verified(Some(true))), InitialRoute::Register);
        assert_eq!(initial_route(&verified(Some(false))), InitialRoute::Overview);
        assert_eq!(initial_route(&verified(None)), InitialRoute::Overview);
        assert_eq!(
            initial_route::<&str>(&Err("network down")),
            InitialRoute::Login
        );
    }

    #[test]
    fn exactly_one_navigation_per_mount() {
        for (outcome, expected) in [
            (verified(Some(true)), InitialRoute::Register),
            (verified(Some(false)), InitialRoute::Overview),
            (Err(()), InitialRoute::Login),
        ] {
            let once = BootstrapOnce::default();
            let guard = MountGuard::new();
            let mut navigations = Vec::new();
            for _ in 0..2 {
                if let Some(run) = once.begin(&guard) {
                    navigations.extend(run.finish(&outcome));
                }
            }
            assert_eq!(navigations, vec![expected]);
        }
    }

    #[test]
    fn released_guard_suppresses_navigation() {
        let once = BootstrapOnce::default();
        let guard = MountGuard::new();
        let run = once.begin(&guard);
        guard.release();
        assert!(!guard.is_live());
        assert_eq!(run.and_then(|run| run.finish(&verified(Some(false)))), None);
        assert!(once.begin(&guard).is_none());
    }

    #[test]
    fn remount_starts_a_fresh_run() {
        let first_guard = MountGuard::new();
        let first = BootstrapOnce::default();
        let stale = first.begin(&first_guard);
        first_guard.release();

        let second_guard = MountGuard::new();
        let second = BootstrapOnce::default();
        let run = second.begin(&second_guard);

        assert_eq!(stale.and_then(|run| run.finish::<()>(&Err(()))), None);
        assert_eq!(
            run.and_then(|run| run.finish(&verified(None))),
            Some(InitialRoute::Overview)
        );
    }
}
