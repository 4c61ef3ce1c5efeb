//! Mount-once authentication bootstrap.

use crate::app::api::ApiCtx;
use crate::app::preferences::persist_auth_method;
use crate::app::routes::Route;
use crate::core::bootstrap::{BootstrapOnce, BootstrapRun, MountGuard};
use crate::core::store::{AppStore, record_verification_failure, record_verification_success};
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

/// Verify the session once per mount and replace the current route with the outcome.
#[hook]
pub(crate) fn use_bootstrap_auth() {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let once = use_mut_ref(BootstrapOnce::default);
    use_effect_with_deps(
        move |_| {
            let guard = MountGuard::new();
            if let Some(run) = once.borrow().begin(&guard) {
                match (api_ctx, navigator) {
                    (Some(api_ctx), Some(navigator)) => {
                        spawn_verification(api_ctx, navigator, run);
                    }
                    _ => console::error!("auth bootstrap skipped: api context or router missing"),
                }
            }
            move || guard.release()
        },
        (),
    );
}

fn spawn_verification(api_ctx: ApiCtx, navigator: Navigator, run: BootstrapRun) {
    yew::platform::spawn_local(async move {
        let outcome = api_ctx.client.verify().await;
        let Some(route) = run.finish(&outcome) else {
            return;
        };
        let dispatch = Dispatch::<AppStore>::new();
        match &outcome {
            Ok(verification) => {
                if let Some(configs) = &verification.configs {
                    persist_auth_method(configs.auth_method);
                }
                dispatch.reduce_mut(|store| record_verification_success(store, verification));
            }
            Err(err) => {
                console::error!("auth verification failed", err.to_string());
                dispatch.reduce_mut(|store| record_verification_failure(store));
            }
        }
        console::log!("auth bootstrap route", route.path());
        navigator.replace(&Route::from(route));
    });
}
