//! App shell: auth bootstrap, global input interception and the gating overlays.
//!
//! # Design
//! - Overlay visibility is re-derived from store snapshots on every render.
//! - Every external input (paste, drop, query string) funnels into one
//!   `set_active_modal` command.
//! - Children always render; overlays sit on top while they are mounted.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::bootstrap::use_bootstrap_auth;
use crate::app::intercept::{use_input_interceptor, use_query_import};
use crate::components::overlays::{ConnectionLostOverlay, DependencyOverlay};
use crate::components::overview::load_dependencies;
use crate::components::transition::Transition;
use crate::core::intent::ModalIntent;
use crate::core::overlay::{overlay_visibility, select_overlay_flags};
use crate::core::presence::OVERLAY_TRANSITION_MS;
use crate::core::store::{
    AppStore, DEPENDENCY_RETRY_MS, DependencyId, failed_dependencies, reset_session,
    retry_dependencies, set_active_modal,
};
use crate::services::api::ApiClient;
use gloo::console;
use gloo::utils::document;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const WINDOW_TITLE: &str = "Floodgate";

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let flags = use_selector(select_overlay_flags);
    let dependencies = use_selector(|store: &AppStore| store.ui.dependencies.clone());
    let failed = use_selector(|store: &AppStore| failed_dependencies(&store.ui));
    let client = api_ctx.as_ref().map(|ctx| ctx.client.clone());

    let open_modal = Callback::from(|intent: ModalIntent| {
        Dispatch::<AppStore>::new().reduce_mut(|store| set_active_modal(&mut store.ui, intent));
    });

    use_effect_with_deps(
        |_| {
            document().set_title(WINDOW_TITLE);
            || ()
        },
        (),
    );
    use_bootstrap_auth();
    use_input_interceptor(open_modal.clone());
    use_query_import(open_modal);

    {
        let client = client.clone();
        use_effect_with_deps(
            move |failed: &Rc<Vec<DependencyId>>| {
                let timer = (!failed.is_empty()).then(|| {
                    Timeout::new(DEPENDENCY_RETRY_MS, move || retry_failed(client.as_ref()))
                });
                move || drop(timer)
            },
            failed,
        );
    }

    let visibility = overlay_visibility(*flags);
    let on_retry = Callback::from(move |()| retry_failed(client.as_ref()));

    let on_logout = Callback::from(move |()| {
        let navigator = navigator.clone();
        let client = api_ctx.as_ref().map(|ctx| ctx.client.clone());
        yew::platform::spawn_local(async move {
            if let Some(client) = client {
                if let Err(err) = client.logout().await {
                    console::error!("logout failed", err.to_string());
                }
            }
            Dispatch::<AppStore>::new().reduce_mut(|store| reset_session(store));
            if let Some(navigator) = navigator {
                navigator.replace(&Route::Login);
            }
        });
    });

    html! {
        <>
            <Transition visible={visibility.show_dependencies} timeout_ms={OVERLAY_TRANSITION_MS}>
                <DependencyOverlay dependencies={(*dependencies).clone()} />
            </Transition>
            <Transition visible={visibility.show_connection_lost} timeout_ms={OVERLAY_TRANSITION_MS}>
                <ConnectionLostOverlay
                    on_logout={on_logout}
                    on_retry={on_retry}
                    retry_every_secs={DEPENDENCY_RETRY_MS / 1_000}
                />
            </Transition>
            { for props.children.iter() }
        </>
    }
}

fn retry_failed(client: Option<&Rc<ApiClient>>) {
    let Some(client) = client else {
        return;
    };
    let dispatch = Dispatch::<AppStore>::new();
    let ids = failed_dependencies(&dispatch.get().ui);
    if ids.is_empty() {
        return;
    }
    console::log!("retrying dependencies", ids.len());
    dispatch.reduce_mut(|store| retry_dependencies(store, &ids));
    load_dependencies(client, &ids);
}
