//! Overview screen: registers its data dependencies and loads them.
use crate::app::api::ApiCtx;
use crate::core::store::{
    AppStore, DependencyId, fail_dependency, register_dependencies, resolve_dependency,
};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(OverviewView)]
pub(crate) fn overview_view() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    use_effect_with_deps(
        move |_| {
            let ids = DependencyId::all();
            Dispatch::<AppStore>::new().reduce_mut(|store| register_dependencies(store, &ids));
            if let Some(api_ctx) = api_ctx {
                load_dependencies(&api_ctx.client, &ids);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="placeholder">
            <h2>{"Overview"}</h2>
            <p class="muted">{"Paste or drop a magnet link anywhere to add a torrent."}</p>
        </div>
    }
}

/// Fetch each dependency and record its outcome in the store.
pub(crate) fn load_dependencies(client: &Rc<ApiClient>, ids: &[DependencyId]) {
    for &id in ids {
        let client = Rc::clone(client);
        yew::platform::spawn_local(async move {
            let dispatch = Dispatch::<AppStore>::new();
            match client.load_dependency(id).await {
                Ok(()) => {
                    dispatch.reduce_mut(|store| resolve_dependency(store, id));
                }
                Err(err) => {
                    console::error!("dependency load failed", id.label(), err.to_string());
                    dispatch.reduce_mut(|store| fail_dependency(store, id));
                }
            }
        });
    }
}
