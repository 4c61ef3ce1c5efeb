use crate::app::api::ApiCtx;
use crate::components::add_torrents::AddTorrentsModal;
use crate::components::overview::OverviewView;
use crate::components::shell::AppShell;
use crate::core::store::{AppStore, clear_active_modal};
use gloo::console;
use preferences::{api_base_url, load_auth_method};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod bootstrap;
pub(crate) mod intercept;
mod preferences;
mod routes;

#[function_component(FloodgateApp)]
pub(crate) fn floodgate_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let add_busy = use_state(|| false);
    let active_modal = use_selector(|store: &AppStore| store.ui.active_modal.clone());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let auth_method = load_auth_method();
                dispatch.reduce_mut(|store| {
                    store.config.auth_method = auth_method;
                });
                || ()
            },
            (),
        );
    }

    let close_modal = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| clear_active_modal(&mut store.ui));
        })
    };
    let on_add_urls = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let add_busy = add_busy.clone();
        Callback::from(move |urls: Vec<String>| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let add_busy = add_busy.clone();
            add_busy.set(true);
            yew::platform::spawn_local(async move {
                match client.add_urls(urls).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| clear_active_modal(&mut store.ui));
                    }
                    Err(err) => {
                        console::error!("add torrents failed", err.to_string());
                    }
                }
                add_busy.set(false);
            });
        })
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <AppShell>
                    <Switch<Route> render={switch} />
                </AppShell>
                {if let Some(intent) = (*active_modal).clone() {
                    html! {
                        <AddTorrentsModal
                            intent={intent}
                            pending={*add_busy}
                            on_submit={on_add_urls}
                            on_close={close_modal}
                        />
                    }
                } else { html!{} }}
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Overview} /> },
        Route::Overview => html! { <OverviewView /> },
        Route::Login => html! { <Placeholder title="Log in" body="Sign in to reach your torrent client." /> },
        Route::Register => html! { <Placeholder title="Create account" body="Set up the first Floodgate user." /> },
        Route::NotFound => html! { <Placeholder title="Not found" body="Use navigation to return to a supported view." /> },
    }
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder">
            <h2>{&props.title}</h2>
            <p class="muted">{&props.body}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    title: AttrValue,
    body: AttrValue,
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<FloodgateApp>::with_root(root).render();
    } else {
        yew::Renderer::<FloodgateApp>::new().render();
    }
}
