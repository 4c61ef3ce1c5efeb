//! Full-screen overlays owned by the app shell.
use crate::core::store::{DependencyState, UiDependency};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DependencyOverlayProps {
    pub(crate) dependencies: Vec<UiDependency>,
}

/// Loading screen shown until authentication settles and view data arrives.
#[function_component(DependencyOverlay)]
pub(crate) fn dependency_overlay(props: &DependencyOverlayProps) -> Html {
    html! {
        <div class="overlay overlay--dependencies" role="status" aria-live="polite">
            <div class="card">
                <span class="loading loading-spinner loading-lg"></span>
                <ul class="dependency-list">
                    {for props.dependencies.iter().map(|dep| html! {
                        <li class={classes!(
                            "dependency",
                            match dep.state {
                                DependencyState::Pending => "dependency--pending",
                                DependencyState::Resolved => "dependency--resolved",
                                DependencyState::Failed => "dependency--failed",
                            }
                        )}>
                            {dep.id.label()}
                        </li>
                    })}
                </ul>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ConnectionLostOverlayProps {
    pub(crate) on_logout: Callback<()>,
    pub(crate) on_retry: Callback<()>,
    /// Seconds between automatic retries.
    pub(crate) retry_every_secs: u32,
}

#[function_component(ConnectionLostOverlay)]
pub(crate) fn connection_lost_overlay(props: &ConnectionLostOverlayProps) -> Html {
    let logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="overlay overlay--connection" role="alert" aria-live="assertive">
            <div class="card">
                <header>
                    <strong>{"Connection interrupted"}</strong>
                    <button class="ghost" onclick={retry}>{"Retry now"}</button>
                    <button class="ghost" onclick={logout}>{"Log out"}</button>
                </header>
                <p>{"Floodgate cannot reach the torrent client. Check that it is running and reachable."}</p>
                <p class="muted">{format!("Retrying every {}s.", props.retry_every_secs)}</p>
            </div>
        </div>
    }
}
