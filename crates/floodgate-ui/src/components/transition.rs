//! Mount-on-enter / unmount-on-exit wrapper driven by [`Presence`].

use crate::core::presence::Presence;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TransitionProps {
    /// Visibility target.
    pub(crate) visible: bool,
    /// Enter and exit duration.
    pub(crate) timeout_ms: u32,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Transition)]
pub(crate) fn transition(props: &TransitionProps) -> Html {
    let presence = use_state(|| Presence::initial(props.visible));
    let timer = use_mut_ref(|| None as Option<Timeout>);
    {
        let presence = presence.clone();
        let timeout_ms = props.timeout_ms;
        use_effect_with_deps(
            move |visible| {
                let next = (*presence).retarget(*visible);
                if next != *presence {
                    presence.set(next);
                }
                if next.is_transitioning() {
                    let presence = presence.clone();
                    *timer.borrow_mut() = Some(Timeout::new(timeout_ms, move || {
                        presence.set(next.settle());
                    }));
                }
                move || {
                    timer.borrow_mut().take();
                }
            },
            props.visible,
        );
    }

    if !presence.is_mounted() {
        return html! {};
    }

    html! {
        <div class={classes!("transition", presence.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
