//! Add-torrents dialog opened by pasted, dropped, or linked torrent references.
//!
//! # Design
//! - Keep side effects out of the dialog; it emits the URL list via callbacks.
//! - Row state stays local and is reset whenever a new intent arrives.

use crate::core::intent::{ModalIntent, submitted_urls};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AddTorrentsModalProps {
    pub(crate) intent: ModalIntent,
    pub(crate) pending: bool,
    pub(crate) on_submit: Callback<Vec<String>>,
    pub(crate) on_close: Callback<()>,
}

#[function_component(AddTorrentsModal)]
pub(crate) fn add_torrents_modal(props: &AddTorrentsModalProps) -> Html {
    let rows = use_state(|| props.intent.row_values());
    {
        let rows = rows.clone();
        use_effect_with_deps(
            move |intent| {
                rows.set(intent.row_values());
                || ()
            },
            props.intent.clone(),
        );
    }

    let on_row_input = |index: usize| {
        let rows = rows.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*rows).clone();
                if let Some(slot) = next.get_mut(index) {
                    *slot = input.value();
                }
                rows.set(next);
            }
        })
    };

    let add_row = {
        let rows = rows.clone();
        Callback::from(move |_| {
            let mut next = (*rows).clone();
            next.push(String::new());
            rows.set(next);
        })
    };

    let submit = {
        let rows = rows.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            let urls = submitted_urls(&rows);
            if !urls.is_empty() {
                on_submit.emit(urls);
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box add-torrents">
                <header>
                    <strong>{"Add torrents"}</strong>
                    <span class="tab tab-active">{"By URL"}</span>
                </header>
                <div class="inputs">
                    {for rows.iter().enumerate().map(|(index, value)| html! {
                        <input
                            key={index}
                            aria-label="Torrent URL or magnet link"
                            placeholder="Torrent URL or magnet link"
                            value={value.clone()}
                            oninput={on_row_input(index)}
                        />
                    })}
                    <button class="ghost" type="button" onclick={add_row}>{"Add another"}</button>
                </div>
                <div class="actions">
                    <button class="ghost" type="button" onclick={close.clone()}>{"Cancel"}</button>
                    <button class="solid" type="button" onclick={submit} disabled={props.pending}>
                        {if props.pending { "Adding..." } else { "Add" }}
                    </button>
                </div>
            </div>
            <button class="modal-backdrop" onclick={close}></button>
        </div>
    }
}
