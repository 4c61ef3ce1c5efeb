//! Window-level paste/drop listeners and the query-string importer.
//!
//! # Design
//! - Listeners are acquired once on mount and released when the guard drops, no
//!   matter how often the shell re-renders.
//! - Handlers only extract plain values from the DOM; decisions live in
//!   [`crate::core::intercept`].
//! - Listeners are registered as non-passive so captured events can be cancelled.

use crate::core::intent::ModalIntent;
use crate::core::intercept::{
    DROP_EFFECT_COPY, DragOverOutcome, Interception, PasteTarget, TEXT_PLAIN, TEXT_URI_LIST,
    drag_over_outcome, drop_outcome, paste_outcome,
};
use crate::core::query::add_urls_intent;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use wasm_bindgen::JsCast;
use web_sys::{
    ClipboardEvent, DataTransfer, DragEvent, Event, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Owns the paste, dragover and drop listeners; dropping it removes them.
pub(crate) struct InputInterceptor {
    _listeners: [EventListener; 3],
}

impl InputInterceptor {
    pub(crate) fn install(on_intent: &Callback<ModalIntent>) -> Self {
        let window = window();
        let paste = {
            let on_intent = on_intent.clone();
            EventListener::new_with_options(
                &window,
                "paste",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let text = event
                        .dyn_ref::<ClipboardEvent>()
                        .and_then(ClipboardEvent::clipboard_data)
                        .and_then(|data| data.get_data(TEXT_PLAIN).ok());
                    let outcome = paste_outcome(paste_target(event), text.as_deref());
                    apply(event, outcome, &on_intent);
                },
            )
        };
        let drag_over = EventListener::new_with_options(
            &window,
            "dragover",
            EventListenerOptions::enable_prevent_default(),
            |event| {
                let Some(transfer) = data_transfer(event) else {
                    return;
                };
                let types = transfer
                    .types()
                    .iter()
                    .filter_map(|kind| kind.as_string())
                    .collect::<Vec<_>>();
                if drag_over_outcome(&types) == DragOverOutcome::AllowCopy {
                    event.prevent_default();
                    transfer.set_drop_effect(DROP_EFFECT_COPY);
                }
            },
        );
        let drop_listener = {
            let on_intent = on_intent.clone();
            EventListener::new_with_options(
                &window,
                "drop",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(transfer) = data_transfer(event) else {
                        return;
                    };
                    let plain = transfer.get_data(TEXT_PLAIN).ok();
                    let uri_list = transfer.get_data(TEXT_URI_LIST).ok();
                    let outcome = drop_outcome(plain.as_deref(), uri_list.as_deref());
                    apply(event, outcome, &on_intent);
                },
            )
        };
        Self {
            _listeners: [paste, drag_over, drop_listener],
        }
    }
}

/// Install the interceptor for the lifetime of the calling component.
#[hook]
pub(crate) fn use_input_interceptor(on_intent: Callback<ModalIntent>) {
    use_effect_with_deps(
        move |_| {
            let interceptor = InputInterceptor::install(&on_intent);
            move || drop(interceptor)
        },
        (),
    );
}

/// Open the add dialog when the current URL carries `action=add-urls&url=...`.
///
/// Runs after every render; the store tolerates repeated identical intents.
#[hook]
pub(crate) fn use_query_import(on_intent: Callback<ModalIntent>) {
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    use_effect(move || {
        if let Some(intent) = add_urls_intent(&query) {
            on_intent.emit(intent);
        }
        || ()
    });
}

fn apply(event: &Event, outcome: Interception, on_intent: &Callback<ModalIntent>) {
    if let Interception::Capture(intent) = outcome {
        event.prevent_default();
        on_intent.emit(intent);
    }
}

fn paste_target(event: &Event) -> PasteTarget {
    let Some(target) = event.target() else {
        return PasteTarget::Other;
    };
    if target.dyn_ref::<HtmlInputElement>().is_some() {
        PasteTarget::TextInput
    } else if target.dyn_ref::<HtmlTextAreaElement>().is_some() {
        PasteTarget::TextArea
    } else if target
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable)
    {
        PasteTarget::ContentEditable
    } else {
        PasteTarget::Other
    }
}

fn data_transfer(event: &Event) -> Option<DataTransfer> {
    event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer)
}
