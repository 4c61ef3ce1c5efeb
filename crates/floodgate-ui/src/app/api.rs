//! `ApiCtx`: the shell's handle on the backend, provided once at the app root.
//!
//! Hooks and components reach the client through `use_context::<ApiCtx>()`
//! (bootstrap verification, dependency loading, logout, add-by-URL submit).
//! The client is built from the preferences base URL when the app mounts.

use crate::services::api::ApiClient;
use std::rc::Rc;

#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub(crate) client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

// Same client, same context: consumers re-render only when the app root rebuilds it.
impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
