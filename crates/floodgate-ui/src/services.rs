//! HTTP client helpers for the backend API.

pub(crate) mod api;
