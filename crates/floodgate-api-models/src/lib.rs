#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Floodgate public API.
//!
//! The web UI decodes these shapes directly, so field names follow the
//! backend's camelCase JSON contract.
use serde::{Deserialize, Serialize};

/// Authentication scheme the backend was configured with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// Regular username/password sessions.
    #[default]
    Default,
    /// Authentication disabled; the backend trusts every request.
    None,
}

impl AuthMethod {
    /// Wire representation of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::None => "none",
        }
    }

    /// Parse the wire representation, defaulting unknown values to [`AuthMethod::Default`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "none" => Self::None,
            _ => Self::Default,
        }
    }
}

/// Server-side configuration echoed back by the verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfigs {
    /// Configured authentication scheme.
    #[serde(default)]
    pub auth_method: AuthMethod,
}

/// Response body of `GET /api/auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthVerification {
    /// Set when no user account exists yet and registration is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<bool>,
    /// Server configuration relevant to the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<ServerConfigs>,
}

impl AuthVerification {
    /// Whether the backend asked for first-user registration.
    #[must_use]
    pub fn requires_registration(&self) -> bool {
        self.initial_user.unwrap_or(false)
    }
}

/// Request body of `POST /api/torrents/add-urls`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTorrentByUrlRequest {
    /// Magnet links or HTTP(S) URLs to add.
    pub urls: Vec<String>,
    /// Start the torrents immediately after adding.
    pub start: bool,
}
