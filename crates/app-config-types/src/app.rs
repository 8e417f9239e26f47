// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The application configuration record and its conformance checks.
//!
//! Wire names are camelCase, matching what the front end reads by field
//! name:
//!
//! ```json
//! {
//!   "pageTitle": "Voice Shopping Assistant",
//!   "companyName": "Your Online Store",
//!   "supportsChatInput": true,
//!   "logo": "/lk-logo.svg",
//!   "accent": "#14b8a6",
//!   "startButtonText": "🛒 Start Shopping"
//! }
//! ```
//!
//! Mandatory fields must always be present with non-empty values. Optional
//! fields are `Option`s and are omitted from serialized output when unset,
//! so consumers can distinguish "not configured" from "configured as empty".

use serde::{Deserialize, Serialize};

/// Presentation and feature-toggle configuration for one deployment.
///
/// This struct is the schema root of the configuration surface; unknown
/// keys are rejected on deserialization so that typos surface as errors
/// instead of being silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Browser/tab title.
    pub page_title: String,
    /// Meta description shown to users and search engines.
    pub page_description: String,
    /// Display name of the operating entity.
    pub company_name: String,

    /// Enables the text-chat affordance.
    pub supports_chat_input: bool,
    /// Enables the camera capture affordance.
    pub supports_video_input: bool,
    /// Enables the screen-sharing affordance.
    pub supports_screen_share: bool,
    /// Buffer user input captured before the connection is established.
    pub is_pre_connect_buffer_enabled: bool,

    /// Light-theme logo asset location (path or URL).
    pub logo: String,
    /// Label for the primary call-to-action control.
    pub start_button_text: String,
    /// Light-theme accent color (`#rgb` or `#rrggbb`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Dark-theme logo asset location (path or URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_dark: Option<String>,
    /// Dark-theme accent color (`#rgb` or `#rrggbb`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_dark: Option<String>,

    /// Identifier of the hosted sandbox environment, when deployed there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_id: Option<String>,
    /// Name of the backend conversational agent to dispatch to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}

impl AppConfig {
    /// Get the dark-theme logo, falling back to the light-theme logo when
    /// no dedicated dark variant is configured.
    pub fn effective_logo_dark(&self) -> &str {
        self.logo_dark.as_deref().unwrap_or(&self.logo)
    }

    /// Get the dark-theme accent color, falling back to the light-theme
    /// accent when no dedicated dark variant is configured.
    pub fn effective_accent_dark(&self) -> Option<&str> {
        self.accent_dark.as_deref().or(self.accent.as_deref())
    }

    /// Validate the record, returning an error if any values are invalid.
    ///
    /// Checks the invariant that every mandatory text field carries a
    /// non-empty value, and that accent colors, when present, are
    /// hex-formatted.
    pub fn validate(&self) -> Result<(), AppConfigError> {
        let mandatory_text = [
            ("pageTitle", &self.page_title),
            ("pageDescription", &self.page_description),
            ("companyName", &self.company_name),
            ("logo", &self.logo),
            ("startButtonText", &self.start_button_text),
        ];
        for (field, value) in mandatory_text {
            if value.is_empty() {
                return Err(AppConfigError::EmptyField { field });
            }
        }

        let accents = [("accent", &self.accent), ("accentDark", &self.accent_dark)];
        for (field, value) in accents {
            if let Some(color) = value {
                validate_hex_color(color).map_err(|reason| AppConfigError::InvalidAccent {
                    field,
                    value: color.clone(),
                    reason,
                })?;
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppConfigError {
    /// A mandatory text field was present but empty.
    #[error("mandatory field '{field}' must not be empty")]
    EmptyField { field: &'static str },
    /// An accent color value is not hex-formatted.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidAccent {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Validate a CSS hex color: leading `#` followed by 3 or 6 hex digits.
fn validate_hex_color(s: &str) -> Result<(), String> {
    let digits = s.strip_prefix('#').ok_or_else(|| "expected leading '#'".to_string())?;
    if digits.len() != 3 && digits.len() != 6 {
        return Err(format!("expected 3 or 6 hex digits, got {}", digits.len()));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("non-hex digit in color value".to_string());
    }
    Ok(())
}
