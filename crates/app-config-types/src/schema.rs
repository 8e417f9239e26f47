// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON Schema generation for the configuration record.
//!
//! The schema is the contract published to whatever loads the configuration:
//! produce a value conforming to it, or fail with a configuration error when
//! a mandatory field is missing. The loader itself lives outside this crate.

use crate::app::AppConfig;

/// Generate the JSON Schema for [`AppConfig`] with inlined subschemas.
pub fn root_schema() -> schemars::schema::RootSchema {
    let settings =
        schemars::r#gen::SchemaSettings::draft2019_09().with(|s| s.inline_subschemas = true);
    settings.into_generator().into_root_schema_for::<AppConfig>()
}
