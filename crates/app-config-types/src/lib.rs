// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Strongly-typed presentation and feature-toggle configuration for the
//! voice assistant front end.
//!
//! This crate defines the application configuration record consumed by the
//! rendering layer: page metadata, branding assets, accent colors, the
//! start-button label, and the input-capability toggles. One fully-populated
//! instance exists per deployment variant; the record is built once at
//! startup and treated as immutable afterwards.
//!
//! The crate deliberately contains no loading or merging machinery. Whatever
//! loads the configuration is expected to produce a value conforming to the
//! schema published by [`schema::root_schema`] and to fail with a
//! configuration error when a mandatory field is missing.

pub mod app;
pub mod schema;
pub mod variants;

pub use app::{AppConfig, AppConfigError};
