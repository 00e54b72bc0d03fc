//! autotod_core - pure no_std logic for the AutoTOD proximity pause plugin
//!
//! This crate contains the monitoring state machine and supporting types,
//! testable on host without any simulator or GUI dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Host services injected via traits
//!
//! # Modules
//!
//! - [`geo`]: Great-circle distance calculation
//! - [`monitor`]: Proximity monitor state machine and host trait seams
//! - [`settings`]: Persisted configuration and its flat text format
//! - [`panel`]: Bounded input fields and the configuration panel model

#![cfg_attr(not(test), no_std)]

pub mod geo;
pub mod monitor;
pub mod panel;
pub mod settings;
