//! Error types for the snvl-protocol crate.
//!
//! The view engine, partitioner and grid builder are infallible. Errors only
//! arise when parsing names typed by a user or found in configuration.

use thiserror::Error;

/// Errors that can occur while parsing protocol values from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The name does not denote a task status.
    #[error("unknown task status: {0:?} (expected todo, in-progress, review or done)")]
    UnknownStatus(String),

    /// The name does not denote a page of the dashboard.
    #[error("unknown view: {0:?} (expected analytics, tables, calendar or kanban)")]
    UnknownView(String),

    /// The name does not denote a sortable user field.
    #[error("unknown user field: {0:?}")]
    UnknownField(String),

    /// The name does not denote a user role.
    #[error("unknown role: {0:?} (expected Admin, Editor or User)")]
    UnknownRole(String),

    /// The name does not denote a first day of the week.
    #[error("unknown week start: {0:?} (expected sunday or monday)")]
    UnknownWeekStart(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
