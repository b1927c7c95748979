//! Span definitions per operation: ingest, generate, remove, export, command.

/// Create an ingest span.
#[macro_export]
macro_rules! ingest_span {
    ($community:expr) => {
        tracing::debug_span!("mimic.ingest", community = %$community)
    };
}

/// Create an export span.
#[macro_export]
macro_rules! export_span {
    ($community:expr, $sink:expr) => {
        tracing::info_span!("mimic.export", community = %$community, sink = %$sink)
    };
}

/// Create a command span.
#[macro_export]
macro_rules! command_span {
    ($community:expr, $command:expr) => {
        tracing::info_span!("mimic.command", community = %$community, command = %$command)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "mimic.ingest";
    pub const EXPORT: &str = "mimic.export";
    pub const COMMAND: &str = "mimic.command";
}
