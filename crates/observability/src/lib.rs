//! # kollab-observability
//!
//! Structured Logging fuer alle Kollab-Binaries via tracing-subscriber.
//! Nachrichteninhalte und Schluesselmaterial werden nie geloggt; die
//! Crates loggen nur IDs, Laengen und Fehlergruende.

pub mod logging;

pub use logging::{log_format_gueltig, log_filter_gueltig, logging_initialisieren};
