//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable:
//! - `KOLLAB_LOG_LEVEL`: Filter-Direktive (z.B. `debug` oder `kollab_chat=trace`), Standard: warn
//! - `KOLLAB_LOG_FORMAT`: Format (text/json), Standard: text
//!
//! Ausgabe geht nach stderr, damit CLI-Ergebnisse auf stdout sauber bleiben.

use tracing_subscriber::{fmt, EnvFilter};

/// Name der Umgebungsvariable fuer den Log-Level
pub const LOG_LEVEL_ENV: &str = "KOLLAB_LOG_LEVEL";
/// Name der Umgebungsvariable fuer das Log-Format
pub const LOG_FORMAT_ENV: &str = "KOLLAB_LOG_FORMAT";

/// Initialisiert das Logging-System.
///
/// Umgebungsvariablen haben Vorrang vor den uebergebenen Werten.
/// Faellt auf `warn` / `text` zurueck falls beides ungueltig ist.
/// Ein zweiter Aufruf im selben Prozess ist wirkungslos.
pub fn logging_initialisieren(level: &str, format: &str) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let aus_env = std::env::var(LOG_FORMAT_ENV).ok();
    let format = format_waehlen(aus_env.as_deref(), format);

    let ergebnis = match format {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .try_init(),
        _ => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if ergebnis.is_err() {
        tracing::debug!("Logging bereits initialisiert");
    }
}

/// Waehlt das Format: gueltiger Env-Wert vor Konfiguration, sonst "text"
fn format_waehlen<'a>(aus_env: Option<&'a str>, aus_config: &'a str) -> &'a str {
    match aus_env {
        Some(f) if log_format_gueltig(f) => f,
        _ if log_format_gueltig(aus_config) => aus_config,
        _ => "text",
    }
}

/// Validiert eine Filter-Direktive, so wie `EnvFilter` sie parst.
///
/// Akzeptiert also auch Ziel-Direktiven wie `kollab_chat=debug`.
pub fn log_filter_gueltig(filter: &str) -> bool {
    !filter.trim().is_empty() && EnvFilter::try_new(filter).is_ok()
}

/// Validiert ob ein Log-Format-String gueltig ist.
pub fn log_format_gueltig(format: &str) -> bool {
    matches!(format, "text" | "json")
}
