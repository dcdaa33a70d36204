//! Fehlertypen fuer Kollab
//!
//! Zentraler Fehler-Enum fuer Zustaende, die crate-uebergreifend auftreten.
//! Untermodule definieren eigene Fehler.

use thiserror::Error;

/// Globaler Result-Alias fuer Kollab
pub type Result<T> = std::result::Result<T, KollabError>;

/// Crate-uebergreifende Fehler
#[derive(Debug, Error)]
pub enum KollabError {
    #[error("Ungueltige Projekt-ID: {0}")]
    UngueltigeProjektId(String),

    #[error("Konfigurationsfehler: {0}")]
    Konfiguration(String),
}

impl KollabError {
    /// Erstellt einen Konfigurationsfehler aus einer beliebigen Nachricht
    pub fn konfiguration(msg: impl Into<String>) -> Self {
        Self::Konfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fehler_anzeige() {
        let e = KollabError::UngueltigeProjektId("leer".into());
        assert_eq!(e.to_string(), "Ungueltige Projekt-ID: leer");
    }

    #[test]
    fn konfiguration_konstruktor() {
        let e = KollabError::konfiguration("max_zeichen");
        assert_eq!(e.to_string(), "Konfigurationsfehler: max_zeichen");
    }
}
