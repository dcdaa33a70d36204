//! Client-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass die CLI ohne Konfigurationsdatei
//! lauffaehig ist.

use serde::{Deserialize, Serialize};

use kollab_core::{KollabError, MAX_NACHRICHT_ZEICHEN};

/// Standard-Pfad der Konfigurationsdatei
pub const STANDARD_PFAD: &str = "kollab.toml";

/// Vollstaendige Client-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Chat-Einstellungen
    pub chat: ChatEinstellungen,
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Filter-Direktive: "warn", "debug" oder z.B. "kollab_chat=trace"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "text".into(),
        }
    }
}

/// Chat-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatEinstellungen {
    /// Maximale Nachrichtenlaenge in Unicode-Zeichen
    pub max_zeichen: usize,
}

impl Default for ChatEinstellungen {
    fn default() -> Self {
        Self {
            max_zeichen: MAX_NACHRICHT_ZEICHEN,
        }
    }
}

impl ClientConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        let config = match std::fs::read_to_string(pfad) {
            Ok(inhalt) => toml::from_str::<Self>(&inhalt)
                .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Self::default()
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
                ))
            }
        };
        config.validieren()?;
        Ok(config)
    }

    /// Prueft Werte, die serde allein nicht abdeckt
    pub fn validieren(&self) -> kollab_core::Result<()> {
        if self.chat.max_zeichen == 0 {
            return Err(KollabError::konfiguration(
                "chat.max_zeichen muss groesser als 0 sein",
            ));
        }
        if self.chat.max_zeichen > MAX_NACHRICHT_ZEICHEN {
            return Err(KollabError::konfiguration(format!(
                "chat.max_zeichen darf {MAX_NACHRICHT_ZEICHEN} nicht ueberschreiten (ist {})",
                self.chat.max_zeichen
            )));
        }
        if !kollab_observability::log_filter_gueltig(&self.logging.level) {
            return Err(KollabError::konfiguration(format!(
                "Ungueltiger Log-Level: '{}'",
                self.logging.level
            )));
        }
        if !kollab_observability::log_format_gueltig(&self.logging.format) {
            return Err(KollabError::konfiguration(format!(
                "Unbekanntes Log-Format: '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn standard_config_ist_valide() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.chat.max_zeichen, 4000);
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.logging.format, "text");
        assert!(cfg.validieren().is_ok());
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [chat]
            max_zeichen = 500
        "#;
        let cfg: ClientConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.chat.max_zeichen, 500);
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.logging.format, "text");
    }

    #[test]
    fn fehlende_datei_ergibt_standardwerte() {
        let cfg = ClientConfig::laden("/nicht/vorhanden/kollab.toml").unwrap();
        assert_eq!(cfg.chat.max_zeichen, 4000);
    }

    #[test]
    fn datei_wird_geladen() {
        let mut datei = tempfile::NamedTempFile::new().unwrap();
        writeln!(datei, "[logging]\nformat = \"json\"\n[chat]\nmax_zeichen = 10").unwrap();

        let cfg = ClientConfig::laden(datei.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.chat.max_zeichen, 10);
    }

    #[test]
    fn kaputtes_toml_abgelehnt() {
        let mut datei = tempfile::NamedTempFile::new().unwrap();
        writeln!(datei, "[chat\nmax_zeichen = ").unwrap();
        assert!(ClientConfig::laden(datei.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn ungueltige_werte_abgelehnt() {
        let mut cfg = ClientConfig::default();
        cfg.chat.max_zeichen = 0;
        assert!(cfg.validieren().is_err());

        cfg.chat.max_zeichen = 5000;
        assert!(cfg.validieren().is_err());

        let mut cfg = ClientConfig::default();
        cfg.logging.format = "xml".into();
        assert!(matches!(
            cfg.validieren(),
            Err(KollabError::Konfiguration(_))
        ));
    }

    #[test]
    fn log_level_wird_geprueft() {
        let mut cfg = ClientConfig::default();
        cfg.logging.level = "kollab_chat=debug".into();
        assert!(cfg.validieren().is_ok());

        cfg.logging.level = "kollab_chat=lautlos".into();
        let fehler = cfg.validieren().unwrap_err();
        assert!(fehler.to_string().contains("Log-Level"));
    }

    #[test]
    fn ungueltiger_level_in_datei_abgelehnt() {
        let mut datei = tempfile::NamedTempFile::new().unwrap();
        writeln!(datei, "[logging]\nlevel = \"\"").unwrap();
        assert!(ClientConfig::laden(datei.path().to_str().unwrap()).is_err());
    }
}
