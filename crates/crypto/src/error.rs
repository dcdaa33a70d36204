//! Fehlertypen fuer die Nachrichten-Verschluesselung
//!
//! Keine Variante traegt Klartext, Ciphertext oder Schluesselmaterial.

use thiserror::Error;

/// Fehler im Kryptografie-Subsystem
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Projekt-ID darf nicht leer sein")]
    LeereProjektId,

    #[error("Verschluesselung fehlgeschlagen: {0}")]
    Verschluesselung(String),

    #[error("Nachricht nicht entschluesselbar (falscher Schluessel oder manipulierte Daten)")]
    NichtEntschluesselbar,

    #[error("Ungueltiges Ciphertext-Format: {0}")]
    UngueltigesFormat(String),

    #[error("Nicht unterstuetzte Format-Version: {0}")]
    UnbekannteVersion(u8),

    #[error("Entschluesselter Inhalt ist kein gueltiges UTF-8")]
    KeinUtf8,

    #[error("Key Derivation fehlgeschlagen: {0}")]
    KeyDerivation(String),

    #[error("Base64-Dekodierung fehlgeschlagen: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
