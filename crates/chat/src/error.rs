//! Fehlertypen fuer das Chat-Crate

use thiserror::Error;

/// Chat-Fehlertypen
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Ungueltige Eingabe: {0}")]
    UngueltigeEingabe(String),

    #[error("Nachricht zu lang: {zeichen} Zeichen (Maximum: {max})")]
    NachrichtZuLang { zeichen: usize, max: usize },

    #[error("Verschluesselung fehlgeschlagen: {0}")]
    Verschluesselung(#[from] kollab_crypto::CryptoError),

    #[error("Transport-Fehler: {0}")]
    Transport(String),
}

pub type ChatResult<T> = Result<T, ChatError>;
