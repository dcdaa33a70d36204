//! # kollab-crypto
//!
//! Vertraulichkeitsschicht fuer Chat-Nachrichten.
//!
//! Nachrichten werden clientseitig pro Projekt verschluesselt, bevor sie an
//! das Backend gehen, und erst beim Darstellen wieder entschluesselt.
//!
//! ## Module
//! - `message` - `encrypt` / `decrypt` und Schluessel-Ableitung
//! - `types` - Ciphertext-Format und Schluessel-Container
//! - `error` - Fehlertypen
//!
//! ## Bedrohungsmodell
//! Das Schluesselmaterial ist die Projekt-ID. Sie ist nicht geheim und jedem
//! Mitglied bekannt. Die Verschluesselung schuetzt damit nur vor dem Lesen
//! des rohen Nachrichtenspeichers, nicht vor Parteien, die das Projekt
//! adressieren koennen.

pub mod error;
pub mod message;
pub mod types;

// Bequeme Re-Exports
pub use error::{CryptoError, CryptoResult};
pub use message::{decrypt, decrypt_checked, encrypt, projekt_schluessel_ableiten};
pub use types::{is_blob, CiphertextBlob, SecretBytes};
