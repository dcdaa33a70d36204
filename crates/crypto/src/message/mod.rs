//! Nachrichten-Verschluesselung pro Projekt
//!
//! Chat-Nachrichten werden vor dem Senden verschluesselt, damit der
//! Nachrichtenspeicher des Backends nur Ciphertext sieht.
//!
//! ## Ablauf
//! 1. Schluesselmaterial ist die Projekt-ID selbst (nicht geheim, nie rotiert)
//! 2. Pro Nachricht: zufaelliger Salt + HKDF-SHA256 -> 32-Byte-Schluessel
//! 3. AES-256-GCM mit zufaelliger Nonce, Header als AAD
//! 4. Ausgabe als Base64-String (siehe [`CiphertextBlob`](crate::types::CiphertextBlob))
//!
//! Entschluesselung ist fail-closed: [`decrypt`] liefert bei jedem Fehler
//! einen leeren String, [`decrypt_checked`] den typisierten Grund.

pub mod decrypt;
pub mod encrypt;
pub mod key;

pub use decrypt::{decrypt, decrypt_checked};
pub use encrypt::encrypt;
pub use key::projekt_schluessel_ableiten;
