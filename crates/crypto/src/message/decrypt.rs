//! Nachrichten-Entschluesselung
//!
//! Verifiziert Auth-Tag und Header (AAD). Jeder Fehler fuehrt in
//! [`decrypt`] zu einem leeren String; Inhalte werden nie geloggt.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};

use crate::error::{CryptoError, CryptoResult};
use crate::message::key::projekt_schluessel_ableiten;
use crate::types::CiphertextBlob;

/// Entschluesselt einen Ciphertext und liefert den typisierten Grund bei Fehlern
///
/// Ein leerer Ciphertext ergibt einen leeren Klartext.
pub fn decrypt_checked(ciphertext: &str, project_id: &str) -> CryptoResult<String> {
    if ciphertext.is_empty() {
        return Ok(String::new());
    }
    if project_id.is_empty() {
        return Err(CryptoError::LeereProjektId);
    }

    let blob = CiphertextBlob::decode(ciphertext)?;
    let plaintext = open(&blob, project_id)?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::KeinUtf8)
}

/// Entschluesselt einen Ciphertext, fail-closed
///
/// Liefert bei falscher Projekt-ID, manipulierten oder fremden Daten einen
/// leeren String. Gibt niemals den Ciphertext selbst zurueck.
pub fn decrypt(ciphertext: &str, project_id: &str) -> String {
    match decrypt_checked(ciphertext, project_id) {
        Ok(plaintext) => plaintext,
        Err(e) => {
            tracing::debug!(grund = %e, "Nachricht nicht entschluesselbar, leerer Inhalt");
            String::new()
        }
    }
}

fn open(blob: &CiphertextBlob, project_id: &str) -> CryptoResult<Vec<u8>> {
    let key = projekt_schluessel_ableiten(project_id, &blob.salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
    let aad = blob.header();

    cipher
        .decrypt(
            Nonce::from_slice(&blob.nonce),
            Payload {
                msg: &blob.ciphertext,
                aad: &aad,
            },
        )
        .map_err(|_| CryptoError::NichtEntschluesselbar)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::encrypt::{encrypt, seal};
    use crate::types::{NONCE_LEN, SALT_LEN};

    #[test]
    fn roundtrip() {
        let c = encrypt("Hallo Team, Standup um 10?", "proj-42").unwrap();
        assert_eq!(decrypt(&c, "proj-42"), "Hallo Team, Standup um 10?");
    }

    #[test]
    fn konkretes_szenario() {
        let c = encrypt("Привет, команда!", "proj-42").unwrap();
        assert_eq!(decrypt(&c, "proj-42"), "Привет, команда!");
        assert_eq!(decrypt(&c, "proj-43"), "");
        assert_eq!(decrypt("not-a-real-ciphertext", "proj-42"), "");
    }

    #[test]
    fn leerer_ciphertext_kurzschluss() {
        assert_eq!(decrypt("", "proj-42"), "");
        assert_eq!(decrypt("", ""), "");
        assert_eq!(decrypt_checked("", "proj-42").unwrap(), "");
    }

    #[test]
    fn falsches_projekt_typisiert() {
        let c = encrypt("geheim", "proj-1").unwrap();
        let result = decrypt_checked(&c, "proj-2");
        assert!(matches!(result, Err(CryptoError::NichtEntschluesselbar)));
    }

    #[test]
    fn manipulierter_ciphertext_schlaegt_fehl() {
        let mut blob = seal(b"Original", "proj-1", [5u8; SALT_LEN], [6u8; NONCE_LEN]).unwrap();
        if let Some(byte) = blob.ciphertext.first_mut() {
            *byte ^= 0xFF;
        }
        let encoded = blob.encode();

        assert!(matches!(
            decrypt_checked(&encoded, "proj-1"),
            Err(CryptoError::NichtEntschluesselbar)
        ));
        assert_eq!(decrypt(&encoded, "proj-1"), "");
    }

    #[test]
    fn manipulierter_salt_schlaegt_fehl() {
        let mut blob = seal(b"Original", "proj-1", [5u8; SALT_LEN], [6u8; NONCE_LEN]).unwrap();
        blob.salt[0] ^= 0x01;
        assert_eq!(decrypt(&blob.encode(), "proj-1"), "");
    }

    #[test]
    fn fremdes_format_liefert_leer() {
        assert_eq!(decrypt("U2FsdGVkX1+abc", "proj-42"), "");
        assert_eq!(decrypt("SGFsbG8gV2VsdA==", "proj-42"), "");
        assert_eq!(decrypt("   ", "proj-42"), "");
    }

    #[test]
    fn kein_utf8_liefert_leer() {
        let blob = seal(&[0xFF, 0xFE, 0x00], "proj-1", [1u8; SALT_LEN], [1u8; NONCE_LEN]).unwrap();
        let encoded = blob.encode();
        assert!(matches!(
            decrypt_checked(&encoded, "proj-1"),
            Err(CryptoError::KeinUtf8)
        ));
        assert_eq!(decrypt(&encoded, "proj-1"), "");
    }

    #[test]
    fn leere_projekt_id_liefert_leer() {
        let c = encrypt("x", "proj-1").unwrap();
        assert!(matches!(
            decrypt_checked(&c, ""),
            Err(CryptoError::LeereProjektId)
        ));
        assert_eq!(decrypt(&c, ""), "");
    }

    #[test]
    fn leerer_klartext_roundtrip() {
        let c = encrypt("", "proj-1").unwrap();
        assert!(!c.is_empty());
        assert_eq!(decrypt_checked(&c, "proj-1").unwrap(), "");
    }
}
