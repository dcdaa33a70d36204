//! Nachrichten-Verschluesselung
//!
//! Verschluesselt einen Nachrichtentext mit einem aus der Projekt-ID
//! abgeleiteten AES-256-GCM-Schluessel.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng, Payload},
    Aes256Gcm, Nonce,
};

use crate::error::{CryptoError, CryptoResult};
use crate::message::key::projekt_schluessel_ableiten;
use crate::types::{CiphertextBlob, FORMAT_VERSION, NONCE_LEN, SALT_LEN};

/// Verschluesselt einen Nachrichtentext fuer ein Projekt
///
/// Zwei Aufrufe mit gleichen Eingaben liefern verschiedene Ciphertexte
/// (zufaelliger Salt und zufaellige Nonce), beide sind mit derselben
/// Projekt-ID entschluesselbar.
///
/// # Fehler
/// - [`CryptoError::LeereProjektId`] bei leerer Projekt-ID
/// - [`CryptoError::Verschluesselung`] wenn die Zufallsquelle versagt
pub fn encrypt(plaintext: &str, project_id: &str) -> CryptoResult<String> {
    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .and_then(|_| OsRng.try_fill_bytes(&mut nonce))
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))?;

    let blob = seal(plaintext.as_bytes(), project_id, salt, nonce)?;
    Ok(blob.encode())
}

/// Verschluesselt mit vorgegebenem Salt und vorgegebener Nonce
pub(crate) fn seal(
    plaintext: &[u8],
    project_id: &str,
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
) -> CryptoResult<CiphertextBlob> {
    let key = projekt_schluessel_ableiten(project_id, &salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))?;

    let mut blob = CiphertextBlob {
        version: FORMAT_VERSION,
        salt,
        nonce,
        ciphertext: Vec::new(),
    };
    let aad = blob.header();

    blob.ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &aad,
            },
        )
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))?;

    Ok(blob)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
