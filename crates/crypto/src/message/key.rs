//! Schluessel-Ableitung aus der Projekt-ID

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};
use crate::types::{SecretBytes, SALT_LEN};

/// HKDF-Info fuer Nachrichten-Schluessel (Format-Version 1)
const NACHRICHT_INFO: &[u8] = b"kollab-nachricht-v1";

/// Laenge des abgeleiteten AES-256-Schluessels
pub const SCHLUESSEL_LEN: usize = 32;

/// Leitet den Nachrichten-Schluessel aus Projekt-ID und Salt ab
///
/// Die Projekt-ID ist das einzige Schluesselmaterial. Wer sie kennt, kann
/// alle Nachrichten des Projekts entschluesseln.
pub fn projekt_schluessel_ableiten(
    project_id: &str,
    salt: &[u8; SALT_LEN],
) -> CryptoResult<SecretBytes> {
    if project_id.is_empty() {
        return Err(CryptoError::LeereProjektId);
    }

    let hk = Hkdf::<Sha256>::new(Some(salt), project_id.as_bytes());
    let mut okm = vec![0u8; SCHLUESSEL_LEN];
    hk.expand(NACHRICHT_INFO, &mut okm)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    Ok(SecretBytes::new(okm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministisch_fuer_gleiche_eingaben() {
        let salt = [3u8; SALT_LEN];
        let a = projekt_schluessel_ableiten("proj-42", &salt).unwrap();
        let b = projekt_schluessel_ableiten("proj-42", &salt).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(a.len(), SCHLUESSEL_LEN);
    }

    #[test]
    fn verschiedene_projekte_verschiedene_schluessel() {
        let salt = [3u8; SALT_LEN];
        let a = projekt_schluessel_ableiten("proj-42", &salt).unwrap();
        let b = projekt_schluessel_ableiten("proj-43", &salt).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn salt_beeinflusst_schluessel() {
        let a = projekt_schluessel_ableiten("proj-42", &[1u8; SALT_LEN]).unwrap();
        let b = projekt_schluessel_ableiten("proj-42", &[2u8; SALT_LEN]).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn leere_projekt_id_abgelehnt() {
        let result = projekt_schluessel_ableiten("", &[0u8; SALT_LEN]);
        assert!(matches!(result, Err(CryptoError::LeereProjektId)));
    }

    #[test]
    fn leerzeichen_id_ist_eigener_schluessel() {
        let salt = [5u8; SALT_LEN];
        let a = projekt_schluessel_ableiten(" ", &salt).unwrap();
        let b = projekt_schluessel_ableiten("  ", &salt).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }
}
