//! Gemeinsame Typen fuer die Nachrichten-Verschluesselung

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{CryptoError, CryptoResult};

/// Magic-Bytes am Anfang jedes Ciphertext-Blobs
pub const MAGIC: [u8; 3] = *b"KLB";
/// Aktuelle Format-Version
pub const FORMAT_VERSION: u8 = 1;
/// Laenge des Headers (Magic + Version)
pub const HEADER_LEN: usize = 4;
/// Salt-Laenge fuer die Schluessel-Ableitung
pub const SALT_LEN: usize = 16;
/// AES-GCM Nonce-Laenge
pub const NONCE_LEN: usize = 12;
/// AES-GCM Auth-Tag-Laenge
pub const TAG_LEN: usize = 16;

/// Sicherer Schluessel-Container (wird beim Drop genullt)
#[derive(Clone)]
pub struct SecretBytes(Vec<u8>);

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED] {} bytes)", self.0.len())
    }
}

impl SecretBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Selbstbeschreibender Ciphertext einer Chat-Nachricht
///
/// ## Format (vor Base64)
/// ```text
/// [magic "KLB"(3)] [version(1)] [salt(16)] [nonce(12)] [ciphertext + auth_tag(16)]
/// ```
///
/// Der Header (Magic + Version) wird als AAD mitverschluesselt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiphertextBlob {
    pub version: u8,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// Verschluesselter Inhalt inkl. 16 Bytes Auth-Tag (angehaengt)
    pub ciphertext: Vec<u8>,
}

impl CiphertextBlob {
    /// Minimale Laenge eines gueltigen Blobs in Bytes (leerer Klartext)
    pub const MIN_LEN: usize = HEADER_LEN + SALT_LEN + NONCE_LEN + TAG_LEN;

    /// Header-Bytes, die als AAD gebunden werden
    pub fn header(&self) -> [u8; HEADER_LEN] {
        [MAGIC[0], MAGIC[1], MAGIC[2], self.version]
    }

    /// Serialisiert zu Bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            HEADER_LEN + SALT_LEN + NONCE_LEN + self.ciphertext.len(),
        );
        out.extend_from_slice(&self.header());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Deserialisiert aus Bytes
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() < Self::MIN_LEN {
            return Err(CryptoError::UngueltigesFormat(format!(
                "zu kurz: {} Bytes (Minimum: {})",
                bytes.len(),
                Self::MIN_LEN
            )));
        }
        if bytes[0..3] != MAGIC {
            return Err(CryptoError::UngueltigesFormat(
                "Magic-Bytes fehlen".to_string(),
            ));
        }
        let version = bytes[3];
        if version != FORMAT_VERSION {
            return Err(CryptoError::UnbekannteVersion(version));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[HEADER_LEN..HEADER_LEN + SALT_LEN]);

        let nonce_start = HEADER_LEN + SALT_LEN;
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[nonce_start..nonce_start + NONCE_LEN]);

        let ciphertext = bytes[nonce_start + NONCE_LEN..].to_vec();

        Ok(Self {
            version,
            salt,
            nonce,
            ciphertext,
        })
    }

    /// Kodiert den Blob als speicher- und transportsicheren String
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Dekodiert einen Blob aus seiner String-Form
    pub fn decode(encoded: &str) -> CryptoResult<Self> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Display for CiphertextBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for CiphertextBlob {
    type Err = CryptoError;

    fn from_str(s: &str) -> CryptoResult<Self> {
        Self::decode(s)
    }
}

/// Prueft guenstig, ob ein String wie ein Kollab-Ciphertext aussieht
///
/// Entschluesselt nichts; ein `true` garantiert keine erfolgreiche
/// Entschluesselung.
pub fn is_blob(candidate: &str) -> bool {
    CiphertextBlob::decode(candidate).is_ok()
}
