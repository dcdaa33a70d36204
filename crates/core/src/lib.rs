//! kollab-core – Gemeinsame Typen, Grenzwerte und Fehlertypen
//!
//! Dieses Crate stellt die Bausteine bereit, die von Crypto-, Chat- und
//! CLI-Crate gemeinsam genutzt werden.

pub mod error;
pub mod limits;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use error::{KollabError, Result};
pub use limits::MAX_NACHRICHT_ZEICHEN;
pub use types::{ProjectId, UserId};
