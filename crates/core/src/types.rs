//! Gemeinsame Identifikationstypen fuer Kollab
//!
//! Alle IDs verwenden das Newtype-Pattern um Verwechslungen zwischen
//! verschiedenen ID-Arten zur Compilezeit auszuschliessen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{KollabError, Result};

/// Eindeutige Benutzer-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Erstellt eine neue zufaellige UserId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Eindeutige Projekt-ID
///
/// Die ID wird vom Backend vergeben und ist nicht geheim: sie steht in URLs
/// und ist jedem Projektmitglied bekannt. Der Inhalt wird unveraendert
/// uebernommen, nur leere IDs werden abgelehnt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    /// Erstellt eine ProjectId, nur die leere ID ist ungueltig
    pub fn neu(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(KollabError::UngueltigeProjektId(
                "Projekt-ID darf nicht leer sein".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Gibt die ID unveraendert zurueck
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = KollabError;

    fn try_from(value: String) -> Result<Self> {
        Self::neu(value)
    }
}

impl From<ProjectId> for String {
    fn from(value: ProjectId) -> Self {
        value.0
    }
}

impl std::str::FromStr for ProjectId {
    type Err = KollabError;

    fn from_str(s: &str) -> Result<Self> {
        Self::neu(s)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_eindeutig() {
        let a = UserId::new();
        let b = UserId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn user_id_display() {
        let id = UserId(Uuid::nil());
        assert_eq!(id.to_string(), "user:00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn projekt_id_bleibt_unveraendert() {
        let id = ProjectId::neu(" proj-42 ").unwrap();
        assert_eq!(id.as_str(), " proj-42 ");
        assert_eq!(id.to_string(), " proj-42 ");
    }

    #[test]
    fn leere_projekt_id_abgelehnt() {
        assert!(ProjectId::neu("").is_err());
        assert!("".parse::<ProjectId>().is_err());
    }

    #[test]
    fn leerzeichen_projekt_id_erlaubt() {
        let id = ProjectId::neu("   ").unwrap();
        assert_eq!(id.as_str(), "   ");
    }

    #[test]
    fn projekt_id_serde_roundtrip() {
        let id = ProjectId::neu("proj-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"proj-42\"");
        let id2: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, id2);
    }

    #[test]
    fn leere_projekt_id_beim_deserialisieren_abgelehnt() {
        let result: std::result::Result<ProjectId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
