//! Oeffentliche Typen fuer den Chat
//!
//! `text` ist in allen Transport-Typen immer Ciphertext. Klartext existiert
//! nur in [`AngezeigteNachricht`] und nur bis zur Darstellung.

use chrono::{DateTime, Utc};
use kollab_core::{ProjectId, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ausgehende Nachricht, bereit fuer den Transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeueNachricht {
    pub project_id: ProjectId,
    pub sender_id: UserId,
    /// Ciphertext-Blob
    pub text: String,
}

/// Vom Backend gespeicherte und verteilte Nachricht
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NachrichtenRecord {
    pub id: Uuid,
    pub project_id: ProjectId,
    pub sender_id: UserId,
    /// Ciphertext-Blob
    pub text: String,
    /// Server-Zeitstempel
    pub created_at: DateTime<Utc>,
}

/// Entschluesselte, HTML-escapte Nachricht fuer die Darstellung
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AngezeigteNachricht {
    pub id: Uuid,
    pub project_id: ProjectId,
    pub sender_id: UserId,
    /// Escapter Klartext, leer wenn `unlesbar`
    pub inhalt: String,
    /// Inhalt konnte nicht entschluesselt werden (kein Fehler fuer den Nutzer)
    pub unlesbar: bool,
    pub created_at: DateTime<Utc>,
}
