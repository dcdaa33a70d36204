//! ChatService – Nachrichten verfassen, senden, laden und darstellen

use std::sync::Arc;

use kollab_core::{ProjectId, UserId, MAX_NACHRICHT_ZEICHEN};
use tokio::sync::broadcast;

use crate::{
    compose::nachricht_verfassen_mit_limit,
    error::ChatResult,
    render::{nachricht_darstellen, verlauf_darstellen},
    transport::NachrichtenTransport,
    types::{AngezeigteNachricht, NachrichtenRecord},
};

/// ChatService verbindet Verschluesselung und Transport
pub struct ChatService<T: NachrichtenTransport> {
    transport: Arc<T>,
    max_zeichen: usize,
}

impl<T: NachrichtenTransport> ChatService<T> {
    /// Erstellt einen neuen ChatService mit dem Standard-Limit
    pub fn neu(transport: Arc<T>) -> Arc<Self> {
        Self::mit_max_zeichen(transport, MAX_NACHRICHT_ZEICHEN)
    }

    /// Erstellt einen neuen ChatService mit eigenem Zeichen-Limit
    pub fn mit_max_zeichen(transport: Arc<T>, max_zeichen: usize) -> Arc<Self> {
        Arc::new(Self {
            transport,
            max_zeichen,
        })
    }

    /// Nachricht verschluesseln und an das Backend senden
    pub async fn nachricht_senden(
        &self,
        project_id: &ProjectId,
        sender_id: UserId,
        body: &str,
    ) -> ChatResult<NachrichtenRecord> {
        let neu = nachricht_verfassen_mit_limit(project_id, sender_id, body, self.max_zeichen)?;
        let record = self.transport.senden(neu).await?;

        tracing::info!(
            message_id = %record.id,
            project_id = %project_id,
            sender_id = %sender_id,
            "Nachricht gesendet"
        );
        Ok(record)
    }

    /// Verlauf eines Projekts laden, entschluesseln und sortieren
    pub async fn verlauf_laden(
        &self,
        project_id: &ProjectId,
    ) -> ChatResult<Vec<AngezeigteNachricht>> {
        let records = self.transport.verlauf(project_id).await?;
        let verlauf = verlauf_darstellen(records, project_id);

        let unlesbar = verlauf.iter().filter(|n| n.unlesbar).count();
        if unlesbar > 0 {
            tracing::warn!(
                project_id = %project_id,
                unlesbar,
                gesamt = verlauf.len(),
                "Verlauf enthaelt nicht entschluesselbare Nachrichten"
            );
        }
        Ok(verlauf)
    }

    /// Echtzeit-Abonnement auf ein Projekt
    pub fn abonnieren(&self, project_id: &ProjectId) -> broadcast::Receiver<NachrichtenRecord> {
        self.transport.abonnieren(project_id)
    }

    /// Live eingegangenen Record darstellen
    pub fn eingang_darstellen(
        &self,
        record: &NachrichtenRecord,
        project_id: &ProjectId,
    ) -> AngezeigteNachricht {
        nachricht_darstellen(record, project_id)
    }
}
