//! Transport-Vertrag zum Nachrichten-Backend
//!
//! Das Backend speichert Records mit Ciphertext und verteilt sie in Echtzeit
//! an alle Abonnenten desselben Projekts. `InMemoryTransport` ist die
//! prozesslokale Referenz-Implementierung.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use kollab_core::ProjectId;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::{ChatError, ChatResult};
use crate::types::{NachrichtenRecord, NeueNachricht};

/// Groesse der Broadcast-Queue pro Projekt
const ABO_QUEUE_GROESSE: usize = 256;

/// Abstraktes Nachrichten-Backend
#[allow(async_fn_in_trait)]
pub trait NachrichtenTransport: Send + Sync {
    /// Nachricht speichern; das Backend vergibt ID und Zeitstempel
    async fn senden(&self, nachricht: NeueNachricht) -> ChatResult<NachrichtenRecord>;

    /// Gespeicherten Verlauf eines Projekts laden
    async fn verlauf(&self, project_id: &ProjectId) -> ChatResult<Vec<NachrichtenRecord>>;

    /// Echtzeit-Abonnement auf neue Nachrichten eines Projekts
    fn abonnieren(&self, project_id: &ProjectId) -> broadcast::Receiver<NachrichtenRecord>;
}

/// In-Memory-Backend mit Broadcast pro Projekt
///
/// Thread-safe via Arc + DashMap. Clone teilt den inneren Zustand.
#[derive(Clone, Default)]
pub struct InMemoryTransport {
    inner: Arc<InMemoryTransportInner>,
}

#[derive(Default)]
struct InMemoryTransportInner {
    /// Gespeicherte Records pro Projekt, in Eingangsreihenfolge
    nachrichten: DashMap<ProjectId, Vec<NachrichtenRecord>>,
    /// Broadcast-Kanaele pro Projekt; Kanaele ohne Empfaenger werden beim
    /// naechsten Senden entfernt
    kanaele: DashMap<ProjectId, broadcast::Sender<NachrichtenRecord>>,
}

impl InMemoryTransport {
    /// Erstellt ein leeres In-Memory-Backend
    pub fn neu() -> Self {
        Self::default()
    }

    /// Fuegt einen fertigen Record ein (z.B. Import oder Tests)
    ///
    /// Erst speichern, dann verteilen: ein Abonnent findet jeden empfangenen
    /// Record bereits im Verlauf.
    pub fn record_einfuegen(&self, record: NachrichtenRecord) {
        self.inner
            .nachrichten
            .entry(record.project_id.clone())
            .or_default()
            .push(record.clone());
        self.verteilen(&record);
    }

    /// Anzahl offener Broadcast-Kanaele (Projekte mit Abonnenten)
    pub fn kanal_anzahl(&self) -> usize {
        self.inner.kanaele.len()
    }

    /// Anzahl gespeicherter Nachrichten eines Projekts
    pub fn anzahl(&self, project_id: &ProjectId) -> usize {
        self.inner
            .nachrichten
            .get(project_id)
            .map(|v| v.len())
            .unwrap_or(0)
    }

    /// Abonniert unter dem Shard-Lock, damit `verteilen` den Kanal nicht
    /// zwischen Anlegen und Abonnieren entfernt
    fn abo_erstellen(&self, project_id: &ProjectId) -> broadcast::Receiver<NachrichtenRecord> {
        self.inner
            .kanaele
            .entry(project_id.clone())
            .or_insert_with(|| broadcast::channel(ABO_QUEUE_GROESSE).0)
            .subscribe()
    }

    fn verteilen(&self, record: &NachrichtenRecord) {
        let Some(tx) = self
            .inner
            .kanaele
            .get(&record.project_id)
            .map(|tx| tx.clone())
        else {
            return;
        };
        // Err bedeutet nur: derzeit kein Abonnent
        if tx.send(record.clone()).is_err() {
            tracing::trace!(project_id = %record.project_id, "Keine Abonnenten, Kanal entfernt");
            self.inner
                .kanaele
                .remove_if(&record.project_id, |_, tx| tx.receiver_count() == 0);
        }
    }
}

impl NachrichtenTransport for InMemoryTransport {
    async fn senden(&self, nachricht: NeueNachricht) -> ChatResult<NachrichtenRecord> {
        if nachricht.text.is_empty() {
            return Err(ChatError::Transport("Leerer Nachrichtentext".into()));
        }

        let record = NachrichtenRecord {
            id: Uuid::new_v4(),
            project_id: nachricht.project_id,
            sender_id: nachricht.sender_id,
            text: nachricht.text,
            created_at: Utc::now(),
        };

        tracing::debug!(
            message_id = %record.id,
            project_id = %record.project_id,
            "Nachricht gespeichert"
        );
        self.record_einfuegen(record.clone());
        Ok(record)
    }

    async fn verlauf(&self, project_id: &ProjectId) -> ChatResult<Vec<NachrichtenRecord>> {
        Ok(self
            .inner
            .nachrichten
            .get(project_id)
            .map(|v| v.clone())
            .unwrap_or_default())
    }

    fn abonnieren(&self, project_id: &ProjectId) -> broadcast::Receiver<NachrichtenRecord> {
        self.abo_erstellen(project_id)
    }
}
