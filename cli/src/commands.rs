//! Befehle der Kommandozeile
//!
//! Jeder Befehl liefert seine Ausgabe als String; `main` schreibt sie nach
//! stdout. Logs enthalten weder Klartext noch Ciphertext.

use anyhow::{Context, Result};
use kollab_chat::{nachricht_verfassen_mit_limit, verlauf_darstellen, NachrichtenRecord};
use kollab_core::{ProjectId, UserId};
use kollab_crypto::CiphertextBlob;

use crate::config::ClientConfig;

/// Verschluesselt einen Nachrichtentext fuer ein Projekt
///
/// Laeuft ueber denselben Verfassen-Pfad wie der Chat, nur mit dem
/// Zeichen-Limit aus der Konfiguration. Die Absender-ID ist fluechtig.
pub fn verschluesseln(config: &ClientConfig, projekt: &str, text: &str) -> Result<String> {
    let project_id = ProjectId::neu(projekt)?;
    let neu =
        nachricht_verfassen_mit_limit(&project_id, UserId::new(), text, config.chat.max_zeichen)?;
    tracing::info!(project_id = %project_id, "Nachricht verschluesselt");
    Ok(neu.text)
}

/// Entschluesselt einen Ciphertext
///
/// Ohne `strikt` verhaelt sich der Befehl wie die Chat-Anzeige und liefert
/// bei Fehlern einen leeren String. Mit `strikt` wird der Grund gemeldet.
pub fn entschluesseln(projekt: &str, blob: &str, strikt: bool) -> Result<String> {
    if strikt {
        let project_id = ProjectId::neu(projekt)?;
        return kollab_crypto::decrypt_checked(blob, project_id.as_str())
            .context("Entschluesselung fehlgeschlagen");
    }
    Ok(kollab_crypto::decrypt(blob, projekt))
}

/// Zeigt die Metadaten eines Ciphertext-Blobs (nie den Inhalt)
pub fn inspizieren(blob: &str) -> Result<String> {
    let parsed = CiphertextBlob::decode(blob).context("Kein gueltiger Kollab-Ciphertext")?;
    Ok(format!(
        "version: {}\nsalt: {} Bytes\nnonce: {} Bytes\nciphertext: {} Bytes (inkl. Auth-Tag)",
        parsed.version,
        parsed.salt.len(),
        parsed.nonce.len(),
        parsed.ciphertext.len(),
    ))
}

/// Stellt einen exportierten Verlauf (JSON-Array von Records) dar
pub fn verlauf_anzeigen(projekt: &str, export_json: &str) -> Result<String> {
    let project_id = ProjectId::neu(projekt)?;
    let records: Vec<NachrichtenRecord> =
        serde_json::from_str(export_json).context("Verlaufs-Export ist kein gueltiges JSON")?;

    let verlauf = verlauf_darstellen(records, &project_id);
    let unlesbar = verlauf.iter().filter(|n| n.unlesbar).count();
    tracing::info!(
        project_id = %project_id,
        gesamt = verlauf.len(),
        unlesbar,
        "Verlauf dargestellt"
    );

    let zeilen: Vec<String> = verlauf
        .iter()
        .map(|n| {
            let inhalt = if n.unlesbar { "<nicht lesbar>" } else { n.inhalt.as_str() };
            format!("[{}] {}: {}", n.created_at.to_rfc3339(), n.sender_id, inhalt)
        })
        .collect();
    Ok(zeilen.join("\n"))
}
