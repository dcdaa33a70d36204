//! Darstellen – entschluesselt und escaped eingehende Nachrichten
//!
//! Ein leerer entschluesselter Inhalt bedeutet "nicht darstellbar" und wird
//! als leere Nachricht angezeigt, nie als Fehler.

use kollab_core::ProjectId;

use crate::types::{AngezeigteNachricht, NachrichtenRecord};

/// Escaped HTML-Sonderzeichen fuer die sichere Anzeige
pub fn html_escapen(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Entschluesselt und escaped eine einzelne Nachricht
///
/// `project_id` ist das aktuell angezeigte Projekt. Records eines anderen
/// Projekts werden nicht entschluesselt und als unlesbar markiert.
pub fn nachricht_darstellen(
    record: &NachrichtenRecord,
    project_id: &ProjectId,
) -> AngezeigteNachricht {
    let klartext = if &record.project_id == project_id {
        kollab_crypto::decrypt(&record.text, project_id.as_str())
    } else {
        tracing::warn!(
            message_id = %record.id,
            erwartet = %project_id,
            erhalten = %record.project_id,
            "Nachricht eines fremden Projekts empfangen"
        );
        String::new()
    };

    let unlesbar = klartext.is_empty();
    if unlesbar {
        tracing::debug!(message_id = %record.id, "Nachricht nicht darstellbar");
    }

    AngezeigteNachricht {
        id: record.id,
        project_id: record.project_id.clone(),
        sender_id: record.sender_id,
        inhalt: html_escapen(&klartext),
        unlesbar,
        created_at: record.created_at,
    }
}

/// Sortiert den Verlauf nach Server-Zeitstempel und stellt ihn dar
///
/// Die Sortierung ist stabil: gleiche Zeitstempel behalten die
/// Eingangsreihenfolge.
pub fn verlauf_darstellen(
    mut records: Vec<NachrichtenRecord>,
    project_id: &ProjectId,
) -> Vec<AngezeigteNachricht> {
    records.sort_by_key(|r| r.created_at);
    records
        .iter()
        .map(|r| nachricht_darstellen(r, project_id))
        .collect()
}
