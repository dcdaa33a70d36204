//! Verfassen – validiert und verschluesselt ausgehende Nachrichten
//!
//! Der Klartext verlaesst diese Funktion nie; nach aussen geht nur der
//! Ciphertext in [`NeueNachricht`].

use kollab_core::{limits::zeichen_anzahl, ProjectId, UserId, MAX_NACHRICHT_ZEICHEN};

use crate::error::{ChatError, ChatResult};
use crate::types::NeueNachricht;

/// Verfasst eine Nachricht mit dem Standard-Limit von 4000 Zeichen
pub fn nachricht_verfassen(
    project_id: &ProjectId,
    sender_id: UserId,
    body: &str,
) -> ChatResult<NeueNachricht> {
    nachricht_verfassen_mit_limit(project_id, sender_id, body, MAX_NACHRICHT_ZEICHEN)
}

/// Verfasst eine Nachricht mit konfigurierbarem Zeichen-Limit
///
/// Das Limit zaehlt Unicode-Codepoints. Der Text wird unveraendert
/// verschluesselt, auch fuehrende und folgende Leerzeichen.
pub fn nachricht_verfassen_mit_limit(
    project_id: &ProjectId,
    sender_id: UserId,
    body: &str,
    max_zeichen: usize,
) -> ChatResult<NeueNachricht> {
    if body.trim().is_empty() {
        return Err(ChatError::UngueltigeEingabe(
            "Nachrichteninhalt darf nicht leer sein".into(),
        ));
    }

    let zeichen = zeichen_anzahl(body);
    if zeichen > max_zeichen {
        return Err(ChatError::NachrichtZuLang {
            zeichen,
            max: max_zeichen,
        });
    }

    let text = kollab_crypto::encrypt(body, project_id.as_str())?;
    tracing::debug!(
        project_id = %project_id,
        sender_id = %sender_id,
        zeichen,
        "Nachricht verschluesselt"
    );

    Ok(NeueNachricht {
        project_id: project_id.clone(),
        sender_id,
        text,
    })
}
