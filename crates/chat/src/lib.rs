//! kollab-chat – Projekt-Chat mit clientseitiger Verschluesselung
//!
//! Dieses Crate implementiert:
//! - `compose`: Nachricht validieren und vor dem Senden verschluesseln
//! - `render`: Nachricht entschluesseln, escapen, Verlauf sortieren
//! - `NachrichtenTransport`-Trait + `InMemoryTransport`
//! - `ChatService`: verbindet alle drei
//!
//! # Beispiel
//!
//! ```no_run
//! use std::sync::Arc;
//! use kollab_chat::{ChatService, InMemoryTransport};
//! use kollab_core::{ProjectId, UserId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = Arc::new(InMemoryTransport::neu());
//!     let chat = ChatService::neu(transport);
//!
//!     let projekt = ProjectId::neu("proj-42").unwrap();
//!     chat.nachricht_senden(&projekt, UserId::new(), "Hallo Team").await.unwrap();
//!     let verlauf = chat.verlauf_laden(&projekt).await.unwrap();
//!     assert_eq!(verlauf[0].inhalt, "Hallo Team");
//! }
//! ```

pub mod compose;
pub mod error;
pub mod render;
pub mod service;
pub mod transport;
pub mod types;


// Bequeme Re-Exporte
pub use compose::{nachricht_verfassen, nachricht_verfassen_mit_limit};
pub use error::{ChatError, ChatResult};
pub use render::{html_escapen, nachricht_darstellen, verlauf_darstellen};
pub use service::ChatService;
pub use transport::{InMemoryTransport, NachrichtenTransport};
pub use types::{AngezeigteNachricht, NachrichtenRecord, NeueNachricht};
