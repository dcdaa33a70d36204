//! kollab-cli – Bibliotheks-Root
//!
//! Deklariert Konfiguration und Befehle und stellt sie fuer Tests bereit.

pub mod commands;
pub mod config;

pub use config::ClientConfig;
