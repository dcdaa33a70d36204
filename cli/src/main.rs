//! Kollab CLI – Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging und fuehrt den
//! gewaehlten Befehl aus.

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kollab_cli::{commands, config::STANDARD_PFAD, ClientConfig};

#[derive(Parser)]
#[command(name = "kollab")]
#[command(author, version, about = "Kollab - Projekt-Chat Nachrichten ver- und entschluesseln", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pfad zur Konfigurationsdatei
    #[arg(short, long, global = true, env = "KOLLAB_CONFIG", default_value = STANDARD_PFAD)]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Nachrichtentext fuer ein Projekt verschluesseln
    Encrypt {
        /// Projekt-ID (Schluesselmaterial)
        #[arg(short, long)]
        projekt: String,

        /// Nachrichtentext, "-" liest von stdin
        text: String,
    },

    /// Ciphertext entschluesseln
    Decrypt {
        /// Projekt-ID (Schluesselmaterial)
        #[arg(short, long)]
        projekt: String,

        /// Ciphertext-Blob, "-" liest von stdin
        blob: String,

        /// Fehler melden statt leerer Ausgabe
        #[arg(long)]
        strikt: bool,
    },

    /// Metadaten eines Ciphertext-Blobs anzeigen
    Inspect {
        /// Ciphertext-Blob, "-" liest von stdin
        blob: String,
    },

    /// Exportierten Verlauf (JSON) entschluesselt anzeigen
    Verlauf {
        /// Projekt-ID (Schluesselmaterial)
        #[arg(short, long)]
        projekt: String,

        /// Pfad zur JSON-Exportdatei, "-" liest von stdin
        datei: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let config = ClientConfig::laden(&cli.config)?;

    // Logging initialisieren
    kollab_observability::logging_initialisieren(&config.logging.level, &config.logging.format);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config,
        "Kollab CLI gestartet"
    );

    let ausgabe = match cli.command {
        Commands::Encrypt { projekt, text } => {
            let text = argument_oder_stdin(text)?;
            commands::verschluesseln(&config, &projekt, &text)?
        }
        Commands::Decrypt {
            projekt,
            blob,
            strikt,
        } => {
            let blob = argument_oder_stdin(blob)?;
            commands::entschluesseln(&projekt, blob.trim(), strikt)?
        }
        Commands::Inspect { blob } => {
            let blob = argument_oder_stdin(blob)?;
            commands::inspizieren(&blob)?
        }
        Commands::Verlauf { projekt, datei } => {
            let json = if datei == "-" {
                stdin_lesen()?
            } else {
                std::fs::read_to_string(&datei)
                    .with_context(|| format!("Exportdatei '{datei}' nicht lesbar"))?
            };
            commands::verlauf_anzeigen(&projekt, &json)?
        }
    };

    println!("{ausgabe}");
    Ok(())
}

/// Liefert das Argument oder liest stdin, wenn es "-" ist
fn argument_oder_stdin(arg: String) -> Result<String> {
    if arg == "-" {
        let eingabe = stdin_lesen()?;
        Ok(eingabe.trim_end_matches(['\r', '\n']).to_string())
    } else {
        Ok(arg)
    }
}

fn stdin_lesen() -> Result<String> {
    let mut eingabe = String::new();
    std::io::stdin()
        .read_to_string(&mut eingabe)
        .context("stdin nicht lesbar")?;
    Ok(eingabe)
}
