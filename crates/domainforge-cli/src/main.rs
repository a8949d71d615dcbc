//! Edit domainforge prompt settings from the terminal.
//!
//! # Examples
//!
//! ```sh
//! # Interactive dialog, saved back to ./domainforge.json on exit
//! domainforge
//!
//! # Use another file and don't write it back
//! domainforge --settings ~/.config/domainforge.json --no-save
//!
//! # Print the effective settings as JSON
//! domainforge --style compound --instructions "must end in -ly" --print
//! ```

use std::path::PathBuf;

use clap::Parser;
use domainforge::owner::SettingsStore;
use domainforge::ui::tracing::UiTracingLayer;
use domainforge_cli::{DEFAULT_SETTINGS_PATH, SettingsOverrides, resolve_settings};
use domainforge_tui::{TuiConfig, run_tui};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Edit domainforge prompt settings from the terminal.
#[derive(Parser)]
#[command(name = "domainforge")]
struct Cli {
    /// JSON file holding the committed settings.
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Start with this domain style (compound, pun, descriptive, abstract).
    #[arg(long)]
    style: Option<String>,

    /// Start with these custom instructions (at most 280 chars).
    #[arg(long)]
    instructions: Option<String>,

    /// Don't write the settings back when the dialog closes.
    #[arg(long)]
    no_save: bool,

    /// Print the effective settings as JSON and exit without the dialog.
    #[arg(long)]
    print: bool,
}

fn main() {
    let cli = Cli::parse();

    // Tracing → dialog log pane.
    let (tracing_layer, log_buffer) = UiTracingLayer::new();
    tracing_subscriber::registry().with(tracing_layer).init();

    let overrides = SettingsOverrides {
        style: cli.style,
        instructions: cli.instructions,
    };
    let settings = match resolve_settings(&cli.settings, &overrides) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.print {
        match serde_json::to_string_pretty(&settings) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize settings: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if domainforge::style::style_description(&settings.domain_style).is_none() {
        warn!(style = %settings.domain_style, "unknown domain style in settings");
    }
    info!("Editing prompt settings from {}", cli.settings.display());

    let store = SettingsStore::new(settings);
    let tui_config = TuiConfig {
        log_buffer: Some(log_buffer),
    };
    if let Err(e) = run_tui(store.clone(), &tui_config) {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }

    let final_settings = store.snapshot();
    if cli.no_save {
        println!("Settings not saved (--no-save).");
        return;
    }
    if let Err(e) = final_settings.save(&cli.settings) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!(
        "Saved {} (style: {}, instructions: {} chars)",
        cli.settings.display(),
        final_settings.domain_style,
        final_settings.custom_instructions.chars().count()
    );
}
