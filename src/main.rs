#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod scroll_host;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Contact endpoint URL, set from command line
static CONTACT_ENDPOINT: OnceLock<String> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio-studio")
}

/// Get the endpoint the contact form posts to
pub fn get_contact_endpoint() -> String {
    CONTACT_ENDPOINT
        .get()
        .cloned()
        .unwrap_or_else(|| "https://formspree.io/f/portfolio-studio".to_string())
}

/// Portfolio Studio - personal portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio Studio - themed portfolio browser with drill-down navigation")]
struct Args {
    /// Data directory for the persisted theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Endpoint the contact form posts to
    #[arg(short, long)]
    contact_endpoint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(endpoint) = args.contact_endpoint {
        let _ = CONTACT_ENDPOINT.set(endpoint);
    }

    tracing::info!("Starting Portfolio Studio with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio Studio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
