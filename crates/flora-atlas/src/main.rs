//! Entry point for the flora atlas.
//!
//! This Dioxus desktop application browses a plant catalog in a
//! synchronized map/list view with season, category, favorites, and text
//! filters.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use flora_atlas::components::App;
use flora_atlas::state::AppState;
use flora_core::{PlantRecord, parse_dataset};
use flora_storage::{FavoritesStore, FileStore, InMemoryStore, KeyValueStore};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Default dataset embedded at compile time.
const DEFAULT_DATASET: &str = include_str!("../assets/plants.json");

/// Global storage for the dataset path argument.
static DATASET_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global storage for the data directory argument.
static DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "flora-atlas")]
#[command(about = "Interactive map and list browser for a plant catalog")]
struct Args {
    /// Path to a JSON plant dataset (uses the built-in catalog if not provided)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Directory for persisted favorites (defaults to the user data directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Flora Atlas");

    // Parse command line arguments
    let args = Args::parse();

    // Store args in global state
    DATASET_PATH.set(args.dataset).ok();
    DATA_DIR.set(args.data_dir).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Flora Atlas")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);
}

/// Root application component that loads the dataset.
#[component]
fn RootApp() -> Element {
    // Create state signal with favorites loaded from storage
    let state = use_signal(|| AppState::new(open_favorites()));

    // Load the dataset once; markers are placed when it arrives
    let _loader = use_resource(move || {
        let mut state = state;

        async move {
            let plants = load_plants().await;
            state.write().install_dataset(plants);
        }
    });

    rsx! {
        App { state }
    }
}

/// Loads the plant dataset, preferring `--dataset` and falling back to
/// the embedded catalog on any failure.
async fn load_plants() -> Vec<PlantRecord> {
    let path = DATASET_PATH.get().and_then(|p| p.clone());

    if let Some(path) = path {
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match parse_dataset(&raw) {
                Ok(plants) => return plants,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid dataset, using built-in catalog");
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "unreadable dataset, using built-in catalog");
            }
        }
    }

    parse_dataset(DEFAULT_DATASET).unwrap_or_else(|err| {
        tracing::warn!(%err, "built-in catalog failed to parse");
        Vec::new()
    })
}

/// Opens the favorites store.
///
/// Favorites live in the user data directory unless `--data-dir`
/// overrides it; when neither is usable they stay in memory for the
/// session and a warning is logged.
fn open_favorites() -> FavoritesStore {
    let dir = DATA_DIR
        .get()
        .and_then(|d| d.clone())
        .or_else(|| dirs::data_dir().map(|d| d.join("flora-atlas")));

    let store: Box<dyn KeyValueStore> = match dir {
        Some(dir) => match FileStore::new(&dir) {
            Ok(store) => Box::new(store),
            Err(err) => {
                tracing::warn!(path = %dir.display(), %err, "favorites storage unavailable, favorites will not persist");
                Box::new(InMemoryStore::new())
            }
        },
        None => {
            tracing::warn!("no data directory available, favorites will not persist");
            Box::new(InMemoryStore::new())
        }
    };

    FavoritesStore::load(store)
}
