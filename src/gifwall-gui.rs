//! GIF Wall GUI Application
//!
//! Browses trending and searched GIFs from the GIPHY API in a virtualized
//! masonry grid using the egui framework. The viewer features:
//! - Infinite scrolling with background page loading
//! - Animated GIF playback with a global pause toggle
//! - Click-to-copy with a URL fallback

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background page and image loading
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Low-level painting for grid cells
//! - `state/` - State management for viewport, search, animation and toast

use anyhow::Context as _;
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

mod utils;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, SourceMode, UiPreferences};
use gifwall::{
    CachedSource, DemoSource, GiphyClient, GiphyConfig, HttpImageFetcher, ImageFetcher, PageSource,
    Route, SystemClipboard, DEFAULT_PAGE_SIZE,
};
use gifwall::image_cache::DEFAULT_IMAGE_BUDGET;
use io::{ImageLoader, PageLoader, DEFAULT_WORKERS};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Simulated network delay of the demo source.
const DEMO_LATENCY: Duration = Duration::from_millis(300);

/// Parsed command line: `gifwall-gui [--demo] [ROUTE]`.
struct CliArgs {
    demo: bool,
    route: Option<Route>,
}

impl CliArgs {
    fn parse() -> Self {
        let mut demo = false;
        let mut route = None;
        for arg in std::env::args().skip(1) {
            if arg == "--demo" {
                demo = true;
            } else {
                route = Some(Route::parse(&arg));
            }
        }
        Self { demo, route }
    }
}

/// Where pages and images come from.
struct Sources {
    mode: SourceMode,
    page_size: u32,
    pages: Arc<dyn PageSource>,
    images: Arc<dyn ImageFetcher>,
}

impl Sources {
    fn demo() -> Self {
        let demo = Arc::new(DemoSource::new().with_latency(DEMO_LATENCY));
        Self {
            mode: SourceMode::Demo,
            page_size: DEFAULT_PAGE_SIZE,
            pages: demo.clone(),
            images: demo,
        }
    }

    fn giphy() -> anyhow::Result<Self> {
        let config = GiphyConfig::load().context("Invalid configuration")?;
        let client = GiphyClient::new(&config).context("Failed to create the GIPHY client")?;
        let images = HttpImageFetcher::new(client.http().clone());
        log::info!("Using GIPHY at {} (page size {})", config.base_url, config.page_size);

        Ok(Self {
            mode: SourceMode::Giphy,
            page_size: config.page_size,
            pages: Arc::new(CachedSource::new(client, config.cache_ttl)),
            images: Arc::new(images),
        })
    }
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .filter_module("gifwall", log::LevelFilter::Debug)
        .filter_module("gifwall_gui", log::LevelFilter::Debug);
    // RUST_LOG overrides the defaults above
    builder.parse_default_env();
    builder.init();
}

/// Main application entry point that initializes and launches the GIF browser.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let sources = if args.demo {
        Sources::demo()
    } else {
        match Sources::giphy() {
            Ok(sources) => sources,
            Err(e) => {
                log::error!("{:#}", e);
                return Err(e);
            }
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("GIF Wall"),
        ..Default::default()
    };

    eframe::run_native(
        "GIF Wall",
        options,
        Box::new(move |cc| Ok(Box::new(GifWallApp::new(cc, sources, args.route)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}

/// The main GIF browser application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles navigation, paging and copying
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct GifWallApp {
    /// Centralized application state
    state: AppState,
    /// Background page requests
    pages: PageLoader,
    /// Background image loads and texture cache
    images: ImageLoader,
    clipboard: SystemClipboard,
    /// Route to open on the first frame
    pending_route: Option<Route>,
}

impl GifWallApp {
    /// Creates the app with preferences loaded from persistent storage.
    /// A route from the command line wins over the one saved at shutdown.
    fn new(cc: &eframe::CreationContext, sources: Sources, route: Option<Route>) -> Self {
        let preferences = SettingsCoordinator::load_preferences(cc.storage);
        let start_route = route.unwrap_or_else(|| preferences.start_route());

        let clipboard = SystemClipboard::new();
        let mut state = AppState::new(sources.page_size, preferences.animations_paused, sources.mode);
        state.clipboard_available = clipboard.is_available();

        Self {
            state,
            pages: PageLoader::new(sources.pages),
            images: ImageLoader::new(sources.images, &cc.egui_ctx, DEFAULT_WORKERS, DEFAULT_IMAGE_BUDGET),
            clipboard,
            pending_route: Some(start_route),
        }
    }

    fn preferences(&self) -> UiPreferences {
        UiPreferences {
            animations_paused: self.state.animation.is_paused(),
            last_route: Some(self.state.route.to_path()),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::Navigate(route) => {
                ApplicationCoordinator::navigate(&mut self.state, &mut self.pages, route, ctx);
            }
            PanelInteraction::ToggleAnimations => {
                ApplicationCoordinator::toggle_animations(&mut self.state);
            }
            PanelInteraction::LoadMore => {
                ApplicationCoordinator::load_more(&mut self.state, &mut self.pages, ctx);
            }
            PanelInteraction::Scrolled { offset, fraction } => {
                ApplicationCoordinator::handle_scroll(&mut self.state, &mut self.pages, offset, fraction, ctx);
            }
            PanelInteraction::CopyRequested(index) => {
                ApplicationCoordinator::copy_gif(&mut self.state, &self.images, &mut self.clipboard, index);
            }
        }
    }
}

impl eframe::App for GifWallApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_preferences(storage, &self.preferences());
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Apply finished page requests and image loads
    /// 2. Open the start route on the first frame
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_page_completion(&mut self.state, &mut self.pages);
        self.images.begin_frame();
        self.images.poll(ctx);

        if let Some(route) = self.pending_route.take() {
            ApplicationCoordinator::navigate(&mut self.state, &mut self.pages, route, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.pages, &mut self.images) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
