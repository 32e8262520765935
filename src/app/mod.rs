//! App module - contains the main application state and logic

pub mod fetch;
pub mod navigation;
mod posters;
pub mod views;

use crate::catalog::{CatalogApi, TmdbClient};
use crate::constants::POSTER_DOWNLOAD_CONCURRENCY;
use crate::settings::Settings;
use crate::theme;
use crate::utils::get_cache_dir;
use eframe::egui;
use fetch::{FetchOrchestrator, SharedSlots};
use navigation::Navigator;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    /// Settings in effect (file values plus environment overrides)
    pub(crate) settings: Settings,
    /// Settings as read from disk; written back on exit
    pub(crate) file_settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Movie lists
    pub(crate) orchestrator: FetchOrchestrator,
    pub(crate) activated: bool,
    pub(crate) navigator: Navigator,
    // Poster cache
    pub(crate) http: reqwest::Client,
    pub(crate) cache_dir: PathBuf,
    pub(crate) poster_cache: HashMap<String, Option<egui::TextureHandle>>,
    pub(crate) posters_pending: HashSet<String>,
    pub(crate) poster_semaphore: Arc<tokio::sync::Semaphore>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        file_settings: Settings,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let cache_dir = get_cache_dir();
        if let Err(e) = std::fs::create_dir_all(cache_dir.join("posters")) {
            warn!(error = %e, path = %cache_dir.display(), "Failed to create poster cache directory");
        }

        if settings.api_token.is_none() {
            warn!("No catalog API token configured; requests will likely be rejected");
        }

        let http = reqwest::Client::new();
        let api: Arc<dyn CatalogApi> = Arc::new(TmdbClient::with_client(http.clone(), &settings));

        Self {
            orchestrator: FetchOrchestrator::new(api, SharedSlots::default()),
            activated: false,
            navigator: Navigator::default(),
            settings,
            file_settings,
            data_dir,
            runtime,
            http,
            cache_dir,
            poster_cache: HashMap::new(),
            posters_pending: HashSet::new(),
            poster_semaphore: Arc::new(tokio::sync::Semaphore::new(POSTER_DOWNLOAD_CONCURRENCY)),
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    /// Issue the four list requests. Each completion repaints the window.
    pub(crate) fn activate_screen(&mut self, ctx: &egui::Context) {
        self.activated = true;
        let ctx = ctx.clone();
        self.orchestrator
            .activate(self.runtime.handle(), move |category| {
                debug!(%category, "Slot updated, repainting");
                ctx.request_repaint();
            });
    }

    pub(crate) fn teardown_screen(&self) {
        self.orchestrator.teardown();
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.file_settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
