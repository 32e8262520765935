//! Poster download, disk cache and texture loading

use super::App;
use crate::constants::POSTER_TEXTURE_MAX;
use crate::utils::poster_cache_name;
use eframe::egui;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub(crate) enum PosterError {
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("cache write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl App {
    /// Texture for a poster URL if it is ready. Otherwise starts a background
    /// download (once per session) and returns `None`.
    pub(crate) fn poster_texture(
        &mut self,
        ctx: &egui::Context,
        url: &str,
    ) -> Option<egui::TextureHandle> {
        let name = poster_cache_name(url)?;
        if let Some(cached) = self.poster_cache.get(&name) {
            return cached.clone();
        }

        let path = self.cache_dir.join("posters").join(&name);
        if path.exists() {
            let texture = match decode_poster(&path) {
                Ok(image) => Some(ctx.load_texture(
                    format!("poster_{}", name),
                    image,
                    egui::TextureOptions::LINEAR,
                )),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to decode poster");
                    None
                }
            };
            self.poster_cache.insert(name, texture.clone());
            return texture;
        }

        if self.posters_pending.insert(name) {
            self.spawn_poster_download(ctx, url.to_string(), path);
        }
        None
    }

    fn spawn_poster_download(&self, ctx: &egui::Context, url: String, dest: PathBuf) {
        let client = self.http.clone();
        let semaphore = self.poster_semaphore.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let _permit = semaphore.acquire().await.ok();
            match download_poster(&client, &url, &dest).await {
                Ok(()) => {
                    debug!(%url, "Poster cached");
                    ctx.request_repaint();
                }
                Err(e) => warn!(%url, error = %e, "Failed to download poster"),
            }
        });
    }
}

/// Fetch a poster and move it into place only once fully written,
/// so a half-written file is never decoded.
pub(crate) async fn download_poster(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<(), PosterError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(PosterError::Status(response.status()));
    }
    let bytes = response.bytes().await?;

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let partial = dest.with_extension("part");
    tokio::fs::write(&partial, &bytes).await?;
    tokio::fs::rename(&partial, dest).await?;
    Ok(())
}

pub(crate) fn decode_poster(path: &Path) -> image::ImageResult<egui::ColorImage> {
    let (max_w, max_h) = POSTER_TEXTURE_MAX;
    let rgba = image::open(path)?.thumbnail(max_w, max_h).to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
