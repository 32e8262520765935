//! Application constants and configuration defaults

pub const APP_NAME: &str = "CineNow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3/movie";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const MOVIE_PAGE_BASE_URL: &str = "https://www.themoviedb.org/movie";

/// Max poster downloads in flight at once
pub const POSTER_DOWNLOAD_CONCURRENCY: usize = 8;

/// Decoded posters are downscaled to fit this box before upload
pub const POSTER_TEXTURE_MAX: (u32, u32) = (240, 300);

// Environment overrides, read once at startup
pub const ENV_API_TOKEN: &str = "CINENOW_API_TOKEN";
pub const ENV_TMDB_API_TOKEN: &str = "TMDB_API_TOKEN";
pub const ENV_API_BASE_URL: &str = "CINENOW_API_BASE_URL";
pub const ENV_IMAGE_BASE_URL: &str = "CINENOW_IMAGE_BASE_URL";
