//! Category slots and the fetch orchestrator that fills them

use crate::catalog::CatalogApi;
use crate::types::{Category, MovieRecord};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Current movie list of every category. Starts empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySlots {
    slots: [Vec<MovieRecord>; 4],
}

impl CategorySlots {
    pub fn get(&self, category: Category) -> &[MovieRecord] {
        &self.slots[category.index()]
    }

    /// Overwrite a slot. Last write wins, no merging.
    pub fn set(&mut self, category: Category, movies: Vec<MovieRecord>) {
        self.slots[category.index()] = movies;
    }

    /// First record with this id, searching categories in slot order
    pub fn find(&self, movie_id: i64) -> Option<&MovieRecord> {
        self.slots.iter().flatten().find(|m| m.id == movie_id)
    }
}

/// Slots shared between the UI thread and the fetch tasks
#[derive(Debug, Clone, Default)]
pub struct SharedSlots(Arc<Mutex<CategorySlots>>);

impl SharedSlots {
    pub fn snapshot(&self) -> CategorySlots {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn replace(&self, category: Category, movies: Vec<MovieRecord>) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set(category, movies);
    }
}

/// Issues one request per category and writes each result into its own slot.
pub struct FetchOrchestrator {
    api: Arc<dyn CatalogApi>,
    slots: SharedSlots,
    cancel_token: CancellationToken,
}

impl FetchOrchestrator {
    pub fn new(api: Arc<dyn CatalogApi>, slots: SharedSlots) -> Self {
        Self {
            api,
            slots,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn slots(&self) -> &SharedSlots {
        &self.slots
    }

    /// Start four independent fetches. Requests of a previous activation are cancelled.
    ///
    /// `on_update` runs after a slot has been written. The returned handles are
    /// only useful to tests; the screen never waits on them.
    pub fn activate<F>(&mut self, runtime: &tokio::runtime::Handle, on_update: F) -> Vec<JoinHandle<()>>
    where
        F: Fn(Category) + Clone + Send + 'static,
    {
        self.cancel_token.cancel();
        self.cancel_token = CancellationToken::new();

        info!("Fetching movie lists");
        Category::ALL
            .iter()
            .map(|&category| {
                runtime.spawn(fetch_category(
                    category,
                    self.api.clone(),
                    self.slots.clone(),
                    self.cancel_token.clone(),
                    on_update.clone(),
                ))
            })
            .collect()
    }

    /// Stop writing into slots; in-flight requests are dropped.
    pub fn teardown(&self) {
        debug!("Cancelling outstanding movie list requests");
        self.cancel_token.cancel();
    }
}

async fn fetch_category<F>(
    category: Category,
    api: Arc<dyn CatalogApi>,
    slots: SharedSlots,
    token: CancellationToken,
    on_update: F,
) where
    F: Fn(Category),
{
    let result = tokio::select! {
        _ = token.cancelled() => {
            debug!(%category, "Fetch cancelled");
            return;
        }
        result = api.fetch(category) => result,
    };

    match result {
        Ok(response) => match response.results {
            Some(movies) => {
                // A cancel that raced the response still wins
                if token.is_cancelled() {
                    return;
                }
                info!(%category, count = movies.len(), "Movie list loaded");
                slots.replace(category, movies);
                on_update(category);
            }
            None => debug!(%category, "Response had no results, slot unchanged"),
        },
        Err(e) => warn!(%category, error = %e, "Failed to fetch movie list"),
    }
}
