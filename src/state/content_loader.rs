//! Content loader for the read-only sections (services, testimonials, gallery)
//!
//! Each section fetches once, on first mount, and keeps whatever list the
//! backend returned. A failed fetch leaves the section empty: these sections
//! are supplementary, so there is no retry and no error banner.

use super::content::{GalleryItem, Service, Testimonial};
use crate::api::{ApiError, SiteApi};

/// Lifecycle of one section's fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// Items of one display section plus where its fetch stands
#[derive(Debug, Clone)]
pub struct ContentSection<T> {
    status: LoadStatus,
    items: Vec<T>,
}

impl<T> Default for ContentSection<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::NotLoaded,
            items: Vec::new(),
        }
    }
}

impl<T> ContentSection<T> {
    /// Mark the section mounted. Returns true only the first time,
    /// which is when the caller should issue the fetch.
    pub fn mount(&mut self) -> bool {
        if self.status == LoadStatus::NotLoaded {
            self.status = LoadStatus::Loading;
            true
        } else {
            false
        }
    }

    /// Store the outcome of the fetch issued by [`mount`](Self::mount).
    ///
    /// Results arriving when no fetch is pending are dropped so a rendered
    /// list is never swapped out.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) -> bool {
        if self.status != LoadStatus::Loading {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.status = LoadStatus::Loaded;
            }
            Err(_) => {
                self.items.clear();
                self.status = LoadStatus::Failed;
            }
        }
        true
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// The three content categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Services,
    Testimonials,
    Gallery,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Services,
        ContentKind::Testimonials,
        ContentKind::Gallery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Services => "services",
            ContentKind::Testimonials => "testimonials",
            ContentKind::Gallery => "gallery",
        }
    }
}

/// Result of one category fetch, as delivered back to the UI thread
#[derive(Debug)]
pub enum LoadedContent {
    Services(Result<Vec<Service>, ApiError>),
    Testimonials(Result<Vec<Testimonial>, ApiError>),
    Gallery(Result<Vec<GalleryItem>, ApiError>),
}

impl LoadedContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            LoadedContent::Services(_) => ContentKind::Services,
            LoadedContent::Testimonials(_) => ContentKind::Testimonials,
            LoadedContent::Gallery(_) => ContentKind::Gallery,
        }
    }

    fn error(&self) -> Option<&ApiError> {
        match self {
            LoadedContent::Services(r) => r.as_ref().err(),
            LoadedContent::Testimonials(r) => r.as_ref().err(),
            LoadedContent::Gallery(r) => r.as_ref().err(),
        }
    }
}

/// Issue the single read request for `kind`
pub async fn load_content(api: &dyn SiteApi, kind: ContentKind) -> LoadedContent {
    match kind {
        ContentKind::Services => LoadedContent::Services(api.list_services().await),
        ContentKind::Testimonials => LoadedContent::Testimonials(api.list_testimonials().await),
        ContentKind::Gallery => LoadedContent::Gallery(api.list_gallery().await),
    }
}

/// All display sections of the page
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub services: ContentSection<Service>,
    pub testimonials: ContentSection<Testimonial>,
    pub gallery: ContentSection<GalleryItem>,
}

impl ContentStore {
    /// Mount one section; true when a fetch should be issued
    pub fn mount(&mut self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Services => self.services.mount(),
            ContentKind::Testimonials => self.testimonials.mount(),
            ContentKind::Gallery => self.gallery.mount(),
        }
    }

    /// Store a fetch result in its section
    pub fn apply(&mut self, loaded: LoadedContent) {
        let kind = loaded.kind();
        if let Some(err) = loaded.error() {
            tracing::error!(
                section = kind.label(),
                path = err.path().unwrap_or("-"),
                error = %err,
                "failed to fetch content"
            );
        }

        let stored = match loaded {
            LoadedContent::Services(result) => self.services.finish(result),
            LoadedContent::Testimonials(result) => self.testimonials.finish(result),
            LoadedContent::Gallery(result) => self.gallery.finish(result),
        };

        if stored {
            tracing::debug!(section = kind.label(), "content stored");
        } else {
            tracing::debug!(section = kind.label(), "ignoring content with no pending fetch");
        }
    }
}
