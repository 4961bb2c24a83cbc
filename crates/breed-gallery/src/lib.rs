//! Breed Gallery
//!
//! A searchable gallery of dog breeds loaded from a static local data file.
//!
//! # Flow
//!
//! ```text
//! BreedSource → load_breeds → Vec<BreedRecord> → render → Container
//!                                   ↑                 ↑
//!                              UiEvent → filter_breeds
//! ```
//!
//! The collection is loaded once and never mutated afterwards; every search
//! derives a new subsequence and re-renders the container from scratch.
//!
//! # Example
//!
//! ```rust,ignore
//! use breed_gallery::prelude::*;
//!
//! # async fn example() {
//! let mut gallery = Gallery::new(GalleryConfig::default());
//! gallery.start(&FileSource::new(".")).await;
//!
//! gallery.handle(UiEvent::Input("aki".to_string()));
//! println!("{}", gallery.container().to_plain_text());
//! # }
//! ```

// Core modules
pub mod config;
pub mod dom;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod loader;
pub mod model;
pub mod render;

// Re-exports for convenience
pub use config::GalleryConfig;
pub use error::{ConfigError, LoadError, LoadResult};
pub use filter::{filter_breeds, normalize_query};
pub use gallery::{Gallery, LoadState, UiEvent};
pub use loader::{load_breeds, BreedSource, FileSource, Response, StaticSource};
pub use model::{BreedId, BreedRecord, Measurement};
pub use render::render;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the gallery
    pub use crate::dom::{Container, Element, Image, Node};
    pub use crate::{
        filter_breeds, load_breeds, BreedRecord, BreedSource, FileSource, Gallery, GalleryConfig,
        LoadError, StaticSource, UiEvent,
    };
}
