//! Pinacoteca Art Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod artwork;
pub mod config;
pub mod cursor;
pub mod gallery;
pub mod providers;
pub mod random;
pub mod resolver;
pub mod server;

// Re-export commonly used types for convenience
pub use artwork::{Artwork, Era, Year};
pub use cursor::NavigationCursor;
pub use gallery::CuratedGallery;
pub use resolver::Orchestrator;
pub use server::{run_server, RequestsLoggingLevel};
