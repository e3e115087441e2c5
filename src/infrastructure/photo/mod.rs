//! Photo upload handling.

mod loader;

pub use loader::PhotoLoader;
