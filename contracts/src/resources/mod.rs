pub mod artifacts;
pub mod bundled;
mod files;
