//! Filesystem storage adapter for tariff PDFs.

mod local;

pub use local::LocalFileStorage;
