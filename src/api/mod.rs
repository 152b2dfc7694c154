pub mod client;
pub mod files;
pub mod types;
pub mod url;

pub use client::FigmaClient;
pub use url::FigmaLocator;
