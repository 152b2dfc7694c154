pub mod auth;
pub mod config;
pub mod fetch;
pub mod generate;
pub mod stats;
pub mod tree;
