//! Fashion trend scraper: pulls a few fashion news pages, scores what they talk about,
//! and serves the result over a small JSON API.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod crawler;
pub mod server;
