pub mod app;
pub mod client;
pub mod error;
pub mod interface;
pub mod model;

#[cfg(feature = "no-wasm")]
pub mod config;
#[cfg(feature = "no-wasm")]
pub mod logger;

