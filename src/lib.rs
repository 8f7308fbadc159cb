pub mod config;
pub mod constants;
pub mod error;
pub mod history_store;
pub mod input;
pub mod logging;
pub mod partition;
pub mod render;
pub mod rng;
pub mod roller;
pub mod session;
pub mod shuffle;
pub mod types;
