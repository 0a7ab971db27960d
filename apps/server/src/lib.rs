pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod image_hosts;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
