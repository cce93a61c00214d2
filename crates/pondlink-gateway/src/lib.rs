//! HTTP surface for the pondlink shortener.
//!
//! Serves the submission page, accepts links on `POST /insert` and redirects
//! `GET /{token}` to the stored link.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
