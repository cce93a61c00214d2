mod health;
mod home;
mod link;

pub use health::health_handler;
pub use home::home_handler;
pub use link::{insert_handler, redirect_handler};
