pub mod handlers;
pub mod models;
mod plugin;
pub mod repo;

pub use models::*;
pub use plugin::PostsPlugin;

#[cfg(test)]
mod tests;
