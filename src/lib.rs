pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export commonly used items
pub use errors::HotListError;
pub use services::hot_list_service::HotListService;
