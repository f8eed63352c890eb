pub mod extractor;
pub mod hot_list_service;
