pub mod cache;
pub mod hot_list;
