pub mod header;
pub mod navigation;
pub mod search_bar;
