pub mod page;
pub mod page_window;
pub mod search;
