pub mod header;
pub mod menu;
pub mod search;

pub use header::AppHeader;
pub use menu::MenuItems;
