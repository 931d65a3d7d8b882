pub mod constants;
pub mod input;
pub mod layout;
pub mod page;
pub mod render;
