pub mod console;
pub mod page;
