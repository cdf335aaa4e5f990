pub mod hash;
pub mod serde;
pub mod table;
