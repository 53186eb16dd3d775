pub mod table;
pub mod parser;
pub mod loader;
pub mod unit_inference;
