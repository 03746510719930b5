pub mod config;
pub mod objects;
