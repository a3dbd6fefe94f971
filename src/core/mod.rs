pub mod advance;
pub mod config;
pub mod editor;
pub mod import;
pub mod log;
pub mod persistence;
pub mod session;
