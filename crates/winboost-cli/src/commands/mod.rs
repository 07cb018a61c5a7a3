pub mod config;
pub mod replay;
pub mod screen;
pub mod shell;
