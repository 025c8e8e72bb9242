pub mod clock;
pub mod compute;
pub mod config;
pub mod engine;
pub mod entities;
pub mod render;
