pub mod assets;
pub mod compute;
pub mod config;
pub mod entities;
pub mod timers;
pub mod viewport;
