// LogSift - platform/mod.rs
//
// Platform layer: blocking file reads and config file loading.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
