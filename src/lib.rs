// LogSift - lib.rs
//
// Library entry point, exposing every layer for integration testing.
// The binary in `main.rs` only adds CLI parsing and exit-status mapping.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
