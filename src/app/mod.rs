// LogSift - app/mod.rs
//
// Application layer: run orchestration.
// Dependencies: core, platform.

pub mod run;
