// LogSift - core/mod.rs
//
// Core pipeline: date parsing, discovery, range filtering, line collection
// and output writing.
// Must NOT depend on: app.

pub mod collector;
pub mod date;
pub mod discovery;
pub mod export;
pub mod filter;
pub mod model;
