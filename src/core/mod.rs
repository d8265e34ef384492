// logyear - core/mod.rs
//
// Core business logic layer.
// File access goes through platform::fs; everything else is pure logic.
// Must NOT depend on: app.

pub mod backup;
pub mod export;
pub mod filter;
pub mod model;
