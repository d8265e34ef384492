// logyear - lib.rs
//
// Library entry point, shared by the `logyear` and `logyear-backup`
// binaries and exposed for integration testing.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
