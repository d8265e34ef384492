// logyear - app/mod.rs
//
// Command orchestration layer.
// Bridges core logic with the binaries' argument handling and output.

pub mod backup_cmd;
pub mod filter_cmd;
pub mod startup;
