// crates/dropforge-core/src/lib.rs
//
// Pure data shared by dropforge-ui and dropforge-media — no egui, no
// process spawning, no filesystem I/O.

pub mod commands;
pub mod job_types;
pub mod state;
pub mod text;
