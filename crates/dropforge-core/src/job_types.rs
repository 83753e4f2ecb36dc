// crates/dropforge-core/src/job_types.rs
//
// Types that flow across the channel between dropforge-media and
// dropforge-ui. No egui, no process handles — just plain data.

use std::path::PathBuf;

use uuid::Uuid;

/// Results sent from the JobWorker background threads to the UI.
///
/// `message` is the final user-facing status line; errors are stringified
/// on the worker side so the UI never has to interpret failure causes.
#[derive(Debug)]
pub enum JobResult {
    /// One file finished successfully.
    FileDone { source: PathBuf, message: String },
    /// One file failed. Processing continues with the rest of the batch.
    FileFailed { source: PathBuf, message: String },
    /// Every file in the batch has been attempted.
    BatchDone { batch_id: Uuid },
}
