// crates/dropforge-media/src/worker.rs
//
// JobWorker: owns the result channel and spawns one thread per dropped
// batch. All public API that dropforge-ui calls lives here.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{info, warn};
use uuid::Uuid;

use dropforge_core::job_types::JobResult;
use dropforge_core::state::{
    AudioSettings, ImageSettings, TextMode, TextSettings, VideoSettings,
};

use crate::audio::convert_audio_file;
use crate::image_ops::process_image_file;
use crate::text::{copy_text_file, dedupe_text_file, merge_text_files};
use crate::video::extract_frames;

/// One dropped batch: the files that survived discovery plus the tab
/// settings captured at drop time. Settings are copied in so later UI
/// changes never affect a batch already running.
#[derive(Debug, Clone)]
pub enum BatchJob {
    Audio { files: Vec<PathBuf>, settings: AudioSettings },
    Image { files: Vec<PathBuf>, settings: ImageSettings },
    Text  { files: Vec<PathBuf>, settings: TextSettings },
    Video { files: Vec<PathBuf>, settings: VideoSettings },
}

impl BatchJob {
    fn kind_label(&self) -> &'static str {
        match self {
            BatchJob::Audio { .. } => "audio",
            BatchJob::Image { .. } => "image",
            BatchJob::Text  { .. } => "text",
            BatchJob::Video { .. } => "video",
        }
    }
}

// ── JobWorker ────────────────────────────────────────────────────────────────

pub struct JobWorker {
    /// Shared result channel: per-file outcomes and batch completion.
    pub rx:   Receiver<JobResult>,
    tx:       Sender<JobResult>,
    shutdown: Arc<AtomicBool>,
}

impl JobWorker {
    pub fn new() -> Self {
        let (tx, rx) = bounded(512);
        Self {
            rx,
            tx,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signal running batches to stop after their current file.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Process `job` on a background thread. Files run sequentially within
    /// the batch; one file's failure is reported and the batch moves on.
    /// Completion is signalled by a `BatchDone` carrying the returned id.
    pub fn run_batch(&self, job: BatchJob) -> Uuid {
        let batch_id = Uuid::new_v4();
        let tx = self.tx.clone();
        let sd = Arc::clone(&self.shutdown);

        info!(%batch_id, kind = job.kind_label(), "batch started");
        thread::spawn(move || {
            run_batch_inner(job, &tx, &sd);
            let _ = tx.send(JobResult::BatchDone { batch_id });
        });
        batch_id
    }
}

impl Default for JobWorker {
    fn default() -> Self {
        Self::new()
    }
}

// ── Batch execution ──────────────────────────────────────────────────────────

fn run_batch_inner(job: BatchJob, tx: &Sender<JobResult>, sd: &AtomicBool) {
    match job {
        BatchJob::Audio { files, settings } => {
            for file in files {
                if sd.load(Ordering::Relaxed) {
                    return;
                }
                report(tx, file.clone(), convert_audio_file(&file, &settings));
            }
        }
        BatchJob::Image { files, settings } => {
            for file in files {
                if sd.load(Ordering::Relaxed) {
                    return;
                }
                report(tx, file.clone(), process_image_file(&file, &settings));
            }
        }
        BatchJob::Text { files, settings } => match settings.mode {
            // Merge consumes the whole batch as one output file.
            TextMode::Merge => {
                let source = files.first().cloned().unwrap_or_default();
                report(tx, source, merge_text_files(&files));
            }
            TextMode::Copy => {
                for file in files {
                    if sd.load(Ordering::Relaxed) {
                        return;
                    }
                    report(tx, file.clone(), copy_text_file(&file));
                }
            }
            TextMode::Dedupe => {
                for file in files {
                    if sd.load(Ordering::Relaxed) {
                        return;
                    }
                    report(tx, file.clone(), dedupe_text_file(&file));
                }
            }
        },
        BatchJob::Video { files, settings } => {
            for file in files {
                if sd.load(Ordering::Relaxed) {
                    return;
                }
                report(tx, file.clone(), extract_frames(&file, &settings));
            }
        }
    }
}

/// Send one per-file outcome. Errors become display strings here — the UI
/// only ever sees text.
fn report(tx: &Sender<JobResult>, source: PathBuf, outcome: anyhow::Result<String>) {
    let result = match outcome {
        Ok(message) => {
            info!(source = %source.display(), "{message}");
            JobResult::FileDone { source, message }
        }
        Err(e) => {
            let message = format!("Error: {e:#}");
            warn!(source = %source.display(), "{message}");
            JobResult::FileFailed { source, message }
        }
    };
    let _ = tx.send(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    const RECV_WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn copy_batch_reports_each_file_then_done() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "one").unwrap();
        fs::write(&b, "two").unwrap();

        let worker = JobWorker::new();
        let batch_id = worker.run_batch(BatchJob::Text {
            files:    vec![a, b],
            settings: TextSettings { mode: TextMode::Copy },
        });

        for _ in 0..2 {
            match worker.rx.recv_timeout(RECV_WAIT).unwrap() {
                JobResult::FileDone { message, .. } => {
                    assert!(message.starts_with("Text file saved to:"));
                }
                other => panic!("expected FileDone, got {other:?}"),
            }
        }
        match worker.rx.recv_timeout(RECV_WAIT).unwrap() {
            JobResult::BatchDone { batch_id: done } => assert_eq!(done, batch_id),
            other => panic!("expected BatchDone, got {other:?}"),
        }
    }

    #[test]
    fn failure_does_not_stop_the_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.txt");
        let real = tmp.path().join("real.txt");
        fs::write(&real, "content").unwrap();

        let worker = JobWorker::new();
        worker.run_batch(BatchJob::Text {
            files:    vec![missing, real],
            settings: TextSettings { mode: TextMode::Copy },
        });

        match worker.rx.recv_timeout(RECV_WAIT).unwrap() {
            JobResult::FileFailed { message, .. } => assert!(message.starts_with("Error:")),
            other => panic!("expected FileFailed, got {other:?}"),
        }
        match worker.rx.recv_timeout(RECV_WAIT).unwrap() {
            JobResult::FileDone { .. } => {}
            other => panic!("expected FileDone, got {other:?}"),
        }
        assert!(matches!(
            worker.rx.recv_timeout(RECV_WAIT).unwrap(),
            JobResult::BatchDone { .. }
        ));
    }

    #[test]
    fn merge_batch_yields_a_single_result() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();

        let worker = JobWorker::new();
        worker.run_batch(BatchJob::Text {
            files:    vec![a, b],
            settings: TextSettings { mode: TextMode::Merge },
        });

        match worker.rx.recv_timeout(RECV_WAIT).unwrap() {
            JobResult::FileDone { message, .. } => {
                assert!(message.starts_with("Text files merged and saved to:"));
            }
            other => panic!("expected FileDone, got {other:?}"),
        }
        assert!(matches!(
            worker.rx.recv_timeout(RECV_WAIT).unwrap(),
            JobResult::BatchDone { .. }
        ));
    }
}
