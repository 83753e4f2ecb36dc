// crates/dropforge-ui/src/context.rs
//
// AppContext owns all runtime handles that are NOT part of the persisted
// AppState. DropForgeApp holds one of these plus an AppState and the tab
// modules — nothing else.

use dropforge_media::{JobResult, JobWorker};
use eframe::egui;

/// The single status-bar line: the most recent worker message.
pub struct StatusLine {
    pub text:   String,
    pub failed: bool,
}

pub struct AppContext {
    /// Background processing worker + its result channel.
    pub worker: JobWorker,
    /// Batches dispatched but not yet reported done. The spinner shows
    /// while this is non-zero.
    pub busy_batches: usize,
    /// Most recent worker message, shown in the status bar.
    pub status: Option<StatusLine>,
}

impl AppContext {
    pub fn new(worker: JobWorker) -> Self {
        Self {
            worker,
            busy_batches: 0,
            status:       None,
        }
    }

    /// True while any batch is still running.
    pub fn is_busy(&self) -> bool {
        self.busy_batches > 0
    }

    /// Drain the worker result channel into the status bar. This is the
    /// single translation layer between raw JobWorker output and UI-visible
    /// state. The label always shows the most recent result — full history
    /// goes to the log.
    pub fn ingest_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.worker.rx.try_recv() {
            match result {
                JobResult::FileDone { message, .. } => {
                    self.status = Some(StatusLine { text: message, failed: false });
                    ctx.request_repaint();
                }
                JobResult::FileFailed { message, .. } => {
                    self.status = Some(StatusLine { text: message, failed: true });
                    ctx.request_repaint();
                }
                JobResult::BatchDone { .. } => {
                    self.busy_batches = self.busy_batches.saturating_sub(1);
                    ctx.request_repaint();
                }
            }
        }
    }
}
