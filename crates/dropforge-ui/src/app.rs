// crates/dropforge-ui/src/app.rs (dropforge-ui)

use std::path::PathBuf;

use eframe::egui;
use egui::RichText;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use dropforge_core::commands::AppCommand;
use dropforge_core::state::{AppState, TabKind};
use dropforge_media::discover::collect_files;
use dropforge_media::{BatchJob, JobWorker};

use crate::context::{AppContext, StatusLine};
use crate::helpers::format::file_count;
use crate::modules::{
    audio_tab::AudioTab, image_tab::ImageTab, text_tab::TextTab, video_tab::VideoTab, TabModule,
};
use crate::theme::{configure_style, ACCENT, DARK_TEXT_DIM, ERROR_RED};

#[derive(Serialize, Deserialize)]
struct AppStorage {
    state: AppState,
}

// ── App ──────────────────────────────────────────────────────────────────────

pub struct DropForgeApp {
    state:   AppState,
    context: AppContext,
    // Tab modules as concrete types — the active one is matched in update(),
    // so a typo is a compile error instead of a silently blank tab.
    audio: AudioTab,
    image: ImageTab,
    text:  TextTab,
    video: VideoTab,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<AppCommand>,
}

impl DropForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting our theme on OS
        // light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let state = cc
            .storage
            .and_then(|s| eframe::get_value::<AppStorage>(s, eframe::APP_KEY))
            .map(|d| d.state)
            .unwrap_or_default();

        Self {
            state,
            context: AppContext::new(JobWorker::new()),
            audio: AudioTab,
            image: ImageTab,
            text:  TextTab,
            video: VideoTab,
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: AppCommand) {
        match cmd {
            // ── Tabs ─────────────────────────────────────────────────────────
            AppCommand::SelectTab(tab) => {
                self.state.active_tab = tab;
            }

            // ── Settings ─────────────────────────────────────────────────────
            AppCommand::SetAudioFormat(fmt) => {
                self.state.audio.format = fmt;
            }
            AppCommand::SetAudioBitrate(rate) => {
                self.state.audio.bitrate_kbps = rate;
            }
            AppCommand::SetAudioMono(mono) => {
                self.state.audio.mono = mono;
            }
            AppCommand::SetImageResolution(res) => {
                self.state.image.resolution = res;
            }
            AppCommand::SetImageMargin(margin) => {
                self.state.image.add_margin = margin;
            }
            AppCommand::SetTextMode(mode) => {
                self.state.text.mode = mode;
            }
            AppCommand::SetVideoInterval(interval) => {
                self.state.video.frame_interval = interval;
            }

            // ── Processing ───────────────────────────────────────────────────
            AppCommand::ProcessDrop { tab, paths } => {
                self.process_drop(tab, paths);
            }

            // ── Status bar ───────────────────────────────────────────────────
            AppCommand::ClearStatus => {
                self.context.status = None;
            }
        }
    }

    /// Expand the dropped paths for `tab` and hand the surviving files to
    /// the worker as one batch.
    fn process_drop(&mut self, tab: TabKind, paths: Vec<PathBuf>) {
        let files = collect_files(&paths, tab.extensions());
        if files.is_empty() {
            warn!(tab = tab.title(), "drop contained no valid files");
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Error")
                .set_description(format!("No valid {} files were found", tab.noun()))
                .show();
            return;
        }

        info!(tab = tab.title(), count = files.len(), "batch dispatched");
        self.context.status = Some(StatusLine {
            text:   format!("Processing {}…", file_count(files.len())),
            failed: false,
        });

        let job = match tab {
            TabKind::Audio => BatchJob::Audio { files, settings: self.state.audio },
            TabKind::Image => BatchJob::Image { files, settings: self.state.image },
            TabKind::Text  => BatchJob::Text  { files, settings: self.state.text },
            TabKind::Video => BatchJob::Video { files, settings: self.state.video },
        };
        self.context.busy_batches += 1;
        self.context.worker.run_batch(job);
    }

    /// Dropped paths always go to the tab the user is looking at.
    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let files = ctx.input(|i| i.raw.dropped_files.clone());
        let paths: Vec<PathBuf> = files.into_iter().filter_map(|f| f.path).collect();
        if !paths.is_empty() {
            self.pending_cmds.push(AppCommand::ProcessDrop {
                tab: self.state.active_tab,
                paths,
            });
        }
    }
}

// ── eframe::App ──────────────────────────────────────────────────────────────

impl eframe::App for DropForgeApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &AppStorage { state: self.state.clone() });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.worker.shutdown();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_and_drop(ctx);
        self.context.ingest_results(ctx);

        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::TopBottomPanel::top("tab_strip")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new("⚒ DropForge").strong().size(15.0).color(ACCENT));
                    ui.separator();
                    for &tab in TabKind::ALL {
                        let selected = self.state.active_tab == tab;
                        if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                            self.pending_cmds.push(AppCommand::SelectTab(tab));
                        }
                    }
                });
            });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(30.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if self.context.is_busy() {
                        ui.add(egui::Spinner::new().size(13.0));
                    }
                    match &self.context.status {
                        Some(line) => {
                            let color = if line.failed { ERROR_RED } else { DARK_TEXT_DIM };
                            ui.label(RichText::new(&line.text).size(11.0).color(color));
                        }
                        None => {
                            ui.label(RichText::new("Ready").size(11.0).weak());
                        }
                    }
                    if self.context.status.is_some() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").on_hover_text("Clear status").clicked() {
                                self.pending_cmds.push(AppCommand::ClearStatus);
                            }
                        });
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            TabKind::Audio => self.audio.ui(ui, &self.state, hovering, &mut self.pending_cmds),
            TabKind::Image => self.image.ui(ui, &self.state, hovering, &mut self.pending_cmds),
            TabKind::Text  => self.text.ui(ui, &self.state, hovering, &mut self.pending_cmds),
            TabKind::Video => self.video.ui(ui, &self.state, hovering, &mut self.pending_cmds),
        });

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<AppCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }

        if self.context.is_busy() {
            // Keep draining the result channel while work is in flight.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
