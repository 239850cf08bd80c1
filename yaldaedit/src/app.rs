//! yaldaEdit application shell
//!
//! Wires the document, clipboard bridge, file dialogs, encouragement
//! button, and confetti overlay into one window. All user actions arrive
//! through egui's single-threaded event loop; the confetti scheduler is
//! polled once per frame and keeps the loop repainting only while it runs.

use crate::clipboard::{self, SystemClipboard};
use crate::document::Document;
use egui::{Align2, Context, Key};
use std::path::PathBuf;
use std::time::Instant;
use yaldacore::audio::Chime;
use yaldacore::confetti::ConfettiScheduler;
use yaldacore::encourage::EncouragementPicker;
use yaldacore::repaint::RepaintController;
use yaldacore::storage::{
    config_dir, documents_dir, ensure_default_extension, FileBrowser, FileFilter, RecentFiles,
};
use yaldacore::theme::{consume_zoom_keys, menu_bar, YaldaColors, YaldaTheme};
use yaldacore::widgets::{status_bar, AccentButton, FileListItem};

#[derive(Clone, Copy, PartialEq)]
enum FileBrowserMode {
    Open,
    Save,
}

/// Application state
pub struct YaldaEditApp {
    doc: Document,
    recent_files: RecentFiles,
    show_file_browser: bool,
    file_browser: FileBrowser,
    file_browser_mode: FileBrowserMode,
    save_filename: String,
    clipboard: SystemClipboard,
    /// Selection in the text surface, as a character range (last frame).
    selection: Option<(usize, usize)>,
    /// Insertion cursor, as a character index (last frame).
    cursor: usize,
    picker: EncouragementPicker,
    chime: Chime,
    /// Phrase currently shown in the encouragement dialog.
    encouragement: Option<&'static str>,
    confetti: ConfettiScheduler,
    /// Transient error/info line for the status bar.
    status: Option<String>,
    show_close_confirm: bool,
    close_confirmed: bool,
    repaint: RepaintController,
}

impl YaldaEditApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config_path = config_dir("yaldaedit").join("recent.json");
        let recent_files =
            RecentFiles::load(&config_path).unwrap_or_else(|_| RecentFiles::new(10));

        Self {
            doc: Document::new(),
            recent_files,
            show_file_browser: false,
            file_browser: FileBrowser::new(documents_dir()),
            file_browser_mode: FileBrowserMode::Open,
            save_filename: String::new(),
            clipboard: SystemClipboard::new(),
            selection: None,
            cursor: 0,
            picker: EncouragementPicker::new(),
            chime: Chime::new(),
            encouragement: None,
            confetti: ConfettiScheduler::new(),
            status: None,
            show_close_confirm: false,
            close_confirmed: false,
            repaint: RepaintController::with_fast_interval(),
        }
    }

    // --- file gateway ---

    pub fn open_file(&mut self, path: PathBuf) {
        match Document::open(path.clone()) {
            Ok(doc) => {
                self.doc = doc;
                self.selection = None;
                self.cursor = 0;
                self.status = None;
                self.recent_files.add(path);
                self.save_recent_files();
            }
            Err(e) => {
                // Failed open leaves the current document untouched.
                self.status = Some(format!("failed to open {}: {}", path.display(), e));
            }
        }
    }

    fn save_document(&mut self) {
        if self.doc.path.is_some() {
            match self.doc.save() {
                Ok(()) => self.status = None,
                Err(e) => self.status = Some(format!("failed to save: {}", e)),
            }
        } else {
            self.show_save_dialog();
        }
    }

    fn save_document_as(&mut self, path: PathBuf) {
        match self.doc.save_as(path.clone()) {
            Ok(()) => {
                self.status = None;
                self.recent_files.add(path);
                self.save_recent_files();
            }
            Err(e) => self.status = Some(format!("failed to save: {}", e)),
        }
    }

    fn show_open_dialog(&mut self) {
        self.file_browser =
            FileBrowser::new(documents_dir()).with_filter(self.file_browser.filter);
        self.file_browser_mode = FileBrowserMode::Open;
        self.show_file_browser = true;
    }

    fn show_save_dialog(&mut self) {
        self.file_browser =
            FileBrowser::new(documents_dir()).with_filter(self.file_browser.filter);
        self.file_browser_mode = FileBrowserMode::Save;
        let name = self
            .doc
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        self.save_filename = ensure_default_extension(&name);
        self.show_file_browser = true;
    }

    fn save_recent_files(&self) {
        let config_path = config_dir("yaldaedit").join("recent.json");
        let _ = self.recent_files.save(&config_path);
    }

    // --- clipboard bridge ---

    fn cut_selection(&mut self) {
        match clipboard::cut(&mut self.doc, self.selection, &mut self.clipboard) {
            Ok(()) => {
                self.cursor = self.selection.map(|(s, _)| s).unwrap_or(self.cursor);
                self.selection = None;
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn copy_selection(&mut self) {
        match clipboard::copy(&self.doc, self.selection, &mut self.clipboard) {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn paste_at_cursor(&mut self) {
        // Replace an active selection, then insert at its start.
        if let Some((start, end)) = self.selection.take() {
            self.doc.delete_range(start, end);
            self.cursor = start;
        }
        self.cursor = clipboard::paste(&mut self.doc, self.cursor, &mut self.clipboard);
    }

    // --- encouragement ---

    fn trigger_encouragement(&mut self) {
        self.encouragement = Some(self.picker.pick());
        // The chime is decorative: failures go to the status line, the
        // dialog shows regardless.
        if let Err(e) = self.chime.play() {
            eprintln!("chime: {}", e);
            self.status = Some(e.to_string());
        }
    }

    // --- input ---

    /// Intercept Cmd/Ctrl shortcuts before TextEdit consumes them.
    fn handle_keyboard(&mut self, ctx: &Context) {
        consume_zoom_keys(ctx);

        let mut open = false;
        let mut save = false;
        ctx.input_mut(|i| {
            let cmd = i.modifiers.command;
            let events = std::mem::take(&mut i.events);
            let mut remaining = Vec::new();
            for event in events {
                let mut handled = false;
                if let egui::Event::Key { key, pressed: true, .. } = &event {
                    match key {
                        Key::O if cmd => {
                            handled = true;
                            open = true;
                        }
                        Key::S if cmd => {
                            handled = true;
                            save = true;
                        }
                        _ => {}
                    }
                }
                if !handled {
                    remaining.push(event);
                }
            }
            i.events = remaining;
        });

        if open {
            self.show_open_dialog();
        }
        if save {
            self.save_document();
        }
    }

    // --- rendering ---

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        menu_bar(ui, |ui| {
            ui.menu_button("file", |ui| {
                if ui.button("open...    \u{2318}o").clicked() {
                    self.show_open_dialog();
                    ui.close_menu();
                }
                ui.menu_button("open recent", |ui| {
                    if self.recent_files.files.is_empty() {
                        ui.label("no recent files");
                    } else {
                        for path in self.recent_files.files.clone() {
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or_else(|| "unknown".to_string());
                            if ui.button(&name).clicked() {
                                self.open_file(path);
                                ui.close_menu();
                            }
                        }
                    }
                });
                if ui.button("save       \u{2318}s").clicked() {
                    self.save_document();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.menu_button("edit", |ui| {
                if ui.button("cut        \u{2318}x").clicked() {
                    self.cut_selection();
                    ui.close_menu();
                }
                if ui.button("copy       \u{2318}c").clicked() {
                    self.copy_selection();
                    ui.close_menu();
                }
                if ui.button("paste      \u{2318}v").clicked() {
                    self.paste_at_cursor();
                    ui.close_menu();
                }
            });
        });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.add(AccentButton::new("get encouragement")).clicked() {
                self.trigger_encouragement();
            }
            ui.add_space(8.0);
            if ui.add(AccentButton::new("start confetti")).clicked() {
                self.confetti.start(Instant::now());
            }
            if ui.add(AccentButton::new("stop confetti")).clicked() {
                self.confetti.stop();
            }
        });
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(&mut self.doc.text)
                    .font(egui::FontId::proportional(16.0))
                    .text_color(YaldaColors::PURPLE)
                    .desired_width(available.x)
                    .desired_rows((available.y / 20.0).max(4.0) as usize)
                    .frame(false)
                    .show(ui);

                if output.response.changed() {
                    self.doc.modified = true;
                }

                // Track cursor and selection for the edit menu.
                if let Some(range) = output.cursor_range {
                    let p = range.primary.ccursor.index;
                    let s = range.secondary.ccursor.index;
                    self.cursor = p;
                    self.selection = if p == s { None } else { Some((p.min(s), p.max(s))) };
                }
            });
    }

    fn render_file_browser(&mut self, ctx: &Context) {
        let title = match self.file_browser_mode {
            FileBrowserMode::Open => "open file",
            FileBrowserMode::Save => "save file",
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .frame(YaldaTheme::window_frame())
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("location:");
                    ui.label(self.file_browser.current_dir.to_string_lossy().to_string());
                });
                ui.horizontal(|ui| {
                    ui.label("show:");
                    egui::ComboBox::from_id_source("file_filter")
                        .selected_text(self.file_browser.filter.label())
                        .show_ui(ui, |ui| {
                            for filter in FileFilter::GROUPS {
                                let selected = self.file_browser.filter == filter;
                                if ui.selectable_label(selected, filter.label()).clicked() {
                                    self.file_browser.set_filter(filter);
                                }
                            }
                        });
                });
                ui.separator();
                egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    let entries = self.file_browser.entries.clone();
                    for (idx, entry) in entries.iter().enumerate() {
                        let selected = self.file_browser.selected_index == Some(idx);
                        let response = ui.add(
                            FileListItem::new(&entry.name, entry.is_directory).selected(selected),
                        );
                        if response.clicked() {
                            self.file_browser.selected_index = Some(idx);
                        }
                        if response.double_clicked() {
                            if entry.is_directory {
                                self.file_browser.navigate_to(entry.path.clone());
                            } else if self.file_browser_mode == FileBrowserMode::Open {
                                let p = entry.path.clone();
                                self.show_file_browser = false;
                                self.open_file(p);
                            }
                        }
                    }
                });
                if self.file_browser_mode == FileBrowserMode::Save {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("filename:");
                        ui.text_edit_singleline(&mut self.save_filename);
                    });
                }
                ui.separator();
                ui.horizontal(|ui| {
                    // Cancelled dialog: silent no-op.
                    if ui.button("cancel").clicked() {
                        self.show_file_browser = false;
                    }
                    let action_text = match self.file_browser_mode {
                        FileBrowserMode::Open => "open",
                        FileBrowserMode::Save => "save",
                    };
                    if ui.button(action_text).clicked() {
                        match self.file_browser_mode {
                            FileBrowserMode::Open => {
                                if let Some(entry) = self.file_browser.selected_entry() {
                                    if !entry.is_directory {
                                        let p = entry.path.clone();
                                        self.show_file_browser = false;
                                        self.open_file(p);
                                    }
                                }
                            }
                            FileBrowserMode::Save => {
                                if !self.save_filename.is_empty() {
                                    let name = ensure_default_extension(&self.save_filename);
                                    let path = self.file_browser.current_dir.join(name);
                                    self.show_file_browser = false;
                                    self.save_document_as(path);
                                }
                            }
                        }
                    }
                });
            });
    }

    fn render_encouragement(&mut self, ctx: &Context) {
        let Some(phrase) = self.encouragement else { return };
        egui::Window::new("encouragement")
            .collapsible(false)
            .resizable(false)
            .frame(YaldaTheme::window_frame())
            .default_width(280.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading(phrase);
                    ui.add_space(12.0);
                    if ui.button("ok").clicked() {
                        self.encouragement = None;
                    }
                });
            });
    }

    fn render_close_confirm(&mut self, ctx: &Context) {
        egui::Window::new("unsaved changes")
            .collapsible(false)
            .resizable(false)
            .frame(YaldaTheme::window_frame())
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("you have unsaved changes.");
                ui.label("do you want to save before closing?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("don't save").clicked() {
                        self.close_confirmed = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("cancel").clicked() {
                        self.show_close_confirm = false;
                    }
                    if ui.button("save").clicked() {
                        self.save_document();
                        if !self.doc.modified {
                            self.close_confirmed = true;
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    }
                });
            });
    }

    fn render_confetti(&self, ctx: &Context) {
        if self.confetti.flakes().is_empty() {
            return;
        }
        // Decorative overlay above all panels and windows.
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("confetti_overlay"),
        ));
        for flake in self.confetti.flakes() {
            let radius = flake.size / 2.0;
            painter.circle_filled(
                egui::pos2(flake.x + radius, flake.y + radius),
                radius,
                flake.color,
            );
        }
    }

    fn status_line(&self) -> String {
        if let Some(ref msg) = self.status {
            msg.clone()
        } else {
            format!(
                "{} lines  |  {} words, {} chars",
                self.doc.line_count(),
                self.doc.word_count(),
                self.doc.char_count()
            )
        }
    }
}

impl eframe::App for YaldaEditApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        // Drag-and-drop opens a matching file.
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if let Some(path) = dropped.into_iter().next() {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if matches!(ext.as_str(), "txt" | "py" | "html" | "htm" | "md") {
                self.open_file(path);
            }
        }

        // Fire due confetti ticks and keep the loop repainting while the
        // animation runs.
        let screen = ctx.screen_rect();
        if self.confetti.poll(Instant::now(), screen.width(), screen.height()) {
            self.repaint.mark_needs_repaint();
        }
        self.repaint.set_continuous(self.confetti.is_running());

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(self.doc.display_title());
            });
        });
        egui::TopBottomPanel::top("buttons").show(ctx, |ui| {
            self.render_buttons(ui);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, &self.status_line());
        });
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(YaldaColors::WHITE)
                    .inner_margin(egui::Margin::same(0.0)),
            )
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        if self.show_file_browser {
            self.render_file_browser(ctx);
        }
        self.render_encouragement(ctx);
        if self.show_close_confirm {
            self.render_close_confirm(ctx);
        }
        self.render_confetti(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            if self.doc.modified && !self.close_confirmed {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.show_close_confirm = true;
            }
        }

        self.repaint.end_frame(ctx);
    }
}
