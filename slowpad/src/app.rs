//! slowPad window
//!
//! Renders the `Pad` state with egui and forwards menu clicks, accelerators
//! and prompt answers to it. The text itself is edited by egui's multiline
//! `TextEdit`; its caret and selection are mirrored into the buffer every
//! frame so the Edit menu works on what the user sees.

use egui::text::{CCursor, CCursorRange};
use egui::{Align2, Context, Key};
use padcore::storage::{documents_dir, FileBrowser};
use padcore::theme::{consume_special_keys, menu_bar, PadTheme};
use padcore::widgets::{shortcut_row, status_bar, FileListItem};
use slowpad::buffer::Cursor;
use slowpad::clipboard::SystemClipboard;
use slowpad::document::DocPath;
use slowpad::prompt::{confirm_close_message, UNSAVED_WARNING};
use slowpad::{Pad, PadConfig, Prompt, UserChoice};
use std::path::{Path, PathBuf};

/// Everything reachable from the menus and accelerators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Shortcuts,
    About,
}

#[derive(Clone, Copy, PartialEq)]
enum FileBrowserMode {
    Open,
    Save,
}

pub struct SlowPadApp {
    pad: Pad,
    clipboard: SystemClipboard,
    text_id: egui::Id,
    /// Push the buffer's caret into the text widget before it is drawn
    push_cursor: bool,
    file_browser: FileBrowser,
    file_browser_mode: Option<FileBrowserMode>,
    save_filename: String,
    /// Existing file the user has agreed to replace
    overwrite_target: Option<PathBuf>,
    /// Last title sent to the native window
    shown_title: String,
    close_sent: bool,
}

impl SlowPadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: PadConfig) -> Self {
        let file_browser = FileBrowser::new(documents_dir()).with_filter(config.extensions.clone());
        Self {
            pad: Pad::new(config),
            clipboard: SystemClipboard::new(),
            text_id: egui::Id::new("slowpad_text"),
            push_cursor: false,
            file_browser,
            file_browser_mode: None,
            save_filename: String::new(),
            overwrite_target: None,
            shown_title: String::new(),
            close_sent: false,
        }
    }

    fn run(&mut self, command: Command) {
        log::debug!("command {:?}", command);
        match command {
            Command::New => self.pad.new_file(),
            Command::Open => self.pad.open(),
            Command::Save => self.pad.save(),
            Command::SaveAs => self.pad.save_as(),
            Command::Exit => self.pad.exit(),
            Command::Cut => self.pad.cut(&mut self.clipboard),
            Command::Copy => self.pad.copy(&mut self.clipboard),
            Command::Paste => self.pad.paste(&mut self.clipboard),
            Command::SelectAll => self.pad.select_all(),
            Command::Shortcuts => self.pad.shortcuts(),
            Command::About => self.pad.about(),
        }
        self.push_cursor = true;
    }

    /// Pull accelerators and clipboard events out of the input queue before
    /// the text widget sees them, so they go through `Pad`.
    fn handle_keyboard(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let mut commands: Vec<Command> = Vec::new();
        ctx.input_mut(|i| {
            let events = std::mem::take(&mut i.events);
            let mut remaining = Vec::with_capacity(events.len());

            for event in events {
                match command_for(&event) {
                    Some(c) => {
                        // a copy shortcut may arrive both as a key and as Event::Copy
                        if !commands.contains(&c) {
                            commands.push(c);
                        }
                    }
                    None => remaining.push(event),
                }
            }
            i.events = remaining;
        });

        for command in commands {
            self.run(command);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        if let Some(path) = dropped.into_iter().find(|p| self.file_browser.accepts(p)) {
            self.pad.open_path(path);
            self.push_cursor = true;
        }
    }

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        let mut chosen = None;
        menu_bar(ui, |ui| {
            ui.menu_button("file", |ui| {
                let items = [
                    ("new          \u{2318}n", Command::New),
                    ("open...      \u{2318}o", Command::Open),
                    ("save         \u{2318}s", Command::Save),
                    ("save as...  \u{21e7}\u{2318}s", Command::SaveAs),
                ];
                for (label, command) in items {
                    if ui.button(label).clicked() {
                        chosen = Some(command);
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button("exit         \u{2318}q").clicked() {
                    chosen = Some(Command::Exit);
                    ui.close_menu();
                }
            });

            ui.menu_button("edit", |ui| {
                let items = [
                    ("cut          \u{2318}x", Command::Cut),
                    ("copy         \u{2318}c", Command::Copy),
                    ("paste        \u{2318}v", Command::Paste),
                ];
                for (label, command) in items {
                    if ui.button(label).clicked() {
                        chosen = Some(command);
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button("select all   \u{2318}a").clicked() {
                    chosen = Some(Command::SelectAll);
                    ui.close_menu();
                }
            });

            ui.menu_button("help", |ui| {
                if ui.button("keyboard shortcuts").clicked() {
                    chosen = Some(Command::Shortcuts);
                    ui.close_menu();
                }
                if ui.button("about slowPad").clicked() {
                    chosen = Some(Command::About);
                    ui.close_menu();
                }
            });
        });
        if let Some(command) = chosen {
            self.run(command);
        }
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        if self.push_cursor {
            self.push_cursor = false;
            let mut state = egui::TextEdit::load_state(ui.ctx(), self.text_id).unwrap_or_default();
            state.cursor.set_char_range(self.pad.buffer().cursor.map(to_char_range));
            state.store(ui.ctx(), self.text_id);
            if self.pad.buffer().cursor.is_some() {
                ui.ctx().memory_mut(|m| m.request_focus(self.text_id));
            }
        }

        let available = ui.available_size();
        let font_size = self.pad.config().editor_font_size;
        let interactive = !self.pad.is_busy();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(self.pad.text_mut())
                    .id(self.text_id)
                    .font(egui::FontId::monospace(font_size))
                    .desired_width(available.x)
                    .desired_rows((available.y / (font_size + 4.0)).max(4.0) as usize)
                    .frame(false)
                    .lock_focus(true)
                    .interactive(interactive)
                    .show(ui);

                if output.response.changed() {
                    self.pad.text_changed();
                }
                if let Some(range) = output.cursor_range {
                    self.pad.set_cursor(Some(Cursor::select(
                        range.secondary.ccursor.index,
                        range.primary.ccursor.index,
                    )));
                }
            });
    }

    /// Point the file browser at the right mode when a file prompt appears.
    fn sync_file_browser(&mut self) {
        let wanted = match self.pad.prompt() {
            Some(Prompt::OpenFile) => Some(FileBrowserMode::Open),
            Some(Prompt::SaveAs { .. }) => Some(FileBrowserMode::Save),
            _ => None,
        };
        if wanted == self.file_browser_mode {
            return;
        }
        if wanted.is_some() {
            let start = match &self.pad.document().path {
                DocPath::File(p) => p.parent().map(|d| d.to_path_buf()).unwrap_or_else(documents_dir),
                DocPath::Untitled(_) => documents_dir(),
            };
            self.file_browser = FileBrowser::new(start).with_filter(self.pad.config().extensions.clone());
        }
        if let Some(Prompt::SaveAs { suggested, .. }) = self.pad.prompt() {
            self.save_filename = suggested.clone();
        }
        self.overwrite_target = None;
        self.file_browser_mode = wanted;
    }

    fn render_file_browser(&mut self, ctx: &Context, mode: FileBrowserMode) {
        let title = match mode {
            FileBrowserMode::Open => "open document",
            FileBrowserMode::Save => "save document",
        };
        // None = still open, Some(None) = cancelled, Some(Some(path)) = chosen
        let mut outcome: Option<Option<PathBuf>> = None;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("location:");
                    ui.label(self.file_browser.current_dir.to_string_lossy().to_string());
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .show(ui, |ui| {
                        let entries = self.file_browser.entries.clone();
                        for (idx, entry) in entries.iter().enumerate() {
                            let selected = self.file_browser.selected_index == Some(idx);
                            let response = ui.add(
                                FileListItem::new(&entry.name, entry.is_directory).selected(selected),
                            );
                            if response.clicked() {
                                self.file_browser.selected_index = Some(idx);
                                if mode == FileBrowserMode::Save && !entry.is_directory {
                                    self.save_filename = entry.name.clone();
                                }
                            }
                            if response.double_clicked() {
                                if entry.is_directory {
                                    self.file_browser.navigate_to(entry.path.clone());
                                } else if mode == FileBrowserMode::Open {
                                    outcome = Some(Some(entry.path.clone()));
                                }
                            }
                        }
                    });
                if mode == FileBrowserMode::Save {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("filename:");
                        ui.text_edit_singleline(&mut self.save_filename);
                    });
                    if let Some(target) = &self.overwrite_target {
                        let name = target.file_name().unwrap_or_default().to_string_lossy();
                        ui.label(format!("{} already exists. save again to replace it.", name));
                    }
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        outcome = Some(None);
                    }
                    let action_text = match mode {
                        FileBrowserMode::Open => "open",
                        FileBrowserMode::Save => "save",
                    };
                    if ui.button(action_text).clicked() {
                        match mode {
                            FileBrowserMode::Open => {
                                if let Some(entry) = self.file_browser.selected_entry() {
                                    if !entry.is_directory {
                                        outcome = Some(Some(entry.path.clone()));
                                    }
                                }
                            }
                            FileBrowserMode::Save => {
                                let name = self.save_filename.trim();
                                if !name.is_empty() {
                                    let target = self.file_browser.save_directory().join(with_txt_extension(name));
                                    if asks_before_overwrite(&target, self.overwrite_target.as_deref()) {
                                        self.overwrite_target = Some(target);
                                    } else {
                                        outcome = Some(Some(target));
                                    }
                                }
                            }
                        }
                    }
                });
            });

        if let Some(choice) = outcome {
            match mode {
                FileBrowserMode::Open => self.pad.answer_open(choice),
                FileBrowserMode::Save => self.pad.answer_save_as(choice),
            }
            self.push_cursor = true;
        }
    }

    fn render_confirm_close(&mut self, ctx: &Context) {
        let message = confirm_close_message(&self.pad.document().path);
        let mut choice = None;
        egui::Window::new("confirmation")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("don't save").clicked() {
                        choice = Some(UserChoice::Deny);
                    }
                    if ui.button("cancel").clicked() {
                        choice = Some(UserChoice::Cancel);
                    }
                    if ui.button("save").clicked() {
                        choice = Some(UserChoice::Confirm);
                    }
                });
            });
        if let Some(choice) = choice {
            self.pad.answer_confirm(choice);
            self.push_cursor = true;
        }
    }

    fn render_notice(&mut self, ctx: &Context, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        let mut ok = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                add_contents(ui);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        ok = true;
                    }
                });
            });
        if ok {
            self.pad.dismiss();
        }
    }

    fn render_prompt(&mut self, ctx: &Context) {
        self.sync_file_browser();
        let Some(prompt) = self.pad.prompt().cloned() else {
            return;
        };
        match prompt {
            Prompt::ConfirmClose { .. } => self.render_confirm_close(ctx),
            Prompt::OpenFile => self.render_file_browser(ctx, FileBrowserMode::Open),
            Prompt::SaveAs { .. } => self.render_file_browser(ctx, FileBrowserMode::Save),
            Prompt::UnsavedWarning => self.render_notice(ctx, "warning!", |ui| {
                ui.label(UNSAVED_WARNING);
            }),
            Prompt::Failure(message) => self.render_notice(ctx, "error", |ui| {
                ui.label(message);
            }),
            Prompt::About => {
                let about = self.pad.config().about_text.clone();
                self.render_notice(ctx, "about", |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("slowPad");
                        ui.add_space(8.0);
                        ui.label(about);
                    });
                });
            }
            Prompt::Shortcuts => self.render_notice(ctx, "keyboard shortcuts", |ui| {
                ui.label(egui::RichText::new("File").strong());
                ui.separator();
                shortcut_row(ui, "\u{2318}N", "New document");
                shortcut_row(ui, "\u{2318}O", "Open file");
                shortcut_row(ui, "\u{2318}S", "Save");
                shortcut_row(ui, "\u{21e7}\u{2318}S", "Save as");
                shortcut_row(ui, "\u{2318}Q", "Exit");
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Edit").strong());
                ui.separator();
                shortcut_row(ui, "\u{2318}X", "Cut");
                shortcut_row(ui, "\u{2318}C", "Copy");
                shortcut_row(ui, "\u{2318}V", "Paste");
                shortcut_row(ui, "\u{2318}A", "Select all");
            }),
        }
    }

    fn handle_close(&mut self, ctx: &Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.pad.exit_requested() {
            self.pad.exit();
            if !self.pad.exit_requested() {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            }
        }
        if self.pad.exit_requested() && !self.close_sent {
            self.close_sent = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn sync_window_title(&mut self, ctx: &Context) {
        let title = self.pad.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }

    fn status_text(&self) -> String {
        let buffer = self.pad.buffer();
        let location = match &self.pad.document().path {
            DocPath::File(p) => p.display().to_string(),
            DocPath::Untitled(_) => "not saved yet".to_string(),
        };
        format!("{} lines  |  {} chars  |  {}", buffer.line_count(), buffer.char_count(), location)
    }
}

/// Menu command bound to a clipboard event or a ⌘ accelerator.
fn command_for(event: &egui::Event) -> Option<Command> {
    match event {
        egui::Event::Copy => Some(Command::Copy),
        egui::Event::Cut => Some(Command::Cut),
        egui::Event::Paste(_) => Some(Command::Paste),
        egui::Event::Key { key, pressed: true, modifiers, .. } if modifiers.command => match key {
            Key::N => Some(Command::New),
            Key::O => Some(Command::Open),
            Key::S if modifiers.shift => Some(Command::SaveAs),
            Key::S => Some(Command::Save),
            Key::Q => Some(Command::Exit),
            Key::A => Some(Command::SelectAll),
            Key::C => Some(Command::Copy),
            Key::X => Some(Command::Cut),
            Key::V => Some(Command::Paste),
            _ => None,
        },
        _ => None,
    }
}

/// An existing file is only replaced after a second click on the same target.
fn asks_before_overwrite(target: &Path, confirmed: Option<&Path>) -> bool {
    target.exists() && confirmed != Some(target)
}

fn to_char_range(cursor: Cursor) -> CCursorRange {
    match cursor.anchor {
        Some(anchor) => CCursorRange::two(CCursor::new(anchor), CCursor::new(cursor.pos)),
        None => CCursorRange::one(CCursor::new(cursor.pos)),
    }
}

/// Append `.txt` when the typed name has no extension.
fn with_txt_extension(name: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{}.txt", name)
    }
}

impl eframe::App for SlowPadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.pad.is_busy() {
            self.handle_keyboard(ctx);
            self.handle_dropped_files(ctx);
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            PadTheme::title_bar_frame().show(ui, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(self.pad.title());
                });
            });
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, &self.status_text());
        });
        egui::CentralPanel::default()
            .frame(PadTheme::editor_frame())
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        self.render_prompt(ctx);
        self.handle_close(ctx);
        self.sync_window_title(ctx);
    }
}
