//! Main window: collects the form and triggers generation

use std::path::Path;
use std::sync::Arc;

use eframe::egui;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::config::AppConfig;
use crate::form::{FormState, Transport};
use crate::generate::generate;
use crate::reference::ReferenceTables;

/// Window and application title
pub const WINDOW_TITLE: &str = "公欠届作成ツール";

/// Main application state
pub struct FormApp {
    /// Paths and style
    config: AppConfig,
    /// Students and subjects for the combo boxes
    tables: ReferenceTables,
    /// Current input
    form: FormState,
    /// Startup warnings not yet shown to the user
    pending_warnings: Vec<String>,
}

impl FormApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::configure_fonts(&cc.egui_ctx, &config);

        let (tables, pending_warnings) =
            ReferenceTables::load(&config.students_path(), &config.subjects_path());

        Self {
            config,
            tables,
            form: FormState::today(),
            pending_warnings,
        }
    }

    /// Register the form font so Japanese labels render
    fn configure_fonts(ctx: &egui::Context, config: &AppConfig) {
        let path = config.font_path();
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("UI font {} unavailable: {}", path.display(), e);
                return;
            }
        };

        let mut data = egui::FontData::from_owned(bytes);
        data.index = config.font_index;

        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert("form".to_owned(), Arc::new(data));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push("form".to_owned());
        }
        ctx.set_fonts(fonts);
    }

    fn show_pending_warnings(&mut self) {
        for message in self.pending_warnings.drain(..) {
            show_dialog(MessageLevel::Warning, "警告", &message);
        }
    }

    /// Run the generation pipeline and report the outcome
    fn on_generate(&mut self) {
        let data = self.form.to_form_data();

        match generate(&self.config, &data) {
            Ok(path) => {
                show_dialog(
                    MessageLevel::Info,
                    "成功",
                    &format!("画像を作成しました:\n{}", path.display()),
                );
                open_in_viewer(&path);
            }
            Err(e) => {
                tracing::error!("Generation failed: {:#}", e);
                show_dialog(
                    MessageLevel::Error,
                    "エラー",
                    &format!("処理中にエラーが発生しました:\n{e:#}"),
                );
            }
        }
    }

    fn student_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("学生情報");
            egui::Grid::new("student_grid")
                .num_columns(2)
                .spacing([10.0, 5.0])
                .show(ui, |ui| {
                    ui.label("氏名:");
                    let mut selected: Option<String> = None;
                    egui::ComboBox::from_id_salt("student_name")
                        .selected_text(self.form.name.as_str())
                        .width(200.0)
                        .show_ui(ui, |ui| {
                            for student in &self.tables.students {
                                let checked = self.form.name == student.name;
                                if ui.selectable_label(checked, student.name.as_str()).clicked() {
                                    selected = Some(student.name.clone());
                                }
                            }
                        });
                    if let Some(name) = selected {
                        self.form.select_student(&name, &self.tables);
                    }
                    ui.end_row();

                    ui.label("学籍番号:");
                    ui.text_edit_singleline(&mut self.form.student_id);
                    ui.end_row();
                });
        });
    }

    fn date_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("申請日時");
            ui.horizontal(|ui| {
                ui.label("月:");
                ui.add(egui::TextEdit::singleline(&mut self.form.month).desired_width(40.0));
                ui.label("日:");
                ui.add(egui::TextEdit::singleline(&mut self.form.day).desired_width(40.0));
            });
        });
    }

    fn subject_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("公欠科目");
            egui::Grid::new("subject_grid")
                .num_columns(2)
                .spacing([10.0, 5.0])
                .show(ui, |ui| {
                    ui.label("科目名:");
                    let mut selected: Option<String> = None;
                    egui::ComboBox::from_id_salt("subject_name")
                        .selected_text(self.form.subject.as_str())
                        .width(200.0)
                        .show_ui(ui, |ui| {
                            for subject in &self.tables.subjects {
                                let checked = self.form.subject == subject.name;
                                if ui.selectable_label(checked, subject.name.as_str()).clicked() {
                                    selected = Some(subject.name.clone());
                                }
                            }
                        });
                    if let Some(name) = selected {
                        self.form.select_subject(&name, &self.tables);
                    }
                    ui.end_row();

                    ui.label("担当教員:");
                    ui.text_edit_singleline(&mut self.form.teacher);
                    ui.end_row();
                });
        });
    }

    fn detail_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("詳細");
            egui::Grid::new("detail_grid")
                .num_columns(2)
                .spacing([10.0, 5.0])
                .show(ui, |ui| {
                    ui.label("理由:");
                    ui.add(egui::TextEdit::singleline(&mut self.form.reason).desired_width(280.0));
                    ui.end_row();

                    ui.label("行き手段:");
                    ui.horizontal(|ui| {
                        for transport in Transport::ALL {
                            ui.radio_value(&mut self.form.outbound, transport, transport.label());
                        }
                    });
                    ui.end_row();

                    ui.label("帰り手段:");
                    ui.vertical(|ui| {
                        ui.checkbox(&mut self.form.return_same_as_outbound, "行きと同じ");
                        ui.add_enabled_ui(!self.form.return_same_as_outbound, |ui| {
                            ui.horizontal(|ui| {
                                for transport in Transport::ALL {
                                    ui.radio_value(
                                        &mut self.form.return_trip,
                                        transport,
                                        transport.label(),
                                    );
                                }
                            });
                        });
                    });
                    ui.end_row();

                    ui.label("行き時刻:");
                    time_inputs(
                        ui,
                        &mut self.form.outbound_hour,
                        &mut self.form.outbound_minute,
                    );
                    ui.end_row();

                    ui.label("帰り時刻:");
                    time_inputs(ui, &mut self.form.return_hour, &mut self.form.return_minute);
                    ui.end_row();
                });
        });
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.pending_warnings.is_empty() {
            self.show_pending_warnings();
        }

        let mut generate_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.student_section(ui);
                ui.add_space(5.0);
                self.date_section(ui);
                ui.add_space(5.0);
                self.subject_section(ui);
                ui.add_space(5.0);
                self.detail_section(ui);
                ui.add_space(20.0);

                let button = egui::Button::new("画像を作成");
                if ui.add_sized([ui.available_width(), 32.0], button).clicked() {
                    generate_clicked = true;
                }
            });
        });

        if generate_clicked {
            self.on_generate();
        }
    }
}

/// Hour and minute entry side by side
fn time_inputs(ui: &mut egui::Ui, hour: &mut String, minute: &mut String) {
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(hour).desired_width(30.0));
        ui.label("時");
        ui.add(egui::TextEdit::singleline(minute).desired_width(30.0));
        ui.label("分");
    });
}

/// Blocking message box
fn show_dialog(level: MessageLevel, title: &str, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Open the rendered image in the OS default viewer
fn open_in_viewer(path: &Path) {
    if let Err(e) = open::that(path) {
        tracing::warn!("Failed to open {}: {}", path.display(), e);
        show_dialog(
            MessageLevel::Warning,
            "警告",
            &format!("画像を開けませんでした:\n{}\n{}", path.display(), e),
        );
    }
}
