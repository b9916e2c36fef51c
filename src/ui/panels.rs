use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};

use docviz::chart::ChartKind;
use docviz::pipeline::PipelineOutcome;

use crate::state::{AppState, Mode};

// ---------------------------------------------------------------------------
// Left side panel – text input and extracted data
// ---------------------------------------------------------------------------

/// Render the left input panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    match state.mode {
        Mode::Visualize => ui.heading("Document"),
        Mode::Summarize => ui.heading("Text Summarization"),
    };
    if let Some(name) = &state.document_name {
        ui.label(RichText::new(name).italics());
    }
    ui.separator();

    ScrollArea::vertical()
        .id_salt("input_scroll")
        .max_height(ui.available_height() * 0.5)
        .show(ui, |ui: &mut Ui| {
            ui.add(
                TextEdit::multiline(&mut state.input_text)
                    .hint_text("Enter your text here, one \"key: value\" per line…")
                    .desired_rows(12)
                    .desired_width(f32::INFINITY),
            );
        });

    ui.horizontal(|ui: &mut Ui| {
        let busy = state.loading;
        match state.mode {
            Mode::Visualize => {
                if ui.add_enabled(!busy, egui::Button::new("Visualize")).clicked() {
                    state.visualize();
                }
            }
            Mode::Summarize => {
                if ui.add_enabled(!busy, egui::Button::new("Summarize Text")).clicked() {
                    state.summarize_only();
                }
            }
        }
        if busy {
            ui.spinner();
            ui.label("Summarizing…");
        }
    });
    ui.separator();

    if state.mode == Mode::Visualize {
        extracted_data(ui, state);
    }
}

/// Numeric and descriptive observations of the current outcome.
fn extracted_data(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        ui.label("No document processed yet.");
        return;
    };
    let (numeric, descriptive) = outcome.observations();

    ScrollArea::vertical()
        .id_salt("extracted_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if !numeric.is_empty() {
                egui::CollapsingHeader::new(
                    RichText::new(format!("Numeric data  ({})", numeric.len())).strong(),
                )
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for obs in numeric {
                        let color = state.color_map.color_for(&obs.key);
                        ui.label(RichText::new(format!("{}: {}", obs.key, obs.value)).color(color));
                    }
                });
            }
            if !descriptive.is_empty() {
                egui::CollapsingHeader::new(
                    RichText::new(format!("Non-numeric data  ({})", descriptive.len())).strong(),
                )
                .default_open(numeric.is_empty())
                .show(ui, |ui: &mut Ui| {
                    for obs in descriptive {
                        ui.label(format!("{}: {}", obs.key, obs.value));
                    }
                });
            }
            if let Some(summary) = &state.summary {
                egui::CollapsingHeader::new(RichText::new("Summarized text").strong())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        ui.label(summary);
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = matches!(
                state.outcome,
                Some(PipelineOutcome::Chart { .. } | PipelineOutcome::Descriptive { .. })
            );
            if ui
                .add_enabled(can_export, egui::Button::new("Export observations…"))
                .clicked()
            {
                save_csv_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Save settings").clicked() {
                state.save_settings();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.mode, Mode::Visualize, "PDF Visualization");
        ui.selectable_value(&mut state.mode, Mode::Summarize, "Text Summarization");

        ui.separator();

        if state.mode == Mode::Visualize {
            let mut kind = state.chart_kind;
            egui::ComboBox::from_id_salt("chart_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in ChartKind::all() {
                        ui.selectable_value(&mut kind, option, option.label());
                    }
                });
            state.set_chart_kind(kind);

            ui.add_enabled(
                state.has_summarizer(),
                egui::Checkbox::new(&mut state.summarize_first, "Summarize first"),
            )
            .on_hover_text(format!("Summarizer backend: {}", state.backend_name()))
            .on_disabled_hover_text("No summarizer configured; set [summarizer] backend in the config file");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open a document")
        .add_filter("Supported files", &["pdf", "txt", "text", "md", "csv"])
        .add_filter("PDF", &["pdf"])
        .add_filter("Text", &["txt", "text", "md"])
        .pick_file();

    if let Some(path) = file {
        state.mode = Mode::Visualize;
        state.load_file(&path);
    }
}

pub fn save_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export observations")
        .add_filter("CSV", &["csv"])
        .set_file_name("observations.csv")
        .save_file();

    if let Some(path) = file {
        state.export_csv(&path);
    }
}
