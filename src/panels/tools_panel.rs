use crate::DoodleApp;
use crate::command::{Action, Command};
use crate::geometry::ShapeKind;
use crate::settings::{MAX_DECORATION_SIZE, MIN_DECORATION_SIZE};
use crate::tools::{Mode, Tool};

pub fn tools_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Nail Doodle");
            ui.separator();

            // Shape selection resets the design
            let mut shape = app.editor.shape();
            egui::ComboBox::from_label("Shape")
                .selected_text(shape.label())
                .show_ui(ui, |ui| {
                    for kind in ShapeKind::ALL {
                        ui.selectable_value(&mut shape, kind, kind.label());
                    }
                });
            app.select_shape(shape);

            ui.separator();
            ui.label("Mode");
            let active = app.controller.mode();
            ui.horizontal_wrapped(|ui| {
                for mode in Mode::ALL {
                    if ui.selectable_label(active == mode, mode.label()).clicked() {
                        app.select_mode(mode);
                    }
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut app.settings.color,
                    egui::color_picker::Alpha::Opaque,
                );
            });

            let mut size = app.settings.decoration_size();
            ui.horizontal(|ui| {
                ui.label("Decoration size:");
                ui.add(egui::Slider::new(
                    &mut size,
                    MIN_DECORATION_SIZE..=MAX_DECORATION_SIZE,
                ));
            });
            app.settings.set_decoration_size(size);

            ui.separator();
            ui.horizontal(|ui| {
                let history = app.editor.history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.execute(Command::Redo);
                }
                if ui.button("Reset").clicked() {
                    app.execute(Command::Reset);
                }
            });

            if ui.button("💾 Export PNG").clicked() {
                app.export();
            }
            if let Some(status) = &app.status {
                ui.small(status);
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.heading("History");
                ui.label(format!(
                    "({}, {})",
                    app.controller.active_tool().name(),
                    app.editor.state().name()
                ));
            });

            let history = app.editor.history();
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("action_history_grid")
                    .num_columns(2)
                    .spacing([40.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Actions");
                        ui.strong("Undone");
                        ui.end_row();

                        let actions = history.actions();
                        let undone = history.redo_stack();
                        for i in 0..actions.len().max(undone.len()) {
                            ui.label(history_entry(actions.get(i)));
                            ui.label(history_entry(undone.get(i)));
                            ui.end_row();
                        }
                    });
            });
        });
}

// Each row is tinted with the color the mark was made in
fn history_entry(action: Option<&Action>) -> egui::RichText {
    match action {
        Some(action) => egui::RichText::new(action.label()).color(action.color()),
        None => egui::RichText::new(""),
    }
}
