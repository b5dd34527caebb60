use crate::DoodleApp;
use crate::input::logical_canvas_rect;

pub fn central_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Largest rect with the canvas aspect ratio that fits the panel
        let logical = logical_canvas_rect().size();
        let available = ui.available_size();
        let scale = (available.x / logical.x).min(available.y / logical.y).max(0.1);
        let (response, painter) =
            ui.allocate_painter(logical * scale, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        app.input.set_canvas_rect(canvas_rect);
        for event in app.input.process_input(ctx) {
            app.controller
                .route_event(&event, &mut app.editor, &app.settings);
        }

        let texture = app.textures.texture_for(ctx, app.editor.frame());
        painter.image(
            texture,
            canvas_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    });
}
