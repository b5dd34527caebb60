use crate::command::Command;
use crate::editor::Editor;
use crate::error::RenderResult;
use crate::export;
use crate::geometry::ShapeKind;
use crate::input::{InputHandler, ModeController, logical_canvas_rect};
use crate::panels;
use crate::settings::DoodleSettings;
use crate::texture_manager::TextureManager;
use crate::tools::Mode;

/// The doodle editor window: tools on the left, the nails in the middle.
pub struct DoodleApp {
    pub(crate) settings: DoodleSettings,
    pub(crate) editor: Editor,
    pub(crate) controller: ModeController,
    pub(crate) input: InputHandler,
    pub(crate) textures: TextureManager,
    /// Outcome of the last export, shown under the buttons
    pub(crate) status: Option<String>,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> RenderResult<Self> {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<DoodleSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default()
            .sanitized();
        Self::with_settings(settings)
    }

    /// Builds the app around `settings` with an empty design.
    pub fn with_settings(settings: DoodleSettings) -> RenderResult<Self> {
        log::info!(
            "starting editor on {:?} in {} mode",
            settings.shape,
            settings.mode.label()
        );
        Ok(Self {
            editor: Editor::new(settings.shape)?,
            controller: ModeController::new(settings.mode),
            input: InputHandler::new(logical_canvas_rect()),
            textures: TextureManager::new(),
            status: None,
            settings,
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn settings(&self) -> &DoodleSettings {
        &self.settings
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.controller.set_mode(mode, &mut self.editor);
        self.settings.mode = mode;
    }

    /// Changing shape starts a new design.
    pub fn select_shape(&mut self, shape: ShapeKind) {
        if shape == self.editor.shape() {
            return;
        }
        self.editor.execute(Command::SwitchShape(shape));
        self.settings.shape = shape;
    }

    pub fn execute(&mut self, command: Command) {
        self.editor.execute(command);
    }

    pub fn export(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        let result = export::export_design(self.editor.frame(), self.settings.export_dir.as_deref())
            .map(|path| format!("Saved {}", path.display()));
        #[cfg(target_arch = "wasm32")]
        let result = export::export_design(self.editor.frame())
            .map(|()| format!("Downloaded {}", export::EXPORT_FILE_NAME));

        self.status = Some(match result {
            Ok(message) => message,
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }
}

impl eframe::App for DoodleApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
