//! Shared app state
//!
//! The UI context is installed once from the setup hook and only read after.

use crate::dialog::TauriDialogProvider;
use orgchart_export::{ExportConfig, ExportWriter, FileDialogProvider};
use std::sync::OnceLock;

pub struct AppState<P = TauriDialogProvider> {
    ui: OnceLock<P>,
    config: ExportConfig,
}

impl<P: FileDialogProvider> AppState<P> {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            ui: OnceLock::new(),
            config,
        }
    }

    /// Install the UI context. Returns false if one was already installed.
    pub fn install_ui(&self, provider: P) -> bool {
        self.ui.set(provider).is_ok()
    }

    /// Writer bound to the installed UI context, if any
    pub fn export_writer(&self) -> ExportWriter<&P> {
        ExportWriter::new(self.ui.get(), self.config.clone())
    }
}
