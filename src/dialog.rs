//! Native save dialog backed by tauri-plugin-dialog

use orgchart_export::{DialogError, FileDialogProvider, SaveDialogRequest};
use std::path::PathBuf;
use tauri::{AppHandle, Runtime, Wry};
use tauri_plugin_dialog::DialogExt;

/// [`FileDialogProvider`] over the app's dialog plugin.
///
/// Uses the blocking API, so it must not be called from the main thread.
pub struct TauriDialogProvider<R: Runtime = Wry> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriDialogProvider<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> FileDialogProvider for TauriDialogProvider<R> {
    fn save_file(&self, request: &SaveDialogRequest) -> Result<Option<PathBuf>, DialogError> {
        let chosen = self
            .app
            .dialog()
            .file()
            .set_title(&request.title)
            .set_file_name(&request.default_filename)
            .set_can_create_directories(request.can_create_directories)
            .add_filter(&request.filter.display_name, &[request.filter.extension()])
            .blocking_save_file();

        match chosen {
            Some(file_path) => file_path
                .into_path()
                .map(Some)
                .map_err(|e| DialogError::new(e.to_string())),
            None => Ok(None),
        }
    }
}
