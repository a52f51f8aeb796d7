//! Commands callable from the front end
//!
//! JS side: `invoke("greet", { name })` and
//! `invoke("save_export_file", { defaultFilename, extension, dataUrl })`.

use crate::state::AppState;
use orgchart_export::{ErrorResponse, FileDialogProvider};
use tauri::State;
use tracing::error;

#[tauri::command]
pub fn greet(name: &str) -> String {
    format!("Hello {}, It's show time!", name)
}

/// Open the native save dialog and write the exported file.
///
/// Returns the chosen path. A dismissed dialog comes back as a `CANCELLED` error.
#[tauri::command(async)]
pub fn save_export_file(
    state: State<'_, AppState>,
    default_filename: String,
    extension: String,
    data_url: String,
) -> Result<String, ErrorResponse> {
    save_export_with(state.inner(), &default_filename, &extension, &data_url)
}

pub(crate) fn save_export_with<P: FileDialogProvider>(
    state: &AppState<P>,
    default_filename: &str,
    extension: &str,
    data_url: &str,
) -> Result<String, ErrorResponse> {
    state
        .export_writer()
        .save_export(default_filename, extension, data_url)
        .map(|path| path.to_string_lossy().into_owned())
        .map_err(|err| {
            if !err.is_cancelled() {
                error!(op = "command.save_export_file.error", code = err.code(), error = %err);
            }
            ErrorResponse::from(err)
        })
}
