//! OrgChart Desktop
//!
//! Tauri shell: registers the front end commands, installs the save dialog
//! as UI context once the app is up, and sets up tracing.

mod commands;
mod dialog;
mod logging;
mod state;

use dialog::TauriDialogProvider;
use orgchart_export::ExportConfig;
use state::AppState;
use tauri::Manager;
use tracing::{info, warn};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();

    let config = ExportConfig::from_env();
    info!(
        op = "app.init",
        dialog_title = %config.dialog_title,
        fallback_ext = %config.fallback_extension,
        "Starting OrgChart Desktop"
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::<TauriDialogProvider>::new(config))
        .setup(|app| {
            let state = app.state::<AppState>();
            if state.install_ui(TauriDialogProvider::new(app.handle().clone())) {
                info!(op = "app.setup.ok", "UI context ready");
            } else {
                warn!(op = "app.setup.duplicate", "UI context already installed");
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::greet,
            commands::save_export_file,
        ])
        .run(tauri::generate_context!())
        .expect("error while running OrgChart Desktop");
}
