//! Export Writer
//!
//! Prompts for a destination through the injected [`FileDialogProvider`],
//! decodes the payload and writes it to the chosen path. Every failure is
//! terminal for the call; re-prompting is up to the front end.

use crate::config::ExportConfig;
use crate::dialog::{FileDialogProvider, FileFilter, SaveDialogRequest};
use crate::error::{ExportError, ExportResult};
use crate::payload::decode_payload;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// Saves exported files chosen through a save dialog
pub struct ExportWriter<P> {
    /// UI context; `None` until the app has finished starting
    dialog: Option<P>,
    config: ExportConfig,
}

impl<P: FileDialogProvider> ExportWriter<P> {
    pub fn new(dialog: Option<P>, config: ExportConfig) -> Self {
        Self { dialog, config }
    }

    /// Build the dialog request for a normalized extension
    fn dialog_request(&self, default_filename: &str, ext: &str) -> SaveDialogRequest {
        SaveDialogRequest {
            title: self.config.dialog_title.clone(),
            default_filename: default_filename.to_string(),
            can_create_directories: true,
            filter: FileFilter::for_extension(ext),
        }
    }

    /// Prompt for a destination and write the decoded payload there.
    ///
    /// Returns the chosen path on success.
    pub fn save_export(
        &self,
        default_filename: &str,
        extension: &str,
        payload: &str,
    ) -> ExportResult<PathBuf> {
        let dialog = self.dialog.as_ref().ok_or(ExportError::ContextNotReady)?;

        let ext = self.config.normalize_extension(extension);
        info!(
            op = "export.save.start",
            default_filename = %default_filename,
            ext = %ext,
            payload_len = payload.len(),
            "Prompting for export destination"
        );

        let request = self.dialog_request(default_filename, &ext);
        let save_path = match dialog.save_file(&request)? {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                info!(op = "export.save.cancelled", "Save dialog dismissed");
                return Err(ExportError::Cancelled);
            }
        };

        let content = decode_payload(payload)?;

        write_export_bytes(&save_path, &content, self.config.file_mode).map_err(|source| {
            warn!(
                op = "export.save.write_failed",
                path = %save_path.display(),
                error = %source,
                "Failed to write export file"
            );
            ExportError::WriteFailed {
                path: save_path.clone(),
                source,
            }
        })?;

        info!(
            op = "export.save.ok",
            path = %save_path.display(),
            bytes = content.len(),
            "Export file written"
        );

        Ok(save_path)
    }
}

/// Create or truncate `path` and write `content` to it.
///
/// `mode` applies only when the file is created (Unix).
pub fn write_export_bytes(path: &Path, content: &[u8], mode: u32) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    options.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.sync_all()
}
