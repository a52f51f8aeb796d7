//! OrgChart Export - save exported files from the webview
//!
//! Decodes a data URL or bare base64 payload handed over by the front end
//! and writes it to a path picked through a native save dialog.
//!
//! The dialog is injected as a [`FileDialogProvider`], so everything here
//! runs without a UI in tests.

mod config;
mod dialog;
mod error;
mod payload;
mod writer;

pub use config::{ExportConfig, DEFAULT_DIALOG_TITLE, DEFAULT_FALLBACK_EXTENSION, EXPORT_FILE_MODE};
pub use dialog::{DialogError, FileDialogProvider, FileFilter, SaveDialogRequest};
pub use error::{codes, ErrorResponse, ExportError, ExportResult};
pub use payload::decode_payload;
pub use writer::{write_export_bytes, ExportWriter};
