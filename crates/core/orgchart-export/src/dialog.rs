//! Save Dialog Capability
//!
//! The native save-file prompt is an external collaborator. The desktop app
//! implements [`FileDialogProvider`] on top of its UI runtime; tests use the
//! mock below.

use std::path::PathBuf;
use thiserror::Error;

/// Single display filter shown in the save dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Label, e.g. "PNG file"
    pub display_name: String,
    /// Glob pattern, e.g. "*.png"
    pub pattern: String,
}

impl FileFilter {
    /// Build the filter for an already-normalized extension
    pub fn for_extension(ext: &str) -> Self {
        Self {
            display_name: format!("{} file", ext.to_uppercase()),
            pattern: format!("*.{ext}"),
        }
    }

    /// Bare extension matched by the pattern, e.g. "png" for "*.png"
    pub fn extension(&self) -> &str {
        self.pattern.strip_prefix("*.").unwrap_or(&self.pattern)
    }
}

/// Parameters for one save-file prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialogRequest {
    pub title: String,
    pub default_filename: String,
    pub can_create_directories: bool,
    pub filter: FileFilter,
}

/// Error raised by the dialog layer itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DialogError {
    pub message: String,
}

impl DialogError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Trait for the native save-file prompt
///
/// Returns `Ok(None)` when the user dismisses the dialog.
pub trait FileDialogProvider: Send + Sync {
    fn save_file(&self, request: &SaveDialogRequest) -> Result<Option<PathBuf>, DialogError>;
}

impl<P: FileDialogProvider + ?Sized> FileDialogProvider for &P {
    fn save_file(&self, request: &SaveDialogRequest) -> Result<Option<PathBuf>, DialogError> {
        (**self).save_file(request)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_extension() {
        let filter = FileFilter::for_extension("csv");
        assert_eq!(filter.display_name, "CSV file");
        assert_eq!(filter.pattern, "*.csv");
        assert_eq!(filter.extension(), "csv");
    }

    #[test]
    fn test_extension_without_glob_prefix() {
        let filter = FileFilter {
            display_name: "Any".to_string(),
            pattern: "txt".to_string(),
        };
        assert_eq!(filter.extension(), "txt");
    }

    #[test]
    fn test_provider_through_reference() {
        let dialog = mock::MockFileDialog::choosing("/tmp/a.png");
        let request = SaveDialogRequest {
            title: "t".to_string(),
            default_filename: "a".to_string(),
            can_create_directories: true,
            filter: FileFilter::for_extension("png"),
        };

        let by_ref: &dyn FileDialogProvider = &&dialog;
        assert_eq!(by_ref.save_file(&request).unwrap(), Some(PathBuf::from("/tmp/a.png")));
        assert_eq!(dialog.calls(), 1);
    }
}
