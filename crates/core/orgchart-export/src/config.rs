//! Export configuration
//!
//! Optional environment overrides:
//! - ORGCHART_EXPORT_DIALOG_TITLE: save dialog title (default: "Save export file")
//! - ORGCHART_EXPORT_FALLBACK_EXT: extension used when the caller passes none (default: "dat")

/// Default title of the save dialog
pub const DEFAULT_DIALOG_TITLE: &str = "Save export file";

/// Extension used when the requested one is empty
pub const DEFAULT_FALLBACK_EXTENSION: &str = "dat";

/// Mode for newly created export files (rw-r--r--)
pub const EXPORT_FILE_MODE: u32 = 0o644;

pub const ENV_DIALOG_TITLE: &str = "ORGCHART_EXPORT_DIALOG_TITLE";
pub const ENV_FALLBACK_EXTENSION: &str = "ORGCHART_EXPORT_FALLBACK_EXT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub dialog_title: String,
    pub fallback_extension: String,
    pub file_mode: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dialog_title: DEFAULT_DIALOG_TITLE.to_string(),
            fallback_extension: DEFAULT_FALLBACK_EXTENSION.to_string(),
            file_mode: EXPORT_FILE_MODE,
        }
    }
}

impl ExportConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup; blank values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup(ENV_DIALOG_TITLE).filter(|t| !t.trim().is_empty()) {
            config.dialog_title = title.trim().to_string();
        }

        if let Some(ext) = lookup(ENV_FALLBACK_EXTENSION) {
            let ext = clean_extension(&ext);
            if !ext.is_empty() {
                config.fallback_extension = ext;
            }
        }

        config
    }

    /// Normalize a requested extension: trim, lowercase, drop one leading dot.
    /// Falls back to the configured extension when nothing is left.
    pub fn normalize_extension(&self, extension: &str) -> String {
        let ext = clean_extension(extension);
        if ext.is_empty() {
            self.fallback_extension.clone()
        } else {
            ext
        }
    }
}

fn clean_extension(extension: &str) -> String {
    let lowered = extension.trim().to_lowercase();
    match lowered.strip_prefix('.') {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.dialog_title, "Save export file");
        assert_eq!(config.fallback_extension, "dat");
        assert_eq!(config.file_mode, 0o644);
    }

    #[test]
    fn test_normalize_extension() {
        let config = ExportConfig::default();
        assert_eq!(config.normalize_extension(".CSV"), "csv");
        assert_eq!(config.normalize_extension("  Png "), "png");
        assert_eq!(config.normalize_extension("pdf"), "pdf");
        assert_eq!(config.normalize_extension(""), "dat");
        assert_eq!(config.normalize_extension("   "), "dat");
        assert_eq!(config.normalize_extension("."), "dat");
        // Only one leading dot is stripped
        assert_eq!(config.normalize_extension("..gz"), ".gz");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_DIALOG_TITLE, "Export org chart"),
            (ENV_FALLBACK_EXTENSION, ".BIN"),
        ]);
        let config = ExportConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.dialog_title, "Export org chart");
        assert_eq!(config.fallback_extension, "bin");
        assert_eq!(config.normalize_extension(""), "bin");
    }

    #[test]
    fn test_from_lookup_blank_values_keep_defaults() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_DIALOG_TITLE, "  "),
            (ENV_FALLBACK_EXTENSION, "."),
        ]);
        let config = ExportConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config, ExportConfig::default());
    }
}
