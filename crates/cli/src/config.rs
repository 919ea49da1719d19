use std::path::PathBuf;

/// CLI configuration loaded from environment variables.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory issued certificates are written to (default: `certificates`).
    pub output_dir: PathBuf,
    /// Extension of issued certificate files, without the dot (default: `html`).
    pub file_extension: String,
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default        |
    /// |--------------------------|----------------|
    /// | `CERTIFY_OUTPUT_DIR`     | `certificates` |
    /// | `CERTIFY_FILE_EXTENSION` | `html`         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output_dir = lookup("CERTIFY_OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "certificates".into())
            .into();

        let file_extension = lookup("CERTIFY_FILE_EXTENSION")
            .map(|v| v.trim().trim_start_matches('.').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "html".into());

        Self {
            output_dir,
            file_extension,
        }
    }
}
