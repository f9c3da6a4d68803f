//! Writing the plain-text result export to disk

use std::path::{Path, PathBuf};

use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::quiz::ScoreResult;
use crate::quiz::report::export_text;

/// Resolve where an export should be written.
///
/// # Behavior
/// - explicit path that is an existing directory, or ends with a separator: default file name inside it
/// - any other explicit path: used as the file path
/// - no explicit path: `export_dir` from config (tilde-expanded), else the
///   user's download directory, else the current directory
pub fn resolve_export_path(explicit: Option<&Path>, config: &QuizConfig) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let raw = path.to_string_lossy();
        let expanded = PathBuf::from(expand_tilde(&raw)?);
        let looks_like_dir = raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR);
        if looks_like_dir || expanded.is_dir() {
            return Ok(expanded.join(&config.export_file_name));
        }
        return Ok(expanded);
    }

    let dir = match &config.export_dir {
        Some(dir) => PathBuf::from(expand_tilde(dir)?),
        None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
    };
    Ok(dir.join(&config.export_file_name))
}

/// Write the export block for `result` and return the path written
pub fn write_export(
    result: &ScoreResult,
    explicit: Option<&Path>,
    config: &QuizConfig,
) -> Result<PathBuf> {
    let path = resolve_export_path(explicit, config)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, export_text(result))?;
    tracing::info!(path = %path.display(), winners = result.winners.len(), "export written");
    Ok(path)
}

/// Expand tilde (~) in paths to the home directory
fn expand_tilde(path: &str) -> Result<String> {
    if !path.starts_with('~') {
        return Ok(path.to_string());
    }

    let home = dirs::home_dir().ok_or_else(|| QuizError::Config {
        message: "Cannot expand '~': home directory not found".into(),
    })?;
    let home = home.to_string_lossy();

    if path == "~" {
        Ok(home.into_owned())
    } else if let Some(rest) = path.strip_prefix("~/") {
        Ok(format!("{}/{}", home.trim_end_matches('/'), rest))
    } else {
        // ~username syntax not supported
        Err(QuizError::Config {
            message: format!("Unsupported tilde expansion: '{}'. Use '~/' or an absolute path.", path),
        })
    }
}
