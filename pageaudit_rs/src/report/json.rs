use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::{ensure_dir, write_file};
use crate::types::AnalysisResult;

/// Serialize the full result as pretty JSON into `out_dir/file_name`.
pub fn save_results(result: &AnalysisResult, out_dir: &Path, file_name: &str) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    write_json(result, out_dir, file_name)
}

/// Write-only half of [`save_results`]; `out_dir` must already exist.
pub(crate) fn write_json(
    result: &AnalysisResult,
    out_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let path = out_dir.join(file_name);
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    write_file(&path, &json)?;
    tracing::info!(path = %path.display(), "wrote JSON analysis");
    Ok(path)
}
