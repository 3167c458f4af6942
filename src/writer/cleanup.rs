use super::regions::CustomRegions;
use super::side_file_path;
use crate::artifact::markers;
use crate::artifact::FileExtension;
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Results of a delete-all-generated pass.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub deleted: Vec<PathBuf>,
    /// Files whose custom regions were saved to a side-file before deletion
    pub backed_up: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Delete every generator-owned file under `root`.
///
/// A customizable file has its custom regions backed up to a side-file
/// first, so the next generation run can reinject them. Files whose first
/// line lacks the generated label are never touched, and a failure on one
/// path never aborts the pass.
pub fn delete_generated(root: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if FileExtension::from_path(path).is_none() {
            continue;
        }
        match delete_one(path) {
            Ok(None) => {}
            Ok(Some(backed_up)) => {
                if backed_up {
                    report.backed_up.push(path.to_path_buf());
                }
                report.deleted.push(path.to_path_buf());
            }
            Err(err) => {
                tracing::error!(path = ?path, error = %err, "cleanup failed");
                report.failed.push((path.to_path_buf(), err.to_string()));
            }
        }
    }
    report
}

/// Delete a single file if generator-owned. Returns `Some(backed_up)` when
/// the file was deleted, `None` when it was user-owned.
fn delete_one(path: &Path) -> anyhow::Result<Option<bool>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;
    let first = content.lines().next().unwrap_or("");
    if !markers::is_generated_header(first) {
        return Ok(None);
    }
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    let regions = CustomRegions::extract(&lines);
    let backed_up = !regions.is_empty();
    if backed_up {
        let side = side_file_path(path);
        std::fs::write(&side, regions.to_side_file())
            .with_context(|| format!("failed to write side-file {side:?}"))?;
    }
    std::fs::remove_file(path).with_context(|| format!("failed to delete {path:?}"))?;
    Ok(Some(backed_up))
}
