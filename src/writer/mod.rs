//! # Writer Module
//!
//! Custom-code preservation and file emission.
//!
//! The writer exclusively owns every destination path it touches during a
//! run. Each write request runs a small state machine:
//!
//! - **Fresh** - no existing file: write the skeleton, restoring regions
//!   from a side-file if one was left by a previous cleanup.
//! - **Owned by generator** - the existing first line carries the generated
//!   label: extract custom regions, rewrite, reinject, drop the side-file.
//! - **Owned by user** - the first line lacks the label: the file is never
//!   read further, written, or deleted (overridable per run with `force`).
//!
//! Group-file mode concatenates the items of a `(unit, kind)` into one file
//! per extension at the shortest common ancestor of the member sub-paths,
//! each under a single header label; marker pairs still match per
//! concatenated region.
//!
//! An I/O failure on one path is logged and recorded; sibling writes
//! proceed.


mod cleanup;
mod regions;

pub use cleanup::{delete_generated, CleanupReport};
pub use regions::CustomRegions;

use crate::artifact::markers;
use crate::artifact::{ArtifactKind, FileExtension, GeneratedItem, ItemLabel, TargetUnit};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Suffix of the sidecar file that carries custom regions across a cleanup.
pub const SIDE_FILE_SUFFIX: &str = ".custom";

/// What happened to one destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteAction {
    Written,
    /// Dry run: the path would have been written
    WouldWrite,
    /// User-owned file, left untouched
    SkippedUserOwned,
}

/// Per-`(unit, kind)` write results; failures never abort siblings.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl WriteReport {
    pub fn merge(&mut self, other: WriteReport) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }
}

/// Emits generated items under a destination root, one subdirectory per
/// target unit.
#[derive(Debug, Clone)]
pub struct Writer {
    root: PathBuf,
    dry_run: bool,
    force: bool,
}

impl Writer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            force: false,
        }
    }

    /// Plan only: report actions without touching the file system.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Treat user-owned files as generator-owned for this run.
    pub fn force(mut self, enabled: bool) -> Self {
        self.force = enabled;
        self
    }

    /// Destination path of an item in per-file mode.
    pub fn destination(&self, item: &GeneratedItem) -> PathBuf {
        self.root.join(item.unit.as_str()).join(&item.sub_path)
    }

    /// Write every item of one `(unit, kind)` grouping.
    ///
    /// The caller guarantees groupings are disjoint per destination path,
    /// which is what makes the writer phase safe to fan out.
    pub fn write_items(
        &self,
        unit: TargetUnit,
        kind: ArtifactKind,
        items: &[GeneratedItem],
        grouped: bool,
    ) -> WriteReport {
        let mut report = WriteReport::default();
        if items.is_empty() {
            return report;
        }
        if grouped {
            // Kinds that mix extensions (a component class plus its
            // template) get one group file per extension; a single header
            // comment style cannot cover both.
            let mut partitions: Vec<(FileExtension, Vec<&GeneratedItem>)> = Vec::new();
            for item in items {
                match partitions.iter_mut().find(|(ext, _)| *ext == item.extension) {
                    Some((_, members)) => members.push(item),
                    None => partitions.push((item.extension, vec![item])),
                }
            }
            for (_, members) in &partitions {
                let (path, header, lines) = self.group_file(unit, kind, members);
                self.record(&mut report, &path, &header, &lines);
            }
        } else {
            for item in items {
                let path = self.destination(item);
                self.record(&mut report, &path, &item.header_line(), &item.source);
            }
        }
        report
    }

    fn record(&self, report: &mut WriteReport, path: &Path, header: &str, skeleton: &[String]) {
        match self.write_one(path, header, skeleton) {
            Ok(WriteAction::SkippedUserOwned) => {
                tracing::info!(path = ?path, "skipping user-owned file");
                report.skipped.push(path.to_path_buf());
            }
            Ok(_) => report.written.push(path.to_path_buf()),
            Err(err) => {
                tracing::error!(path = ?path, error = %err, "write failed");
                report.failed.push((path.to_path_buf(), err.to_string()));
            }
        }
    }

    /// The per-path state machine.
    fn write_one(&self, path: &Path, header: &str, skeleton: &[String]) -> anyhow::Result<WriteAction> {
        let side_path = side_file_path(path);
        let regions = if path.exists() {
            let existing = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read existing file {path:?}"))?;
            let first = existing.lines().next().unwrap_or("");
            if !markers::is_generated_header(first) && !self.force {
                return Ok(WriteAction::SkippedUserOwned);
            }
            let lines: Vec<String> = existing.lines().map(str::to_string).collect();
            CustomRegions::extract(&lines)
        } else if side_path.exists() {
            let saved = std::fs::read_to_string(&side_path)
                .with_context(|| format!("failed to read side-file {side_path:?}"))?;
            let lines: Vec<String> = saved.lines().map(str::to_string).collect();
            CustomRegions::extract(&lines)
        } else {
            CustomRegions::default()
        };

        let merged = regions.merge_into(skeleton);
        let mut content = String::with_capacity(merged.iter().map(|l| l.len() + 1).sum::<usize>() + header.len() + 1);
        content.push_str(header);
        content.push('\n');
        for line in &merged {
            content.push_str(line);
            content.push('\n');
        }

        if self.dry_run {
            return Ok(WriteAction::WouldWrite);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {parent:?}"))?;
        }
        std::fs::write(path, content).with_context(|| format!("failed to write {path:?}"))?;
        if side_path.exists() {
            std::fs::remove_file(&side_path)
                .with_context(|| format!("failed to remove side-file {side_path:?}"))?;
        }
        Ok(WriteAction::Written)
    }

    /// Concatenate one extension's worth of a grouping into one file at the
    /// shortest common ancestor of the member sub-paths, with a single
    /// header label.
    fn group_file(
        &self,
        unit: TargetUnit,
        kind: ArtifactKind,
        items: &[&GeneratedItem],
    ) -> (PathBuf, String, Vec<String>) {
        let ancestor = common_ancestor(items);
        let extension = items[0].extension;
        let path = self
            .root
            .join(unit.as_str())
            .join(ancestor)
            .join(format!("{kind}.{}", extension.as_str()));
        let label = items
            .iter()
            .find_map(|i| match &i.label {
                ItemLabel::Special(name) => Some(ItemLabel::Special(name.clone())),
                ItemLabel::Default => None,
            })
            .unwrap_or(ItemLabel::Default);
        let header = markers::header_line(extension, &label);
        let mut lines = Vec::new();
        for (ix, item) in items.iter().enumerate() {
            if ix > 0 {
                lines.push(String::new());
            }
            lines.extend(item.source.iter().cloned());
        }
        (path, header, lines)
    }
}

/// Sidecar path for a destination, e.g. `OrderSet.cs` → `OrderSet.cs.custom`.
pub fn side_file_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(SIDE_FILE_SUFFIX);
    PathBuf::from(name)
}

/// Shortest common ancestor directory of the items' sub-paths.
fn common_ancestor(items: &[&GeneratedItem]) -> PathBuf {
    let mut ancestor: Option<Vec<std::path::Component<'_>>> = None;
    for item in items {
        let dir = item.sub_path.parent().unwrap_or(Path::new(""));
        let components: Vec<_> = dir.components().collect();
        ancestor = Some(match ancestor {
            None => components,
            Some(current) => current
                .into_iter()
                .zip(components)
                .take_while(|(a, b)| a == b)
                .map(|(a, _)| a)
                .collect(),
        });
    }
    ancestor.unwrap_or_default().into_iter().collect()
}
