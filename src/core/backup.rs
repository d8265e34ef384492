// logyear - core/backup.rs
//
// Flat directory backup: every direct file entry of a source directory is
// copied into a target directory.
//
// Uses `walkdir` pinned to depth 1 as the directory-listing abstraction, so
// the copy is never recursive. Subdirectories are skipped with a warning.
// The first copy failure aborts the run. Copying a file onto itself would
// truncate it, so a target that resolves to the source (as a directory or
// per file) is refused before anything is written.

use crate::core::model::BackupSummary;
use crate::util::error::BackupError;
use std::path::Path;

/// Copy every file directly inside `source` into `target`.
///
/// `target` (and any missing parents) is created if absent. Files with the
/// same name in `target` are overwritten. Entries are processed in file-name
/// order.
pub fn backup_files(source: &Path, target: &Path) -> Result<BackupSummary, BackupError> {
    // fs::metadata rather than Path::exists so a permission problem is not
    // reported as "does not exist" by accident.
    match std::fs::metadata(source) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(BackupError::SourceNotADirectory {
                path: source.to_path_buf(),
            })
        }
        Err(_) => {
            return Err(BackupError::SourceNotFound {
                path: source.to_path_buf(),
            })
        }
    }

    let mut summary = BackupSummary {
        source: source.to_path_buf(),
        target: target.to_path_buf(),
        ..Default::default()
    };

    if !target.is_dir() {
        std::fs::create_dir_all(target).map_err(|e| BackupError::CreateTarget {
            path: target.to_path_buf(),
            source: e,
        })?;
        summary.created_target = true;
        tracing::info!(target = %target.display(), "Created target directory");
    }

    if same_path(source, target) {
        return Err(BackupError::SameDirectory {
            path: target.to_path_buf(),
        });
    }

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        "Backup starting"
    );

    let walker = walkdir::WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| BackupError::ReadDir {
            path: source.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            tracing::warn!(
                path = %entry.path().display(),
                "Skipping non-file entry (backup is not recursive)"
            );
            summary.skipped.push(entry.path().to_path_buf());
            continue;
        }

        let dest = target.join(entry.file_name());
        if same_path(entry.path(), &dest) {
            return Err(BackupError::SameFile {
                path: dest,
                copied_before: summary.copied.len(),
            });
        }
        std::fs::copy(entry.path(), &dest).map_err(|e| BackupError::Copy {
            from: entry.path().to_path_buf(),
            to: dest.clone(),
            copied_before: summary.copied.len(),
            source: e,
        })?;
        tracing::debug!(
            from = %entry.path().display(),
            to = %dest.display(),
            "Copied"
        );
        summary.copied.push(dest);
    }

    tracing::info!(
        copied = summary.copied.len(),
        skipped = summary.skipped.len(),
        "Backup complete"
    );
    Ok(summary)
}

/// True when both paths exist and resolve to the same filesystem object.
fn same_path(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_source() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        fs::write(root.join("b.log"), "2025 b\n").expect("write b.log");
        fs::write(root.join("a.log"), "2025 a\n").expect("write a.log");
        let sub = root.join("nested");
        fs::create_dir(&sub).expect("mkdir nested");
        fs::write(sub.join("deep.log"), "deep\n").expect("write deep.log");
        dir
    }

    #[test]
    fn test_copies_direct_files_in_name_order() {
        let src = make_source();
        let dst = tempfile::tempdir().expect("tempdir");

        let summary = backup_files(src.path(), dst.path()).unwrap();

        let names: Vec<_> = summary
            .copied
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.log", "b.log"]);
        assert_eq!(
            fs::read_to_string(dst.path().join("a.log")).unwrap(),
            "2025 a\n"
        );
        assert!(!summary.created_target);
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let src = make_source();
        let dst = tempfile::tempdir().expect("tempdir");

        let summary = backup_files(src.path(), dst.path()).unwrap();

        assert_eq!(summary.skipped, vec![src.path().join("nested")]);
        assert!(!dst.path().join("nested").exists());
        assert!(!dst.path().join("deep.log").exists());
    }

    #[test]
    fn test_creates_missing_target() {
        let src = make_source();
        let dst = tempfile::tempdir().expect("tempdir");
        let target = dst.path().join("backups").join("today");

        let summary = backup_files(src.path(), &target).unwrap();

        assert!(summary.created_target);
        assert!(target.join("b.log").is_file());
    }

    #[test]
    fn test_overwrites_existing_files() {
        let src = make_source();
        let dst = tempfile::tempdir().expect("tempdir");
        fs::write(dst.path().join("a.log"), "stale").expect("write stale");

        backup_files(src.path(), dst.path()).unwrap();

        assert_eq!(
            fs::read_to_string(dst.path().join("a.log")).unwrap(),
            "2025 a\n"
        );
    }

    #[test]
    fn test_missing_source() {
        let dst = tempfile::tempdir().expect("tempdir");
        let result = backup_files(&dst.path().join("nope"), dst.path());
        assert!(
            matches!(result, Err(BackupError::SourceNotFound { .. })),
            "expected SourceNotFound, got {result:?}"
        );
    }

    #[test]
    fn test_source_is_a_file() {
        let src = make_source();
        let dst = tempfile::tempdir().expect("tempdir");
        let result = backup_files(&src.path().join("a.log"), dst.path());
        assert!(matches!(
            result,
            Err(BackupError::SourceNotADirectory { .. })
        ));
    }

    #[test]
    fn test_target_equal_to_source_is_refused() {
        let src = tempfile::tempdir().expect("tempdir");
        fs::write(src.path().join("app.log"), "2025 important\n").expect("write app.log");

        let result = backup_files(src.path(), src.path());

        assert!(
            matches!(result, Err(BackupError::SameDirectory { .. })),
            "expected SameDirectory, got {result:?}"
        );
        assert_eq!(
            fs::read_to_string(src.path().join("app.log")).unwrap(),
            "2025 important\n"
        );
    }

    #[test]
    fn test_target_spelled_differently_is_still_the_source() {
        let src = make_source();
        let alias = src.path().join("nested").join("..");

        let result = backup_files(src.path(), &alias);

        assert!(matches!(result, Err(BackupError::SameDirectory { .. })));
        assert_eq!(
            fs::read_to_string(src.path().join("a.log")).unwrap(),
            "2025 a\n"
        );
    }

    #[test]
    fn test_target_nested_in_source() {
        let src = make_source();
        let target = src.path().join("backup");

        let summary = backup_files(src.path(), &target).unwrap();

        assert!(summary.created_target);
        assert_eq!(summary.copied.len(), 2);
        assert!(summary.skipped.contains(&target));
        assert_eq!(fs::read_to_string(target.join("b.log")).unwrap(), "2025 b\n");
        assert_eq!(
            fs::read_to_string(src.path().join("b.log")).unwrap(),
            "2025 b\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_linked_to_its_destination_is_refused() {
        let src = tempfile::tempdir().expect("tempdir");
        let dst = tempfile::tempdir().expect("tempdir");
        fs::write(dst.path().join("app.log"), "keep me\n").expect("write app.log");
        std::os::unix::fs::symlink(dst.path().join("app.log"), src.path().join("app.log"))
            .expect("symlink");

        let result = backup_files(src.path(), dst.path());

        assert!(
            matches!(result, Err(BackupError::SameFile { .. })),
            "expected SameFile, got {result:?}"
        );
        assert_eq!(
            fs::read_to_string(dst.path().join("app.log")).unwrap(),
            "keep me\n"
        );
    }

    #[test]
    fn test_empty_source_copies_nothing() {
        let src = tempfile::tempdir().expect("tempdir");
        let dst = tempfile::tempdir().expect("tempdir");
        let summary = backup_files(src.path(), dst.path()).unwrap();
        assert!(summary.copied.is_empty());
        assert!(summary.skipped.is_empty());
    }
}
