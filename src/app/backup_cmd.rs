// logyear - app/backup_cmd.rs
//
// The backup command: runs core::backup and turns the outcome into
// messages and an exit code.

use crate::core::backup;
use crate::core::model::BackupSummary;
use crate::util::constants;
use crate::util::error::{ExportError, Result};
use std::io::Write;
use std::path::Path;

/// Back up `source` into `target`, reporting on `out` / `err`.
///
/// Returns `EXIT_OK` when every file was copied and the report was written,
/// `EXIT_FAILURE` otherwise.
pub fn run<W: Write, E: Write>(source: &Path, target: &Path, out: W, mut err: E) -> i32 {
    match execute(source, target, out) {
        Ok(()) => constants::EXIT_OK,
        Err(e) => {
            tracing::error!(error = %e, "Backup failed");
            let _ = writeln!(err, "Error: {e}");
            constants::EXIT_FAILURE
        }
    }
}

fn execute<W: Write>(source: &Path, target: &Path, out: W) -> Result<()> {
    let summary = backup::backup_files(source, target)?;
    write_summary(&summary, out).map_err(ExportError::from)?;
    Ok(())
}

fn write_summary<W: Write>(summary: &BackupSummary, mut out: W) -> std::io::Result<()> {
    writeln!(out, "Backup completed.")?;
    writeln!(
        out,
        "Copied {} file(s) from '{}' to '{}'; skipped {} non-file entr{}.",
        summary.copied.len(),
        summary.source.display(),
        summary.target.display(),
        summary.skipped.len(),
        if summary.skipped.len() == 1 { "y" } else { "ies" }
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_successful_backup_reports_counts() {
        let src = tempfile::tempdir().expect("tempdir");
        let dst = tempfile::tempdir().expect("tempdir");
        fs::write(src.path().join("a.log"), "a").expect("write");
        fs::create_dir(src.path().join("old")).expect("mkdir");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(src.path(), dst.path(), &mut out, &mut err);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(code, constants::EXIT_OK);
        assert!(out.starts_with("Backup completed.\n"));
        assert!(out.contains("Copied 1 file(s) from '"));
        assert!(out.contains(&src.path().display().to_string()));
        assert!(out.contains("skipped 1 non-file entry."));
        assert!(err.is_empty());
    }

    #[test]
    fn test_same_directory_fails_without_touching_files() {
        let src = tempfile::tempdir().expect("tempdir");
        fs::write(src.path().join("app.log"), "2025 important\n").expect("write");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(src.path(), src.path(), &mut out, &mut err);

        assert_eq!(code, constants::EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().contains("is the source directory"));
        assert_eq!(
            fs::read_to_string(src.path().join("app.log")).unwrap(),
            "2025 important\n"
        );
    }

    /// Writer that refuses every write.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_write_failure_exits_nonzero() {
        let src = tempfile::tempdir().expect("tempdir");
        let dst = tempfile::tempdir().expect("tempdir");
        fs::write(src.path().join("a.log"), "a").expect("write");

        let mut err = Vec::new();
        let code = run(src.path(), dst.path(), ClosedPipe, &mut err);

        assert_eq!(code, constants::EXIT_FAILURE);
        assert!(String::from_utf8(err).unwrap().contains("Output I/O error"));
    }

    #[test]
    fn test_missing_source_fails() {
        let dst = tempfile::tempdir().expect("tempdir");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&dst.path().join("absent"), dst.path(), &mut out, &mut err);

        assert_eq!(code, constants::EXIT_FAILURE);
        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("does not exist"), "stderr was {err:?}");
    }
}
