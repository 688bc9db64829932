//! ZIP packaging of rendered PNGs.
//!
//! Entries are flattened (file name only) and added in sorted order so the
//! archive layout is reproducible. The archive is finalized only after every
//! entry has been written.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::AppError;
use crate::io::export::ensure_dir;
use crate::report::{BatchReport, ItemFailure};

/// Outcome of an archive run.
#[derive(Debug, Clone)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub bytes: u64,
    /// `written` holds the source files that made it into the archive.
    pub report: BatchReport,
}

/// Zip every regular file directly inside `source_dir` into `zip_path`.
pub fn create_archive(source_dir: &Path, zip_path: &Path) -> Result<ArchiveSummary, AppError> {
    if !source_dir.is_dir() {
        return Err(AppError::new(
            2,
            format!(
                "PNG directory '{}' not found; run `convert` first.",
                source_dir.display()
            ),
        ));
    }
    if let Some(parent) = zip_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let files = list_archive_inputs(source_dir)?;
    let file = File::create(zip_path)
        .map_err(|e| AppError::new(4, format!("Failed to create archive '{}': {e}", zip_path.display())))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let result = add_entry(&mut zip, &path, options);
        if let Err(failure) = &result {
            warn!(file = %failure.item, "skipping archive entry: {}", failure.message);
        }
        results.push(result);
    }

    let writer = zip
        .finish()
        .map_err(|e| AppError::new(4, format!("Failed to finalize archive '{}': {e}", zip_path.display())))?;
    writer
        .into_inner()
        .map_err(|e| AppError::new(4, format!("Failed to flush archive '{}': {}", zip_path.display(), e.error())))?;

    let bytes = fs::metadata(zip_path).map(|m| m.len()).unwrap_or(0);
    let report = BatchReport::from_results(results);
    info!(
        path = %zip_path.display(),
        entries = report.written.len(),
        bytes,
        "archive created"
    );

    Ok(ArchiveSummary {
        path: zip_path.to_path_buf(),
        bytes,
        report,
    })
}

fn list_archive_inputs(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = fs::read_dir(dir).map_err(|e| AppError::directory("read PNG", dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

fn add_entry<W>(zip: &mut ZipWriter<W>, path: &Path, options: SimpleFileOptions) -> Result<PathBuf, ItemFailure>
where
    W: Write + io::Seek,
{
    let fail = |message: String| ItemFailure {
        item: path.display().to_string(),
        message,
    };

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| fail("file name is not valid UTF-8".to_string()))?;
    // Read fully before starting the entry so an unreadable file never leaves
    // a half-written entry behind.
    let data = fs::read(path).map_err(|e| fail(format!("failed to read: {e}")))?;

    zip.start_file(name, options)
        .map_err(|e| fail(format!("failed to start entry: {e}")))?;
    if let Err(e) = zip.write_all(&data) {
        // Drop the partial entry so it cannot end up in the central directory.
        if let Err(abort) = zip.abort_file() {
            warn!(file = %path.display(), error = %abort, "failed to discard partial archive entry");
        }
        return Err(fail(format!("failed to write entry: {e}")));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::{Cursor, Read, Seek, SeekFrom};
    use std::rc::Rc;

    /// In-memory sink that rejects the first large write once armed.
    struct FailOnceWriter {
        inner: Cursor<Vec<u8>>,
        armed: Rc<Cell<bool>>,
    }

    impl Write for FailOnceWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            // Entry headers are small; only compressed data arrives in large chunks.
            if buf.len() >= 8 * 1024 && self.armed.replace(false) {
                return Err(io::Error::other("disk full"));
            }
            self.inner.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.inner.flush()
        }
    }

    impl Seek for FailOnceWriter {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    fn incompressible(len: usize) -> Vec<u8> {
        let mut state = 0x2545_f491_u32;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect()
    }

    fn entry_names(zip_path: &Path) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn archives_files_flat_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let png_dir = dir.path().join("png");
        fs::create_dir_all(png_dir.join("nested")).unwrap();
        fs::write(png_dir.join("18.000.png"), b"eighteen").unwrap();
        fs::write(png_dir.join("17.555.png"), b"seventeen").unwrap();
        fs::write(png_dir.join("nested").join("ignored.png"), b"x").unwrap();

        let zip_path = dir.path().join("zip").join("badges.zip");
        let summary = create_archive(&png_dir, &zip_path).unwrap();

        assert!(summary.report.is_clean());
        assert_eq!(summary.report.written.len(), 2);
        assert!(summary.bytes > 0);
        assert_eq!(entry_names(&zip_path), vec!["17.555.png", "18.000.png"]);

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut entry = archive.by_name("17.555.png").unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        assert_eq!(content, "seventeen");
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn empty_source_dir_produces_empty_archive() {
        let dir = tempfile::tempdir().unwrap();
        let png_dir = dir.path().join("png");
        fs::create_dir_all(&png_dir).unwrap();
        let zip_path = dir.path().join("out.zip");

        let summary = create_archive(&png_dir, &zip_path).unwrap();
        assert!(summary.report.written.is_empty());
        assert!(entry_names(&zip_path).is_empty());
    }

    #[test]
    fn missing_source_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = create_archive(&dir.path().join("png"), &dir.path().join("out.zip")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("run `convert` first"));
        assert!(!dir.path().join("out.zip").exists());
    }

    #[test]
    fn failed_entry_write_leaves_no_partial_entry() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("17.000.png");
        let broken = dir.path().join("18.000.png");
        let last = dir.path().join("19.000.png");
        fs::write(&first, b"first").unwrap();
        fs::write(&broken, incompressible(256 * 1024)).unwrap();
        fs::write(&last, b"last").unwrap();

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(9));
        let armed = Rc::new(Cell::new(false));
        let mut zip = ZipWriter::new(FailOnceWriter {
            inner: Cursor::new(Vec::new()),
            armed: Rc::clone(&armed),
        });

        add_entry(&mut zip, &first, options).unwrap();
        armed.set(true);

        let failure = add_entry(&mut zip, &broken, options).unwrap_err();
        assert!(failure.message.contains("failed to write entry"), "{}", failure.message);
        assert!(!armed.get());
        add_entry(&mut zip, &last, options).unwrap();

        let writer = zip.finish().unwrap();
        let end = writer.inner.position() as usize;
        let mut bytes = writer.inner.into_inner();
        bytes.truncate(end);

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert_eq!(archive.len(), 2);
        assert!(names.contains(&"17.000.png".to_string()));
        assert!(names.contains(&"19.000.png".to_string()));
        let mut content = String::new();
        archive.by_name("19.000.png").unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "last");
    }
}
