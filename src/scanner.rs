use std::fs;
use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::cancel::CancelToken;
use crate::clock::Clock;
use crate::error::ScanError;
use crate::model::{ErrorPolicy, FileEntry, ScanOptions, ScanReport};
use crate::ranking::top_files;

/// Result of one scan together with the warnings collected along the way.
///
/// Warnings are kept even when the scan fails, so the caller can still
/// show what was skipped before a cancellation.
#[derive(Debug)]
pub struct ScanOutcome {
    pub result: Result<ScanReport, ScanError>,
    pub warnings: Vec<String>,
}

impl ScanOutcome {
    pub fn into_parts(self) -> (Result<ScanReport, ScanError>, Vec<String>) {
        (self.result, self.warnings)
    }
}

/// Walk the tree rooted at `root` and aggregate its disk usage.
///
/// Symbolic links below the root are not followed; they are counted as
/// files with the size of the link itself. The root must exist before the
/// walk starts, and any failure on the root itself is fatal. Failures on
/// descendants follow `options.on_error`.
pub fn scan<P, C>(cancel: &CancelToken, root: P, options: ScanOptions, clock: &C) -> ScanOutcome
where
    P: AsRef<Path>,
    C: Clock + ?Sized,
{
    let root = root.as_ref();

    if let Err(err) = fs::metadata(root) {
        let error = if err.kind() == io::ErrorKind::NotFound {
            ScanError::PathNotFound { path: root.to_path_buf() }
        } else {
            ScanError::PathInaccessible { path: root.to_path_buf(), source: err }
        };
        return ScanOutcome { result: Err(error), warnings: Vec::new() };
    }

    let mut tally = Tally::new(root, options);
    let walked = tally.walk(cancel);
    let Tally { totals, files, warnings, .. } = tally;

    let result = walked.map(|()| {
        let files = if options.include_files {
            top_files(files, options.retain_limit())
        } else {
            Vec::new()
        };
        ScanReport {
            root: root.to_path_buf(),
            total_size_bytes: totals.size,
            total_file_count: totals.files,
            total_dir_count: totals.dirs,
            files,
            generated_at: clock.now(),
        }
    });

    ScanOutcome { result, warnings }
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    size: u64,
    files: u64,
    dirs: u64,
}

/// Working state owned by a single walk.
struct Tally<'a> {
    root: &'a Path,
    options: ScanOptions,
    totals: Totals,
    files: Vec<FileEntry>,
    warnings: Vec<String>,
}

impl<'a> Tally<'a> {
    fn new(root: &'a Path, options: ScanOptions) -> Self {
        Self { root, options, totals: Totals::default(), files: Vec::new(), warnings: Vec::new() }
    }

    fn walk(&mut self, cancel: &CancelToken) -> Result<(), ScanError> {
        for item in WalkDir::new(self.root).follow_links(false) {
            if cancel.is_cancelled() {
                return Err(ScanError::Cancelled);
            }

            match item {
                Ok(entry) => self.visit(entry)?,
                Err(err) => self.skip(err)?,
            }
        }
        Ok(())
    }

    fn visit(&mut self, entry: DirEntry) -> Result<(), ScanError> {
        if entry.file_type().is_dir() {
            self.totals.dirs += 1;
            return Ok(());
        }

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => return self.skip(err),
        };

        self.totals.files += 1;
        self.totals.size = self.totals.size.saturating_add(size);
        if self.options.include_files {
            self.files.push(FileEntry::new(entry.into_path(), size));
        }
        Ok(())
    }

    /// Decide whether an entry-level failure ends the walk or becomes a warning.
    fn skip(&mut self, err: walkdir::Error) -> Result<(), ScanError> {
        let depth = err.depth();
        let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.to_path_buf());
        let source = io::Error::from(err);

        if depth == 0 || self.options.on_error == ErrorPolicy::Abort {
            return Err(ScanError::TraversalFailure { path, source });
        }

        self.warnings.push(describe(&path, &source));
        Ok(())
    }
}

fn describe(path: &Path, source: &io::Error) -> String {
    format!("{}: {}", path.display(), source)
}
