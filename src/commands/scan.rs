use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cancel::CancelToken;
use crate::clock::SystemClock;
use crate::config::{Config, Overrides, process_env, resolve_options};
use crate::error::AppError;
use crate::format::{print_json, print_table, print_top_files, print_warnings};
use crate::model::ScanReport;
use crate::scanner::scan;

pub struct ScanRequest {
    pub root: PathBuf,
    pub overrides: Overrides,
    pub json: bool,
    pub timeout: Option<Duration>,
}

pub fn execute_scan(request: ScanRequest) -> Result<ScanReport, AppError> {
    let config = Config::load()?;
    let options = resolve_options(request.overrides, process_env, &config)?;
    debug!(?options, root = %request.root.display(), "resolved scan options");

    let cancel = CancelToken::new();
    if let Some(timeout) = request.timeout {
        cancel.cancel_after(timeout);
    }

    let started = Instant::now();
    let (result, warnings) = scan(&cancel, &request.root, options, &SystemClock).into_parts();
    debug!(elapsed = ?started.elapsed(), warnings = warnings.len(), "scan finished");

    // Warnings go out even when the scan itself failed.
    print_warnings(&mut io::stderr().lock(), &warnings)?;
    let report = result?;

    let mut out = io::stdout().lock();
    if request.json {
        print_json(&mut out, &report)?;
    } else {
        print_table(&mut out, &report)?;
        print_top_files(&mut out, &report)?;
    }
    out.flush()?;

    Ok(report)
}
