use std::io::{self, Write};
use std::path::{Path, PathBuf};

use byte_unit::{Byte, UnitType};
use dirs_next as dirs;

use crate::model::ScanReport;

/// Format bytes into a human-readable string.
pub fn format_bytes(size: u64) -> String {
    if size == 0 {
        "0 B".to_string()
    } else {
        let adjusted = Byte::from_u64(size).get_appropriate_unit(UnitType::Decimal);
        format!("{adjusted:#.2}")
    }
}

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        let mut display = PathBuf::from("~");
        display.push(stripped);
        return display.display().to_string();
    }

    path.display().to_string()
}

/// Write the summary table. Labels are padded so the values line up.
pub fn print_table<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out, "Path:   {}", report.root.display())?;
    writeln!(out, "Size:   {} bytes", report.total_size_bytes)?;
    writeln!(out, "Files:  {}", report.total_file_count)?;
    writeln!(out, "Dirs:   {}", report.total_dir_count)?;
    Ok(())
}

/// Write the retained file entries, largest first. Writes nothing when empty.
pub fn print_top_files<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    if report.files.is_empty() {
        return Ok(());
    }
    writeln!(out, "Top files:")?;
    for entry in &report.files {
        writeln!(
            out,
            "  {:>12} bytes ({:>9})  {}",
            entry.size,
            format_bytes(entry.size),
            entry.path.display()
        )?;
    }
    Ok(())
}

pub fn print_warnings<W: Write>(out: &mut W, warnings: &[String]) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "warn: {warning}")?;
    }
    Ok(())
}

pub fn print_json<W: Write>(out: &mut W, report: &ScanReport) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
