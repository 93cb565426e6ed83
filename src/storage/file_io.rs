//! Line-oriented file I/O
//!
//! Each function opens, reads or writes, and closes its file before
//! returning. A missing file reads as empty.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::ExpenseError;

/// Read every line of a file, returning `None` if the file doesn't exist
///
/// Line terminators (`\n` or `\r\n`) are stripped.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, ExpenseError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ExpenseError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to read {} line {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        lines.push(line);
    }

    Ok(Some(lines))
}

/// Append a single line, creating the file and its parent directory if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .map_err(|e| ExpenseError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", path.display(), e)))
}

/// Write lines atomically (write to temp, then rename)
///
/// The target is either fully replaced or left untouched.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), ExpenseError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Io(format!("Failed to create temp file: {}", e)))?;

    if let Err(e) = write_all_lines(file, lines) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Io(format!("Failed to rename temp file: {}", e))
    })
}

/// Truncate the file and write lines in place
///
/// A failure partway through can leave the file incomplete.
pub fn write_lines_in_place<P, I, S>(path: P, lines: I) -> Result<(), ExpenseError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = File::create(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    write_all_lines(file, lines)
}

fn write_all_lines<I, S>(file: File, lines: I) -> Result<(), ExpenseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| ExpenseError::Io(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Io(format!("Failed to sync data: {}", e)))
}

fn ensure_parent(path: &Path) -> Result<(), ExpenseError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}
