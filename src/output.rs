//! Report and summary formatting for collected files.
//!
//! The report is a fixed plain-text layout: a header with the file count,
//! then one delimited block per file in collection order.

use crate::{Collection, DumpError, DumpOptions};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of the `=` separator around the header and after each file.
pub const MAJOR_SEPARATOR_WIDTH: usize = 100;
/// Width of the `-` separator between a file's path and its content.
pub const MINOR_SEPARATOR_WIDTH: usize = 80;

/// Formats the collection into the report text.
pub fn format_report(collection: &Collection) -> String {
    let mut out = Vec::with_capacity(1024);
    render(&mut out, collection).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}

/// Writes the report for `collection` to `path`, replacing any existing file.
pub fn write_report(path: impl AsRef<Path>, collection: &Collection) -> Result<(), DumpError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DumpError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer, collection).map_err(|e| DumpError::io(path, e))?;
    writer.flush().map_err(|e| DumpError::io(path, e))?;
    Ok(())
}

fn render<W: Write>(out: &mut W, collection: &Collection) -> std::io::Result<()> {
    let major = "=".repeat(MAJOR_SEPARATOR_WIDTH);
    let minor = "-".repeat(MINOR_SEPARATOR_WIDTH);

    writeln!(out, "Application Source Code - {} files", collection.len())?;
    writeln!(out, "{}\n", major)?;

    for record in &collection.records {
        writeln!(out, "File: {}", record.path.display())?;
        writeln!(out, "{}", minor)?;
        writeln!(out, "{}\n", record.content)?;
        writeln!(out, "{}\n", major)?;
    }
    Ok(())
}

/// The four-line run summary printed after the report is saved.
pub struct Summary<'a> {
    pub options: &'a DumpOptions,
    pub output: &'a Path,
    pub processed: usize,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed {} files from '{}'",
            self.processed,
            self.options.root.display()
        )?;
        writeln!(f, "Excluded directories: {}", self.options.exclude_dirs.join(", "))?;
        writeln!(f, "Included extensions: {}", self.options.extensions.join(", "))?;
        write!(f, "Data saved to '{}'", self.output.display())
    }
}
