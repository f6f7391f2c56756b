//! # Srcdump
//!
//! `srcdump` walks a directory tree, reads every file whose name ends with one of a set of
//! extensions, and concatenates them into a single plain-text report.
//!
//! Directories named in the exclude list are pruned at any depth before they are entered.
//! A file that cannot be read (permissions, invalid UTF-8, dangling symlink) does not stop
//! the walk; its block in the report carries `Error reading file: <message>` instead.
//!
//! # Features
//!
//! - `logging` (default): Enables logging via the `tracing` crate, and a stderr subscriber
//!   in the `srcdump` binary.
//!
//! # Example
//!
//! ```no_run
//! use srcdump::{DumpBuilder, collect, output};
//!
//! let options = DumpBuilder::new("src")
//!     .exclude_dirs(["node_modules", "dist"])
//!     .extensions([".ts", ".tsx"])
//!     .build();
//!
//! let collection = collect(&options).expect("Failed to scan directory");
//! output::write_report("info.txt", &collection).expect("Failed to write report");
//!
//! for record in &collection.records {
//!     println!("{} (error: {})", record.path.display(), record.is_error());
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::collect;
pub use error::DumpError;
pub use options::{
    DEFAULT_EXCLUDE, DEFAULT_EXTENSIONS, DEFAULT_ROOT, DumpBuilder, DumpOptions, parse_list,
};
pub use types::{Collection, FileContent, FileRecord};
