//! Command-line interface for srcdump.
//!
//! Scans a directory for source files and saves their contents into one text report.

use clap::Parser;
use srcdump::output::{self, Summary};
use srcdump::{
    DEFAULT_EXCLUDE, DEFAULT_EXTENSIONS, DEFAULT_ROOT, DumpBuilder, DumpOptions, collect,
    parse_list,
};
use std::path::PathBuf;
use std::process::exit;

/// srcdump — extract source files into a single text document
#[derive(Parser, Debug)]
#[command(name = "srcdump", version, about, long_about = None)]
struct Cli {
    /// Directory to search for source files
    #[arg(short, long, default_value = DEFAULT_ROOT)]
    directory: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "info.txt")]
    output: PathBuf,

    /// Comma-separated list of directory names to exclude
    #[arg(short = 'x', long, default_value = DEFAULT_EXCLUDE)]
    exclude: String,

    /// Comma-separated list of file extensions to include
    #[arg(short, long, default_value = DEFAULT_EXTENSIONS)]
    extensions: String,

    /// Follow symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> (DumpOptions, PathBuf, u8) {
        let options = DumpBuilder::new(self.directory)
            .exclude_dirs(parse_list(&self.exclude))
            .extensions(parse_list(&self.extensions))
            .follow_links(self.follow_links)
            .build();
        (options, self.output, self.verbose)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: u8) {}

fn main() {
    let cli = Cli::parse();
    let (options, output_path, verbose) = cli.into_options();
    init_logging(verbose);

    let collection = match collect(&options) {
        Ok(collection) => collection,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = output::write_report(&output_path, &collection) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    let summary = Summary {
        options: &options,
        output: &output_path,
        processed: collection.len(),
    };
    println!("{}", summary);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_flags() {
        let cli = Cli::try_parse_from(["srcdump"]).unwrap();
        let (options, output, verbose) = cli.into_options();
        assert_eq!(options.root, PathBuf::from("src"));
        assert_eq!(output, PathBuf::from("info.txt"));
        assert_eq!(options.exclude_dirs, vec!["node_modules"]);
        assert_eq!(options.extensions, vec![".ts", ".tsx", ".js", ".jsx"]);
        assert_eq!(verbose, 0);
    }

    #[test]
    fn short_flags_are_split_on_commas() {
        let cli = Cli::try_parse_from([
            "srcdump", "-d", "lib", "-o", "out.txt", "-x", "dist,build", "-e", ".py", "-vv",
        ])
        .unwrap();
        let (options, output, verbose) = cli.into_options();
        assert_eq!(options.root, PathBuf::from("lib"));
        assert_eq!(output, PathBuf::from("out.txt"));
        assert_eq!(options.exclude_dirs, vec!["dist", "build"]);
        assert_eq!(options.extensions, vec![".py"]);
        assert_eq!(verbose, 2);
    }
}
