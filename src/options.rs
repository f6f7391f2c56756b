use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_EXCLUDE: &str = "node_modules";
pub const DEFAULT_EXTENSIONS: &str = ".ts,.tsx,.js,.jsx";

#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub root: PathBuf,
    /// Directory names pruned at any depth below `root`.
    pub exclude_dirs: Vec<String>,
    /// File name suffixes to collect. An empty entry matches every file.
    pub extensions: Vec<String>,
    pub follow_links: bool,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            exclude_dirs: parse_list(DEFAULT_EXCLUDE),
            extensions: parse_list(DEFAULT_EXTENSIONS),
            follow_links: false,
        }
    }
}
impl DumpOptions {
    pub(crate) fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }
    pub(crate) fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Splits a comma-separated flag value. Entries are kept verbatim.
pub fn parse_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

#[derive(Debug, Default)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl DumpBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DumpOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude_dirs = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn extensions<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = suffixes.into_iter().map(Into::into).collect();
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_keeps_entries_verbatim() {
        assert_eq!(parse_list(".ts,.tsx"), vec![".ts", ".tsx"]);
        assert_eq!(parse_list(".ts, .js"), vec![".ts", " .js"]);
        assert_eq!(parse_list(""), vec![""]);
    }

    #[test]
    fn defaults_match_cli_defaults() {
        let options = DumpOptions::default();
        assert_eq!(options.root, PathBuf::from("src"));
        assert_eq!(options.exclude_dirs, vec!["node_modules"]);
        assert_eq!(options.extensions, vec![".ts", ".tsx", ".js", ".jsx"]);
        assert!(!options.follow_links);
    }

    #[test]
    fn extension_match_is_a_plain_suffix_check() {
        let options = DumpBuilder::new(".").extensions([".ts"]).build();
        assert!(options.matches_extension("a.ts"));
        assert!(options.matches_extension("types.d.ts"));
        assert!(!options.matches_extension("a.tsx"));
        assert!(!options.matches_extension("a.TS"));

        let everything = DumpBuilder::new(".").extensions([""]).build();
        assert!(everything.matches_extension("Makefile"));
    }
}
