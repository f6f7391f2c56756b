use crate::error::DumpError;
use crate::options::DumpOptions;
use crate::types::{Collection, FileContent, FileRecord};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
/// Walks the tree depth first, listing the files of a directory before any of
/// its subdirectories.
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &DumpOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_path(|a, b| (a.is_dir(), a).cmp(&(b.is_dir(), b)));
        let filter = options.clone();
        builder.filter_entry(move |entry| !is_pruned(&filter, entry));
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = DirEntry> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable entry: {}", _e);
                None
            }
        })
    }
}
fn is_pruned(options: &DumpOptions, entry: &DirEntry) -> bool {
    if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let pruned = entry
        .file_name()
        .to_str()
        .is_some_and(|name| options.is_excluded_dir(name));
    #[cfg(feature = "logging")]
    if pruned {
        tracing::debug!("Pruning excluded directory: {}", entry.path().display());
    }
    pruned
}
fn is_candidate(options: &DumpOptions, entry: &DirEntry) -> bool {
    if entry.depth() == 0 || entry.path().is_dir() {
        return false;
    }
    options.matches_extension(&entry.file_name().to_string_lossy())
}
fn read_file_content(path: &Path) -> FileContent {
    let mut content = String::new();
    let result = File::open(path).and_then(|mut file| file.read_to_string(&mut content));
    match result {
        Ok(_) => FileContent::Text(normalize_newlines(content)),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            FileContent::ReadError(e.to_string())
        }
    }
}
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
fn check_root(root: &Path) -> Result<(), DumpError> {
    let metadata = fs::metadata(root).map_err(|e| DumpError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(DumpError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| DumpError::io(root, e))?;
    Ok(())
}
/// Walks `options.root` and reads every file whose name ends with one of
/// `options.extensions`, skipping directories named in `options.exclude_dirs`.
///
/// Per-file read failures are recorded in the returned [`Collection`] rather
/// than returned as errors.
///
/// # Errors
///
/// Returns an error if the root does not exist, is not a directory, or
/// cannot be listed.
pub fn collect(options: &DumpOptions) -> Result<Collection, DumpError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting walk with root: {}", options.root.display());
    check_root(&options.root)?;
    let mut records = Vec::new();
    for entry in Walker::new(options).into_iter() {
        if !is_candidate(options, &entry) {
            continue;
        }
        let path = entry.into_path();
        let content = read_file_content(&path);
        #[cfg(feature = "logging")]
        tracing::debug!("Collected {}", path.display());
        records.push(FileRecord { path, content });
    }
    let collection = Collection { records };
    #[cfg(feature = "logging")]
    tracing::info!(
        "Collected {} files ({} unreadable) from {}",
        collection.len(),
        collection.read_errors(),
        options.root.display()
    );
    Ok(collection)
}
