//! Path and filter utilities

use std::ffi::OsStr;
use std::path::Path;

/// True for `.`, `..` and dotfiles.
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// True if the last component of `path` is hidden.
/// Paths without a file name (`.`, `..`, `foo/..`, `/`) are never hidden: they were named explicitly.
pub fn is_hidden_path(path: &Path) -> bool {
    path.file_name().is_some_and(is_hidden_name)
}

/// True if the extension is `pdf` in any case. Only used to warn about misnamed files.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
