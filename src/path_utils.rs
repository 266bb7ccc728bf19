use std::path::Path;

/// Split a file name into stem and extension at the last dot.
///
/// The extension keeps its leading dot. A dot only starts an extension when
/// at least one non-dot character precedes it, so hidden files such as
/// `.bashrc` have no extension.
///
/// # Examples
///
/// - `"report .pdf"` splits into `("report ", ".pdf")`
/// - `"archive.tar.gz"` splits into `("archive.tar", ".gz")`
/// - `".bashrc"` splits into `(".bashrc", "")`
/// - `"notes"` splits into `("notes", "")`
#[must_use]
pub fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };

    if name[..dot].chars().all(|c| c == '.') {
        return (name, "");
    }

    name.split_at(dot)
}

/// Number of characters in the textual form of a path.
///
/// Separators count like any other character.
#[must_use]
pub fn path_char_count(path: &Path) -> usize {
    path.to_string_lossy().chars().count()
}
