//! Archive path normalization.

/// Normalizes an archive entry name into a clean path relative to the archive
/// root.
///
/// Both `/` and `\` separate segments. Empty and `.` segments are dropped,
/// `..` removes the previous segment and is discarded at the root. The
/// result never starts or ends with a separator and may be empty.
///
/// # Examples
///
/// ```
/// use arcpack_core::normalize_entry_path;
///
/// assert_eq!(normalize_entry_path("docs//./a.txt"), "docs/a.txt");
/// assert_eq!(normalize_entry_path("/../../etc/passwd"), "etc/passwd");
/// assert_eq!(normalize_entry_path("a/b/../c"), "a/c");
/// assert_eq!(normalize_entry_path("a/.."), "");
/// ```
pub fn normalize_entry_path(name: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in name.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
