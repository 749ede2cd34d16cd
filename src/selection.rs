//! File selections handed over by the host file manager.

use std::ffi::OsString;
use std::fmt::Write;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// One selected filesystem entry: its URI and whether it is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// URI as reported by the file manager, e.g. `file:///home/me/a.txt`
    pub uri: String,

    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl FileEntry {
    /// A regular file entry
    pub fn file(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            is_dir: false,
        }
    }

    /// A directory entry
    pub fn directory(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            is_dir: true,
        }
    }

    /// Whether the entry is a regular file on the local filesystem
    pub fn is_local_file(&self) -> bool {
        self.uri.starts_with(FILE_SCHEME) && !self.is_dir
    }

    /// Native filesystem path for a `file://` URI, percent-escapes decoded.
    ///
    /// The transfer command expects a path, not a URI, so the decoding is
    /// functionally required. Malformed escapes are kept literal rather than
    /// rejected. Returns `None` for non-`file://` URIs.
    pub fn local_path(&self) -> Option<PathBuf> {
        let encoded = self.uri.strip_prefix(FILE_SCHEME)?;
        Some(decoded_path(encoded))
    }
}

/// The ordered set of entries selected when the context menu was opened.
///
/// Rebuilt per menu-open event; nothing is shared between invocations.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    entries: Vec<FileEntry>,
}

impl FileSelection {
    /// Create a selection from the host's entry list
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self { entries }
    }

    /// Entries in selection order
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of selected entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the send action may be offered for this selection.
    ///
    /// True only when the selection is non-empty and every entry is a local
    /// regular file; one non-conforming entry suppresses the action for the
    /// whole selection.
    pub fn is_sendable(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(FileEntry::is_local_file)
    }
}

impl FromIterator<FileEntry> for FileSelection {
    fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// `file://` URI for a native path.
///
/// Bytes outside the unreserved set are percent-encoded, so a path
/// containing a literal `%` or space survives the decode in
/// [`FileEntry::local_path`] unchanged.
pub fn file_uri(path: &Path) -> String {
    let bytes = path_bytes(path);
    let mut uri = String::with_capacity(FILE_SCHEME.len() + bytes.len());
    uri.push_str(FILE_SCHEME);

    for &byte in &bytes {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'/' | b'-' | b'_' | b'.' | b'~' => {
                uri.push(byte as char)
            }
            _ => {
                let _ = write!(uri, "%{byte:02X}");
            }
        }
    }

    uri
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

fn decoded_path(encoded: &str) -> PathBuf {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    PathBuf::from(bytes_to_os_string(out))
}

// Decoded bytes need not be UTF-8; Unix paths carry them as-is.
#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_gate() {
        assert!(FileEntry::file("file:///home/me/a.txt").is_local_file());
        assert!(!FileEntry::directory("file:///home/me").is_local_file());
        assert!(!FileEntry::file("sftp://host/a.txt").is_local_file());
        assert!(!FileEntry::file("trash:///a.txt").is_local_file());
    }

    #[test]
    fn test_sendable_requires_every_entry_to_conform() {
        let all_files: FileSelection = ["file:///a", "file:///b"]
            .into_iter()
            .map(FileEntry::file)
            .collect();
        assert!(all_files.is_sendable());

        let with_dir = FileSelection::new(vec![
            FileEntry::file("file:///a"),
            FileEntry::directory("file:///d"),
            FileEntry::file("file:///b"),
        ]);
        assert!(!with_dir.is_sendable());

        let with_remote = FileSelection::new(vec![
            FileEntry::file("file:///a"),
            FileEntry::file("sftp://host/b"),
        ]);
        assert!(!with_remote.is_sendable());

        assert!(!FileSelection::default().is_sendable());
    }

    #[test]
    fn test_local_path_decodes_percent_escapes() {
        let entry = FileEntry::file("file:///home/me/My%20Report%231.pdf");
        assert_eq!(
            entry.local_path().unwrap(),
            PathBuf::from("/home/me/My Report#1.pdf")
        );
    }

    #[test]
    fn test_local_path_keeps_malformed_escapes_literal() {
        let entry = FileEntry::file("file:///tmp/50%25off%Gx");
        assert_eq!(entry.local_path().unwrap(), PathBuf::from("/tmp/50%off%Gx"));
    }

    #[test]
    fn test_file_uri_encodes_reserved_bytes() {
        assert_eq!(
            file_uri(Path::new("/home/me/My Report#1.pdf")),
            "file:///home/me/My%20Report%231.pdf"
        );
        assert_eq!(file_uri(Path::new("/tmp/plain.txt")), "file:///tmp/plain.txt");
    }

    #[test]
    fn test_file_uri_round_trips_literal_percent() {
        // A file literally named "a%20b.txt" must come back byte-identical,
        // not decoded to "a b.txt".
        let original = PathBuf::from("/tmp/a%20b.txt");
        let entry = FileEntry::file(file_uri(&original));
        assert_eq!(entry.local_path().unwrap(), original);

        let spaced = PathBuf::from("/tmp/a b 100%.txt");
        let entry = FileEntry::file(file_uri(&spaced));
        assert_eq!(entry.local_path().unwrap(), spaced);
    }

    #[test]
    fn test_local_path_rejects_other_schemes() {
        assert_eq!(FileEntry::file("sftp://host/a").local_path(), None);
        assert_eq!(FileEntry::file("/plain/path").local_path(), None);
    }
}
