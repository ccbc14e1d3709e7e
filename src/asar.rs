//! Minimal reader for Electron `asar` archives.
//!
//! Only covers what manifest resolution needs: open an archive, look up a
//! single entry by its `/`-separated path, and read its bytes. Entries
//! flagged `unpacked` are read from the `<archive>.unpacked` sibling
//! directory instead of the archive body.

use std::collections::BTreeMap;
use std::io::{self, SeekFrom};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

// Header layout, all little-endian u32:
//   0: pickle size-of-size, always 4
//   4: total size of the header pickle
//   8: payload size of the header pickle
//  12: length of the JSON index string
//  16: JSON index, padded to 4-byte alignment
// File contents start at 8 + header pickle size; index offsets are relative
// to that base.
const PRELUDE_LEN: usize = 16;
const PICKLE_SIZE_OF_SIZE: u32 = 4;

/// Directory node of the archive index
#[derive(Debug, Deserialize)]
struct DirEntry {
    files: BTreeMap<String, Entry>,
}

/// File node of the archive index
#[derive(Debug, Deserialize)]
struct FileEntry {
    size: u64,
    /// Byte offset into the content region, serialized as a decimal string
    #[serde(default)]
    offset: Option<String>,
    /// Stored outside the archive body when set
    #[serde(default)]
    unpacked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Dir(DirEntry),
    File(FileEntry),
    /// Symlinks and any other node shape. Present in real archives; kept
    /// in the index but never served by lookup.
    Other(serde_json::Value),
}

/// An opened asar archive with its index parsed
#[derive(Debug)]
pub struct Archive {
    path: PathBuf,
    index: DirEntry,
    base_offset: u64,
}

impl Archive {
    /// Open an archive and parse its JSON index.
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::open(&path).await?;

        let mut prelude = [0u8; PRELUDE_LEN];
        file.read_exact(&mut prelude).await?;

        let size_of_size = read_u32(&prelude, 0);
        if size_of_size != PICKLE_SIZE_OF_SIZE {
            return Err(invalid_data(format!(
                "not an asar archive (pickle preamble {size_of_size})"
            )));
        }

        let header_size = read_u32(&prelude, 4) as u64;
        let json_len = read_u32(&prelude, 12) as u64;
        // The header pickle holds its own payload size plus the string
        // length before the JSON, so the JSON can never fill it entirely.
        if json_len + 8 > header_size {
            return Err(invalid_data(format!(
                "asar index length {json_len} exceeds header size {header_size}"
            )));
        }

        let mut json = vec![0u8; json_len as usize];
        file.read_exact(&mut json).await?;
        let index: DirEntry = serde_json::from_slice(&json)
            .map_err(|e| invalid_data(format!("malformed asar index: {e}")))?;

        Ok(Self {
            path,
            index,
            base_offset: 8 + header_size,
        })
    }

    /// Read one entry's bytes. `entry` is `/`-separated relative to the
    /// archive root, e.g. `package.json` or `node_modules/x/package.json`.
    pub async fn read(&self, entry: &str) -> io::Result<Vec<u8>> {
        let file = self.lookup(entry)?;

        if file.unpacked {
            return tokio::fs::read(self.unpacked_root().join(entry)).await;
        }

        let offset: u64 = file
            .offset
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| invalid_data(format!("entry {entry} has no usable offset")))?;

        let start = self
            .base_offset
            .checked_add(offset)
            .ok_or_else(|| invalid_data(format!("entry {entry} offset {offset} out of range")))?;

        let mut handle = File::open(&self.path).await?;
        handle.seek(SeekFrom::Start(start)).await?;
        let mut buf = vec![0u8; file.size as usize];
        handle.read_exact(&mut buf).await?;
        Ok(buf)
    }

    /// Sibling directory holding `unpacked: true` entries.
    fn unpacked_root(&self) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(".unpacked");
        PathBuf::from(os)
    }

    fn lookup(&self, entry: &str) -> io::Result<&FileEntry> {
        let missing = || {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no entry {entry} in {}", self.path.display()),
            )
        };

        let mut dir = &self.index;
        let mut components = entry.split('/').filter(|c| !c.is_empty()).peekable();
        loop {
            let component = components.next().ok_or_else(missing)?;
            match (dir.files.get(component), components.peek()) {
                (Some(Entry::Dir(next)), Some(_)) => dir = next,
                (Some(Entry::File(file)), None) => return Ok(file),
                _ => return Err(missing()),
            }
        }
    }
}

fn read_u32(buf: &[u8], at: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buf[at..at + 4]);
    u32::from_le_bytes(raw)
}

fn invalid_data(reason: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, reason)
}


#[cfg(test)]
mod tests {
    use super::testutil::{write_archive, write_framed};
    use super::*;

    #[tokio::test]
    async fn reads_entries_at_root_and_nested() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("app.asar");
        write_archive(
            &archive_path,
            &[
                ("package.json", br#"{"name":"demo"}"#),
                ("lib/main.js", b"console.log('hi')"),
            ],
        );

        let archive = Archive::open(&archive_path).await.unwrap();
        assert_eq!(
            archive.read("package.json").await.unwrap(),
            br#"{"name":"demo"}"#
        );
        assert_eq!(
            archive.read("lib/main.js").await.unwrap(),
            b"console.log('hi')"
        );
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("app.asar");
        write_archive(&archive_path, &[("package.json", b"{}")]);

        let archive = Archive::open(&archive_path).await.unwrap();
        let err = archive.read("nope.json").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        // A directory path is not a readable entry either.
        let nested = dir.path().join("nested.asar");
        write_archive(&nested, &[("a/b.txt", b"x")]);
        let archive = Archive::open(&nested).await.unwrap();
        assert_eq!(
            archive.read("a").await.unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn link_entries_do_not_break_the_index() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("app.asar");

        let manifest = br#"{"name":"demo"}"#;
        let json = serde_json::to_vec(&serde_json::json!({
            "files": {
                "package.json": { "size": manifest.len(), "offset": "0" },
                "current": { "link": "versions/1.0.0" }
            }
        }))
        .unwrap();
        write_framed(&archive_path, &json, manifest);

        let archive = Archive::open(&archive_path).await.unwrap();
        assert_eq!(archive.read("package.json").await.unwrap(), manifest);

        // The link itself is not a readable entry.
        assert_eq!(
            archive.read("current").await.unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn rejects_bad_preamble() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("bad.asar");
        std::fs::write(&archive_path, [9u8; 32]).unwrap();

        let err = Archive::open(&archive_path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn oversized_offset_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("app.asar");

        let json = serde_json::to_vec(&serde_json::json!({
            "files": { "evil.bin": { "size": 1, "offset": u64::MAX.to_string() } }
        }))
        .unwrap();
        write_framed(&archive_path, &json, b"");

        let archive = Archive::open(&archive_path).await.unwrap();
        assert_eq!(
            archive.read("evil.bin").await.unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
    }

    #[tokio::test]
    async fn unpacked_entries_come_from_sibling_dir() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("app.asar");

        let json = serde_json::to_vec(&serde_json::json!({
            "files": { "big.bin": { "size": 4, "unpacked": true } }
        }))
        .unwrap();
        write_framed(&archive_path, &json, b"");

        let unpacked = dir.path().join("app.asar.unpacked");
        std::fs::create_dir(&unpacked).unwrap();
        std::fs::write(unpacked.join("big.bin"), b"DATA").unwrap();

        let archive = Archive::open(&archive_path).await.unwrap();
        assert_eq!(archive.read("big.bin").await.unwrap(), b"DATA");
    }
}
