//! Size-rotated, append-only line writer.
//!
//! Lines are appended to `<name>`; once the file grows past the policy's limit
//! it is shifted to `<name>.1`, older backups move up one slot and anything past
//! the last slot is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating writer. The file is opened lazily on the first write.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotating, opening or writing, and an error if
    /// the lock was poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.is_full() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = guard.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|metadata| metadata.len() > self.policy.max_bytes)
    }

    /// Path of backup slot `n` (1 is the newest).
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_policy() -> RotationPolicy {
        RotationPolicy {
            max_bytes: 8,
            max_backups: 2,
        }
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let writer = RotatingFile::new(dir.path().join("spans.jsonl"), RotationPolicy::default());

        writer.append_line("{\"a\":1}").expect("write");
        writer.append_line("{\"b\":2}").expect("write");

        let contents = fs::read_to_string(writer.path()).expect("read");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("spans.jsonl");
        let writer = RotatingFile::new(path.clone(), small_policy());

        for n in 0..5 {
            writer.append_line(&format!("line-number-{n}")).expect("write");
        }

        assert_eq!(fs::read_to_string(&path).expect("current"), "line-number-4\n");
        assert_eq!(
            fs::read_to_string(writer.backup_path(1)).expect("backup 1"),
            "line-number-3\n"
        );
        assert_eq!(
            fs::read_to_string(writer.backup_path(2)).expect("backup 2"),
            "line-number-2\n"
        );
        assert!(!writer.backup_path(3).exists());
    }
}
