//! Size-rotated log file
//!
//! `<name>.log` is the live file; on overflow it becomes `<name>.1.log`,
//! older files shift up and anything past `max_files` is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct RollingFile {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            name: name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn rotated_path(&self, n: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.name, n))
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + bytes.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(bytes)?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files > 0 {
            let oldest = self.rotated_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..self.max_files).rev() {
                let from = self.rotated_path(n);
                if from.exists() {
                    fs::rename(&from, self.rotated_path(n + 1))?;
                }
            }
            fs::rename(self.path(), self.rotated_path(1))?;
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.path())?;
        self.written = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_when_full() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 10, 2).unwrap();

        file.write_bytes(b"12345678\n").unwrap();
        file.write_bytes(b"abcdefgh\n").unwrap();
        file.flush().unwrap();

        let live = fs::read_to_string(dir.path().join("app.log")).unwrap();
        let first = fs::read_to_string(dir.path().join("app.1.log")).unwrap();
        assert_eq!(live, "abcdefgh\n");
        assert_eq!(first, "12345678\n");
    }

    #[test]
    fn test_keeps_at_most_max_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 4, 2).unwrap();

        for line in ["aaa\n", "bbb\n", "ccc\n", "ddd\n"] {
            file.write_bytes(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "ddd\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.1.log")).unwrap(), "ccc\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.2.log")).unwrap(), "bbb\n");
        assert!(!dir.path().join("app.3.log").exists());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "app", 1024, 1).unwrap();
            file.write_bytes(b"one\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "app", 1024, 1).unwrap();
        file.write_bytes(b"two\n").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "one\ntwo\n");
    }
}
