use crate::*;
use std::{
    fs::File,
    io::{Cursor, Error, ErrorKind, Read, Result, Seek, SeekFrom, Stdin, Stdout, Write},
    path::Path,
};
use url2::prelude::*;

/// create a unique uri for an anonymous memory-backed stream
fn random_temp_url() -> Url2 {
    Url2::parse(&format!(
        "mem://temp-{}",
        nanoid::simple().replace("_", "-").replace("~", "+"),
    ))
}

/// build a file:// uri for an opened path
fn file_url(path: &Path) -> Result<Url2> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Url2::try_parse(&format!("file://{}", absolute.display())).map_err(|e| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("could not render '{}' as a file uri: {}", path.display(), e),
        )
    })
}

/// the platform resource backing a handle
#[derive(Debug)]
enum RawIo {
    File(File),
    Mem(Cursor<Vec<u8>>),
    Stdin(Stdin),
    Stdout(Stdout),
}

/// an open platform stream handle: exactly one owned backing resource
/// plus the descriptive state the platform reports about it
#[derive(Debug)]
pub struct RawStream {
    io: RawIo,
    mode: Mode,
    url: Url2,
}

impl RawStream {
    /// open a fresh anonymous read-write memory-backed resource
    pub fn temp() -> Self {
        Self {
            io: RawIo::Mem(Cursor::new(Vec::new())),
            mode: Mode::from("w+b"),
            url: random_temp_url(),
        }
    }

    /// open a file on disk in the given mode
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<Self> {
        let path = path.as_ref();
        let mode = Mode::from(mode);
        let file = mode.open_options()?.open(path)?;
        let url = file_url(path)?;
        Ok(Self {
            io: RawIo::File(file),
            mode,
            url,
        })
    }

    /// wrap the process standard input channel
    pub fn stdin() -> Self {
        Self {
            io: RawIo::Stdin(std::io::stdin()),
            mode: Mode::from("r"),
            url: Url2::parse("std://in"),
        }
    }

    /// wrap the process standard output channel
    pub fn stdout() -> Self {
        Self {
            io: RawIo::Stdout(std::io::stdout()),
            mode: Mode::from("w"),
            url: Url2::parse("std://out"),
        }
    }

    /// the mode this handle was opened with
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// the source uri of this handle
    pub fn url(&self) -> &Url2 {
        &self.url
    }

    pub fn wrapper_kind(&self) -> WrapperKind {
        match &self.io {
            RawIo::File(_) => WrapperKind::File,
            RawIo::Mem(_) => WrapperKind::Memory,
            RawIo::Stdin(_) | RawIo::Stdout(_) => WrapperKind::Std,
        }
    }

    pub fn stream_kind(&self) -> StreamKind {
        match &self.io {
            RawIo::File(_) => StreamKind::Disk,
            RawIo::Mem(_) => StreamKind::Temp,
            RawIo::Stdin(_) | RawIo::Stdout(_) => StreamKind::Console,
        }
    }

    /// console channels cannot reposition their cursor
    pub fn is_seekable(&self) -> bool {
        match &self.io {
            RawIo::File(_) | RawIo::Mem(_) => true,
            RawIo::Stdin(_) | RawIo::Stdout(_) => false,
        }
    }

    /// the full descriptive mapping for this handle
    /// unread_bytes is always 0: this layer adds no buffering
    pub fn metadata(&self) -> StreamMetadata {
        StreamMetadata {
            wrapper_type: self.wrapper_kind(),
            stream_type: self.stream_kind(),
            mode: self.mode.clone(),
            unread_bytes: 0,
            seekable: self.is_seekable(),
            uri: self.url.clone(),
        }
    }

    /// the low-level stat block for this handle
    /// console channels have none
    pub fn stat(&self) -> Result<Stat> {
        match &self.io {
            RawIo::File(file) => Ok(fs_stat(&file.metadata()?)),
            RawIo::Mem(cursor) => Ok(Stat {
                size: cursor.get_ref().len() as u64,
                ..Stat::default()
            }),
            RawIo::Stdin(_) | RawIo::Stdout(_) => Err(Error::new(
                ErrorKind::Unsupported,
                "console streams report no stat block",
            )),
        }
    }

    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match &mut self.io {
            RawIo::File(file) => file.read(buf),
            RawIo::Mem(cursor) => cursor.read(buf),
            RawIo::Stdin(stdin) => stdin.read(buf),
            RawIo::Stdout(_) => Err(Error::new(
                ErrorKind::Unsupported,
                "handle is not backed by a readable resource",
            )),
        }
    }

    pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match &mut self.io {
            RawIo::File(file) => file.write(buf),
            RawIo::Mem(cursor) => cursor.write(buf),
            RawIo::Stdout(stdout) => stdout.write(buf),
            RawIo::Stdin(_) => Err(Error::new(
                ErrorKind::Unsupported,
                "handle is not backed by a writable resource",
            )),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.io {
            RawIo::File(file) => file.flush(),
            RawIo::Mem(cursor) => cursor.flush(),
            RawIo::Stdout(stdout) => stdout.flush(),
            RawIo::Stdin(_) => Ok(()),
        }
    }

    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        match &mut self.io {
            RawIo::File(file) => file.seek(pos),
            RawIo::Mem(cursor) => cursor.seek(pos),
            RawIo::Stdin(_) | RawIo::Stdout(_) => Err(Error::with_not_seekable()),
        }
    }

    /// the current cursor position
    pub fn tell(&mut self) -> Result<u64> {
        self.seek(SeekFrom::Current(0))
    }
}

#[cfg(unix)]
fn fs_stat(meta: &std::fs::Metadata) -> Stat {
    use std::os::unix::fs::MetadataExt;
    Stat {
        dev: meta.dev(),
        ino: meta.ino(),
        mode: meta.mode() as u64,
        nlink: meta.nlink(),
        uid: meta.uid() as u64,
        gid: meta.gid() as u64,
        rdev: meta.rdev(),
        size: meta.size(),
        atime: meta.atime().max(0) as u64,
        mtime: meta.mtime().max(0) as u64,
        ctime: meta.ctime().max(0) as u64,
        blksize: meta.blksize(),
        blocks: meta.blocks(),
    }
}

#[cfg(not(unix))]
fn fs_stat(meta: &std::fs::Metadata) -> Stat {
    Stat {
        size: meta.len(),
        ..Stat::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_handles_are_anonymous_read_write_memory() {
        let raw = RawStream::temp();
        assert_eq!("w+b", raw.mode().as_str());
        assert_eq!("mem", raw.url().scheme());
        assert_eq!(WrapperKind::Memory, raw.wrapper_kind());
        assert_eq!(StreamKind::Temp, raw.stream_kind());
        assert!(raw.is_seekable());
        assert_eq!(Some(0), raw.stat().map(|s| s.size).ok());
    }

    #[test]
    fn temp_handles_get_unique_uris() {
        assert_ne!(
            RawStream::temp().url().to_string(),
            RawStream::temp().url().to_string(),
        );
    }

    #[test]
    fn console_handles_are_not_seekable_and_have_no_stat() {
        let mut raw = RawStream::stdout();
        assert_eq!(StreamKind::Console, raw.stream_kind());
        assert!(!raw.is_seekable());
        assert!(raw.stat().is_err());
        assert!(raw.seek(SeekFrom::Start(0)).unwrap_err().not_seekable());
    }

    #[test]
    fn open_missing_file_fails_with_the_platform_error() {
        let err = RawStream::open("/no/such/path/anywhere", "r").unwrap_err();
        assert_eq!(ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn open_unknown_mode_is_invalid_input() {
        let err = RawStream::open("/tmp/whatever", "q").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
    }
}
