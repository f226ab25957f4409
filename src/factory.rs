use crate::*;
use std::{
    io::{Result, Seek, Write},
    path::Path,
};

/// stateless factory producing [Stream] adapters on demand
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamFactory;

impl StreamFactory {
    /// open a fresh anonymous read-write memory-backed resource,
    /// write `content` into it, rewind it, and wrap it
    pub fn create_stream(content: &[u8]) -> Result<Stream> {
        let mut stream = Self::create_stream_from_resource(RawStream::temp());
        stream.write_all(content)?;
        stream.rewind()?;
        Ok(stream)
    }

    /// open `path` in the given mode (`"r"` for plain reading) and
    /// wrap the handle; the open failure passes through untranslated
    pub fn create_stream_from_file(path: impl AsRef<Path>, mode: &str) -> Result<Stream> {
        Ok(Self::create_stream_from_resource(RawStream::open(
            path, mode,
        )?))
    }

    /// wrap an already-open handle with no validation
    pub fn create_stream_from_resource(raw: RawStream) -> Stream {
        Stream::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::SeekFrom;

    #[test]
    fn create_stream_is_rewound_and_filled() {
        let mut stream = StreamFactory::create_stream(b"test").unwrap();
        assert_eq!(0, stream.tell().unwrap());
        assert_eq!(b"test".to_vec(), stream.contents().unwrap());
    }

    #[test]
    fn create_stream_accepts_empty_content() {
        let mut stream = StreamFactory::create_stream(b"").unwrap();
        assert_eq!(Some(0), stream.size());
        assert_eq!(b"".to_vec(), stream.contents().unwrap());
    }

    #[test]
    fn create_stream_total_length_is_reachable_by_seek() {
        let mut stream = StreamFactory::create_stream(b"test data").unwrap();
        assert_eq!(9, stream.seek(SeekFrom::End(0)).unwrap());
        assert_eq!(9, stream.tell().unwrap());
    }

    #[test]
    fn create_stream_from_file_reads_known_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readable_file.txt");
        std::fs::write(&path, "This file should be readable").unwrap();

        let mut stream = StreamFactory::create_stream_from_file(&path, "r").unwrap();
        assert_eq!(
            b"This file should be readable".to_vec(),
            stream.contents().unwrap()
        );
    }

    #[test]
    fn create_stream_from_file_fails_when_open_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not_there.txt");
        assert!(StreamFactory::create_stream_from_file(&missing, "r").is_err());

        // x modes refuse to clobber an existing file
        let existing = dir.path().join("already_there.txt");
        std::fs::write(&existing, ".").unwrap();
        assert!(StreamFactory::create_stream_from_file(&existing, "x").is_err());
    }

    #[test]
    fn create_stream_from_file_honors_the_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("append_me.txt");
        std::fs::write(&path, "one").unwrap();

        let mut stream = StreamFactory::create_stream_from_file(&path, "a").unwrap();
        assert!(!stream.is_readable());
        stream.write_all(b" two").unwrap();
        stream.close();

        let mut stream = StreamFactory::create_stream_from_file(&path, "r").unwrap();
        assert_eq!(b"one two".to_vec(), stream.contents().unwrap());
    }

    #[test]
    fn create_stream_from_resource_wraps_without_validation() {
        let raw = RawStream::temp();
        let stream = StreamFactory::create_stream_from_resource(raw);
        assert!(stream.raw().is_some());
        assert!(stream.is_readable());
        assert!(stream.is_writable());
    }
}
