use crate::*;
use url2::prelude::*;

/// which wrapper produced the handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    File,
    Memory,
    Std,
}

impl std::fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WrapperKind::File => write!(f, "file"),
            WrapperKind::Memory => write!(f, "memory"),
            WrapperKind::Std => write!(f, "std"),
        }
    }
}

/// what kind of resource backs the handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Disk,
    Temp,
    Console,
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StreamKind::Disk => write!(f, "disk"),
            StreamKind::Temp => write!(f, "temp"),
            StreamKind::Console => write!(f, "console"),
        }
    }
}

/// a single entry in the metadata mapping
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Str(String),
    Int(u64),
    Bool(bool),
}

/// the full descriptive mapping a handle reports about itself
#[derive(Debug, Clone)]
pub struct StreamMetadata {
    pub wrapper_type: WrapperKind,
    pub stream_type: StreamKind,
    pub mode: Mode,
    pub unread_bytes: u64,
    pub seekable: bool,
    pub uri: Url2,
}

impl StreamMetadata {
    /// look up a single entry by key, None if the key is unknown
    pub fn get(&self, key: &str) -> Option<MetadataValue> {
        match key {
            "wrapper_type" => Some(MetadataValue::Str(self.wrapper_type.to_string())),
            "stream_type" => Some(MetadataValue::Str(self.stream_type.to_string())),
            "mode" => Some(MetadataValue::Str(self.mode.to_string())),
            "unread_bytes" => Some(MetadataValue::Int(self.unread_bytes)),
            "seekable" => Some(MetadataValue::Bool(self.seekable)),
            "uri" => Some(MetadataValue::Str(self.uri.to_string())),
            _ => None,
        }
    }
}

/// field names of the stat block, in index order
pub const STAT_KEYS: [&str; 13] = [
    "dev", "ino", "mode", "nlink", "uid", "gid", "rdev", "size", "atime", "mtime", "ctime",
    "blksize", "blocks",
];

/// the low-level stat block a handle reports about its resource
/// fields a backing resource cannot supply are zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stat {
    pub dev: u64,
    pub ino: u64,
    pub mode: u64,
    pub nlink: u64,
    pub uid: u64,
    pub gid: u64,
    pub rdev: u64,
    pub size: u64,
    pub atime: u64,
    pub mtime: u64,
    pub ctime: u64,
    pub blksize: u64,
    pub blocks: u64,
}

impl Stat {
    /// look up a single field by name, None if the key is unknown
    pub fn get(&self, key: &str) -> Option<u64> {
        match key {
            "dev" => Some(self.dev),
            "ino" => Some(self.ino),
            "mode" => Some(self.mode),
            "nlink" => Some(self.nlink),
            "uid" => Some(self.uid),
            "gid" => Some(self.gid),
            "rdev" => Some(self.rdev),
            "size" => Some(self.size),
            "atime" => Some(self.atime),
            "mtime" => Some(self.mtime),
            "ctime" => Some(self.ctime),
            "blksize" => Some(self.blksize),
            "blocks" => Some(self.blocks),
            _ => None,
        }
    }

    /// look up a single field by position in the stat table
    pub fn get_index(&self, index: usize) -> Option<u64> {
        STAT_KEYS.get(index).and_then(|key| self.get(key))
    }
}
