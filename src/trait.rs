use crate::*;
use std::{
    fmt::Debug,
    io::{Read, Result, Seek, Write},
};

/// the uniform contract over one open byte stream resource
///
/// combined std::io::{Read, Write, Seek} (all three gated by the
/// handle's reported capabilities) plus handle metadata access.
/// `Seek::rewind` doubles as the rewind operation and carries the
/// same not-seekable failure as `Seek::seek`.
///
/// consumers needing only "a stream" should accept any implementor
/// of this trait rather than a concrete adapter type.
pub trait ByteStream: Read + Write + Seek + Sized + Debug {
    /// the opaque handle type this stream wraps
    type Handle;

    /// return the handle exactly once, leaving this instance inert
    /// every call after the first returns None
    fn detach(&mut self) -> Option<Self::Handle>;

    /// release the underlying handle; idempotent
    fn close(&mut self);

    /// byte size from the resource's stat block, None if unavailable
    fn size(&self) -> Option<u64>;

    /// the current cursor position
    fn tell(&mut self) -> Result<u64>;

    /// has a read hit the end of readable data since the last seek?
    fn eof(&self) -> bool;

    fn is_seekable(&self) -> bool;
    fn is_readable(&self) -> bool;
    fn is_writable(&self) -> bool;

    /// read up to `len` bytes; fewer at end of stream,
    /// an empty vec (never a sentinel) when nothing was left
    fn read_len(&mut self, len: usize) -> Result<Vec<u8>>;

    /// read everything from the cursor to the end,
    /// leaving the cursor at the end
    fn contents(&mut self) -> Result<Vec<u8>>;

    /// rewind and render the remaining content as text
    /// any failure yields "" instead of an error
    fn to_text(&mut self) -> String;

    /// the full metadata mapping for the handle
    fn metadata(&self) -> Result<StreamMetadata>;

    /// the full stat block for the handle
    fn stat(&self) -> Result<Stat>;
}

#[cfg(test)]
mod tests {
    use crate::*;

    // exercise the contract through a generic bound,
    // the way downstream consumers are expected to
    fn drain<S: ByteStream>(stream: &mut S) -> String {
        stream.to_text()
    }

    #[test]
    fn contract_is_usable_generically() {
        let mut stream = StreamFactory::create_stream(b"generic access").unwrap();
        assert_eq!("generic access", drain(&mut stream));
    }
}
