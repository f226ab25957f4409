use crate::*;
use std::io::{Error, Read, Result, Seek, SeekFrom, Write};
use url2::prelude::*;

/// adapter exposing one open platform stream handle through the
/// [ByteStream] contract
///
/// the cursor lives in the platform handle, not here; every
/// read/write/seek advances it through the handle's own primitives.
/// once the handle has been detached or closed the instance is inert:
/// every operation fails with the detached-handle error.
#[derive(Debug)]
pub struct Stream {
    raw: Option<RawStream>,
    hit_eof: bool,
}

impl Stream {
    /// wrap an already-open handle
    pub fn new(raw: RawStream) -> Self {
        Self {
            raw: Some(raw),
            hit_eof: false,
        }
    }

    /// borrow the wrapped handle, if one is still attached
    pub fn raw(&self) -> Option<&RawStream> {
        self.raw.as_ref()
    }

    fn raw_ref(&self) -> Result<&RawStream> {
        self.raw.as_ref().ok_or_else(Error::with_detached)
    }

    fn raw_mut(&mut self) -> Result<&mut RawStream> {
        self.raw.as_mut().ok_or_else(Error::with_detached)
    }

    // -- derived accessors, each a single metadata lookup -- //

    pub fn wrapper_type(&self) -> Result<WrapperKind> {
        Ok(self.raw_ref()?.wrapper_kind())
    }

    pub fn stream_type(&self) -> Result<StreamKind> {
        Ok(self.raw_ref()?.stream_kind())
    }

    pub fn mode(&self) -> Result<Mode> {
        Ok(self.raw_ref()?.mode().clone())
    }

    pub fn unread_bytes(&self) -> Result<u64> {
        Ok(self.raw_ref()?.metadata().unread_bytes)
    }

    pub fn uri(&self) -> Result<Url2> {
        Ok(self.raw_ref()?.url().clone())
    }
}

impl Read for Stream {
    /// gated on the handle's reported mode: a mode outside the fixed
    /// readable set fails before any platform call
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let raw = self.raw.as_mut().ok_or_else(Error::with_detached)?;
        if !raw.mode().is_readable() {
            return Err(Error::with_not_readable());
        }
        let count = raw.read(buf)?;
        if count == 0 && !buf.is_empty() {
            self.hit_eof = true;
        }
        Ok(count)
    }
}

impl Write for Stream {
    /// gated on the handle's reported mode: a mode outside the fixed
    /// writable set fails before any platform call
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let raw = self.raw.as_mut().ok_or_else(Error::with_detached)?;
        if !raw.mode().is_writable() {
            return Err(Error::with_not_writable());
        }
        raw.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.raw_mut()?.flush()
    }
}

impl Seek for Stream {
    /// fails with the not-seekable error when the handle metadata
    /// reports a non-seekable resource; platform failures pass through
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let raw = self.raw.as_mut().ok_or_else(Error::with_detached)?;
        if !raw.is_seekable() {
            return Err(Error::with_not_seekable());
        }
        let position = raw.seek(pos)?;
        self.hit_eof = false;
        Ok(position)
    }
}

impl ByteStream for Stream {
    type Handle = RawStream;

    fn detach(&mut self) -> Option<RawStream> {
        self.raw.take()
    }

    fn close(&mut self) {
        // dropping the handle closes the platform resource
        self.raw.take();
    }

    fn size(&self) -> Option<u64> {
        self.raw
            .as_ref()
            .and_then(|raw| raw.stat().ok())
            .map(|stat| stat.size)
    }

    fn tell(&mut self) -> Result<u64> {
        self.raw_mut()?.tell()
    }

    fn eof(&self) -> bool {
        self.hit_eof
    }

    fn is_seekable(&self) -> bool {
        self.raw.as_ref().map(|r| r.is_seekable()).unwrap_or(false)
    }

    fn is_readable(&self) -> bool {
        self.raw
            .as_ref()
            .map(|r| r.mode().is_readable())
            .unwrap_or(false)
    }

    fn is_writable(&self) -> bool {
        self.raw
            .as_ref()
            .map(|r| r.mode().is_writable())
            .unwrap_or(false)
    }

    fn read_len(&mut self, len: usize) -> Result<Vec<u8>> {
        let raw = self.raw.as_ref().ok_or_else(Error::with_detached)?;
        if !raw.mode().is_readable() {
            return Err(Error::with_not_readable());
        }
        let mut out = vec![0_u8; len];
        let mut filled = 0;
        while filled < len {
            match self.read(&mut out[filled..])? {
                0 => break,
                count => filled += count,
            }
        }
        out.truncate(filled);
        Ok(out)
    }

    fn contents(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.read_to_end(&mut out)?;
        Ok(out)
    }

    fn to_text(&mut self) -> String {
        match self.rewind().and_then(|_| self.contents()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
            Err(e) => {
                // contract says swallow, but don't lose the diagnostic
                log::warn!("stream could not be rendered as text: {}", e);
                String::new()
            }
        }
    }

    fn metadata(&self) -> Result<StreamMetadata> {
        Ok(self.raw_ref()?.metadata())
    }

    fn stat(&self) -> Result<Stat> {
        self.raw_ref()?.stat()
    }
}
