use std::io::{Error, ErrorKind};

pub(crate) const NOT_READABLE_MSG: &str = "resource is not readable";
pub(crate) const NOT_WRITABLE_MSG: &str = "resource is not writable";
pub(crate) const NOT_SEEKABLE_MSG: &str = "resource is not seekable";
pub(crate) const DETACHED_MSG: &str = "raw stream is None";

/// provide some convenience functions for working with stream IO errors
pub trait IoErrorExt {
    fn with_not_readable() -> Error;
    fn with_not_writable() -> Error;
    fn with_not_seekable() -> Error;
    fn with_detached() -> Error;
    fn not_readable(&self) -> bool;
    fn not_writable(&self) -> bool;
    fn not_seekable(&self) -> bool;
    fn detached(&self) -> bool;
}

impl IoErrorExt for Error {
    fn with_not_readable() -> Error {
        Error::new(ErrorKind::PermissionDenied, NOT_READABLE_MSG)
    }

    fn with_not_writable() -> Error {
        Error::new(ErrorKind::PermissionDenied, NOT_WRITABLE_MSG)
    }

    fn with_not_seekable() -> Error {
        Error::new(ErrorKind::Unsupported, NOT_SEEKABLE_MSG)
    }

    fn with_detached() -> Error {
        Error::new(ErrorKind::NotConnected, DETACHED_MSG)
    }

    fn not_readable(&self) -> bool {
        self.kind() == ErrorKind::PermissionDenied && self.to_string() == NOT_READABLE_MSG
    }

    fn not_writable(&self) -> bool {
        self.kind() == ErrorKind::PermissionDenied && self.to_string() == NOT_WRITABLE_MSG
    }

    fn not_seekable(&self) -> bool {
        self.kind() == ErrorKind::Unsupported && self.to_string() == NOT_SEEKABLE_MSG
    }

    fn detached(&self) -> bool {
        self.kind() == ErrorKind::NotConnected && self.to_string() == DETACHED_MSG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_their_constructors() {
        assert!(Error::with_not_readable().not_readable());
        assert!(Error::with_not_writable().not_writable());
        assert!(Error::with_not_seekable().not_seekable());
        assert!(Error::with_detached().detached());
    }

    #[test]
    fn predicates_reject_other_errors() {
        let other = Error::new(ErrorKind::PermissionDenied, "some other denial");
        assert!(!other.not_readable());
        assert!(!other.not_writable());
        assert!(!Error::with_not_readable().not_writable());
        assert!(!Error::with_not_seekable().detached());
    }
}
