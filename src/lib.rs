//! Uniform access to operating-system byte streams
//!
//! Wraps one open platform stream resource (a file on disk, an anonymous
//! memory-backed buffer, or a standard input/output channel) behind the
//! [ByteStream] contract: read, write, seek, report size, query metadata,
//! close. [StreamFactory] builds adapters from raw content, file paths, or
//! pre-opened handles.
//!
//! # Example
//!
//! ```rust
//! use os_stream::*;
//!
//! let mut stream = StreamFactory::create_stream(b"test data").unwrap();
//!
//! assert_eq!(Some(9), stream.size());
//! assert!(stream.is_readable());
//! assert!(stream.is_writable());
//! assert!(stream.is_seekable());
//! assert_eq!("test data", stream.to_text());
//!
//! // ownership of the handle can be taken back and re-wrapped
//! let raw = stream.detach().unwrap();
//! assert!(stream.detach().is_none());
//!
//! let mut stream = StreamFactory::create_stream_from_resource(raw);
//! assert_eq!("test data", stream.to_text());
//! ```

#[macro_use]
extern crate lazy_static;

mod error;
pub use error::*;

mod mode;
pub use mode::*;

mod metadata;
pub use metadata::*;

mod raw;
pub use raw::*;

mod r#trait;
pub use r#trait::*;

mod stream;
pub use stream::*;

mod factory;
pub use factory::*;
