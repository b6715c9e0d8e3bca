//! Bounds-checked decoding of fixed-width and length-prefixed values from
//! in-memory byte buffers.
//!
//! A [`Cursor`] borrows a buffer and reads integers, floats, booleans and
//! length-prefixed payloads from it in sequence, in a byte order chosen at
//! construction. Reads that would run past the end of the buffer fail with
//! [`CursorError::OutOfBounds`] and leave the cursor where it was.
//!
//! Booleans are encoded as a signed byte that is `true` only when strictly
//! positive. Text payloads are validated as UTF-8 and borrowed from the
//! buffer without copying.

mod config;
mod cursor;
mod decode;
mod error;
mod order;
mod width;

pub use config::CursorConfig;
pub use cursor::Cursor;
pub use decode::Decode;
pub use error::CursorError;
pub use order::ByteOrder;
pub use width::{Width, HOST_BITS};
