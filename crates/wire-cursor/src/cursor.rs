//! Bounds-checked sequential reader over a byte slice.

use std::str;

use tracing::{debug, trace};

use crate::{ByteOrder, CursorConfig, CursorError, Decode, Width};

/// A sequential reader that decodes typed values from a byte slice.
///
/// Every read checks that enough bytes remain before touching the buffer.
/// A read that fails leaves the position where it was, including
/// length-prefixed reads whose prefix decoded but whose payload did not fit.
///
/// # Example
///
/// ```
/// use wire_cursor::{ByteOrder, Cursor, Width};
///
/// let data = [0x00, 0x2a, 0x03, b'a', b'b', b'c'];
/// let mut cursor = Cursor::new(&data, ByteOrder::BigEndian, Width::W8);
///
/// assert_eq!(cursor.read_u16(), Ok(42));
/// assert_eq!(cursor.read_str(), Ok("abc"));
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    config: CursorConfig,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor with the given byte order and default prefix width.
    /// Native integers use the host word size.
    pub fn new(buf: &'a [u8], byte_order: ByteOrder, default_prefix: Width) -> Self {
        Self::with_config(buf, CursorConfig::new(byte_order, default_prefix))
    }

    /// Creates a cursor with explicit settings.
    pub fn with_config(buf: &'a [u8], config: CursorConfig) -> Self {
        Self {
            buf,
            pos: 0,
            config,
        }
    }

    /// Big-endian cursor with the default configuration.
    pub fn big_endian(buf: &'a [u8]) -> Self {
        Self::with_config(buf, CursorConfig::default())
    }

    /// Little-endian cursor, otherwise with the default configuration.
    pub fn little_endian(buf: &'a [u8]) -> Self {
        Self::with_config(
            buf,
            CursorConfig::default().with_byte_order(ByteOrder::LittleEndian),
        )
    }

    // ---------------------------------------------------------------- state

    /// Offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The whole underlying buffer, read or not.
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// The unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Settings the cursor was created with.
    pub fn config(&self) -> CursorConfig {
        self.config
    }

    /// Byte order used for multi-byte values.
    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    /// Prefix width used by `read_bytes` and `read_str`.
    pub fn default_prefix(&self) -> Width {
        self.config.default_prefix
    }

    /// Configured native integer width in bits.
    pub fn native_bits(&self) -> u32 {
        self.config.native_bits
    }

    // ---------------------------------------------------------------- guard

    fn out_of_bounds(&self, position: usize, needed: u64) -> CursorError {
        let available = self.buf.len().saturating_sub(position);
        trace!(position, needed, available, "read past end of buffer");
        CursorError::OutOfBounds {
            position,
            needed,
            available,
        }
    }

    /// Checks that `n` more bytes are available from the current position.
    #[inline]
    fn check(&self, n: usize) -> Result<(), CursorError> {
        if n > self.remaining() {
            Err(self.out_of_bounds(self.pos, n as u64))
        } else {
            Ok(())
        }
    }

    // ---------------------------------------------------------------- raw

    /// Looks at the next byte without advancing.
    pub fn peek_u8(&self) -> Result<u8, CursorError> {
        self.check(1)?;
        Ok(self.buf[self.pos])
    }

    /// Advances past `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<(), CursorError> {
        self.check(n)?;
        self.pos += n;
        Ok(())
    }

    /// Borrows exactly `n` bytes and advances past them.
    pub fn read_raw(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        self.check(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    /// Copies the next `N` bytes into an array and advances past them.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        self.check(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    /// Decodes any [`Decode`] type.
    pub fn read<T: Decode>(&mut self) -> Result<T, CursorError> {
        T::decode(self)
    }

    // ---------------------------------------------------------------- fixed width

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, CursorError> {
        self.check(1)?;
        let val = self.buf[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Reads a single byte unmodified.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, CursorError> {
        self.read_u8()
    }

    /// Reads an unsigned 16-bit integer.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, CursorError> {
        let bytes = self.read_array()?;
        Ok(self.config.byte_order.u16(bytes))
    }

    /// Reads an unsigned 32-bit integer.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, CursorError> {
        let bytes = self.read_array()?;
        Ok(self.config.byte_order.u32(bytes))
    }

    /// Reads an unsigned 64-bit integer.
    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, CursorError> {
        let bytes = self.read_array()?;
        Ok(self.config.byte_order.u64(bytes))
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, CursorError> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a signed 16-bit integer.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16, CursorError> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a signed 32-bit integer.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, CursorError> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads a signed 64-bit integer.
    #[inline]
    pub fn read_i64(&mut self) -> Result<i64, CursorError> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads an IEEE-754 binary32 value. The bit pattern is kept as is.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, CursorError> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an IEEE-754 binary64 value. The bit pattern is kept as is.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64, CursorError> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads one signed byte, `true` only if it is strictly positive.
    ///
    /// `0x00` and every byte with the high bit set decode as `false`.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, CursorError> {
        Ok(self.read_i8()? > 0)
    }

    // ---------------------------------------------------------------- native width

    fn native_width(&self) -> Result<Width, CursorError> {
        let bits = self.config.native_bits;
        Width::from_bits(bits).ok_or_else(|| {
            debug!(bits, "unsupported native integer width");
            CursorError::UnsupportedWidth { bits }
        })
    }

    /// Reads an unsigned integer as wide as the configured native width.
    pub fn read_native_uint(&mut self) -> Result<u64, CursorError> {
        match self.native_width()? {
            Width::W8 => self.read_u8().map(u64::from),
            Width::W16 => self.read_u16().map(u64::from),
            Width::W32 => self.read_u32().map(u64::from),
            Width::W64 => self.read_u64(),
        }
    }

    /// Reads a signed integer as wide as the configured native width,
    /// sign-extended to 64 bits.
    pub fn read_native_int(&mut self) -> Result<i64, CursorError> {
        match self.native_width()? {
            Width::W8 => self.read_i8().map(i64::from),
            Width::W16 => self.read_i16().map(i64::from),
            Width::W32 => self.read_i32().map(i64::from),
            Width::W64 => self.read_i64(),
        }
    }

    // ---------------------------------------------------------------- length prefixed

    fn read_prefix(&mut self, width: Width) -> Result<u64, CursorError> {
        match width {
            Width::W8 => self.read_u8().map(u64::from),
            Width::W16 => self.read_u16().map(u64::from),
            Width::W32 => self.read_u32().map(u64::from),
            Width::W64 => self.read_u64(),
        }
    }

    fn prefix_width(bits: u32) -> Result<Width, CursorError> {
        Width::from_bits(bits).ok_or_else(|| {
            debug!(bits, "invalid length prefix width");
            CursorError::InvalidPrefixWidth { bits }
        })
    }

    /// Reads a length prefix of the given width.
    ///
    /// Fails if the length cannot address this platform's memory, in which
    /// case no bytes are consumed.
    pub fn read_length(&mut self, width: Width) -> Result<usize, CursorError> {
        let start = self.pos;
        let len = self.read_prefix(width)?;
        usize::try_from(len).map_err(|_| {
            let err = self.out_of_bounds(self.pos, len);
            self.pos = start;
            err
        })
    }

    fn read_prefixed(&mut self, width: Width) -> Result<&'a [u8], CursorError> {
        let start = self.pos;
        let len = self.read_length(width)?;
        match self.read_raw(len) {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                self.pos = start;
                Err(err)
            }
        }
    }

    /// Reads a payload prefixed by its length in the default prefix width.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], CursorError> {
        self.read_prefixed(self.config.default_prefix)
    }

    /// Reads a payload prefixed by its length in a `bits`-wide unsigned
    /// integer. `bits` must be 8, 16, 32 or 64.
    pub fn read_bytes_with(&mut self, bits: u32) -> Result<&'a [u8], CursorError> {
        let width = Self::prefix_width(bits)?;
        self.read_prefixed(width)
    }

    fn read_prefixed_str(&mut self, width: Width) -> Result<&'a str, CursorError> {
        let start = self.pos;
        let bytes = self.read_prefixed(width)?;
        str::from_utf8(bytes).map_err(|err| {
            let position = self.pos - bytes.len() + err.valid_up_to();
            trace!(position, "invalid UTF-8 in text payload");
            self.pos = start;
            CursorError::InvalidUtf8 { position }
        })
    }

    /// Reads UTF-8 text prefixed by its byte length in the default prefix
    /// width. The text borrows from the buffer.
    pub fn read_str(&mut self) -> Result<&'a str, CursorError> {
        self.read_prefixed_str(self.config.default_prefix)
    }

    /// Like [`read_str`](Self::read_str) with an explicit prefix width.
    pub fn read_str_with(&mut self, bits: u32) -> Result<&'a str, CursorError> {
        let width = Self::prefix_width(bits)?;
        self.read_prefixed_str(width)
    }
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Cursor::big_endian(buf)
    }
}
