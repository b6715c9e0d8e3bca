//! Typed reads through [`Cursor::read`].

use crate::{Cursor, CursorError};

/// A value with a fixed wire representation that a [`Cursor`] can decode.
///
/// ```
/// use wire_cursor::Cursor;
///
/// let data = [0x00, 0x01, 0x01];
/// let mut cursor = Cursor::big_endian(&data);
/// let id: u16 = cursor.read().unwrap();
/// let flag: bool = cursor.read().unwrap();
/// assert_eq!((id, flag), (1, true));
/// ```
pub trait Decode: Sized {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CursorError>;
}

macro_rules! impl_decode {
    ( $( $ty:ty => $method:ident ),* $(,)? ) => {
        $(
            impl Decode for $ty {
                #[inline]
                fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CursorError> {
                    cursor.$method()
                }
            }
        )*
    };
}

impl_decode! {
    u8 => read_u8,
    u16 => read_u16,
    u32 => read_u32,
    u64 => read_u64,
    i8 => read_i8,
    i16 => read_i16,
    i32 => read_i32,
    i64 => read_i64,
    f32 => read_f32,
    f64 => read_f64,
    bool => read_bool,
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CursorError> {
        cursor.read_array()
    }
}
