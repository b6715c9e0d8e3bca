//! Byte order selection.

/// Interpretation of multi-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

macro_rules! order_fns {
    ( $( $name:ident => $ty:ty, $n:expr; )* ) => {
        $(
            #[doc = concat!("Interprets the bytes as a `", stringify!($ty), "` in this byte order.")]
            #[inline]
            pub fn $name(self, bytes: [u8; $n]) -> $ty {
                match self {
                    ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
                    ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
                }
            }
        )*
    };
}

impl ByteOrder {
    /// The byte order of the host.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    };

    order_fns! {
        u16 => u16, 2;
        u32 => u32, 4;
        u64 => u64, 8;
    }
}
