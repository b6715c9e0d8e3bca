//! Construction-time cursor settings.

use crate::width::HOST_BITS;
use crate::{ByteOrder, Width};

/// Settings fixed for the lifetime of a [`Cursor`](crate::Cursor).
///
/// `native_bits` is kept as a raw bit count. A value other than 8, 16, 32
/// or 64 is accepted here and reported by the native integer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorConfig {
    pub byte_order: ByteOrder,
    pub default_prefix: Width,
    pub native_bits: u32,
}

impl Default for CursorConfig {
    /// Big-endian, 32-bit length prefixes, host word size for native integers.
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            default_prefix: Width::W32,
            native_bits: HOST_BITS,
        }
    }
}

impl CursorConfig {
    /// Settings with the given byte order and prefix width, host native width.
    pub fn new(byte_order: ByteOrder, default_prefix: Width) -> Self {
        Self {
            byte_order,
            default_prefix,
            ..Self::default()
        }
    }

    /// Replaces the byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Replaces the default length prefix width.
    pub fn with_default_prefix(mut self, default_prefix: Width) -> Self {
        self.default_prefix = default_prefix;
        self
    }

    /// Pins the native integer width instead of using the host word size.
    pub fn with_native_bits(mut self, native_bits: u32) -> Self {
        self.native_bits = native_bits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = CursorConfig::default();
        assert_eq!(config.byte_order, ByteOrder::BigEndian);
        assert_eq!(config.default_prefix, Width::W32);
        assert_eq!(config.native_bits, usize::BITS);
    }

    #[test]
    fn test_builder() {
        let config = CursorConfig::new(ByteOrder::LittleEndian, Width::W8).with_native_bits(16);
        assert_eq!(config.byte_order, ByteOrder::LittleEndian);
        assert_eq!(config.default_prefix, Width::W8);
        assert_eq!(config.native_bits, 16);

        let config = config
            .with_byte_order(ByteOrder::BigEndian)
            .with_default_prefix(Width::W64);
        assert_eq!(config.byte_order, ByteOrder::BigEndian);
        assert_eq!(config.default_prefix, Width::W64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let config: CursorConfig = serde_json::from_str(
            r#"{"byte_order":"little-endian","default_prefix":16,"native_bits":64}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            CursorConfig::new(ByteOrder::LittleEndian, Width::W16).with_native_bits(64)
        );

        let partial: CursorConfig = serde_json::from_str(r#"{"default_prefix":8}"#).unwrap();
        assert_eq!(partial.byte_order, ByteOrder::BigEndian);
        assert_eq!(partial.default_prefix, Width::W8);

        let bad = serde_json::from_str::<CursorConfig>(r#"{"default_prefix":12}"#);
        assert!(bad.is_err());

        let json = serde_json::to_string(
            &CursorConfig::new(ByteOrder::BigEndian, Width::W32).with_native_bits(32),
        )
        .unwrap();
        assert_eq!(
            json,
            r#"{"byte_order":"big-endian","default_prefix":32,"native_bits":32}"#
        );
    }
}
