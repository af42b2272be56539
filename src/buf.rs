// src/buf.rs
use std::fmt;
use std::mem;

use bytes::{BufMut, BytesMut};

use crate::target::Endianness;

/// Append-only byte buffer that encodes values in a fixed byte order.
///
/// The order is chosen once at construction, so serialization code can be
/// written without threading an endianness parameter through every call.
/// Backed by `BytesMut` to keep growth amortized and hand-off copy-free.
///
/// # Example
///
/// ```
/// use swab_rs::{Endianness, OrderedBuf};
///
/// let mut buf = OrderedBuf::new(Endianness::Big);
/// buf.put_u16(0x0102);
/// buf.put_u32(0x03040506);
///
/// assert_eq!(buf.as_bytes(), &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
/// ```
pub struct OrderedBuf {
    buffer: BytesMut,
    order: Endianness,
}

impl OrderedBuf {
    /// Create a buffer with default capacity (8192 bytes).
    pub fn new(order: Endianness) -> Self {
        Self::with_capacity(order, 8192)
    }

    /// Create a buffer with the given initial capacity in bytes.
    pub fn with_capacity(order: Endianness, capacity: usize) -> Self {
        OrderedBuf {
            buffer: BytesMut::with_capacity(capacity),
            order,
        }
    }

    /// Byte order this buffer encodes with.
    pub fn order(&self) -> Endianness {
        self.order
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buffer.put_u8(value);
    }

    pub fn put_i8(&mut self, value: i8) {
        self.buffer.put_i8(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        match self.order {
            Endianness::Big => self.buffer.put_u16(value),
            Endianness::Little => self.buffer.put_u16_le(value),
        }
    }

    pub fn put_i16(&mut self, value: i16) {
        match self.order {
            Endianness::Big => self.buffer.put_i16(value),
            Endianness::Little => self.buffer.put_i16_le(value),
        }
    }

    pub fn put_u32(&mut self, value: u32) {
        match self.order {
            Endianness::Big => self.buffer.put_u32(value),
            Endianness::Little => self.buffer.put_u32_le(value),
        }
    }

    pub fn put_i32(&mut self, value: i32) {
        match self.order {
            Endianness::Big => self.buffer.put_i32(value),
            Endianness::Little => self.buffer.put_i32_le(value),
        }
    }

    pub fn put_u64(&mut self, value: u64) {
        match self.order {
            Endianness::Big => self.buffer.put_u64(value),
            Endianness::Little => self.buffer.put_u64_le(value),
        }
    }

    pub fn put_i64(&mut self, value: i64) {
        match self.order {
            Endianness::Big => self.buffer.put_i64(value),
            Endianness::Little => self.buffer.put_i64_le(value),
        }
    }

    pub fn put_f32(&mut self, value: f32) {
        match self.order {
            Endianness::Big => self.buffer.put_f32(value),
            Endianness::Little => self.buffer.put_f32_le(value),
        }
    }

    pub fn put_f64(&mut self, value: f64) {
        match self.order {
            Endianness::Big => self.buffer.put_f64(value),
            Endianness::Little => self.buffer.put_f64_le(value),
        }
    }

    /// Append raw bytes as-is, with no reordering.
    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Total size in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Buffer contents as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer, removing all data.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Take the buffer contents, leaving an empty buffer.
    ///
    /// Transfers ownership of the accumulated bytes without copying.
    pub fn take(&mut self) -> BytesMut {
        mem::take(&mut self.buffer)
    }

    /// Reserve additional capacity in bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }
}

// Manual Debug to avoid printing large buffers.
impl fmt::Debug for OrderedBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedBuf")
            .field("order", &self.order)
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, ByteOrder, LittleEndian};

    #[test]
    fn test_big_endian_encoding() {
        let mut buf = OrderedBuf::new(Endianness::Big);
        buf.put_u16(0x0102);
        buf.put_u32(0x03040506);
        buf.put_u64(0x0708090A0B0C0D0E);

        assert_eq!(buf.len(), 14);
        assert_eq!(
            buf.as_bytes(),
            &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E]
        );
    }

    #[test]
    fn test_little_endian_encoding() {
        let mut buf = OrderedBuf::new(Endianness::Little);
        buf.put_u16(0x0102);
        buf.put_u32(0x03040506);

        assert_eq!(buf.as_bytes(), &[0x02, 0x01, 0x06, 0x05, 0x04, 0x03]);
    }

    #[test]
    fn test_encoding_matches_byteorder() {
        let mut big = OrderedBuf::new(Endianness::Big);
        let mut little = OrderedBuf::new(Endianness::Little);
        big.put_f64(1234.5678);
        little.put_f64(1234.5678);

        let mut expected = [0u8; 8];
        BigEndian::write_f64(&mut expected, 1234.5678);
        assert_eq!(big.as_bytes(), &expected);
        LittleEndian::write_f64(&mut expected, 1234.5678);
        assert_eq!(little.as_bytes(), &expected);
    }

    #[test]
    fn test_single_byte_values_ignore_order() {
        let mut big = OrderedBuf::new(Endianness::Big);
        let mut little = OrderedBuf::new(Endianness::Little);
        for buf in [&mut big, &mut little] {
            buf.put_u8(0xAB);
            buf.put_i8(-1);
        }
        assert_eq!(big.as_bytes(), little.as_bytes());
        assert_eq!(big.as_bytes(), &[0xAB, 0xFF]);
    }

    #[test]
    fn test_signed_values() {
        let mut buf = OrderedBuf::new(Endianness::Big);
        buf.put_i16(-2);
        buf.put_i32(-2);
        buf.put_i64(-2);
        let bytes = buf.as_bytes();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
        assert_eq!(&bytes[2..6], &[0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(bytes[13], 0xFE);
    }

    #[test]
    fn test_put_slice_is_verbatim() {
        let mut buf = OrderedBuf::new(Endianness::Little);
        buf.put_slice(&[0x01, 0x02, 0x03]);
        assert_eq!(buf.as_bytes(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_clear_and_take() {
        let mut buf = OrderedBuf::new(Endianness::Big);
        buf.put_u32(42);
        assert_eq!(buf.len(), 4);

        buf.clear();
        assert!(buf.is_empty());

        buf.put_u16(7);
        let taken = buf.take();
        assert_eq!(taken.len(), 2);
        assert!(buf.is_empty());
        // Order survives a take.
        assert_eq!(buf.order(), Endianness::Big);
    }

    #[test]
    fn test_capacity_management() {
        let mut buf = OrderedBuf::with_capacity(Endianness::Little, 1024);
        assert!(buf.capacity() >= 1024);
        buf.reserve(4096);
        assert!(buf.capacity() >= 4096);
    }

    #[test]
    fn test_debug_formatting() {
        let mut buf = OrderedBuf::new(Endianness::Little);
        buf.put_u32(1);
        let debug = format!("{:?}", buf);
        assert!(debug.contains("Little"));
        assert!(debug.contains("len: 4"));
    }
}
