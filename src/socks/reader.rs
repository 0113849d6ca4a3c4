//! Bounds-checked reader over a caller-supplied message buffer
//!
//! Every read is preceded by [`Reader::require`], which checks the total
//! length the read needs against the buffer without consuming anything.
//! Only after that succeeds is the field taken off the slice with
//! [`bytes::Buf`], whose getters would otherwise panic on short input.

use crate::error::{DecodeError, MessageField};
use bytes::Buf;

/// Cursor over one complete SOCKS5 message
#[derive(Debug)]
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    total: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Reader {
            buf,
            total: buf.len(),
        }
    }

    /// Number of bytes consumed so far
    pub(crate) fn offset(&self) -> usize {
        self.total - self.buf.remaining()
    }

    /// Check that `len` more bytes are available for `field`
    pub(crate) fn require(&self, field: MessageField, len: usize) -> Result<(), DecodeError> {
        match self.offset().checked_add(len) {
            Some(needed) if needed <= self.total => Ok(()),
            needed => Err(DecodeError::TruncatedMessage {
                field,
                needed: needed.unwrap_or(usize::MAX),
                available: self.total,
            }),
        }
    }

    pub(crate) fn u8(&mut self, field: MessageField) -> Result<u8, DecodeError> {
        self.require(field, 1)?;
        Ok(self.buf.get_u8())
    }

    /// Read a network-order u16 into host order
    pub(crate) fn u16_be(&mut self, field: MessageField) -> Result<u16, DecodeError> {
        self.require(field, 2)?;
        Ok(self.buf.get_u16())
    }

    pub(crate) fn array<const N: usize>(
        &mut self,
        field: MessageField,
    ) -> Result<[u8; N], DecodeError> {
        self.require(field, N)?;
        let mut out = [0u8; N];
        self.buf.copy_to_slice(&mut out);
        Ok(out)
    }

    /// Copy `len` bytes out of the buffer
    pub(crate) fn bytes(&mut self, field: MessageField, len: usize) -> Result<Vec<u8>, DecodeError> {
        self.require(field, len)?;
        let out = self.buf[..len].to_vec();
        self.buf.advance(len);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_reads_in_order() {
        let data = [0x05, 0x00, 0x50, 0xAA, 0xBB, 0xCC];
        let mut reader = Reader::new(&data);

        assert_eq!(reader.u8(MessageField::Port).unwrap(), 0x05);
        assert_eq!(reader.u16_be(MessageField::Port).unwrap(), 80);
        assert_eq!(reader.offset(), 3);
        assert_eq!(
            reader.array::<2>(MessageField::Ipv4Address).unwrap(),
            [0xAA, 0xBB]
        );
        assert_eq!(reader.bytes(MessageField::DomainName, 1).unwrap(), vec![0xCC]);
        assert_eq!(reader.offset(), 6);
    }

    #[test]
    fn test_require_does_not_consume() {
        let data = [1, 2, 3];
        let reader = Reader::new(&data);

        assert!(reader.require(MessageField::Methods, 3).is_ok());
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn test_short_read_reports_field() {
        let data = [1, 2, 3];
        let mut reader = Reader::new(&data);
        reader.u8(MessageField::Methods).unwrap();

        let err = reader.array::<4>(MessageField::Ipv4Address).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedMessage {
                field: MessageField::Ipv4Address,
                needed: 5,
                available: 3,
            }
        );
        // failed reads leave the cursor where it was
        assert_eq!(reader.offset(), 1);
    }

    #[test]
    fn test_require_overflow_is_truncation() {
        let data = [0u8; 4];
        let mut reader = Reader::new(&data);
        reader.u8(MessageField::Methods).unwrap();

        let err = reader.require(MessageField::DomainName, usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TruncatedMessage {
                needed: usize::MAX,
                available: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_short_header_reports_header_field() {
        let data = [0x05, 0x01];
        let mut reader = Reader::new(&data);

        let err = reader.array::<4>(MessageField::Header).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedMessage {
                field: MessageField::Header,
                needed: 4,
                available: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "Truncated message: header needs 4 bytes, buffer has 2"
        );
    }

    #[test]
    fn test_empty_buffer() {
        let mut reader = Reader::new(&[]);
        assert!(reader.u8(MessageField::Port).is_err());
        assert!(reader.bytes(MessageField::DomainName, 0).unwrap().is_empty());
    }
}
