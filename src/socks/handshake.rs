//! SOCKS5 method handshake
//!
//! Decodes the first message a client sends: the protocol version and the
//! list of authentication methods it offers.

use super::consts::*;
use super::reader::Reader;
use super::types::Handshake;
use crate::error::{DecodeError, MessageField};
use bytes::{BufMut, Bytes, BytesMut};

/// Decode a client handshake from one complete message buffer
///
/// # SOCKS5 Handshake Format
///
/// ```text
/// +----+----------+----------+
/// |VER | NMETHODS | METHODS  |
/// +----+----------+----------+
/// | 1  |    1     | 1 to 255 |
/// +----+----------+----------+
/// ```
///
/// Checks run in wire order and the first failure is returned:
/// buffer length, version, method count, then the method list length.
/// Bytes after the method list are ignored.
pub fn decode_handshake(buf: &[u8]) -> Result<Handshake, DecodeError> {
    if buf.len() < MIN_HANDSHAKE_LEN {
        return Err(DecodeError::InvalidLength {
            actual: buf.len(),
            minimum: MIN_HANDSHAKE_LEN,
        });
    }

    let mut reader = Reader::new(buf);

    let version = reader.u8(MessageField::Header)?;
    if version != SOCKS5_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let method_count = reader.u8(MessageField::Header)?;
    if method_count == 0 {
        return Err(DecodeError::InvalidMethodCount);
    }

    let methods = reader.bytes(MessageField::Methods, usize::from(method_count))?;

    Handshake::new(version, methods)
}

impl Handshake {
    /// Encode this handshake in wire format
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        buf.put_u8(self.version());
        buf.put_u8(self.method_count());
        buf.put_slice(self.methods());
        buf.freeze()
    }
}
