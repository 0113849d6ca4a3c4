//! SOCKS5 connection request
//!
//! Decodes the request a client sends after method selection: command,
//! destination address and destination port.

use super::consts::*;
use super::reader::Reader;
use super::types::{Address, AddressType, ConnectionRequest, DomainName};
use crate::error::{DecodeError, MessageField};
use bytes::{BufMut, Bytes, BytesMut};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Decode a connection request from one complete message buffer
///
/// # SOCKS5 Request Format
///
/// ```text
/// +----+-----+-------+------+----------+----------+
/// |VER | CMD |  RSV  | ATYP | DST.ADDR | DST.PORT |
/// +----+-----+-------+------+----------+----------+
/// | 1  |  1  | X'00' |  1   | Variable |    2     |
/// +----+-----+-------+------+----------+----------+
/// ```
///
/// VER, CMD and RSV are returned as received. The address type selects
/// how DST.ADDR is read; an unknown type stops decoding before any
/// address byte is touched.
pub fn decode_request(buf: &[u8]) -> Result<ConnectionRequest, DecodeError> {
    if buf.len() < REQUEST_HEADER_LEN {
        return Err(DecodeError::InvalidLength {
            actual: buf.len(),
            minimum: REQUEST_HEADER_LEN,
        });
    }

    let mut reader = Reader::new(buf);

    // Read: VER CMD RSV ATYP
    let [version, command, reserved, addr_type] = reader.array::<4>(MessageField::Header)?;

    let address = decode_address(&mut reader, AddressType::try_from(addr_type)?)?;
    let port = reader.u16_be(MessageField::Port)?;

    Ok(ConnectionRequest {
        version,
        command,
        reserved,
        address,
        port,
    })
}

/// Decode DST.ADDR, checking that the address and the port both fit first
fn decode_address(reader: &mut Reader<'_>, addr_type: AddressType) -> Result<Address, DecodeError> {
    match addr_type {
        AddressType::Ipv4 => {
            reader.require(MessageField::Ipv4Address, IPV4_ADDR_LEN + PORT_LEN)?;
            let octets = reader.array::<IPV4_ADDR_LEN>(MessageField::Ipv4Address)?;
            Ok(Address::Ipv4(Ipv4Addr::from(octets)))
        }

        AddressType::DomainName => {
            let len = reader.u8(MessageField::DomainLength)?;
            if len == 0 || usize::from(len) > MAX_DOMAIN_LEN {
                return Err(DecodeError::InvalidDomainLength(len));
            }

            let len = usize::from(len);
            reader.require(MessageField::DomainName, len + PORT_LEN)?;
            let name = reader.bytes(MessageField::DomainName, len)?;
            Ok(Address::Domain(DomainName::new(name)?))
        }

        AddressType::Ipv6 => {
            reader.require(MessageField::Ipv6Address, IPV6_ADDR_LEN + PORT_LEN)?;
            let octets = reader.array::<IPV6_ADDR_LEN>(MessageField::Ipv6Address)?;
            Ok(Address::Ipv6(Ipv6Addr::from(octets)))
        }
    }
}

impl Address {
    /// Write ATYP followed by DST.ADDR
    pub fn encode_into(&self, buf: &mut BytesMut) {
        buf.put_u8(self.address_type().into());
        match self {
            Address::Ipv4(ip) => buf.put_slice(&ip.octets()),
            Address::Domain(name) => {
                buf.put_u8(name.len());
                buf.put_slice(name.as_bytes());
            }
            Address::Ipv6(ip) => buf.put_slice(&ip.octets()),
        }
    }
}

impl ConnectionRequest {
    /// Encode this request in wire format, port in network order
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        buf.put_u8(self.version);
        buf.put_u8(self.command);
        buf.put_u8(self.reserved);
        self.address.encode_into(&mut buf);
        buf.put_u16(self.port);
        buf.freeze()
    }
}
