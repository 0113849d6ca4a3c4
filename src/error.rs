//! Error types for socks5-wire
//!
//! [`DecodeError`] is what the decoders return; [`Error`] wraps it together
//! with the failures of the configuration and inspection layers.

use std::fmt;
use std::io;
use thiserror::Error;

/// Main error type for socks5-wire operations outside the decoders
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed hex input
    #[error("Invalid hex input: {0}")]
    Hex(String),

    /// SOCKS5 decode error
    #[error("SOCKS5 decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A complete message was followed by extra bytes in strict mode
    #[error("Trailing bytes: message uses {consumed} of {total} bytes")]
    TrailingBytes {
        /// Bytes used by the decoded message
        consumed: usize,
        /// Bytes supplied by the caller
        total: usize,
    },
}

/// The part of a message a truncated buffer failed to cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageField {
    /// Fixed header bytes (version, count, command, reserved, address type)
    Header,
    /// Handshake method list
    Methods,
    /// Length byte in front of a domain name
    DomainLength,
    /// Domain name bytes
    DomainName,
    /// IPv4 address
    Ipv4Address,
    /// IPv6 address
    Ipv6Address,
    /// Destination port
    Port,
}

impl fmt::Display for MessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageField::Header => "header",
            MessageField::Methods => "method list",
            MessageField::DomainLength => "domain length",
            MessageField::DomainName => "domain name",
            MessageField::Ipv4Address => "IPv4 address",
            MessageField::Ipv6Address => "IPv6 address",
            MessageField::Port => "port",
        };
        f.write_str(name)
    }
}

/// Reasons a SOCKS5 message fails to decode
///
/// Every variant is terminal for the call that produced it. None of them
/// carries a partially decoded message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer shorter than the fixed header of the message
    #[error("Invalid length: {actual} bytes, need at least {minimum}")]
    InvalidLength {
        /// Bytes supplied
        actual: usize,
        /// Fixed header size
        minimum: usize,
    },

    /// Version byte is not 0x05
    #[error("Unsupported SOCKS version: {0}")]
    UnsupportedVersion(u8),

    /// Handshake offers no methods
    #[error("Invalid method count: 0")]
    InvalidMethodCount,

    /// Domain length byte is 0 or above 254
    #[error("Invalid domain length: {0}")]
    InvalidDomainLength(u8),

    /// Address type tag is not IPv4, domain or IPv6
    #[error("Unsupported address type: {0}")]
    UnsupportedAddressType(u8),

    /// A length required by previously read fields exceeds the buffer
    #[error("Truncated message: {field} needs {needed} bytes, buffer has {available}")]
    TruncatedMessage {
        /// Field that did not fit
        field: MessageField,
        /// Total buffer length required to read the field
        needed: usize,
        /// Total buffer length supplied
        available: usize,
    },
}

impl DecodeError {
    /// Reply code a server would typically answer a rejected request with
    ///
    /// Only a hint for the caller: which reply to send, if any, is not
    /// decided here.
    pub fn reply_code(&self) -> ReplyCode {
        match self {
            DecodeError::UnsupportedAddressType(_) => ReplyCode::AddressTypeNotSupported,
            _ => ReplyCode::GeneralFailure,
        }
    }
}

/// Reply codes for SOCKS5 protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReplyCode {
    /// Command succeeded
    Succeeded = 0x00,
    /// General SOCKS server failure
    GeneralFailure = 0x01,
    /// Connection not allowed by ruleset
    ConnectionNotAllowed = 0x02,
    /// Network unreachable
    NetworkUnreachable = 0x03,
    /// Host unreachable
    HostUnreachable = 0x04,
    /// Connection refused
    ConnectionRefused = 0x05,
    /// TTL expired
    TtlExpired = 0x06,
    /// Command not supported
    CommandNotSupported = 0x07,
    /// Address type not supported
    AddressTypeNotSupported = 0x08,
}

impl From<ReplyCode> for u8 {
    fn from(code: ReplyCode) -> Self {
        code as u8
    }
}

impl TryFrom<u8> for ReplyCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(ReplyCode::Succeeded),
            0x01 => Ok(ReplyCode::GeneralFailure),
            0x02 => Ok(ReplyCode::ConnectionNotAllowed),
            0x03 => Ok(ReplyCode::NetworkUnreachable),
            0x04 => Ok(ReplyCode::HostUnreachable),
            0x05 => Ok(ReplyCode::ConnectionRefused),
            0x06 => Ok(ReplyCode::TtlExpired),
            0x07 => Ok(ReplyCode::CommandNotSupported),
            0x08 => Ok(ReplyCode::AddressTypeNotSupported),
            other => Err(other),
        }
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ReplyCode::Succeeded => "succeeded",
            ReplyCode::GeneralFailure => "general SOCKS server failure",
            ReplyCode::ConnectionNotAllowed => "connection not allowed by ruleset",
            ReplyCode::NetworkUnreachable => "network unreachable",
            ReplyCode::HostUnreachable => "host unreachable",
            ReplyCode::ConnectionRefused => "connection refused",
            ReplyCode::TtlExpired => "TTL expired",
            ReplyCode::CommandNotSupported => "command not supported",
            ReplyCode::AddressTypeNotSupported => "address type not supported",
        };
        write!(f, "0x{:02X} ({})", u8::from(*self), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_code_from_u8_valid() {
        assert_eq!(ReplyCode::try_from(0x00), Ok(ReplyCode::Succeeded));
        assert_eq!(ReplyCode::try_from(0x01), Ok(ReplyCode::GeneralFailure));
        assert_eq!(ReplyCode::try_from(0x07), Ok(ReplyCode::CommandNotSupported));
        assert_eq!(
            ReplyCode::try_from(0x08),
            Ok(ReplyCode::AddressTypeNotSupported)
        );
    }

    #[test]
    fn test_reply_code_from_u8_invalid() {
        assert_eq!(ReplyCode::try_from(0x09), Err(0x09));
        assert_eq!(ReplyCode::try_from(0xFF), Err(0xFF));
    }

    #[test]
    fn test_reply_code_to_u8() {
        assert_eq!(u8::from(ReplyCode::Succeeded), 0x00);
        assert_eq!(u8::from(ReplyCode::HostUnreachable), 0x04);
        assert_eq!(u8::from(ReplyCode::AddressTypeNotSupported), 0x08);
    }

    #[test]
    fn test_reply_code_display() {
        assert_eq!(
            ReplyCode::AddressTypeNotSupported.to_string(),
            "0x08 (address type not supported)"
        );
    }

    #[test]
    fn test_decode_error_reply_code() {
        assert_eq!(
            DecodeError::UnsupportedAddressType(0x02).reply_code(),
            ReplyCode::AddressTypeNotSupported
        );
        assert_eq!(
            DecodeError::UnsupportedVersion(4).reply_code(),
            ReplyCode::GeneralFailure
        );
        assert_eq!(
            DecodeError::InvalidDomainLength(0).reply_code(),
            ReplyCode::GeneralFailure
        );
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::InvalidLength {
            actual: 2,
            minimum: 3,
        };
        assert_eq!(format!("{}", err), "Invalid length: 2 bytes, need at least 3");

        let err = DecodeError::UnsupportedVersion(4);
        assert_eq!(format!("{}", err), "Unsupported SOCKS version: 4");

        let err = DecodeError::InvalidMethodCount;
        assert_eq!(format!("{}", err), "Invalid method count: 0");

        let err = DecodeError::InvalidDomainLength(255);
        assert_eq!(format!("{}", err), "Invalid domain length: 255");

        let err = DecodeError::UnsupportedAddressType(0x99);
        assert_eq!(format!("{}", err), "Unsupported address type: 153");

        let err = DecodeError::TruncatedMessage {
            field: MessageField::Ipv6Address,
            needed: 22,
            available: 10,
        };
        assert_eq!(
            format!("{}", err),
            "Truncated message: IPv6 address needs 22 bytes, buffer has 10"
        );
    }

    #[test]
    fn test_message_field_display() {
        assert_eq!(MessageField::Header.to_string(), "header");
        assert_eq!(MessageField::Methods.to_string(), "method list");
        assert_eq!(MessageField::Port.to_string(), "port");
    }

    #[test]
    fn test_error_from_decode() {
        let err: Error = DecodeError::InvalidMethodCount.into();
        assert!(matches!(err, Error::Decode(DecodeError::InvalidMethodCount)));
        assert_eq!(
            format!("{}", err),
            "SOCKS5 decode error: Invalid method count: 0"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::Other, "io error");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_display() {
        let err = Error::Config("bad level".to_string());
        assert_eq!(format!("{}", err), "Configuration error: bad level");

        let err = Error::TrailingBytes {
            consumed: 10,
            total: 12,
        };
        assert_eq!(
            format!("{}", err),
            "Trailing bytes: message uses 10 of 12 bytes"
        );
    }
}
