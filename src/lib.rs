//! # socks5-wire - SOCKS5 handshake and request decoding
//!
//! socks5-wire turns the raw bytes of the two messages a SOCKS5 server
//! must parse before relaying, the method handshake and the connection
//! request, into validated typed values. Malformed or truncated input is
//! rejected with a specific [`DecodeError`] and nothing is ever read past
//! the end of the supplied buffer.
//!
//! ## Usage
//!
//! ```rust
//! use socks5_wire::socks::{decode_handshake, decode_request, Address, AuthMethod};
//!
//! let handshake = decode_handshake(&[0x05, 0x01, 0x00]).unwrap();
//! assert!(handshake.offers(AuthMethod::NoAuth));
//!
//! let request = decode_request(&[0x05, 0x01, 0x00, 0x01, 127, 0, 0, 1, 0x00, 0x50]).unwrap();
//! assert_eq!(request.address, Address::Ipv4([127, 0, 0, 1].into()));
//! assert_eq!(request.port, 80);
//! ```
//!
//! ## Scope
//!
//! Decoding only. Socket I/O, reassembly of messages split across reads,
//! method negotiation and reply encoding belong to the caller.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod helper;
pub mod inspect;
pub mod socks;

// Re-export commonly used items
pub use config::{load_config, Config};
pub use error::{DecodeError, Error, MessageField, ReplyCode};
pub use socks::{decode_handshake, decode_request, Address, ConnectionRequest, Handshake};

/// Version of the socks5-wire library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the package
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "socks5-wire");
    }
}
