//! SOCKS5 message decoding
//!
//! Decoders for the two messages a SOCKS5 server must parse before it can
//! open a relayed connection: the method handshake and the connection
//! request. Both are pure functions over one caller-assembled buffer.
//! Reading from sockets and reassembling split messages is the caller's job.

mod consts;
mod handshake;
mod reader;
mod request;
mod types;

pub use consts::*;
pub use handshake::decode_handshake;
pub use request::decode_request;
pub use types::{
    Address, AddressType, AuthMethod, ConnectionRequest, DomainName, Handshake, SocksCommand,
};
