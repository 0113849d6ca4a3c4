//! SOCKS5 protocol constants
//!
//! Defines the constants needed to decode the client handshake and the
//! connection request.

/// SOCKS5 protocol version
pub const SOCKS5_VERSION: u8 = 0x05;

// Authentication methods
/// No authentication required
pub const SOCKS5_AUTH_METHOD_NONE: u8 = 0x00;
/// GSSAPI authentication
pub const SOCKS5_AUTH_METHOD_GSSAPI: u8 = 0x01;
/// Username/password authentication
pub const SOCKS5_AUTH_METHOD_PASSWORD: u8 = 0x02;
/// No acceptable methods
pub const SOCKS5_AUTH_METHOD_NOT_ACCEPTABLE: u8 = 0xFF;

// Commands
/// TCP CONNECT command
pub const SOCKS5_CMD_TCP_CONNECT: u8 = 0x01;
/// TCP BIND command
pub const SOCKS5_CMD_TCP_BIND: u8 = 0x02;
/// UDP ASSOCIATE command
pub const SOCKS5_CMD_UDP_ASSOCIATE: u8 = 0x03;

// Address types
/// IPv4 address
pub const SOCKS5_ADDR_TYPE_IPV4: u8 = 0x01;
/// Domain name
pub const SOCKS5_ADDR_TYPE_DOMAIN: u8 = 0x03;
/// IPv6 address
pub const SOCKS5_ADDR_TYPE_IPV6: u8 = 0x04;

/// Reserved byte value a well-behaved client sends
pub const SOCKS5_RESERVED: u8 = 0x00;

// Field sizes
/// Size of an IPv4 address on the wire
pub const IPV4_ADDR_LEN: usize = 4;
/// Size of an IPv6 address on the wire
pub const IPV6_ADDR_LEN: usize = 16;
/// Size of the port field on the wire
pub const PORT_LEN: usize = 2;
/// Maximum domain name length accepted in a request
pub const MAX_DOMAIN_LEN: usize = 254;

/// Smallest valid handshake: VER, NMETHODS and one method
pub const MIN_HANDSHAKE_LEN: usize = 3;
/// Fixed request header: VER, CMD, RSV, ATYP
pub const REQUEST_HEADER_LEN: usize = 4;
