//! SOCKS5 type definitions
//!
//! Defines the decoded forms of the method handshake and the connection
//! request, along with the address variant they carry.

use super::consts::*;
use crate::error::DecodeError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// SOCKS5 command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocksCommand {
    /// TCP CONNECT - establish a TCP connection to target
    Connect,
    /// TCP BIND - wait for incoming connection
    Bind,
    /// UDP ASSOCIATE - establish UDP relay
    UdpAssociate,
}

impl SocksCommand {
    /// Parse a command byte into SocksCommand
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SOCKS5_CMD_TCP_CONNECT => Some(SocksCommand::Connect),
            SOCKS5_CMD_TCP_BIND => Some(SocksCommand::Bind),
            SOCKS5_CMD_UDP_ASSOCIATE => Some(SocksCommand::UdpAssociate),
            _ => None,
        }
    }

    /// Convert SocksCommand to byte
    pub fn to_byte(self) -> u8 {
        match self {
            SocksCommand::Connect => SOCKS5_CMD_TCP_CONNECT,
            SocksCommand::Bind => SOCKS5_CMD_TCP_BIND,
            SocksCommand::UdpAssociate => SOCKS5_CMD_UDP_ASSOCIATE,
        }
    }
}

impl fmt::Display for SocksCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocksCommand::Connect => write!(f, "CONNECT"),
            SocksCommand::Bind => write!(f, "BIND"),
            SocksCommand::UdpAssociate => write!(f, "UDP ASSOCIATE"),
        }
    }
}

/// Authentication methods a client may list in its handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// No authentication required
    NoAuth,
    /// GSSAPI
    GssApi,
    /// Username/password authentication
    UsernamePassword,
}

impl AuthMethod {
    /// Convert to SOCKS5 method byte
    pub fn to_byte(self) -> u8 {
        match self {
            AuthMethod::NoAuth => SOCKS5_AUTH_METHOD_NONE,
            AuthMethod::GssApi => SOCKS5_AUTH_METHOD_GSSAPI,
            AuthMethod::UsernamePassword => SOCKS5_AUTH_METHOD_PASSWORD,
        }
    }

    /// Parse from SOCKS5 method byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            SOCKS5_AUTH_METHOD_NONE => Some(AuthMethod::NoAuth),
            SOCKS5_AUTH_METHOD_GSSAPI => Some(AuthMethod::GssApi),
            SOCKS5_AUTH_METHOD_PASSWORD => Some(AuthMethod::UsernamePassword),
            _ => None,
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::NoAuth => write!(f, "NO AUTHENTICATION"),
            AuthMethod::GssApi => write!(f, "GSSAPI"),
            AuthMethod::UsernamePassword => write!(f, "USERNAME/PASSWORD"),
        }
    }
}

/// Address type tag of a connection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressType {
    /// 4-byte IPv4 address
    Ipv4 = SOCKS5_ADDR_TYPE_IPV4,
    /// Length-prefixed domain name
    DomainName = SOCKS5_ADDR_TYPE_DOMAIN,
    /// 16-byte IPv6 address
    Ipv6 = SOCKS5_ADDR_TYPE_IPV6,
}

impl From<AddressType> for u8 {
    fn from(tag: AddressType) -> Self {
        tag as u8
    }
}

impl TryFrom<u8> for AddressType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            SOCKS5_ADDR_TYPE_IPV4 => Ok(AddressType::Ipv4),
            SOCKS5_ADDR_TYPE_DOMAIN => Ok(AddressType::DomainName),
            SOCKS5_ADDR_TYPE_IPV6 => Ok(AddressType::Ipv6),
            other => Err(DecodeError::UnsupportedAddressType(other)),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressType::Ipv4 => write!(f, "IPv4"),
            AddressType::DomainName => write!(f, "DOMAINNAME"),
            AddressType::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// Domain name carried in a request, 1 to 254 bytes
///
/// The bytes are kept as received. SOCKS5 does not promise they are UTF-8,
/// so no decoding happens until a caller asks for text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Vec<u8>);

impl DomainName {
    /// Create a domain name, rejecting empty or over-long input
    pub fn new(name: impl Into<Vec<u8>>) -> Result<Self, DecodeError> {
        let name = name.into();
        match u8::try_from(name.len()) {
            Ok(len) if len >= 1 && usize::from(len) <= MAX_DOMAIN_LEN => Ok(DomainName(name)),
            Ok(len) => Err(DecodeError::InvalidDomainLength(len)),
            Err(_) => Err(DecodeError::InvalidDomainLength(u8::MAX)),
        }
    }

    /// Length byte as sent on the wire
    pub fn len(&self) -> u8 {
        // bounded to 1..=254 by `new`
        self.0.len() as u8
    }

    /// Always false; an empty name cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw name bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Name as text, with invalid UTF-8 replaced
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Destination address of a connection request
///
/// Exactly one representation exists per value, selected by the address
/// type tag it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// IPv4 address
    Ipv4(Ipv4Addr),
    /// Domain name
    Domain(DomainName),
    /// IPv6 address
    Ipv6(Ipv6Addr),
}

impl Address {
    /// Create a domain address
    pub fn domain(name: impl Into<Vec<u8>>) -> Result<Self, DecodeError> {
        DomainName::new(name).map(Address::Domain)
    }

    /// Get the address type tag for this address
    pub fn address_type(&self) -> AddressType {
        match self {
            Address::Ipv4(_) => AddressType::Ipv4,
            Address::Domain(_) => AddressType::DomainName,
            Address::Ipv6(_) => AddressType::Ipv6,
        }
    }

    /// IP address, if this is not a domain name
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Address::Ipv4(ip) => Some(IpAddr::V4(*ip)),
            Address::Ipv6(ip) => Some(IpAddr::V6(*ip)),
            Address::Domain(_) => None,
        }
    }

    /// Size of the address payload on the wire, including the domain length byte
    pub fn encoded_len(&self) -> usize {
        match self {
            Address::Ipv4(_) => IPV4_ADDR_LEN,
            Address::Domain(name) => 1 + usize::from(name.len()),
            Address::Ipv6(_) => IPV6_ADDR_LEN,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Ipv4(ip) => write!(f, "{}", ip),
            Address::Domain(name) => write!(f, "{}", name),
            Address::Ipv6(ip) => write!(f, "[{}]", ip),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::Ipv4(ip)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address::Ipv6(ip)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ip) => Address::Ipv4(ip),
            IpAddr::V6(ip) => Address::Ipv6(ip),
        }
    }
}

/// Client method-selection message
///
/// ```text
/// +----+----------+----------+
/// |VER | NMETHODS | METHODS  |
/// +----+----------+----------+
/// | 1  |    1     | 1 to 255 |
/// +----+----------+----------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    version: u8,
    methods: Vec<u8>,
}

impl Handshake {
    /// Create a handshake offering `methods`
    ///
    /// Fails with [`DecodeError::InvalidMethodCount`] unless 1 to 255
    /// methods are given.
    pub fn new(version: u8, methods: impl Into<Vec<u8>>) -> Result<Self, DecodeError> {
        let methods = methods.into();
        if methods.is_empty() || methods.len() > usize::from(u8::MAX) {
            return Err(DecodeError::InvalidMethodCount);
        }
        Ok(Handshake { version, methods })
    }

    /// Protocol version byte
    pub fn version(&self) -> u8 {
        self.version
    }

    /// NMETHODS byte; always equal to `methods().len()`
    pub fn method_count(&self) -> u8 {
        self.methods.len() as u8
    }

    /// Offered method identifiers in wire order
    pub fn methods(&self) -> &[u8] {
        &self.methods
    }

    /// Whether the client listed `method`
    pub fn offers(&self, method: AuthMethod) -> bool {
        self.methods.contains(&method.to_byte())
    }

    /// Size of this message on the wire
    pub fn encoded_len(&self) -> usize {
        2 + self.methods.len()
    }
}

/// Client connection request
///
/// ```text
/// +----+-----+-------+------+----------+----------+
/// |VER | CMD |  RSV  | ATYP | DST.ADDR | DST.PORT |
/// +----+-----+-------+------+----------+----------+
/// | 1  |  1  | X'00' |  1   | Variable |    2     |
/// +----+-----+-------+------+----------+----------+
/// ```
///
/// `command` and `reserved` are kept verbatim; interpreting them is left
/// to the layer that acts on the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    /// Protocol version byte
    pub version: u8,
    /// Command byte
    pub command: u8,
    /// Reserved byte
    pub reserved: u8,
    /// Destination address
    pub address: Address,
    /// Destination port in host order
    pub port: u16,
}

impl ConnectionRequest {
    /// Create a version 5 request with a zero reserved byte
    pub fn new(command: SocksCommand, address: Address, port: u16) -> Self {
        ConnectionRequest {
            version: SOCKS5_VERSION,
            command: command.to_byte(),
            reserved: SOCKS5_RESERVED,
            address,
            port,
        }
    }

    /// Address type tag of the destination
    pub fn address_type(&self) -> AddressType {
        self.address.address_type()
    }

    /// Command byte interpreted as a known SOCKS5 command
    pub fn command_kind(&self) -> Option<SocksCommand> {
        SocksCommand::from_byte(self.command)
    }

    /// Destination as a socket address, unless it is a domain name
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.address.ip().map(|ip| SocketAddr::new(ip, self.port))
    }

    /// Size of this message on the wire
    pub fn encoded_len(&self) -> usize {
        REQUEST_HEADER_LEN + self.address.encoded_len() + PORT_LEN
    }
}

impl fmt::Display for ConnectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.command_kind() {
            Some(command) => write!(f, "{} {}:{}", command, self.address, self.port),
            None => write!(
                f,
                "CMD(0x{:02X}) {}:{}",
                self.command, self.address, self.port
            ),
        }
    }
}
