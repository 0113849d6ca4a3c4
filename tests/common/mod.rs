//! Test utilities for socks5-wire
//!
//! Builders for raw wire messages used across integration tests.

#![allow(dead_code)]

use socks5_wire::socks::{
    SOCKS5_ADDR_TYPE_DOMAIN, SOCKS5_ADDR_TYPE_IPV4, SOCKS5_ADDR_TYPE_IPV6, SOCKS5_RESERVED,
    SOCKS5_VERSION,
};

/// Build a handshake offering `methods`
pub fn handshake_bytes(methods: &[u8]) -> Vec<u8> {
    let mut message = vec![SOCKS5_VERSION, methods.len() as u8];
    message.extend_from_slice(methods);
    message
}

/// Raw request builder
pub struct RequestBuilder {
    version: u8,
    command: u8,
    reserved: u8,
    address: Vec<u8>,
    port: u16,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        RequestBuilder {
            version: SOCKS5_VERSION,
            command: 0x01,
            reserved: SOCKS5_RESERVED,
            address: vec![SOCKS5_ADDR_TYPE_IPV4, 127, 0, 0, 1],
            port: 80,
        }
    }
}

impl RequestBuilder {
    /// Create a new builder for CONNECT 127.0.0.1:80
    pub fn new() -> Self {
        Self::default()
    }

    /// Set version byte
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Set command byte
    pub fn command(mut self, command: u8) -> Self {
        self.command = command;
        self
    }

    /// Set reserved byte
    pub fn reserved(mut self, reserved: u8) -> Self {
        self.reserved = reserved;
        self
    }

    /// Use an IPv4 destination
    pub fn ipv4(mut self, ip: [u8; 4]) -> Self {
        self.address = vec![SOCKS5_ADDR_TYPE_IPV4];
        self.address.extend_from_slice(&ip);
        self
    }

    /// Use an IPv6 destination
    pub fn ipv6(mut self, ip: [u8; 16]) -> Self {
        self.address = vec![SOCKS5_ADDR_TYPE_IPV6];
        self.address.extend_from_slice(&ip);
        self
    }

    /// Use a domain destination; the length byte is taken from `name`
    pub fn domain(mut self, name: &[u8]) -> Self {
        self.address = vec![SOCKS5_ADDR_TYPE_DOMAIN, name.len() as u8];
        self.address.extend_from_slice(name);
        self
    }

    /// Use an arbitrary address type byte and payload
    pub fn raw_address(mut self, atyp: u8, payload: &[u8]) -> Self {
        self.address = vec![atyp];
        self.address.extend_from_slice(payload);
        self
    }

    /// Set destination port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Build the wire message
    pub fn build(self) -> Vec<u8> {
        let mut message = vec![self.version, self.command, self.reserved];
        message.extend_from_slice(&self.address);
        message.extend_from_slice(&self.port.to_be_bytes());
        message
    }
}
