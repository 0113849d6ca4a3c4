//! Decode-and-report layer used by `socks5-inspect`
//!
//! Runs one of the decoders over a complete message and renders every
//! decoded field. This is also where decode outcomes get logged, since the
//! decoders themselves stay silent.

use crate::config::{InspectConfig, MessageKind};
use crate::error::Error;
use crate::helper::to_hex;
use crate::socks::{
    decode_handshake, decode_request, Address, AuthMethod, ConnectionRequest, Handshake,
};
use std::fmt;
use tracing::{debug, warn};

/// A successfully decoded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Method handshake
    Handshake(Handshake),
    /// Connection request
    Request(ConnectionRequest),
}

impl Decoded {
    /// Bytes the message occupies on the wire
    pub fn encoded_len(&self) -> usize {
        match self {
            Decoded::Handshake(handshake) => handshake.encoded_len(),
            Decoded::Request(request) => request.encoded_len(),
        }
    }
}

/// Outcome of inspecting one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Input bytes, kept only when the config asks to echo them
    pub input: Option<Vec<u8>>,
    /// Decoded message
    pub decoded: Decoded,
    /// Bytes after the end of the message
    pub trailing: usize,
}

/// Decode `bytes` as `kind` and build a report
///
/// In strict mode bytes left after a complete message are an error;
/// otherwise they are only counted.
pub fn inspect(bytes: &[u8], kind: MessageKind, config: &InspectConfig) -> Result<Report, Error> {
    let decoded = match kind {
        MessageKind::Handshake => decode_handshake(bytes).map(Decoded::Handshake),
        MessageKind::Request => decode_request(bytes).map(Decoded::Request),
    };

    let decoded = match decoded {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(kind = ?kind, len = bytes.len(), "Rejected message: {}", e);
            return Err(e.into());
        }
    };

    let consumed = decoded.encoded_len();
    let trailing = bytes.len() - consumed;
    debug!(kind = ?kind, consumed, trailing, "Decoded message");

    if config.strict && trailing > 0 {
        warn!(consumed, total = bytes.len(), "Trailing bytes after message");
        return Err(Error::TrailingBytes {
            consumed,
            total: bytes.len(),
        });
    }

    Ok(Report {
        input: config.show_hex.then(|| bytes.to_vec()),
        decoded,
        trailing,
    })
}

fn method_name(method: u8) -> String {
    match AuthMethod::from_byte(method) {
        Some(known) => known.to_string(),
        None if (0x03..=0x7F).contains(&method) => "IANA ASSIGNED".to_string(),
        None if method >= 0x80 && method != 0xFF => "PRIVATE".to_string(),
        None => "NO ACCEPTABLE METHODS".to_string(),
    }
}

fn write_handshake(f: &mut fmt::Formatter<'_>, handshake: &Handshake) -> fmt::Result {
    writeln!(f, "handshake")?;
    writeln!(f, "  version:  {}", handshake.version())?;
    writeln!(f, "  methods:  {}", handshake.method_count())?;
    for method in handshake.methods() {
        writeln!(f, "    0x{:02X} {}", method, method_name(*method))?;
    }
    Ok(())
}

fn write_request(f: &mut fmt::Formatter<'_>, request: &ConnectionRequest) -> fmt::Result {
    writeln!(f, "request")?;
    writeln!(f, "  version:  {}", request.version)?;
    match request.command_kind() {
        Some(command) => writeln!(f, "  command:  0x{:02X} {}", request.command, command)?,
        None => writeln!(f, "  command:  0x{:02X} (unknown)", request.command)?,
    }
    writeln!(f, "  reserved: 0x{:02X}", request.reserved)?;
    writeln!(
        f,
        "  atyp:     0x{:02X} {}",
        u8::from(request.address_type()),
        request.address_type()
    )?;
    match &request.address {
        Address::Domain(name) => {
            writeln!(f, "  address:  {} ({} bytes)", name, name.len())?
        }
        other => writeln!(f, "  address:  {}", other)?,
    }
    writeln!(f, "  port:     {}", request.port)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(input) = &self.input {
            writeln!(f, "input:      {}", to_hex(input))?;
        }
        match &self.decoded {
            Decoded::Handshake(handshake) => write_handshake(f, handshake)?,
            Decoded::Request(request) => write_request(f, request)?,
        }
        if self.trailing > 0 {
            writeln!(f, "  trailing: {} bytes", self.trailing)?;
        }
        Ok(())
    }
}
