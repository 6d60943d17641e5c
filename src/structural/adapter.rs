//! Adapter Pattern
//!
//! A wrapper that lets a type with an incompatible interface (the adaptee) be
//! used where another interface (the target) is expected.
//!
//! Run with: cargo run --bin adapter

use crate::error::Result;
use crate::transcript::Transcript;

// Target interface the client code expects
pub trait EuropeanSocket {
    fn charge(&self) -> String;
}

pub struct EuropeanPlug;

impl EuropeanSocket for EuropeanPlug {
    fn charge(&self) -> String {
        "Charging with European socket".to_string()
    }
}

// Adaptee with a different interface
pub struct UsaSocket;

impl UsaSocket {
    pub fn power(&self) -> String {
        "Powering with USA socket".to_string()
    }
}

pub struct SocketAdapter {
    usa_socket: UsaSocket,
}

impl SocketAdapter {
    pub fn new(usa_socket: UsaSocket) -> Self {
        Self { usa_socket }
    }
}

impl EuropeanSocket for SocketAdapter {
    fn charge(&self) -> String {
        let power = self.usa_socket.power();
        format!("Adapting {} to European charging standard", power)
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let adapter = SocketAdapter::new(UsaSocket);
    out.line(adapter.charge());
    Ok(out)
}
