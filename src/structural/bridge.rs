//! Bridge Pattern
//!
//! Splits an abstraction (remote controls) from its implementation (devices) so
//! both sides can grow independently. Any remote works with any device.
//!
//! Run with: cargo run --bin bridge

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Implementation side
// ============================================================================

pub trait Device {
    fn turn_on(&mut self) -> String;
    fn turn_off(&mut self) -> String;
    fn is_on(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct Radio {
    on: bool,
}

impl Device for Radio {
    fn turn_on(&mut self) -> String {
        self.on = true;
        "Radio turned on".to_string()
    }

    fn turn_off(&mut self) -> String {
        self.on = false;
        "Radio turned off".to_string()
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct Tv {
    on: bool,
}

impl Device for Tv {
    fn turn_on(&mut self) -> String {
        self.on = true;
        "TV turned on".to_string()
    }

    fn turn_off(&mut self) -> String {
        self.on = false;
        "TV turned off".to_string()
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

// ============================================================================
// Abstraction side
// ============================================================================

pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn toggle_power(&mut self) -> String {
        if self.device.is_on() {
            self.device.turn_off()
        } else {
            self.device.turn_on()
        }
    }

    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }
}

/// Refined abstraction: everything a basic remote does, plus mute.
pub struct AdvancedRemoteControl {
    remote: RemoteControl,
}

impl AdvancedRemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self {
            remote: RemoteControl::new(device),
        }
    }

    pub fn toggle_power(&mut self) -> String {
        self.remote.toggle_power()
    }

    pub fn mute(&self) -> String {
        "Device muted".to_string()
    }

    pub fn device(&self) -> &dyn Device {
        self.remote.device()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut remote = RemoteControl::new(Box::new(Tv::default()));
    out.line(remote.toggle_power());
    out.line(remote.toggle_power());

    let mut advanced_remote = AdvancedRemoteControl::new(Box::new(Radio::default()));
    out.line(advanced_remote.toggle_power());
    out.line(advanced_remote.mute());
    Ok(out)
}
