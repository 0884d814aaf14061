use crate::constants;
use crate::error::RegError;
use std::fmt;

/// The 32 canonical register names, indexed by register number.
///
/// This table is a process-wide constant: it is built once and never mutated.
pub const NAMES: [&str; constants::REGISTER_COUNT] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Identifies one of the 32 general-purpose registers by its fixed 5-bit number.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct RegisterId(u8);

impl RegisterId {
    pub const ZERO: RegisterId = RegisterId(0);
    pub const GP: RegisterId = RegisterId(28);
    pub const RA: RegisterId = RegisterId(31);

    /// Looks up a register by its canonical `$name` form.
    pub fn from_name(name: &str) -> Option<RegisterId> {
        NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| RegisterId(i as u8))
    }

    /// Looks up a register by its 5-bit number. Returns `None` if out of range.
    pub fn from_number(n: u32) -> Option<RegisterId> {
        if (n as usize) < constants::REGISTER_COUNT {
            Some(RegisterId(n as u8))
        } else {
            None
        }
    }

    /// The register's 5-bit number (0-31).
    pub fn number(self) -> u32 {
        self.0 as u32
    }

    /// The register's canonical `$name` form.
    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 32-slot general purpose register file.
///
/// `$zero` always reads as zero; writes to it are silently ignored, matching hardware
/// semantics rather than treating it as an error.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    slots: [u32; constants::REGISTER_COUNT],
}

impl RegisterFile {
    pub fn new() -> RegisterFile {
        RegisterFile {
            slots: [0; constants::REGISTER_COUNT],
        }
    }

    pub fn read(&self, id: RegisterId) -> u32 {
        self.slots[id.number() as usize]
    }

    pub fn write(&mut self, id: RegisterId, value: u32) {
        if id == RegisterId::ZERO {
            return;
        }
        self.slots[id.number() as usize] = value;
    }

    /// Resolves `name` and reads it, failing for unrecognized register names.
    pub fn read_named(&self, name: &str) -> Result<u32, RegError> {
        let id = RegisterId::from_name(name).ok_or_else(|| RegError::UnknownRegister {
            name: name.to_owned(),
        })?;
        Ok(self.read(id))
    }

    /// Resolves `name` and writes it, failing for unrecognized register names.
    pub fn write_named(&mut self, name: &str, value: u32) -> Result<(), RegError> {
        let id = RegisterId::from_name(name).ok_or_else(|| RegError::UnknownRegister {
            name: name.to_owned(),
        })?;
        self.write(id, value);
        Ok(())
    }

    /// Resets every slot to zero (`$zero` is already zero and stays that way).
    pub fn clear_all(&mut self) {
        self.slots = [0; constants::REGISTER_COUNT];
    }

    /// Yields `(name, number, value)` triples in register-number order, for display.
    pub fn enumerate(&self) -> impl Iterator<Item = (&'static str, u32, u32)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &v)| (NAMES[i], i as u32, v))
    }
}

impl Default for RegisterFile {
    fn default() -> RegisterFile {
        RegisterFile::new()
    }
}
