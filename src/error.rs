use thiserror::Error;

/// Failures raised by [`RegisterFile`](crate::register::RegisterFile) operations.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RegError {
    #[error("unknown register: {name}")]
    UnknownRegister { name: String },
}

/// Failures raised by [`Memory`](crate::memory::Memory) operations.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemError {
    #[error("unaligned memory access at address 0x{address:08X}")]
    UnalignedAccess { address: u32 },

    #[error("memory access out of bounds at address 0x{address:08X}")]
    OutOfBounds { address: u32 },
}
