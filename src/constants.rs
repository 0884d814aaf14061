//! Process-wide constants shared by the assembler and the executor.

/// Number of general-purpose register slots.
pub const REGISTER_COUNT: usize = 32;

/// Size in bytes of a word on this architecture.
pub const WORD_BYTES: u32 = 4;

/// Base byte address of the primary data memory region.
pub const DATA_BASE: u32 = 0x1001_0000;

/// Number of words in the data memory region.
pub const DATA_WORDS: usize = 128;

/// Byte address of the first instruction in the text segment.
pub const TEXT_BASE: u32 = 0x0040_0000;
