//! Core architectural state and step semantics for the teaching MIPS-I subset: the
//! register file, word-addressed memory, and the fetch/decode/execute engine.
//!
//! Assembling source into instructions lives in the `masm` crate; wiring this crate and
//! `masm` together behind a callback-driven run loop lives in `mrun`.

pub mod constants;
pub mod error;
pub mod executor;
pub mod instruction;
pub mod int_util;
pub mod memory;
pub mod register;

pub use error::{MemError, RegError};
pub use executor::{step, DelegateSink, Machine, StepSink};
pub use instruction::Instruction;
pub use memory::Memory;
pub use register::{RegisterFile, RegisterId};
