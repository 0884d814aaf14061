//! Parses MIPS-I subset assembly source into a data table, a text segment instruction
//! list and a label map, and encodes individual instruction lines into 32-bit machine
//! code.

mod data;
mod encoder;
mod error;
mod instructions;

pub use encoder::encode;
pub use error::EncodeError;

use mips_core::instruction::Instruction;
use std::collections::HashMap;

/// The result of parsing one assembly source file.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub data: Vec<(String, i32)>,
    pub instructions: Vec<Instruction>,
    pub labels: HashMap<String, usize>,
}

/// Parses `source` into a [`Program`]. Malformed `.data` lines are skipped and logged;
/// the text segment is always fully stripped of comments and labels before addresses are
/// assigned (see `data::process_data` and `instructions::process_instructions`).
pub fn parse(source: &str) -> Program {
    let lines: Vec<&str> = source.lines().collect();
    let data = data::process_data(&lines);
    let (instructions, labels) = instructions::process_instructions(&lines);

    Program {
        data,
        instructions,
        labels,
    }
}
