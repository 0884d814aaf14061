//! Wires the parser (`masm`) and the step executor (`mips-core`) together behind the
//! three commands the external shell is expected to drive: Load, Step and Convert. The
//! orchestrator owns the register file, memory and program counter; the shell never
//! touches them directly, only through the pull-style read methods below and the
//! callbacks passed into [`Orchestrator::step`].

use masm::EncodeError;
use mips_core::constants::{DATA_BASE, DATA_WORDS, TEXT_BASE, WORD_BYTES};
use mips_core::instruction::Instruction;
use mips_core::memory::Memory;
use mips_core::register::RegisterId;
use mips_core::{step, Machine, StepSink};
use std::collections::HashMap;

/// The orchestrator's state before the first successful [`Orchestrator::load`].
#[derive(Debug)]
pub struct NotLoaded;

pub struct Orchestrator {
    machine: Option<Machine>,
    instructions: Vec<Instruction>,
    labels: HashMap<String, usize>,
    current_line: usize,
}

impl Orchestrator {
    pub fn new() -> Orchestrator {
        Orchestrator {
            machine: None,
            instructions: Vec::new(),
            labels: HashMap::new(),
            current_line: 0,
        }
    }

    /// Parses `source`, installs its data table into a fresh memory, installs the text
    /// segment, and resets the register file and PC. `$ra` is primed with the
    /// conventional termination sentinel one word past the last instruction's address so
    /// a leaf `jr $ra` ends the run without a dedicated halt instruction.
    pub fn load(&mut self, source: &str) {
        let program = masm::parse(source);

        let mut machine = Machine::new(Memory::new(DATA_BASE, DATA_WORDS));
        machine.memory.load_named(&program.data);
        machine.registers.write(
            RegisterId::RA,
            TEXT_BASE + (program.instructions.len() as u32) * WORD_BYTES,
        );
        machine.pc = TEXT_BASE;

        self.instructions = program.instructions;
        self.labels = program.labels;
        self.current_line = 0;
        self.machine = Some(machine);

        log::info!(
            "loaded program: {} instructions, {} data words",
            self.instructions.len(),
            self.labels.len()
        );
    }

    /// Executes exactly one instruction. Requires [`Orchestrator::load`] to have run
    /// first. Does nothing but log once the program has run past its last instruction.
    pub fn step(&mut self, sink: &mut impl StepSink) -> Result<(), NotLoaded> {
        let machine = self.machine.as_mut().ok_or(NotLoaded)?;

        if self.current_line >= self.instructions.len() {
            sink.log("no more instructions".to_owned());
            return Ok(());
        }

        step(
            machine,
            &self.instructions,
            &mut self.current_line,
            &self.labels,
            sink,
        );
        Ok(())
    }

    /// The Convert command: encodes every text-segment line independently, pairing each
    /// source line with its machine code or the reason it couldn't be encoded (see the
    /// encoder's label restriction noted in SPEC_FULL.md).
    pub fn machine_code(&self) -> Vec<(String, Result<String, EncodeError>)> {
        self.instructions
            .iter()
            .map(|instr| (instr.source.clone(), masm::encode(&instr.source)))
            .collect()
    }

    pub fn register_values(&self) -> Vec<(&'static str, u32, u32)> {
        match &self.machine {
            Some(m) => m.registers.enumerate().collect(),
            None => Vec::new(),
        }
    }

    pub fn memory_snapshot(&self) -> Vec<u32> {
        match &self.machine {
            Some(m) => m.memory.snapshot().to_vec(),
            None => Vec::new(),
        }
    }

    pub fn program_counter(&self) -> u32 {
        self.machine.as_ref().map(|m| m.pc).unwrap_or(0)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Whether the run has advanced past the last instruction (via fallthrough, a taken
    /// jump past the end, or `jr` to the termination sentinel).
    pub fn finished(&self) -> bool {
        self.current_line >= self.instructions.len()
    }
}

impl Default for Orchestrator {
    fn default() -> Orchestrator {
        Orchestrator::new()
    }
}
