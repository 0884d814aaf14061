//! The fetch/decode/execute step engine.
//!
//! [`step`] interprets exactly one [`Instruction`], mutating the register file, memory
//! and program counter, and reports what happened through a [`StepSink`]. Failures never
//! abort the run: an invalid operand is logged and the step still advances the program
//! counter by one word, per the error-handling policy in spec.md §7.

use crate::constants;
use crate::instruction::{tokenize, Instruction};
use crate::int_util::parse_integer;
use crate::memory::Memory;
use crate::register::{RegisterFile, RegisterId};
use std::collections::HashMap;

/// Owns the architectural state the executor mutates: registers, memory and PC.
#[derive(Clone, Debug)]
pub struct Machine {
    pub registers: RegisterFile,
    pub memory: Memory,
    pub pc: u32,
}

impl Machine {
    pub fn new(memory: Memory) -> Machine {
        Machine {
            registers: RegisterFile::new(),
            memory,
            pc: constants::TEXT_BASE,
        }
    }
}

/// Receives the two notifications a [`step`] call may emit, in the order spec.md §5
/// requires: mutations complete, then `pc_changed`, then zero or more `log` calls.
pub trait StepSink {
    fn pc_changed(&mut self, pc: u32);
    fn log(&mut self, message: String);
}

/// Wraps a pair of closures as a [`StepSink`], the same shape as the teacher's
/// `IOHandler`/`DelegateIOHandler` callback pattern.
pub struct DelegateSink<FP, FL>
where
    FP: FnMut(u32),
    FL: FnMut(String),
{
    pc_changed: FP,
    log: FL,
}

impl<FP, FL> DelegateSink<FP, FL>
where
    FP: FnMut(u32),
    FL: FnMut(String),
{
    pub fn new(pc_changed: FP, log: FL) -> DelegateSink<FP, FL> {
        DelegateSink { pc_changed, log }
    }
}

impl<FP, FL> StepSink for DelegateSink<FP, FL>
where
    FP: FnMut(u32),
    FL: FnMut(String),
{
    fn pc_changed(&mut self, pc: u32) {
        (self.pc_changed)(pc)
    }

    fn log(&mut self, message: String) {
        (self.log)(message)
    }
}

enum Control {
    Continue,
    Jumped,
    Terminated,
}

enum MemOperand {
    Offset { offset: i64, base: String },
    Label(String),
}

fn parse_mem_operand(token: &str) -> MemOperand {
    if let Some(open) = token.find('(') {
        if let Some(close) = token[open..].find(')') {
            let close = open + close;
            let offset_str = token[..open].trim();
            let base_str = token[open + 1..close].trim();
            let offset = if offset_str.is_empty() {
                0
            } else {
                parse_integer(offset_str).unwrap_or(0)
            };
            return MemOperand::Offset {
                offset,
                base: base_str.to_owned(),
            };
        }
    }
    MemOperand::Label(token.to_owned())
}

fn reg(token: &str) -> Result<RegisterId, String> {
    RegisterId::from_name(token).ok_or_else(|| format!("unknown register: {}", token))
}

fn imm(token: &str) -> Result<i32, String> {
    parse_integer(token)
        .map(|v| v as i32)
        .ok_or_else(|| format!("invalid integer literal: {}", token))
}

/// Executes exactly one instruction: `instructions[*current_line]`.
///
/// Standalone `label:` lines are treated as no-ops that still cost a PC tick (spec.md
/// §4.5/§9) — this only matters for instruction lists a non-stripping parser variant
/// might produce; `masm` itself strips labels at parse time.
pub fn step(
    machine: &mut Machine,
    instructions: &[Instruction],
    current_line: &mut usize,
    labels: &HashMap<String, usize>,
    sink: &mut impl StepSink,
) {
    while *current_line < instructions.len()
        && instructions[*current_line].source.trim_end().ends_with(':')
    {
        machine.pc = machine.pc.wrapping_add(constants::WORD_BYTES);
        *current_line += 1;
    }

    if *current_line >= instructions.len() {
        sink.pc_changed(machine.pc);
        sink.log("=== Program execution completed ===".to_owned());
        return;
    }

    let instr = instructions[*current_line].clone();
    sink.log(format!(
        "Executing at 0x{:08X}: {}",
        instr.address, instr.source
    ));

    let control = dispatch(machine, instructions, current_line, labels, &instr.source, sink);

    if let Control::Continue = control {
        machine.pc = machine.pc.wrapping_add(constants::WORD_BYTES);
        *current_line += 1;
    }

    sink.pc_changed(machine.pc);

    if matches!(control, Control::Continue | Control::Jumped) && *current_line >= instructions.len()
    {
        sink.log("=== Program execution completed ===".to_owned());
    }
}

fn dispatch(
    machine: &mut Machine,
    instructions: &[Instruction],
    current_line: &mut usize,
    labels: &HashMap<String, usize>,
    source: &str,
    sink: &mut impl StepSink,
) -> Control {
    let tokens = tokenize(source);
    let command = match tokens.first() {
        Some(c) => c.as_str(),
        None => return Control::Continue,
    };
    let operands = &tokens[1..];

    let result: Result<Control, String> = (|| match command {
        "add" | "sub" | "and" | "or" | "slt" => {
            execute_r_type(machine, command, operands, sink)
        }
        "sll" | "srl" => execute_shift(machine, command, operands, sink),
        "addi" | "li" => execute_addi(machine, command, operands, sink),
        "lw" | "sw" => execute_mem(machine, command, operands, sink),
        "beq" | "bne" => execute_branch(machine, command, operands, current_line, labels, sink),
        "j" => execute_jump(machine, operands, current_line, labels, sink),
        "jal" => execute_jump_and_link(machine, operands, current_line, labels, sink),
        "jr" => execute_jr(machine, instructions, operands, current_line, sink),
        _ => Err(format!("Unsupported instruction: {}", command)),
    })();

    match result {
        Ok(control) => control,
        Err(message) => {
            sink.log(format!("Error: {}", message));
            Control::Continue
        }
    }
}

fn execute_r_type(
    machine: &mut Machine,
    command: &str,
    operands: &[String],
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let [rd, rs, rt] = take3(operands)?;
    let rd = reg(rd)?;
    let rs_v = machine.registers.read(reg(rs)?) as i32;
    let rt_v = machine.registers.read(reg(rt)?) as i32;

    let result = match command {
        "add" => rs_v.wrapping_add(rt_v) as u32,
        "sub" => rs_v.wrapping_sub(rt_v) as u32,
        "and" => (rs_v as u32) & (rt_v as u32),
        "or" => (rs_v as u32) | (rt_v as u32),
        "slt" => {
            if rs_v < rt_v {
                1
            } else {
                0
            }
        }
        _ => unreachable!(),
    };

    machine.registers.write(rd, result);
    sink.log(format!("Executed {} {}, {}, {}", command, rd, rs, rt));
    Ok(Control::Continue)
}

fn execute_shift(
    machine: &mut Machine,
    command: &str,
    operands: &[String],
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let [rd, rs, sa] = take3(operands)?;
    let rd = reg(rd)?;
    let rs_v = machine.registers.read(reg(rs)?);

    let shift = if sa.starts_with('$') {
        machine.registers.read_named(sa).map_err(|e| e.to_string())?
    } else {
        imm(sa)? as u32
    } & 0x1F;

    let result = match command {
        "sll" => rs_v << shift,
        "srl" => rs_v >> shift,
        _ => unreachable!(),
    };

    machine.registers.write(rd, result);
    sink.log(format!("Executed {} {}, {}, {}", command, rd, rs, sa));
    Ok(Control::Continue)
}

fn execute_addi(
    machine: &mut Machine,
    command: &str,
    operands: &[String],
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let (rt, rs_v, literal) = if command == "li" {
        let [rt, literal] = take2(operands)?;
        (rt, 0i32, literal)
    } else {
        let [rt, rs, literal] = take3(operands)?;
        (rt, machine.registers.read(reg(rs)?) as i32, literal)
    };

    let rt_id = reg(rt)?;
    let value = imm(literal)?;
    let result = rs_v.wrapping_add(value) as u32;
    machine.registers.write(rt_id, result);
    sink.log(format!("Loaded {} into {}", result as i32, rt_id));
    Ok(Control::Continue)
}

fn execute_mem(
    machine: &mut Machine,
    command: &str,
    operands: &[String],
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let [rt, address] = take2(operands)?;
    let rt_id = reg(rt)?;

    match parse_mem_operand(address) {
        MemOperand::Offset { offset, base } => {
            let base_id = reg(&base)?;
            let base_v = machine.registers.read(base_id) as i64;
            let addr = (base_v + offset) as u32;

            if command == "lw" {
                let value = machine
                    .memory
                    .read_word(addr)
                    .map_err(|e| e.to_string())?;
                machine.registers.write(rt_id, value);
                sink.log(format!(
                    "Loaded {} from memory location 0x{:08X} into {}",
                    value as i32, addr, rt_id
                ));
            } else {
                let value = machine.registers.read(rt_id);
                machine
                    .memory
                    .write_word(addr, value)
                    .map_err(|e| e.to_string())?;
                sink.log(format!(
                    "Stored {} at memory location 0x{:08X}",
                    value as i32, addr
                ));
            }
        }
        MemOperand::Label(name) => {
            if command == "lw" {
                let value = machine
                    .memory
                    .lookup_named(&name)
                    .ok_or_else(|| format!("unknown data label: {}", name))?;
                machine.registers.write(rt_id, value);
                sink.log(format!("Loaded {} from {} into {}", value as i32, name, rt_id));
            } else {
                let value = machine.registers.read(rt_id);
                if !machine.memory.set_named(&name, value) {
                    return Err(format!("unknown data label: {}", name));
                }
                sink.log(format!("Stored {} in {}", value as i32, name));
            }
        }
    }

    Ok(Control::Continue)
}

fn execute_branch(
    machine: &mut Machine,
    command: &str,
    operands: &[String],
    current_line: &mut usize,
    labels: &HashMap<String, usize>,
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let [rs, rt, label] = take3(operands)?;
    let rs_v = machine.registers.read(reg(rs)?) as i32;
    let rt_v = machine.registers.read(reg(rt)?) as i32;

    let taken = match command {
        "beq" => rs_v == rt_v,
        "bne" => rs_v != rt_v,
        _ => unreachable!(),
    };

    if !taken {
        return Ok(Control::Continue);
    }

    jump_to_label(machine, "Branching", label, current_line, labels, sink)
}

fn execute_jump(
    machine: &mut Machine,
    operands: &[String],
    current_line: &mut usize,
    labels: &HashMap<String, usize>,
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let [label] = take1(operands)?;
    jump_to_label(machine, "Jumping", label, current_line, labels, sink)
}

fn execute_jump_and_link(
    machine: &mut Machine,
    operands: &[String],
    current_line: &mut usize,
    labels: &HashMap<String, usize>,
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let [label] = take1(operands)?;
    let return_addr = machine.pc.wrapping_add(constants::WORD_BYTES);
    machine.registers.write(RegisterId::RA, return_addr);
    jump_to_label(machine, "Jumping", label, current_line, labels, sink)
}

fn jump_to_label(
    machine: &mut Machine,
    verb: &str,
    label: &str,
    current_line: &mut usize,
    labels: &HashMap<String, usize>,
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let index = *labels
        .get(label)
        .ok_or_else(|| format!("label not found: {}", label))?;
    machine.pc = constants::TEXT_BASE + (index as u32) * constants::WORD_BYTES;
    *current_line = index;
    sink.log(format!("{} to {} (PC=0x{:08X})", verb, label, machine.pc));
    Ok(Control::Jumped)
}

fn execute_jr(
    machine: &mut Machine,
    instructions: &[Instruction],
    operands: &[String],
    current_line: &mut usize,
    sink: &mut impl StepSink,
) -> Result<Control, String> {
    let [rs] = take1(operands)?;
    let target = machine.registers.read(reg(rs)?);
    let text_end = constants::TEXT_BASE + (instructions.len() as u32) * constants::WORD_BYTES;

    if target == 0 || target < constants::TEXT_BASE || target >= text_end {
        *current_line = instructions.len();
        sink.log("=== Program execution completed ===".to_owned());
        Ok(Control::Terminated)
    } else {
        machine.pc = target;
        *current_line = ((target - constants::TEXT_BASE) / constants::WORD_BYTES) as usize;
        sink.log(format!("Returning to address 0x{:08X}", target));
        Ok(Control::Jumped)
    }
}

fn take1(operands: &[String]) -> Result<[&str; 1], String> {
    match operands {
        [a] => Ok([a]),
        _ => Err(format!("expected 1 operand, got {}", operands.len())),
    }
}

fn take2(operands: &[String]) -> Result<[&str; 2], String> {
    match operands {
        [a, b] => Ok([a, b]),
        _ => Err(format!("expected 2 operands, got {}", operands.len())),
    }
}

fn take3(operands: &[String]) -> Result<[&str; 3], String> {
    match operands {
        [a, b, c] => Ok([a, b, c]),
        _ => Err(format!("expected 3 operands, got {}", operands.len())),
    }
}
