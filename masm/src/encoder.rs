//! Bit-exact 32-bit machine code encoder.
//!
//! `encode` is a pure function: mnemonic + operand text in, a 32-character `'0'`/`'1'`
//! bitstring or an [`EncodeError`] out. It never touches the register file, memory or a
//! label map — the third operand of `beq`/`bne` and the sole operand of `j`/`jal` must
//! already be a literal numeric value (see the asymmetry noted in SPEC_FULL.md): the
//! executor resolves labels by name, but the encoder only ever sees numbers.

use crate::error::EncodeError;
use mips_core::instruction::tokenize;
use mips_core::int_util::parse_integer;
use mips_core::register::RegisterId;

pub fn encode(line: &str) -> Result<String, EncodeError> {
    let tokens = tokenize(line);
    let command = tokens
        .first()
        .ok_or_else(|| EncodeError::UnknownMnemonic {
            mnemonic: String::new(),
        })?
        .as_str();
    let operands = &tokens[1..];

    match command {
        "add" => encode_r3(operands, FUNCT_ADD),
        "sub" => encode_r3(operands, FUNCT_SUB),
        "and" => encode_r3(operands, FUNCT_AND),
        "or" => encode_r3(operands, FUNCT_OR),
        "slt" => encode_r3(operands, FUNCT_SLT),
        "sll" => encode_shift(operands, FUNCT_SLL),
        "srl" => encode_shift(operands, FUNCT_SRL),
        "jr" => encode_jr(operands),
        "addi" => encode_addi(operands),
        "li" => encode_li(operands),
        "lw" => encode_mem(operands, OPCODE_LW),
        "sw" => encode_mem(operands, OPCODE_SW),
        "beq" => encode_branch(operands, OPCODE_BEQ),
        "bne" => encode_branch(operands, OPCODE_BNE),
        "j" => encode_jump(operands, OPCODE_J),
        "jal" => encode_jump(operands, OPCODE_JAL),
        other => Err(EncodeError::UnknownMnemonic {
            mnemonic: other.to_owned(),
        }),
    }
}

const FUNCT_ADD: &str = "100000";
const FUNCT_SUB: &str = "100010";
const FUNCT_AND: &str = "100100";
const FUNCT_OR: &str = "100101";
const FUNCT_SLT: &str = "101010";
const FUNCT_SLL: &str = "000000";
const FUNCT_SRL: &str = "000010";
const FUNCT_JR: &str = "001000";
const OPCODE_ADDI: &str = "001000";
const OPCODE_LW: &str = "100011";
const OPCODE_SW: &str = "101011";
const OPCODE_BEQ: &str = "000100";
const OPCODE_BNE: &str = "000101";
const OPCODE_J: &str = "000010";
const OPCODE_JAL: &str = "000011";

fn bits(value: u32, width: u32) -> String {
    let mask = if width >= 32 { u32::MAX } else { (1 << width) - 1 };
    format!("{:0width$b}", value & mask, width = width as usize)
}

fn reg_bits(token: &str) -> Result<String, EncodeError> {
    let id = RegisterId::from_name(token).ok_or_else(|| EncodeError::UnknownRegister {
        name: token.to_owned(),
    })?;
    Ok(bits(id.number(), 5))
}

fn imm16_bits(token: &str) -> Result<String, EncodeError> {
    let value = parse_integer(token).ok_or_else(|| EncodeError::InvalidInteger {
        text: token.to_owned(),
    })?;
    Ok(bits(value as i32 as u32, 16))
}

fn expect(operands: &[String], count: usize) -> Result<(), EncodeError> {
    if operands.len() != count {
        Err(EncodeError::WrongOperandCount {
            expected: count,
            found: operands.len(),
        })
    } else {
        Ok(())
    }
}

/// `000000 | rs(5) | rt(5) | rd(5) | 00000 | funct(6)`
fn encode_r3(operands: &[String], funct: &str) -> Result<String, EncodeError> {
    expect(operands, 3)?;
    let rd = reg_bits(&operands[0])?;
    let rs = reg_bits(&operands[1])?;
    let rt = reg_bits(&operands[2])?;
    Ok(format!("000000{}{}{}00000{}", rs, rt, rd, funct))
}

/// Corrected MIPS shift layout: `000000 | 00000 | rt(5) | rd(5) | shamt(5) | funct(6)`,
/// where our `rt` slot holds the register being shifted (the instruction's second
/// operand) and our `rd` slot holds the destination (its first operand). `shamt` must be
/// a literal integer: the encoder has no register state to resolve a register-named
/// shift amount against.
fn encode_shift(operands: &[String], funct: &str) -> Result<String, EncodeError> {
    expect(operands, 3)?;
    let rd = reg_bits(&operands[0])?;
    let rt = reg_bits(&operands[1])?;
    let shamt = parse_integer(&operands[2]).ok_or_else(|| EncodeError::InvalidInteger {
        text: operands[2].clone(),
    })?;
    Ok(format!(
        "00000000000{}{}{}{}",
        rt,
        rd,
        bits(shamt as u32, 5),
        funct
    ))
}

/// `000000 | rs(5) | 00000000000 (11) | funct(6)`
fn encode_jr(operands: &[String]) -> Result<String, EncodeError> {
    expect(operands, 1)?;
    let rs = reg_bits(&operands[0])?;
    Ok(format!("000000{}00000000000{}", rs, FUNCT_JR))
}

/// `opcode(6) | rs(5) | rt(5) | imm16`
fn encode_addi(operands: &[String]) -> Result<String, EncodeError> {
    expect(operands, 3)?;
    let rt = reg_bits(&operands[0])?;
    let rs = reg_bits(&operands[1])?;
    let imm = imm16_bits(&operands[2])?;
    Ok(format!("{}{}{}{}", OPCODE_ADDI, rs, rt, imm))
}

/// `li rd, imm` is a thin assembler convenience, encoded in the `addi` family as
/// `addi rd, $zero, imm` (see SPEC_FULL.md §15).
fn encode_li(operands: &[String]) -> Result<String, EncodeError> {
    expect(operands, 2)?;
    let rt = reg_bits(&operands[0])?;
    let rs = reg_bits("$zero")?;
    let imm = imm16_bits(&operands[1])?;
    Ok(format!("{}{}{}{}", OPCODE_ADDI, rs, rt, imm))
}

/// `opcode(6) | base(5) | rt(5) | offset16`. A bare identifier second operand (a data
/// label, not `offset(base)`) is treated as `0($gp)`.
fn encode_mem(operands: &[String], opcode: &str) -> Result<String, EncodeError> {
    expect(operands, 2)?;
    let rt = reg_bits(&operands[0])?;
    let (offset, base) = split_memory_operand(&operands[1])?;
    let base_bits = reg_bits(&base)?;
    let offset_bits = imm16_bits(&offset)?;
    Ok(format!("{}{}{}{}", opcode, base_bits, rt, offset_bits))
}

fn split_memory_operand(token: &str) -> Result<(String, String), EncodeError> {
    match token.find('(') {
        Some(open) if token.ends_with(')') => {
            let offset = token[..open].trim();
            let base = token[open + 1..token.len() - 1].trim();
            Ok((offset.to_owned(), base.to_owned()))
        }
        Some(_) => Err(EncodeError::MalformedMemoryOperand {
            text: token.to_owned(),
        }),
        None => Ok(("0".to_owned(), "$gp".to_owned())),
    }
}

/// `opcode(6) | rs(5) | rt(5) | imm16`; the third operand must already be a literal
/// numeric immediate, never a label (see SPEC_FULL.md on the branch-immediate asymmetry).
fn encode_branch(operands: &[String], opcode: &str) -> Result<String, EncodeError> {
    expect(operands, 3)?;
    let rs = reg_bits(&operands[0])?;
    let rt = reg_bits(&operands[1])?;
    let imm = imm16_bits(&operands[2])?;
    Ok(format!("{}{}{}{}", opcode, rs, rt, imm))
}

/// `opcode(6) | target26`, the decimal operand rendered directly as 26 bits (no
/// instruction-address shifting).
fn encode_jump(operands: &[String], opcode: &str) -> Result<String, EncodeError> {
    expect(operands, 1)?;
    let target = parse_integer(&operands[0]).ok_or_else(|| EncodeError::InvalidInteger {
        text: operands[0].clone(),
    })?;
    Ok(format!("{}{}", opcode, bits(target as u32, 26)))
}
