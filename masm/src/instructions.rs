//! `.text` section processing: strips comments and labels, assigns addresses, and
//! normalizes integer operands into canonical decimal text.

use mips_core::constants::{TEXT_BASE, WORD_BYTES};
use mips_core::instruction::{tokenize, Instruction};
use mips_core::int_util::parse_integer;
use std::collections::HashMap;

/// Builds the text segment's instruction list and label → instruction-index map.
///
/// Standalone `label:` lines are stripped here and never appear in the returned
/// instruction list; the executor therefore never has to special-case them. Blank lines
/// and lines starting with `.` or `:` are ignored entirely and do not consume a PC slot.
pub fn process_instructions(lines: &[&str]) -> (Vec<Instruction>, HashMap<String, usize>) {
    let text_start = match lines.iter().position(|&l| l.trim() == ".text") {
        Some(i) => i + 1,
        None => return (Vec::new(), HashMap::new()),
    };

    let start = lines[text_start..]
        .iter()
        .position(|&l| l.trim() == "main:")
        .map(|i| text_start + i + 1)
        .unwrap_or(text_start);

    let mut instructions = Vec::new();
    let mut labels = HashMap::new();

    for &raw in &lines[start..] {
        let without_comment = raw.split('#').next().unwrap_or("");
        let line = without_comment.trim();

        if line.is_empty() || line.starts_with('.') || line.starts_with(':') {
            continue;
        }

        if let Some(label) = standalone_label(line) {
            labels.insert(label.to_owned(), instructions.len());
            continue;
        }

        let tokens = tokenize(line);
        let normalized: Vec<String> = std::iter::once(tokens[0].clone())
            .chain(tokens[1..].iter().map(|t| normalize_operand(t)))
            .collect();

        let address = TEXT_BASE + (instructions.len() as u32) * WORD_BYTES;
        instructions.push(Instruction {
            address,
            source: normalized.join(" "),
        });
    }

    (instructions, labels)
}

fn standalone_label(line: &str) -> Option<&str> {
    let ident = line.strip_suffix(':')?;
    let mut chars = ident.chars();
    let first_ok = chars.next().map(|c| c.is_alphabetic() || c == '_').unwrap_or(false);
    if first_ok && chars.all(|c| c.is_alphanumeric() || c == '_') {
        Some(ident)
    } else {
        None
    }
}

fn normalize_operand(token: &str) -> String {
    if token.starts_with('$') {
        return token.to_owned();
    }

    if let Some(open) = token.find('(') {
        if let Some(base) = token.strip_suffix(')') {
            let offset = &token[..open];
            let base = &base[open + 1..];
            let normalized_offset = match parse_integer(offset) {
                Some(v) => v.to_string(),
                None => offset.to_owned(),
            };
            return format!("{}({})", normalized_offset, base);
        }
    }

    match parse_integer(token) {
        Some(v) => v.to_string(),
        None => token.to_owned(),
    }
}
