//! `.data` section processing: `ident: .word <literal>` lines into an ordered table.

use mips_core::int_util::parse_integer;

/// Locates the `.data` section in `lines` and returns its named word table, in source
/// order. Scanning stops at a line equal to `.text` or the first blank line. Malformed
/// lines are logged and skipped rather than aborting the whole parse.
pub fn process_data(lines: &[&str]) -> Vec<(String, i32)> {
    let start = match lines.iter().position(|&l| l.trim() == ".data") {
        Some(i) => i + 1,
        None => return Vec::new(),
    };

    let mut table = Vec::new();

    for &raw in &lines[start..] {
        let line = raw.trim();

        if line.is_empty() || line == ".text" {
            break;
        }

        match parse_data_line(line) {
            Some(entry) => table.push(entry),
            None => log::warn!("skipping malformed .data line: {}", line),
        }
    }

    table
}

fn parse_data_line(line: &str) -> Option<(String, i32)> {
    let (ident, rest) = line.split_once(':')?;
    let rest = rest.trim();
    let literal = rest.strip_prefix(".word")?.trim();
    let value = parse_integer(literal)?;
    Some((ident.trim().to_owned(), value as i32))
}
