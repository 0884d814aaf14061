/// A single text-segment instruction: the byte address assigned to it by the parser and
/// the cleaned mnemonic+operand source line (comments stripped, commas normalized to
/// whitespace).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub address: u32,
    pub source: String,
}

/// Splits `line` into whitespace-separated tokens, treating commas as separators too.
/// Shared by the encoder and the executor, each of which re-tokenizes independently.
pub fn tokenize(line: &str) -> Vec<String> {
    line.replace(',', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
