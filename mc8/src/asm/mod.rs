use std::io::{BufRead, Cursor, Seek, Write};

use log::info;

pub mod assembler;
pub mod config;
pub mod error;
pub mod labeler;
pub mod line;
pub mod opcode;
pub mod operand;
pub mod register;
pub mod source;
pub mod symbol;

pub use self::assembler::encode_instructions;
pub use self::config::AsmConfig;
pub use self::error::{Error, ErrorKind, Result};
pub use self::labeler::extract_symbols;
pub use self::symbol::{Symbol, SymbolTable};

// 1. First pass: classify every line, collect labels and their offsets
// 2. Rewind the source
// 3. Second pass: classify again, encode each instruction into one byte
//
// Both passes go through the same line classifier so they agree on which
// lines are instructions.
pub fn assemble_stream<R: BufRead + Seek, W: Write>(reader: &mut R, out: &mut W, config: &AsmConfig) -> Result<usize> {
    info!("Extracting symbols...");
    let symbols = extract_symbols(&mut *reader, config)?;

    reader.rewind()?;

    info!("Assembling instructions...");
    encode_instructions(&mut *reader, &symbols, out, config)
}

pub fn assemble(input: &str, config: &AsmConfig) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    assemble_stream(&mut Cursor::new(input), &mut out, config)?;
    Ok(out)
}
