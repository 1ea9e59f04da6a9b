use std::io::{BufRead, Write};

use byteorder::WriteBytesExt;
use log::debug;

use crate::asm::config::AsmConfig;
use crate::asm::error::{Error, ErrorKind, Result};
use crate::asm::labeler::to_offset;
use crate::asm::line::{self, Line, Statement};
use crate::asm::opcode;
use crate::asm::operand;
use crate::asm::source::SourceLines;
use crate::asm::symbol::SymbolTable;

// Second pass, encode each instruction line into its byte and write it out in
// source order. Stops at the first bad line, whatever was already written
// stays in `out`.
pub fn encode_instructions<R: BufRead, W: Write>(
    reader: R,
    symbols: &SymbolTable,
    out: &mut W,
    config: &AsmConfig,
) -> Result<usize> {
    let mut position: u32 = 0;

    for line in SourceLines::new(reader, config) {
        let line = line?;
        let at = |kind| Error::at(line.number, kind);

        let stmt = match line::classify(&line.text).map_err(at)? {
            Line::Blank | Line::Label(_) => continue,
            Line::Inst(stmt) => stmt,
        };

        let offset = to_offset(position).map_err(at)?;
        let inst = encode_statement(&stmt, offset, symbols).map_err(at)?;
        debug!("{:04X}: {:08b}  {}", offset, inst, line.text.trim());

        out.write_u8(inst)?;
        position += 1;
    }

    Ok(position as usize)
}

pub fn encode_statement(stmt: &Statement, offset: u16, symbols: &SymbolTable) -> std::result::Result<u8, ErrorKind> {
    let desc = opcode::lookup(&stmt.mnemonic).ok_or(ErrorKind::UnknownMnemonic)?;
    let token = stmt.operand()?;
    operand::encode(desc.encoder, desc.base, offset, token, symbols)
}

/// Encode a single source line, `None` for anything that isn't an instruction.
pub fn encode_line(text: &str, offset: u16, symbols: &SymbolTable) -> std::result::Result<Option<u8>, ErrorKind> {
    match line::classify(text)? {
        Line::Inst(stmt) => encode_statement(&stmt, offset, symbols).map(Some),
        _ => Ok(None),
    }
}


#[cfg(test)]
pub mod assembler_pass {
    use super::*;
    use std::io::Cursor;

    fn encode(input: &str, symbols: &SymbolTable) -> (Result<usize>, Vec<u8>) {
        let mut out = Vec::new();
        let res = encode_instructions(Cursor::new(input), symbols, &mut out, &AsmConfig::default());
        (res, out)
    }

    #[test]
    fn test_encode_line() {
        let symbols = SymbolTable::new();
        assert_eq!(Ok(Some(0b0000_0001)), encode_line("andi r1", 0, &symbols));
        assert_eq!(Ok(Some(0b0110_1010)), encode_line("stlo 0b1010", 0, &symbols));
        assert_eq!(Ok(Some(0b1111_1111)), encode_line("JUMP -1 # back", 0, &symbols));
        assert_eq!(Ok(None), encode_line("  # nothing", 0, &symbols));
        assert_eq!(Ok(None), encode_line("lbl:", 0, &symbols));
    }

    #[test]
    fn test_statement_errors() {
        let symbols = SymbolTable::new();
        assert_eq!(Err(ErrorKind::UnknownMnemonic), encode_line("foo r1", 0, &symbols));
        assert_eq!(Err(ErrorKind::MissingInstructionParameter), encode_line("andi", 0, &symbols));
        assert_eq!(Err(ErrorKind::TooManyTokens), encode_line("addi 000 000", 0, &symbols));
        assert_eq!(Err(ErrorKind::UnknownRegister), encode_line("load r9", 0, &symbols));
    }

    #[test]
    fn test_mnemonic_checked_before_operand_count() {
        let symbols = SymbolTable::new();
        assert_eq!(Err(ErrorKind::UnknownMnemonic), encode_line("foo", 0, &symbols));
        assert_eq!(Err(ErrorKind::UnknownMnemonic), encode_line("foo a b", 0, &symbols));
    }

    #[test]
    fn test_token_count_before_operand_value() {
        let symbols = SymbolTable::new();
        assert_eq!(Err(ErrorKind::TooManyTokens), encode_line("andi r9 r1", 0, &symbols));
    }

    #[test]
    fn test_labels_use_current_offset() {
        let mut symbols = SymbolTable::new();
        symbols.insert("top".to_string(), 0).unwrap();
        symbols.insert("bottom".to_string(), 3).unwrap();

        let input = "top:\njump bottom\nandi r1\n\njump top\nbottom:\n";
        let (res, out) = encode(input, &symbols);

        assert_eq!(3, res.unwrap());
        assert_eq!(vec![0b1000_0011, 0b0000_0001, 0b1111_1110], out);
    }

    #[test]
    fn test_partial_output_on_error() {
        let symbols = SymbolTable::new();
        let (res, out) = encode("andi r1\naddi r2\nstlo 16\nandi r3\n", &symbols);

        let err = res.unwrap_err();
        assert_eq!(Some(ErrorKind::ValueOutOfRange), err.kind());
        assert_eq!(Some(3), err.line());
        assert_eq!(vec![0b0000_0001, 0b0001_0010], out);
    }
}
