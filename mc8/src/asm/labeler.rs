use std::io::BufRead;

use log::{debug, warn};

use crate::asm::config::AsmConfig;
use crate::asm::error::{Error, ErrorKind, Result};
use crate::asm::line::{self, Line};
use crate::asm::source::SourceLines;
use crate::asm::symbol::SymbolTable;

// First pass, scan every line for label definitions and record the offset of
// the instruction that follows each one. Instructions are only counted here,
// never decoded.
pub fn extract_symbols<R: BufRead>(reader: R, config: &AsmConfig) -> Result<SymbolTable> {
    let mut symbols = SymbolTable::new();
    let mut position: u32 = 0;

    for line in SourceLines::new(reader, config) {
        let line = line?;
        if line.truncated {
            warn!("Line {} is longer than the line limit, the rest was dropped", line.number);
        }

        let at = |kind| Error::at(line.number, kind);
        match line::classify(&line.text).map_err(at)? {
            Line::Blank => (),
            Line::Label(name) => {
                let offset = to_offset(position).map_err(at)?;
                debug!("{} -> {}", name, offset);
                symbols.insert(name, offset).map_err(at)?;
            },
            Line::Inst(_) => {
                to_offset(position).map_err(at)?;
                position += 1;
            },
        }
    }

    debug!("{} symbols, {} instructions", symbols.len(), position);
    Ok(symbols)
}

/// Offsets are 16 bit, the instruction (or label) at `position` must fit.
pub fn to_offset(position: u32) -> std::result::Result<u16, ErrorKind> {
    u16::try_from(position).map_err(|_| ErrorKind::TooManyInstructions)
}
