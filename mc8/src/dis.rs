use std::fmt;

use crate::asm::opcode::{self, Encoder, InstDesc};
use crate::asm::register::Reg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Reg(Reg),
    Imm4(u8),
    SImm7(i8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub desc:    InstDesc,
    pub operand: Operand,
}

/// The instruction whose opcode bits `byte` carries. The mnemonic table
/// covers all 256 values, so this is only `None` for a table with gaps.
pub fn decode(byte: u8) -> Option<Decoded> {
    let desc = *opcode::descriptors().find(|d| d.matches(byte))?;

    let field = byte & desc.encoder.field_mask();
    let operand = match desc.encoder {
        Encoder::Reg   => Operand::Reg(Reg::from(field)),
        Encoder::Imm4  => Operand::Imm4(field),
        Encoder::SImm7 => Operand::SImm7(sign_extend7(field)),
    };

    Some(Decoded { desc, operand })
}

// Bit 6 is the sign
fn sign_extend7(field: u8) -> i8 {
    ((field << 1) as i8) >> 1
}

// Offsets stay those of the input, a byte that doesn't decode is skipped
pub fn disassemble(code: &[u8]) -> impl Iterator<Item = (usize, u8, Decoded)> + '_ {
    code.iter()
        .enumerate()
        .filter_map(|(offset, &byte)| decode(byte).map(|inst| (offset, byte, inst)))
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(r)   => write!(f, "{}", r),
            Operand::Imm4(n)  => write!(f, "{}", n),
            Operand::SImm7(n) => write!(f, "{}", n),
        }
    }
}

// Same text the assembler accepts
impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.desc.mnemonic, self.operand)
    }
}
