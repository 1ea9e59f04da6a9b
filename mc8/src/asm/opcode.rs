use twiddle::Twiddle;

// Instruction formats for RISC-MC8
// Notes:
// Every instruction is exactly one byte, the opcode sits in the high bits and
// the single operand is OR'ed into the low bits, no separate shift.
//
// Reg   - 7-3 opcode, 2-0 register code
// Imm4  - 7-4 opcode, 3-0 unsigned immediate
// SImm7 - 7   opcode, 6-0 signed immediate or pc-relative label offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    Reg,
    Imm4,
    SImm7,
}

impl Encoder {
    /// Bits of the instruction byte that belong to the operand.
    pub fn field_mask(self) -> u8 {
        match self {
            Encoder::Reg   => u8::mask(2..=0),
            Encoder::Imm4  => u8::mask(3..=0),
            Encoder::SImm7 => u8::mask(6..=0),
        }
    }

    pub fn field_width(self) -> u32 {
        self.field_mask().count_ones()
    }
}

// Inst Encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstDesc {
    pub mnemonic: &'static str,
    pub base:     u8,
    pub encoder:  Encoder,
}

impl InstDesc {
    /// Does `byte` carry this instruction's opcode bits.
    pub fn matches(&self, byte: u8) -> bool {
        (byte & !self.encoder.field_mask()) == self.base
    }
}

// Codegen from phf_codegen
include!(concat!(env!("OUT_DIR"), "/mnemonic.rs"));

pub fn lookup(mnemonic: &str) -> Option<InstDesc> {
    MNEMONIC.get(mnemonic).copied()
}

pub fn descriptors() -> impl Iterator<Item = &'static InstDesc> {
    MNEMONIC.values()
}
