use std::fmt;
use std::str::FromStr;

// ireg is the implicit register, most instructions read/write it alongside the operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    IReg, R1, R2, R3, R4, R5, R6, R7,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegError { _priv: () }

// Codegen from phf_codegen
include!(concat!(env!("OUT_DIR"), "/register.rs"));

/// Exact match on the canonical "000".."111" name or the alias.
/// Callers lowercase the token first.
pub fn lookup(token: &str) -> Option<Reg> {
    REGISTER.get(token).copied()
}

impl FromStr for Reg {
    type Err = ParseRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or(ParseRegError { _priv: () })
    }
}

impl From<Reg> for u8 {
    fn from(original: Reg) -> u8 {
        match original {
            Reg::IReg => 0b000,
            Reg::R1   => 0b001,
            Reg::R2   => 0b010,
            Reg::R3   => 0b011,
            Reg::R4   => 0b100,
            Reg::R5   => 0b101,
            Reg::R6   => 0b110,
            Reg::R7   => 0b111,
        }
    }
}

impl From<u8> for Reg {
    // Only the low 3 bits select the register
    fn from(code: u8) -> Reg {
        match code & 0b111 {
            0b000 => Reg::IReg,
            0b001 => Reg::R1,
            0b010 => Reg::R2,
            0b011 => Reg::R3,
            0b100 => Reg::R4,
            0b101 => Reg::R5,
            0b110 => Reg::R6,
            _     => Reg::R7,
        }
    }
}

impl Reg {
    pub fn alias(self) -> &'static str {
        match self {
            Reg::IReg => "ireg",
            Reg::R1   => "r1",
            Reg::R2   => "r2",
            Reg::R3   => "r3",
            Reg::R4   => "r4",
            Reg::R5   => "r5",
            Reg::R6   => "r6",
            Reg::R7   => "r7",
        }
    }

    pub fn canonical(self) -> &'static str {
        match self {
            Reg::IReg => "000",
            Reg::R1   => "001",
            Reg::R2   => "010",
            Reg::R3   => "011",
            Reg::R4   => "100",
            Reg::R5   => "101",
            Reg::R6   => "110",
            Reg::R7   => "111",
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}
