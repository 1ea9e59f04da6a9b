use std::ops::RangeInclusive;

use log::debug;

use crate::asm::error::ErrorKind;
use crate::asm::opcode::Encoder;
use crate::asm::register;
use crate::asm::symbol::SymbolTable;

const BINARY_PREFIX: &str = "0b";

pub const IMM4_RANGE:  RangeInclusive<i64> = 0..=15;
pub const SIMM7_RANGE: RangeInclusive<i64> = -64..=63;

/// OR the operand `token` into `inst` using `encoder`'s field.
///
/// `offset` is the position of the instruction being encoded, labels in
/// the 7-bit field resolve relative to it. Nothing is written unless the
/// operand fully validates.
pub fn encode(encoder: Encoder, inst: u8, offset: u16, token: &str, symbols: &SymbolTable) -> Result<u8, ErrorKind> {
    let field = match encoder {
        Encoder::Reg   => load_reg(token)?,
        Encoder::Imm4  => load_imm4(token)?,
        Encoder::SImm7 => load_simm7(offset, token, symbols)?,
    };
    Ok(inst | field)
}

fn load_reg(token: &str) -> Result<u8, ErrorKind> {
    register::lookup(token)
        .map(u8::from)
        .ok_or(ErrorKind::UnknownRegister)
}

fn load_imm4(token: &str) -> Result<u8, ErrorKind> {
    let value = match token.strip_prefix(BINARY_PREFIX) {
        Some(digits) => parse_binary(digits, Encoder::Imm4)?,
        None => parse_decimal(token, IMM4_RANGE)?,
    };
    Ok(to_field(value, Encoder::Imm4))
}

// Labels win over literals, a label spelled like a number shadows the number
fn load_simm7(offset: u16, token: &str, symbols: &SymbolTable) -> Result<u8, ErrorKind> {
    if let Some(symbol) = symbols.get(token) {
        let relative = i64::from(symbol.offset) - i64::from(offset);
        if !SIMM7_RANGE.contains(&relative) {
            return Err(ErrorKind::ValueOutOfRange);
        }
        debug!("{} at {} resolves to {:+}", symbol.name, offset, relative);
        return Ok(to_field(relative, Encoder::SImm7));
    }

    let value = match token.strip_prefix(BINARY_PREFIX) {
        Some(digits) => parse_binary(digits, Encoder::SImm7)?,
        None => parse_decimal(token, SIMM7_RANGE)?,
    };
    Ok(to_field(value, Encoder::SImm7))
}

// Exactly one digit per field bit, msb first. The bit pattern is taken as is.
fn parse_binary(digits: &str, encoder: Encoder) -> Result<i64, ErrorKind> {
    if digits.len() != encoder.field_width() as usize {
        return Err(ErrorKind::InvalidBinaryStringLength);
    }

    digits.chars().try_fold(0, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        _   => Err(ErrorKind::InvalidBinaryStringCharacter),
    })
}

// Optional leading '-' then digits only
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_decimal(token: &str, range: RangeInclusive<i64>) -> Result<i64, ErrorKind> {
    if !is_integer(token) {
        return Err(ErrorKind::InvalidNumber);
    }

    // Well formed at this point, so a parse failure can only be an overflow
    let value: i64 = token.parse().map_err(|_| ErrorKind::ValueOutOfRange)?;
    if !range.contains(&value) {
        return Err(ErrorKind::ValueOutOfRange);
    }
    Ok(value)
}

// Two's complement, drop the high bits
fn to_field(value: i64, encoder: Encoder) -> u8 {
    (value as u8) & encoder.field_mask()
}
