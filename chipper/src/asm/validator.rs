use std::num::IntErrorKind;
use std::str::FromStr;

use twiddle::Twiddle;

use crate::asm::ast;
use crate::asm::error::ErrorKind;
use crate::asm::labeler::SymbolTable;
use crate::asm::ADDR_BITS;


/// Parse a `0x` hex or plain decimal literal that must fit in `bits` bits (at most 16).
pub fn number(text: &str, bits: u32) -> Result<u16, ErrorKind> {
    let (digits, radix) = match text.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None      => (text, 10),
    };

    let out_of_range = || ErrorKind::OutOfRange { value: text.to_string(), bits };

    let value = i64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => ErrorKind::MalformedNumber(text.to_string()),
    })?;

    if value < 0 || value >= (1 << bits) {
        return Err(out_of_range());
    }
    Ok(value as u16)
}

pub fn register(text: &str) -> Result<ast::Reg, ErrorKind> {
    ast::Reg::from_str(text).map_err(|_| ErrorKind::InvalidRegister(text.to_string()))
}

/// Resolve a `.label` reference or a 12 bit literal into an address.
pub fn address(text: &str, symbols: &SymbolTable) -> Result<u16, ErrorKind> {
    if text.starts_with('.') {
        let addr = symbols.get(text)
            .ok_or_else(|| ErrorKind::UnresolvedLabel(text.to_string()))?;

        // Labels past 0xFFF would spill into the opcode nibble
        if addr >= (1 << ADDR_BITS) {
            return Err(ErrorKind::OutOfRange { value: text.to_string(), bits: ADDR_BITS });
        }
        Ok(addr)
    } else {
        number(text, ADDR_BITS)
    }
}

pub fn select_and_shift(imm: u16, hi: usize, lo: usize, shift: usize) -> u16 {
    ((imm & u16::mask(hi..=lo)) >> lo) << shift
}

/// One sprite row: `"` + exactly 8 of `x` or space + `"`, leftmost is the msb.
pub fn sprite(text: &str) -> Result<u8, ErrorKind> {
    let invalid = || ErrorKind::InvalidSprite(text.to_string());

    let row = text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .ok_or_else(invalid)?;

    if row.len() != 8 {
        return Err(invalid());
    }

    let mut ret: u8 = 0;
    for (i, c) in row.chars().enumerate() {
        match c {
            'x' => ret |= 1 << (7 - i),
            ' ' => (),
            _   => return Err(invalid()),
        }
    }
    Ok(ret)
}
