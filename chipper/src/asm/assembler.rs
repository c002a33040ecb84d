use byteorder::{BigEndian, ByteOrder};

use crate::asm::ast::Directive;
use crate::asm::cleaner::{CLine, CToken};
use crate::asm::error::{AsmError, ErrorKind};
use crate::asm::labeler::SymbolTable;
use crate::asm::opcode;
use crate::asm::validator;
use crate::asm;


/// Output of the second pass.
#[derive(Debug, PartialEq)]
pub struct ObjectCode {
    pub image: Vec<u8>,
    // Program counter before each line, must match the labeler's trace
    pub trace: Vec<u16>,
}

fn write_u16(word: u16) -> [u8; 2] {
    let mut buf = [0; 2];
    BigEndian::write_u16(&mut buf, word);
    buf
}

fn generate_directive(directive: Directive, operand: &str) -> Result<u8, ErrorKind> {
    if operand.is_empty() {
        return Err(ErrorKind::MalformedOperandList { expected: 1, found: 0 });
    }
    match directive {
        Directive::Db  => validator::number(operand, 8).map(|n| n as u8),
        Directive::Spr => validator::sprite(operand),
    }
}

fn generate_inst(mnemonic: &str, operands: &str, symbols: &SymbolTable) -> Result<u16, ErrorKind> {
    let inst = opcode::lookup(mnemonic)
        .ok_or_else(|| ErrorKind::UnknownMnemonic(mnemonic.to_string()))?;
    opcode::encode(inst, operands, symbols)
}

/// Second pass: encode every line against the finished symbol table.
pub fn generate_object_code(input: &[CLine], symbols: &SymbolTable) -> Result<ObjectCode, AsmError> {
    let mut image: Vec<u8> = Vec::new();
    let mut trace: Vec<u16> = Vec::with_capacity(input.len());
    let mut position: u16 = asm::BASE_ADDR;

    for line in input {
        trace.push(position);

        match line.token {
            // Bound in the first pass
            CToken::Label(_) => (),
            CToken::Directive(d, ref operand) => {
                let byte = generate_directive(d, operand).map_err(|k| line.error(k))?;
                log::debug!("0x{:03X}: {:02X}       {}", position, byte, line.text);
                image.push(byte);
            },
            CToken::Inst(ref mnemonic, ref operands) => {
                let word = generate_inst(mnemonic, operands, symbols).map_err(|k| line.error(k))?;
                log::debug!("0x{:03X}: {:04X}     {}", position, word, line.text);
                image.extend_from_slice(&write_u16(word));
            },
        }

        position = asm::advance(position, line)?;
        debug_assert_eq!(usize::from(position - asm::BASE_ADDR), image.len());
    }

    Ok(ObjectCode { image, trace })
}


#[cfg(test)]
mod assembler_object {
    use super::*;
    use crate::asm::cleaner::Cleaner;
    use crate::asm::labeler;

    fn generate(input: &str) -> Result<ObjectCode, AsmError> {
        let lines: Vec<CLine> = Cleaner::new(input.lines()).collect();
        let symbols = labeler::symbol_table_expansion(&lines)?;
        generate_object_code(&lines, &symbols)
    }

    #[test]
    fn test_write_u16() {
        assert_eq!(write_u16(0x00E0), [0x00, 0xE0]);
        assert_eq!(write_u16(0xA34A), [0xA3, 0x4A]);
    }

    #[test]
    fn test_directives() {
        let obj = generate(".db 0xFF\n.db 7\n.spr \"xx  xx  \"").unwrap();
        assert_eq!(obj.image, vec![0xFF, 0x07, 0xCC]);
        assert_eq!(obj.trace, vec![0x200, 0x201, 0x202]);
    }

    #[test]
    fn test_directive_without_operand() {
        let err = generate(".db").unwrap_err();
        assert_eq!(err, AsmError::new(1, ".db", ErrorKind::MalformedOperandList { expected: 1, found: 0 }));

        let err = generate("clear\n.spr").unwrap_err();
        assert_eq!(err, AsmError::new(2, ".spr", ErrorKind::MalformedOperandList { expected: 1, found: 0 }));
    }

    #[test]
    fn test_labels_emit_nothing() {
        let obj = generate(".a:\n.b:\nret").unwrap();
        assert_eq!(obj.image, vec![0x00, 0xEE]);
        assert_eq!(obj.trace, vec![0x200, 0x200, 0x200]);
    }

    #[test]
    fn test_unknown_mnemonic() {
        let err = generate("clear\nnop").unwrap_err();
        assert_eq!(err, AsmError::new(2, "nop", ErrorKind::UnknownMnemonic("nop".to_string())));
    }

    #[test]
    fn test_odd_alignment() {
        // Instructions after a single .db are not padded
        let obj = generate(".db 1\n.here:\njmp .here").unwrap();
        assert_eq!(obj.image, vec![0x01, 0x12, 0x01]);
    }
}
