pub mod assembler;
pub mod ast;
pub mod cleaner;
pub mod error;
pub mod labeler;
pub mod opcode;
pub mod validator;

use crate::asm::cleaner::{CLine, Cleaner};
use crate::asm::error::{AsmError, ErrorKind};
use crate::asm::labeler::SymbolTable;

/// Load address of chip-8 programs.
pub const BASE_ADDR: u16 = 0x200;

/// Width of `nnn` address operands.
pub const ADDR_BITS: u32 = 12;


// Both passes step through the lines with this, so their traces can't drift apart
pub(crate) fn advance(position: u16, line: &CLine) -> Result<u16, AsmError> {
    position.checked_add(line.token.size())
        .ok_or_else(|| line.error(ErrorKind::ProgramTooLarge))
}


/// One assembly run. Owns the normalized lines and, once the first pass
/// has run, the symbol table.
#[derive(Debug)]
pub struct Assembler {
    lines: Vec<CLine>,
    symbols: Option<SymbolTable>,
}

impl Assembler {
    pub fn new<I, S>(source: I) -> Assembler
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Assembler {
            lines: Cleaner::new(source.into_iter()).collect(),
            symbols: None,
        }
    }

    pub fn lines(&self) -> &[CLine] {
        &self.lines
    }

    /// First pass, returns the label table. Runs at most once.
    pub fn symbols(&mut self) -> Result<&SymbolTable, AsmError> {
        let symbols = self.first_pass()?;
        Ok(&*self.symbols.insert(symbols))
    }

    fn first_pass(&mut self) -> Result<SymbolTable, AsmError> {
        match self.symbols.take() {
            Some(symbols) => Ok(symbols),
            None => labeler::symbol_table_expansion(&self.lines),
        }
    }

    /// Run both passes and return the image that loads at [`BASE_ADDR`].
    pub fn assemble(mut self) -> Result<Vec<u8>, AsmError> {
        let symbols = self.first_pass()?;

        let object = assembler::generate_object_code(&self.lines, &symbols)?;
        log::info!(
            "assembled {} line(s) into {} byte(s), {} label(s)",
            self.lines.len(),
            object.image.len(),
            symbols.len()
        );
        Ok(object.image)
    }
}

pub fn assemble_lines<I, S>(source: I) -> Result<Vec<u8>, AsmError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Assembler::new(source).assemble()
}

pub fn assemble(source: &str) -> Result<Vec<u8>, AsmError> {
    assemble_lines(source.lines())
}


#[cfg(test)]
mod asm_pipeline {
    use super::*;

    const PROGRAM: &str = r#"
        ; bounce a sprite around
        .start:
            clear
            mov v0, 0x05
            mov v1, 10
            mov i, .ball
        .loop:
            draw v0, v1, 2
            add v0, 1
            rnd v2, 0x03
            eq v2, 0
            jmp .skip
            lsr v1
        .skip:
            call .wait
            jmp .loop
        .wait:
            mov v3, 0x1e
            sdly v3
        .tick:
            dly v3
            neq v3, 0
            ret
            jmp .tick
        .ball:
            .spr " xx     "
            .spr " xx     "
            .db 0
    "#;

    #[test]
    fn test_traces_match() {
        let mut asm = Assembler::new(PROGRAM.lines());
        let first = asm.symbols().unwrap().trace().to_vec();
        let end = asm.symbols().unwrap().end();

        let symbols = labeler::symbol_table_expansion(asm.lines()).unwrap();
        let object = assembler::generate_object_code(asm.lines(), &symbols).unwrap();

        assert_eq!(first, object.trace);
        assert_eq!(usize::from(end - BASE_ADDR), object.image.len());
    }

    #[test]
    fn test_symbols_runs_once() {
        let mut asm = Assembler::new(PROGRAM.lines());
        let ball = asm.symbols().unwrap().get(".ball");
        assert_eq!(asm.symbols().unwrap().get(".ball"), ball);
        assert_eq!(ball, Some(0x224));
    }

    #[test]
    fn test_program() {
        let image = assemble(PROGRAM).unwrap();

        assert_eq!(image, vec![
            0x00, 0xE0, // clear
            0x60, 0x05, // mov v0, 0x05
            0x61, 0x0A, // mov v1, 10
            0xA2, 0x24, // mov i, .ball
            0xD0, 0x12, // .loop: draw v0, v1, 2
            0x70, 0x01, // add v0, 1
            0xC2, 0x03, // rnd v2, 0x03
            0x32, 0x00, // eq v2, 0
            0x12, 0x14, // jmp .skip
            0x81, 0x16, // lsr v1
            0x22, 0x18, // .skip: call .wait
            0x12, 0x08, // jmp .loop
            0x63, 0x1E, // .wait: mov v3, 0x1e
            0xF3, 0x15, // sdly v3
            0xF3, 0x07, // .tick: dly v3
            0x43, 0x00, // neq v3, 0
            0x00, 0xEE, // ret
            0x12, 0x1C, // jmp .tick
            0x60,       // .ball
            0x60,
            0x00,
        ]);
    }

    #[test]
    fn test_lines_and_strings() {
        let owned: Vec<String> = vec!["CLEAR".to_string(), "Ret ; done".to_string()];
        assert_eq!(assemble_lines(owned), Ok(vec![0x00, 0xE0, 0x00, 0xEE]));
        assert_eq!(assemble_lines(Vec::<String>::new()), Ok(Vec::new()));
    }

    #[test]
    fn test_program_too_large() {
        let source = vec!["clear"; 0x8000];
        let err = assemble_lines(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ProgramTooLarge);
    }
}
