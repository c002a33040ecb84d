use crate::asm::ast;
use crate::asm::error::ErrorKind;
use crate::asm::labeler::SymbolTable;
use crate::asm::validator;

// Instruction word layouts for chip-8
// Notes:
// Every instruction is one big endian u16 word, addressed by nibble
//      o - opcode nibble, x/y - register nibbles, n/kk/nnn - immediates
// Templates below carry the fixed nibbles, operands get or'ed into the rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstType {
    // oooo - clear, ret
    Bare(u16),

    // onnn - jmp, call, rjmp, rcall
    Addr(u16),

    // oxkk for an immediate, oxy0 for a register
    Skip { imm: u16, reg: u16 },

    // 6xkk, 8xy0, Annn
    Mov,

    // 7xkk, 8xy4, Fx1E
    Add,

    // 8xyo
    Alu(u16),

    // 8xyo, y defaults to x
    Shift(u16),

    // Cxkk
    Rnd(u16),

    // Dxyn
    Draw(u16),

    // oxoo
    Reg(u16),
}

// Codegen from phf_codegen
include!(concat!(env!("OUT_DIR"), "/mnemonic.rs"));

pub fn lookup(mnemonic: &str) -> Option<InstType> {
    MNEMONIC.get(mnemonic).copied()
}


/// Split a raw operand string on `,`, trimming each operand.
pub fn operands(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::trim).collect()
}

fn expect_operands(args: &[&str], expected: usize) -> Result<(), ErrorKind> {
    if args.len() != expected {
        return Err(ErrorKind::MalformedOperandList { expected, found: args.len() });
    }
    Ok(())
}

fn is_register(arg: &str) -> bool {
    arg.starts_with('v')
}

fn place_x(reg: ast::Reg) -> u16 {
    validator::select_and_shift(u16::from(reg), 3, 0, 8)
}

fn place_y(reg: ast::Reg) -> u16 {
    validator::select_and_shift(u16::from(reg), 3, 0, 4)
}

// nnn is already bounded to 12 bits by the validator
fn place_addr(addr: u16) -> u16 {
    validator::select_and_shift(addr, 11, 0, 0)
}

// oxy? - both operands must be registers
fn reg_reg(template: u16, x: &str, y: &str) -> Result<u16, ErrorKind> {
    let vx = validator::register(x)?;
    let vy = validator::register(y)?;
    Ok(template | place_x(vx) | place_y(vy))
}

// oxkk
fn reg_imm(template: u16, x: &str, kk: &str) -> Result<u16, ErrorKind> {
    let vx = validator::register(x)?;
    let kk = validator::number(kk, 8)?;
    Ok(template | place_x(vx) | kk)
}


/// Encode one instruction into its 16 bit word.
pub fn encode(inst: InstType, raw: &str, symbols: &SymbolTable) -> Result<u16, ErrorKind> {
    let args = operands(raw);

    match inst {
        InstType::Bare(word) => {
            expect_operands(&args, 0)?;
            Ok(word)
        },
        InstType::Addr(template) => {
            expect_operands(&args, 1)?;
            let addr = validator::address(args[0], symbols)?;
            Ok(template | place_addr(addr))
        },
        InstType::Skip { imm, reg } => {
            expect_operands(&args, 2)?;
            if is_register(args[1]) {
                reg_reg(reg, args[0], args[1])
            } else {
                reg_imm(imm, args[0], args[1])
            }
        },
        InstType::Mov => {
            expect_operands(&args, 2)?;
            if args[0] == "i" {
                let addr = validator::address(args[1], symbols)?;
                Ok(0xA000 | place_addr(addr))
            } else if is_register(args[1]) {
                reg_reg(0x8000, args[0], args[1])
            } else {
                reg_imm(0x6000, args[0], args[1])
            }
        },
        InstType::Add => {
            expect_operands(&args, 2)?;
            if args[0] == "i" {
                let vx = validator::register(args[1])?;
                Ok(0xF01E | place_x(vx))
            } else if is_register(args[1]) {
                reg_reg(0x8004, args[0], args[1])
            } else {
                reg_imm(0x7000, args[0], args[1])
            }
        },
        InstType::Alu(template) => {
            expect_operands(&args, 2)?;
            reg_reg(template, args[0], args[1])
        },
        InstType::Shift(template) => {
            match args.len() {
                1 => reg_reg(template, args[0], args[0]),
                2 => reg_reg(template, args[0], args[1]),
                0     => Err(ErrorKind::MalformedOperandList { expected: 1, found: 0 }),
                found => Err(ErrorKind::MalformedOperandList { expected: 2, found }),
            }
        },
        InstType::Rnd(template) => {
            expect_operands(&args, 2)?;
            reg_imm(template, args[0], args[1])
        },
        InstType::Draw(template) => {
            expect_operands(&args, 3)?;
            let vx = validator::register(args[0])?;
            let vy = validator::register(args[1])?;
            let n = validator::number(args[2], 4)?;
            Ok(template | place_x(vx) | place_y(vy) | n)
        },
        InstType::Reg(template) => {
            expect_operands(&args, 1)?;
            let vx = validator::register(args[0])?;
            Ok(template | place_x(vx))
        },
    }
}
