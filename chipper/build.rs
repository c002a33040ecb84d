use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // phf_codegen for mnemonics
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("mnemonic.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    let mut map = phf_codegen::Map::new();
    map
        // No operands
        .entry("clear", "InstType::Bare(0x00E0)")
        .entry("ret",   "InstType::Bare(0x00EE)")

        // nnn - address or label
        .entry("rcall", "InstType::Addr(0x0000)")
        .entry("jmp",   "InstType::Addr(0x1000)")
        .entry("call",  "InstType::Addr(0x2000)")
        .entry("rjmp",  "InstType::Addr(0xB000)")

        // vx, kk | vx, vy
        .entry("eq",    "InstType::Skip { imm: 0x3000, reg: 0x5000 }")
        .entry("neq",   "InstType::Skip { imm: 0x4000, reg: 0x9000 }")

        // vx, kk | vx, vy | i, ...
        .entry("mov",   "InstType::Mov")
        .entry("add",   "InstType::Add")

        // vx, vy
        .entry("or",    "InstType::Alu(0x8001)")
        .entry("and",   "InstType::Alu(0x8002)")
        .entry("xor",   "InstType::Alu(0x8003)")
        .entry("sub",   "InstType::Alu(0x8005)")
        .entry("rsub",  "InstType::Alu(0x8007)")

        // vx [, vy]
        .entry("lsr",   "InstType::Shift(0x8006)")
        .entry("lsl",   "InstType::Shift(0x800E)")

        // vx, kk
        .entry("rnd",   "InstType::Rnd(0xC000)")

        // vx, vy, n
        .entry("draw",  "InstType::Draw(0xD000)")

        // vx - keypad
        .entry("keq",   "InstType::Reg(0xE09E)")
        .entry("kneq",  "InstType::Reg(0xE0A1)")

        // vx - timers, memory and misc
        .entry("dly",   "InstType::Reg(0xF007)")
        .entry("gky",   "InstType::Reg(0xF00A)")
        .entry("sdly",  "InstType::Reg(0xF015)")
        .entry("ssnd",  "InstType::Reg(0xF018)")
        .entry("chr",   "InstType::Reg(0xF029)")
        .entry("bcd",   "InstType::Reg(0xF033)")
        .entry("stm",   "InstType::Reg(0xF055)")
        .entry("ldm",   "InstType::Reg(0xF065)");

    writeln!(
        &mut file,
        "static MNEMONIC: phf::Map<&'static str, InstType> = {};",
        map.build()
    ).unwrap();
}
