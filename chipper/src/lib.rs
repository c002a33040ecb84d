//! Two-pass assembler for the CHIP-8 virtual machine.
//!
//! Source lines go through [`asm::cleaner`] (normalize + classify), then
//! [`asm::labeler`] builds the symbol table, then [`asm::assembler`] emits the
//! raw image that loads at [`asm::BASE_ADDR`].
//!
//! ```
//! let image = chipper::asm::assemble(".loop:\njmp .loop").unwrap();
//! assert_eq!(image, vec![0x12, 0x00]);
//! ```
pub mod asm;

pub use asm::{assemble, assemble_lines, Assembler};
pub use asm::error::{AsmError, ErrorKind};
