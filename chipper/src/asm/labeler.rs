use std::collections::HashMap;

use crate::asm::cleaner::{CLine, CToken};
use crate::asm::error::{AsmError, ErrorKind};
use crate::asm;


/// Label name (with its leading `.`) to address, plus the program counter
/// trace of the pass that built it.
#[derive(Debug, Default, PartialEq)]
pub struct SymbolTable {
    labels: HashMap<String, u16>,
    trace: Vec<u16>,
    end: u16,
}

impl SymbolTable {
    pub fn get(&self, name: &str) -> Option<u16> {
        self.labels.get(name).copied()
    }

    pub fn insert(&mut self, name: &str, addr: u16) -> Result<(), ErrorKind> {
        if self.labels.contains_key(name) {
            return Err(ErrorKind::DuplicateLabel(name.to_string()));
        }
        self.labels.insert(name.to_string(), addr);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.labels.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Labels ordered by address, then name.
    pub fn sorted(&self) -> Vec<(&str, u16)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by_key(|&(name, addr)| (addr, name));
        out
    }

    /// Program counter before each line, in line order.
    pub fn trace(&self) -> &[u16] {
        &self.trace
    }

    /// Program counter after the last line.
    pub fn end(&self) -> u16 {
        self.end
    }
}


// `.name:` -> `.name`
fn declared_name(text: &str) -> Result<&str, ErrorKind> {
    if text.contains(char::is_whitespace) {
        return Err(ErrorKind::InvalidLabel);
    }
    text.strip_suffix(':').ok_or(ErrorKind::InvalidLabel)
}

/// First pass: bind every label to the program counter of the line it
/// precedes. No bytes are emitted.
pub fn symbol_table_expansion(input: &[CLine]) -> Result<SymbolTable, AsmError> {
    let mut symbols = SymbolTable::default();
    let mut position: u16 = asm::BASE_ADDR;

    for line in input {
        symbols.trace.push(position);

        if let CToken::Label(ref text) = line.token {
            let name = declared_name(text).map_err(|k| line.error(k))?;
            symbols.insert(name, position).map_err(|k| line.error(k))?;
        }

        position = asm::advance(position, line)?;
    }
    symbols.end = position;

    log::debug!("symbol table: {} label(s), end 0x{:04X}", symbols.len(), symbols.end);
    for (name, addr) in symbols.sorted() {
        log::trace!("  {} = 0x{:03X}", name, addr);
    }

    Ok(symbols)
}
