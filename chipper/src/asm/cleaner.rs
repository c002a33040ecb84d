use std::iter::Enumerate;
use std::str::FromStr;

use crate::asm::ast;
use crate::asm::error::{AsmError, ErrorKind};

// Classified line, shared by both passes so they agree on the size of every line
#[derive(Debug, PartialEq, Clone)]
pub enum CToken {
    // Raw declaration text, validated by the labeler
    Label(String),

    // Directive, operand
    Directive(ast::Directive, String),

    // Mnemonic, operands
    Inst(String, String),
}

impl CToken {
    /// Number of bytes this line adds to the image.
    pub fn size(&self) -> u16 {
        match self {
            CToken::Label(_)        => 0,
            CToken::Directive(_, _) => 1,
            CToken::Inst(_, _)      => 2,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct CLine {
    // 1-based, counts blank and comment lines too
    pub number: usize,
    pub text: String,
    pub token: CToken,
}

impl CLine {
    pub fn error(&self, kind: ErrorKind) -> AsmError {
        AsmError::new(self.number, self.text.clone(), kind)
    }
}


/// Strip the `;` comment, trim and lowercase a raw source line.
pub fn normalize(line: &str) -> String {
    let line = match line.find(';') {
        Some(x) => &line[..x],
        None => line,
    };
    line.trim().to_lowercase()
}

fn split_first_word(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(x) => (&line[..x], line[x..].trim_start()),
        None    => (line, ""),
    }
}

fn classify(line: &str) -> CToken {
    let (head, rest) = split_first_word(line);

    if line.starts_with('.') {
        match ast::Directive::from_str(head) {
            Ok(d)  => CToken::Directive(d, rest.to_string()),
            Err(_) => CToken::Label(line.to_string()),
        }
    } else {
        CToken::Inst(head.to_string(), rest.to_string())
    }
}


// Cleaner, yields one CLine per non-empty source line
pub struct Cleaner<I> {
    input_iter: Enumerate<I>,
}

impl<I, S> Cleaner<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(input: I) -> Cleaner<I> {
        Cleaner { input_iter: input.enumerate() }
    }

    pub fn next_line(&mut self) -> Option<CLine> {
        for (idx, raw) in self.input_iter.by_ref() {
            let text = normalize(raw.as_ref());

            if !text.is_empty() {
                let token = classify(&text);
                return Some(CLine { number: idx + 1, text, token });
            }
        }
        None
    }
}

impl<I, S> Iterator for Cleaner<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = CLine;
    fn next(&mut self) -> Option<CLine> {
        self.next_line()
    }
}
