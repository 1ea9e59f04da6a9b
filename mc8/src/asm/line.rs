use crate::asm::error::ErrorKind;

const COMMENT: char = '#';
const LABEL_END: char = ':';

// Both passes classify through here, any difference between them would shift
// the offsets recorded for labels away from the emitted bytes
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    // Blank, comment only, or a lone character
    Blank,
    // Lowercased label name, without the colon
    Label(String),
    Inst(Statement),
}

// Lowercased, comment already stripped
#[derive(Debug, PartialEq, Eq)]
pub struct Statement {
    pub mnemonic: String,
    pub operands: Vec<String>,
}

impl Statement {
    /// The single operand the instruction set allows.
    pub fn operand(&self) -> Result<&str, ErrorKind> {
        match self.operands.as_slice() {
            []   => Err(ErrorKind::MissingInstructionParameter),
            [op] => Ok(op.as_str()),
            _    => Err(ErrorKind::TooManyTokens),
        }
    }
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|t| !t.is_empty())
}

pub fn classify(text: &str) -> Result<Line, ErrorKind> {
    if is_blank_or_comment(text) {
        return Ok(Line::Blank);
    }

    if let Some(label) = extract_label(text)? {
        return Ok(Line::Label(label));
    }

    let code = match text.find(COMMENT) {
        Some(x) => &text[..x],
        None => text,
    };
    let mut words = tokens(code).map(|t| t.to_ascii_lowercase());

    match words.next() {
        Some(mnemonic) => Ok(Line::Inst(Statement { mnemonic, operands: words.collect() })),
        None => Ok(Line::Blank),
    }
}

fn is_blank_or_comment(text: &str) -> bool {
    match tokens(text).next() {
        None => true,
        Some(first) => first.chars().count() <= 1 || first.starts_with(COMMENT),
    }
}

// A label is the first run of non-space characters, ended by a colon. The
// colon must be followed by whitespace and then nothing but a comment.
fn extract_label(text: &str) -> Result<Option<String>, ErrorKind> {
    let text = text.trim_start_matches(is_space);

    for (i, c) in text.char_indices() {
        if c == LABEL_END {
            let rest = &text[i + 1..];
            if let Some(next) = rest.chars().next() {
                if !is_space(next) {
                    return Err(ErrorKind::NoSpaceAfterLabel);
                }
            }

            let rest = rest.trim_start_matches(is_space);
            if !rest.is_empty() && !rest.starts_with(COMMENT) {
                return Err(ErrorKind::InstructionFollowsLabel);
            }

            return Ok(Some(text[..i].to_ascii_lowercase()));
        } else if is_space(c) || c == COMMENT {
            // Ran past where a label could end
            return Ok(None);
        }
    }
    Ok(None)
}
