use std::io::{self, BufRead};

use crate::asm::config::AsmConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    // 1-based
    pub number:    u32,
    pub text:      String,
    pub truncated: bool,
}

// Reads the source one line at a time, the terminator is stripped and the
// text is cut down to the configured length
pub struct SourceLines<R> {
    reader:  R,
    number:  u32,
    max_len: Option<usize>,
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R, config: &AsmConfig) -> SourceLines<R> {
        SourceLines { reader, number: 0, max_len: config.max_line_len }
    }

    fn read_line(&mut self) -> io::Result<Option<SourceLine>> {
        let mut text = String::new();
        if self.reader.read_line(&mut text)? == 0 {
            return Ok(None);
        }
        self.number += 1;

        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }

        let truncated = match self.max_len {
            Some(max) => truncate_chars(&mut text, max),
            None => false,
        };

        Ok(Some(SourceLine { number: self.number, text, truncated }))
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = io::Result<SourceLine>;

    fn next(&mut self) -> Option<io::Result<SourceLine>> {
        self.read_line().transpose()
    }
}

fn truncate_chars(text: &mut String, max: usize) -> bool {
    match text.char_indices().nth(max) {
        Some((idx, _)) => {
            text.truncate(idx);
            true
        },
        None => false,
    }
}
