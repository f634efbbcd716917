//! Whitespace separated token reader over a [`BufRead`].
//!
//! Input is read as bytes, invalid UTF-8 is replaced with U+FFFD.

use std::io::{self, BufRead};

pub struct Tokens<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    line: String,
    pos: usize,
}

impl<R: BufRead> Tokens<R> {

    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: String::new(),
            pos: 0,
        }
    }

    fn fill(&mut self) -> io::Result<bool> {
        self.line.clear();
        self.pos = 0;
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false)
        }
        self.line.push_str(&String::from_utf8_lossy(&self.buf));
        Ok(true)
    }

    /// Returns the next token, reading further lines as needed. `None` at
    /// end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                if !self.fill()? {
                    return Ok(None)
                }
                continue
            }
            let start = self.pos + (rest.len() - trimmed.len());
            let end = trimmed
                .find(char::is_whitespace)
                .map_or(self.line.len(), |i| start + i);
            self.pos = end;
            return Ok(Some(self.line[start..end].to_owned()))
        }
    }

    /// Discards whatever is left of the current line.
    #[inline(always)]
    pub fn skip_line(&mut self) {
        self.pos = self.line.len();
    }

    /// Returns the rest of the current line, or the next line if the current
    /// one is used up, without the line terminator.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.pos >= self.line.len() && !self.fill()? {
            return Ok(None)
        }
        let line = self.line[self.pos..]
            .trim_end_matches(['\r', '\n'])
            .to_owned();
        self.pos = self.line.len();
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for Tokens<R> {

    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
