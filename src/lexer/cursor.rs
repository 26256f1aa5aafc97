use std::str::Chars;

#[derive(Clone)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    line: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        let chars = s.chars();
        Self { chars, line: 1 }
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    #[inline]
    pub fn skip_if(&mut self, p: impl FnOnce(char) -> bool) -> bool {
        let skipped = self.peek().filter(|&c| p(c)).is_some();
        if skipped {
            self.take();
        }
        skipped
    }

    pub fn skip_whitespaces(&mut self) {
        while self.skip_if(char::is_whitespace) {}
    }

    /// Consumes the longest prefix whose chars all satisfy `p`.
    pub fn take_while(&mut self, p: impl Fn(char) -> bool) -> &'a str {
        let rest = self.chars.as_str();
        while self.skip_if(&p) {}
        let len = rest.len() - self.chars.as_str().len();
        &rest[..len]
    }

    pub fn take(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }
}
