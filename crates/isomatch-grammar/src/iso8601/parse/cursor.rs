//! Byte cursor used by the grammar.
//!
//! The cursor only ever advances over whole characters, so every position
//! it reports is a valid `str` boundary.

/// Outcome of an optional separator: whether it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Present,
    Absent,
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Text consumed since `start`.
    #[must_use]
    pub fn since(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes the next character if `accept` maps it to a value.
    pub fn eat_map<T>(&mut self, accept: impl FnOnce(char) -> Option<T>) -> Option<T> {
        let c = self.peek()?;
        let value = accept(c)?;
        self.pos += c.len_utf8();
        Some(value)
    }

    /// Consumes an optional separator, recording whether it was there.
    pub fn separator(&mut self, sep: char) -> Separator {
        if self.eat(sep) {
            Separator::Present
        } else {
            Separator::Absent
        }
    }

    /// Consumes a separator exactly when an earlier one was written.
    ///
    /// An absent earlier separator matches the empty string here; whatever
    /// follows then rejects a stray separator.
    pub fn repeat_separator(&mut self, sep: char, earlier: Separator) -> bool {
        match earlier {
            Separator::Present => self.eat(sep),
            Separator::Absent => true,
        }
    }

    /// Consumes exactly `count` ASCII digits.
    pub fn digits(&mut self, count: usize) -> Option<&'a str> {
        self.digits_between(count, count)
    }

    /// Consumes between `min` and `max` ASCII digits, as many as present.
    pub fn digits_between(&mut self, min: usize, max: usize) -> Option<&'a str> {
        let available = self.input.as_bytes()[self.pos..]
            .iter()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if available < min {
            return None;
        }
        let start = self.pos;
        self.pos += available;
        Some(self.since(start))
    }

    /// Consumes a single ASCII digit within `low..=high`.
    pub fn digit_in(&mut self, low: char, high: char) -> Option<&'a str> {
        let start = self.pos;
        self.eat_map(|c| (low..=high).contains(&c).then_some(()))?;
        Some(self.since(start))
    }

    /// Runs `parse`, rewinding to the current position if it fails.
    pub fn attempt<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let result = parse(self);
        if result.is_none() {
            self.pos = start;
        }
        result
    }
}
