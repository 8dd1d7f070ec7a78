//! Character cursor and keyword search shared by the dialect scanners.
//!
//! The scanners are tolerant: every `eat_*` method either
//! consumes a construct and reports success, or leaves the cursor where it
//! was, so callers can try alternatives and skip what they don't recognise.

use std::ops::Range;

/// Whether `c` can be part of an identifier or keyword.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte cursor over source text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Cursor starting at byte offset `pos`.
    pub fn at(source: &'a str, pos: usize) -> Self {
        Self { source, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// 1-based line number of the current position.
    ///
    /// Scans from the start of the source, so keep it off hot paths.
    pub fn line(&self) -> usize {
        self.source[..self.pos].matches('\n').count() + 1
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance while `predicate` holds and return the consumed slice.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    pub fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }

    /// Consume `c` if it is next.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the exact text `s` if it is next.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consume `keyword` (ASCII case-insensitive) if it is next and is not
    /// immediately followed by another word character.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        let Some(head) = rest.get(..keyword.len()) else {
            return false;
        };
        if !head.eq_ignore_ascii_case(keyword) {
            return false;
        }
        if rest[keyword.len()..].chars().next().is_some_and(is_word_char) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    /// Consume an identifier (`[A-Za-z0-9_]+`, Unicode letters included).
    pub fn ident(&mut self) -> Option<&'a str> {
        let word = self.advance_while(is_word_char);
        (!word.is_empty()).then_some(word)
    }

    /// Consume a numeric-looking token: sign, digits, `.`, exponent markers.
    ///
    /// The token is not validated; callers parse it and report failures.
    pub fn number_token(&mut self) -> Option<&'a str> {
        let token = self
            .advance_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
        (!token.is_empty()).then_some(token)
    }
}

/// Find the next whole-word occurrence of `keyword` (ASCII case-insensitive)
/// in `text` at or after byte offset `from`.
///
/// A match preceded or followed by a word character is not a match, so
/// `VAR` is never found inside `END_VAR` or `VAR_INPUT`.
pub fn find_keyword(text: &str, keyword: &str, from: usize) -> Option<Range<usize>> {
    let needle = keyword.as_bytes();
    let bytes = text.as_bytes();
    if needle.is_empty() || needle.len() > bytes.len() {
        return None;
    }
    let mut i = from;
    while i + needle.len() <= bytes.len() {
        if bytes[i..i + needle.len()].eq_ignore_ascii_case(needle) && text.is_char_boundary(i) {
            let end = i + needle.len();
            let before = text[..i].chars().next_back();
            let after = text[end..].chars().next();
            if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
                return Some(i..end);
            }
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_requires_word_boundary() {
        let mut cursor = Cursor::new("robtargets p1");
        assert!(!cursor.eat_keyword("robtarget"));
        assert_eq!(cursor.pos(), 0);

        let mut cursor = Cursor::new("RobTarget p1");
        assert!(cursor.eat_keyword("robtarget"));
        cursor.skip_whitespace();
        assert_eq!(cursor.ident(), Some("p1"));
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_number_token() {
        let mut cursor = Cursor::new("-1.5e-3, 2");
        assert_eq!(cursor.number_token(), Some("-1.5e-3"));
        assert!(cursor.eat(','));
        assert_eq!(cursor.number_token(), None);
    }

    #[test]
    fn test_line_numbers() {
        let mut cursor = Cursor::new("a\nb\nc");
        assert_eq!(cursor.line(), 1);
        cursor.advance_while(|c| c != 'c');
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_find_keyword_skips_embedded_words() {
        let text = "VAR_INPUT x : INT; END_VAR\nVAR y : BOOL; END_VAR";
        let found = find_keyword(text, "var", 0).expect("standalone VAR");
        assert_eq!(&text[found.clone()], "VAR");
        assert_eq!(found.start, 27);
        assert_eq!(find_keyword(text, "END_VAR", 0).map(|r| r.start), Some(19));
        assert_eq!(find_keyword(text, "END_VAR", 20).map(|r| r.start), Some(41));
    }

    #[test]
    fn test_find_keyword_handles_multibyte_text() {
        let text = "(* 注释 *) END_PROGRAM";
        let found = find_keyword(text, "END_PROGRAM", 0).expect("end marker");
        assert_eq!(&text[found], "END_PROGRAM");
    }
}
