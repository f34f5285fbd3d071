//! Minimal JSON reader that keeps byte offsets of keys, values and braces
//!
//! Only used on documents that already decoded successfully with
//! `serde_json`; it exists to map decoded entries back to source text.

/// A JSON value with the byte range it occupies (`end` is exclusive)
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedValue {
    pub kind: SpannedKind,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpannedKind {
    Object(Vec<SpannedMember>),
    Array(Vec<SpannedValue>),
    /// Raw byte range of the string body, excluding the quotes
    String { body_start: usize, body_end: usize },
    Scalar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedMember {
    /// Unescaped key
    pub key: String,
    /// Byte offset of the key's opening quote
    pub key_start: usize,
    pub value: SpannedValue,
}

impl SpannedValue {
    /// Members of an object, in document order; empty for other kinds
    pub fn members(&self) -> &[SpannedMember] {
        match &self.kind {
            SpannedKind::Object(members) => members,
            _ => &[],
        }
    }

    /// Last member with the given key, matching JSON decoders' last-wins rule
    pub fn member(&self, key: &str) -> Option<&SpannedMember> {
        self.members().iter().rev().find(|m| m.key == key)
    }
}

/// Parses a complete JSON document
pub fn parse_document(text: &str) -> Result<SpannedValue, String> {
    let mut reader = Reader {
        bytes: text.as_bytes(),
        text,
        pos: 0,
    };
    let value = reader.value()?;
    reader.skip_whitespace();
    if reader.pos != reader.bytes.len() {
        return Err(format!("trailing characters at byte {}", reader.pos));
    }
    Ok(value)
}

struct Reader<'a> {
    bytes: &'a [u8],
    text: &'a str,
    pos: usize,
}

impl Reader<'_> {
    fn skip_whitespace(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<(), String> {
        self.skip_whitespace();
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(format!("expected '{}' at byte {}", byte as char, self.pos))
        }
    }

    fn value(&mut self) -> Result<SpannedValue, String> {
        self.skip_whitespace();
        let start = self.pos;
        let kind = match self.peek() {
            Some(b'{') => SpannedKind::Object(self.object()?),
            Some(b'[') => SpannedKind::Array(self.array()?),
            Some(b'"') => {
                let (body_start, body_end) = self.string_body()?;
                SpannedKind::String {
                    body_start,
                    body_end,
                }
            }
            Some(_) => {
                self.scalar()?;
                SpannedKind::Scalar
            }
            None => return Err("unexpected end of input".to_string()),
        };
        Ok(SpannedValue {
            kind,
            start,
            end: self.pos,
        })
    }

    fn object(&mut self) -> Result<Vec<SpannedMember>, String> {
        self.expect(b'{')?;
        let mut members = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(members);
        }

        loop {
            self.skip_whitespace();
            let key_start = self.pos;
            if self.peek() != Some(b'"') {
                return Err(format!("expected object key at byte {}", self.pos));
            }
            let (body_start, body_end) = self.string_body()?;
            let key = unescape(&self.text[body_start..body_end]);
            self.expect(b':')?;
            let value = self.value()?;
            members.push(SpannedMember {
                key,
                key_start,
                value,
            });

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(members);
                }
                _ => return Err(format!("expected ',' or '}}' at byte {}", self.pos)),
            }
        }
    }

    fn array(&mut self) -> Result<Vec<SpannedValue>, String> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(items);
        }

        loop {
            items.push(self.value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                _ => return Err(format!("expected ',' or ']' at byte {}", self.pos)),
            }
        }
    }

    /// Consumes a quoted string, returning the byte range of its body
    fn string_body(&mut self) -> Result<(usize, usize), String> {
        self.pos += 1;
        let body_start = self.pos;
        while let Some(byte) = self.peek() {
            match byte {
                b'"' => {
                    let body_end = self.pos;
                    self.pos += 1;
                    return Ok((body_start, body_end));
                }
                b'\\' => self.pos += 2,
                _ => self.pos += 1,
            }
        }
        Err("unterminated string".to_string())
    }

    fn scalar(&mut self) -> Result<(), String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'+' | b'.'))
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(format!("unexpected character at byte {}", start));
        }
        Ok(())
    }
}

fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    // serde_json owns the escape grammar
    serde_json::from_str::<String>(&format!("\"{}\"", raw)).unwrap_or_else(|_| raw.to_string())
}
