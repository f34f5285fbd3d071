//! Line-oriented reader for the go.mod directive grammar
//!
//! Produces one [`Statement`] per directive line, with block forms such as
//! `require ( ... )` flattened into one statement per inner line. Columns
//! are 1-based character positions; `end` points one past the last token.

const DIRECTIVES: &[&str] = &[
    "module",
    "go",
    "toolchain",
    "require",
    "replace",
    "exclude",
    "retract",
    "godebug",
];

const BLOCK_DIRECTIVES: &[&str] = &["require", "replace", "exclude", "retract", "godebug"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text with quotes removed and escapes resolved
    pub text: String,
    pub start: i64,
    pub end: i64,
    quoted: bool,
}

impl Token {
    fn is_punct(&self, punct: &str) -> bool {
        !self.quoted && self.text == punct
    }

    fn is_any_punct(&self) -> bool {
        self.is_punct("(") || self.is_punct(")")
    }

    pub fn is_arrow(&self) -> bool {
        !self.quoted && self.text == "=>"
    }
}

/// One directive with its arguments
///
/// `start` is the column of the verb for single-line directives and of the
/// first argument inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub verb: String,
    pub args: Vec<Token>,
    pub line: i64,
    pub start: i64,
    pub end: i64,
}

/// Splits go.mod text into statements
///
/// # Errors
/// A `line N: <reason>` message for unknown directives, stray or unbalanced
/// parentheses and unterminated strings.
pub fn parse_statements(text: &str) -> Result<Vec<Statement>, String> {
    let mut statements = Vec::new();
    let mut open_block: Option<(String, i64)> = None;

    for (index, raw_line) in text.split('\n').enumerate() {
        let line = index as i64 + 1;
        let tokens = tokenize(raw_line.strip_suffix('\r').unwrap_or(raw_line))
            .map_err(|e| format!("line {}: {}", line, e))?;

        if tokens.is_empty() {
            continue;
        }

        if let Some((verb, _)) = &open_block {
            if tokens.len() == 1 && tokens[0].is_punct(")") {
                open_block = None;
                continue;
            }
            if tokens.iter().any(Token::is_any_punct) {
                return Err(format!("line {}: unexpected parenthesis", line));
            }
            statements.push(Statement {
                verb: verb.clone(),
                line,
                start: tokens[0].start,
                end: tokens[tokens.len() - 1].end,
                args: tokens,
            });
            continue;
        }

        let verb = &tokens[0];
        if verb.quoted || verb.is_any_punct() {
            return Err(format!("line {}: expected directive, found {:?}", line, verb.text));
        }
        if !DIRECTIVES.contains(&verb.text.as_str()) {
            return Err(format!("line {}: unknown directive: {}", line, verb.text));
        }

        let args = &tokens[1..];
        let opens_block = args.first().is_some_and(|t| t.is_punct("("));
        if opens_block {
            if !BLOCK_DIRECTIVES.contains(&verb.text.as_str()) {
                return Err(format!("line {}: {} does not accept a block", line, verb.text));
            }
            match args.len() {
                1 => open_block = Some((verb.text.clone(), line)),
                2 if args[1].is_punct(")") => {}
                _ => return Err(format!("line {}: unexpected token after (", line)),
            }
            continue;
        }
        if args.iter().any(Token::is_any_punct) {
            return Err(format!("line {}: unexpected parenthesis", line));
        }

        statements.push(Statement {
            verb: verb.text.clone(),
            line,
            start: verb.start,
            end: tokens[tokens.len() - 1].end,
            args: args.to_vec(),
        });
    }

    match open_block {
        Some((verb, line)) => Err(format!("line {}: unterminated {} block", line, verb)),
        None => Ok(statements),
    }
}

fn tokenize(line: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '/' && chars.get(i + 1) == Some(&'/') {
            break;
        }

        let start = i;
        let (text, quoted) = match c {
            '(' | ')' => {
                i += 1;
                (c.to_string(), false)
            }
            '"' => {
                let (text, next) = read_interpreted(&chars, i + 1)?;
                i = next;
                (text, true)
            }
            '`' => {
                let close = chars[i + 1..]
                    .iter()
                    .position(|&ch| ch == '`')
                    .ok_or("unterminated raw string")?;
                let text = chars[i + 1..i + 1 + close].iter().collect();
                i += close + 2;
                (text, true)
            }
            _ => {
                while i < chars.len() && is_ident_char(chars[i]) {
                    if chars[i] == '/' && chars.get(i + 1) == Some(&'/') {
                        break;
                    }
                    i += 1;
                }
                (chars[start..i].iter().collect(), false)
            }
        };

        tokens.push(Token {
            text,
            start: start as i64 + 1,
            end: i as i64 + 1,
            quoted,
        });
    }

    Ok(tokens)
}

fn is_ident_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '"' | '`')
}

/// Reads a double-quoted string body starting after the opening quote
///
/// Returns the unescaped text and the index one past the closing quote.
fn read_interpreted(chars: &[char], mut i: usize) -> Result<(String, usize), String> {
    let mut text = String::new();
    while i < chars.len() {
        match chars[i] {
            '"' => return Ok((text, i + 1)),
            '\\' => {
                let escaped = chars.get(i + 1).ok_or("unterminated quoted string")?;
                text.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    other => *other,
                });
                i += 2;
            }
            c => {
                text.push(c);
                i += 1;
            }
        }
    }
    Err("unterminated quoted string".to_string())
}
