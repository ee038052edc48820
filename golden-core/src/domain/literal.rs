//! Deserialization of list-like text fields.
//!
//! Some columns (`mmsi`, `name`, `callsign`) hold a textual serialization of a
//! list, e.g. `['SEA STAR', 'STAR OF THE SEA']`, since a vessel may have had
//! several values over time. [`parse_literal`] turns such text back into a
//! [`Literal`], falling back to the original text when it is not a literal.

use crate::error::{
    Error,
    error::LiteralSnafu,
    literal_error::{
        FloatSnafu, IntSnafu, InvalidEscapeSnafu, NonNumericUnarySnafu, UnexpectedCharSnafu,
        UnexpectedEndSnafu, UnknownNameSnafu,
    },
};
use super::value::write_float;
use crate::LiteralError;
use snafu::ResultExt;
use std::{
    fmt::{self, Display, Formatter, Write},
    str::FromStr,
};
use tracing::debug;

type ParseResult<T> = std::result::Result<T, LiteralError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    Set(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

/// Result of [`parse_literal`], either the parsed literal or the untouched input.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralOutcome {
    Parsed(Literal),
    Fallback(String),
}

/// Parses `raw` as a literal. Never fails, input that is not a valid literal
/// is handed back as [`LiteralOutcome::Fallback`].
pub fn parse_literal(raw: &str) -> LiteralOutcome {
    match raw.parse::<Literal>() {
        Ok(literal) => LiteralOutcome::Parsed(literal),
        Err(e) => {
            debug!("keeping raw field value: {e:?}");
            LiteralOutcome::Fallback(raw.to_string())
        }
    }
}

impl LiteralOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, LiteralOutcome::Parsed(_))
    }
}

impl Display for LiteralOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralOutcome::Parsed(literal) => literal.fmt(f),
            LiteralOutcome::Fallback(raw) => f.write_str(raw),
        }
    }
}

impl FromStr for Literal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse().context(LiteralSnafu { value: s })
    }
}

impl Literal {
    fn write_repr(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("None"),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Float(v) => write_float(f, *v),
            Literal::Str(v) => write_str_repr(f, v),
            Literal::List(items) => {
                f.write_char('[')?;
                write_items(f, items)?;
                f.write_char(']')
            }
            Literal::Tuple(items) => {
                f.write_char('(')?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            Literal::Set(items) if items.is_empty() => f.write_str("set()"),
            Literal::Set(items) => {
                f.write_char('{')?;
                write_items(f, items)?;
                f.write_char('}')
            }
            Literal::Dict(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    key.write_repr(f)?;
                    f.write_str(": ")?;
                    value.write_repr(f)?;
                }
                f.write_char('}')
            }
        }
    }
}

/// Top-level strings print verbatim, everything nested prints in quoted form.
impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(v) => f.write_str(v),
            v => v.write_repr(f),
        }
    }
}

fn write_items(f: &mut Formatter<'_>, items: &[Literal]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.write_repr(f)?;
    }
    Ok(())
}

fn write_str_repr(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if c.is_control() => match c as u32 {
                v @ 0..=0xff => write!(f, "\\x{v:02x}")?,
                v @ 0x100..=0xffff => write!(f, "\\u{v:04x}")?,
                v => write!(f, "\\U{v:08x}")?,
            },
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.trim_start_matches([' ', '\t']).chars().collect(),
            pos: 0,
        }
    }

    fn parse(mut self) -> ParseResult<Literal> {
        let first = self.expr()?;
        self.skip_ws();

        let literal = if self.eat(',') {
            let mut items = vec![first];
            loop {
                self.skip_ws();
                if self.peek().is_none() {
                    break;
                }
                items.push(self.expr()?);
                self.skip_ws();
                if !self.eat(',') {
                    break;
                }
            }
            Literal::Tuple(items)
        } else {
            first
        };

        self.skip_ws();
        match self.peek() {
            None => Ok(literal),
            Some(found) => UnexpectedCharSnafu {
                found,
                offset: self.pos,
            }
            .fail(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> ParseResult<()> {
        if self.eat(c) {
            return Ok(());
        }
        match self.peek() {
            Some(found) => UnexpectedCharSnafu {
                found,
                offset: self.pos,
            }
            .fail(),
            None => UnexpectedEndSnafu.fail(),
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r' | '\x0c')) {
            self.pos += 1;
        }
    }

    fn expr(&mut self) -> ParseResult<Literal> {
        self.skip_ws();
        let Some(c) = self.peek() else {
            return UnexpectedEndSnafu.fail();
        };

        match c {
            '[' => {
                self.pos += 1;
                let mut items = Vec::new();
                self.items_until(']', &mut items)?;
                Ok(Literal::List(items))
            }
            '(' => self.parenthesized(),
            '{' => self.braced(),
            '\'' | '"' => self.strings(false),
            '+' | '-' => {
                self.pos += 1;
                self.skip_ws();
                match self.peek() {
                    Some(d) if d.is_ascii_digit() || d == '.' => {}
                    _ => return NonNumericUnarySnafu.fail(),
                }
                match (c, self.number()?) {
                    ('+', v) => Ok(v),
                    (_, Literal::Int(v)) => Ok(Literal::Int(-v)),
                    (_, Literal::Float(v)) => Ok(Literal::Float(-v)),
                    _ => NonNumericUnarySnafu.fail(),
                }
            }
            c if c.is_ascii_digit() || c == '.' => self.number(),
            c if c.is_alphabetic() || c == '_' => self.name(),
            found => UnexpectedCharSnafu {
                found,
                offset: self.pos,
            }
            .fail(),
        }
    }

    /// Comma separated items up to and including `close`, allowing a trailing comma.
    fn items_until(&mut self, close: char, items: &mut Vec<Literal>) -> ParseResult<()> {
        loop {
            self.skip_ws();
            if self.eat(close) {
                return Ok(());
            }
            items.push(self.expr()?);
            self.skip_ws();
            if !self.eat(',') {
                return self.expect(close);
            }
        }
    }

    fn parenthesized(&mut self) -> ParseResult<Literal> {
        self.pos += 1;
        self.skip_ws();
        if self.eat(')') {
            return Ok(Literal::Tuple(Vec::new()));
        }

        let first = self.expr()?;
        self.skip_ws();
        if self.eat(')') {
            return Ok(first);
        }
        self.expect(',')?;

        let mut items = vec![first];
        self.items_until(')', &mut items)?;
        Ok(Literal::Tuple(items))
    }

    fn braced(&mut self) -> ParseResult<Literal> {
        self.pos += 1;
        self.skip_ws();
        if self.eat('}') {
            return Ok(Literal::Dict(Vec::new()));
        }

        let first = self.expr()?;
        self.skip_ws();

        if self.eat(':') {
            let value = self.expr()?;
            let mut entries = Vec::new();
            insert_entry(&mut entries, first, value);
            loop {
                self.skip_ws();
                if self.eat('}') {
                    break;
                }
                self.expect(',')?;
                self.skip_ws();
                if self.eat('}') {
                    break;
                }
                let key = self.expr()?;
                self.skip_ws();
                self.expect(':')?;
                let value = self.expr()?;
                insert_entry(&mut entries, key, value);
            }
            return Ok(Literal::Dict(entries));
        }

        let mut items = vec![first];
        if !self.eat('}') {
            self.expect(',')?;
            self.items_until('}', &mut items)?;
        }

        let mut unique: Vec<Literal> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Ok(Literal::Set(unique))
    }

    fn name(&mut self) -> ParseResult<Literal> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect();

        match name.as_str() {
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            "None" => Ok(Literal::None),
            "r" | "R" | "u" | "U" if matches!(self.peek(), Some('\'' | '"')) => {
                self.strings(matches!(name.as_str(), "r" | "R"))
            }
            _ => UnknownNameSnafu { name }.fail(),
        }
    }

    /// One string literal plus any adjacent ones, which are concatenated.
    fn strings(&mut self, raw: bool) -> ParseResult<Literal> {
        let mut value = self.string(raw)?;

        loop {
            self.skip_ws();
            match (self.peek(), self.peek_at(1)) {
                (Some('\'' | '"'), _) => value.push_str(&self.string(false)?),
                (Some(p @ ('r' | 'R' | 'u' | 'U')), Some('\'' | '"')) => {
                    self.pos += 1;
                    value.push_str(&self.string(matches!(p, 'r' | 'R'))?);
                }
                _ => break,
            }
        }

        Ok(Literal::Str(value))
    }

    fn string(&mut self, raw: bool) -> ParseResult<String> {
        let Some(quote) = self.next() else {
            return UnexpectedEndSnafu.fail();
        };
        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        if triple {
            self.pos += 2;
        }

        let mut out = String::new();
        loop {
            let Some(c) = self.next() else {
                return UnexpectedEndSnafu.fail();
            };
            match c {
                c if c == quote => {
                    if !triple {
                        return Ok(out);
                    }
                    if self.peek() == Some(quote) && self.peek_at(1) == Some(quote) {
                        self.pos += 2;
                        return Ok(out);
                    }
                    out.push(c);
                }
                '\\' if raw => {
                    out.push('\\');
                    if let Some(next) = self.next() {
                        out.push(next);
                    }
                }
                '\\' => self.escape(&mut out)?,
                '\n' if !triple => {
                    return UnexpectedCharSnafu {
                        found: c,
                        offset: self.pos - 1,
                    }
                    .fail();
                }
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> ParseResult<()> {
        let offset = self.pos - 1;
        let Some(c) = self.next() else {
            return UnexpectedEndSnafu.fail();
        };

        match c {
            '\n' => {}
            '\\' | '\'' | '"' => out.push(c),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            self.pos += 1;
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).ok_or_else(|| InvalidEscapeSnafu { offset }.build())?);
            }
            'x' => out.push(self.hex_escape(2, offset)?),
            'u' => out.push(self.hex_escape(4, offset)?),
            'U' => out.push(self.hex_escape(8, offset)?),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_escape(&mut self, len: usize, offset: usize) -> ParseResult<char> {
        let mut value = 0u32;
        for _ in 0..len {
            let digit = self
                .next()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| InvalidEscapeSnafu { offset }.build())?;
            value = value * 16 + digit;
        }
        char::from_u32(value).ok_or_else(|| InvalidEscapeSnafu { offset }.build())
    }

    fn number(&mut self) -> ParseResult<Literal> {
        let start = self.pos;

        if self.peek() == Some('0') {
            let radix = match self.peek_at(1) {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.pos += 2;
                while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
                    self.pos += 1;
                }
                let text: String = self.chars[start..self.pos].iter().collect();
                let digits = text[2..].replace('_', "");
                return i64::from_str_radix(&digits, radix)
                    .map(Literal::Int)
                    .context(IntSnafu { value: text });
            }
        }

        let mut is_float = false;
        self.digits();
        if self.eat('.') {
            is_float = true;
            self.digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_start = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if matches!(self.peek_at(exponent_start), Some(d) if d.is_ascii_digit()) {
                is_float = true;
                self.pos += exponent_start;
                self.digits();
            }
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        let cleaned = text.replace('_', "");

        if cleaned == "." {
            return UnexpectedCharSnafu {
                found: '.',
                offset: start,
            }
            .fail();
        }
        if let Some(found @ ('j' | 'J')) = self.peek() {
            return UnexpectedCharSnafu {
                found,
                offset: self.pos,
            }
            .fail();
        }

        if is_float {
            cleaned
                .parse::<f64>()
                .map(Literal::Float)
                .context(FloatSnafu { value: text })
        } else if cleaned.len() > 1 && cleaned.starts_with('0') && cleaned.chars().any(|c| c != '0')
        {
            UnexpectedCharSnafu {
                found: '0',
                offset: start,
            }
            .fail()
        } else {
            cleaned
                .parse::<i64>()
                .map(Literal::Int)
                .context(IntSnafu { value: text })
        }
    }

    fn digits(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '_') {
            self.pos += 1;
        }
    }
}

fn insert_entry(entries: &mut Vec<(Literal, Literal)>, key: Literal, value: Literal) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}
