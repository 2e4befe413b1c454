use serde::Serialize;

/// A classified run of characters borrowed from the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Token<'a> {
    /// Letters, optionally followed by digits (`String1986`), or a bare digit run.
    Word(&'a str),
    /// Characters that are neither letters, digits nor separators (`$*`).
    Symbol(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Token::Word(text) | Token::Symbol(text) => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Punctuation that delimits tokens and is dropped, alongside whitespace.
pub const SEPARATORS: &[char] = &['-', '_', '/', '.', '(', ')', '{', '}', '|', '\\', '[', ']'];

pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || SEPARATORS.contains(&ch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Separator,
    Upper,
    Lower,
    /// A letter without case, e.g. CJK ideographs.
    Caseless,
    Digit,
    Symbol,
}

impl Class {
    fn of(ch: char) -> Self {
        if is_separator(ch) {
            Class::Separator
        } else if ch.is_alphabetic() {
            if ch.is_uppercase() {
                Class::Upper
            } else if ch.is_lowercase() {
                Class::Lower
            } else {
                Class::Caseless
            }
        } else if ch.is_numeric() {
            Class::Digit
        } else {
            Class::Symbol
        }
    }

    fn is_letter(self) -> bool {
        matches!(self, Class::Upper | Class::Lower | Class::Caseless)
    }

    /// Whether `next` extends a token whose last character was of class `self`.
    /// `after` is the class of the character following `next`, if any.
    fn continues(self, next: Class, after: Option<Class>) -> bool {
        match (self, next) {
            (Class::Symbol, Class::Symbol) => true,
            (Class::Symbol, _) | (_, Class::Symbol) => false,
            // weirdCased -> weird, Cased
            (Class::Lower, Class::Upper) => false,
            // XMLHttp -> XML, Http
            (Class::Upper, Class::Upper) => after != Some(Class::Lower),
            // String1986Foo -> String1986, Foo
            (Class::Digit, n) if n.is_letter() => false,
            _ => true,
        }
    }
}

fn close<'a>(input: &'a str, last: Class) -> Token<'a> {
    if last == Class::Symbol {
        Token::Symbol(input)
    } else {
        Token::Word(input)
    }
}

/// Split `input` into words and symbol runs, dropping separators.
///
/// Every non-separator character of the input appears in exactly one token,
/// in its original order and case.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, Class)> = input
        .char_indices()
        .map(|(offset, ch)| (offset, Class::of(ch)))
        .collect();

    let mut tokens = Vec::new();
    // Start offset and class of the last character of the open token
    let mut open: Option<(usize, Class)> = None;

    for (i, &(offset, class)) in chars.iter().enumerate() {
        if class == Class::Separator {
            if let Some((start, last)) = open.take() {
                tokens.push(close(&input[start..offset], last));
            }
            continue;
        }

        let after = chars.get(i + 1).map(|&(_, c)| c);
        open = match open {
            Some((start, last)) if last.continues(class, after) => Some((start, class)),
            Some((start, last)) => {
                tokens.push(close(&input[start..offset], last));
                Some((offset, class))
            }
            None => Some((offset, class)),
        };
    }

    if let Some((start, last)) = open {
        tokens.push(close(&input[start..], last));
    }

    tracing::trace!(input, tokens = tokens.len(), "tokenized");
    tokens
}
