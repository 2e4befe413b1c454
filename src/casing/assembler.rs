use super::tokenizer::Token;
use super::Case;

/// How a single word is rewritten under a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordStyle {
    Lower,
    Upper,
    Capitalized,
}

impl WordStyle {
    fn write(self, word: &str, out: &mut String) {
        match self {
            WordStyle::Lower => out.extend(word.chars().flat_map(char::to_lowercase)),
            WordStyle::Upper => out.extend(word.chars().flat_map(char::to_uppercase)),
            WordStyle::Capitalized => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.extend(chars.flat_map(char::to_lowercase));
                }
            }
        }
    }
}

impl Case {
    fn delimiter(self) -> &'static str {
        match self {
            Case::Camel | Case::Pascal => "",
            Case::Snake | Case::Constant => "_",
            Case::Kebab => "-",
        }
    }

    /// Style for the word at `index` among the word tokens only.
    fn word_style(self, index: usize) -> WordStyle {
        match self {
            Case::Camel if index == 0 => WordStyle::Lower,
            Case::Camel | Case::Pascal => WordStyle::Capitalized,
            Case::Snake | Case::Kebab => WordStyle::Lower,
            Case::Constant => WordStyle::Upper,
        }
    }
}

/// Join `tokens` into a single string under `case`.
///
/// Symbols are copied verbatim but still take part in the delimited join,
/// so `snake` renders `cased`, `$*`, `String` as `cased_$*_string`.
pub fn assemble(tokens: &[Token<'_>], case: Case) -> String {
    let capacity = tokens.iter().map(|t| t.text().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    let delimiter = case.delimiter();
    let mut words = 0;

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        match token {
            Token::Word(text) => {
                case.word_style(words).write(text, &mut out);
                words += 1;
            }
            Token::Symbol(text) => out.push_str(text),
        }
    }

    out
}
