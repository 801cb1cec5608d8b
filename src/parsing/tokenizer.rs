//! Tokenizer for free-text schedules.
//!
//! Text is lowercased and folded to ASCII letters before being split into
//! numbers, words and the punctuation the grammar cares about. Everything
//! else separates tokens and is dropped.

/// A lexical unit of a schedule description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of ASCII digits. Values too large for `u32` saturate.
    Number(u32),
    /// A run of letters, already lowercased and diacritic-free.
    Word(String),
    /// `/`
    Slash,
    /// `:`
    Colon,
    /// `-` or an en/em dash.
    Dash,
    /// `,` or `;`
    Comma,
}

impl Token {
    /// Returns the number carried by a [`Token::Number`].
    pub fn number(&self) -> Option<u32> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the token is the given word.
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Token::Word(w) if w == word)
    }

    /// Returns true if the token is any of the given words.
    pub fn is_any_word(&self, words: &[&str]) -> bool {
        matches!(self, Token::Word(w) if words.contains(&w.as_str()))
    }
}

/// Lowercases text and strips Portuguese diacritics.
///
/// # Example
///
/// ```
/// use shift_engine::parsing::fold_diacritics;
///
/// assert_eq!(fold_diacritics("Até às 18h, Manhã"), "ate as 18h, manha");
/// ```
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Splits schedule text into tokens.
///
/// Digits and letters never share a token, so `"23h30"` yields
/// `Number(23), Word("h"), Number(30)`.
///
/// # Example
///
/// ```
/// use shift_engine::parsing::{Token, tokenize};
///
/// let tokens = tokenize("10/09 às 23h");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Number(10),
///         Token::Slash,
///         Token::Number(9),
///         Token::Word("as".to_string()),
///         Token::Number(23),
///         Token::Word("h".to_string()),
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let folded = fold_diacritics(text);
    let mut tokens = Vec::new();
    let mut chars = folded.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                digits.push(d);
                chars.next();
            }
            tokens.push(Token::Number(digits.parse().unwrap_or(u32::MAX)));
        } else if c.is_alphabetic() {
            let mut word = String::new();
            while let Some(&l) = chars.peek().filter(|l| l.is_alphabetic()) {
                word.push(l);
                chars.next();
            }
            tokens.push(Token::Word(word));
        } else {
            match c {
                '/' => tokens.push(Token::Slash),
                ':' => tokens.push(Token::Colon),
                '-' | '–' | '—' => tokens.push(Token::Dash),
                ',' | ';' => tokens.push(Token::Comma),
                _ => {}
            }
            chars.next();
        }
    }
    tokens
}
