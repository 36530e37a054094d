//! Random string generation over selectable character classes.

use rand::Rng;

use crate::error::RandomError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Character classes a generated string may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub punctuation: bool,
}

impl Alphabet {
    /// All four classes enabled.
    pub fn all() -> Alphabet {
        Alphabet {
            lowercase: true,
            uppercase: true,
            digits: true,
            punctuation: true,
        }
    }

    /// Returns true if no class is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.lowercase || self.uppercase || self.digits || self.punctuation)
    }

    fn charset(&self) -> String {
        let mut charset = String::new();
        if self.lowercase {
            charset.push_str(LOWERCASE);
        }
        if self.uppercase {
            charset.push_str(UPPERCASE);
        }
        if self.digits {
            charset.push_str(DIGITS);
        }
        if self.punctuation {
            charset.push_str(PUNCTUATION);
        }
        charset
    }
}

impl Default for Alphabet {
    fn default() -> Alphabet {
        Alphabet::all()
    }
}

/// Generates `length` characters drawn uniformly from the enabled classes.
pub fn random_string_with(length: usize, alphabet: Alphabet) -> Result<String, RandomError> {
    if length == 0 {
        return Err(RandomError::ZeroLength);
    }
    if alphabet.is_empty() {
        return Err(RandomError::EmptyAlphabet);
    }

    let charset = alphabet.charset();
    let chars = charset.as_bytes();
    let mut rng = rand::thread_rng();

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng.gen_range(0..chars.len());
        out.push(chars[idx] as char);
    }
    Ok(out)
}

/// Letters and digits, no punctuation.
pub fn random_string(length: usize) -> Result<String, RandomError> {
    random_string_with(
        length,
        Alphabet {
            punctuation: false,
            ..Alphabet::all()
        },
    )
}

/// Lowercase letters only.
pub fn random_lowercase_string(length: usize) -> Result<String, RandomError> {
    random_string_with(
        length,
        Alphabet {
            lowercase: true,
            uppercase: false,
            digits: false,
            punctuation: false,
        },
    )
}

/// Uppercase letters only.
pub fn random_uppercase_string(length: usize) -> Result<String, RandomError> {
    random_string_with(
        length,
        Alphabet {
            lowercase: false,
            uppercase: true,
            digits: false,
            punctuation: false,
        },
    )
}

/// Decimal digits only.
pub fn random_digits_string(length: usize) -> Result<String, RandomError> {
    random_string_with(
        length,
        Alphabet {
            lowercase: false,
            uppercase: false,
            digits: true,
            punctuation: false,
        },
    )
}

/// ASCII punctuation only.
pub fn random_punctuation_string(length: usize) -> Result<String, RandomError> {
    random_string_with(
        length,
        Alphabet {
            lowercase: false,
            uppercase: false,
            digits: false,
            punctuation: true,
        },
    )
}

/// Lowercase and uppercase letters, no digits.
pub fn random_letters_string(length: usize) -> Result<String, RandomError> {
    random_string_with(
        length,
        Alphabet {
            lowercase: true,
            uppercase: true,
            digits: false,
            punctuation: false,
        },
    )
}
