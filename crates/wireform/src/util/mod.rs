//! Utility modules.
//!
//! Small freestanding helpers that ship alongside the codecs:
//! - [`random`]: random string generation over selectable character classes
//! - [`perms`]: file permission inspection (Unix targets)

#[cfg(unix)]
pub mod perms;
pub mod random;

#[cfg(unix)]
pub use perms::{check_permissions, Access, FilePermissions};
pub use random::{
    random_digits_string, random_letters_string, random_lowercase_string,
    random_punctuation_string, random_string, random_string_with, random_uppercase_string,
    Alphabet,
};
