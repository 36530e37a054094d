//! Encoded payloads.
//!
//! A [`Payload`] carries an encoding result and remembers which
//! representation produced it, so a decoder can reject the wrong kind
//! instead of guessing.

use sha2::{Digest, Sha256};

/// The encoded form of a value: text for the JSON and YAML codecs,
/// bytes for the binary codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// UTF-8 text produced by a text codec.
    Text(String),
    /// Raw bytes produced by the binary codec.
    Bytes(Vec<u8>),
}

impl Payload {
    /// Returns the payload kind name ("text" or "bytes").
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Bytes(_) => "bytes",
        }
    }

    /// Returns the text content, or None for a bytes payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Bytes(_) => None,
        }
    }

    /// Returns the byte content, or None for a text payload.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Bytes(bytes) => Some(bytes),
            Payload::Text(_) => None,
        }
    }

    /// Returns the encoded length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Payload::Text(text) => text.len(),
            Payload::Bytes(bytes) => bytes.len(),
        }
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the lowercase-hex SHA-256 digest of the encoded content.
    ///
    /// Stable across runs, suitable for content addressing and cache keys.
    pub fn digest(&self) -> String {
        let hash = match self {
            Payload::Text(text) => Sha256::digest(text.as_bytes()),
            Payload::Bytes(bytes) => Sha256::digest(bytes),
        };
        let mut out = String::with_capacity(64);
        for byte in hash {
            out.push_str(&format!("{:02x}", byte));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_accessors() {
        let text = Payload::Text("abc".to_string());
        assert_eq!(text.kind(), "text");
        assert_eq!(text.as_text(), Some("abc"));
        assert_eq!(text.as_bytes(), None);
        assert_eq!(text.len(), 3);
        assert!(!text.is_empty());

        let bytes = Payload::Bytes(vec![0x01, 0x02]);
        assert_eq!(bytes.kind(), "bytes");
        assert_eq!(bytes.as_text(), None);
        assert_eq!(bytes.as_bytes(), Some(&[0x01u8, 0x02][..]));
        assert_eq!(bytes.len(), 2);

        assert!(Payload::Text(String::new()).is_empty());
    }

    #[test]
    fn test_digest_known_vector() {
        // SHA-256 of the empty string.
        let digest = Payload::Text(String::new()).digest();
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_shape() {
        let digest = Payload::Bytes(vec![1, 2, 3]).digest();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_deterministic_and_distinct() {
        let a = Payload::Text("hello".to_string());
        let b = Payload::Text("hello".to_string());
        let c = Payload::Text("hello!".to_string());
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
    }
}
