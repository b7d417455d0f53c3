//! Identity of a persisted schema.
//!
//! A fingerprint is the blake3 digest of a schema's canonical compact JSON
//! (produced by `coltype-json`). Two trees that encode to the same text share a
//! fingerprint, so catalogs can detect schema drift without decoding.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Digest of already-canonical JSON text. Callers must not pretty-print
    /// or reorder keys first.
    pub fn of_canonical_json(text: &str) -> Self {
        Self(*blake3::hash(text.as_bytes()).as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }

    /// First 12 hex digits, for log lines and terminal output.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(12);
        hex
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parses the 64-digit hex form written by `Display`.
impl FromStr for Fingerprint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        blake3::Hash::from_hex(s.trim())
            .map(|h| Self(*h.as_bytes()))
            .map_err(|_| Error::InvalidFingerprint(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_same_fingerprint() {
        let a = Fingerprint::of_canonical_json(r#"{"type":"struct","fields":[]}"#);
        let b = Fingerprint::of_canonical_json(r#"{"type":"struct","fields":[]}"#);
        assert_eq!(a, b);
        assert_ne!(a, Fingerprint::of_canonical_json(r#"{"fields":[],"type":"struct"}"#));
    }

    #[test]
    fn hex_form_parses_back() {
        let fp = Fingerprint::of_canonical_json("\"integer\"");
        let hex = fp.to_string();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex.parse::<Fingerprint>().unwrap(), fp);
        assert!(hex.starts_with(&fp.short()));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(matches!(
            "abc".parse::<Fingerprint>(),
            Err(Error::InvalidFingerprint(_))
        ));
    }
}
