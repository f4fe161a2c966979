//! The Gemini API key and its shape check.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `AIza` followed by 20 to 100 characters of `[0-9A-Za-z_-]`.
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AIza[0-9A-Za-z_-]{20,100}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Please enter a valid Gemini API key (starts with AIza...)")]
    InvalidFormat,
}

/// An opaque API key. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Trim and validate a user-supplied key. No network check is made.
    pub fn parse(candidate: &str) -> Result<Self, CredentialError> {
        let trimmed = candidate.trim();
        if KEY_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(CredentialError::InvalidFormat)
        }
    }

    /// Wrap a value read back from storage. Only emptiness is checked;
    /// the shape was enforced when it was stored.
    pub fn from_stored(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_with_body(len: usize) -> String {
        format!("AIza{}", "a1B2_-".chars().cycle().take(len).collect::<String>())
    }

    #[test]
    fn accepts_body_lengths_at_bounds() {
        for len in [20, 21, 39, 100] {
            let key = key_with_body(len);
            let cred = Credential::parse(&key).unwrap();
            assert_eq!(cred.expose(), key);
        }
    }

    #[test]
    fn rejects_body_lengths_outside_bounds() {
        for len in [0, 19, 101] {
            assert_eq!(
                Credential::parse(&key_with_body(len)),
                Err(CredentialError::InvalidFormat)
            );
        }
    }

    #[test]
    fn trims_before_validation() {
        let key = key_with_body(35);
        let cred = Credential::parse(&format!("  {key}\n")).unwrap();
        assert_eq!(cred.expose(), key);
    }

    #[test]
    fn rejects_wrong_prefix() {
        let key = format!("AIzb{}", "x".repeat(30));
        assert!(Credential::parse(&key).is_err());
        let key = format!("aiza{}", "x".repeat(30));
        assert!(Credential::parse(&key).is_err());
    }

    #[test]
    fn rejects_disallowed_characters() {
        let key = format!("AIza{}.{}", "x".repeat(15), "y".repeat(10));
        assert!(Credential::parse(&key).is_err());
        let key = format!("AIza{} {}", "x".repeat(15), "y".repeat(10));
        assert!(Credential::parse(&key).is_err());
    }

    #[test]
    fn invalid_format_message() {
        assert_eq!(
            CredentialError::InvalidFormat.to_string(),
            "Please enter a valid Gemini API key (starts with AIza...)"
        );
    }

    #[test]
    fn debug_is_redacted() {
        let key = key_with_body(30);
        let cred = Credential::parse(&key).unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains(&key));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn from_stored_treats_blank_as_absent() {
        assert!(Credential::from_stored("").is_none());
        assert!(Credential::from_stored("   ").is_none());
        assert_eq!(
            Credential::from_stored(" AIzaStored ").unwrap().expose(),
            "AIzaStored"
        );
    }
}
