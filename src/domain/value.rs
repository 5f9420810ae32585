use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Vendor application key (`x-app-key`).
///
/// Accepted verbatim: empty or placeholder values are passed through and left
/// for the vendor to reject. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by the vendor (`x-app-key`).
    pub const HEADER: &'static str = "x-app-key";

    /// Placeholder value shipped in sample configuration.
    pub const PLACEHOLDER: &'static str = "YOUR_X_APP_KEY_HERE";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty or still the sample placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0.trim().is_empty() || self.0 == Self::PLACEHOLDER
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Vendor application secret (`x-app-secret`).
///
/// Same pass-through rules as [`ApiKey`]. `Debug` output is redacted.
pub struct ApiSecret(String);

impl ApiSecret {
    /// Header name used by the vendor (`x-app-secret`).
    pub const HEADER: &'static str = "x-app-secret";

    /// Placeholder value shipped in sample configuration.
    pub const PLACEHOLDER: &'static str = "YOUR_X_APP_SECRET_HERE";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the secret is empty or still the sample placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0.trim().is_empty() || self.0 == Self::PLACEHOLDER
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number (`contacts[]`).
///
/// Not validated or normalized: whatever the caller supplies is sent as-is.
pub struct Contact(String);

impl Contact {
    /// JSON field name used by the vendor (`contacts`).
    pub const FIELD: &'static str = "contacts";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a comma-separated list, trimming entries and dropping empty ones.
    ///
    /// Returns [`ValidationError::Empty`] when nothing is left.
    pub fn parse_list(input: &str) -> Result<Vec<Self>, ValidationError> {
        let contacts = input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Self::new)
            .collect::<Vec<_>>();
        if contacts.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(contacts)
    }
}

impl From<&str> for Contact {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Contact {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: 1 to [`MessageText::MAX_CHARS`] characters. The value is kept
/// exactly as provided, whitespace included.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the vendor (`text`).
    pub const FIELD: &'static str = "text";

    /// Longest text the vendor accepts in a single send.
    pub const MAX_CHARS: usize = 390;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = value.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Vendor tracking identifier (`track_id`) returned by a send.
///
/// Invariant: non-empty after trimming.
pub struct TrackId(String);

impl TrackId {
    /// JSON field name used by the vendor (`track_id`).
    pub const FIELD: &'static str = "track_id";

    /// Create a validated [`TrackId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_accept_any_value_and_flag_placeholders() {
        let key = ApiKey::new("");
        assert_eq!(key.as_str(), "");
        assert!(key.is_placeholder());
        assert!(ApiKey::new(ApiKey::PLACEHOLDER).is_placeholder());
        assert!(!ApiKey::new("real-key").is_placeholder());

        let secret = ApiSecret::new(" s3cret ");
        assert_eq!(secret.as_str(), " s3cret ");
        assert!(!secret.is_placeholder());
        assert!(ApiSecret::new(ApiSecret::PLACEHOLDER).is_placeholder());
    }

    #[test]
    fn credential_debug_is_redacted() {
        let key = ApiKey::new("real-key");
        let secret = ApiSecret::new("real-secret");
        assert!(!format!("{key:?}").contains("real-key"));
        assert!(!format!("{secret:?}").contains("real-secret"));
    }

    #[test]
    fn contact_list_trims_and_drops_empty_entries() {
        let contacts = Contact::parse_list(" 01712345678, ,01898765432 ,").unwrap();
        assert_eq!(
            contacts,
            vec![Contact::new("01712345678"), Contact::new("01898765432")]
        );

        assert_eq!(
            Contact::parse_list(" , ,"),
            Err(ValidationError::Empty {
                field: Contact::FIELD
            })
        );
    }

    #[test]
    fn contact_is_not_normalized() {
        assert_eq!(Contact::new(" +880 17 ").as_str(), " +880 17 ");
    }

    #[test]
    fn message_text_enforces_length_in_chars() {
        assert!(MessageText::new("").is_err());
        assert_eq!(MessageText::new("  ").unwrap().as_str(), "  ");

        let max = "a".repeat(MessageText::MAX_CHARS);
        assert!(MessageText::new(max).is_ok());

        let too_long = "a".repeat(MessageText::MAX_CHARS + 1);
        assert_eq!(
            MessageText::new(too_long),
            Err(ValidationError::TooLong {
                field: MessageText::FIELD,
                max: MessageText::MAX_CHARS,
                actual: MessageText::MAX_CHARS + 1,
            })
        );

        // Multi-byte characters count once each.
        let bangla = "আ".repeat(MessageText::MAX_CHARS);
        assert!(MessageText::new(bangla).is_ok());
    }

    #[test]
    fn track_id_trims_and_rejects_blank() {
        assert_eq!(TrackId::new("  T1 ").unwrap().as_str(), "T1");
        assert!(TrackId::new("   ").is_err());
    }
}
