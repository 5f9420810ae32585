use crate::domain::validation::ValidationError;
use crate::domain::value::{Contact, MessageText, TrackId};

/// Send one text to a list of contacts.
///
/// Masking is always off for this client; there is no way to turn it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    contacts: Vec<Contact>,
    text: String,
}

impl SendSms {
    /// Build a request without any checks. Contacts and text go out verbatim.
    pub fn new(contacts: Vec<Contact>, text: impl Into<String>) -> Self {
        Self {
            contacts,
            text: text.into(),
        }
    }

    /// Build a request from already-validated text, rejecting an empty contact list.
    pub fn validated(contacts: Vec<Contact>, text: MessageText) -> Result<Self, ValidationError> {
        if contacts.is_empty() {
            return Err(ValidationError::Empty {
                field: Contact::FIELD,
            });
        }
        Ok(Self::new(contacts, text.into_inner()))
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Query delivery status for a previously sent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSms {
    track_id: String,
}

impl TrackSms {
    /// Build a request without any checks.
    pub fn new(track_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
        }
    }

    pub fn track_id(&self) -> &str {
        &self.track_id
    }
}

impl From<TrackId> for TrackSms {
    fn from(value: TrackId) -> Self {
        Self::new(value.as_str())
    }
}
