//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendSms, TrackSms};
pub use response::{
    SendResultItem, SendSmsResponse, TrackResultData, TrackSmsResponse, VendorResponse,
};
pub use validation::ValidationError;
pub use value::{ApiKey, ApiSecret, Contact, MessageText, TrackId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_sms_new_passes_input_through_unchecked() {
        let request = SendSms::new(Vec::new(), "");
        assert!(request.contacts().is_empty());
        assert_eq!(request.text(), "");

        let long = "x".repeat(MessageText::MAX_CHARS + 10);
        let request = SendSms::new(vec![Contact::new("017")], long.clone());
        assert_eq!(request.text(), long);
    }

    #[test]
    fn send_sms_validated_requires_contacts() {
        let text = MessageText::new("hi").unwrap();
        let err = SendSms::validated(Vec::new(), text.clone()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: Contact::FIELD
            }
        );

        let request = SendSms::validated(vec![Contact::new("01712345678")], text).unwrap();
        assert_eq!(request.contacts(), &[Contact::new("01712345678")]);
        assert_eq!(request.text(), "hi");
    }

    #[test]
    fn track_sms_from_track_id_uses_trimmed_value() {
        let request: TrackSms = TrackId::new(" T1 ").unwrap().into();
        assert_eq!(request.track_id(), "T1");
    }

    #[test]
    fn track_result_masking_flag_is_one_only() {
        let mut data = TrackResultData::default();
        assert!(!data.is_masked());
        data.is_masking = Some(0);
        assert!(!data.is_masked());
        data.is_masking = Some(1);
        assert!(data.is_masked());
        data.is_masking = Some(2);
        assert!(!data.is_masked());
    }

    #[test]
    fn vendor_response_success_requires_explicit_true() {
        let mut response = SendSmsResponse {
            success: None,
            message: None,
            data: None,
            raw: serde_json::Value::Null,
        };
        assert!(!response.is_success());
        response.success = Some(false);
        assert!(!response.is_success());
        response.success = Some(true);
        assert!(response.is_success());
    }
}
