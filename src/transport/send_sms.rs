use serde_json::json;
use serde_json::value::RawValue;

use super::{Fields, decode_envelope};
use crate::domain::{Contact, SendResultItem, SendSms, SendSmsResponse};

/// Each array entry is decoded on its own, so one odd entry keeps its slot
/// (with the unreadable fields unset) instead of hiding the rest.
fn decode_send_results(data: &str) -> Option<Vec<SendResultItem>> {
    let items: Vec<Box<RawValue>> = serde_json::from_str(data).ok()?;
    let items = items
        .iter()
        .map(|item| {
            Fields::parse(item.get())
                .map(|fields| SendResultItem {
                    contact: fields.text("contact"),
                    status: fields.text("status"),
                    message: fields.text("message"),
                    track_id: fields.text("track_id"),
                })
                .unwrap_or_default()
        })
        .collect();
    Some(items)
}

/// Build the `send-sms` JSON body. Masking is always disabled.
pub fn encode_send_sms_json(request: &SendSms) -> serde_json::Value {
    let contacts = request
        .contacts()
        .iter()
        .map(Contact::as_str)
        .collect::<Vec<_>>();

    json!({
        "contacts": contacts,
        "text": request.text(),
        "is_masking": false,
        "masking_name": null,
    })
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, serde_json::Error> {
    decode_envelope(json, decode_send_results)
}
