//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod scalar;
mod send_sms;
mod track_sms;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::domain::VendorResponse;

pub use send_sms::{decode_send_sms_json_response, encode_send_sms_json};
pub use track_sms::{decode_track_sms_json_response, encode_track_sms_json};

use scalar::TransportText;

/// Members of one JSON object, each kept as its raw token and decoded on demand.
///
/// A member with an unexpected shape only affects itself: [`Fields::get`]
/// returns `None` for it while the siblings still decode.
struct Fields(BTreeMap<String, Box<RawValue>>);

impl Fields {
    /// `None` when `json` is not an object.
    fn parse(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok().map(Self)
    }

    fn raw(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(|value| value.get())
            .filter(|token| *token != "null")
    }

    fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.raw(name).and_then(|token| serde_json::from_str(token).ok())
    }

    fn text(&self, name: &str) -> Option<String> {
        self.get::<TransportText>(name).map(TransportText::into_string)
    }
}

/// Decode the `{success, message, data}` envelope shared by every vendor reply.
///
/// Only a body that is not JSON at all is an error. Each envelope field is read
/// on its own, and any field with an unexpected shape is left as `None`.
/// `decode_data` receives the raw `data` token when it is present and not null.
fn decode_envelope<T>(
    json: &str,
    decode_data: impl FnOnce(&str) -> Option<T>,
) -> Result<VendorResponse<T>, serde_json::Error> {
    let raw: serde_json::Value = serde_json::from_str(json)?;

    let fields = Fields::parse(json);
    let fields = fields.as_ref();

    let success = fields.and_then(|it| it.get::<bool>("success"));
    let message = fields.and_then(|it| it.text("message"));
    let data = fields.and_then(|it| it.raw("data")).and_then(decode_data);

    Ok(VendorResponse {
        success,
        message,
        data,
        raw,
    })
}
