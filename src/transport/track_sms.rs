use serde_json::json;

use super::scalar::TransportFlag;
use super::{Fields, decode_envelope};
use crate::domain::{TrackResultData, TrackSms, TrackSmsResponse};

fn decode_track_result(data: &str) -> Option<TrackResultData> {
    let fields = Fields::parse(data)?;
    Some(TrackResultData {
        track_id: fields.text("track_id"),
        contact: fields.text("contact"),
        sender: fields.text("sender"),
        text: fields.text("text"),
        cost: fields.text("cost"),
        is_masking: fields
            .get::<TransportFlag>("is_masking")
            .and_then(TransportFlag::into_i64),
        status: fields.text("status"),
    })
}

pub fn encode_track_sms_json(request: &TrackSms) -> serde_json::Value {
    json!({ "track_id": request.track_id() })
}

pub fn decode_track_sms_json_response(json: &str) -> Result<TrackSmsResponse, serde_json::Error> {
    decode_envelope(json, decode_track_result)
}
