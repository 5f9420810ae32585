/// Decoded vendor reply to a request that reached the vendor and came back as JSON.
///
/// `success` and `message` are surfaced exactly as the vendor sent them; the
/// client never reinterprets them. `data` holds a typed view of the `data`
/// field when it has the expected shape, and `raw` always keeps the full body.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorResponse<T> {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub data: Option<T>,
    pub raw: serde_json::Value,
}

impl<T> VendorResponse<T> {
    /// `true` only when the vendor explicitly reported `"success": true`.
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

pub type SendSmsResponse = VendorResponse<Vec<SendResultItem>>;

pub type TrackSmsResponse = VendorResponse<TrackResultData>;

/// Per-contact entry of a send reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendResultItem {
    pub contact: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub track_id: Option<String>,
}

/// Delivery details returned by a track query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackResultData {
    pub track_id: Option<String>,
    pub contact: Option<String>,
    pub sender: Option<String>,
    pub text: Option<String>,
    pub cost: Option<String>,
    /// `1` means the message went out with a masked sender name.
    pub is_masking: Option<i64>,
    pub status: Option<String>,
}

impl TrackResultData {
    pub fn is_masked(&self) -> bool {
        self.is_masking == Some(1)
    }
}
