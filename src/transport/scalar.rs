use serde::Deserialize;
use serde::de::Error as DeError;

/// Text-like value the vendor may send as either a JSON string or a JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`0.50` remains `"0.50"` instead of becoming `"0.5"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportText(String);

impl TransportText {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected text field to be JSON string or number",
            )),
        }
    }
}

/// 0/1 flag the vendor may also send as a JSON boolean or a float such as `1.0`.
///
/// Strings are not flags: `"1"` does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportFlag {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl TransportFlag {
    /// `None` for floats with a fractional part.
    pub fn into_i64(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
            Self::Float(_) => None,
            Self::Bool(value) => Some(i64::from(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_keeps_strings_and_raw_number_tokens() {
        let text: TransportText = serde_json::from_str(r#""T1""#).unwrap();
        assert_eq!(text.into_string(), "T1");

        let text: TransportText = serde_json::from_str("0.50").unwrap();
        assert_eq!(text.into_string(), "0.50");

        let text: TransportText = serde_json::from_str("-12").unwrap();
        assert_eq!(text.into_string(), "-12");

        assert!(serde_json::from_str::<TransportText>("true").is_err());
        assert!(serde_json::from_str::<TransportText>("{}").is_err());
    }

    #[test]
    fn flag_accepts_integers_whole_floats_and_booleans() {
        let flag: TransportFlag = serde_json::from_str("1").unwrap();
        assert_eq!(flag.into_i64(), Some(1));

        let flag: TransportFlag = serde_json::from_str("1.0").unwrap();
        assert_eq!(flag.into_i64(), Some(1));

        let flag: TransportFlag = serde_json::from_str("0.5").unwrap();
        assert_eq!(flag.into_i64(), None);

        let flag: TransportFlag = serde_json::from_str("true").unwrap();
        assert_eq!(flag.into_i64(), Some(1));

        let flag: TransportFlag = serde_json::from_str("false").unwrap();
        assert_eq!(flag.into_i64(), Some(0));

        assert!(serde_json::from_str::<TransportFlag>(r#""1""#).is_err());
    }
}
