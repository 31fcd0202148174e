use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Overall GP score of a horse.
///
/// Storage distinguishes a record that never had the key from one where the
/// score was explicitly cleared, so both are kept apart here.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Score {
    /// The key is missing from the stored record
    #[default]
    Absent,
    /// Stored as `null`
    Null,
    Value(f64),
}

impl Score {
    pub fn is_absent(&self) -> bool {
        matches!(self, Score::Absent)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(*v),
            Score::Absent | Score::Null => None,
        }
    }

    /// Parse the text of the score field. Blank, non-numeric and non-finite input clears the
    /// score.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "" => Score::Null,
            text => text.parse::<f64>().map_or(Score::Null, Score::finite),
        }
    }

    /// JSON has no infinity or NaN, so those are never held as a value.
    fn finite(v: f64) -> Self {
        if v.is_finite() {
            Score::Value(v)
        } else {
            Score::Null
        }
    }
}

/// Formats the score the way it is searched and displayed; unset scores are empty.
impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{v}"),
            Score::Absent | Score::Null => Ok(()),
        }
    }
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Score::Value(v) => serializer.serialize_f64(*v),
            Score::Absent | Score::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_f64().map_or(Score::Null, Score::finite),
            // Hand-edited storage may hold the number as text
            Some(Value::String(text)) => Score::parse(&text),
            Some(_) | None => Score::Null,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Score::parse(""), Score::Null);
        assert_eq!(Score::parse("  "), Score::Null);
        assert_eq!(Score::parse("812.5"), Score::Value(812.5));
        assert_eq!(Score::parse("0"), Score::Value(0.0));
        assert_eq!(Score::parse("abc"), Score::Null);
    }

    #[test]
    fn test_parse_non_finite() {
        assert_eq!(Score::parse("inf"), Score::Null);
        assert_eq!(Score::parse("-infinity"), Score::Null);
        assert_eq!(Score::parse("1e999"), Score::Null);
        assert_eq!(Score::parse("NaN"), Score::Null);
        assert_eq!(Score::parse("1e300"), Score::Value(1e300));
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::Value(800.0).to_string(), "800");
        assert_eq!(Score::Value(812.5).to_string(), "812.5");
        assert_eq!(Score::Null.to_string(), "");
        assert_eq!(Score::Absent.to_string(), "");
    }

    #[test]
    fn test_text_in_storage() {
        let zero: Score = serde_json::from_str("\"0\"").unwrap();
        let blank: Score = serde_json::from_str("\"\"").unwrap();

        assert_eq!(zero, Score::Value(0.0));
        assert_eq!(blank, Score::Null);
    }
}
