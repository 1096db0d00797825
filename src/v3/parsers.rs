/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::Privacy;
use serde::Deserialize;
use std::str::FromStr;

// Parses album privacy, unknown or missing values become Privacy::Unknown
pub fn from_privacy<'de, D>(deserializer: D) -> Result<Option<Privacy>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.map(|s| Privacy::from_str(&s).unwrap_or(Privacy::Unknown)))
}

// Parses strings that may be null or "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

// Parses numbers the API sometimes sends as null
pub fn from_null_to_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let n: Option<u64> = Deserialize::deserialize(deserializer)?;
    Ok(n.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "from_privacy")]
        privacy: Option<Privacy>,
        #[serde(default, deserialize_with = "from_empty_str_to_none")]
        section: Option<String>,
        #[serde(default, deserialize_with = "from_null_to_zero")]
        views: u64,
    }

    #[test]
    fn lenient_fields() {
        let p: Lenient =
            serde_json::from_str(r#"{"privacy":"hidden","section":"","views":null}"#).unwrap();
        assert_eq!(p.privacy, Some(Privacy::Hidden));
        assert_eq!(p.section, None);
        assert_eq!(p.views, 0);

        let p: Lenient = serde_json::from_str(r#"{"privacy":"members","section":"pics"}"#).unwrap();
        assert_eq!(p.privacy, Some(Privacy::Unknown));
        assert_eq!(p.section.as_deref(), Some("pics"));

        let p: Lenient = serde_json::from_str("{}").unwrap();
        assert_eq!(p.privacy, None);
    }
}
