//! Display locales offered by the UI. `en-US` is the fallback.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PhenorankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Locale {
    /// en-US first, then alphabetical.
    pub const ALL: [Locale; 10] = [
        Locale::EnUs,
        Locale::De,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Ja,
        Locale::Ko,
        Locale::PtBr,
        Locale::ZhCn,
        Locale::ZhTw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::PtBr => "pt-BR",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
        }
    }

    /// Lenient parse: unknown tags resolve to the fallback locale.
    pub fn resolve(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = PhenorankError;

    /// Tags compare case-insensitively and accept `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Locale::ALL
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| PhenorankError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("ZH-tw".parse::<Locale>().unwrap(), Locale::ZhTw);
    }

    #[test]
    fn test_unknown_tag_is_error_but_resolves_to_fallback() {
        assert!(matches!(
            "nl".parse::<Locale>(),
            Err(PhenorankError::UnknownLocale(_))
        ));
        assert_eq!(Locale::resolve("nl"), Locale::EnUs);
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Locale::ZhCn).unwrap(), "\"zh-CN\"");
        let l: Locale = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(l, Locale::Ja);
    }
}
