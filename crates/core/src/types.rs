//! Core types used throughout Logo Forge
//!
//! The request/response contract with the generation endpoint lives here,
//! together with the value types the form edits.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{ForgeError, ForgeResult};

// ============================================================================
// Logo Style
// ============================================================================

/// Visual style requested from the generation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogoStyle {
    #[default]
    Minimalist,
    Vintage,
    Modern,
    HandDrawn,
}

impl LogoStyle {
    /// Wire value sent in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "minimalist",
            LogoStyle::Vintage => "vintage",
            LogoStyle::Modern => "modern",
            LogoStyle::HandDrawn => "hand-drawn",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Minimalist",
            LogoStyle::Vintage => "Vintage",
            LogoStyle::Modern => "Modern",
            LogoStyle::HandDrawn => "Hand Drawn",
        }
    }

    /// Get all styles, in selector order
    pub fn all() -> &'static [LogoStyle] {
        &[
            LogoStyle::Minimalist,
            LogoStyle::Vintage,
            LogoStyle::Modern,
            LogoStyle::HandDrawn,
        ]
    }
}

impl std::fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogoStyle {
    type Err = ForgeError;

    fn from_str(s: &str) -> ForgeResult<Self> {
        LogoStyle::all()
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ForgeError::UnknownStyle(s.to_string()))
    }
}

// ============================================================================
// Hex Color
// ============================================================================

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color regex is valid"));

/// Default primary color of a fresh form
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// A `#rrggbb` color string, kept exactly as entered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse and validate a hex color
    pub fn parse(value: impl Into<String>) -> ForgeResult<Self> {
        let value = value.into();
        if HEX_COLOR_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(ForgeError::InvalidColor(value))
        }
    }

    /// The color as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ForgeError;

    fn from_str(s: &str) -> ForgeResult<Self> {
        HexColor::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ForgeError;

    fn try_from(value: String) -> ForgeResult<Self> {
        HexColor::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /api/generate-logo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoRequest {
    pub prompt: String,
    pub color: HexColor,
    pub style: LogoStyle,
}

impl LogoRequest {
    /// Build a request, rejecting an empty prompt
    pub fn new(prompt: impl Into<String>, color: HexColor, style: LogoStyle) -> ForgeResult<Self> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Err(ForgeError::EmptyPrompt);
        }
        Ok(Self {
            prompt,
            color,
            style,
        })
    }
}

/// Successful response of the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_style_wire_values() {
        assert_eq!(
            serde_json::to_string(&LogoStyle::HandDrawn).unwrap(),
            "\"hand-drawn\""
        );
        assert_eq!(
            serde_json::to_string(&LogoStyle::Minimalist).unwrap(),
            "\"minimalist\""
        );
        for style in LogoStyle::all() {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
        }
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("vintage".parse::<LogoStyle>().unwrap(), LogoStyle::Vintage);
        assert_eq!("hand-drawn".parse::<LogoStyle>().unwrap(), LogoStyle::HandDrawn);
        assert!(matches!(
            "Hand Drawn".parse::<LogoStyle>(),
            Err(ForgeError::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_style_defaults_and_labels() {
        assert_eq!(LogoStyle::default(), LogoStyle::Minimalist);
        assert_eq!(LogoStyle::HandDrawn.display_name(), "Hand Drawn");
        assert_eq!(LogoStyle::all().len(), 4);
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(HexColor::parse("#3B82F6").is_ok());
        assert!(HexColor::parse("#a1b2c3").is_ok());
        assert!(HexColor::parse("3B82F6").is_err());
        assert!(HexColor::parse("#3B82F").is_err());
        assert!(HexColor::parse("#GGGGGG").is_err());
        assert!(HexColor::parse("blue").is_err());
    }

    #[test]
    fn test_hex_color_kept_verbatim() {
        let color = HexColor::parse("#ff00AA").unwrap();
        assert_eq!(color.as_str(), "#ff00AA");
        assert_eq!(HexColor::default().as_str(), DEFAULT_COLOR);
    }

    #[test]
    fn test_hex_color_rejected_on_deserialize() {
        let result: Result<HexColor, _> = serde_json::from_str("\"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_request_body_has_exact_fields() {
        let request = LogoRequest::new(
            "A coffee shop called Brew Haven",
            HexColor::parse("#112233").unwrap(),
            LogoStyle::HandDrawn,
        )
        .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "prompt": "A coffee shop called Brew Haven",
                "color": "#112233",
                "style": "hand-drawn",
            })
        );
    }

    #[test]
    fn test_request_requires_prompt() {
        assert!(matches!(
            LogoRequest::new("", HexColor::default(), LogoStyle::Modern),
            Err(ForgeError::EmptyPrompt)
        ));
    }

    #[test]
    fn test_request_accepts_whitespace_prompt() {
        let request =
            LogoRequest::new("   ", HexColor::default(), LogoStyle::Minimalist).unwrap();
        assert_eq!(request.prompt, "   ");
    }

    #[test]
    fn test_response_uses_camel_case_field() {
        let response: LogoResponse =
            serde_json::from_str(r#"{"imageUrl": "https://example.com/a.png"}"#).unwrap();
        assert_eq!(response.image_url, "https://example.com/a.png");

        let missing: Result<LogoResponse, _> =
            serde_json::from_str(r#"{"image_url": "https://example.com/a.png"}"#);
        assert!(missing.is_err());
    }
}
