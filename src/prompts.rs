//! The fixed roast catalog: five styles, each with its own prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown roast style {0:?}")]
pub struct UnknownStyle(pub String);

/// The five roast categories offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastStyle {
    Hair,
    Style,
    Expression,
    General,
    Compliment,
}

pub const ALL_STYLES: [RoastStyle; 5] = [
    RoastStyle::Hair,
    RoastStyle::Style,
    RoastStyle::Expression,
    RoastStyle::General,
    RoastStyle::Compliment,
];

impl RoastStyle {
    /// Wire slug used by the upload form and the JSON response.
    pub fn slug(self) -> &'static str {
        match self {
            RoastStyle::Hair => "hair",
            RoastStyle::Style => "style",
            RoastStyle::Expression => "expression",
            RoastStyle::General => "general",
            RoastStyle::Compliment => "compliment",
        }
    }

    /// Label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            RoastStyle::Hair => "Cheveux",
            RoastStyle::Style => "Style vestimentaire",
            RoastStyle::Expression => "Expression faciale",
            RoastStyle::General => "Général",
            RoastStyle::Compliment => "Compliment",
        }
    }
}

impl fmt::Display for RoastStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for RoastStyle {
    type Err = UnknownStyle;

    /// Accepts the wire slugs plus the selector values of the original app
    /// (`cheveux`, `général`). Anything else is an error, never a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hair" | "cheveux" => Ok(RoastStyle::Hair),
            "style" => Ok(RoastStyle::Style),
            "expression" => Ok(RoastStyle::Expression),
            "general" | "général" => Ok(RoastStyle::General),
            "compliment" => Ok(RoastStyle::Compliment),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

/// Looks up the prompt sent alongside the image for `style`.
///
/// The catalog is a process-wide constant; the exhaustive match guarantees
/// every style has an entry.
pub fn prompt_for(style: RoastStyle) -> &'static str {
    match style {
        RoastStyle::Hair => {
            "Ici tu as l'image d'un ami, fais une blague sur sa coupe de cheveux. \
             Essaie d'être piquant et drôle."
        }
        RoastStyle::Style => {
            "Ici tu as l'image d'un ami, fais une blague sur son style vestimentaire. \
             Sois créatif et humoristique."
        }
        RoastStyle::Expression => {
            "Ici tu as l'image d'un ami, fais une blague sur son expression faciale. \
             Sois drôle mais pas méchant."
        }
        RoastStyle::General => {
            "Ici tu as l'image d'un ami, fais un roast général mais amical. \
             Sois drôle et créatif."
        }
        RoastStyle::Compliment => {
            "Ici tu as l'image d'un ami, fais-lui un compliment original et drôle. \
             Sois positif mais avec de l'humour."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_style_has_a_distinct_non_empty_prompt() {
        let prompts: HashSet<&str> = ALL_STYLES.iter().map(|&s| prompt_for(s)).collect();
        assert_eq!(prompts.len(), ALL_STYLES.len());
        assert!(prompts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn slugs_parse_back_to_their_style() {
        for style in ALL_STYLES {
            assert_eq!(style.slug().parse::<RoastStyle>().unwrap(), style);
        }
    }

    #[test]
    fn original_selector_values_are_accepted() {
        assert_eq!("cheveux".parse::<RoastStyle>().unwrap(), RoastStyle::Hair);
        assert_eq!("général".parse::<RoastStyle>().unwrap(), RoastStyle::General);
    }

    #[test]
    fn parsing_trims_and_ignores_case() {
        assert_eq!(" Hair ".parse::<RoastStyle>().unwrap(), RoastStyle::Hair);
        assert_eq!("COMPLIMENT".parse::<RoastStyle>().unwrap(), RoastStyle::Compliment);
    }

    #[test]
    fn undefined_styles_are_rejected() {
        let err = "beard".parse::<RoastStyle>().unwrap_err();
        assert_eq!(err, UnknownStyle("beard".to_string()));
    }

    #[test]
    fn serde_uses_the_wire_slug() {
        let json = serde_json::to_string(&RoastStyle::Compliment).unwrap();
        assert_eq!(json, "\"compliment\"");
        let back: RoastStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoastStyle::Compliment);
    }
}
