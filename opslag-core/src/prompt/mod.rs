//! Prompt construction for style-imitating post generation.
//!
//! The instruction template is fixed product text (Danish, like the rest of
//! the user-facing vocabulary). Building is pure string composition: no
//! timestamps, no randomness, and no sanitization beyond the quoting the
//! template itself provides, so identical inputs always render the same
//! prompt.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Target platform for the generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Instagram,
    LinkedIn,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
        }
    }
}

/// Target length category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Length {
    Kort,
    Mellem,
    Lang,
}

impl Length {
    pub fn label(&self) -> &'static str {
        match self {
            Length::Kort => "Kort",
            Length::Mellem => "Mellem",
            Length::Lang => "Lang",
        }
    }

    /// Lower-cased form for natural-language insertion ("et kort opslag").
    pub fn label_lowercase(&self) -> String {
        self.label().to_lowercase()
    }
}

/// Tone labels the user can combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "Seriøs")]
    Serioes,
    Optimistisk,
    Bekymret,
    Inspirerende,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Serioes => "Seriøs",
            Tone::Optimistisk => "Optimistisk",
            Tone::Bekymret => "Bekymret",
            Tone::Inspirerende => "Inspirerende",
        }
    }
}

/// User-chosen style parameters for one generation request.
///
/// Tones are a set: duplicates collapse and selection order is irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub platform: Platform,
    pub length: Length,
    pub tones: BTreeSet<Tone>,
    pub topic: String,
}

impl GenerationParameters {
    fn joined_tones(&self) -> String {
        self.tones
            .iter()
            .map(Tone::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render the generation instruction from the selected historical text and
/// the user's parameters.
///
/// `historical_text` is the newline-joined non-empty cells of the selected
/// column, produced by [`crate::dataset::ParsedTable::column_text`].
pub fn build_prompt(historical_text: &str, params: &GenerationParameters) -> String {
    format!(
        "\nDu er en social media-skribent. Brug brugerens tidligere opslag (nedenfor) til at efterligne deres stil.\nGenerer et {} opslag til {}, med følgende tone: {}.\nDet skal handle om: \"{}\"\n\nTidligere opslag:\n{}\n",
        params.length.label_lowercase(),
        params.platform.label(),
        params.joined_tones(),
        params.topic,
        historical_text,
    )
}
