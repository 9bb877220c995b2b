//! # Sentiment Labels
//!
//! Maps an average sentiment score onto one of four headline labels, and
//! holds the five-band score guide shown under the headline.
//!
//! Thresholds are checked in this order:
//!
//! ```text
//! value >  0.5          → Very Positive
//! 0 < value <= 0.5      → Somewhat Positive
//! value < -0.5          → Very Negative
//! everything else       → Somewhat Negative   (includes exactly 0)
//! ```

/// Headline classification of an average sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    VeryPositive,
    SomewhatPositive,
    SomewhatNegative,
    VeryNegative,
}

impl SentimentLabel {
    /// Total over all `f64`, NaN included (lands in `SomewhatNegative`).
    pub fn classify(value: f64) -> Self {
        if value > 0.0 {
            if value > 0.5 {
                SentimentLabel::VeryPositive
            } else {
                SentimentLabel::SomewhatPositive
            }
        } else if value < -0.5 {
            SentimentLabel::VeryNegative
        } else {
            SentimentLabel::SomewhatNegative
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "Very Positive",
            SentimentLabel::SomewhatPositive => "Somewhat Positive",
            SentimentLabel::SomewhatNegative => "Somewhat Negative",
            SentimentLabel::VeryNegative => "Very Negative",
        }
    }

    /// Guide band with the same name, used for colouring the headline.
    pub fn band(self) -> Band {
        match self {
            SentimentLabel::VeryPositive => Band::VeryPositive,
            SentimentLabel::SomewhatPositive => Band::SomewhatPositive,
            SentimentLabel::SomewhatNegative => Band::SomewhatNegative,
            SentimentLabel::VeryNegative => Band::VeryNegative,
        }
    }
}

/// One row of the score guide. `Neutral` only exists in the guide; the
/// headline never classifies as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    VeryNegative,
    SomewhatNegative,
    Neutral,
    SomewhatPositive,
    VeryPositive,
}

pub struct GuideEntry {
    pub band: Band,
    pub title: &'static str,
    pub range: &'static str,
    pub description: &'static str,
}

/// Score guide, most negative first.
pub const SCORE_GUIDE: [GuideEntry; 5] = [
    GuideEntry {
        band: Band::VeryNegative,
        title: "Very Negative",
        range: "-1.0 to -0.5",
        description: "Strongly negative sentiment, often expressing anger, frustration, or strong disagreement",
    },
    GuideEntry {
        band: Band::SomewhatNegative,
        title: "Somewhat Negative",
        range: "-0.5 to 0",
        description: "Mildly negative sentiment, expressing concern, skepticism, or slight dissatisfaction",
    },
    GuideEntry {
        band: Band::Neutral,
        title: "Neutral",
        range: "0",
        description: "Balanced or factual statements without clear positive or negative sentiment",
    },
    GuideEntry {
        band: Band::SomewhatPositive,
        title: "Somewhat Positive",
        range: "0 to 0.5",
        description: "Mildly positive sentiment, expressing optimism, interest, or slight approval",
    },
    GuideEntry {
        band: Band::VeryPositive,
        title: "Very Positive",
        range: "0.5 to 1.0",
        description: "Strongly positive sentiment, expressing enthusiasm, strong approval, or excitement",
    },
];
