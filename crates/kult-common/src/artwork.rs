//! Artwork kinds and rating rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest accepted rating.
pub const RATING_MIN: i16 = 1;

/// Highest accepted rating.
pub const RATING_MAX: i16 = 5;

/// Kind of work an artwork entry refers to.
///
/// Stored and transmitted as its lowercase name (`"book"`, `"movie"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkKind {
    Book,
    Movie,
    Music,
    Artwork,
    Other,
}

impl ArtworkKind {
    /// Every kind, in display order.
    pub const ALL: [ArtworkKind; 5] = [
        ArtworkKind::Book,
        ArtworkKind::Movie,
        ArtworkKind::Music,
        ArtworkKind::Artwork,
        ArtworkKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkKind::Book => "book",
            ArtworkKind::Movie => "movie",
            ArtworkKind::Music => "music",
            ArtworkKind::Artwork => "artwork",
            ArtworkKind::Other => "other",
        }
    }
}

impl fmt::Display for ArtworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown artwork kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid artwork type: {0} (expected one of book, movie, music, artwork, other)")]
pub struct KindError(pub String);

impl FromStr for ArtworkKind {
    type Err = KindError;

    /// Kinds match exactly; `"Book"` is not a kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtworkKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| KindError(s.to_string()))
    }
}

/// Rating outside `RATING_MIN..=RATING_MAX`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingError(pub i64);

/// Normalize an optional rating.
///
/// `None` and `0` both mean "not rated". Anything else must fall within
/// `RATING_MIN..=RATING_MAX`.
pub fn normalize_rating(rating: Option<i64>) -> Result<Option<i16>, RatingError> {
    match rating {
        None | Some(0) => Ok(None),
        Some(r) if (i64::from(RATING_MIN)..=i64::from(RATING_MAX)).contains(&r) => {
            Ok(Some(r as i16))
        }
        Some(r) => Err(RatingError(r)),
    }
}
