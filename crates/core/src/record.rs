use serde::{Deserialize, Serialize};

/// Literal the source dataset uses for a winning row.
pub const WINNER_YES: &str = "yes";

/// One row of the awards dataset.
///
/// Immutable once loaded; `id` is the 1-based row number assigned by the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub id: u32,
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: bool,
}

impl AwardRecord {
    /// Build a record without a table id (assigned later by `AwardTable`).
    pub fn new(
        year: i32,
        title: impl Into<String>,
        studios: impl Into<String>,
        producers: impl Into<String>,
        winner: bool,
    ) -> Self {
        Self {
            id: 0,
            year,
            title: title.into(),
            studios: studios.into(),
            producers: producers.into(),
            winner,
        }
    }
}

/// Normalize a raw `winner` cell: only the affirmative literal counts as a win.
/// Missing, empty, `no`, and anything unrecognized are all `false`.
pub fn parse_winner(raw: Option<&str>) -> bool {
    matches!(raw, Some(WINNER_YES))
}
