use std::fmt;

/// CEFR proficiency level, plus the two resolution sentinels.
///
/// Declaration order doubles as the output sort order: defined levels
/// ascend from A1 to C2, then Undefined, then Unfound. This matches the
/// lexicographic order of the rendered names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    /// The page exists but carries no level marker
    Undefined,
    /// No usable entry: fetch failure, empty page, or a rejected suggestion
    Unfound,
}

impl Level {
    /// Parse a level marker as it appears on a page
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A1" => Some(Level::A1),
            "A2" => Some(Level::A2),
            "B1" => Some(Level::B1),
            "B2" => Some(Level::B2),
            "C1" => Some(Level::C1),
            "C2" => Some(Level::C2),
            "UNDEFINED" => Some(Level::Undefined),
            "UNFOUND" => Some(Level::Unfound),
            _ => None,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
            Level::Undefined => "UNDEFINED",
            Level::Unfound => "UNFOUND",
        }
    }

    /// Get level description
    pub fn description(&self) -> &'static str {
        match self {
            Level::A1 => "A1 (Beginner)",
            Level::A2 => "A2 (Elementary)",
            Level::B1 => "B1 (Intermediate)",
            Level::B2 => "B2 (Upper Intermediate)",
            Level::C1 => "C1 (Advanced)",
            Level::C2 => "C2 (Proficient)",
            Level::Undefined => "UNDEFINED (no level marker on the page)",
            Level::Unfound => "UNFOUND (no dictionary entry)",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
