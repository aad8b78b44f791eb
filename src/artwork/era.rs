use serde::{Deserialize, Serialize};

/// A coarse historical period bucket mapped to a fixed year range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Renaissance,
    Baroque,
    Romanticism,
    Impressionism,
    Modern,
    Contemporary,
    All,
}

/// Closed year range covered by an era.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl Era {
    /// All concrete eras, in chronological order. Excludes `All`.
    pub const CONCRETE: [Era; 6] = [
        Era::Renaissance,
        Era::Baroque,
        Era::Romanticism,
        Era::Impressionism,
        Era::Modern,
        Era::Contemporary,
    ];

    pub fn years(&self) -> YearRange {
        let (start, end) = match self {
            Era::Renaissance => (1400, 1600),
            Era::Baroque => (1600, 1750),
            Era::Romanticism => (1800, 1850),
            Era::Impressionism => (1860, 1900),
            Era::Modern => (1900, 1950),
            Era::Contemporary => (1950, 2024),
            Era::All => (1400, 2024),
        };
        YearRange { start, end }
    }

    /// Parses a query-string value. Unrecognized values map to `All`,
    /// which spans the full year range and matches every artwork.
    pub fn from_query(value: &str) -> Era {
        match value.to_ascii_lowercase().as_str() {
            "renaissance" => Era::Renaissance,
            "baroque" => Era::Baroque,
            "romanticism" => Era::Romanticism,
            "impressionism" => Era::Impressionism,
            "modern" => Era::Modern,
            "contemporary" => Era::Contemporary,
            _ => Era::All,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Era::Renaissance => "renaissance",
            Era::Baroque => "baroque",
            Era::Romanticism => "romanticism",
            Era::Impressionism => "impressionism",
            Era::Modern => "modern",
            Era::Contemporary => "contemporary",
            Era::All => "all",
        }
    }

    /// Whether an artwork tagged with `tag` belongs to this era.
    /// `All` matches any artwork regardless of its own tag.
    pub fn matches(&self, tag: Option<Era>) -> bool {
        *self == Era::All || tag == Some(*self)
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_year_ranges_are_fixed() {
        let cases = [
            (Era::Renaissance, 1400, 1600),
            (Era::Baroque, 1600, 1750),
            (Era::Romanticism, 1800, 1850),
            (Era::Impressionism, 1860, 1900),
            (Era::Modern, 1900, 1950),
            (Era::Contemporary, 1950, 2024),
            (Era::All, 1400, 2024),
        ];
        for (era, start, end) in cases {
            assert_eq!(era.years(), YearRange { start, end });
        }
    }

    #[test]
    fn unrecognized_era_maps_to_all() {
        assert_eq!(Era::from_query("rococo"), Era::All);
        assert_eq!(Era::from_query(""), Era::All);
        assert_eq!(Era::All.years(), YearRange { start: 1400, end: 2024 });
    }

    #[test]
    fn from_query_is_case_insensitive() {
        assert_eq!(Era::from_query("Baroque"), Era::Baroque);
        assert_eq!(Era::from_query("IMPRESSIONISM"), Era::Impressionism);
    }

    #[test]
    fn all_matches_any_tag() {
        assert!(Era::All.matches(Some(Era::Baroque)));
        assert!(Era::All.matches(None));
        assert!(Era::Baroque.matches(Some(Era::Baroque)));
        assert!(!Era::Baroque.matches(Some(Era::Modern)));
        assert!(!Era::Baroque.matches(None));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Era::Renaissance).unwrap(), "\"renaissance\"");
        let parsed: Era = serde_json::from_str("\"contemporary\"").unwrap();
        assert_eq!(parsed, Era::Contemporary);
    }
}
