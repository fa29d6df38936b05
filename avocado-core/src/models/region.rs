use std::fmt;

/// Market region a prediction is requested for.
///
/// The declaration order is the catalog order shown to the user; the first
/// entry is the default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Atlanta,
    BaltimoreWashington,
    SouthCarolina,
    SouthCentral,
    Southeast,
    Spokane,
    StLouis,
    Syracuse,
    Tampa,
    TotalUS,
    West,
    WestTexNewMexico,
}

impl Region {
    /// The region catalog, in display order.
    pub fn all() -> &'static [Region] {
        &[
            Region::Atlanta,
            Region::BaltimoreWashington,
            Region::SouthCarolina,
            Region::SouthCentral,
            Region::Southeast,
            Region::Spokane,
            Region::StLouis,
            Region::Syracuse,
            Region::Tampa,
            Region::TotalUS,
            Region::West,
            Region::WestTexNewMexico,
        ]
    }

    /// Region code sent to the prediction service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atlanta => "Atlanta",
            Self::BaltimoreWashington => "BaltimoreWashington",
            Self::SouthCarolina => "SouthCarolina",
            Self::SouthCentral => "SouthCentral",
            Self::Southeast => "Southeast",
            Self::Spokane => "Spokane",
            Self::StLouis => "StLouis",
            Self::Syracuse => "Syracuse",
            Self::Tampa => "Tampa",
            Self::TotalUS => "TotalUS",
            Self::West => "West",
            Self::WestTexNewMexico => "WestTexNewMexico",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Atlanta => "Atlanta",
            Self::BaltimoreWashington => "Baltimore/Washington",
            Self::SouthCarolina => "South Carolina",
            Self::SouthCentral => "South Central",
            Self::Southeast => "Southeast",
            Self::Spokane => "Spokane",
            Self::StLouis => "St Louis",
            Self::Syracuse => "Syracuse",
            Self::Tampa => "Tampa",
            Self::TotalUS => "Total US",
            Self::West => "West",
            Self::WestTexNewMexico => "West Tex/New Mexico",
        }
    }

    /// Looks a region up by its wire code.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.as_str() == s)
    }

    /// `(label, wire value)` pairs as offered by the region selector.
    pub fn catalog() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::all().iter().map(|r| (r.label(), r.as_str()))
    }
}

impl fmt::Display for Region {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
