use std::fmt;

use super::{ProductType, Region};

/// Values currently entered in the prediction form.
///
/// Numeric fields are `f64` so input that cannot be read as a number is kept
/// as `NaN` rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRecord {
    // Quality grade volumes
    pub quality1: f64,
    pub quality2: f64,
    pub quality3: f64,

    // Bag quantities
    pub small_bags: f64,
    pub large_bags: f64,
    pub xlarge_bags: f64,

    pub product_type: ProductType,
    pub year: f64,
    pub region: Region,
}

impl DraftRecord {
    pub const DEFAULT_YEAR: f64 = 2024.0;
}

impl Default for DraftRecord {
    fn default() -> Self {
        Self {
            quality1: 0.0,
            quality2: 0.0,
            quality3: 0.0,
            small_bags: 0.0,
            large_bags: 0.0,
            xlarge_bags: 0.0,
            product_type: ProductType::default(),
            year: Self::DEFAULT_YEAR,
            region: Region::default(),
        }
    }
}

impl fmt::Display for DraftRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Qualité 1:        {}", self.quality1)?;
        writeln!(f, "Qualité 2:        {}", self.quality2)?;
        writeln!(f, "Qualité 3:        {}", self.quality3)?;
        writeln!(f, "Petits Sacs:      {}", self.small_bags)?;
        writeln!(f, "Grands Sacs:      {}", self.large_bags)?;
        writeln!(f, "Très Grands Sacs: {}", self.xlarge_bags)?;
        writeln!(f, "Type:             {}", self.product_type.label())?;
        writeln!(f, "Année:            {}", self.year)?;
        write!(f, "Région:           {}", self.region.label())
    }
}
