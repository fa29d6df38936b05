use std::{fmt, str::FromStr};

use thiserror::Error;

/// Every editable field of the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Quality1,
    Quality2,
    Quality3,
    SmallBags,
    LargeBags,
    XLargeBags,
    ProductType,
    Year,
    Region,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown form field '{0}'")]
pub struct UnknownFieldError(pub String);

impl FormField {
    /// Fields in the order the form lays them out.
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Quality1,
            FormField::Quality2,
            FormField::Quality3,
            FormField::SmallBags,
            FormField::LargeBags,
            FormField::XLargeBags,
            FormField::ProductType,
            FormField::Year,
            FormField::Region,
        ]
    }

    /// Internal field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quality1 => "quality1",
            Self::Quality2 => "quality2",
            Self::Quality3 => "quality3",
            Self::SmallBags => "smallBags",
            Self::LargeBags => "largeBags",
            Self::XLargeBags => "xlargeBags",
            Self::ProductType => "productType",
            Self::Year => "year",
            Self::Region => "region",
        }
    }

    /// Name of the matching control on the web form.
    fn control_name(&self) -> &'static str {
        match self {
            Self::Quality1 => "Quality1",
            Self::Quality2 => "Quality2",
            Self::Quality3 => "Quality3",
            Self::SmallBags => "SmallBags",
            Self::LargeBags => "LargeBags",
            Self::XLargeBags => "XLargeBags",
            Self::ProductType => "type",
            Self::Year => "year",
            Self::Region => "region",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quality1 => "Qualité 1",
            Self::Quality2 => "Qualité 2",
            Self::Quality3 => "Qualité 3",
            Self::SmallBags => "Petits Sacs",
            Self::LargeBags => "Grands Sacs",
            Self::XLargeBags => "Très Grands Sacs",
            Self::ProductType => "Type",
            Self::Year => "Année",
            Self::Region => "Région",
        }
    }

    /// Numeric fields store the coerced number; the others hold a choice.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::ProductType | Self::Region)
    }
}

impl FromStr for FormField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.name() == s || f.control_name() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}
