#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductType {
    #[default]
    Conventional,
    Organic,
}

impl ProductType {
    pub fn all() -> &'static [ProductType] {
        &[ProductType::Conventional, ProductType::Organic]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::Organic => "organic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conventional => "Conventionnel",
            Self::Organic => "Biologique",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "conventional" => Some(Self::Conventional),
            "organic" => Some(Self::Organic),
            _ => None,
        }
    }
}
