use serde::{Deserialize, Serialize};

/// Availability of a catalog product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in_stock"),
            StockStatus::LowStock => write!(f, "low_stock"),
            StockStatus::OutOfStock => write!(f, "out_of_stock"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_stock" => Ok(StockStatus::InStock),
            "low_stock" => Ok(StockStatus::LowStock),
            "out_of_stock" => Ok(StockStatus::OutOfStock),
            _ => Err(format!("Invalid stock status: {}", s)),
        }
    }
}

/// Ordering applied to the filtered catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Name, ascending.
    #[default]
    Name,
    /// Price ascending, unpriced products count as zero.
    PriceLow,
    /// Price descending, unpriced products count as zero.
    PriceHigh,
    /// BTU descending, missing ratings count as zero.
    Btu,
    /// Brand, ascending.
    Brand,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::PriceLow => write!(f, "price-low"),
            SortKey::PriceHigh => write!(f, "price-high"),
            SortKey::Btu => write!(f, "btu"),
            SortKey::Brand => write!(f, "brand"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "btu" => Ok(SortKey::Btu),
            "brand" => Ok(SortKey::Brand),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}
