use std::str::FromStr;

use bigdecimal::BigDecimal;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::StockStatus;
use business::domain::shared::value_objects::ProductId;

struct SeedProduct {
    name: &'static str,
    category: &'static str,
    brand: &'static str,
    model: &'static str,
    price: &'static str,
    btu: u32,
    energy_rating: &'static str,
    features: [&'static str; 4],
    description: &'static str,
    image_url: &'static str,
    in_stock: StockStatus,
}

const CENTRAL_AC_IMAGE: &str = "/assets/generated_images/Central_AC_unit_product_2b1450d4.png";
const HEAT_PUMP_IMAGE: &str = "/assets/generated_images/Heat_pump_unit_product_2bc7afc9.png";
const FURNACE_IMAGE: &str = "/assets/generated_images/Gas_furnace_unit_product_01b5caf5.png";
const WALL_MOUNTED_IMAGE: &str =
    "/assets/generated_images/Bestcold_wall_mounted_AC_unit_a5621cd3.png";
const CASSETTE_IMAGE: &str = "/assets/generated_images/Bestcold_cassette_AC_unit_1d867241.png";
const VRF_IMAGE: &str = "/assets/generated_images/Bestcold_VRF_outdoor_unit_56a2a972.png";

const MULTI_SPLIT_FEATURES: [&str; 4] = [
    "Matching mode",
    "Flexible installation",
    "Up to 75m pipe length",
    "Max 10m height difference",
];
const MULTI_SPLIT_DESCRIPTION: &str = "High-efficiency wall mounted unit with advanced multi-split technology. Wide operation range from 14°F to 114.8°F.";

const SEED: [SeedProduct; 11] = [
    SeedProduct {
        name: "Carrier 24ACC636A003 Performance Series Central Air Conditioner",
        category: "Air Conditioning",
        brand: "Carrier",
        model: "24ACC636A003",
        price: "3299.99",
        btu: 36000,
        energy_rating: "16 SEER",
        features: [
            "Variable-speed compressor",
            "Smart thermostat compatible",
            "Quiet operation",
            "10-year warranty",
        ],
        description: "High-efficiency central air conditioning system with advanced variable-speed technology.",
        image_url: CENTRAL_AC_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "Trane XV20i TruComfort Variable Speed Heat Pump",
        category: "Heat Pumps",
        brand: "Trane",
        model: "XV20i",
        price: "4599.99",
        btu: 48000,
        energy_rating: "20 SEER",
        features: [
            "Variable speed technology",
            "TruComfort technology",
            "All-weather operation",
            "12-year warranty",
        ],
        description: "Premium variable speed heat pump with industry-leading efficiency and comfort control.",
        image_url: HEAT_PUMP_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "Lennox EL296V High-Efficiency Gas Furnace",
        category: "Heating",
        brand: "Lennox",
        model: "EL296V",
        price: "2899.99",
        btu: 80000,
        energy_rating: "96% AFUE",
        features: [
            "96% efficiency rating",
            "Variable-speed blower",
            "Two-stage heating",
            "20-year warranty",
        ],
        description: "Ultra-high efficiency gas furnace with two-stage heating and variable-speed comfort.",
        image_url: FURNACE_IMAGE,
        in_stock: StockStatus::LowStock,
    },
    SeedProduct {
        name: "Goodman GSX14 Central Air Conditioner",
        category: "Air Conditioning",
        brand: "Goodman",
        model: "GSX14",
        price: "2299.99",
        btu: 24000,
        energy_rating: "14 SEER",
        features: [
            "Single-stage cooling",
            "R-410A refrigerant",
            "Durable construction",
            "10-year warranty",
        ],
        description: "Reliable and affordable central air conditioning for budget-conscious homeowners.",
        image_url: CENTRAL_AC_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "Rheem Classic Plus Series Single Stage Heat Pump",
        category: "Heat Pumps",
        brand: "Rheem",
        model: "RP1424AJ1NA",
        price: "2799.99",
        btu: 24000,
        energy_rating: "14 SEER",
        features: [
            "Single-stage operation",
            "Scroll compressor",
            "Refrigerant R-410A",
            "10-year warranty",
        ],
        description: "Dependable heat pump solution for year-round comfort and energy savings.",
        image_url: HEAT_PUMP_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "York YXV 20 SEER Variable Capacity Air Conditioner",
        category: "Air Conditioning",
        brand: "York",
        model: "YXV",
        price: "3899.99",
        btu: 36000,
        energy_rating: "20 SEER",
        features: [
            "Variable capacity",
            "Inverter technology",
            "Smart home ready",
            "12-year warranty",
        ],
        description: "Premium variable capacity air conditioner with smart home integration capabilities.",
        image_url: CENTRAL_AC_IMAGE,
        in_stock: StockStatus::OutOfStock,
    },
    SeedProduct {
        name: "Bestcold Multi-Split Wall Mounted Unit 18K BTU",
        category: "Air Conditioning",
        brand: "Bestcold",
        model: "MS-WM-18K",
        price: "1899.99",
        btu: 18000,
        energy_rating: "22 SEER2",
        features: MULTI_SPLIT_FEATURES,
        description: MULTI_SPLIT_DESCRIPTION,
        image_url: WALL_MOUNTED_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "Bestcold Multi-Split Wall Mounted Unit 24K BTU",
        category: "Air Conditioning",
        brand: "Bestcold",
        model: "MS-WM-24K",
        price: "2299.99",
        btu: 24000,
        energy_rating: "22 SEER2",
        features: MULTI_SPLIT_FEATURES,
        description: MULTI_SPLIT_DESCRIPTION,
        image_url: WALL_MOUNTED_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "Bestcold Multi-Split Wall Mounted Unit 36K BTU",
        category: "Air Conditioning",
        brand: "Bestcold",
        model: "MS-WM-36K",
        price: "2799.99",
        btu: 36000,
        energy_rating: "22 SEER2",
        features: MULTI_SPLIT_FEATURES,
        description: MULTI_SPLIT_DESCRIPTION,
        image_url: WALL_MOUNTED_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "Bestcold Compact Cassette Unit 18K BTU",
        category: "Air Conditioning",
        brand: "Bestcold",
        model: "CC-18K",
        price: "2199.99",
        btu: 18000,
        energy_rating: "22 SEER2",
        features: [
            "4-way airflow",
            "Compact design",
            "Ceiling mounted",
            "Multi-split compatible",
        ],
        description: "Professional compact cassette unit for commercial applications with efficient 4-way air distribution.",
        image_url: CASSETTE_IMAGE,
        in_stock: StockStatus::InStock,
    },
    SeedProduct {
        name: "Bestcold CHV Pro VRF System 8HP",
        category: "VRF Systems",
        brand: "Bestcold",
        model: "CHV-PRO-8HP",
        price: "8999.99",
        btu: 96000,
        energy_rating: "Full DC Inverter",
        features: [
            "Up to 100 indoor units",
            "Refrigerant cooling design",
            "7-level power saving",
            "208V-230V/3N/60Hz",
        ],
        description: "New Full DC Inverter VRF system with advanced power management and refrigerant cooling for outdoor temperatures up to 55°C.",
        image_url: VRF_IMAGE,
        in_stock: StockStatus::InStock,
    },
];

/// The catalog loaded at process start. Ids are `"1"` through `"11"` in listing order.
pub fn seed_products() -> Result<Vec<Product>, ProductError> {
    SEED.iter()
        .enumerate()
        .map(|(index, seed)| {
            let price = BigDecimal::from_str(seed.price).map_err(|_| ProductError::InvalidPrice)?;
            Product::with_id(
                ProductId::new((index + 1).to_string()),
                NewProductProps {
                    name: seed.name.to_string(),
                    category: seed.category.to_string(),
                    brand: seed.brand.to_string(),
                    model: seed.model.to_string(),
                    price: Some(price),
                    btu: Some(seed.btu),
                    energy_rating: Some(seed.energy_rating.to_string()),
                    features: Some(seed.features.iter().map(|f| f.to_string()).collect()),
                    description: Some(seed.description.to_string()),
                    image_url: Some(seed.image_url.to_string()),
                    in_stock: Some(seed.in_stock),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_seed_eleven_valid_products() {
        let products = seed_products().unwrap();

        assert_eq!(products.len(), 11);
        assert_eq!(products[0].id, ProductId::new("1"));
        assert_eq!(products[10].id, ProductId::new("11"));
    }

    #[test]
    fn should_assign_unique_ids() {
        let products = seed_products().unwrap();

        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn should_keep_decimal_prices_exact() {
        let products = seed_products().unwrap();

        assert_eq!(
            products[1].price.as_ref().map(|p| p.to_string()),
            Some("4599.99".to_string())
        );
    }
}
