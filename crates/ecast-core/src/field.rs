//! Indicator identifiers.
//!
//! Every yearly record carries the same thirteen macro/energy indicators.
//! [`Field`] names them as a closed set so that strategy tables, column
//! mappings and lookups can be matched exhaustively instead of by string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EcastError;

/// One of the indicators tracked per country and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Population (millions)
    Population,
    /// Gross domestic product (billion USD)
    Gdp,
    /// Primary energy consumption (Mtoe)
    EnergyConsumption,
    OilProduction,
    GasProduction,
    /// Electricity generation (TWh)
    ElectricityProduction,
    /// Renewable share of generation, percent
    RenewableShare,
    OilReserves,
    GasReserves,
    EnergyImports,
    EnergyExports,
    /// CO2 emissions (Mt)
    Co2Emissions,
    Investment,
}

impl Field {
    /// All fields in canonical record order.
    pub const ALL: [Field; 13] = [
        Field::Population,
        Field::Gdp,
        Field::EnergyConsumption,
        Field::OilProduction,
        Field::GasProduction,
        Field::ElectricityProduction,
        Field::RenewableShare,
        Field::OilReserves,
        Field::GasReserves,
        Field::EnergyImports,
        Field::EnergyExports,
        Field::Co2Emissions,
        Field::Investment,
    ];

    /// Wire key used by JSON payloads (camelCase).
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Population => "population",
            Field::Gdp => "gdp",
            Field::EnergyConsumption => "energyConsumption",
            Field::OilProduction => "oilProduction",
            Field::GasProduction => "gasProduction",
            Field::ElectricityProduction => "electricityProduction",
            Field::RenewableShare => "renewableShare",
            Field::OilReserves => "oilReserves",
            Field::GasReserves => "gasReserves",
            Field::EnergyImports => "energyImports",
            Field::EnergyExports => "energyExports",
            Field::Co2Emissions => "co2Emissions",
            Field::Investment => "investment",
        }
    }

    /// Column name used by tabular files (snake_case).
    pub const fn column_name(self) -> &'static str {
        match self {
            Field::Population => "population",
            Field::Gdp => "gdp",
            Field::EnergyConsumption => "energy_consumption",
            Field::OilProduction => "oil_production",
            Field::GasProduction => "gas_production",
            Field::ElectricityProduction => "electricity_production",
            Field::RenewableShare => "renewable_share",
            Field::OilReserves => "oil_reserves",
            Field::GasReserves => "gas_reserves",
            Field::EnergyImports => "energy_imports",
            Field::EnergyExports => "energy_exports",
            Field::Co2Emissions => "co2_emissions",
            Field::Investment => "investment",
        }
    }

    /// Reserves field drained by this production field, if any.
    pub const fn reserves_for(self) -> Option<Field> {
        match self {
            Field::OilProduction => Some(Field::OilReserves),
            Field::GasProduction => Some(Field::GasReserves),
            _ => None,
        }
    }

    /// Production field draining this reserves field, if any.
    pub const fn production_for(self) -> Option<Field> {
        match self {
            Field::OilReserves => Some(Field::OilProduction),
            Field::GasReserves => Some(Field::GasProduction),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = EcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| {
                field.as_str().eq_ignore_ascii_case(needle)
                    || field.column_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                EcastError::Parse(format!(
                    "unknown field '{}'; expected one of: {}",
                    s,
                    Field::ALL.map(Field::as_str).join(", ")
                ))
            })
    }
}
