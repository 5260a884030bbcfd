use serde::{Deserialize, Serialize};

use crate::field::Field;

/// One calendar year of observations for one country.
///
/// The same shape carries historical observations and engine-produced
/// predictions; provenance is implied by the year relative to the end of the
/// historical series. Absent numeric values deserialize as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRecord {
    pub year: i32,
    #[serde(default)]
    pub population: f64,
    #[serde(default)]
    pub gdp: f64,
    #[serde(default, alias = "energy_consumption")]
    pub energy_consumption: f64,
    #[serde(default, alias = "oil_production")]
    pub oil_production: f64,
    #[serde(default, alias = "gas_production")]
    pub gas_production: f64,
    #[serde(default, alias = "electricity_production")]
    pub electricity_production: f64,
    #[serde(default, alias = "renewable_share")]
    pub renewable_share: f64,
    #[serde(default, alias = "oil_reserves")]
    pub oil_reserves: f64,
    #[serde(default, alias = "gas_reserves")]
    pub gas_reserves: f64,
    #[serde(default, alias = "energy_imports")]
    pub energy_imports: f64,
    #[serde(default, alias = "energy_exports")]
    pub energy_exports: f64,
    #[serde(default, alias = "co2_emissions")]
    pub co2_emissions: f64,
    #[serde(default)]
    pub investment: f64,
}

impl EnergyRecord {
    /// Record for `year` with every indicator at zero.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Population => self.population,
            Field::Gdp => self.gdp,
            Field::EnergyConsumption => self.energy_consumption,
            Field::OilProduction => self.oil_production,
            Field::GasProduction => self.gas_production,
            Field::ElectricityProduction => self.electricity_production,
            Field::RenewableShare => self.renewable_share,
            Field::OilReserves => self.oil_reserves,
            Field::GasReserves => self.gas_reserves,
            Field::EnergyImports => self.energy_imports,
            Field::EnergyExports => self.energy_exports,
            Field::Co2Emissions => self.co2_emissions,
            Field::Investment => self.investment,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::Population => &mut self.population,
            Field::Gdp => &mut self.gdp,
            Field::EnergyConsumption => &mut self.energy_consumption,
            Field::OilProduction => &mut self.oil_production,
            Field::GasProduction => &mut self.gas_production,
            Field::ElectricityProduction => &mut self.electricity_production,
            Field::RenewableShare => &mut self.renewable_share,
            Field::OilReserves => &mut self.oil_reserves,
            Field::GasReserves => &mut self.gas_reserves,
            Field::EnergyImports => &mut self.energy_imports,
            Field::EnergyExports => &mut self.energy_exports,
            Field::Co2Emissions => &mut self.co2_emissions,
            Field::Investment => &mut self.investment,
        };
        *slot = value;
    }

    /// Builder-style variant of [`EnergyRecord::set`].
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_field() {
        let mut record = EnergyRecord::new(2030);
        for (i, field) in Field::ALL.into_iter().enumerate() {
            record.set(field, i as f64 + 0.5);
        }
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(record.get(field), i as f64 + 0.5);
        }
        assert_eq!(record.year, 2030);
    }

    #[test]
    fn missing_values_default_to_zero() {
        let record: EnergyRecord =
            serde_json::from_str(r#"{"year": 2001, "gdp": 22.5}"#).unwrap();
        assert_eq!(record.gdp, 22.5);
        assert_eq!(record.oil_reserves, 0.0);
        assert_eq!(record.investment, 0.0);
    }

    #[test]
    fn accepts_snake_case_aliases() {
        let record: EnergyRecord =
            serde_json::from_str(r#"{"year": 2001, "renewable_share": 3.5}"#).unwrap();
        assert_eq!(record.renewable_share, 3.5);
    }

    #[test]
    fn serializes_camel_case_keys() {
        let json = serde_json::to_string(&EnergyRecord::new(2026)).unwrap();
        assert!(json.contains("\"co2Emissions\""));
        assert!(json.contains("\"energyConsumption\""));
    }
}
