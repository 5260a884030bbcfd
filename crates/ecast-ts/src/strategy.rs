//! Field-specific extrapolation strategies.
//!
//! Each indicator is projected by exactly one [`Strategy`], selected from a
//! closed table in [`Strategy::for_field`]. Strategies are pure functions of
//! the historical series and the horizon; some of them consult the
//! projection of a related field at the same horizon (investment follows
//! renewables, production follows reserves).

use ecast_core::{EnergyRecord, Field, HistoricalSeries};

use crate::stats::{growth_rate, linear_regression, DEFAULT_GROWTH_WINDOW};

/// Saturation level for the renewable share, in percent.
pub const RENEWABLE_CEILING: f64 = 65.0;
/// Steepness of the renewable adoption curve.
pub const RENEWABLE_STEEPNESS: f64 = 0.18;
/// Years until half of the remaining renewable potential is realised.
pub const RENEWABLE_MIDPOINT: f64 = 15.0;

/// Yearly decay applied to the reserve depletion rate.
pub const DEPLETION_SLOWDOWN: f64 = 0.98;
/// Reserves never fall below this level.
pub const RESERVES_FLOOR: f64 = 0.1;

/// Share of renewable growth that offsets emissions growth.
pub const RENEWABLE_EMISSIONS_OFFSET: f64 = 0.5;

/// Yearly investment growth before the renewable bonus.
pub const INVESTMENT_BASE_GROWTH: f64 = 0.05;
/// Divisor turning the projected renewable share into extra investment growth.
pub const INVESTMENT_RENEWABLE_DIVISOR: f64 = 1000.0;

/// Yearly deceleration of population growth.
pub const POPULATION_DECELERATION: f64 = 0.99;

/// Fraction of productivity growth carried into the future.
pub const PRODUCTIVITY_RETENTION: f64 = 0.85;

/// Exponent damping the effect of reserve decline on production.
pub const RESERVE_RATIO_EXPONENT: f64 = 0.3;
/// Fraction of historical production growth carried forward.
pub const PRODUCTION_GROWTH_DAMPING: f64 = 0.5;

/// Electricity growth weights on population and GDP growth, plus an efficiency floor.
pub const ELECTRICITY_POPULATION_WEIGHT: f64 = 0.3;
pub const ELECTRICITY_GDP_WEIGHT: f64 = 0.5;
pub const ELECTRICITY_BASE_GROWTH: f64 = 0.01;

/// Blend of the linear trend and compounded growth for the remaining fields.
pub const TREND_WEIGHT: f64 = 0.4;
pub const EXPONENTIAL_WEIGHT: f64 = 0.6;

/// Extrapolation model applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// S-curve toward [`RENEWABLE_CEILING`].
    LogisticSaturation,
    /// Exponential decline driven by the reserves-to-production ratio.
    ///
    /// The yearly depletion fraction is clamped to `[0, 1]`: when production
    /// exceeds the remaining reserves the stock drops straight to
    /// [`RESERVES_FLOOR`] instead of changing sign every other year.
    ReserveDepletion { production: Field },
    /// Historical emissions growth net of renewable growth.
    EmissionsDecoupling,
    /// Base growth plus a bonus from the projected renewable share.
    TransitionInvestment,
    /// Historical growth decelerating a little every year.
    DeceleratingGrowth,
    /// Population growth plus retained productivity growth.
    ProductivityGrowth,
    /// Production scaled by the projected decline of its reserves.
    ReserveCoupledProduction { reserves: Field },
    /// Growth driven by population and GDP growth.
    DemandDriven,
    /// Weighted blend of a linear trend and compounded growth.
    TrendBlend,
}

impl Strategy {
    pub const fn for_field(field: Field) -> Strategy {
        match field {
            Field::RenewableShare => Strategy::LogisticSaturation,
            Field::OilReserves => Strategy::ReserveDepletion {
                production: Field::OilProduction,
            },
            Field::GasReserves => Strategy::ReserveDepletion {
                production: Field::GasProduction,
            },
            Field::Co2Emissions => Strategy::EmissionsDecoupling,
            Field::Investment => Strategy::TransitionInvestment,
            Field::Population => Strategy::DeceleratingGrowth,
            Field::Gdp => Strategy::ProductivityGrowth,
            Field::OilProduction => Strategy::ReserveCoupledProduction {
                reserves: Field::OilReserves,
            },
            Field::GasProduction => Strategy::ReserveCoupledProduction {
                reserves: Field::GasReserves,
            },
            Field::ElectricityProduction => Strategy::DemandDriven,
            Field::EnergyConsumption | Field::EnergyImports | Field::EnergyExports => {
                Strategy::TrendBlend
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::LogisticSaturation => "logistic-saturation",
            Strategy::ReserveDepletion { .. } => "reserve-depletion",
            Strategy::EmissionsDecoupling => "emissions-decoupling",
            Strategy::TransitionInvestment => "transition-investment",
            Strategy::DeceleratingGrowth => "decelerating-growth",
            Strategy::ProductivityGrowth => "productivity-growth",
            Strategy::ReserveCoupledProduction { .. } => "reserve-coupled-production",
            Strategy::DemandDriven => "demand-driven",
            Strategy::TrendBlend => "trend-blend",
        }
    }

    /// Project `field` `years_ahead` years past the end of `series`.
    pub fn evaluate(self, series: &HistoricalSeries, field: Field, years_ahead: u32) -> f64 {
        let records = series.records();
        let last = series.last();
        let last_value = last.get(field);
        let n = f64::from(years_ahead);
        let growth = |f: Field| growth_rate(records, f, DEFAULT_GROWTH_WINDOW);

        match self {
            Strategy::LogisticSaturation => {
                let remaining = RENEWABLE_CEILING - last_value;
                let sigmoid =
                    remaining / (1.0 + (-RENEWABLE_STEEPNESS * (n - RENEWABLE_MIDPOINT)).exp());
                (last_value + sigmoid).min(RENEWABLE_CEILING)
            }
            Strategy::ReserveDepletion { production } => {
                let depletion = depletion_rate(last, field, production);
                let adjusted = (depletion * DEPLETION_SLOWDOWN.powf(n)).clamp(0.0, 1.0);
                (last_value * (1.0 - adjusted).powf(n)).max(RESERVES_FLOOR)
            }
            Strategy::EmissionsDecoupling => {
                let net = growth(field) - growth(Field::RenewableShare) * RENEWABLE_EMISSIONS_OFFSET;
                (last_value * (1.0 + net).powf(n)).max(0.0)
            }
            Strategy::TransitionInvestment => {
                let future_share = predict_field(series, Field::RenewableShare, years_ahead);
                let rate = INVESTMENT_BASE_GROWTH + future_share / INVESTMENT_RENEWABLE_DIVISOR;
                last_value * (1.0 + rate).powf(n)
            }
            Strategy::DeceleratingGrowth => {
                let rate = growth(field) * POPULATION_DECELERATION.powf(n);
                last_value * (1.0 + rate).powf(n)
            }
            Strategy::ProductivityGrowth => {
                let overall = growth(field).abs();
                let population = growth(Field::Population);
                let sustainable = population + (overall - population) * PRODUCTIVITY_RETENTION;
                last_value * (1.0 + sustainable).powf(n)
            }
            Strategy::ReserveCoupledProduction { reserves } => {
                let current = match last.get(reserves) {
                    v if v == 0.0 => 1.0,
                    v => v,
                };
                let future = predict_field(series, reserves, years_ahead);
                let peak_adjustment = (future / current).powf(RESERVE_RATIO_EXPONENT);
                last_value
                    * peak_adjustment
                    * (1.0 + growth(field) * PRODUCTION_GROWTH_DAMPING).powf(n)
            }
            Strategy::DemandDriven => {
                let rate = growth(Field::Population) * ELECTRICITY_POPULATION_WEIGHT
                    + growth(Field::Gdp) * ELECTRICITY_GDP_WEIGHT
                    + ELECTRICITY_BASE_GROWTH;
                last_value * (1.0 + rate).powf(n)
            }
            Strategy::TrendBlend => {
                let fit = linear_regression(records, field);
                let trend = fit.at(records.len() as f64 + n - 1.0);
                let compounded = last_value * (1.0 + growth(field)).powf(n);
                trend * TREND_WEIGHT + compounded * EXPONENTIAL_WEIGHT
            }
        }
    }
}

/// Share of reserves produced per year; 0 when reserves are exhausted.
fn depletion_rate(last: &EnergyRecord, reserves: Field, production: Field) -> f64 {
    let remaining = last.get(reserves);
    if remaining == 0.0 {
        0.0
    } else {
        last.get(production) / remaining
    }
}

/// Project one field of `series` `years_ahead` years past its last record.
///
/// Non-finite results (overflow on extreme inputs) fall back to the last
/// historical value so that callers never observe `NaN` or infinities.
pub fn predict_field(series: &HistoricalSeries, field: Field, years_ahead: u32) -> f64 {
    let value = Strategy::for_field(field).evaluate(series, field, years_ahead);
    if value.is_finite() {
        value
    } else {
        series.last().get(field)
    }
}
