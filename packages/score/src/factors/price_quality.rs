//! Price/quality factor: rent level, revenue potential and lease terms.

use horeca_map_score_models::{Factor, PriceQualityFeatures, Priority};

use super::{FactorOutcome, NEUTRAL, Tally};

/// Price per m² above this multiple of the market average is "notably
/// above market".
pub const ABOVE_MARKET_RATIO: f64 = 1.15;

/// Key money above this amount (euros) is considered steep.
pub const STEEP_KEY_MONEY: f64 = 100_000.0;

/// Scores the price/quality sub-bundle.
#[must_use]
pub fn evaluate(features: Option<&PriceQualityFeatures>) -> FactorOutcome {
    let mut tally = Tally::new(Factor::PriceQuality, NEUTRAL);
    let Some(f) = features else {
        return tally.finish();
    };

    match f.below_market_rent {
        Some(true) => tally.add(15.0),
        Some(false) => tally.add(-5.0),
        None => {}
    }

    if let (Some(price), Some(market)) = (
        f.price_per_sqm,
        f.market_average_price_per_sqm.filter(|m| *m > 0.0),
    ) {
        let ratio = price / market;
        tally.add(if ratio <= 0.85 {
            12.0
        } else if ratio <= 1.0 {
            5.0
        } else if ratio <= ABOVE_MARKET_RATIO {
            -5.0
        } else {
            -12.0
        });
        if ratio > ABOVE_MARKET_RATIO {
            tally.suggest(
                Priority::High,
                format!(
                    "The price per m² (€{price:.0}) is well above the market average \
                     (€{market:.0}): renegotiate the rent or ask for a rent-free period."
                ),
            );
        }
    }

    match (f.revenue_potential, f.monthly_rent) {
        (Some(revenue), Some(rent)) if revenue > 0.0 && rent > 0.0 => {
            let rent_share = rent * 12.0 / revenue;
            tally.add(if rent_share <= 0.08 {
                15.0
            } else if rent_share <= 0.12 {
                8.0
            } else if rent_share <= 0.18 {
                0.0
            } else {
                -10.0
            });
        }
        (Some(revenue), _) => {
            tally.add(if revenue >= 500_000.0 {
                10.0
            } else if revenue >= 250_000.0 {
                5.0
            } else if revenue >= 100_000.0 {
                0.0
            } else {
                -8.0
            });
        }
        (None, _) => {}
    }

    if let Some(years) = f.lease_duration_years {
        tally.add(if years >= 10.0 {
            10.0
        } else if years >= 5.0 {
            5.0
        } else if years >= 3.0 {
            0.0
        } else {
            -10.0
        });
        if years < 5.0 {
            tally.suggest(
                Priority::Medium,
                format!(
                    "Short lease ({years} years): negotiate at least five years to recoup the \
                     fit-out investment."
                ),
            );
        }
    }

    if let Some(key_money) = f.key_money {
        if key_money <= 0.0 {
            tally.add(3.0);
        } else if key_money > STEEP_KEY_MONEY {
            tally.add(-6.0);
            tally.suggest(
                Priority::Low,
                format!(
                    "Key money of €{key_money:.0} is steep: check which inventory and goodwill \
                     it actually covers."
                ),
            );
        }
    }

    tally.finish()
}
