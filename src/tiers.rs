//! Tiered distance pricing.
//!
//! A vehicle type's base price covers trips up to its base distance
//! threshold; everything beyond is charged per mile according to an ordered
//! tier table. Tiers band the trip-distance axis from mile 0 - the portion
//! of a tier below the threshold is already covered by the base price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{FareError, Result};
use crate::models::DistanceTier;

/// Per-mile rate used when a vehicle type has no tier table configured.
/// A deliberate operational default, not an error path.
const FALLBACK_RATE_PER_MILE: Decimal = dec!(1.00);

/// Check that a tier table tiles the distance axis.
///
/// Sorted by `from_miles`, the table must start at 0, leave no gaps and no
/// overlaps, and may end in at most one open-ended tier (`to_miles == 0`).
/// An empty table is valid (the flat fallback rate applies).
pub fn validate_tiers(tiers: &[DistanceTier]) -> Result<()> {
    if tiers.is_empty() {
        return Ok(());
    }

    let mut sorted: Vec<&DistanceTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| a.from_miles.cmp(&b.from_miles));

    if sorted[0].from_miles != Decimal::ZERO {
        return Err(FareError::InvalidConfiguration(format!(
            "first distance tier must start at 0 miles, starts at {}",
            sorted[0].from_miles
        )));
    }

    for window in sorted.windows(2) {
        let (current, next) = (window[0], window[1]);
        if current.to_miles == Decimal::ZERO {
            return Err(FareError::InvalidConfiguration(
                "open-ended distance tier must be the last tier".to_string(),
            ));
        }
        if next.from_miles != current.to_miles {
            return Err(FareError::InvalidConfiguration(format!(
                "distance tiers must tile without gaps or overlaps: tier ending at {} is \
                 followed by tier starting at {}",
                current.to_miles, next.from_miles
            )));
        }
    }

    Ok(())
}

/// Distance-based component of the base fare.
///
/// Returns 0 when the trip fits inside the base threshold. With no tiers
/// configured, charges a flat $1.00 per additional mile. Otherwise each
/// tier charges its rate on the slice of the trip that falls both inside
/// the tier and beyond the threshold.
pub fn price_distance(
    total_miles: Decimal,
    base_threshold: Decimal,
    tiers: &[DistanceTier],
) -> Decimal {
    if total_miles <= base_threshold {
        return Decimal::ZERO;
    }

    if tiers.is_empty() {
        return (total_miles - base_threshold) * FALLBACK_RATE_PER_MILE;
    }

    let mut sorted: Vec<&DistanceTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| a.from_miles.cmp(&b.from_miles));

    let mut charge = Decimal::ZERO;
    for tier in sorted {
        let span_start = tier.from_miles.max(base_threshold);
        let span_end = if tier.to_miles == Decimal::ZERO {
            total_miles
        } else {
            tier.to_miles.min(total_miles)
        };
        if span_end > span_start {
            charge += (span_end - span_start) * tier.price_per_mile;
        }
    }
    charge
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(from: Decimal, to: Decimal, rate: Decimal) -> DistanceTier {
        DistanceTier {
            from_miles: from,
            to_miles: to,
            price_per_mile: rate,
            description: None,
        }
    }

    fn standard_tiers() -> Vec<DistanceTier> {
        vec![
            tier(dec!(0), dec!(12), dec!(4.00)),
            tier(dec!(12), dec!(25), dec!(3.50)),
            tier(dec!(25), dec!(0), dec!(2.50)),
        ]
    }

    // ==================== price_distance tests ====================

    #[test]
    fn test_trip_at_threshold_costs_nothing() {
        assert_eq!(price_distance(dec!(12), dec!(12), &standard_tiers()), dec!(0));
    }

    #[test]
    fn test_trip_below_threshold_costs_nothing() {
        assert_eq!(price_distance(dec!(5), dec!(12), &standard_tiers()), dec!(0));
    }

    #[test]
    fn test_flat_fallback_without_tiers() {
        // 20 total - 12 included = 8 additional miles at $1.00
        assert_eq!(price_distance(dec!(20), dec!(12), &[]), dec!(8.00));
    }

    #[test]
    fn test_tiered_pricing_scenario() {
        // 40 total miles: 0-12 covered by base, 12-25 at $3.50,
        // 25-40 at $2.50 -> 13 * 3.50 + 15 * 2.50 = 83.00
        assert_eq!(
            price_distance(dec!(40), dec!(12), &standard_tiers()),
            dec!(83.00)
        );
    }

    #[test]
    fn test_trip_ending_inside_a_tier() {
        // 20 total: 8 chargeable miles, all inside the 12-25 tier
        assert_eq!(
            price_distance(dec!(20), dec!(12), &standard_tiers()),
            dec!(28.00)
        );
    }

    #[test]
    fn test_threshold_inside_first_tier() {
        // Threshold 5 splits the first tier: miles 5-12 at $4.00,
        // then 12-20 at $3.50
        let expected = dec!(7) * dec!(4.00) + dec!(8) * dec!(3.50);
        assert_eq!(
            price_distance(dec!(20), dec!(5), &standard_tiers()),
            expected
        );
    }

    #[test]
    fn test_unsorted_tier_table_prices_the_same() {
        let mut shuffled = standard_tiers();
        shuffled.swap(0, 2);
        assert_eq!(
            price_distance(dec!(40), dec!(12), &shuffled),
            price_distance(dec!(40), dec!(12), &standard_tiers())
        );
    }

    #[test]
    fn test_tier_charges_match_mile_walking_oracle() {
        // Cross-check the band arithmetic against a different computation:
        // advance through the chargeable range in quarter-mile steps,
        // charging each step at the rate of the tier containing it. Every
        // boundary in the fixtures is a quarter-mile multiple, so the walk
        // is exact.
        let tables = [
            standard_tiers(),
            vec![tier(dec!(0), dec!(10), dec!(2.00)), tier(dec!(10), dec!(0), dec!(1.25))],
            vec![
                tier(dec!(0), dec!(3), dec!(5.00)),
                tier(dec!(3), dec!(7), dec!(4.00)),
                tier(dec!(7), dec!(30), dec!(3.00)),
                tier(dec!(30), dec!(0), dec!(2.00)),
            ],
        ];
        let thresholds = [dec!(0), dec!(2), dec!(7), dec!(12.5)];
        let totals = [dec!(0), dec!(1.5), dec!(7), dec!(19.25), dec!(42), dec!(100)];
        let step = dec!(0.25);

        for table in &tables {
            for &threshold in &thresholds {
                for &total in &totals {
                    let mut expected = Decimal::ZERO;
                    let mut cursor = threshold;
                    while cursor < total {
                        let rate = table
                            .iter()
                            .find(|t| {
                                cursor >= t.from_miles
                                    && (t.to_miles == Decimal::ZERO || cursor < t.to_miles)
                            })
                            .map(|t| t.price_per_mile)
                            .expect("tier covering the cursor");
                        expected += step * rate;
                        cursor += step;
                    }
                    assert_eq!(
                        price_distance(total, threshold, table),
                        expected,
                        "total {total}, threshold {threshold}"
                    );
                }
            }
        }
    }

    // ==================== validate_tiers tests ====================

    #[test]
    fn test_valid_tier_table() {
        assert!(validate_tiers(&standard_tiers()).is_ok());
        assert!(validate_tiers(&[]).is_ok());
    }

    #[test]
    fn test_gap_between_tiers_rejected() {
        let gapped = vec![
            tier(dec!(0), dec!(10), dec!(4.00)),
            tier(dec!(15), dec!(0), dec!(2.00)),
        ];
        assert!(matches!(
            validate_tiers(&gapped),
            Err(FareError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_overlapping_tiers_rejected() {
        let overlapping = vec![
            tier(dec!(0), dec!(10), dec!(4.00)),
            tier(dec!(8), dec!(0), dec!(2.00)),
        ];
        assert!(matches!(
            validate_tiers(&overlapping),
            Err(FareError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_first_tier_must_start_at_zero() {
        let late_start = vec![tier(dec!(5), dec!(0), dec!(2.00))];
        assert!(matches!(
            validate_tiers(&late_start),
            Err(FareError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_open_ended_tier_must_be_last() {
        let misplaced = vec![
            tier(dec!(0), dec!(0), dec!(4.00)),
            tier(dec!(10), dec!(20), dec!(2.00)),
        ];
        assert!(matches!(
            validate_tiers(&misplaced),
            Err(FareError::InvalidConfiguration(_))
        ));
    }
}
