//! Per-line candidate ranking and selection.

use crate::domain::ahp::ScoringConfiguration;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::geo::{self, Coordinate};

use super::{composite_score, LineRecommendation, OrderLine, ScoredVendor, VendorCandidate};

/// Ranks one line's candidates and designates the chosen vendor.
///
/// The pass runs distance computation, a stable ascending sort by
/// distance, scoring against the configuration snapshot, a stable
/// ascending sort by composite score, and selection of index 0 of the
/// final order. Selection therefore lands on the numerically smallest
/// composite score; both sorts are stable, so identical inputs always
/// produce identical rankings.
///
/// # Errors
///
/// `NoVendorsAvailable` when `candidates` is empty. The caller is
/// expected to abort the whole order on this, not substitute a default.
pub fn rank_line(
    line: &OrderLine,
    shipping: Coordinate,
    candidates: Vec<VendorCandidate>,
    config: &ScoringConfiguration,
) -> Result<LineRecommendation, DomainError> {
    if candidates.is_empty() {
        return Err(DomainError::new(
            ErrorCode::NoVendorsAvailable,
            "No vendor can supply this menu item",
        )
        .with_detail("menu_id", line.menu_id.to_string()));
    }

    let mut ranked: Vec<ScoredVendor> = candidates
        .into_iter()
        .map(|candidate| {
            let location = Coordinate::new(candidate.latitude, candidate.longitude);
            ScoredVendor {
                distance_km: geo::distance_km(shipping, location),
                score: 0.0,
                candidate,
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    for entry in &mut ranked {
        entry.score = composite_score(&entry.candidate, entry.distance_km, line, config);
    }

    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));

    let chosen_vendor = ranked[0].candidate.vendor_id;
    Ok(LineRecommendation {
        menu_id: line.menu_id,
        ranked,
        chosen_vendor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::CriterionWeights;
    use crate::domain::foundation::{MenuId, VendorId};
    use chrono::Utc;

    fn weights(values: &[f64]) -> CriterionWeights {
        CriterionWeights {
            target: vec![values.to_vec(); values.len()],
            weights: values.to_vec(),
        }
    }

    fn configuration() -> ScoringConfiguration {
        ScoringConfiguration {
            criteria: weights(&[0.6, 0.1, 0.3]),
            distance: weights(&[0.4, 0.3, 0.2, 0.1]),
            capacity: weights(&[0.9, 0.1]),
            price: weights(&[0.5, 0.3, 0.2]),
            distance_thresholds: vec![5.0, 10.0, 15.0, 20.0],
            capacity_thresholds: vec![100.0, 500.0],
            price_thresholds: vec![5000.0, 7500.0, 10000.0],
            updated_at: Utc::now(),
        }
    }

    fn shipping() -> Coordinate {
        Coordinate::new(-6.2088, 106.8456)
    }

    fn line() -> OrderLine {
        OrderLine {
            menu_id: MenuId::new(),
            quantity: 50,
            price: 30_000.0,
        }
    }

    fn candidate_at(lat: f64, lon: f64, max_order: u32, vendor_price: f64) -> VendorCandidate {
        VendorCandidate {
            vendor_id: VendorId::new(),
            latitude: lat,
            longitude: lon,
            min_order: 1,
            max_order,
            vendor_price,
        }
    }

    #[test]
    fn empty_candidate_list_fails_with_no_vendors() {
        let result = rank_line(&line(), shipping(), vec![], &configuration());
        assert!(matches!(
            result,
            Err(err) if err.code == ErrorCode::NoVendorsAvailable
        ));
    }

    #[test]
    fn chosen_vendor_has_the_smallest_composite_score() {
        // Nearby vendor with capacity and a matched price bucket versus a
        // distant vendor outside every bucket (all sub-scores zero).
        let near = candidate_at(-6.21, 106.85, 200, 22_000.0);
        let far = candidate_at(-7.5, 110.0, 10, 500.0);
        let far_id = far.vendor_id;

        let result = rank_line(
            &line(),
            shipping(),
            vec![near.clone(), far.clone()],
            &configuration(),
        )
        .unwrap();

        // The far vendor scores lower (only the does-not-fit capacity
        // weight contributes) and the ascending sort selects it.
        assert!(result.ranked[0].score <= result.ranked[1].score);
        assert_eq!(result.chosen_vendor, far_id);
        assert_eq!(result.chosen_vendor, result.ranked[0].candidate.vendor_id);
    }

    #[test]
    fn ranking_is_deterministic_for_identical_inputs() {
        let candidates = vec![
            candidate_at(-6.21, 106.85, 200, 22_000.0),
            candidate_at(-6.25, 106.80, 120, 24_000.0),
            candidate_at(-6.18, 106.90, 80, 21_000.0),
        ];

        let line = line();
        let first = rank_line(&line, shipping(), candidates.clone(), &configuration()).unwrap();
        let second = rank_line(&line, shipping(), candidates, &configuration()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn tied_scores_keep_distance_order() {
        // Identical capacity and price, both inside the same distance
        // bucket: equal composite scores, so the stable sort preserves
        // the nearer vendor first.
        let nearer = candidate_at(-6.2150, 106.8456, 200, 22_000.0);
        let farther = candidate_at(-6.2300, 106.8456, 200, 22_000.0);
        let nearer_id = nearer.vendor_id;

        let result = rank_line(
            &line(),
            shipping(),
            vec![farther, nearer],
            &configuration(),
        )
        .unwrap();

        assert_eq!(result.ranked[0].score, result.ranked[1].score);
        assert_eq!(result.ranked[0].candidate.vendor_id, nearer_id);
        assert!(result.ranked[0].distance_km < result.ranked[1].distance_km);
    }

    #[test]
    fn distance_fields_are_populated_for_every_candidate() {
        let candidates = vec![
            candidate_at(-6.21, 106.85, 200, 22_000.0),
            candidate_at(-6.25, 106.80, 120, 24_000.0),
        ];

        let result = rank_line(&line(), shipping(), candidates, &configuration()).unwrap();

        for entry in &result.ranked {
            assert!(entry.distance_km > 0.0);
        }
    }
}
