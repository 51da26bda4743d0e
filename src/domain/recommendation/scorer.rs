//! Composite vendor scoring against the configured weighting model.

use crate::domain::ahp::{
    ScoringConfiguration, CRITERION_CAPACITY, CRITERION_DISTANCE, CRITERION_PRICE,
};

use super::{OrderLine, VendorCandidate};

/// Blends the three criterion sub-scores into one composite score.
///
/// - Distance sub-score: bucket scan of the shipping distance against the
///   distance cutoffs.
/// - Capacity sub-score: binary selector; `max_order > quantity` picks the
///   fits weight, otherwise the does-not-fit weight.
/// - Price sub-score: bucket scan of the sell-price margin
///   (`line.price - vendor_price`) against the price cutoffs.
///
/// `config` must have passed [`ScoringConfiguration::validate`]; the
/// weight vectors are indexed by threshold position.
pub fn composite_score(
    candidate: &VendorCandidate,
    distance_km: f64,
    line: &OrderLine,
    config: &ScoringConfiguration,
) -> f64 {
    let distance_sub = bucket_weight(
        distance_km,
        &config.distance_thresholds,
        &config.distance.weights,
    );

    let capacity_sub = if candidate.max_order > line.quantity {
        config.capacity.weights[0]
    } else {
        config.capacity.weights[1]
    };

    let price_sub = bucket_weight(
        line.price - candidate.vendor_price,
        &config.price_thresholds,
        &config.price.weights,
    );

    distance_sub * config.criteria.weights[CRITERION_DISTANCE]
        + capacity_sub * config.criteria.weights[CRITERION_CAPACITY]
        + price_sub * config.criteria.weights[CRITERION_PRICE]
}

/// Resolves a continuous value to a bucket weight.
///
/// The scan walks every cutoff in ascending index order and overwrites the
/// running sub-score at each satisfied one, so the last satisfied cutoff
/// wins. A value outside every cutoff keeps the initial 0.0, which is a
/// valid worst-on-this-criterion outcome, not an error.
// TODO: check with the catalog owners whether the tightest cutoff should
// win instead of the widest before touching the scan order.
fn bucket_weight(value: f64, thresholds: &[f64], weights: &[f64]) -> f64 {
    let mut sub_score = 0.0;
    for (i, cutoff) in thresholds.iter().enumerate() {
        if value < *cutoff {
            sub_score = weights[i];
        }
    }
    sub_score
}
