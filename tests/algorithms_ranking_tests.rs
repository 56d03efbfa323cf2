#![cfg(feature = "dev")]

use relieff_rs::internals::algorithms::ranking::Ranker;

#[test]
fn test_rank_descending_with_rejected_tail() {
    // Attributes 1 and 4 were rejected
    let ranked = Ranker::rank(&[0.1f64, -0.2, 0.7], &[0, 2, 3], &[1, 4], 5);

    assert_eq!(ranked.ranking, vec![3, 0, 2, 1, 4]);
    assert_eq!(ranked.weights[0], 0.1);
    assert_eq!(ranked.weights[2], -0.2);
    assert_eq!(ranked.weights[3], 0.7);
    assert!(ranked.weights[1].is_nan());
    assert!(ranked.weights[4].is_nan());
}

#[test]
fn test_rank_is_permutation() {
    let weights = [0.3, 0.3, -0.1, 0.9, 0.0, 0.3];
    let accepted: Vec<usize> = (0..6).collect();
    let ranked = Ranker::rank(&weights, &accepted, &[], 6);

    let mut sorted = ranked.ranking.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, accepted);
    assert_eq!(ranked.ranking, vec![3, 0, 1, 5, 4, 2]);
}

#[test]
fn test_identity_ranking() {
    let ranked = Ranker::identity::<f32>(3);
    assert_eq!(ranked.ranking, vec![0, 1, 2]);
    assert!(ranked.weights.iter().all(|w| w.is_nan()));
}

#[test]
fn test_all_nan_weights_keep_original_order() {
    let ranked = Ranker::rank(&[f64::NAN, f64::NAN], &[0, 2], &[1], 3);
    assert_eq!(ranked.ranking, vec![0, 2, 1]);
}
