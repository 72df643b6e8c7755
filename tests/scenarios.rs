//! End-to-end scenarios for the colony.

use u_antcolony::aco::{
    construct_tour, tour_length, AcoConfig, AcoRunner, InfeasiblePenalty, PheromoneMatrix,
    Visibility,
};
use u_antcolony::distance::{DistanceMatrix, GeoPoint};
use u_antcolony::run_aco;
use u_numflow::random::create_rng;

/// Rectangle 0-1-2-3: the perimeter tour is 10, the crossed tours 14 and 16.
fn rectangle() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0.0, 2.0, 5.0, 3.0],
        vec![2.0, 0.0, 3.0, 5.0],
        vec![5.0, 3.0, 0.0, 2.0],
        vec![3.0, 5.0, 2.0, 0.0],
    ])
    .expect("square")
}

#[test]
fn rectangle_optimum_found_in_nearly_every_run() {
    let dm = rectangle();
    let runs = 40u64;
    let hits = (0..runs)
        .filter(|&seed| {
            let config = AcoConfig::default()
                .with_ants(30)
                .with_iterations(100)
                .with_alpha(1.0)
                .with_beta(2.0)
                .with_rho(0.32)
                .with_q(100.0)
                .with_seed(seed);
            let result = run_aco(&dm, &config).expect("valid input");
            (result.best_length - 10.0).abs() < 1e-9
        })
        .count() as f64;

    assert!(
        hits / runs as f64 >= 0.95,
        "optimum found in {hits} of {runs} runs"
    );
}

#[test]
fn zero_exponents_select_uniformly() {
    let dm = rectangle();
    let tau = PheromoneMatrix::uniform(4, 1.0);
    let eta = Visibility::from_distances(&dm);
    let mut rng = create_rng(2024);

    let trials = 9_000;
    let mut counts = [0usize; 4];
    for _ in 0..trials {
        let tour = construct_tour(0, &tau, &eta, 0.0, 0.0, &mut rng);
        counts[tour[1]] += 1;
    }

    assert_eq!(counts[0], 0);
    for &c in &counts[1..] {
        let p = c as f64 / trials as f64;
        assert!((p - 1.0 / 3.0).abs() < 0.03, "frequencies {counts:?}");
    }
}

#[test]
fn unreachable_edge_costs_exactly_the_penalty() {
    let mut dm = rectangle();
    dm.set_symmetric(0, 1, DistanceMatrix::UNREACHABLE);

    // 0-1 is unreachable, the rest of the perimeter is 3 + 2 + 3.
    assert_eq!(tour_length(&[0, 1, 2, 3], &dm), 1e6 + 8.0);
    assert_eq!(tour_length(&[1, 2, 3, 0], &dm), 1e6 + 8.0);
    // 0-2-1-3 avoids the edge entirely.
    assert_eq!(tour_length(&[0, 2, 1, 3], &dm), 16.0);
}

#[test]
fn penalized_tours_deposit_but_infinite_lengths_do_not() {
    let tour = [0usize, 1, 2, 3];

    // A penalized (finite) length still reinforces its edges.
    let mut tau = PheromoneMatrix::uniform(4, 1.0);
    let penalized = 1e6 + 8.0;
    assert_eq!(tau.deposit([(&tour[..], penalized)], 100.0), 1);
    assert!((tau.get(0, 1) - (1.0 + 100.0 / penalized)).abs() < 1e-15);

    // A literally infinite length is skipped.
    let mut tau = PheromoneMatrix::uniform(4, 1.0);
    assert_eq!(tau.deposit([(&tour[..], f64::INFINITY)], 100.0), 0);
    assert_eq!(tau, PheromoneMatrix::uniform(4, 1.0));
}

#[test]
fn colony_avoids_unreachable_edge() {
    let mut dm = rectangle();
    dm.set_symmetric(0, 1, DistanceMatrix::UNREACHABLE);

    let result = run_aco(&dm, &AcoConfig::default().with_seed(8)).expect("valid input");
    // The only tour avoiding 0-1 is 0-2-1-3 (length 16).
    assert!((result.best_length - 16.0).abs() < 1e-9);
}

#[test]
fn scaled_penalty_tracks_matrix_units() {
    let mut dm = rectangle();
    dm.set_symmetric(0, 1, DistanceMatrix::UNREACHABLE);
    dm.set_symmetric(0, 2, DistanceMatrix::UNREACHABLE);
    dm.set_symmetric(1, 3, DistanceMatrix::UNREACHABLE);

    // Every tour now uses at least one unreachable edge; the best uses one.
    let config = AcoConfig::default()
        .with_penalty(InfeasiblePenalty::ScaledToMaxFinite(10.0))
        .with_seed(4);
    let result = run_aco(&dm, &config).expect("valid input");
    assert!((result.best_length - (30.0 + 3.0 + 2.0 + 3.0)).abs() < 1e-9);
}

#[test]
fn single_site_is_trivial() {
    let dm = DistanceMatrix::new(1);
    let result = run_aco(&dm, &AcoConfig::default()).expect("valid input");

    assert_eq!(result.best_tour, vec![0]);
    assert_eq!(result.best_length, 0.0);
    assert_eq!(result.best_history.len(), 100);
    assert_eq!(result.legs(&dm).len(), 1);
}

#[test]
fn running_best_never_increases() {
    // Random-ish asymmetric 12-site instance.
    let mut dm = DistanceMatrix::new(12);
    for i in 0..12 {
        for j in 0..12 {
            if i != j {
                dm.set(i, j, ((i * 7 + j * 13) % 23 + 1) as f64);
            }
        }
    }
    let config = AcoConfig::default().with_ants(6).with_iterations(80).with_seed(17);
    let result = run_aco(&dm, &config).expect("valid input");

    let mut running = f64::INFINITY;
    for (i, &iter_best) in result.best_history.iter().enumerate() {
        running = running.min(iter_best);
        assert_eq!(result.best_so_far_history[i], running);
    }
    assert_eq!(running, result.best_length);
}

#[test]
fn mismatched_matrix_rejected() {
    assert!(DistanceMatrix::from_rows(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0]]).is_err());
}

#[test]
fn ankara_lakes_from_coordinates() {
    let lakes = [
        GeoPoint::new(39.7833, 32.7833),
        GeoPoint::new(39.8167, 32.8333),
        GeoPoint::new(40.4000, 32.9500),
        GeoPoint::new(40.1667, 32.2000),
        GeoPoint::new(40.2000, 32.5000),
        GeoPoint::new(39.9000, 33.1667),
    ];
    let dm = DistanceMatrix::from_points(&lakes);
    let config = AcoConfig::default().with_seed(42);
    let result = AcoRunner::run(&dm, &config).expect("valid input");

    let mut sorted = result.best_tour.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);

    let legs = result.legs(&dm);
    assert_eq!(legs.len(), 6);
    let total: f64 = legs.iter().map(|l| l.distance).sum();
    assert!((total - result.best_length).abs() < 1e-9);
}
