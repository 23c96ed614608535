//! Property tests over random matrices and seeds.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp::distance::DistanceMatrix;
use u_tsp::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use u_tsp::hill_climbing::{HillClimbingConfig, HillClimbingRunner, HillClimbingVariant};
use u_tsp::sa::{SaConfig, SaRunner};
use u_tsp::tabu::{TabuConfig, TabuRunner};
use u_tsp::tour::{neighborhood_size, neighbors, random_permutation, tour_cost, Tour};

fn matrix_strategy(min: usize, max: usize) -> impl Strategy<Value = DistanceMatrix> {
    (min..=max).prop_flat_map(|n| {
        prop::collection::vec(0.0f64..100.0, n * n).prop_map(move |mut data| {
            for i in 0..n {
                data[i * n + i] = 0.0;
            }
            DistanceMatrix::from_data(n, data).expect("non-negative finite data")
        })
    })
}

fn reference_cost(cities: &[usize], dm: &DistanceMatrix) -> f64 {
    let n = cities.len();
    (0..n).map(|k| dm.get(cities[k], cities[(k + 1) % n])).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_permutation_is_permutation(n in 0usize..60, seed in any::<u64>()) {
        let mut perm = random_permutation(n, &mut StdRng::seed_from_u64(seed));
        perm.sort_unstable();
        prop_assert_eq!(perm, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn cost_matches_reference(dm in matrix_strategy(1, 12), seed in any::<u64>()) {
        let tour = Tour::random(&dm, &mut StdRng::seed_from_u64(seed));
        prop_assert!((tour.cost() - reference_cost(tour.cities(), &dm)).abs() < 1e-9);
        prop_assert!((tour_cost(tour.cities(), &dm) - tour.cost()).abs() < 1e-12);
    }

    #[test]
    fn neighborhood_count_and_validity(dm in matrix_strategy(1, 10), seed in any::<u64>()) {
        let n = dm.size();
        let tour = Tour::random(&dm, &mut StdRng::seed_from_u64(seed));
        let hood = neighbors(&tour, &dm);
        let expected = if n >= 3 { (n - 1) * (n - 2) / 2 } else { 0 };
        prop_assert_eq!(hood.len(), expected);
        prop_assert_eq!(hood.len(), neighborhood_size(n));
        for nb in &hood {
            prop_assert!(nb.tour.is_valid_permutation(n));
            prop_assert!((nb.tour.cost() - reference_cost(nb.tour.cities(), &dm)).abs() < 1e-9);
        }
    }

    #[test]
    fn hill_best_never_worse_than_start(dm in matrix_strategy(3, 9), seed in any::<u64>(), max in 1usize..50) {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Tour::random(&dm, &mut rng);
        let start_cost = start.cost();
        let config = HillClimbingConfig::default().with_max_iterations(max);
        let result = HillClimbingRunner::run_from(&dm, &config, start, &mut rng).unwrap();
        prop_assert!(result.cost() <= start_cost + 1e-9);
        prop_assert!(result.iterations <= max);
        prop_assert!((result.cost() - reference_cost(result.tour.cities(), &dm)).abs() < 1e-9);
    }

    #[test]
    fn hill_random_runs_full_budget(dm in matrix_strategy(3, 9), seed in any::<u64>(), max in 1usize..200) {
        let config = HillClimbingConfig::default()
            .with_variant(HillClimbingVariant::RandomNeighbor)
            .with_max_iterations(max)
            .with_seed(seed);
        let result = HillClimbingRunner::run(&dm, &config).unwrap();
        prop_assert_eq!(result.iterations, max);
        prop_assert!(result.tour.is_valid_permutation(dm.size()));
    }

    #[test]
    fn tabu_returns_valid_best(dm in matrix_strategy(3, 8), seed in any::<u64>(), size in 1usize..8) {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Tour::random(&dm, &mut rng);
        let start_cost = start.cost();
        let config = TabuConfig::default().with_max_iterations(30).with_tabu_size(size);
        let result = TabuRunner::run_from(&dm, &config, start).unwrap();
        prop_assert!(result.cost() <= start_cost + 1e-9);
        prop_assert!(result.iterations <= 30);
        prop_assert!(result.tour.is_valid_permutation(dm.size()));
        prop_assert!((result.cost() - reference_cost(result.tour.cities(), &dm)).abs() < 1e-9);
    }

    #[test]
    fn sa_returns_valid_best(dm in matrix_strategy(3, 9), seed in any::<u64>(), t in 0.001f64..1000.0) {
        let config = SaConfig::default().with_max_iterations(300).with_seed(seed);
        let result = SaRunner::run(&dm, &config, &|_: usize| t).unwrap();
        prop_assert_eq!(result.iterations, 300);
        prop_assert!(result.tour.is_valid_permutation(dm.size()));
        prop_assert!((result.cost() - reference_cost(result.tour.cities(), &dm)).abs() < 1e-9);
    }

    #[test]
    fn exhaustive_not_beaten_by_local_search(dm in matrix_strategy(2, 6), seed in any::<u64>()) {
        let exact = ExhaustiveRunner::run(&dm, &ExhaustiveConfig::default()).unwrap();
        let tabu = TabuRunner::run(&dm, &TabuConfig::default().with_max_iterations(40).with_seed(seed)).unwrap();
        prop_assert!(exact.cost() <= tabu.cost() + 1e-9);
    }
}

#[test]
fn single_location_is_trivial_everywhere() {
    let dm = DistanceMatrix::from_data(1, vec![0.0]).unwrap();
    let exhaustive = ExhaustiveRunner::run(&dm, &ExhaustiveConfig::default()).unwrap();
    let hill = HillClimbingRunner::run(&dm, &HillClimbingConfig::default().with_seed(1)).unwrap();
    let tabu = TabuRunner::run(&dm, &TabuConfig::default().with_seed(1)).unwrap();
    let sa = SaRunner::run(&dm, &SaConfig::default().with_seed(1), &|_: usize| 1.0).unwrap();
    for result in [exhaustive, hill, tabu, sa] {
        assert_eq!(result.tour.cities(), &[0]);
        assert_eq!(result.cost(), 0.0);
    }
    assert!(neighbors(&Tour::identity(&dm), &dm).is_empty());
}

#[test]
fn four_city_scenario_optimum() {
    let dm = DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, 4.0, 5.0],
        vec![2.0, 4.0, 0.0, 6.0],
        vec![3.0, 5.0, 6.0, 0.0],
    ])
    .unwrap();
    let result = ExhaustiveRunner::run(&dm, &ExhaustiveConfig::default().with_max_iterations(24)).unwrap();
    assert!((result.cost() - 14.0).abs() < 1e-10);
}
