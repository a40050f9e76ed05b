/// Property-style tests over randomly generated times.
///
/// A fixed seed keeps every run reproducible; a failure prints the offending
/// input so it can be turned into a scenario test.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use timestat::{parse_list, stat, summarize, to_hms, to_seconds};

const SEED: u64 = 0x7153_7a7a;
const ITERATIONS: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

fn random_list(rng: &mut StdRng) -> Vec<u64> {
    let len = rng.gen_range(1..=25);
    (0..len).map(|_| rng.gen_range(0..400_000)).collect()
}

fn join(times: &[u64]) -> String {
    times.iter().map(|&t| to_hms(t)).collect::<Vec<_>>().join(", ")
}

#[test]
fn test_round_trip_random_values() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let x: u64 = rng.gen_range(0..10_000_000_000);
        assert_eq!(to_seconds(&to_hms(x)).unwrap(), x, "round trip failed for {x}");
    }
}

#[test]
fn test_stat_is_order_independent() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let mut times = random_list(&mut rng);
        let expected = stat(&join(&times)).unwrap();
        times.shuffle(&mut rng);
        let input = join(&times);
        assert_eq!(stat(&input).unwrap(), expected, "order changed result for {input}");
    }
}

#[test]
fn test_parse_list_inverts_join() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let times = random_list(&mut rng);
        assert_eq!(parse_list(&join(&times)).unwrap(), times);
    }
}

#[test]
fn test_summary_bounds() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let times = random_list(&mut rng);
        let summary = summarize(&times).unwrap();
        let min = *times.iter().min().unwrap();
        let max = *times.iter().max().unwrap();

        assert_eq!(summary.range, max - min);
        assert!((min..=max).contains(&summary.average), "average out of bounds for {times:?}");
        assert!((min..=max).contains(&summary.median), "median out of bounds for {times:?}");
        if times.len() % 2 == 1 {
            assert!(times.contains(&summary.median), "odd median must be an element of {times:?}");
        }
    }
}

#[test]
fn test_single_element_law() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let t = to_hms(rng.gen_range(0..1_000_000));
        assert_eq!(
            stat(&t).unwrap(),
            format!("Range: 00|00|00 Average: {t} Median: {t}")
        );
    }
}
