//! Property-based tests for the sampling and descriptive-statistics core
//!
//! Invariants checked for arbitrary rosters, seeds, and sample sizes:
//! sampling discipline (size, distinctness, membership), mean bounds, and
//! filter identity.

use proptest::prelude::*;
use solstat::conditions;
use solstat::sampler::Sampler;
use solstat::stats;
use solstat::student::Student;

fn roster(scores: &[i32]) -> Vec<Student> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| Student {
            id: i as u32 + 1,
            sex: if i % 2 == 0 { "M" } else { "F" }.to_string(),
            teacher: "Smith".to_string(),
            status: String::new(),
            score,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_sample_has_k_distinct_members_of_the_pool(
        pool_size in 1usize..200,
        k_frac in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let pool: Vec<u32> = (0..pool_size as u32).collect();
        let k = ((pool_size as f64) * k_frac) as usize;
        let mut sampler = Sampler::seeded(seed);
        let drawn = sampler.sample(&pool, k).unwrap();

        prop_assert_eq!(drawn.len(), k);
        let mut distinct = drawn.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), k);
        prop_assert!(drawn.iter().all(|x| (*x as usize) < pool_size));
    }

    #[test]
    fn prop_oversized_sample_always_errors(
        pool_size in 0usize..50,
        excess in 1usize..10,
        seed in any::<u64>(),
    ) {
        let pool: Vec<u32> = (0..pool_size as u32).collect();
        let mut sampler = Sampler::seeded(seed);
        prop_assert!(sampler.sample(&pool, pool_size + excess).is_err());
    }

    #[test]
    fn prop_mean_lies_within_score_bounds(scores in prop::collection::vec(-1000i32..1000, 1..100)) {
        let students = roster(&scores);
        let refs: Vec<&Student> = students.iter().collect();
        let mean = stats::mean(&refs, Student::sol_score).unwrap();

        let min = *scores.iter().min().unwrap() as f64;
        let max = *scores.iter().max().unwrap() as f64;
        prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
    }

    #[test]
    fn prop_std_dev_is_nonnegative(scores in prop::collection::vec(-1000i32..1000, 2..100)) {
        let students = roster(&scores);
        let refs: Vec<&Student> = students.iter().collect();
        let sd = stats::sample_std_dev(&refs, Student::sol_score).unwrap();
        prop_assert!(sd >= 0.0);
    }

    #[test]
    fn prop_empty_condition_list_is_identity(scores in prop::collection::vec(0i32..700, 0..50)) {
        let students = roster(&scores);
        let refs: Vec<&Student> = students.iter().collect();
        let kept = conditions::filter(&refs, &[]);
        prop_assert_eq!(kept, refs);
    }

    #[test]
    fn prop_sex_conditions_partition_any_roster(scores in prop::collection::vec(0i32..700, 0..50)) {
        let students = roster(&scores);
        let refs: Vec<&Student> = students.iter().collect();
        let males = conditions::filter(&refs, &[conditions::is_male]).len();
        let females = conditions::filter(&refs, &[conditions::is_female]).len();
        prop_assert_eq!(males + females, refs.len());
    }
}
