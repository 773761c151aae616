use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[test]
fn std_rng_repeats_its_sequence_for_the_same_seed() {
	let mut first = StdRng::seed_from_u64(1337);
	let mut second = StdRng::seed_from_u64(1337);

	let first_values: Vec<usize> = (0..16).map(|_| first.random_range(0..100)).collect();
	let second_values: Vec<usize> = (0..16).map(|_| second.random_range(0..100)).collect();

	assert_eq!(first_values, second_values);
}

#[test]
fn random_range_with_single_element_always_returns_it() {
	let mut rng = StdRng::seed_from_u64(42);

	for _ in 0..100 {
		assert_eq!(0, rng.random_range(0..1usize));
	}
}

#[test]
fn serde_internally_tagged_enums_reject_newtype_variants_of_primitives() {
	#[derive(Serialize)]
	#[serde(tag = "type")]
	enum Tagged {
		Newtype(String),
	}

	serde_json::to_string(&Tagged::Newtype("Amy".to_string()))
		.expect_err("Serialized a newtype variant of a string although it shouldn't");
}
