//! Behavioural tests for example-data crate.
//!
//! These tests validate deterministic generation and argument validation
//! against Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use example_data::{DOMAINS, ExampleUserSeed, GenerationError, generate_example_users};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the requested count and generation results.
#[derive(Default, ScenarioState)]
struct World {
    count: Slot<u32>,
    generation_result: Slot<Result<Vec<ExampleUserSeed>, GenerationError>>,
    second_generation: Slot<Vec<ExampleUserSeed>>,
}

impl World {
    fn count(&self) -> u32 {
        self.count.get().expect("count should be set")
    }

    fn users(&self) -> Vec<ExampleUserSeed> {
        self.generation_result
            .get()
            .expect("users should be generated")
            .expect("generation should succeed")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a user count of {count:u32}")]
fn a_user_count_of(world: &World, count: u32) {
    world.count.set(count);
}

// ============================================================================
// When steps
// ============================================================================

#[when("users are generated")]
fn users_are_generated(world: &World) {
    world
        .generation_result
        .set(generate_example_users(world.count()));
}

#[when("users are generated twice")]
fn users_are_generated_twice(world: &World) {
    let first = generate_example_users(world.count());
    let second = generate_example_users(world.count()).expect("second generation");

    world.generation_result.set(first);
    world.second_generation.set(second);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both generations produce identical users")]
fn both_generations_produce_identical_users(world: &World) {
    let second = world
        .second_generation
        .get()
        .expect("second generation should be set");

    assert_eq!(world.users(), second, "Generations should be deterministic");
}

#[then("{expected:usize} users are produced")]
fn users_are_produced(world: &World, expected: usize) {
    let users = world.users();
    assert_eq!(users.len(), expected);
    for (index, user) in users.iter().enumerate() {
        let position = u32::try_from(index).expect("index fits in u32");
        assert_eq!(user.id, position + 1, "ids should be sequential");
    }
}

#[then("every email ends with a known domain")]
fn every_email_ends_with_a_known_domain(world: &World) {
    for user in world.users() {
        assert!(
            DOMAINS
                .iter()
                .any(|domain| user.email.ends_with(&format!("@{domain}"))),
            "Unexpected email domain: {}",
            user.email
        );
    }
}

#[then("every avatar URL is derived from the user id")]
fn every_avatar_url_is_derived_from_the_user_id(world: &World) {
    for user in world.users() {
        let expected = format!("https://i.pravatar.cc/150?img={}", user.id % 70 + 1);
        assert_eq!(user.avatar_url, expected);
    }
}

#[then("generation fails with an invalid argument error")]
fn generation_fails_with_an_invalid_argument_error(world: &World) {
    match world.generation_result.get() {
        Some(Err(GenerationError::InvalidArgument { count: 0 })) => {}
        other => panic!("Expected InvalidArgument, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generation reproduces the same dataset"
)]
fn generation_reproduces_the_same_dataset(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated users have sequential ids and derived fields"
)]
fn generated_users_have_sequential_ids_and_derived_fields(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "A zero count is rejected"
)]
fn a_zero_count_is_rejected(world: World) {
    let _ = world;
}
