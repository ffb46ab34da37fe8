//! Behavioural tests for staff attribute assignment.
//!
//! These tests validate reproducible seeding, the bounds of assigned
//! attributes, and department parsing against Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use staff_attributes::{
    AttributeError, AttributeSource, Department, RandomAttributes, Rating, StaffAttributes,
};

/// Test world holding the source, assignments, and parse results.
#[derive(Default, ScenarioState)]
struct World {
    seed: Slot<u64>,
    assigned: Slot<Vec<StaffAttributes>>,
    reassigned: Slot<Vec<StaffAttributes>>,
    parsed: Slot<Result<Department, AttributeError>>,
}

impl World {
    fn seed(&self) -> u64 {
        self.seed.get().expect("seed should be set")
    }

    fn assigned(&self) -> Vec<StaffAttributes> {
        self.assigned.get().expect("attributes should be assigned")
    }

    fn parsed(&self) -> Result<Department, AttributeError> {
        self.parsed.get().expect("department should be parsed")
    }
}

fn assign_many(seed: u64, count: usize) -> Vec<StaffAttributes> {
    let mut source = RandomAttributes::seeded(seed);
    (0..count).map(|_| source.assign()).collect()
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a random attribute source seeded with {seed:u64}")]
fn a_random_attribute_source_seeded_with(world: &World, seed: u64) {
    world.seed.set(seed);
}

// ============================================================================
// When steps
// ============================================================================

#[when("{count:usize} records are assigned attributes")]
fn records_are_assigned_attributes(world: &World, count: usize) {
    world.assigned.set(assign_many(world.seed(), count));
}

#[when("the same seed assigns {count:usize} records again")]
fn the_same_seed_assigns_records_again(world: &World, count: usize) {
    world.reassigned.set(assign_many(world.seed(), count));
}

#[when("the department \"{label}\" is parsed")]
fn the_department_is_parsed(world: &World, label: String) {
    world.parsed.set(label.parse::<Department>());
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both assignments are identical")]
fn both_assignments_are_identical(world: &World) {
    let second = world.reassigned.get().expect("second assignment set");
    assert_eq!(world.assigned(), second, "seeded assignment should repeat");
}

#[then("every department is one of the six fixed departments")]
fn every_department_is_one_of_the_six_fixed_departments(world: &World) {
    for attributes in world.assigned() {
        assert!(
            Department::ALL.contains(&attributes.department),
            "unexpected department {:?}",
            attributes.department
        );
    }
}

#[then("every rating is between 1 and 5")]
fn every_rating_is_between_1_and_5(world: &World) {
    for attributes in world.assigned() {
        let value = attributes.rating.get();
        assert!(
            (Rating::MIN..=Rating::MAX).contains(&value),
            "rating out of range: {value}"
        );
    }
}

#[then("the parsed department is Engineering")]
fn the_parsed_department_is_engineering(world: &World) {
    assert_eq!(world.parsed(), Ok(Department::Engineering));
}

#[then("parsing fails with an unknown department error")]
fn parsing_fails_with_an_unknown_department_error(world: &World) {
    match world.parsed() {
        Err(AttributeError::UnknownDepartment { .. }) => {}
        other => panic!("Expected UnknownDepartment, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/staff_attributes.feature",
    name = "Seeded assignment is reproducible"
)]
fn seeded_assignment_is_reproducible(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/staff_attributes.feature",
    name = "Assigned attributes stay within the fixed sets"
)]
fn assigned_attributes_stay_within_the_fixed_sets(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/staff_attributes.feature",
    name = "Department labels parse regardless of case"
)]
fn department_labels_parse_regardless_of_case(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/staff_attributes.feature",
    name = "Unknown departments are rejected"
)]
fn unknown_departments_are_rejected(world: World) {
    let _ = world;
}
