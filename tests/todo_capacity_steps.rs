//! Behaviour tests for the per-card todo capacity rule.

#[path = "todo_capacity_steps/mod.rs"]
mod todo_capacity_steps;

use rstest_bdd_macros::scenario;
use todo_capacity_steps::world::{TodoWorld, world};

#[scenario(
    path = "tests/features/todo_capacity.feature",
    name = "Fill a card up to its limit"
)]
#[tokio::test(flavor = "multi_thread")]
async fn fill_card_to_limit(world: TodoWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/todo_capacity.feature",
    name = "Reject a todo on a full card"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_todo_on_full_card(world: TodoWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/todo_capacity.feature",
    name = "Deleting a todo frees a slot"
)]
#[tokio::test(flavor = "multi_thread")]
async fn delete_frees_slot(world: TodoWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/todo_capacity.feature",
    name = "Listing an empty card reports nothing found"
)]
#[tokio::test(flavor = "multi_thread")]
async fn empty_card_listing_not_found(world: TodoWorld) {
    let _ = world;
}
