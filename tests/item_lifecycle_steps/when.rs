//! When steps for item lifecycle BDD scenarios.

use super::world::{ItemLifecycleWorld, run_async};
use eyre::WrapErr;
use laundry_ai::item::{
    domain::{ItemId, LaundryStatus},
    services::{CreateItemRequest, UpdateStatusRequest},
};
use rstest_bdd_macros::when;

#[when(r#"an item labelled "{label}" is created"#)]
fn item_is_created(world: &mut ItemLifecycleWorld, label: String) {
    let result = run_async(world.store.create(CreateItemRequest::new(label)));
    world.record(result);
}

#[when(r#"a tagged item labelled "{label}" with tag "{tag}" is created"#)]
fn tagged_item_is_created(world: &mut ItemLifecycleWorld, label: String, tag: String) {
    let result = run_async(
        world
            .store
            .create(CreateItemRequest::new(label).with_tag_id(tag)),
    );
    world.record(result);
}

#[when(r#"the item moves to "{status}" with note "{note}""#)]
fn item_moves_with_note(
    world: &mut ItemLifecycleWorld,
    status: String,
    note: String,
) -> Result<(), eyre::Report> {
    let target = LaundryStatus::try_from(status.as_str())
        .wrap_err("parse target status in scenario")?;
    let id = world.current()?.id();
    let result = run_async(
        world
            .store
            .update_status(UpdateStatusRequest::new(id, target).with_note(note)),
    );
    world.record(result);
    Ok(())
}

#[when("item {raw_id:i64} is deleted")]
fn item_is_deleted(world: &mut ItemLifecycleWorld, raw_id: i64) -> Result<(), eyre::Report> {
    let id = ItemId::new(raw_id).wrap_err("build item identifier in scenario")?;
    run_async(world.store.delete(id));
    Ok(())
}

#[when("the board is refreshed")]
fn board_is_refreshed(world: &mut ItemLifecycleWorld) {
    run_async(world.store.refresh());
}
