//! Given steps for item lifecycle BDD scenarios.

use super::world::{ItemLifecycleWorld, run_async};
use eyre::WrapErr;
use laundry_ai::item::services::CreateItemRequest;
use rstest_bdd_macros::given;

#[given("an empty laundry board")]
fn empty_board(world: &mut ItemLifecycleWorld) {
    world.current = None;
    world.last_error = None;
}

#[given(r#"an item labelled "{label}" exists"#)]
fn item_exists(world: &mut ItemLifecycleWorld, label: String) -> Result<(), eyre::Report> {
    let created = run_async(world.store.create(CreateItemRequest::new(label)))
        .wrap_err("create item in scenario setup")?;
    world.current = Some(created);
    Ok(())
}

#[given(r#"a tagged item labelled "{label}" with tag "{tag}" exists"#)]
fn tagged_item_exists(
    world: &mut ItemLifecycleWorld,
    label: String,
    tag: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .store
            .create(CreateItemRequest::new(label).with_tag_id(tag)),
    )
    .wrap_err("create tagged item in scenario setup")?;
    world.current = Some(created);
    Ok(())
}

#[given("the authority fails the next listing")]
fn authority_fails_next_listing(world: &mut ItemLifecycleWorld) -> Result<(), eyre::Report> {
    world
        .authority
        .fail_next_listings(1)
        .wrap_err("arm listing failure")
}
