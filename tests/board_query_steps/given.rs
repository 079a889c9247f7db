//! Given steps for board query BDD scenarios.

use super::world::{BoardQueryWorld, run_async};
use eyre::WrapErr;
use laundry_ai::item::{domain::LaundryStatus, services::CreateItemRequest};
use rstest_bdd_macros::given;

#[given(r#"a board holding "{label}" as "{status}""#)]
fn board_holding(
    world: &mut BoardQueryWorld,
    label: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed =
        LaundryStatus::try_from(status.as_str()).wrap_err("parse status in scenario setup")?;
    run_async(
        world
            .store
            .create(CreateItemRequest::new(label).with_status(parsed)),
    )
    .wrap_err("create item in scenario setup")?;
    world.snapshot = world.store.items();
    Ok(())
}
