//! Then steps for item lifecycle BDD scenarios.

use super::world::ItemLifecycleWorld;
use eyre::WrapErr;
use laundry_ai::item::domain::LaundryStatus;
use rstest_bdd_macros::then;

#[then(r#"the item status is "{status}""#)]
fn item_status_is(world: &ItemLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = LaundryStatus::try_from(status.as_str())
        .wrap_err("parse expected status in scenario")?;
    let item = world.current()?;
    if item.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            item.status()
        ));
    }
    Ok(())
}

#[then("the item history length is {count:usize}")]
fn item_history_length_is(world: &ItemLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.current()?.history().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} history entries, found {found}"));
    }
    Ok(())
}

#[then(r#"the latest history note is "{note}""#)]
fn latest_history_note_is(world: &ItemLifecycleWorld, note: String) -> Result<(), eyre::Report> {
    let latest = world
        .current()?
        .latest_entry()
        .ok_or_else(|| eyre::eyre!("item has no history"))?;
    if latest.note() != Some(note.as_str()) {
        return Err(eyre::eyre!(
            "expected note {note:?}, found {:?}",
            latest.note()
        ));
    }
    Ok(())
}

#[then("the board item count is {count:usize}")]
fn board_item_count_is(world: &ItemLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.store.items().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} items on the board, found {found}"));
    }
    Ok(())
}

#[then(r#"the operation fails with message "{message}""#)]
fn operation_fails_with_message(
    world: &ItemLifecycleWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;
    let found = err.user_message();
    if found != message {
        return Err(eyre::eyre!("expected message {message:?}, found {found:?}"));
    }
    Ok(())
}

#[then("the authority received {count:usize} requests")]
fn authority_received_requests(
    world: &ItemLifecycleWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let found = world
        .authority
        .request_count()
        .wrap_err("read authority request count")?;
    if found != count {
        return Err(eyre::eyre!("expected {count} authority requests, found {found}"));
    }
    Ok(())
}
