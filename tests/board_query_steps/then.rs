//! Then steps for board query BDD scenarios.

use super::world::BoardQueryWorld;
use eyre::WrapErr;
use laundry_ai::item::domain::LaundryStatus;
use rstest_bdd_macros::then;

fn parse_status(raw: &str) -> Result<LaundryStatus, eyre::Report> {
    LaundryStatus::try_from(raw).wrap_err("parse expected status in scenario")
}

#[then("every status column is empty")]
fn every_column_empty(world: &BoardQueryWorld) -> Result<(), eyre::Report> {
    for status in LaundryStatus::ALL {
        let labels = world.column(status);
        if !labels.is_empty() {
            return Err(eyre::eyre!("expected {status} to be empty, found {labels:?}"));
        }
    }
    Ok(())
}

#[then(r#"the "{status}" column lists "{label}""#)]
fn column_lists(world: &BoardQueryWorld, status: String, label: String) -> Result<(), eyre::Report> {
    let labels = world.column(parse_status(&status)?);
    if labels != [label.clone()] {
        return Err(eyre::eyre!("expected {status} to list only {label:?}, found {labels:?}"));
    }
    Ok(())
}

#[then(r#"the "{status}" column is empty"#)]
fn column_is_empty(world: &BoardQueryWorld, status: String) -> Result<(), eyre::Report> {
    let labels = world.column(parse_status(&status)?);
    if !labels.is_empty() {
        return Err(eyre::eyre!("expected {status} to be empty, found {labels:?}"));
    }
    Ok(())
}

#[then("the filtered total is {count:usize}")]
fn filtered_total_is(world: &BoardQueryWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.filtered_total();
    if found != count {
        return Err(eyre::eyre!("expected {count} matching items, found {found}"));
    }
    Ok(())
}
