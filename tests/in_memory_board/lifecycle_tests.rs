//! In-memory integration tests for item lifecycle operations.

use super::helpers::{Board, board};
use eyre::{bail, ensure};
use laundry_ai::item::{
    adapters::memory::TAG_IN_USE_DETAIL,
    domain::{CREATION_NOTE, HistoryEntry, ItemId, LaundryStatus},
    services::{CreateItemRequest, ItemStoreError, UpdateDetailsRequest, UpdateStatusRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_item_has_dirty_status_and_one_entry(board: Board) -> eyre::Result<()> {
    let item = board.store.create(CreateItemRequest::new("Sample Item")).await?;

    ensure!(item.status() == LaundryStatus::Dirty);
    ensure!(item.history().len() == 1);
    let entry = item
        .history()
        .first()
        .ok_or_else(|| eyre::eyre!("creation entry missing"))?;
    ensure!(entry.status() == LaundryStatus::Dirty);
    ensure!(entry.note() == Some(CREATION_NOTE));
    ensure!(board.store.items() == vec![item]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_walk_through_the_workflow_keeps_full_history(board: Board) -> eyre::Result<()> {
    let item = board.store.create(CreateItemRequest::new("Bed sheet")).await?;
    let id = item.id();

    for status in LaundryStatus::ALL.into_iter().skip(1) {
        board
            .store
            .update_status(UpdateStatusRequest::new(id, status).with_note(format!("now {status}")))
            .await?;
    }

    let cached = board
        .store
        .get(id)
        .ok_or_else(|| eyre::eyre!("item missing after refresh"))?;
    let statuses: Vec<LaundryStatus> = cached.history().iter().map(HistoryEntry::status).collect();
    ensure!(statuses == LaundryStatus::ALL.to_vec(), "history was {statuses:?}");
    ensure!(cached.status() == LaundryStatus::Folded);
    let ordered = cached
        .history()
        .windows(2)
        .all(|pair| match pair {
            [earlier, later] => earlier.created_at() <= later.created_at(),
            _ => true,
        });
    ensure!(ordered, "history timestamps decreased");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn folded_item_can_return_to_dirty(board: Board) -> eyre::Result<()> {
    let item = board
        .store
        .create(CreateItemRequest::new("Jeans").with_status(LaundryStatus::Folded))
        .await?;

    let updated = board
        .store
        .update_status(UpdateStatusRequest::new(item.id(), LaundryStatus::Dirty))
        .await?;

    ensure!(updated.status() == LaundryStatus::Dirty);
    ensure!(updated.history().len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_an_unknown_item_reports_not_found(board: Board) -> eyre::Result<()> {
    let missing = ItemId::new(12)?;
    match board
        .store
        .update_status(UpdateStatusRequest::new(missing, LaundryStatus::Clean))
        .await
    {
        Err(err @ ItemStoreError::Authority { .. }) => {
            ensure!(err.user_message() == "Item not found");
            Ok(())
        }
        other => bail!("expected authority error, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_tag_is_rejected_with_detail(board: Board) -> eyre::Result<()> {
    board
        .store
        .create(CreateItemRequest::new("Shirt").with_tag_id("T-1"))
        .await?;
    let towel = board
        .store
        .create(CreateItemRequest::new("Towel").with_tag_id("T-2"))
        .await?;

    let duplicate = board
        .store
        .create(CreateItemRequest::new("Blouse").with_tag_id("T-1"))
        .await;
    let retag = board
        .store
        .update_details(UpdateDetailsRequest::new(towel.id(), "Towel").with_tag_id("T-1"))
        .await;

    for result in [duplicate, retag] {
        match result {
            Err(err) => ensure!(err.user_message() == TAG_IN_USE_DETAIL),
            Ok(item) => bail!("expected rejection, got {item:?}"),
        }
    }
    ensure!(board.store.items().len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_item_after_refresh(board: Board) -> eyre::Result<()> {
    let shirt = board.store.create(CreateItemRequest::new("Shirt")).await?;
    let towel = board.store.create(CreateItemRequest::new("Towel")).await?;

    board.store.delete(shirt.id()).await;
    ensure!(board.store.items() == vec![towel.clone()]);

    board.store.delete(shirt.id()).await;
    ensure!(board.store.items() == vec![towel]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn offline_authority_degrades_board_to_empty(board: Board) -> eyre::Result<()> {
    board.store.create(CreateItemRequest::new("Shirt")).await?;
    board.authority.set_offline(true)?;

    let failed = board.store.create(CreateItemRequest::new("Towel")).await;
    ensure!(matches!(failed, Err(ItemStoreError::Authority { .. })));
    ensure!(board.store.items().len() == 1, "mutation failure kept the snapshot");

    board.store.delete(ItemId::new(1)?).await;
    ensure!(board.store.items().is_empty(), "listing failure empties the snapshot");

    board.authority.set_offline(false)?;
    ensure!(board.store.refresh().await.len() == 1);
    Ok(())
}
