//! In-memory integration tests for the derived board view.

use super::helpers::{Board, board, seed};
use eyre::ensure;
use laundry_ai::item::{
    domain::{LaundryItem, LaundryStatus},
    services::UpdateStatusRequest,
    view::{ItemQuery, ItemSelection, ItemView},
};
use rstest::rstest;

const WARDROBE: [(&str, LaundryStatus); 4] = [
    ("White shirt", LaundryStatus::Dirty),
    ("Wool sweater", LaundryStatus::Washing),
    ("White towel", LaundryStatus::Folded),
    ("Bath mat", LaundryStatus::Dirty),
];

fn labels_in(view: &ItemView<'_>, status: LaundryStatus) -> Vec<String> {
    view.buckets()
        .get(status)
        .iter()
        .map(|item| item.label().as_str().to_owned())
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_groups_refreshed_items_by_status(board: Board) -> eyre::Result<()> {
    seed(&board.store, &WARDROBE).await?;
    let items = board.store.items();

    let view = ItemView::derive(&items, &ItemQuery::default(), &ItemSelection::new());

    ensure!(labels_in(&view, LaundryStatus::Dirty) == vec!["White shirt", "Bath mat"]);
    ensure!(labels_in(&view, LaundryStatus::Washing) == vec!["Wool sweater"]);
    ensure!(labels_in(&view, LaundryStatus::Drying).is_empty());
    ensure!(labels_in(&view, LaundryStatus::Clean).is_empty());
    ensure!(labels_in(&view, LaundryStatus::Folded) == vec!["White towel"]);
    ensure!(view.total_filtered() == WARDROBE.len());
    Ok(())
}

#[rstest]
#[case("white", 2)]
#[case("  WHITE  ", 2)]
#[case("mat", 1)]
#[case("xyz", 0)]
#[case("   ", 4)]
#[tokio::test(flavor = "multi_thread")]
async fn board_search_counts(
    board: Board,
    #[case] raw: &str,
    #[case] expected: usize,
) -> eyre::Result<()> {
    seed(&board.store, &WARDROBE).await?;
    let items = board.store.items();

    let view = ItemView::derive(&items, &ItemQuery::new(raw), &ItemSelection::new());

    ensure!(view.total_filtered() == expected, "query {raw:?} matched {}", view.total_filtered());
    ensure!(view.buckets().iter().count() == LaundryStatus::ALL.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_change_moves_item_between_buckets(board: Board) -> eyre::Result<()> {
    seed(&board.store, &WARDROBE).await?;
    let sweater = board
        .store
        .items()
        .into_iter()
        .find(|item| item.label().as_str() == "Wool sweater")
        .ok_or_else(|| eyre::eyre!("sweater missing"))?;

    board
        .store
        .update_status(UpdateStatusRequest::new(sweater.id(), LaundryStatus::Drying))
        .await?;
    let items = board.store.items();
    let view = ItemView::derive(&items, &ItemQuery::new("wool"), &ItemSelection::new());

    ensure!(labels_in(&view, LaundryStatus::Washing).is_empty());
    ensure!(labels_in(&view, LaundryStatus::Drying) == vec!["Wool sweater"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn selection_is_pruned_after_delete(board: Board) -> eyre::Result<()> {
    seed(&board.store, &WARDROBE).await?;
    let mut selection: ItemSelection = board.store.items().iter().map(LaundryItem::id).collect();
    let first = board
        .store
        .items()
        .first()
        .map(LaundryItem::id)
        .ok_or_else(|| eyre::eyre!("board is empty"))?;

    board.store.delete(first).await;
    let items = board.store.items();
    selection.retain_known(&items);

    let view = ItemView::derive(&items, &ItemQuery::default(), &selection);
    ensure!(view.selected().len() == WARDROBE.len() - 1);
    ensure!(!selection.contains(first));
    Ok(())
}
