//! Tests for the block store: mutation, selection, and reordering.

use crate::core::{BlockKind, BlockPatch, BlockProps, BlockStore};

#[test]
fn add_appends_in_order() {
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    let b = store.add(BlockKind::Image);
    let c = store.add(BlockKind::Survey);

    assert_eq!(store.len(), 3);
    let ids: Vec<_> = store.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

#[test]
fn add_then_remove_restores_previous_state() {
    let mut store = BlockStore::new();
    store.add(BlockKind::Text);
    let snapshot: Vec<_> = store.blocks().to_vec();

    let id = store.add(BlockKind::Reaction);
    store.remove(id);

    assert_eq!(store.blocks(), snapshot.as_slice());
}

#[test]
fn remove_nonexistent_id_is_a_no_op() {
    let mut store = BlockStore::new();
    store.add(BlockKind::Text);
    store.add(BlockKind::Image);
    let snapshot: Vec<_> = store.blocks().to_vec();

    store.remove(crate::core::BlockId::new());

    assert_eq!(store.blocks(), snapshot.as_slice());
}

#[test]
fn remove_selected_block_clears_selection() {
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    let b = store.add(BlockKind::Image);

    store.select(a);
    assert_eq!(store.selected(), Some(a));

    store.remove(a);
    assert_eq!(store.selected(), None);

    // removing a non-selected block leaves the selection alone
    store.select(b);
    store.remove(crate::core::BlockId::new());
    assert_eq!(store.selected(), Some(b));
}

#[test]
fn select_unknown_id_is_a_no_op() {
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    store.select(a);

    store.select(crate::core::BlockId::new());
    assert_eq!(store.selected(), Some(a));

    store.clear_selection();
    assert_eq!(store.selected(), None);
}

#[test]
fn update_merges_into_matching_block() {
    let mut store = BlockStore::new();
    let id = store.add(BlockKind::Text);

    store.update(id, &BlockPatch::new().with_content("Hello"));

    match &store.get(id).unwrap().props {
        BlockProps::Text { content, .. } => assert_eq!(content, "Hello"),
        other => panic!("expected text props, got {other:?}"),
    }
}

#[test]
fn update_absent_id_is_a_no_op() {
    let mut store = BlockStore::new();
    store.add(BlockKind::Text);
    let snapshot: Vec<_> = store.blocks().to_vec();

    store.update(
        crate::core::BlockId::new(),
        &BlockPatch::new().with_content("nobody home"),
    );

    assert_eq!(store.blocks(), snapshot.as_slice());
}

#[test]
fn reorder_permutes_without_changing_content() {
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    let b = store.add(BlockKind::Image);
    let c = store.add(BlockKind::Reaction);
    let before: Vec<_> = store.blocks().to_vec();

    store.reorder(&[c, a, b]);

    let ids: Vec<_> = store.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![c, a, b]);
    for block in &before {
        assert_eq!(store.get(block.id), Some(block));
    }
}

#[test]
fn reorder_does_not_validate_the_id_set() {
    // The caller owns supplying a permutation; a short list silently drops
    // the blocks it leaves out.
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    let b = store.add(BlockKind::Image);

    store.select(b);
    store.reorder(&[a]);

    assert_eq!(store.len(), 1);
    assert!(store.contains(a));
    assert!(!store.contains(b));
    // the dropped block was selected; the pointer must not dangle
    assert_eq!(store.selected(), None);
}

#[test]
fn reorder_skips_ids_that_match_nothing() {
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    let b = store.add(BlockKind::Image);

    store.reorder(&[crate::core::BlockId::new(), b, a]);

    let ids: Vec<_> = store.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![b, a]);
}

#[test]
fn duplicate_inserts_copy_after_original() {
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    let b = store.add(BlockKind::Image);
    store.update(a, &BlockPatch::new().with_content("copy me"));

    let copy = store.duplicate(a).expect("duplicate existing block");

    assert_ne!(copy, a);
    let ids: Vec<_> = store.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![a, copy, b]);
    assert_eq!(store.get(copy).unwrap().props, store.get(a).unwrap().props);
}

#[test]
fn duplicate_absent_id_returns_none() {
    let mut store = BlockStore::new();
    store.add(BlockKind::Text);
    assert_eq!(store.duplicate(crate::core::BlockId::new()), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn clear_empties_sequence_and_selection() {
    let mut store = BlockStore::new();
    let a = store.add(BlockKind::Text);
    store.select(a);

    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.selected(), None);
}
