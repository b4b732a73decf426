use std::borrow::Cow;

use grid_reorder::{
    BoundaryRule, GridError, DragPosition, Item, TileColor, default_items, flatten, line_count, locate,
    partition, reorder,
};

const RULES: [BoundaryRule; 2] = [BoundaryRule::Positional, BoundaryRule::InsertBefore];

fn numbered(len: usize) -> Vec<Item> {
    (0..len)
        .map(|index| {
            Item::new(
                format!("item-{index}"),
                index.to_string(),
                index as u32 + 1,
                TileColor::Gray,
            )
        })
        .collect()
}

fn ids(items: &[Item]) -> Vec<usize> {
    items
        .iter()
        .filter_map(|item| item.id.as_str().strip_prefix("item-")?.parse().ok())
        .collect()
}

fn orders_are_dense(items: &[Item]) -> bool {
    let mut orders: Vec<u32> = items.iter().map(|item| item.order).collect();
    orders.sort_unstable();
    orders.into_iter().eq(1..=items.len() as u32)
}

fn move_once(items: &[Item], from: (usize, usize), to: (usize, usize)) -> Vec<usize> {
    let moved = reorder(
        items,
        3,
        DragPosition::new(from.0, from.1),
        Some(DragPosition::new(to.0, to.1)),
        BoundaryRule::Positional,
    )
    .expect("valid move");
    ids(&moved)
}

#[test]
fn same_line_move_to_end_of_line() {
    let items = numbered(8);
    assert_eq!(move_once(&items, (0, 0), (0, 2)), [1, 2, 0, 3, 4, 5, 6, 7]);
}

#[test]
fn cross_line_move_to_head_of_first_line() {
    let items = numbered(8);
    assert_eq!(move_once(&items, (1, 0), (0, 0)), [3, 0, 1, 2, 4, 5, 6, 7]);
}

#[test]
fn cross_line_move_to_last_slot_lands_before_its_occupant() {
    let items = numbered(8);
    assert_eq!(move_once(&items, (0, 0), (1, 2)), [1, 2, 3, 4, 0, 5, 6, 7]);
}

#[test]
fn boundary_cases_agree_across_rules() {
    let items = numbered(8);
    let cases = [
        ((0, 0), (0, 2), [1, 2, 0, 3, 4, 5, 6, 7]),
        ((1, 0), (0, 0), [3, 0, 1, 2, 4, 5, 6, 7]),
        ((0, 0), (1, 2), [1, 2, 3, 4, 0, 5, 6, 7]),
    ];
    for rule in RULES {
        for (from, to, expected) in cases {
            let moved = reorder(
                &items,
                3,
                DragPosition::new(from.0, from.1),
                Some(DragPosition::new(to.0, to.1)),
                rule,
            )
            .expect("valid move");
            assert_eq!(ids(&moved), expected, "{rule:?} {from:?} -> {to:?}");
        }
    }
}

#[test]
fn cancelled_and_stationary_gestures_are_identity() {
    let items = default_items();
    for rule in RULES {
        for index in 0..items.len() {
            let at = locate(index, 3);
            let cancelled = reorder(&items, 3, at, None, rule).expect("cancel is fine");
            assert_eq!(&*cancelled, items.as_slice());

            let stationary = reorder(&items, 3, at, Some(at), rule).expect("no-op is fine");
            assert_eq!(&*stationary, items.as_slice());
        }
    }
}

#[test]
fn width_change_only_reshapes_lines() {
    let items = default_items();

    let three = partition(&items, 3);
    let two = partition(&items, 2);
    assert_eq!(three.len(), 3);
    assert_eq!(two.len(), 4);
    assert_eq!(flatten(&two), items);
    assert!(items.iter().zip(1..).all(|(item, order)| item.order == order));
}

#[test]
fn partition_shape_for_many_sizes() {
    for len in 0..40 {
        let items = numbered(len);
        for k in 1..=12 {
            let lines = partition(&items, k);
            assert_eq!(lines.len(), line_count(len, k), "len {len}, k {k}");
            assert_eq!(lines.len(), len.div_ceil(k));
            assert_eq!(flatten(&lines), items, "len {len}, k {k}");

            if let Some((last, full)) = lines.split_last() {
                assert!(full.iter().all(|line| line.len() == k), "len {len}, k {k}");
                assert!(!last.is_empty() && last.len() <= k, "len {len}, k {k}");
            }
        }
    }
}

#[test]
fn random_gestures_keep_orders_dense() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_91d);

    for round in 0..200 {
        let len = rng.usize(1..30);
        let k = rng.usize(1..8);
        let rule = if round % 2 == 0 {
            BoundaryRule::Positional
        } else {
            BoundaryRule::InsertBefore
        };
        let mut items = numbered(len);

        for _ in 0..25 {
            let source = locate(rng.usize(0..len), k);
            let destination = rng.bool().then(|| {
                DragPosition::new(rng.usize(0..line_count(len, k)), rng.usize(0..=k))
            });

            let moved = reorder(&items, k, source, destination, rule)
                .expect("source always names an item")
                .into_owned();

            assert!(orders_are_dense(&moved), "round {round}, {rule:?}, k {k}");
            let mut seen = ids(&moved);
            seen.sort_unstable();
            assert_eq!(seen, (0..len).collect::<Vec<_>>(), "no item lost or duplicated");
            items = moved;
        }
    }
}

#[test]
fn moved_item_lands_at_computed_index() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..500 {
        let len = rng.usize(2..25);
        let k = rng.usize(1..7);
        let rule = if rng.bool() {
            BoundaryRule::Positional
        } else {
            BoundaryRule::InsertBefore
        };
        let items = numbered(len);
        let source = locate(rng.usize(0..len), k);
        let destination = DragPosition::new(rng.usize(0..line_count(len, k)), rng.usize(0..k));

        let pair = grid_reorder::compute_indices(len, k, source, destination, rule)
            .expect("source always names an item");
        assert!(pair.destination < len, "destination stays inside the order");

        let moved = reorder(&items, k, source, Some(destination), rule).expect("valid move");
        let moved_ids = ids(&moved);
        assert_eq!(moved_ids.get(pair.destination), Some(&pair.source));
    }
}

#[test]
fn empty_collection_has_nothing_to_move() {
    let items: Vec<Item> = Vec::new();
    for rule in RULES {
        let cancelled = reorder(&items, 3, DragPosition::new(0, 0), None, rule);
        assert!(
            matches!(cancelled, Ok(Cow::Borrowed(moved)) if moved.is_empty()),
            "{rule:?}"
        );

        let present = reorder(
            &items,
            3,
            DragPosition::new(0, 0),
            Some(DragPosition::new(0, 1)),
            rule,
        );
        assert_eq!(
            present,
            Err(GridError::SourceOutOfRange { index: 0, len: 0 }),
            "{rule:?}"
        );
    }
    assert!(items.is_empty());
    assert!(partition(&items, 3).is_empty());
}
