use crate::drag::DragPosition;

/// A read-only view of one line: a contiguous slice of the flat order.
#[derive(Debug, PartialEq, Eq)]
pub struct Line<'a, T> {
    index: usize,
    items_per_line: usize,
    items: &'a [T],
}

impl<T> Clone for Line<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Line<'_, T> {}

impl<'a, T> Line<'a, T> {
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn items(&self) -> &'a [T] {
        self.items
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Linear index in the flat order of the item at `position` in this line.
    ///
    /// The line start never exceeds the collection length; the sum saturates.
    pub const fn global_index(&self, position: usize) -> usize {
        (self.index * self.items_per_line).saturating_add(position)
    }

    /// Items paired with their line-local and global positions.
    pub fn iter_indexed(self) -> impl Iterator<Item = (usize, usize, &'a T)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(position, item)| (position, self.global_index(position), item))
    }
}

pub const fn line_count(len: usize, items_per_line: usize) -> usize {
    len.div_ceil(items_per_line)
}

/// Splits the flat order into lines of at most `items_per_line` items.
///
/// Only the last line may be short, and no line is empty unless `items` is.
pub fn partition<T>(items: &[T], items_per_line: usize) -> Vec<Line<'_, T>> {
    assert!(items_per_line >= 1, "items per line must be at least 1");

    items
        .chunks(items_per_line)
        .enumerate()
        .map(|(index, chunk)| Line {
            index,
            items_per_line,
            items: chunk,
        })
        .collect()
}

pub fn flatten<T: Clone>(lines: &[Line<'_, T>]) -> Vec<T> {
    lines
        .iter()
        .flat_map(|line| line.items.iter().cloned())
        .collect()
}

/// Line and in-line position of a linear index.
pub const fn locate(linear_index: usize, items_per_line: usize) -> DragPosition {
    assert!(items_per_line >= 1, "items per line must be at least 1");

    DragPosition {
        line: linear_index / items_per_line,
        position: linear_index % items_per_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_items_in_lines_of_three() {
        let items: Vec<u32> = (0..8).collect();
        let lines = partition(&items, 3);

        let shape: Vec<&[u32]> = lines.iter().map(Line::items).collect();
        assert_eq!(shape, vec![&[0, 1, 2][..], &[3, 4, 5][..], &[6, 7][..]]);
        assert_eq!(lines.len(), line_count(items.len(), 3));
    }

    #[test]
    fn empty_input_has_no_lines() {
        let items: Vec<u32> = Vec::new();
        assert!(partition(&items, 4).is_empty());
        assert_eq!(line_count(0, 4), 0);
    }

    #[test]
    fn capacity_larger_than_input_gives_one_short_line() {
        let items = [10, 20];
        let lines = partition(&items, 5);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().map(Line::len), Some(2));
    }

    #[test]
    fn global_index_matches_flat_position() {
        let items: Vec<u32> = (0..11).collect();
        for line in partition(&items, 4) {
            for (position, global, item) in line.iter_indexed() {
                assert_eq!(global as u32, *item, "global index of {item}");
                assert_eq!(locate(global, 4), DragPosition::new(line.index(), position));
            }
        }
    }

    #[test]
    fn flatten_restores_order() {
        let items: Vec<u32> = (0..7).collect();
        for k in 1..=9 {
            assert_eq!(flatten(&partition(&items, k)), items, "capacity {k}");
        }
    }

    #[test]
    #[should_panic(expected = "items per line must be at least 1")]
    fn zero_capacity_is_rejected() {
        let items = [1, 2, 3];
        let _lines = partition(&items, 0);
    }
}
