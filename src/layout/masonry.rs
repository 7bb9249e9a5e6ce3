// Masonry balancer - waterfall placement for variable-height cards
//
// Items are placed one at a time into whichever column is currently
// shortest, first column winning ties. That keeps input order stable within
// each column and the column heights within one item of each other, which is
// all a gallery of mixed-height cards needs. Pure function of its inputs;
// the renderer decides what a "height" unit is (rows, here).

/// One placed item: which input it was, where its top sits, how tall it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasonrySlot {
    /// Index into the input extents slice.
    pub index: usize,
    /// Top edge within the column, in height units (gaps included).
    pub y: u16,
    pub height: u16,
}

/// A single balanced column.
#[derive(Debug, Clone, Default)]
pub struct MasonryColumn {
    pub slots: Vec<MasonrySlot>,
    /// Total occupied height including inter-item gaps.
    pub height: u16,
}

/// The balanced arrangement for one viewport.
#[derive(Debug, Clone, Default)]
pub struct MasonryLayout {
    pub columns: Vec<MasonryColumn>,
}

impl MasonryLayout {
    /// Height of the tallest column.
    pub fn max_height(&self) -> u16 {
        self.columns.iter().map(|c| c.height).max().unwrap_or(0)
    }

    /// Total number of placed items.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Balance `extents` (per-item heights) into `column_count` columns,
/// shortest column first, with `gap` height units between stacked items.
/// A column count of zero is clamped to one.
pub fn balance(extents: &[u16], column_count: usize, gap: u16) -> MasonryLayout {
    let column_count = column_count.max(1);
    let mut columns = vec![MasonryColumn::default(); column_count];

    for (index, &height) in extents.iter().enumerate() {
        // Shortest column wins; `min_by_key` keeps the first on ties, which
        // is what makes the fill order left-to-right on an even start.
        let shortest = columns
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| c.height)
            .map(|(i, _)| i)
            .unwrap_or(0);

        let target = &mut columns[shortest];
        let y = if target.slots.is_empty() {
            0
        } else {
            target.height + gap
        };
        target.slots.push(MasonrySlot { index, y, height });
        target.height = y + height;
    }

    MasonryLayout { columns }
}

/// How many columns fit a viewport: one per `min_column_width` cells,
/// clamped to [1, max_columns].
pub fn column_count_for_width(width: u16, min_column_width: u16, max_columns: usize) -> usize {
    let fit = (width / min_column_width.max(1)) as usize;
    fit.clamp(1, max_columns.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flatten placement order per column for terse assertions.
    fn indices(layout: &MasonryLayout) -> Vec<Vec<usize>> {
        layout
            .columns
            .iter()
            .map(|c| c.slots.iter().map(|s| s.index).collect())
            .collect()
    }

    #[test]
    fn fills_left_to_right_on_even_heights() {
        let layout = balance(&[4, 4, 4, 4], 2, 0);
        assert_eq!(indices(&layout), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn shortest_column_receives_the_next_item() {
        // Column 0 gets a tall item, so the short ones pile into column 1
        // until it overtakes, then column 0 receives again.
        let layout = balance(&[5, 2, 2, 2, 3], 2, 0);
        assert_eq!(indices(&layout), vec![vec![0, 4], vec![1, 2, 3]]);
        assert_eq!(layout.columns[0].height, 8);
        assert_eq!(layout.columns[1].height, 6);
    }

    #[test]
    fn ties_go_to_the_first_column() {
        let layout = balance(&[5, 5, 1], 3, 0);
        // After items 0 and 1, columns 0/1 are height 5 and column 2 is
        // empty; item 2 lands in column 2. A fresh tie at zero picks col 0.
        assert_eq!(indices(&layout), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn gap_counts_toward_column_height() {
        let layout = balance(&[3, 3], 1, 1);
        let column = &layout.columns[0];
        assert_eq!(column.slots[0].y, 0);
        assert_eq!(column.slots[1].y, 4); // 3 + gap
        assert_eq!(column.height, 7);
        assert_eq!(layout.max_height(), 7);
    }

    #[test]
    fn input_order_is_stable_within_a_column() {
        let layout = balance(&[2, 2, 2, 2, 2, 2], 2, 0);
        for column in &layout.columns {
            let idx: Vec<_> = column.slots.iter().map(|s| s.index).collect();
            let mut sorted = idx.clone();
            sorted.sort_unstable();
            assert_eq!(idx, sorted);
        }
    }

    #[test]
    fn empty_input_yields_empty_columns() {
        let layout = balance(&[], 3, 1);
        assert_eq!(layout.columns.len(), 3);
        assert!(layout.is_empty());
        assert_eq!(layout.max_height(), 0);
    }

    #[test]
    fn zero_columns_clamped_to_one() {
        let layout = balance(&[1, 2, 3], 0, 0);
        assert_eq!(layout.columns.len(), 1);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn column_count_tracks_viewport_width() {
        assert_eq!(column_count_for_width(30, 24, 4), 1);
        assert_eq!(column_count_for_width(48, 24, 4), 2);
        assert_eq!(column_count_for_width(200, 24, 4), 4); // capped
        assert_eq!(column_count_for_width(0, 24, 4), 1);
    }
}
