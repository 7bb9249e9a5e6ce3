// Layout module - pure arrangement math with no rendering dependencies

pub mod masonry;

pub use masonry::{balance, column_count_for_width, MasonryColumn, MasonryLayout, MasonrySlot};
