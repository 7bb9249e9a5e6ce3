/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered
/// in render code. Tab captions go short below Normal; the gallery derives
/// its column count from the raw width instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 70 cols: short tab captions, single-column leanings
    Compact,
    /// 70-119 cols: the usual terminal
    Normal,
    /// 120+ cols: room to spare
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=69 => Breakpoint::Compact,
            70..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Short captions and tight spacing below Normal
    pub fn is_compact(&self) -> bool {
        matches!(self, Breakpoint::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(69), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(70), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(119), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(120), Breakpoint::Wide);
    }

    #[test]
    fn only_compact_is_compact() {
        assert!(Breakpoint::from_width(50).is_compact());
        assert!(!Breakpoint::from_width(80).is_compact());
        assert!(!Breakpoint::from_width(150).is_compact());
    }
}
