/// A request to move the selection, as produced by keys or a direct slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigate {
    Prev,
    Next,
    First,
    Last,
    /// Jump to an arbitrary (possibly out-of-range) index.
    Index(i64),
}

impl Navigate {
    /// Resolve against the current target; the result always lies in `[0, slide_count - 1]`.
    pub fn apply(self, current: usize, slide_count: usize) -> usize {
        let current = i64::try_from(current).unwrap_or(i64::MAX);
        let wanted = match self {
            Self::Prev => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::First => 0,
            Self::Last => i64::MAX,
            Self::Index(i) => i,
        };
        clamp_index(wanted, slide_count)
    }
}

/// Clamp a signed index into `[0, slide_count - 1]` (0 when there are no slides).
pub fn clamp_index(index: i64, slide_count: usize) -> usize {
    let Some(last) = slide_count.checked_sub(1) else {
        return 0;
    };
    if index <= 0 {
        return 0;
    }
    usize::try_from(index).map_or(last, |i| i.min(last))
}
