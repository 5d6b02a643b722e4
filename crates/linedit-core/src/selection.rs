use crate::position::Position;

/// A selection from a fixed anchor to a moving active end.
///
/// Endpoints are stored exactly as the user produced them (the anchor may come after the active
/// end). Every read path goes through [`Selection::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Position,
    /// The end that follows the cursor.
    pub active: Position,
}

/// Which way a selection was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Anchor is before (or equal to) the active end.
    Forward,
    /// Anchor is after the active end.
    Backward,
}

impl Selection {
    /// Create a selection from `anchor` to `active`.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// `true` when anchor and active end coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Endpoints ordered by document position (row, then column).
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    /// Earlier endpoint.
    pub fn start(&self) -> Position {
        self.normalized().0
    }

    /// Later endpoint.
    pub fn end(&self) -> Position {
        self.normalized().1
    }

    /// Whether the anchor precedes the active end.
    pub fn direction(&self) -> SelectionDirection {
        if self.anchor <= self.active {
            SelectionDirection::Forward
        } else {
            SelectionDirection::Backward
        }
    }

    /// Byte range of `row` covered by this selection, if any.
    ///
    /// Interior rows report `0..line_len`; renderers use this to paint selection backgrounds.
    pub fn columns_on_row(&self, row: usize, line_len: usize) -> Option<(usize, usize)> {
        let (start, end) = self.normalized();
        if row < start.row || row > end.row {
            return None;
        }
        let from = if row == start.row { start.col } else { 0 };
        let to = if row == end.row { end.col } else { line_len };
        Some((from.min(line_len), to.min(line_len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_orders_backward_selection() {
        let sel = Selection::new(Position::new(3, 1), Position::new(1, 5));
        assert_eq!(sel.direction(), SelectionDirection::Backward);
        assert_eq!(sel.normalized(), (Position::new(1, 5), Position::new(3, 1)));
    }

    #[test]
    fn test_normalized_tie_breaks_on_column() {
        let sel = Selection::new(Position::new(2, 7), Position::new(2, 3));
        assert_eq!(sel.start(), Position::new(2, 3));
        assert_eq!(sel.end(), Position::new(2, 7));
    }

    #[test]
    fn test_columns_on_row() {
        let sel = Selection::new(Position::new(2, 2), Position::new(0, 4));
        assert_eq!(sel.columns_on_row(0, 10), Some((4, 10)));
        assert_eq!(sel.columns_on_row(1, 6), Some((0, 6)));
        assert_eq!(sel.columns_on_row(2, 10), Some((0, 2)));
        assert_eq!(sel.columns_on_row(3, 10), None);
    }
}
