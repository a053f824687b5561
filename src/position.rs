/// A position naming one element of a `LinkedSequence`. It can be
/// used to read the element, to remove it, or as an anchor for
/// inserting new elements next to it. It contains a generation number
/// that prevents the wrong element (that may have come to inhabit the
/// same node) from being touched once the original is removed.
///
/// Positions do not borrow the sequence that created them and can be
/// copied freely.
///
/// While the type system allows it, using a `Position` with a sequence
/// other than the one that created it will result in (likely)
/// unexpected behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) ix: usize,
    pub(crate) generation: usize,
}

impl Position {
    pub(crate) const HEADER: Position = Position {
        ix: 0,
        generation: 0,
    };

    pub(crate) const TRAILER: Position = Position {
        ix: 1,
        generation: 0,
    };
}
