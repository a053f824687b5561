//! Two queue types assembled from simpler parts.
//!
//! [`Deque`] is a double-ended queue adapted from [`LinkedSequence`], a
//! doubly linked list bounded by a header and a trailer sentinel. The
//! sentinels mean every insertion and removal is the same four-link
//! splice, with no special case for an empty or single-element list.
//! Nodes are kept in an internal `Vec` and link to each other by index;
//! removed nodes go on a free list that later insertions reuse.
//!
//! [`StackQueue`] is a first-in first-out queue built from two
//! [`Stack`]s. Items are pushed onto an incoming stack and popped from
//! an outgoing stack; the incoming stack is reversed onto the outgoing
//! one only when the latter is empty, so each item is moved at most
//! once and every operation is amortized constant time.
//!
//! Reading from or removing from an empty container returns `None`.

mod deque;
mod error;
mod linked_sequence;
mod node;
mod position;
mod queue;
mod stack;
mod stack_queue;

pub use crate::deque::Deque;
pub use crate::error::SequenceError;
pub use crate::linked_sequence::LinkedSequence;
pub use crate::position::Position;
pub use crate::queue::Queue;
pub use crate::stack::Stack;
pub use crate::stack_queue::StackQueue;
