pub(crate) struct Free(FreeInner);
struct FreeInner {
    // The next free node. MAX when this is the last free node.
    next: usize,
}

impl Free {
    fn new(next: usize) -> Free {
        Free(FreeInner { next })
    }

    pub(crate) fn next(&self) -> usize {
        self.0.next
    }
}

pub(crate) struct Linked<T>(LinkedInner<T>);
struct LinkedInner<T> {
    // The index of the node before this node. Unused on the header.
    prev: usize,
    // The index of the node after this node. Unused on the trailer.
    next: usize,
    // The generation ID for this node. Sentinels are always 0.
    generation: usize,
    // The contained data. `None` only for the two sentinels.
    data: Option<T>,
}

impl<T> Linked<T> {
    fn new(prev: usize, next: usize, generation: usize, data: Option<T>) -> Linked<T> {
        Linked(LinkedInner {
            prev,
            next,
            generation,
            data,
        })
    }

    pub(crate) fn prev(&self) -> usize {
        self.0.prev
    }

    pub(crate) fn set_prev(&mut self, new_prev: usize) {
        self.0.prev = new_prev;
    }

    pub(crate) fn next(&self) -> usize {
        self.0.next
    }

    pub(crate) fn set_next(&mut self, new_next: usize) {
        self.0.next = new_next;
    }

    pub(crate) fn generation(&self) -> usize {
        self.0.generation
    }

    pub(crate) fn is_sentinel(&self) -> bool {
        self.0.data.is_none()
    }

    pub(crate) fn as_generation(&self, g: usize) -> Option<&Linked<T>> {
        if self.0.generation == g {
            Some(self)
        } else {
            None
        }
    }

    pub(crate) fn as_generation_mut(&mut self, g: usize) -> Option<&mut Linked<T>> {
        if self.0.generation == g {
            Some(self)
        } else {
            None
        }
    }

    pub(crate) fn data(&self) -> Option<&T> {
        self.0.data.as_ref()
    }

    pub(crate) fn data_mut(&mut self) -> Option<&mut T> {
        self.0.data.as_mut()
    }

    pub(crate) fn take(self) -> (usize, Option<T>, usize) {
        let Linked(LinkedInner {
            prev, next, data, ..
        }) = self;
        (prev, data, next)
    }
}

/// A single entry in the arena backing a `LinkedSequence`.
pub(crate) enum Node<T> {
    Free(Free),
    Linked(Linked<T>),
}

impl<T> Node<T> {
    pub(crate) fn new_free(next: usize) -> Node<T> {
        Node::Free(Free::new(next))
    }

    pub(crate) fn new_sentinel(prev: usize, next: usize) -> Node<T> {
        Node::Linked(Linked::new(prev, next, 0, None))
    }

    pub(crate) fn new_data(prev: usize, next: usize, generation: usize, data: T) -> Node<T> {
        Node::Linked(Linked::new(prev, next, generation, Some(data)))
    }

    pub(crate) fn get_linked(&self) -> Option<&Linked<T>> {
        if let Node::Linked(linked) = self {
            Some(linked)
        } else {
            None
        }
    }

    pub(crate) fn get_linked_mut(&mut self) -> Option<&mut Linked<T>> {
        if let Node::Linked(linked) = self {
            Some(linked)
        } else {
            None
        }
    }

    pub(crate) fn get_free(&self) -> Option<&Free> {
        if let Node::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_linked(self) -> Option<Linked<T>> {
        if let Node::Linked(linked) = self {
            Some(linked)
        } else {
            None
        }
    }
}
