use super::{CursorMut, Iter};

pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) prev: Option<usize>,
    pub(super) next: Option<usize>,
}

pub(super) enum Slot<T> {
    Occupied(Node<T>),
    // Index of the next vacant slot.
    Vacant(Option<usize>),
}

/// Doubly linked list of values stored in a slot arena.
///
/// [`List`] is an ordered container built on top of a [`std::vec::Vec`]
/// of slots. Each occupied slot holds one value and the indices of its
/// neighbours. Slots released by removals are chained in a free list and
/// reused by later insertions, so the arena does not grow under
/// insert/remove churn.
///
/// * Insertion and removal at a [cursor](struct.CursorMut.html) position
/// is `$O(1)$`.
/// * Insertion and removal at either end is `$O(1)$`.
/// * Reaching the `i`-th element is `$O(i)$`. There is no random access:
/// a cursor has to walk the links from the front.
/// * Count and capacity queries are `$O(1)$`.
///
/// ## Examples
///
/// ```
/// use midbench::List;
///
/// let mut l: List<i32> = (0..4).collect();
///
/// // Walk to the third element and insert in front of it.
/// let mut cursor = l.cursor_front_mut();
/// cursor.advance(2);
/// cursor.insert_before(9);
/// assert_eq!(cursor.current(), Some(&mut 2));
///
/// assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![0, 1, 9, 2, 3]);
/// assert_eq!(l.pop_back(), Some(3));
/// assert_eq!(l.len(), 4);
/// ```
pub struct List<T> {
    pub(super) slots: Vec<Slot<T>>,
    pub(super) head: Option<usize>,
    pub(super) tail: Option<usize>,
    pub(super) free: Option<usize>,
    pub(super) len: usize,
}

impl<T> List<T> {
    pub fn new() -> Self {
        List {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Create an empty list with room for `n` nodes.
    pub fn with_capacity(n: usize) -> Self {
        List {
            slots: Vec::with_capacity(n),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes the arena can hold before it reallocates.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|i| &self.node(i).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|i| &self.node(i).value)
    }

    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|i| self.unlink(i))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|i| self.unlink(i))
    }

    /// Drop every element. The arena keeps its allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Get a cursor on the first element, or on the end position if the
    /// list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head, 0)
    }

    pub(super) fn node(&self, i: usize) -> &Node<T> {
        match &self.slots[i] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("link to vacant slot {}", i),
        }
    }

    pub(super) fn node_mut(&mut self, i: usize) -> &mut Node<T> {
        match &mut self.slots[i] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("link to vacant slot {}", i),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(i) => {
                self.free = match self.slots[i] {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => {
                        unreachable!("free list points at occupied slot {}", i)
                    }
                };
                self.slots[i] = Slot::Occupied(node);
                i
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Insert `value` in front of the node at index `next`, or at the
    /// back when `next` is `None`. Return the new node index.
    pub(super) fn link_before(
        &mut self,
        next: Option<usize>,
        value: T,
    ) -> usize {
        let prev = match next {
            Some(n) => self.node(n).prev,
            None => self.tail,
        };
        let i = self.alloc(Node { value, prev, next });

        match prev {
            Some(p) => self.node_mut(p).next = Some(i),
            None => self.head = Some(i),
        }
        match next {
            Some(n) => self.node_mut(n).prev = Some(i),
            None => self.tail = Some(i),
        }
        self.len += 1;
        i
    }

    /// Remove the node at index `i` and return its value.
    pub(super) fn unlink(&mut self, i: usize) -> T {
        let slot = std::mem::replace(&mut self.slots[i], Slot::Vacant(self.free));
        let node = match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("unlink of vacant slot {}", i),
        };
        self.free = Some(i);

        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.value
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
