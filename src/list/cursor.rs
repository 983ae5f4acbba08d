use super::List;

/// Cursor over a [`List`] with editing operations.
///
/// A cursor points either at an element or at the "end" position, one
/// past the last element. Moving forward from the end position wraps to
/// the first element.
pub struct CursorMut<'a, T> {
    list: &'a mut List<T>,
    current: Option<usize>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(
        list: &'a mut List<T>,
        current: Option<usize>,
        index: usize,
    ) -> Self {
        CursorMut {
            list,
            current,
            index,
        }
    }

    /// Position of the cursor in the list. The end position is
    /// `list.len()`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor is on the end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn current(&mut self) -> Option<&mut T> {
        match self.current {
            Some(i) => Some(&mut self.list.node_mut(i).value),
            None => None,
        }
    }

    pub fn move_next(&mut self) {
        match self.current {
            Some(i) => {
                self.current = self.list.node(i).next;
                self.index += 1;
            }
            None => {
                self.current = self.list.head;
                self.index = 0;
            }
        }
    }

    pub fn move_prev(&mut self) {
        match self.current {
            Some(i) => match self.list.node(i).prev {
                Some(p) => {
                    self.current = Some(p);
                    self.index -= 1;
                }
                None => {
                    self.current = None;
                    self.index = self.list.len;
                }
            },
            None => {
                self.current = self.list.tail;
                self.index = self.list.len.saturating_sub(1);
            }
        }
    }

    /// Walk `steps` links forward, one node at a time.
    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            self.move_next();
        }
    }

    /// Insert `value` in front of the cursor. The cursor keeps pointing at
    /// the same element. On the end position, `value` is appended.
    pub fn insert_before(&mut self, value: T) {
        self.list.link_before(self.current, value);
        self.index += 1;
    }

    /// Insert `value` after the cursor. On the end position, `value`
    /// becomes the first element.
    pub fn insert_after(&mut self, value: T) {
        match self.current {
            Some(i) => {
                let next = self.list.node(i).next;
                self.list.link_before(next, value);
            }
            None => {
                let head = self.list.head;
                self.list.link_before(head, value);
                self.index += 1;
            }
        }
    }

    /// Remove the element under the cursor and move to the next one.
    pub fn remove_current(&mut self) -> Option<T> {
        let i = self.current?;
        self.current = self.list.node(i).next;
        Some(self.list.unlink(i))
    }
}
