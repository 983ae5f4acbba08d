use super::List;
use crate::Sequence;

impl<T> Sequence<T> for List<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        List::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        List::reserve(self, additional)
    }

    // No cached midpoint: the cursor walks count() / 2 links every time.
    fn insert_middle(&mut self, value: T) {
        let steps = self.len() / 2;
        let mut cursor = self.cursor_front_mut();
        cursor.advance(steps);
        cursor.insert_before(value);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
