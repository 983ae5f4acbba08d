use crate::Sequence;

impl<T> Sequence<T> for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }

    // Every element at or after the midpoint is shifted by one.
    fn insert_middle(&mut self, value: T) {
        let i = self.len() / 2;
        self.insert(i, value);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}
