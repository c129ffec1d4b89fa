use thiserror::Error;

use crate::Reflect;

/// An ordered sequence: `Vec`, `VecDeque`, boxed slice or array.
pub trait List: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Replaces the content with `len` default items.
    ///
    /// Arrays only accept their own length.
    fn reset(&mut self, len: usize) -> Result<(), LengthError>;
}

impl<'l> dyn List + 'l {
    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> ListIter<'_> {
        ListIter {
            list: self,
            index: 0,
        }
    }
}

/// An iterator over the items of a [`List`].
pub struct ListIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.list.len().saturating_sub(self.index);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for ListIter<'_> {}

/// An error returned when a fixed-size list receives another length.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected exactly {expected} items, found {found}")]
pub struct LengthError {
    pub expected: usize,
    pub found: usize,
}
