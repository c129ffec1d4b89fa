use alloc::boxed::Box;

use crate::Reflect;

/// A nullable slot, written as the `§` marker when empty.
pub trait Optional: Reflect {
    /// Returns the contained value, if any.
    fn get(&self) -> Option<&dyn Reflect>;

    /// Returns the contained value mutably, if any.
    fn get_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Empties the slot.
    fn clear(&mut self);

    /// Replaces the content with a default-constructed value and returns it.
    fn insert_default(&mut self) -> &mut dyn Reflect;

    /// Returns a fresh default-constructed value of the contained type,
    /// without touching the slot.
    fn placeholder(&self) -> Box<dyn Reflect>;
}
