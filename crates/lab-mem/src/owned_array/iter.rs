use core::{
    iter::FusedIterator,
    slice,
};

pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Box<T>>,
}

pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Box<T>>,
}

impl<'a, T> Iter<'a, T> {

    #[inline(always)]
    pub(super) fn new(slots: &'a [Box<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<'a, T> IterMut<'a, T> {

    #[inline(always)]
    pub(super) fn new(slots: &'a mut [Box<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|value| &**value)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|value| &**value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {

    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|value| &mut **value)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|value| &mut **value)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}
