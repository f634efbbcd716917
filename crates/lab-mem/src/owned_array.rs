//! [`OwnedArray`], a growable array that owns each of its elements through a
//! separate heap allocation.
//!
//! The array keeps `len` (logically present elements) and `capacity`
//! (allocated slots) apart. Indexing is checked against `len` only. Growth
//! moves the owning boxes into new storage, the elements themselves never
//! move, so references handed out before growth point at the same objects
//! afterwards.

mod iter;

use core::{
    alloc::Layout,
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

use crate::{
    allocator::Allocator,
    capacity_policy::{CapacityPolicy, Doubling, Fixed},
    errors::CapacityError,
    global_alloc::GlobalAlloc,
    const_assert,
    size_of,
};

pub use iter::{Iter, IterMut};

use CapacityError::{IndexOutOfBounds, AllocFailed, FixedCapacity, MaxCapacityExceeded};

pub const DEFAULT_CAPACITY: usize = 10;

pub struct OwnedArray<T, Pol = Doubling, Alloc = GlobalAlloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{
    data: NonNull<Box<T>>,
    capacity: usize,
    len: usize,
    alloc: Alloc,
    _markers: PhantomData<(Box<T>, Pol)>,
}

pub type FixedArray<T, Alloc = GlobalAlloc> = OwnedArray<T, Fixed, Alloc>;

const_assert!(size_of!(OwnedArray<u32>) == size_of!(Option<OwnedArray<u32>>));

unsafe impl<T: Send, Pol: CapacityPolicy, Alloc: Allocator + Send> Send for OwnedArray<T, Pol, Alloc> {}

unsafe impl<T: Sync, Pol: CapacityPolicy, Alloc: Allocator + Sync> Sync for OwnedArray<T, Pol, Alloc> {}

#[cold]
#[inline(never)]
fn fatal<T>(err: CapacityError) -> ! {
    if let AllocFailed { new_capacity } = err {
        if let Ok(layout) = Layout::array::<T>(new_capacity) {
            std::alloc::handle_alloc_error(layout)
        }
    }
    panic!("{}", err)
}

impl<T> OwnedArray<T, Doubling, GlobalAlloc> {

    /// Creates an empty array with room for [`DEFAULT_CAPACITY`] elements.
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements (at least one).
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, GlobalAlloc)
    }

    #[inline(always)]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::try_with_capacity_in(capacity, GlobalAlloc)
    }
}

impl<T, Pol, Alloc> OwnedArray<T, Pol, Alloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{

    pub fn try_with_capacity_in(
        capacity: usize,
        alloc: Alloc,
    ) -> Result<Self, CapacityError>
    {
        let capacity = Pol::initial(capacity);
        let data = unsafe { alloc
            .allocate_uninit::<Box<T>>(capacity)
            .ok_or(AllocFailed { new_capacity: capacity })?
        };
        Ok(Self {
            data,
            capacity,
            len: 0,
            alloc,
            _markers: PhantomData,
        })
    }

    /// Like [`try_with_capacity_in`](Self::try_with_capacity_in), but treats
    /// allocation failure as fatal.
    pub fn with_capacity_in(capacity: usize, alloc: Alloc) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(array) => array,
            Err(err) => fatal::<Box<T>>(err),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn allocator(&self) -> &Alloc {
        &self.alloc
    }

    #[inline(always)]
    fn slots(&self) -> &[Box<T>] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [Box<T>] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    fn grow(&mut self) -> Result<(), CapacityError> {
        if !Pol::can_grow() {
            return Err(FixedCapacity { capacity: self.capacity })
        }
        let new_capacity = Pol::grow(self.capacity)
            .ok_or(MaxCapacityExceeded { capacity: self.capacity })?;
        let tmp = unsafe { self.alloc
            .allocate_uninit::<Box<T>>(new_capacity)
            .ok_or(AllocFailed { new_capacity })?
        };
        debug_assert!(self.len <= self.capacity);
        unsafe {
            self.data.copy_to_nonoverlapping(tmp, self.len);
            self.alloc.free_uninit(self.data, self.capacity);
        }
        self.data = tmp;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Appends an already boxed element, growing the storage if it is full.
    ///
    /// The element is dropped if the storage can't grow.
    pub fn try_push_boxed(&mut self, value: Box<T>) -> Result<&mut T, CapacityError> {
        if self.len >= self.capacity {
            self.grow()?
        }
        let mut slot = unsafe { self.data.add(self.len) };
        unsafe { slot.write(value) };
        self.len += 1;
        Ok(unsafe { &mut **slot.as_mut() })
    }

    #[inline(always)]
    pub fn try_push(&mut self, value: T) -> Result<&mut T, CapacityError> {
        self.try_push_boxed(Box::new(value))
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// # Panics
    /// If the array can't grow. Allocation failure aborts through
    /// [`std::alloc::handle_alloc_error`].
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.push_boxed(Box::new(value))
    }

    pub fn push_boxed(&mut self, value: Box<T>) -> &mut T {
        match self.try_push_boxed(value) {
            Ok(value) => value,
            Err(err) => fatal::<Box<T>>(err),
        }
    }

    pub fn get(&self, index: usize) -> Result<&T, CapacityError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { &**self.data.add(index).as_ref() })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CapacityError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { &mut **self.data.add(index).as_mut() })
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.slots().last().map(|value| &**value)
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.slots_mut().last_mut().map(|value| &mut **value)
    }

    /// Removes the last element and hands its box back to the caller.
    pub fn pop_boxed(&mut self) -> Option<Box<T>> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.data.add(self.len).read() })
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        self.pop_boxed().map(|value| *value)
    }

    /// Drops the last element.
    ///
    /// Returns `false` without touching the array when it is empty.
    #[inline(always)]
    pub fn pop_back(&mut self) -> bool {
        self.pop_boxed().is_some()
    }

    /// Drops every element. The capacity stays the same.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), len));
        }
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots())
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.slots_mut())
    }
}

impl<T, Pol, Alloc> Drop for OwnedArray<T, Pol, Alloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{

    fn drop(&mut self) {
        self.clear();
        unsafe { self.alloc.free_uninit(self.data, self.capacity) }
    }
}

impl<T> Default for OwnedArray<T, Doubling, GlobalAlloc> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Pol, Alloc> Index<usize> for OwnedArray<T, Pol, Alloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, Pol, Alloc> IndexMut<usize> for OwnedArray<T, Pol, Alloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Debug, Pol, Alloc> Debug for OwnedArray<T, Pol, Alloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for OwnedArray<T, Doubling, GlobalAlloc> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0);
        array.extend(iter);
        array
    }
}

impl<T, Alloc: Allocator> Extend<T> for OwnedArray<T, Doubling, Alloc> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T, Pol, Alloc> IntoIterator for &'a OwnedArray<T, Pol, Alloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{

    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Pol, Alloc> IntoIterator for &'a mut OwnedArray<T, Pol, Alloc>
    where
        Pol: CapacityPolicy,
        Alloc: Allocator,
{

    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
