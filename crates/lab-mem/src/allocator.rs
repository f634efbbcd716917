use core::{
    alloc::Layout,
    ptr::NonNull,
};

/// Raw memory source used by [`OwnedArray`](crate::OwnedArray).
///
/// # Safety
/// Every pointer passed to `free_*` must come from the matching `allocate_*`
/// call on the same allocator, with the same size and alignment.
pub trait Allocator {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        unsafe { self.allocate_raw(layout.size(), layout.align()).map(|ptr| ptr.cast::<T>()) }
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let Ok(layout) = Layout::array::<T>(count) else {
            return
        };
        unsafe { self.free_raw(ptr.cast::<u8>(), layout.size(), layout.align()) }
    }
}

impl<A: Allocator> Allocator for &A {

    #[inline(always)]
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        unsafe { (**self).allocate_raw(size, align) }
    }

    #[inline(always)]
    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        unsafe { (**self).free_raw(ptr, size, align) }
    }
}
