//! Typed attribute buffers
//!
//! A [`Resource`] is a fixed-size array of elements, used for vertex buffers, index buffers,
//! render targets and depth buffers alike. Buffers that represent a pixel grid are created with
//! [`Resource::with_dimensions`] and can additionally be addressed by `(x, y)`.
//!
//! The rasterizer never owns buffers. It holds [`SharedResource`] handles, which the caller
//! keeps clones of in order to read the results back.

use std::ops::{Index, IndexMut};
use std::slice;
use std::sync::Arc;

use parking_lot::RwLock;

/// Shared, lockable handle to a resource
pub type SharedResource<T> = Arc<RwLock<Resource<T>>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    data: Vec<T>,
    /// Elements per row. Equal to the element count for 1D resources.
    stride: usize,
}

impl<T> Resource<T> where T: Clone + Default {
    /// Create a 1D resource of `count` default elements
    pub fn new(count: usize) -> Resource<T> {
        Resource { data: vec![T::default(); count], stride: count }
    }

    /// Create a 2D resource of `width * height` default elements
    pub fn with_dimensions(width: usize, height: usize) -> Resource<T> {
        Resource { data: vec![T::default(); width * height], stride: width }
    }
}

impl<T> Resource<T> {
    /// Create a 1D resource from existing elements
    pub fn from_vec(data: Vec<T>) -> Resource<T> {
        let stride = data.len();

        Resource { data, stride }
    }

    /// Wrap the resource into a handle which can be bound to a rasterizer
    #[inline]
    pub fn into_shared(self) -> SharedResource<T> {
        Arc::new(RwLock::new(self))
    }

    /// Total number of elements
    #[inline(always)]
    pub fn count(&self) -> usize { self.data.len() }

    #[inline(always)]
    pub fn width(&self) -> usize { self.stride }

    #[inline]
    pub fn height(&self) -> usize {
        if self.stride == 0 { 0 } else { self.data.len() / self.stride }
    }

    /// Get a reference to the element at the given linear offset.
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn item(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Get a mutable reference to the element at the given linear offset.
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn item_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    /// Get a reference to the element at `(x, y)`, stored at `y * width + x`.
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn item_at(&self, x: usize, y: usize) -> &T {
        debug_assert!(x < self.stride, "x coordinate {} exceeds width {}", x, self.stride);
        &self.data[y * self.stride + x]
    }

    /// Get a mutable reference to the element at `(x, y)`, stored at `y * width + x`.
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn item_at_mut(&mut self, x: usize, y: usize) -> &mut T {
        debug_assert!(x < self.stride, "x coordinate {} exceeds width {}", x, self.stride);
        &mut self.data[y * self.stride + x]
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) where T: Clone {
        for item in &mut self.data {
            *item = value.clone();
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.data }

    #[inline]
    pub fn iter(&self) -> slice::Iter<T> { self.data.iter() }
}

impl<T> Index<usize> for Resource<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T { self.item(index) }
}

impl<T> IndexMut<usize> for Resource<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T { self.item_mut(index) }
}

impl<T> Index<(usize, usize)> for Resource<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T { self.item_at(x, y) }
}

impl<T> IndexMut<(usize, usize)> for Resource<T> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T { self.item_at_mut(x, y) }
}

impl<'a, T> IntoIterator for &'a Resource<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> { self.iter() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_1d_resource() {
        let mut r: Resource<u32> = Resource::new(6);

        assert_eq!(r.count(), 6);
        assert_eq!((r.width(), r.height()), (6, 1));

        r[4] = 9;
        *r.item_mut(0) = 1;

        assert_eq!(r.as_slice(), &[1, 0, 0, 0, 9, 0]);
    }

    #[test]
    fn test_2d_addressing() {
        let mut r: Resource<u8> = Resource::with_dimensions(4, 3);

        assert_eq!(r.count(), 12);
        assert_eq!((r.width(), r.height()), (4, 3));

        *r.item_at_mut(1, 2) = 7;

        assert_eq!(*r.item(2 * 4 + 1), 7);
        assert_eq!(r[(1, 2)], 7);
    }

    #[test]
    fn test_fill() {
        let mut r = Resource::from_vec(vec![1.0f32, 2.0, 3.0]);

        r.fill(::std::f32::MAX);

        assert!(r.iter().all(|&d| d == ::std::f32::MAX));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let r: Resource<u8> = Resource::new(2);

        let _ = r[2];
    }

    #[test]
    fn test_shared_handle() {
        let shared = Resource::from_vec(vec![1u32, 2, 3]).into_shared();
        let other = shared.clone();

        other.write()[0] = 10;

        assert_eq!(shared.read()[0], 10);
    }

    #[test]
    fn test_empty_resource() {
        let r: Resource<u8> = Resource::with_dimensions(0, 0);

        assert_eq!(r.count(), 0);
        assert_eq!(r.height(), 0);
    }
}
