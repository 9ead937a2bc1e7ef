#![doc = include_str!("../README.md")]

#![no_std]

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

extern crate alloc;

mod error;

pub use error::{Error, Result};

use core::{fmt, iter, slice};
use core::iter::FusedIterator;

use alloc::boxed::Box;

/// Number of slots a freshly created `AssociativeArray` starts with.
pub const DEFAULT_CAPACITY: usize = 16;

/// A key and its value. The key is fixed once the pair is stored.
#[derive(Debug, Clone)]
struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    #[inline(always)]
    const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

type Slots<K, V> = Box<[Option<Pair<K, V>>]>;

#[inline]
fn empty_slots<K, V>(capacity: usize) -> Slots<K, V> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// A key/value container backed by an array of pair slots.
///
/// Slots `0..size` hold pairs, the rest are empty. Lookups scan the
/// occupied slots in order, so keys only need `PartialEq`. The backing
/// array doubles when an insert finds it full and never shrinks.
///
/// Removal moves the last pair into the freed slot, so slot order only
/// matches insertion order until the first removal.
pub struct AssociativeArray<K, V> {
    pairs: Slots<K, V>,
    size: usize,
}

impl<K, V> AssociativeArray<K, V> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssociativeArray, DEFAULT_CAPACITY};
    ///
    /// let map: AssociativeArray<u32, u32> = AssociativeArray::new();
    /// assert_eq!(map.size(), 0);
    /// assert_eq!(map.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            pairs: empty_slots(DEFAULT_CAPACITY),
            size: 0,
        }
    }

    /// Returns the number of key/value pairs.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](Self::size).
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the pairs in slot order.
    ///
    /// Slot order is insertion order only until something is removed.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.pairs[..self.size].iter(),
        }
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    fn occupied(&self) -> impl Iterator<Item = &Pair<K, V>> {
        self.pairs[..self.size].iter().flatten()
    }

    /// Doubles the number of slots, keeping every pair at its index.
    fn expand(&mut self) {
        let old_capacity = self.pairs.len();
        let mut pairs = empty_slots(old_capacity * 2);
        for (dst, src) in pairs.iter_mut().zip(self.pairs[..self.size].iter_mut()) {
            *dst = src.take();
        }
        self.pairs = pairs;

        log::trace!("associative array grew from {} to {} slots", old_capacity, self.pairs.len());
    }
}

impl<K, V> AssociativeArray<K, V>
where
    K: PartialEq,
{
    /// Index of the first occupied slot holding `key`.
    #[cfg_attr(feature = "inline-more", inline)]
    fn find(&self, key: &K) -> Option<usize> {
        self.occupied().position(|pair| pair.key == *key)
    }

    #[cfg_attr(feature = "inline-more", inline)]
    fn insert(&mut self, key: K, value: V) {
        if let Some(idx) = self.find(&key) {
            if let Some(pair) = &mut self.pairs[idx] {
                pair.value = value;
            }
            return
        }

        if self.size == self.pairs.len() {
            self.expand()
        }

        self.pairs[self.size] = Some(Pair::new(key, value));
        self.size += 1;
    }

    /// Associates `value` with `key`.
    ///
    /// An existing key keeps its slot and has its value overwritten. A new
    /// key is appended, doubling the capacity first if every slot is taken.
    ///
    /// # Errors
    ///
    /// [`Error::NullKey`] if `key` is `None`. Nothing is changed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssociativeArray, Error};
    ///
    /// let mut map: AssociativeArray<&str, i32> = AssociativeArray::new();
    /// map.set("a", 1).unwrap();
    /// map.set("a", 2).unwrap();
    /// assert_eq!(map.size(), 1);
    /// assert_eq!(map.get(&"a"), Ok(&2));
    ///
    /// assert_eq!(map.set(None::<&str>, 3), Err(Error::NullKey));
    /// ```
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<()> {
        let key = key.into().ok_or(Error::NullKey)?;
        self.insert(key, value);
        Ok(())
    }

    /// Returns the value associated with `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is `None` or not present.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get<'a>(&self, key: impl Into<Option<&'a K>>) -> Result<&V>
    where
        K: 'a,
    {
        let idx = key.into().and_then(|key| self.find(key)).ok_or(Error::KeyNotFound)?;
        self.pairs[idx].as_ref().map(|pair| &pair.value).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is `None` or not present.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_mut<'a>(&mut self, key: impl Into<Option<&'a K>>) -> Result<&mut V>
    where
        K: 'a,
    {
        let idx = key.into().and_then(|key| self.find(key)).ok_or(Error::KeyNotFound)?;
        self.pairs[idx].as_mut().map(|pair| &mut pair.value).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if `key` is present. A `None` key is never present.
    #[inline]
    pub fn has_key<'a>(&self, key: impl Into<Option<&'a K>>) -> bool
    where
        K: 'a,
    {
        key.into().and_then(|key| self.find(key)).is_some()
    }

    /// Removes `key`, returning its value. Does nothing for a `None` or
    /// absent key.
    ///
    /// The last pair is moved into the freed slot, so the order of the
    /// remaining pairs is not preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map: AssociativeArray<u32, &str> = AssociativeArray::new();
    /// map.set(1, "a").unwrap();
    /// map.set(2, "b").unwrap();
    /// map.set(3, "c").unwrap();
    ///
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 2]);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove<'a>(&mut self, key: impl Into<Option<&'a K>>) -> Option<V>
    where
        K: 'a,
    {
        let idx = key.into().and_then(|key| self.find(key))?;

        self.size -= 1;
        self.pairs.swap(idx, self.size);
        let removed = self.pairs[self.size].take();

        log::trace!("swap-removed slot {} (moved slot {} into it)", idx, self.size);

        removed.map(|pair| pair.value)
    }
}

/// Borrowing iterator over the pairs of an `AssociativeArray` in slot order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slots: slice::Iter<'a, Option<Pair<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[cfg_attr(feature = "inline-more", inline)]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .next()
            .and_then(Option::as_ref)
            .map(|pair| (&pair.key, &pair.value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a AssociativeArray<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssociativeArray<K, V> {
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for AssociativeArray<K, V> {
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| self.insert(k, v));
    }
}

impl<K, V> Default for AssociativeArray<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for AssociativeArray<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut pairs = empty_slots(self.pairs.len());
        for (dst, src) in pairs.iter_mut().zip(self.occupied()) {
            *dst = Some(src.clone());
        }
        Self { pairs, size: self.size }
    }
}

/// Equal when both hold the same keys with equal values, in any slot order.
impl<K, V> PartialEq for AssociativeArray<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.iter().all(|(k, v)| other.get(k).map_or(false, |o| o == v))
    }
}

impl<K: Eq, V: Eq> Eq for AssociativeArray<K, V> {}

impl<K, V> fmt::Debug for AssociativeArray<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders `{}` when empty, otherwise `{ k1: v1, k2: v2 }` in slot order.
impl<K, V> fmt::Display for AssociativeArray<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}")
        }

        f.write_str("{ ")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        f.write_str(" }")
    }
}
