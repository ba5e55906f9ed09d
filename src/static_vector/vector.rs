use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    mem::MaybeUninit,
    ops::{Bound, Deref, DerefMut, Index, IndexMut, Range, RangeBounds},
    ptr,
    slice::{self, SliceIndex},
};

use super::error::{CapacityError, StaticVectorError};

/// A fixed-capacity vector stored inline.
///
/// `StaticVector<T, N>` holds up to `N` elements of `T` in storage that lives
/// inside the value itself. It never allocates and never grows: the occupied
/// slots are always the prefix `[0, len)`, the slots past `len` are
/// uninitialized and never read.
///
/// Exceeding the capacity, indexing past `len` or popping an empty vector are
/// contract violations and panic. The `try_*` and `*_within_capacity`
/// variants report those conditions as values instead.
///
/// The vector does no internal synchronization. It is meant as a single-owner
/// scratch buffer; share it across threads only behind external locking.
///
/// # Examples
///
/// ```
/// use static_vector::StaticVector;
///
/// let mut v: StaticVector<i32, 4> = StaticVector::new();
/// v.push_back(1);
/// v.push_back(2);
/// v.push_back(3);
/// assert_eq!(*v.front(), 1);
/// assert_eq!(*v.back(), 3);
///
/// v.erase_at(1);
/// assert_eq!(v, &[1, 3]);
/// ```
pub struct StaticVector<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    len: usize,
}

/// Compile-time check that `M` elements fit into a capacity of `N`.
struct AssertFits<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> AssertFits<M, N> {
    const OK: () = assert!(M <= N, "source array is longer than the StaticVector capacity");
}

impl<T, const N: usize> StaticVector<T, N> {
    /// Creates a new empty `StaticVector`. All slots start vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v: StaticVector<i32, 4> = StaticVector::new();
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        StaticVector {
            data: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// This is a low-level operation that maintains none of the normal
    /// invariants of the type.
    ///
    /// # Safety
    ///
    /// - `new_len` must be less than or equal to `capacity()`.
    /// - the elements at `old_len..new_len` must be initialized.
    /// - the elements at `new_len..old_len` are forgotten, not dropped.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len;
    }

    /// Returns the vacant tail of the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 3> = StaticVector::new();
    /// v.push_back(1);
    /// let spare = v.spare_capacity_mut();
    /// assert_eq!(spare.len(), 2);
    /// spare[0].write(2);
    /// unsafe { v.set_len(2) };
    /// assert_eq!(v, &[1, 2]);
    /// ```
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let len = self.len;
        &mut self.data[len..]
    }

    /// Returns the number of occupied slots.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed capacity `N`.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns how many more elements fit before the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v: StaticVector<i32, 4> = [1].into();
    /// assert_eq!(v.remaining_capacity(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `true` when every slot is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 1> = StaticVector::new();
    /// assert!(!v.is_full());
    /// v.push_back(1);
    /// assert!(v.is_full());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `true` when no slot is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 2> = StaticVector::new();
    /// assert!(v.is_empty());
    /// v.push_back(1);
    /// assert!(!v.is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// Only the first `len()` elements behind the pointer are initialized.
    /// The pointer stays valid as long as the vector is neither moved nor
    /// mutated.
    #[must_use]
    #[inline]
    pub const fn data(&self) -> *const T {
        self.data.as_ptr() as *const T
    }

    /// Mutable counterpart of [`data`](Self::data).
    #[must_use]
    #[inline]
    pub fn data_mut(&mut self) -> *mut T {
        self.data.as_mut_ptr() as *mut T
    }

    /// Same as [`data`](Self::data), under the name slices use.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v: StaticVector<u8, 2> = [7].into();
    /// assert_eq!(unsafe { *v.as_ptr() }, 7);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data()
    }

    /// Same as [`data_mut`](Self::data_mut), under the name slices use.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<u8, 2> = [7].into();
    /// unsafe { *v.as_mut_ptr() = 8 };
    /// assert_eq!(v, &[8]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data_mut()
    }

    /// Returns the occupied prefix as a slice.
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // The first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.data(), self.len) }
    }

    /// Returns the occupied prefix as a mutable slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 4> = [3, 1, 2].into();
    /// v.as_mut_slice().sort();
    /// assert_eq!(v, &[1, 2, 3]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        unsafe { slice::from_raw_parts_mut(self.data_mut(), len) }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(first) => first,
            None => panic!("front called on an empty StaticVector"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 2> = [1, 2].into();
    /// *v.front_mut() = 10;
    /// assert_eq!(v, &[10, 2]);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => panic!("front_mut called on an empty StaticVector"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back called on an empty StaticVector"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 2> = [1, 2].into();
    /// *v.back_mut() = 20;
    /// assert_eq!(v, &[1, 20]);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut called on an empty StaticVector"),
        }
    }

    /// Returns the element at `index`.
    ///
    /// Hot paths that already know the index is in range can use the
    /// unchecked slice accessor `get_unchecked` instead.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v: StaticVector<i32, 4> = [10, 20, 30].into();
    /// assert_eq!(*v.at(1), 20);
    /// assert_eq!(unsafe { *v.get_unchecked(2) }, 30);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.try_at(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 4> = [10, 20].into();
    /// *v.at_mut(1) += 1;
    /// assert_eq!(v, &[10, 21]);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        match self.try_at_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the element at `index`, or an error describing why it is not
    /// there.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::{StaticVector, StaticVectorError};
    ///
    /// let v: StaticVector<i32, 4> = [10].into();
    /// assert_eq!(v.try_at(0), Ok(&10));
    /// assert_eq!(
    ///     v.try_at(3),
    ///     Err(StaticVectorError::IndexOutOfBounds { index: 3, len: 1 })
    /// );
    /// ```
    #[inline]
    pub fn try_at(&self, index: usize) -> Result<&T, StaticVectorError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(StaticVectorError::IndexOutOfBounds { index, len })
    }

    /// Mutable counterpart of [`try_at`](Self::try_at).
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 4> = [10].into();
    /// *v.try_at_mut(0).unwrap() = 11;
    /// assert!(v.try_at_mut(1).is_err());
    /// assert_eq!(v, &[11]);
    /// ```
    #[inline]
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, StaticVectorError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(StaticVectorError::IndexOutOfBounds { index, len })
    }

    /// Constructs a new element directly in the first vacant slot.
    ///
    /// `len` only grows once `make` has returned, so a panicking `make`
    /// leaves the vector unchanged.
    ///
    /// # Safety
    ///
    /// The vector must not be full.
    #[inline]
    pub unsafe fn unchecked_emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        debug_assert!(!self.is_full());
        let slot = self.data.get_unchecked_mut(self.len);
        let element = slot.write(make());
        self.len += 1;
        element
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 2> = StaticVector::new();
    /// *v.push_back(10) += 1;
    /// assert_eq!(v, &[11]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: T) -> &mut T {
        match self.push_within_capacity(value) {
            Ok(element) => element,
            Err(_) => panic!("StaticVector push should not exceed capacity (is {N})"),
        }
    }

    /// Appends `value` if there is room, otherwise hands it back inside the
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 1> = StaticVector::new();
    /// assert!(v.push_within_capacity(1).is_ok());
    /// assert_eq!(v.push_within_capacity(2).unwrap_err().into_inner(), 2);
    /// assert_eq!(v, &[1]);
    /// ```
    #[inline]
    pub fn push_within_capacity(&mut self, value: T) -> Result<&mut T, CapacityError<T>> {
        if self.is_full() {
            Err(CapacityError::new(value))
        } else {
            Ok(unsafe { self.unchecked_emplace_back(|| value) })
        }
    }

    /// Constructs an element in place from `make` and appends it.
    ///
    /// Exactly one `T` is produced, by `make`; nothing is cloned.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full. The closure is not called in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<String, 2> = StaticVector::new();
    /// v.emplace_back(|| "a".repeat(3));
    /// assert_eq!(v, &["aaa"]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.emplace_within_capacity(make) {
            Ok(element) => element,
            Err(_) => panic!("StaticVector emplace should not exceed capacity (is {N})"),
        }
    }

    /// Constructs an element in place if there is room. When full, the
    /// closure is returned uncalled.
    #[inline]
    pub fn emplace_within_capacity<F>(&mut self, make: F) -> Result<&mut T, F>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            Err(make)
        } else {
            Ok(unsafe { self.unchecked_emplace_back(make) })
        }
    }

    /// Clones and appends every element of `other`, returning the newly added
    /// elements, or `None` without touching the vector when they do not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 2> = StaticVector::new();
    /// assert!(v.try_extend_from_slice(&[1, 2]).is_some());
    /// assert!(v.try_extend_from_slice(&[3]).is_none());
    /// ```
    #[inline]
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Option<&mut [T]>
    where
        T: Clone,
    {
        if other.len() > self.remaining_capacity() {
            return None;
        }

        let start = self.len;
        for element in other {
            unsafe { self.unchecked_emplace_back(|| element.clone()) };
        }
        Some(&mut self.as_mut_slice()[start..])
    }

    /// # Panics
    ///
    /// Panics if `other` does not fit in the remaining capacity.
    #[inline]
    #[track_caller]
    pub fn extend_from_slice(&mut self, other: &[T]) -> &mut [T]
    where
        T: Clone,
    {
        let remaining = self.remaining_capacity();
        let count = other.len();
        match self.try_extend_from_slice(other) {
            Some(added) => added,
            None => panic!(
                "extending by {count} elements should not exceed remaining capacity (is {remaining})"
            ),
        }
    }

    /// Moves the last element out without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The vector must not be empty.
    #[inline]
    pub unsafe fn unchecked_pop(&mut self) -> T {
        debug_assert!(!self.is_empty());
        self.len -= 1;
        self.data.get_unchecked(self.len).assume_init_read()
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { self.unchecked_pop() })
        }
    }

    /// Removes the last element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 2> = [1, 2].into();
    /// assert_eq!(v.pop_back(), 2);
    /// assert_eq!(v, &[1]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        match self.pop() {
            Some(last) => last,
            None => panic!("pop_back called on an empty StaticVector"),
        }
    }

    /// Drops the elements in `range` and shifts the survivors after it down
    /// to close the gap. Relative order of the remaining elements is kept.
    ///
    /// Erased elements are dropped in index order before the tail moves.
    /// An empty range is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the start of the range is greater than its end, or if the
    /// end is greater than `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 6> = [1, 2, 3, 4, 5].into();
    /// v.erase(1..3);
    /// assert_eq!(v, &[1, 4, 5]);
    ///
    /// v.erase(2..2);
    /// assert_eq!(v, &[1, 4, 5]);
    /// ```
    #[track_caller]
    pub fn erase<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = occupied_range(range, self.len);
        if start == end {
            return;
        }

        struct ShiftTailOnDrop<'a, T, const N: usize> {
            vec: &'a mut StaticVector<T, N>,
            start: usize,
            end: usize,
            original_len: usize,
        }

        // Runs after the erased elements are dropped, including when one of
        // their destructors panics.
        impl<T, const N: usize> Drop for ShiftTailOnDrop<'_, T, N> {
            fn drop(&mut self) {
                let tail_len = self.original_len - self.end;
                unsafe {
                    let base = self.vec.data_mut();
                    ptr::copy(base.add(self.end), base.add(self.start), tail_len);
                    self.vec.set_len(self.start + tail_len);
                }
            }
        }

        let original_len = self.len;
        unsafe {
            self.set_len(start);
            let guard = ShiftTailOnDrop {
                vec: self,
                start,
                end,
                original_len,
            };
            let erased =
                ptr::slice_from_raw_parts_mut(guard.vec.data_mut().add(start), end - start);
            ptr::drop_in_place(erased);
            drop(guard);
        }
    }

    /// Drops the element at `index`, shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    #[track_caller]
    pub fn erase_at(&mut self, index: usize) {
        let len = self.len;
        if index >= len {
            panic!("erase index (is {index}) should be < len (is {len})");
        }
        self.erase(index..index + 1);
    }

    /// Moves the element at `index` out, shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 3> = [1, 2, 3].into();
    /// assert_eq!(v.remove(0), 1);
    /// assert_eq!(v, &[2, 3]);
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }
        unsafe {
            let ptr = self.data_mut().add(index);
            let removed = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, len - index - 1);
            self.set_len(len - 1);
            removed
        }
    }

    /// Drops every element past `new_len`, in index order.
    ///
    /// Has no effect if `new_len >= len()`.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        unsafe {
            // Shrink first so a panicking destructor cannot expose dropped slots.
            self.set_len(new_len);
            let tail = ptr::slice_from_raw_parts_mut(self.data_mut().add(new_len), len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops all elements. Capacity and storage stay as they are.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v: StaticVector<i32, 6> = [1, 2, 3, 4, 5].into();
    /// v.retain(|x| *x % 2 == 1);
    /// assert_eq!(v, &[1, 3, 5]);
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let original_len = self.len;
        if original_len == 0 {
            return;
        }

        struct BackshiftOnDrop<'a, T, const N: usize> {
            vec: &'a mut StaticVector<T, N>,
            processed: usize,
            deleted: usize,
            original_len: usize,
        }

        // Closes the hole left by rejected elements, also when `keep` or a
        // destructor panics midway. Unvisited elements are kept as they are.
        impl<T, const N: usize> Drop for BackshiftOnDrop<'_, T, N> {
            fn drop(&mut self) {
                unsafe {
                    if self.deleted > 0 {
                        let base = self.vec.data_mut();
                        ptr::copy(
                            base.add(self.processed),
                            base.add(self.processed - self.deleted),
                            self.original_len - self.processed,
                        );
                    }
                    self.vec.set_len(self.original_len - self.deleted);
                }
            }
        }

        unsafe { self.set_len(0) };
        let mut guard = BackshiftOnDrop {
            vec: self,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while guard.processed != original_len {
            let current = unsafe { guard.vec.data_mut().add(guard.processed) };
            if !keep(unsafe { &*current }) {
                guard.processed += 1;
                guard.deleted += 1;
                unsafe { ptr::drop_in_place(current) };
                continue;
            }
            if guard.deleted > 0 {
                unsafe {
                    let hole = guard.vec.data_mut().add(guard.processed - guard.deleted);
                    ptr::copy_nonoverlapping(current, hole, 1);
                }
            }
            guard.processed += 1;
        }

        drop(guard);
    }
}

/// Resolves `range` against the occupied prefix.
#[track_caller]
fn occupied_range<R>(range: R, len: usize) -> Range<usize>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => match start.checked_add(1) {
            Some(start) => start,
            None => panic!("range start overflows usize"),
        },
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => match end.checked_add(1) {
            Some(end) => end,
            None => panic!("range end overflows usize"),
        },
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        panic!("range start (is {start}) should be <= range end (is {end})");
    }
    if end > len {
        panic!("range end (is {end}) should be <= len (is {len})");
    }
    start..end
}

impl<T, const N: usize> Drop for StaticVector<T, N> {
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Default for StaticVector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for StaticVector<T, N> {
    /// Clones element by element into fresh storage.
    fn clone(&self) -> Self {
        let mut result = Self::new();
        for element in self.as_slice() {
            unsafe { result.unchecked_emplace_back(|| element.clone()) };
        }
        result
    }

    fn clone_from(&mut self, source: &Self) {
        let common = self.len.min(source.len);
        self.truncate(common);
        self.as_mut_slice()
            .clone_from_slice(&source.as_slice()[..common]);
        for element in &source.as_slice()[common..] {
            unsafe { self.unchecked_emplace_back(|| element.clone()) };
        }
    }
}

impl<T, const N: usize> Deref for StaticVector<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for StaticVector<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I, const N: usize> Index<I> for StaticVector<T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = <I as SliceIndex<[T]>>::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I, const N: usize> IndexMut<I> for StaticVector<T, N>
where
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, const N: usize> FromIterator<T> for StaticVector<T, N> {
    /// # Panics
    ///
    /// Panics if the iterator yields more than `N` elements.
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T, const N: usize> Extend<T> for StaticVector<T, N> {
    /// # Panics
    ///
    /// Panics if the iterator yields more than the remaining capacity.
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower_bound, _) = iter.size_hint();
        if lower_bound > self.remaining_capacity() {
            panic!("Can't extend {lower_bound} elements into StaticVector<_, {N}>");
        }
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: Clone + 'a, const N: usize> Extend<&'a T> for StaticVector<T, N> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

#[cfg(feature = "std")]
impl<const N: usize> std::io::Write for StaticVector<u8, N> {
    /// Copies as many bytes as still fit and reports how many that was.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    /// use std::io::Write;
    ///
    /// let mut v: StaticVector<u8, 3> = StaticVector::new();
    /// assert_eq!(v.write(&[1, 2, 3, 4]).unwrap(), 3);
    /// assert_eq!(v, &[1, 2, 3]);
    /// assert!(v.write_all(&[5]).is_err());
    /// ```
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let count = self.remaining_capacity().min(buf.len());
        let len = self.len;
        unsafe {
            ptr::copy_nonoverlapping(buf.as_ptr(), self.data_mut().add(len), count);
            self.set_len(len + count);
        }
        Ok(count)
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<T, const N: usize> PartialEq for StaticVector<T, N>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<&[U; M]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; M]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, const N: usize> Eq for StaticVector<T, N> where T: Eq {}

impl<T, const N: usize> PartialOrd for StaticVector<T, N>
where
    T: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, const N: usize> Ord for StaticVector<T, N>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, const N: usize> Hash for StaticVector<T, N>
where
    T: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for StaticVector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Borrow<[T]> for StaticVector<T, N> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> BorrowMut<[T]> for StaticVector<T, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for StaticVector<T, N> {
    /// Moves the array's elements into the vector, in order.
    ///
    /// Fails to compile when `M > N`.
    ///
    /// ```compile_fail
    /// use static_vector::StaticVector;
    ///
    /// let v: StaticVector<i32, 2> = [1, 2, 3].into();
    /// ```
    #[inline]
    fn from(values: [T; M]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = AssertFits::<M, N>::OK;

        let mut result = Self::new();
        for value in values {
            unsafe { result.unchecked_emplace_back(|| value) };
        }
        result
    }
}

impl<'a, T: Clone, const N: usize> TryFrom<&'a [T]> for StaticVector<T, N> {
    type Error = StaticVectorError;

    #[inline]
    fn try_from(values: &'a [T]) -> Result<Self, Self::Error> {
        let mut result = Self::new();
        match result.try_extend_from_slice(values) {
            Some(_) => Ok(result),
            None => Err(StaticVectorError::CapacityExceeded {
                capacity: N,
                requested: values.len(),
            }),
        }
    }
}

impl<T, const N: usize> TryFrom<StaticVector<T, N>> for [T; N] {
    type Error = StaticVector<T, N>;

    /// Succeeds only when every slot is occupied.
    #[inline]
    fn try_from(mut vec: StaticVector<T, N>) -> Result<[T; N], StaticVector<T, N>> {
        if vec.len() != N {
            return Err(vec);
        }

        unsafe {
            vec.set_len(0);
            Ok(ptr::read(vec.data() as *const [T; N]))
        }
    }
}

impl<T, const N: usize> IntoIterator for StaticVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        unsafe {
            self.set_len(0);
            IntoIter {
                data: ptr::read(&self.data),
                begin: 0,
                end,
            }
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// By-value iterator over a `StaticVector`. Elements not yielded are dropped
/// together with the iterator.
pub struct IntoIter<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    begin: usize,
    end: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(
                (self.data.as_ptr() as *const T).add(self.begin),
                self.end - self.begin,
            )
        }
    }

    /// Returns the elements not yet yielded, mutably.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v: StaticVector<i32, 3> = [1, 2, 3].into();
    /// let mut iter = v.into_iter();
    /// iter.next();
    /// iter.as_mut_slice()[0] = 20;
    /// assert_eq!(iter.next(), Some(20));
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(
                (self.data.as_mut_ptr() as *mut T).add(self.begin),
                self.end - self.begin,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.begin == self.end {
            return None;
        }
        let index = self.begin;
        self.begin += 1;
        Some(unsafe { self.data.get_unchecked(index).assume_init_read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.begin;
        (len, Some(len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.begin == self.end {
            return None;
        }
        self.end -= 1;
        Some(unsafe { self.data.get_unchecked(self.end).assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            unsafe { (self.data.as_mut_ptr() as *mut T).add(self.begin) },
            self.end - self.begin,
        );
        self.begin = self.end;
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
