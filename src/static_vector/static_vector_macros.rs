/// Counts comma-separated expressions at compile time. Used by
/// [`static_vec!`]; the expressions are never evaluated.
///
/// ```
/// use static_vector::__count;
/// const N: usize = __count!(1, 2, 3, 4);
/// assert_eq!(N, 4);
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:expr $(, $tail:expr)*) => {
        1usize + $crate::__count!($($tail),*)
    };
}

/// Creates a [`StaticVector`](crate::StaticVector).
///
/// ## Forms
///
/// Empty vector, capacity taken from the surrounding type:
/// ```
/// use static_vector::{static_vec, StaticVector};
/// let v: StaticVector<u8, 3> = static_vec![];
/// assert!(v.is_empty());
/// ```
///
/// Empty vector with explicit capacity:
/// ```
/// use static_vector::static_vec;
/// let mut v = static_vec![8;];
/// v.push_back(42);
/// assert_eq!(v.capacity(), 8);
/// ```
///
/// Elements, capacity equal to the element count:
/// ```
/// use static_vector::static_vec;
/// let v = static_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
/// ```
///
/// Elements with explicit capacity:
/// ```
/// use static_vector::static_vec;
/// let v = static_vec![4; "a", "b", "c"];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 4);
/// ```
///
/// Elements are moved into their slots in order; nothing is cloned. A
/// capacity smaller than the element count is rejected at compile time:
///
/// ```compile_fail
/// use static_vector::static_vec;
/// let v = static_vec![2; 1, 2, 3];
/// ```
#[macro_export]
macro_rules! static_vec {
    () => {
        $crate::StaticVector::new()
    };

    ($cap:expr;) => {
        $crate::StaticVector::<_, { $cap }>::new()
    };

    ($($elem:expr),+ $(,)?) => {
        $crate::StaticVector::<_, { $crate::__count!($($elem),*) }>::from([$($elem),*])
    };

    ($cap:expr; $($elem:expr),+ $(,)?) => {{
        const COUNT: usize = $crate::__count!($($elem),*);
        const _: () = assert!(
            $cap >= COUNT,
            concat!(
                "static_vec!: capacity ",
                stringify!($cap),
                " is smaller than the number of elements"
            )
        );

        $crate::StaticVector::<_, { $cap }>::from([$($elem),*])
    }};
}

#[cfg(test)]
mod tests {
    use crate::StaticVector;

    #[test]
    fn inferred_and_explicit_capacity() {
        let deduced = static_vec!["1".to_owned(), "2".to_owned(), "3".to_owned()];
        assert_eq!(deduced.capacity(), 3);
        assert!(deduced.iter().eq(&["1", "2", "3"]));

        let explicit = static_vec![8; "1".to_owned(), "2".to_owned()];
        assert_eq!(explicit.capacity(), 8);
        assert_eq!(explicit, &["1", "2"]);

        let single = static_vec![42];
        assert_eq!(single.capacity(), 1);
        assert_eq!(single, &[42]);
    }

    #[test]
    fn empty_forms() {
        let mut with_capacity = static_vec![5;];
        with_capacity.push_back(42);
        assert_eq!(with_capacity.front(), &42);
        assert_eq!(with_capacity.capacity(), 5);

        let inferred: StaticVector<i32, 2> = static_vec![];
        assert!(inferred.is_empty());
    }
}
