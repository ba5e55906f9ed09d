use core::fmt;

/// Errors returned by the checked `StaticVector` accessors and conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticVectorError {
    /// An index was not inside the occupied prefix.
    IndexOutOfBounds { index: usize, len: usize },
    /// More elements were requested than the vector can hold.
    CapacityExceeded { capacity: usize, requested: usize },
}

impl fmt::Display for StaticVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticVectorError::IndexOutOfBounds { index, len } => {
                write!(f, "index (is {index}) should be < len (is {len})")
            }
            StaticVectorError::CapacityExceeded {
                capacity,
                requested,
            } => write!(
                f,
                "requested length (is {requested}) exceeds capacity (is {capacity})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StaticVectorError {}

/// A push that did not fit. Holds on to the rejected element so the caller
/// keeps ownership of it.
///
/// # Examples
///
/// ```
/// use static_vector::StaticVector;
///
/// let mut v: StaticVector<String, 1> = StaticVector::new();
/// v.push_back("kept".to_owned());
/// let err = v.push_within_capacity("rejected".to_owned()).unwrap_err();
/// assert_eq!(err.into_inner(), "rejected");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    element: T,
}

impl<T> CapacityError<T> {
    /// Wraps the element that did not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use static_vector::CapacityError;
    ///
    /// let err = CapacityError::new(3);
    /// assert_eq!(err.into_inner(), 3);
    /// ```
    #[inline]
    pub const fn new(element: T) -> Self {
        CapacityError { element }
    }

    /// Returns the element that could not be inserted.
    #[inline]
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Drops the element, keeping only the error kind.
    #[inline]
    pub fn simplify(self) -> CapacityError<()> {
        CapacityError { element: () }
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapacityError: {self}")
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("insufficient capacity")
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for CapacityError<T> {}

#[cfg(test)]
mod tests {
    use super::{CapacityError, StaticVectorError};

    #[test]
    fn display_messages() {
        let err = StaticVectorError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index (is 4) should be < len (is 2)");

        let err = StaticVectorError::CapacityExceeded {
            capacity: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "requested length (is 5) exceeds capacity (is 3)"
        );

        let err = CapacityError::new(7u8);
        assert_eq!(err.to_string(), "insufficient capacity");
        assert_eq!(format!("{err:?}"), "CapacityError: insufficient capacity");
    }

    #[test]
    fn capacity_error_returns_element() {
        let err = CapacityError::new(String::from("x"));
        assert_eq!(err.clone().into_inner(), "x");
        assert_eq!(err.simplify(), CapacityError::new(()));
    }
}
