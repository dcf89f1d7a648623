//! Error and result types for the `donatis` crate.

use core::fmt;

/// A result that is either `Ok(T)` or `Err(donatis::Error)`.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An extension trait for [`donatis::Result`][crate::Result] that provides
/// additional methods.
pub trait ResultExt<T> {
    /// Turns an [`Exhausted`][ErrorKind::Exhausted] error into `Ok(None)` and
    /// a pulled value into `Ok(Some(value))`. Any other error is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use donatis::{donors as d, Donor, ResultExt};
    ///
    /// let mut names = d::sequence(["Alice"]).unwrap();
    /// assert_eq!(names.next().exhausted_as_none().unwrap(), Some("Alice"));
    /// assert_eq!(names.next().exhausted_as_none().unwrap(), None);
    /// ```
    fn exhausted_as_none(self) -> Result<Option<T>>;
}

impl<T> ResultExt<T> for Result<T> {
    #[inline]
    fn exhausted_as_none(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_exhausted() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// An error that can occur when pulling from, or constructing, a donor.
///
/// This type is a thin wrapper around [`ErrorKind`], which contains the
/// specific kind of error that occurred.
///
/// Errors raised inside user-supplied functions (an indexed sequence's index
/// function, a chained sequence's step function, a builder) are passed back to
/// the caller of [`Donor::next`][crate::Donor::next] exactly as they were
/// returned.
///
/// # Examples
///
/// ```
/// use donatis::{Error, ErrorKind};
///
/// let error: Error = {
///     // ...
/// #   Error::exhausted()
/// };
///
/// if error.is_exhausted() {
///     println!("exhausted!");
/// }
///
/// match error.kind() {
///     ErrorKind::Exhausted => println!("still exhausted!"),
///     ErrorKind::InvalidSequence => println!("bad input!"),
///     ErrorKind::Other(msg) => println!("other! {msg}"),
///
///     // The `ErrorKind` type is not exhaustive, so we always need a catch-all arm.
///     unknown => println!("unknown! {unknown:?}"),
/// }
/// ```
pub struct Error {
    // When we can, box the inner error kind to save space in the `Error`
    // struct. This is only possible when the `alloc` feature is enabled.
    #[cfg(feature = "alloc")]
    kind: alloc::boxed::Box<ErrorKind>,
    #[cfg(not(feature = "alloc"))]
    kind: ErrorKind,
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        #[cfg(feature = "alloc")]
        let kind = alloc::boxed::Box::new(kind);
        Self { kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ErrorKind::Exhausted => {
                write!(f, "the sequence is exhausted")
            }
            ErrorKind::InvalidSequence => {
                write!(f, "a sequence needs at least one element")
            }
            ErrorKind::Other(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Returns a new error indicating that a finite sequence has already
    /// donated its last element.
    #[must_use]
    pub fn exhausted() -> Self {
        ErrorKind::Exhausted.into()
    }

    /// Returns a new error indicating that a sequence was constructed from an
    /// empty source.
    #[must_use]
    pub fn invalid_sequence() -> Self {
        ErrorKind::InvalidSequence.into()
    }

    /// Returns a new error with the given message.
    ///
    /// This is how index functions, step functions, and builders report their
    /// own failures.
    #[must_use]
    pub fn other(msg: impl Into<ErrorMessage>) -> Self {
        ErrorKind::Other(msg.into()).into()
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` if the error's kind is
    /// [`Exhausted`][ErrorKind::Exhausted].
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind(), ErrorKind::Exhausted)
    }

    /// Returns `true` if the error's kind is
    /// [`InvalidSequence`][ErrorKind::InvalidSequence].
    #[must_use]
    pub fn is_invalid_sequence(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidSequence)
    }

    /// Returns `true` if the error's kind is
    /// [`Other`][ErrorKind::Other].
    #[must_use]
    pub fn is_other(&self) -> bool {
        matches!(self.kind(), ErrorKind::Other(_))
    }
}

/// The kind of an error that can occur when using the `donatis` crate.
///
/// This enum is not exhaustive, and new variants may be added in the future.
/// When matching on this enum, a catch-all arm should be used to handle any
/// new variants that are added.
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// A finite sequence was pulled after its last element was returned.
    ///
    /// This is terminal: the sequence never recovers.
    Exhausted,

    /// A sequence was constructed from an empty source.
    InvalidSequence,

    /// Some other error occurred, usually inside a user-supplied function.
    Other(ErrorMessage),
}

impl From<Error> for ErrorKind {
    #[inline]
    fn from(err: Error) -> Self {
        #[cfg(feature = "alloc")]
        return *err.kind;
        #[cfg(not(feature = "alloc"))]
        return err.kind;
    }
}

/// A message that can be attached to an error.
///
/// This should only be used with `ErrorKind::Other` and in situations where
/// there is not a more-specific error kind to use.
///
/// By default, this type is a thin wrapper around a string slice. When the
/// `alloc` feature is enabled, it can be a borrowed or owned string.
///
/// # Examples
///
/// ```
/// use donatis::ErrorMessage;
///
/// let msg = ErrorMessage::new("something went wrong");
/// assert_eq!(msg.as_str(), "something went wrong");
/// ```
#[derive(Debug)]
pub struct ErrorMessage {
    #[cfg(feature = "alloc")]
    inner: alloc::borrow::Cow<'static, str>,
    #[cfg(not(feature = "alloc"))]
    inner: &'static str,
}

impl ErrorMessage {
    /// Returns a new error message with the given string.
    #[must_use]
    pub fn new(msg: impl Into<ErrorMessage>) -> Self {
        msg.into()
    }

    /// Returns the message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for ErrorMessage {
    #[inline]
    fn from(s: &'static str) -> Self {
        let inner = s;
        #[cfg(feature = "alloc")]
        let inner = alloc::borrow::Cow::Borrowed(inner);
        Self { inner }
    }
}

#[cfg(feature = "alloc")]
impl From<alloc::borrow::Cow<'static, str>> for ErrorMessage {
    #[inline]
    fn from(s: alloc::borrow::Cow<'static, str>) -> Self {
        Self { inner: s }
    }
}

#[cfg(feature = "alloc")]
impl From<alloc::string::String> for ErrorMessage {
    #[inline]
    fn from(s: alloc::string::String) -> Self {
        let inner = s.into();
        Self { inner }
    }
}
