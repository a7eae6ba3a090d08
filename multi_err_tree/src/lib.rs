/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/*!
Collects several independent errors into one [`MultiError`] and displays
them as a tree.

```
use multi_err_tree::{ErrNode, MultiError};
# use std::fmt::{self, Display, Formatter};
# #[derive(Debug)]
# struct Msg(&'static str);
# impl Display for Msg {
#     fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(self.0) }
# }
# impl std::error::Error for Msg {}

let errs = MultiError::new([
    Some(ErrNode::from(Msg("1"))),
    None,
    Some(ErrNode::from(MultiError::new([Some(Msg("2")), Some(Msg("3"))]))),
    Some(ErrNode::from(MultiError::new([Some(Msg("4"))]))),
]);

assert_eq!(
    errs.to_string(),
    "3 error(s) occurred:
├── 1
├── 2 error(s) occurred:
│   ├── 2
│   └── 3
└── 1 error(s) occurred:
    └── 4
"
);
```

An aggregate with no children renders as an empty string and is treated
as "no error" by [`MultiError::into_result`].

The child graph must be acyclic. Ownership makes a cycle impossible to
build through this API, so the renderer performs no cycle detection.
*/

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
    slice,
};

mod fmt_logic;
mod indent;
pub use indent::*;
mod node;
pub use node::*;
mod pkg;
use pkg::MultiErrPkg;

#[cfg(feature = "json")]
mod json;

/// An ordered collection of errors, each either a leaf or another
/// [`MultiError`].
///
/// Children keep insertion order. Absent (`None`) inputs are dropped
/// before storage, so every child carries a failure.
///
/// `MultiError` is not synchronized. Grow it from one owner, then share it
/// read-only.
#[derive(Debug)]
pub struct MultiError {
    errs: Vec<ErrNode>,
    pkg: MultiErrPkg,
}

impl MultiError {
    /// Aggregates all present errors in `errs`, preserving their order.
    ///
    /// ```
    /// # use multi_err_tree::MultiError;
    /// let errs = MultiError::new([None, Some(core::fmt::Error), None]);
    /// assert_eq!(errs.len(), 1);
    /// ```
    #[track_caller]
    pub fn new<I, E>(errs: I) -> Self
    where
        I: IntoIterator<Item = Option<E>>,
        E: Into<ErrNode>,
    {
        Self {
            errs: errs.into_iter().flatten().map(Into::into).collect(),
            pkg: MultiErrPkg::new(),
        }
    }

    /// An aggregate with no children.
    #[track_caller]
    pub fn empty() -> Self {
        Self {
            errs: Vec::new(),
            pkg: MultiErrPkg::new(),
        }
    }

    /// Splits `results` into the successful values and an aggregate of the
    /// failures, both in iteration order.
    #[track_caller]
    pub fn from_results<I, T, E>(results: I) -> (Vec<T>, Self)
    where
        I: IntoIterator<Item = Result<T, E>>,
        E: Into<ErrNode>,
    {
        let mut multi = Self::empty();
        let mut oks = Vec::new();
        for res in results {
            match res {
                Ok(val) => oks.push(val),
                Err(err) => multi.push(err),
            }
        }
        (oks, multi)
    }

    /// Appends a single child.
    pub fn push<E: Into<ErrNode>>(&mut self, err: E) {
        self.errs.push(err.into());
    }

    /// Appends `err` if it is present.
    pub fn push_opt<E: Into<ErrNode>>(&mut self, err: Option<E>) {
        if let Some(err) = err {
            self.push(err)
        }
    }

    /// Number of direct children. Nested aggregates count as one.
    pub fn len(&self) -> usize {
        self.errs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errs.is_empty()
    }

    /// The direct children, in order.
    pub fn children(&self) -> &[ErrNode] {
        &self.errs
    }

    pub fn into_children(self) -> Vec<ErrNode> {
        self.errs
    }

    /// Iterates the direct children as plain errors.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.errs.iter(),
        }
    }

    /// `Ok(())` when there are no children, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Renders the tree into `formatter`.
    ///
    /// Writes nothing for an empty aggregate. Stops at the first error
    /// returned by `formatter`; anything already written stays written.
    pub fn render<F: fmt::Write>(&self, formatter: &mut F) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        fmt_logic::write_tree(self, formatter)
    }

    /// Renders the tree into a byte sink.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        write!(out, "{self}")
    }

    /// Where this aggregate was created.
    #[cfg(feature = "source_line")]
    pub fn location(&self) -> &'static core::panic::Location<'static> {
        self.pkg.location
    }

    /// Spans entered when this aggregate was created.
    #[cfg(feature = "tracing")]
    pub fn span_trace(&self) -> &tracing_error::SpanTrace {
        &self.pkg.trace
    }
}

/// Grows an error into a [`MultiError`].
///
/// * `base` is an aggregate: `errs` are appended to it in place and the
///   same aggregate is returned.
/// * `base` is a leaf: the result holds `base` first, then `errs`.
/// * `base` is `None`: same as [`MultiError::new`].
///
/// Absent entries of `errs` are dropped in every case.
///
/// ```
/// # use multi_err_tree::{append, MultiError};
/// let errs = append(Some(core::fmt::Error), [Some(core::fmt::Error), None]);
/// assert_eq!(errs.len(), 2);
///
/// let errs = append(Some(errs), [Some(core::fmt::Error)]);
/// assert_eq!(errs.len(), 3);
///
/// let errs = append(None::<MultiError>, [None::<core::fmt::Error>]);
/// assert!(errs.is_empty());
/// ```
#[track_caller]
pub fn append<B, I, E>(base: Option<B>, errs: I) -> MultiError
where
    B: Into<ErrNode>,
    I: IntoIterator<Item = Option<E>>,
    E: Into<ErrNode>,
{
    match base.map(Into::into) {
        Some(ErrNode::Aggregate(mut multi)) => {
            multi.extend(errs);
            multi
        }
        Some(leaf @ ErrNode::Leaf(_)) => {
            let mut multi = MultiError::empty();
            multi.push(leaf);
            multi.extend(errs);
            multi
        }
        None => MultiError::new(errs),
    }
}

impl Default for MultiError {
    #[track_caller]
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for MultiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl Error for MultiError {}

impl<E: Into<ErrNode>> Extend<Option<E>> for MultiError {
    fn extend<T: IntoIterator<Item = Option<E>>>(&mut self, iter: T) {
        self.errs.extend(iter.into_iter().flatten().map(Into::into))
    }
}

/// Collects present errors. Use [`MultiError::new`] to filter `Option`s.
///
/// With `source_line`, [`MultiError::location`] points inside this crate,
/// since `collect()` does not forward the caller's location. Use
/// `MultiError::new(iter.map(Some))` to record the calling line.
impl<E: Into<ErrNode>> FromIterator<E> for MultiError {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Some))
    }
}

impl IntoIterator for MultiError {
    type Item = ErrNode;
    type IntoIter = alloc::vec::IntoIter<ErrNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.errs.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a (dyn Error + 'static);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the children of a [`MultiError`] as `&dyn Error`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, ErrNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(ErrNode::as_error)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(ErrNode::as_error)
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl core::iter::FusedIterator for Iter<'_> {}
