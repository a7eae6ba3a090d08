/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use alloc::boxed::Box;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::MultiError;

/// One child of a [`MultiError`].
///
/// Converting any error into an `ErrNode` checks whether it is a
/// [`MultiError`], so nested aggregates always land in
/// [`ErrNode::Aggregate`] and render as subtrees.
#[derive(Debug)]
pub enum ErrNode {
    Leaf(Box<dyn Error + Send + Sync + 'static>),
    Aggregate(MultiError),
}

impl ErrNode {
    /// Classifies an already boxed error.
    pub fn from_boxed(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        match err.downcast::<MultiError>() {
            Ok(multi) => Self::Aggregate(*multi),
            Err(leaf) => Self::Leaf(leaf),
        }
    }

    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Leaf(leaf) => &**leaf,
            Self::Aggregate(multi) => multi,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    /// Attempts to downcast a leaf to a concrete error type.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Leaf(leaf) => leaf.downcast_ref(),
            Self::Aggregate(_) => None,
        }
    }

    /// Recovers a [`MultiError`] that was converted into an
    /// [`anyhow::Error`].
    #[cfg(feature = "anyhow")]
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        match err.downcast::<MultiError>() {
            Ok(multi) => Self::Aggregate(multi),
            Err(err) => Self::Leaf(err.into()),
        }
    }

    /// Recovers a [`MultiError`] that was converted into an
    /// [`eyre::Report`].
    #[cfg(feature = "eyre")]
    pub fn from_eyre(err: eyre::Report) -> Self {
        match err.downcast::<MultiError>() {
            Ok(multi) => Self::Aggregate(multi),
            Err(err) => Self::Leaf(err.into()),
        }
    }
}

impl<E> From<E> for ErrNode
where
    E: Error + Send + Sync + 'static,
{
    fn from(value: E) -> Self {
        Self::from_boxed(Box::new(value))
    }
}

impl Display for ErrNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => Display::fmt(leaf, f),
            Self::Aggregate(multi) => Display::fmt(multi, f),
        }
    }
}
