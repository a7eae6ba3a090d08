/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Error tree output to JSON.
//!
//! A [`MultiError`] serializes as `{"count":N,"errors":[..]}`, where each
//! leaf is its message string and each nested aggregate is another object.
//! With `source_line` a `"location"` field is added.

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{ErrNode, MultiError};

impl Serialize for MultiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const FIELDS: usize = if cfg!(feature = "source_line") { 3 } else { 2 };

        let mut state = serializer.serialize_struct("MultiError", FIELDS)?;
        state.serialize_field("count", &self.len())?;
        state.serialize_field("errors", self.children())?;

        #[cfg(feature = "source_line")]
        state.serialize_field("location", &LocationStr(self.location()))?;

        state.end()
    }
}

impl Serialize for ErrNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(leaf) => serializer.collect_str(leaf),
            Self::Aggregate(multi) => multi.serialize(serializer),
        }
    }
}

#[cfg(feature = "source_line")]
struct LocationStr(&'static core::panic::Location<'static>);

#[cfg(feature = "source_line")]
impl Serialize for LocationStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self.0)
    }
}
