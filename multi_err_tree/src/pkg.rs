/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Metadata captured when a [`MultiError`][`crate::MultiError`] is created.
///
/// [`Self::new()`] must be called by a function annotated with
/// `#[track_caller]` to capture the correct callsite.
///
/// Fields are enabled by feature flags and never affect the rendered tree.
#[derive(Debug, Clone)]
pub(crate) struct MultiErrPkg {
    #[cfg(feature = "source_line")]
    pub(crate) location: &'static core::panic::Location<'static>,
    #[cfg(feature = "tracing")]
    pub(crate) trace: tracing_error::SpanTrace,
}

impl MultiErrPkg {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "source_line")]
            location: core::panic::Location::caller(),
            #[cfg(feature = "tracing")]
            trace: tracing_error::SpanTrace::capture(),
        }
    }
}
