/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use core::fmt::{self, Write};

use crate::{ErrNode, IndentWriter, MultiError};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUING: &str = "│   ";
const DANGLING: &str = "    ";

/// Header at the current level, then every child below it.
///
/// Sinks are passed as trait objects so each nesting level wraps a
/// `dyn Write` instead of growing a new `IndentWriter<IndentWriter<..>>`
/// type.
pub(crate) fn write_tree(tree: &MultiError, out: &mut dyn Write) -> fmt::Result {
    write_header(tree, out)?;
    write_children(tree, out)
}

#[inline]
fn write_header(tree: &MultiError, header: &mut dyn Write) -> fmt::Result {
    writeln!(header, "{} error(s) occurred:", tree.len())
}

fn write_children(tree: &MultiError, body: &mut dyn Write) -> fmt::Result {
    let last_idx = tree.len().saturating_sub(1);

    for (idx, child) in tree.children().iter().enumerate() {
        let (branch, continuation) = if idx == last_idx {
            (LAST_BRANCH, DANGLING)
        } else {
            (BRANCH, CONTINUING)
        };

        match child {
            ErrNode::Leaf(leaf) => writeln!(body, "{branch}{leaf}")?,
            ErrNode::Aggregate(nested) => {
                // Both wrappers sit on `body`. The header wrapper is done
                // after its single line, so it is dropped before the body
                // wrapper is created.
                write_header(nested, &mut IndentWriter::new(&mut *body, branch))?;
                write_children(nested, &mut IndentWriter::new(&mut *body, continuation))?;
            }
        }
    }

    Ok(())
}
