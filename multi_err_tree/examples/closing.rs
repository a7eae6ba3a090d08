/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, io};

use multi_err_tree::{append, ErrNode, MultiError};

#[derive(Debug)]
struct CloseError {
    resource: &'static str,
    reason: &'static str,
}

impl std::error::Error for CloseError {}
impl fmt::Display for CloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to close {}: {}", self.resource, self.reason)
    }
}

#[derive(Debug)]
struct Resource {
    name: &'static str,
    broken: Option<&'static str>,
}

impl Resource {
    fn close(&self) -> Result<(), CloseError> {
        match self.broken {
            Some(reason) => Err(CloseError {
                resource: self.name,
                reason,
            }),
            None => Ok(()),
        }
    }
}

fn close_group(group: &[Resource]) -> MultiError {
    MultiError::new(group.iter().map(|res| res.close().err()))
}

fn main() -> io::Result<()> {
    let files = [
        Resource {
            name: "config.toml",
            broken: None,
        },
        Resource {
            name: "cache.db",
            broken: Some("disk full"),
        },
    ];
    let sockets = [
        Resource {
            name: "tcp:8080",
            broken: Some("connection reset"),
        },
        Resource {
            name: "tcp:8081",
            broken: Some("timed out"),
        },
    ];

    let errs = append(
        Some(CloseError {
            resource: "session",
            reason: "already closed",
        }),
        [
            Some(ErrNode::from(close_group(&files))),
            Some(ErrNode::from(close_group(&sockets))),
            None,
        ],
    );

    match errs.into_result() {
        Ok(()) => println!("everything closed"),
        Err(errs) => errs.write_to(io::stderr().lock())?,
    }
    Ok(())
}
