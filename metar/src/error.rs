// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;

/// Errors returned when parsing a single report group.
///
/// The top-level [`decode`](crate::decode) never returns these: a group that
/// fails to parse simply isn't of that kind and the classifier moves on to the
/// next pattern. They surface only through the per-group [`FromStr`]
/// implementations.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The token does not have the shape of the requested group.
    UnmatchedToken {
        token: String,
        expected: &'static str,
    },
    /// A substring that should be a run of digits is not.
    NotANumber { text: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedToken { token, expected } => {
                write!(f, "\"{token}\" is not a {expected} group")
            }
            Self::NotANumber { text } => {
                write!(f, "\"{text}\" should be a number")
            }
        }
    }
}

impl error::Error for Error {}
