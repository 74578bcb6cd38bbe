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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Error;

/// Kind of a trend marker group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TrendKind {
    Becoming,
    Temporary,
    NoSignificantChange,
    /// `FM`-prefixed time-of-change marker.
    From,
    /// `TL`-prefixed time-of-change marker.
    Until,
    /// `AT`-prefixed time-of-change marker.
    At,
}

/// Trend marker group, e.g. `BECMG`, `TEMPO`, `NOSIG` or `FM1230`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Trend {
    pub raw: String,
    pub kind: TrendKind,
}

impl FromStr for Trend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let kind = match s {
            "BECMG" => TrendKind::Becoming,
            "TEMPO" => TrendKind::Temporary,
            "NOSIG" => TrendKind::NoSignificantChange,
            _ => {
                let timed = [
                    ("FM", TrendKind::From),
                    ("TL", TrendKind::Until),
                    ("AT", TrendKind::At),
                ]
                .into_iter()
                .find_map(|(prefix, kind)| {
                    s.strip_prefix(prefix)
                        .filter(|rest| rest.bytes().all(|b| b.is_ascii_digit()))
                        .map(|_| kind)
                });
                timed.ok_or_else(|| Error::UnmatchedToken {
                    token: s.to_owned(),
                    expected: "trend",
                })?
            }
        };

        Ok(Self {
            raw: s.to_owned(),
            kind,
        })
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Тренд {}", self.raw)
    }
}
