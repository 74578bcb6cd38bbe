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

use super::parse_digits;
use crate::Error;

/// Temperature and dew point group, e.g. `03/M02`.
///
/// Each half is two digits, `M`-prefixed when below zero, or `//` when no
/// data is available.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Temperature {
    pub raw: String,
    /// Air temperature in °C; `None` when masked.
    pub air: Option<i16>,
    /// Dew point in °C; `None` when masked.
    pub dew_point: Option<i16>,
}

/// Parses one half of the group: `//`, `dd` or `Mdd`.
///
/// `Ok(None)` is the masked case; `Err` means the half has no valid shape.
fn parse_half(s: &str) -> Result<Option<i16>, Error> {
    if s == "//" {
        return Ok(None);
    }
    match s.strip_prefix('M') {
        Some(digits) if digits.len() == 2 => Ok(Some(-parse_digits::<i16>(digits)?)),
        None if s.len() == 2 => Ok(Some(parse_digits(s)?)),
        _ => Err(Error::NotANumber { text: s.to_owned() }),
    }
}

impl FromStr for Temperature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "temperature",
        };

        // Each half may itself contain no slash, so the separator is the
        // slash at which both sides parse.
        for (i, _) in s.match_indices('/') {
            let (left, right) = (&s[..i], &s[i + 1..]);
            if let (Ok(air), Ok(dew_point)) = (parse_half(left), parse_half(right)) {
                return Ok(Self {
                    raw: s.to_owned(),
                    air,
                    dew_point,
                });
            }
        }

        Err(unmatched())
    }
}

fn write_celsius(f: &mut fmt::Formatter<'_>, value: Option<i16>) -> fmt::Result {
    match value {
        Some(v) if v < 0 => write!(f, "-{:02}°C", -v),
        Some(v) => write!(f, "{v:02}°C"),
        None => write!(f, "нет данных"),
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Температура ")?;
        write_celsius(f, self.air)?;
        write!(f, ", точка росы ")?;
        write_celsius(f, self.dew_point)
    }
}
