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

/// Pressure group in one of its two encodings: `Q`-prefixed hectopascals
/// (QNH) or `A`-prefixed hundredths of inches of mercury.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Pressure {
    Hectopascals { raw: String, value: u16 },
    InchesOfMercury { raw: String, hundredths: u16 },
}

impl Pressure {
    /// Altimeter setting in inches of mercury, if this is the inHg encoding.
    pub fn inches(&self) -> Option<f32> {
        match self {
            Self::InchesOfMercury { hundredths, .. } => Some(f32::from(*hundredths) / 100.0),
            Self::Hectopascals { .. } => None,
        }
    }
}

impl FromStr for Pressure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "pressure",
        };

        if let Some(digits) = s.strip_prefix('Q') {
            if digits.len() == 4 {
                return Ok(Self::Hectopascals {
                    raw: s.to_owned(),
                    value: parse_digits(digits).map_err(|_| unmatched())?,
                });
            }
        } else if let Some(digits) = s.strip_prefix('A') {
            if digits.len() == 4 {
                return Ok(Self::InchesOfMercury {
                    raw: s.to_owned(),
                    hundredths: parse_digits(digits).map_err(|_| unmatched())?,
                });
            }
        }

        Err(unmatched())
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hectopascals { value, .. } => write!(f, "Давление QNH {value} гПа"),
            Self::InchesOfMercury { hundredths, .. } => {
                write!(f, "Давление {}.{:02} inHg", hundredths / 100, hundredths % 100)
            }
        }
    }
}
