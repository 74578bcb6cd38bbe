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

/// Horizontal visibility group: four digits with an optional direction
/// suffix, e.g. `0900SE`.
///
/// How the group is rendered depends on context (first entry, directional
/// qualifier or secondary minimum), so the sentence is composed by the
/// classifier rather than here.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Visibility {
    pub raw: String,
    pub meters: u16,
    pub direction: Option<String>,
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "visibility",
        };

        if s.len() < 4 || !s.is_char_boundary(4) {
            return Err(unmatched());
        }
        let meters = parse_digits(&s[..4]).map_err(|_| unmatched())?;

        let suffix = &s[4..];
        let direction = match suffix.len() {
            0 => None,
            1 | 2 if suffix.chars().all(|c| matches!(c, 'N' | 'S' | 'E' | 'W')) => {
                Some(suffix.to_owned())
            }
            _ => return Err(unmatched()),
        };

        Ok(Self {
            raw: s.to_owned(),
            meters,
            direction,
        })
    }
}

/// Runway visual range value, possibly outside the measurable range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RvrValue {
    Exact(u16),
    /// `P`-prefixed: more than the stated distance.
    MoreThan(u16),
    /// `M`-prefixed: less than the stated distance.
    LessThan(u16),
}

impl fmt::Display for RvrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(m) => write!(f, "{m} м"),
            Self::MoreThan(m) => write!(f, ">{m} м"),
            Self::LessThan(m) => write!(f, "<{m} м"),
        }
    }
}

/// Tendency suffix of a runway visual range group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RvrTendency {
    Improving,
    Worsening,
    NoChange,
}

impl RvrTendency {
    fn describe(&self) -> &'static str {
        match self {
            Self::Improving => "улучшалась",
            Self::Worsening => "ухудшалась",
            Self::NoChange => "без изменений",
        }
    }
}

/// Runway visual range group, e.g. `R28L/1900U` or `R06/P2000V2500D`.
///
/// A fully masked value (`////`) decodes as present but without data.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RunwayVisualRange {
    pub raw: String,
    pub runway: String,
    pub value: Option<RvrValue>,
    pub maximum: Option<u16>,
    pub tendency: Option<RvrTendency>,
}

impl FromStr for RunwayVisualRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "runway visual range",
        };

        let rest = s.strip_prefix('R').ok_or_else(unmatched)?;
        let (runway, rest) = rest.split_once('/').ok_or_else(unmatched)?;
        if !is_runway_designator(runway) {
            return Err(unmatched());
        }

        let (value, mut rest) = if let Some(rest) = rest.strip_prefix("////") {
            (None, rest)
        } else {
            let (prefix, digits_at) = match rest.as_bytes().first() {
                Some(b'P') | Some(b'M') => (rest.as_bytes()[0], 1),
                _ => (0, 0),
            };
            if rest.len() < digits_at + 4 {
                return Err(unmatched());
            }
            let meters = parse_digits(&rest[digits_at..digits_at + 4]).map_err(|_| unmatched())?;
            let value = match prefix {
                b'P' => RvrValue::MoreThan(meters),
                b'M' => RvrValue::LessThan(meters),
                _ => RvrValue::Exact(meters),
            };
            (Some(value), &rest[digits_at + 4..])
        };

        let maximum = if let Some(after) = rest.strip_prefix('V') {
            if after.len() < 4 {
                return Err(unmatched());
            }
            rest = &after[4..];
            Some(parse_digits(&after[..4]).map_err(|_| unmatched())?)
        } else {
            None
        };

        let tendency = match rest {
            "" => None,
            "U" => Some(RvrTendency::Improving),
            "D" => Some(RvrTendency::Worsening),
            "N" => Some(RvrTendency::NoChange),
            _ => return Err(unmatched()),
        };

        Ok(Self {
            raw: s.to_owned(),
            runway: runway.to_owned(),
            value,
            maximum,
            tendency,
        })
    }
}

impl fmt::Display for RunwayVisualRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RVR ВПП {}: ", self.runway)?;
        match &self.value {
            Some(value) => write!(f, "{value}")?,
            None => write!(f, "нет данных")?,
        }
        if let Some(tendency) = self.tendency {
            write!(f, " {}", tendency.describe())?;
        }
        Ok(())
    }
}

/// A 2-digit runway number with an optional L/R/C suffix.
fn is_runway_designator(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        2 => bytes.iter().all(|b| b.is_ascii_digit()),
        3 => {
            bytes[..2].iter().all(|b| b.is_ascii_digit())
                && matches!(bytes[2], b'L' | b'R' | b'C')
        }
        _ => false,
    }
}

/// Vertical visibility group, e.g. `VV003` or the masked `VV///`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VerticalVisibility {
    pub raw: String,
    /// Height in meters; `None` when masked.
    pub meters: Option<u16>,
}

impl FromStr for VerticalVisibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "vertical visibility",
        };

        let rest = s.strip_prefix("VV").ok_or_else(unmatched)?;
        let meters = match rest {
            "///" => None,
            _ if rest.len() == 3 => {
                let hundreds: u16 = parse_digits(rest).map_err(|_| unmatched())?;
                Some(hundreds * 30)
            }
            _ => return Err(unmatched()),
        };

        Ok(Self {
            raw: s.to_owned(),
            meters,
        })
    }
}

impl fmt::Display for VerticalVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.meters {
            Some(m) => write!(f, "Вертикальная видимость {m} м"),
            None => write!(f, "Вертикальная видимость: нет данных"),
        }
    }
}
