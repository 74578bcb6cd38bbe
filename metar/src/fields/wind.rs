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

/// Wind speed unit with _KT_ as the default when the group names none.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    /// Returns the unit symbol as rendered in the text output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Knots => "уз.",
            Self::MetersPerSecond => "м/с",
            Self::KilometersPerHour => "км/ч",
        }
    }
}

/// Wind direction: compass degrees, variable or calm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum WindDirection {
    /// The `000` direction group.
    Calm,
    /// The `VRB` direction group.
    Variable,
    Degrees(u16),
}

/// Surface wind group, e.g. `22005G12MPS`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Wind {
    pub raw: String,
    pub direction: WindDirection,
    pub speed: u16,
    pub gust: Option<u16>,
    pub unit: SpeedUnit,
}

impl FromStr for Wind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "wind",
        };

        let (direction, mut rest) = if let Some(rest) = s.strip_prefix("VRB") {
            (WindDirection::Variable, rest)
        } else if s.len() >= 3 && s.is_char_boundary(3) {
            let head = &s[..3];
            let degrees: u16 = parse_digits(head).map_err(|_| unmatched())?;
            let direction = if head == "000" {
                WindDirection::Calm
            } else {
                WindDirection::Degrees(degrees)
            };
            (direction, &s[3..])
        } else {
            return Err(unmatched());
        };

        let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if !(2..=3).contains(&digits) {
            return Err(unmatched());
        }
        let speed: u16 = parse_digits(&rest[..digits]).map_err(|_| unmatched())?;
        rest = &rest[digits..];

        let gust = if let Some(after) = rest.strip_prefix('G') {
            let digits = after.bytes().take_while(|b| b.is_ascii_digit()).count();
            if !(2..=3).contains(&digits) {
                return Err(unmatched());
            }
            rest = &after[digits..];
            Some(parse_digits(&after[..digits]).map_err(|_| unmatched())?)
        } else {
            None
        };

        let unit = match rest {
            "" | "KT" => SpeedUnit::Knots,
            "MPS" => SpeedUnit::MetersPerSecond,
            "KMH" => SpeedUnit::KilometersPerHour,
            _ => return Err(unmatched()),
        };

        Ok(Self {
            raw: s.to_owned(),
            direction,
            speed,
            gust,
            unit,
        })
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit.symbol();
        match self.direction {
            WindDirection::Calm => write!(f, "Штиль, {} {unit}", self.speed)?,
            WindDirection::Variable => write!(f, "Ветер переменный {} {unit}", self.speed)?,
            WindDirection::Degrees(d) => write!(f, "Ветер {d}° {} {unit}", self.speed)?,
        }
        if let Some(gust) = self.gust {
            write!(f, ", порывы {gust} {unit}")?;
        }
        Ok(())
    }
}

/// Wind variability group, e.g. `180V250`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WindVariability {
    pub raw: String,
    pub from: u16,
    pub to: u16,
}

impl FromStr for WindVariability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "wind variability",
        };

        if s.len() != 7 || s.as_bytes()[3] != b'V' {
            return Err(unmatched());
        }
        let from = parse_digits(&s[..3]).map_err(|_| unmatched())?;
        let to = parse_digits(&s[4..]).map_err(|_| unmatched())?;

        Ok(Self {
            raw: s.to_owned(),
            from,
            to,
        })
    }
}

impl fmt::Display for WindVariability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Вариабельность ветра: {:03}°–{:03}°", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wind_with_gusts() {
        let wind: Wind = "22005G12MPS".parse().unwrap();
        assert_eq!(wind.direction, WindDirection::Degrees(220));
        assert_eq!(wind.speed, 5);
        assert_eq!(wind.gust, Some(12));
        assert_eq!(wind.unit, SpeedUnit::MetersPerSecond);
        assert_eq!(wind.to_string(), "Ветер 220° 5 м/с, порывы 12 м/с");
    }

    #[test]
    fn parse_wind_defaults_to_knots() {
        let wind: Wind = "24015G25KT".parse().unwrap();
        assert_eq!(wind.unit, SpeedUnit::Knots);
        let wind: Wind = "24015G25".parse().unwrap();
        assert_eq!(wind.unit, SpeedUnit::Knots);
    }

    #[test]
    fn parse_calm_wind() {
        let wind: Wind = "00000MPS".parse().unwrap();
        assert_eq!(wind.direction, WindDirection::Calm);
        assert_eq!(wind.to_string(), "Штиль, 0 м/с");
    }

    #[test]
    fn parse_variable_wind() {
        let wind: Wind = "VRB13MPS".parse().unwrap();
        assert_eq!(wind.direction, WindDirection::Variable);
        assert_eq!(wind.to_string(), "Ветер переменный 13 м/с");
    }

    #[test]
    fn visibility_group_is_not_wind() {
        // a bare 4-digit group leaves only one digit for the speed
        assert!("9999".parse::<Wind>().is_err());
        assert!("0800".parse::<Wind>().is_err());
    }

    #[test]
    fn parse_variability() {
        let var: WindVariability = "180V250".parse().unwrap();
        assert_eq!((var.from, var.to), (180, 250));
        assert_eq!(var.to_string(), "Вариабельность ветра: 180°–250°");
        assert!("180V25".parse::<WindVariability>().is_err());
    }
}
