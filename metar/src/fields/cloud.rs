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

/// Cloud amount code of a cloud layer group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CloudAmount {
    Few,
    Scattered,
    Broken,
    Overcast,
    NoSignificantClouds,
    SkyClear,
    Clear,
    CeilingAndVisibilityOk,
}

impl CloudAmount {
    const CODES: &'static [(&'static str, CloudAmount)] = &[
        ("FEW", Self::Few),
        ("SCT", Self::Scattered),
        ("BKN", Self::Broken),
        ("OVC", Self::Overcast),
        ("NSC", Self::NoSignificantClouds),
        ("SKC", Self::SkyClear),
        ("CLR", Self::Clear),
        ("CAVOK", Self::CeilingAndVisibilityOk),
    ];

    /// Returns the fixed descriptive phrase used in the text output.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Few => "мало (1–2/8)",
            Self::Scattered => "рассеянные (3–4/8)",
            Self::Broken => "значительная (5–7/8)",
            Self::Overcast => "сплошная (8/8)",
            Self::NoSignificantClouds => "нет значимых облаков",
            Self::SkyClear => "ясно (sky clear)",
            Self::Clear => "ясно (clear)",
            Self::CeilingAndVisibilityOk => "CAVOK (видимость ≥10 км, без облаков и явлений)",
        }
    }
}

/// Convective cloud type suffix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ConvectiveType {
    Cumulonimbus,
    ToweringCumulus,
}

impl ConvectiveType {
    fn describe(&self) -> &'static str {
        match self {
            Self::Cumulonimbus => "кучево-дождевые (CB)",
            Self::ToweringCumulus => "мощные кучевые (TCU)",
        }
    }
}

/// Cloud base height, reported in hundreds of feet or unknown-masked.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CloudBase {
    Reported { hundreds_ft: u16 },
    NoData,
}

impl CloudBase {
    /// Base height in feet, if reported.
    pub fn feet(&self) -> Option<u32> {
        match self {
            Self::Reported { hundreds_ft } => Some(u32::from(*hundreds_ft) * 100),
            Self::NoData => None,
        }
    }

    /// Approximate base height in meters, if reported.
    pub fn meters(&self) -> Option<u32> {
        match self {
            Self::Reported { hundreds_ft } => Some(u32::from(*hundreds_ft) * 30),
            Self::NoData => None,
        }
    }
}

/// Cloud layer group, e.g. `BKN028CB`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CloudLayer {
    pub raw: String,
    pub amount: CloudAmount,
    pub base: Option<CloudBase>,
    pub convective: Option<ConvectiveType>,
}

impl FromStr for CloudLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "cloud layer",
        };

        let (amount, mut rest) = CloudAmount::CODES
            .iter()
            .find_map(|(code, amount)| s.strip_prefix(code).map(|rest| (*amount, rest)))
            .ok_or_else(unmatched)?;

        let base = if let Some(after) = rest.strip_prefix("///") {
            rest = after;
            Some(CloudBase::NoData)
        } else if rest.len() >= 3 && rest.as_bytes()[..3].iter().all(|b| b.is_ascii_digit()) {
            let hundreds_ft = parse_digits(&rest[..3]).map_err(|_| unmatched())?;
            rest = &rest[3..];
            Some(CloudBase::Reported { hundreds_ft })
        } else {
            None
        };

        let convective = match rest {
            "" => None,
            "CB" => Some(ConvectiveType::Cumulonimbus),
            "TCU" => Some(ConvectiveType::ToweringCumulus),
            _ => return Err(unmatched()),
        };

        Ok(Self {
            raw: s.to_owned(),
            amount,
            base,
            convective,
        })
    }
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount.describe())?;

        // CAVOK carries no base or type of its own
        if self.amount == CloudAmount::CeilingAndVisibilityOk {
            return Ok(());
        }

        match self.base {
            Some(CloudBase::NoData) => write!(f, " основание: нет данных")?,
            Some(base @ CloudBase::Reported { .. }) => {
                if let (Some(m), Some(ft)) = (base.meters(), base.feet()) {
                    write!(f, " основание ~{m} м ({ft} ft)")?;
                }
            }
            None => {}
        }

        if let Some(convective) = self.convective {
            write!(f, " {}", convective.describe())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_broken_cumulonimbus() {
        let layer: CloudLayer = "BKN028CB".parse().unwrap();
        assert_eq!(layer.amount, CloudAmount::Broken);
        assert_eq!(layer.base, Some(CloudBase::Reported { hundreds_ft: 28 }));
        assert_eq!(layer.base.unwrap().feet(), Some(2800));
        assert_eq!(layer.base.unwrap().meters(), Some(840));
        assert_eq!(layer.convective, Some(ConvectiveType::Cumulonimbus));
        assert_eq!(
            layer.to_string(),
            "значительная (5–7/8) основание ~840 м (2800 ft) кучево-дождевые (CB)"
        );
    }

    #[test]
    fn parse_masked_base() {
        let layer: CloudLayer = "BKN///".parse().unwrap();
        assert_eq!(layer.base, Some(CloudBase::NoData));
        assert_eq!(
            layer.to_string(),
            "значительная (5–7/8) основание: нет данных"
        );
    }

    #[test]
    fn cavok_short_circuits() {
        let layer: CloudLayer = "CAVOK".parse().unwrap();
        assert_eq!(layer.amount, CloudAmount::CeilingAndVisibilityOk);
        assert_eq!(
            layer.to_string(),
            "CAVOK (видимость ≥10 км, без облаков и явлений)"
        );
    }

    #[test]
    fn parse_amount_without_height() {
        let layer: CloudLayer = "NSC".parse().unwrap();
        assert_eq!(layer.base, None);
        assert_eq!(layer.to_string(), "нет значимых облаков");
    }

    #[test]
    fn reject_foreign_tokens() {
        assert!("BKN02".parse::<CloudLayer>().is_err());
        assert!("OVC036XX".parse::<CloudLayer>().is_err());
        assert!("9999".parse::<CloudLayer>().is_err());
    }
}
