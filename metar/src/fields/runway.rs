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

//! Runway surface state groups.
//!
//! Two token shapes exist: a fixed one with a 6-digit body (deposit digit,
//! coverage digit, 2-digit thickness code, 2-character braking code) and a
//! variable 4–6 character body in which the trailing two characters are the
//! braking code. On top of that come the special tokens (`CLRD`, `CLSD`,
//! `SNOCLO`, clearing in progress) and the runway sentinels `88` (all
//! runways) and `99` (repeat of the previous report).

use super::parse_digits;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Runway named by a state group, including the two sentinel numbers.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RunwayDesignator {
    Runway(String),
    /// Sentinel `88`.
    AllRunways,
    /// Sentinel `99`.
    PreviousReport,
}

impl RunwayDesignator {
    fn new(code: &str) -> Self {
        match code {
            "88" => Self::AllRunways,
            "99" => Self::PreviousReport,
            _ => Self::Runway(code.to_owned()),
        }
    }

    fn header(&self) -> String {
        match self {
            Self::Runway(runway) => format!("Состояние ВПП {runway}:"),
            Self::AllRunways => "Состояние всех ВПП:".to_owned(),
            Self::PreviousReport => "Состояние ВПП: повтор из предыдущего сообщения".to_owned(),
        }
    }
}

/// Deposit thickness decoded from its 2-digit code.
///
/// The code mapping is non-linear: 0 is sub-millimeter, 1–90 are literal
/// millimeters, five reserved codes map to centimeter bands or the unusable
/// sentinel, anything else passes through as a raw code.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Thickness {
    SubMillimeter,
    Millimeters(u16),
    Centimeters(u16),
    /// Code 99: the runway is out of service.
    Unusable,
    /// An unmapped code, passed through verbatim.
    Code(String),
    NoData,
}

impl Thickness {
    fn from_code(code: &str) -> Self {
        if code == "//" {
            return Self::NoData;
        }
        match parse_digits::<u16>(code) {
            Ok(0) => Self::SubMillimeter,
            Ok(mm @ 1..=90) => Self::Millimeters(mm),
            Ok(92) => Self::Centimeters(10),
            Ok(93) => Self::Centimeters(15),
            Ok(94) => Self::Centimeters(20),
            Ok(98) => Self::Centimeters(40),
            Ok(99) => Self::Unusable,
            Ok(_) => Self::Code(code.to_owned()),
            Err(_) => Self::NoData,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::SubMillimeter => "<1 мм".to_owned(),
            Self::Millimeters(mm) => format!("{mm} мм"),
            Self::Centimeters(cm) => format!("{cm} см"),
            Self::Unusable => "ВПП не работает".to_owned(),
            Self::Code(code) => format!("код {code}"),
            Self::NoData => "нет данных".to_owned(),
        }
    }
}

/// Braking action decoded from its 2-character code.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BrakingAction {
    Good,
    MediumGood,
    Medium,
    MediumPoor,
    Poor,
    Unreliable,
    /// A literal friction coefficient in hundredths.
    Coefficient(u16),
    Code(String),
    NoData,
}

impl BrakingAction {
    fn from_code(code: &str) -> Self {
        match code {
            "95" => Self::Good,
            "94" => Self::MediumGood,
            "93" => Self::Medium,
            "92" => Self::MediumPoor,
            "91" => Self::Poor,
            "99" => Self::Unreliable,
            "//" => Self::NoData,
            _ => match parse_digits::<u16>(code) {
                Ok(hundredths) => Self::Coefficient(hundredths),
                Err(_) => Self::Code(code.to_owned()),
            },
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Good => "хорошая (≥0.40)".to_owned(),
            Self::MediumGood => "средне-хорошая (0.36–0.39)".to_owned(),
            Self::Medium => "средняя (0.30–0.35)".to_owned(),
            Self::MediumPoor => "плохо-средняя (0.26–0.29)".to_owned(),
            Self::Poor => "плохая (≤0.25)".to_owned(),
            Self::Unreliable => "ненадежно".to_owned(),
            Self::Coefficient(hundredths) => {
                format!("коэффициент ≈ {:.2}", f32::from(*hundredths) / 100.0)
            }
            Self::Code(code) => format!("код {code}"),
            Self::NoData => "нет данных".to_owned(),
        }
    }
}

/// Decoded runway surface state group.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RunwayState {
    /// `CLRD` token: deposits have been cleared.
    Cleared { raw: String, runway: String },
    /// `CLSD` token: the runway is closed.
    Closed { raw: String, runway: String },
    /// `SNOCLO`: the aerodrome is closed due to snow.
    Snowbound { raw: String },
    /// Closed for snow clearing.
    ClearedForSweeping { raw: String },
    /// The fixed 6-digit body shape.
    Full {
        raw: String,
        runway: RunwayDesignator,
        deposit: char,
        coverage: char,
        thickness: Thickness,
        braking: BrakingAction,
    },
    /// The variable 4–6 character body shape.
    Partial {
        raw: String,
        runway: RunwayDesignator,
        deposit: Option<char>,
        coverage: Option<char>,
        thickness: Option<Thickness>,
        braking: BrakingAction,
    },
    /// A token that announced itself as a state group but decodes to
    /// nothing; passed through verbatim.
    Unrecognized { raw: String },
}

fn deposit_text(code: char) -> String {
    match code {
        '0' => "сухо".to_owned(),
        '1' => "влажно".to_owned(),
        '2' => "мокро/лужи".to_owned(),
        '3' => "иней/изморозь".to_owned(),
        '4' => "сухой снег".to_owned(),
        '5' => "мокрый снег".to_owned(),
        '6' => "слякоть".to_owned(),
        '7' => "лед".to_owned(),
        '8' => "укатанный снег".to_owned(),
        '9' => "замерзшая/неровная поверхность".to_owned(),
        '/' => "нет данных".to_owned(),
        other => other.to_string(),
    }
}

fn coverage_text(code: char) -> String {
    match code {
        '1' => "<10%".to_owned(),
        '2' => "11–25%".to_owned(),
        '5' => "26–50%".to_owned(),
        '9' => "51–100%".to_owned(),
        '/' => "нет данных".to_owned(),
        other => other.to_string(),
    }
}

impl RunwayState {
    /// Decodes a runway state token, or returns `None` if the token is not
    /// one (and another field pattern should be tried).
    pub fn decode(token: &str) -> Option<Self> {
        if !token.starts_with('R') {
            return None;
        }
        let raw = token.to_owned();

        if token.contains("CLRD") {
            return Some(Self::Cleared {
                runway: token.get(1..3).unwrap_or_default().to_owned(),
                raw,
            });
        }
        if token.contains("CLSD") {
            return Some(Self::Closed {
                runway: token.get(1..3).unwrap_or_default().to_owned(),
                raw,
            });
        }
        if token.contains("SNOCLO") {
            return Some(Self::Snowbound { raw });
        }
        if token.contains("RRRR") && token.contains("99") {
            return Some(Self::ClearedForSweeping { raw });
        }

        let rest = &token[1..];
        if let Some(state) = Self::decode_full(token, rest) {
            return Some(state);
        }
        if let Some(state) = Self::decode_partial(token, rest) {
            return Some(state);
        }

        // An R-token carrying a special marker that decoded to nothing above
        // is still consumed, as unrecognized.
        if token.contains("RRRR") {
            return Some(Self::Unrecognized { raw });
        }

        None
    }

    /// `R` + 2-digit runway + `/` + 6 digits.
    fn decode_full(token: &str, rest: &str) -> Option<Self> {
        let (runway, body) = rest.split_once('/')?;
        if runway.len() != 2 || !runway.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if body.len() != 6 || !body.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self::Full {
            raw: token.to_owned(),
            runway: RunwayDesignator::new(runway),
            deposit: body[..1].chars().next()?,
            coverage: body[1..2].chars().next()?,
            thickness: Thickness::from_code(&body[2..4]),
            braking: BrakingAction::from_code(&body[4..6]),
        })
    }

    /// `R` + runway (with optional L/R/C) + `/` + 4–6 characters of digits
    /// and slashes; the last two characters are the braking code and the
    /// deposit/coverage/thickness positions are inferred from what is left.
    fn decode_partial(token: &str, rest: &str) -> Option<Self> {
        let (runway, body) = rest.split_once('/')?;
        let plain_runway = runway.len() == 2 && runway.bytes().all(|b| b.is_ascii_digit());
        let suffixed_runway = runway.len() == 3
            && runway.as_bytes()[..2].iter().all(|b| b.is_ascii_digit())
            && matches!(runway.as_bytes()[2], b'L' | b'R' | b'C');
        if !plain_runway && !suffixed_runway {
            return None;
        }
        if !(4..=6).contains(&body.len())
            || !body.bytes().all(|b| b.is_ascii_digit() || b == b'/')
        {
            return None;
        }

        let braking = BrakingAction::from_code(&body[body.len() - 2..]);
        let core = &body[..body.len() - 2];

        let digit_at = |i: usize| core[i..].chars().next().filter(|c| c.is_ascii_digit());
        let deposit = if core.is_empty() { None } else { digit_at(0) };
        let coverage = if core.len() > 1 { digit_at(1) } else { None };

        let thickness = if core.contains("//") {
            Some(Thickness::NoData)
        } else if core.len() >= 3 && core[2..].bytes().all(|b| b.is_ascii_digit()) {
            parse_digits(&core[2..]).ok().map(Thickness::Millimeters)
        } else {
            None
        };

        Some(Self::Partial {
            raw: token.to_owned(),
            runway: RunwayDesignator::new(runway),
            deposit,
            coverage,
            thickness,
            braking,
        })
    }

    /// Renders the state as output lines: a header followed by indented
    /// detail lines for the report shapes, a single line otherwise.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Cleared { runway, .. } => {
                vec![format!("Состояние ВПП {runway}: очищена")]
            }
            Self::Closed { runway, .. } => {
                vec![format!("Состояние ВПП {runway}: закрыта")]
            }
            Self::Snowbound { .. } => vec!["Аэродром закрыт снегом".to_owned()],
            Self::ClearedForSweeping { .. } => vec!["ВПП закрыта на чистку".to_owned()],
            Self::Full {
                runway,
                deposit,
                coverage,
                thickness,
                braking,
                ..
            } => vec![
                runway.header(),
                format!("  Тип покрытия: {}", deposit_text(*deposit)),
                format!("  Степень покрытия: {}", coverage_text(*coverage)),
                format!("  Толщина: {}", thickness.describe()),
                format!("  Сцепление: {}", braking.describe()),
            ],
            Self::Partial {
                runway,
                deposit,
                coverage,
                thickness,
                braking,
                ..
            } => {
                let mut lines = vec![runway.header()];
                if let Some(deposit) = deposit {
                    lines.push(format!("  Тип покрытия: {}", deposit_text(*deposit)));
                }
                if let Some(coverage) = coverage {
                    lines.push(format!("  Степень покрытия: {}", coverage_text(*coverage)));
                }
                if let Some(thickness) = thickness {
                    lines.push(format!("  Толщина: {}", thickness.describe()));
                }
                lines.push(format!("  Сцепление: {}", braking.describe()));
                lines
            }
            Self::Unrecognized { raw } => vec![format!("(неизвестно) {raw}")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_shape() {
        let state = RunwayState::decode("R13/290051").unwrap();
        assert_eq!(
            state.lines(),
            vec![
                "Состояние ВПП 13:",
                "  Тип покрытия: мокро/лужи",
                "  Степень покрытия: 51–100%",
                "  Толщина: <1 мм",
                "  Сцепление: коэффициент ≈ 0.51",
            ]
        );
    }

    #[test]
    fn decode_partial_shape() {
        let state = RunwayState::decode("R28L/550539").unwrap();
        assert_eq!(
            state.lines(),
            vec![
                "Состояние ВПП 28L:",
                "  Тип покрытия: мокрый снег",
                "  Степень покрытия: 26–50%",
                "  Толщина: 5 мм",
                "  Сцепление: коэффициент ≈ 0.39",
            ]
        );
    }

    #[test]
    fn all_runways_sentinel() {
        let state = RunwayState::decode("R88/290050").unwrap();
        assert_eq!(state.lines()[0], "Состояние всех ВПП:");
    }

    #[test]
    fn previous_report_sentinel() {
        let state = RunwayState::decode("R99/290050").unwrap();
        assert_eq!(
            state.lines()[0],
            "Состояние ВПП: повтор из предыдущего сообщения"
        );
    }

    #[test]
    fn thickness_bands() {
        assert_eq!(Thickness::from_code("00").describe(), "<1 мм");
        assert_eq!(Thickness::from_code("45").describe(), "45 мм");
        assert_eq!(Thickness::from_code("92").describe(), "10 см");
        assert_eq!(Thickness::from_code("98").describe(), "40 см");
        assert_eq!(Thickness::from_code("99").describe(), "ВПП не работает");
        // reserved but unmapped codes pass through, never crash
        assert_eq!(Thickness::from_code("91").describe(), "код 91");
        assert_eq!(Thickness::from_code("97").describe(), "код 97");
        assert_eq!(Thickness::from_code("//").describe(), "нет данных");
    }

    #[test]
    fn braking_bands() {
        assert_eq!(BrakingAction::from_code("95").describe(), "хорошая (≥0.40)");
        assert_eq!(BrakingAction::from_code("91").describe(), "плохая (≤0.25)");
        assert_eq!(BrakingAction::from_code("99").describe(), "ненадежно");
        assert_eq!(
            BrakingAction::from_code("30").describe(),
            "коэффициент ≈ 0.30"
        );
        assert_eq!(BrakingAction::from_code("//").describe(), "нет данных");
    }

    #[test]
    fn decode_special_tokens() {
        assert_eq!(
            RunwayState::decode("R24/CLRD//").unwrap().lines(),
            vec!["Состояние ВПП 24: очищена"]
        );
        assert_eq!(
            RunwayState::decode("R24/CLSD").unwrap().lines(),
            vec!["Состояние ВПП 24: закрыта"]
        );
        assert_eq!(
            RunwayState::decode("R/SNOCLO").unwrap().lines(),
            vec!["Аэродром закрыт снегом"]
        );
    }

    #[test]
    fn masked_partial_body() {
        let state = RunwayState::decode("R28R/29//51").unwrap();
        assert_eq!(
            state.lines(),
            vec![
                "Состояние ВПП 28R:",
                "  Тип покрытия: мокро/лужи",
                "  Степень покрытия: 51–100%",
                "  Толщина: нет данных",
                "  Сцепление: коэффициент ≈ 0.51",
            ]
        );
    }

    #[test]
    fn not_a_state_group() {
        assert_eq!(RunwayState::decode("RMK"), None);
        assert_eq!(RunwayState::decode("BKN028CB"), None);
    }
}
