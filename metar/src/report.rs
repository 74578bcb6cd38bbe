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

//! Report tokenization and classification.
//!
//! The report is split on whitespace and the tokens are visited left to right
//! with a mutable read position. Classification is priority-ordered pattern
//! matching, not a grammar: each token is tested against the field decoders
//! in a fixed sequence and the first pattern that matches wins. That order
//! resolves the real ambiguities (a bare 4-digit group could be a timestamp
//! or a visibility; a 4-letter code could be a station or a phenomenon run)
//! by construction, without backtracking.
//!
//! A token matching nothing is data, not failure: it is surfaced verbatim as
//! an unknown entry and decoding continues. [`decode`] never fails.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::fields::*;
use crate::Error;

/// Reporting station, recognized positionally rather than by shape alone.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Station {
    pub code: String,
}

/// Observation day-of-month and time group, e.g. `261330Z`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ObservationTime {
    pub raw: String,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl FromStr for ObservationTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "observation time",
        };

        let digits = s.strip_suffix('Z').ok_or_else(unmatched)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unmatched());
        }

        Ok(Self {
            raw: s.to_owned(),
            day: parse_digits(&digits[..2]).map_err(|_| unmatched())?,
            hour: parse_digits(&digits[2..4]).map_err(|_| unmatched())?,
            minute: parse_digits(&digits[4..6]).map_err(|_| unmatched())?,
        })
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Время наблюдения: {} UTC", self.raw)
    }
}

/// Scope of a wind-shear field, extended by up to two look-ahead tokens.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum WindShearScope {
    Unspecified,
    /// The 2-token `ALL RWY` phrase.
    AllRunways,
    /// A single `RWY…` identifier token.
    Runway(String),
}

/// Wind-shear field: the `WS` marker plus consumed look-ahead tokens.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WindShear {
    pub raw: Vec<String>,
    pub scope: WindShearScope,
}

/// One classified field of a report, in source order.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DecodedField {
    Station(Station),
    ObservationTime(ObservationTime),
    Wind(Wind),
    WindVariability(WindVariability),
    Visibility(Visibility),
    RunwayVisualRange(RunwayVisualRange),
    CloudLayer(CloudLayer),
    VerticalVisibility(VerticalVisibility),
    Temperature(Temperature),
    Pressure(Pressure),
    Trend(Trend),
    RunwaySurfaceState(RunwayState),
    PhenomenonGroup(PhenomenonGroup),
    WindShear(WindShear),
    Remark(Remarks),
    Unknown(String),
}

/// Structured record of one decoded report.
///
/// Conceptually singular fields live in named slots (a later occurrence
/// overwrites an earlier one); repeatable fields are ordered sequences
/// preserving source order. [`fields`](Self::fields) keeps every classified
/// field in source order regardless of kind.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DecodedReport {
    pub station: Option<Station>,
    pub time: Option<ObservationTime>,
    pub wind: Option<Wind>,
    pub wind_variability: Option<WindVariability>,
    pub visibility: Vec<Visibility>,
    pub rvr: Vec<RunwayVisualRange>,
    pub clouds: Vec<CloudLayer>,
    pub vertical_visibility: Option<VerticalVisibility>,
    pub temperature: Option<Temperature>,
    pub pressure: Option<Pressure>,
    pub trends: Vec<Trend>,
    pub runway_states: Vec<RunwayState>,
    pub phenomena: Vec<PhenomenonGroup>,
    pub wind_shear: Vec<WindShear>,
    pub remarks: Option<Remarks>,
    pub unknown: Vec<String>,
    pub fields: Vec<DecodedField>,
}

/// Text and record produced by one [`decode`] call.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Decoded {
    /// One human-readable line per decoded field, with indented sub-lines
    /// for runway states and remarks.
    pub text: Vec<String>,
    pub report: DecodedReport,
}

/// Kind of the previously decoded field, for the context-sensitive rules.
#[derive(Copy, Clone, Eq, PartialEq)]
enum LastField {
    None,
    Visibility,
    Trend,
    Other,
}

fn is_report_type(token: &str) -> bool {
    matches!(token, "METAR" | "SPECI" | "TAF")
}

fn is_station_shape(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_uppercase())
}

/// Decodes one report into human-readable lines and a structured record.
///
/// The input is split on whitespace after stripping a single optional
/// trailing `=` terminator. This never fails; tokens matching no field
/// pattern are passed through as unknown entries.
pub fn decode(report: &str) -> Decoded {
    debug!("report decode: {report:?}");

    let trimmed = report.trim();
    let trimmed = trimmed.strip_suffix('=').unwrap_or(trimmed);
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let mut text: Vec<String> = Vec::new();
    let mut record = DecodedReport::default();
    let mut last = LastField::None;

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        // Station: positional, not by shape alone, so an ordinary 4-letter
        // code later in the report is not misclassified.
        if is_station_shape(token)
            && (i == 0 || is_report_type(tokens[i - 1]))
            && !is_report_type(token)
        {
            text.push(format!("Аэродром: {token}"));
            let station = Station {
                code: token.to_owned(),
            };
            record.station = Some(station.clone());
            record.fields.push(DecodedField::Station(station));
            last = LastField::Other;
        } else if let Ok(time) = token.parse::<ObservationTime>() {
            text.push(time.to_string());
            record.time = Some(time.clone());
            record.fields.push(DecodedField::ObservationTime(time));
            last = LastField::Other;
        } else if let Ok(wind) = token.parse::<Wind>() {
            text.push(wind.to_string());
            record.wind = Some(wind.clone());
            record.fields.push(DecodedField::Wind(wind));
            last = LastField::Other;
        } else if let Ok(variability) = token.parse::<WindVariability>() {
            text.push(variability.to_string());
            record.wind_variability = Some(variability.clone());
            record.fields.push(DecodedField::WindVariability(variability));
            last = LastField::Other;
        } else if let Ok(visibility) = token.parse::<Visibility>() {
            push_visibility_line(&mut text, &visibility, last);
            record.visibility.push(visibility.clone());
            record.fields.push(DecodedField::Visibility(visibility));
            last = LastField::Visibility;
        } else if let Ok(rvr) = token.parse::<RunwayVisualRange>() {
            text.push(rvr.to_string());
            record.rvr.push(rvr.clone());
            record.fields.push(DecodedField::RunwayVisualRange(rvr));
            last = LastField::Other;
        } else if let Ok(layer) = token.parse::<CloudLayer>() {
            text.push(format!("Облачность: {layer}"));
            record.clouds.push(layer.clone());
            record.fields.push(DecodedField::CloudLayer(layer));
            last = LastField::Other;
        } else if let Ok(vv) = token.parse::<VerticalVisibility>() {
            text.push(vv.to_string());
            record.vertical_visibility = Some(vv.clone());
            record.fields.push(DecodedField::VerticalVisibility(vv));
            last = LastField::Other;
        } else if let Ok(temperature) = token.parse::<Temperature>() {
            text.push(temperature.to_string());
            record.temperature = Some(temperature.clone());
            record.fields.push(DecodedField::Temperature(temperature));
            last = LastField::Other;
        } else if let Ok(pressure) = token.parse::<Pressure>() {
            text.push(pressure.to_string());
            record.pressure = Some(pressure.clone());
            record.fields.push(DecodedField::Pressure(pressure));
            last = LastField::Other;
        } else if let Ok(trend) = token.parse::<Trend>() {
            text.push(trend.to_string());
            record.trends.push(trend.clone());
            record.fields.push(DecodedField::Trend(trend));
            last = LastField::Trend;
        } else if let Some(state) = RunwayState::decode(token) {
            text.extend(state.lines());
            record.runway_states.push(state.clone());
            record.fields.push(DecodedField::RunwaySurfaceState(state));
            last = LastField::Other;
        } else if let Ok(group) = token.parse::<PhenomenonGroup>() {
            // an empty phrase means the group had nothing to say; the token
            // is consumed without a line
            if !group.phrase.is_empty() {
                text.push(format!("Явления: {}", group.phrase));
                record.phenomena.push(group.clone());
                record.fields.push(DecodedField::PhenomenonGroup(group));
            }
            last = LastField::Other;
        } else if token == "NSW" {
            let line = if last == LastField::Trend {
                "В прогнозе: без значимых явлений"
            } else {
                "Явления: без значимых явлений"
            };
            text.push(line.to_owned());
            let group = PhenomenonGroup::no_significant_weather(token);
            record.phenomena.push(group.clone());
            record.fields.push(DecodedField::PhenomenonGroup(group));
            last = LastField::Other;
        } else if token == "WS" {
            let mut raw = vec![token.to_owned()];
            let (line, scope) = if i + 2 < tokens.len()
                && tokens[i + 1] == "ALL"
                && tokens[i + 2] == "RWY"
            {
                raw.push(tokens[i + 1].to_owned());
                raw.push(tokens[i + 2].to_owned());
                i += 2;
                (
                    "Сдвиг ветра: на всех ВПП".to_owned(),
                    WindShearScope::AllRunways,
                )
            } else if i + 1 < tokens.len() && tokens[i + 1].starts_with("RWY") {
                raw.push(tokens[i + 1].to_owned());
                let scope = WindShearScope::Runway(tokens[i + 1].to_owned());
                let line = format!("Сдвиг ветра: на {}", tokens[i + 1]);
                i += 1;
                (line, scope)
            } else {
                ("Сдвиг ветра (WS)".to_owned(), WindShearScope::Unspecified)
            };
            text.push(line);
            let shear = WindShear { raw, scope };
            record.wind_shear.push(shear.clone());
            record.fields.push(DecodedField::WindShear(shear));
            last = LastField::Other;
        } else if token == "RMK" {
            // the remarks sub-scanner owns everything that remains
            let rest = &tokens[i + 1..];
            if !rest.is_empty() {
                text.push("Ремарки:".to_owned());
                let (lines, remarks) = scan_remarks(rest);
                text.extend(lines);
                record.remarks = Some(remarks.clone());
                record.fields.push(DecodedField::Remark(remarks));
            }
            break;
        } else if is_report_type(token) {
            trace!("report type marker {token}");
        } else {
            warn!("unknown token: {token}");
            text.push(format!("(неизвестно) {token}"));
            record.unknown.push(token.to_owned());
            record.fields.push(DecodedField::Unknown(token.to_owned()));
            last = LastField::Other;
        }

        i += 1;
    }

    debug!("report decoded: {} field(s)", record.fields.len());

    Decoded {
        text,
        report: record,
    }
}

/// Visibility lines are context-sensitive: a second visibility-shaped token
/// right after a visibility line qualifies or overwrites that line instead
/// of starting a new one.
fn push_visibility_line(text: &mut Vec<String>, visibility: &Visibility, last: LastField) {
    if visibility.meters == 9999 {
        text.push("Видимость ≥10 км".to_owned());
        return;
    }

    if last == LastField::Visibility {
        if let Some(line) = text.last_mut() {
            match &visibility.direction {
                Some(direction) => {
                    line.push_str(&format!(
                        ", в направлении {direction} — {} м",
                        visibility.meters
                    ));
                }
                None => {
                    *line = format!("Видимость минимальная {} м", visibility.meters);
                }
            }
            return;
        }
    }

    match &visibility.direction {
        Some(direction) => text.push(format!("Видимость {} м {direction}", visibility.meters)),
        None => text.push(format!("Видимость минимальная {} м", visibility.meters)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_is_positional() {
        let decoded = decode("METAR ULLI 261330Z");
        assert_eq!(decoded.report.station.unwrap().code, "ULLI");

        // the same shape later in the report is not a station
        let decoded = decode("METAR ULLI 261330Z ABCD");
        assert_eq!(decoded.text.last().unwrap(), "(неизвестно) ABCD");
    }

    #[test]
    fn station_without_type_marker() {
        let decoded = decode("ULLI 261330Z");
        assert_eq!(decoded.report.station.unwrap().code, "ULLI");
    }

    #[test]
    fn consecutive_visibility_tokens_merge() {
        let decoded = decode("METAR ULLI 191700Z 2200 0900SE");
        let lines: Vec<&str> = decoded.text.iter().map(String::as_str).collect();
        assert_eq!(
            lines.last().unwrap(),
            &"Видимость минимальная 2200 м, в направлении SE — 900 м"
        );
        // one line, two record entries in source order
        assert_eq!(
            decoded.text.iter().filter(|l| l.starts_with("Видимость")).count(),
            1
        );
        assert_eq!(decoded.report.visibility.len(), 2);
    }

    #[test]
    fn secondary_minimum_overwrites() {
        let decoded = decode("METAR ULLI 191700Z 9999 0400");
        assert_eq!(
            decoded.text.last().unwrap(),
            "Видимость минимальная 400 м"
        );
    }

    #[test]
    fn nsw_is_scoped_by_preceding_trend() {
        let decoded = decode("METAR ULLI 261330Z BECMG NSW");
        assert_eq!(
            decoded.text.last().unwrap(),
            "В прогнозе: без значимых явлений"
        );

        let decoded = decode("METAR ULLI 261330Z NSW");
        assert_eq!(
            decoded.text.last().unwrap(),
            "Явления: без значимых явлений"
        );
    }

    #[test]
    fn wind_shear_consumes_look_ahead() {
        let decoded = decode("METAR ULLI 261330Z WS ALL RWY Q1000");
        assert!(decoded.text.contains(&"Сдвиг ветра: на всех ВПП".to_owned()));
        // ALL and RWY were consumed, Q1000 still decoded
        assert!(decoded.report.unknown.is_empty());
        assert!(decoded.report.pressure.is_some());
        assert_eq!(decoded.report.wind_shear[0].scope, WindShearScope::AllRunways);

        let decoded = decode("METAR ULLI 261330Z WS RWY24");
        assert_eq!(
            decoded.report.wind_shear[0].scope,
            WindShearScope::Runway("RWY24".to_owned())
        );

        let decoded = decode("METAR ULLI 261330Z WS");
        assert_eq!(
            decoded.report.wind_shear[0].scope,
            WindShearScope::Unspecified
        );
    }

    #[test]
    fn remarks_terminate_the_report() {
        let decoded = decode("METAR ULLI 261330Z RMK QFE744 Q1000");
        // Q1000 after RMK is a remark, not a pressure group
        assert!(decoded.report.pressure.is_none());
        let remarks = decoded.report.remarks.unwrap();
        assert_eq!(remarks.entries.len(), 2);
    }

    #[test]
    fn unknown_tokens_never_fail() {
        let decoded = decode("METAR ULLI 261330Z ?!? 12345XYZ");
        assert_eq!(decoded.report.unknown, vec!["?!?", "12345XYZ"]);
    }

    #[test]
    fn decoding_is_deterministic() {
        let report = "METAR ULMM 261330Z 22005G12MPS 180V250 9999 -SHRASN BKN028CB 03/M02 Q1000 R13/290051 NOSIG RMK QFE744=";
        assert_eq!(decode(report), decode(report));
    }

    #[test]
    fn empty_report_decodes_to_nothing() {
        let decoded = decode("");
        assert!(decoded.text.is_empty());
        assert!(decoded.report.fields.is_empty());
    }
}
