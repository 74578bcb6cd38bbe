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

//! Free-text remarks block.
//!
//! Once the `RMK` marker is seen, all remaining tokens belong to the remarks
//! and nothing may follow them. The sub-scanner performs a 2-token look-ahead
//! first (two fixed obscured-by-cloud phrases), then decodes single tokens by
//! fixed prefixes. Unlike phenomenon sub-tokens, unrecognized remarks stay
//! visible: they are recorded as explicit entries, never dropped.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::parse_digits;

/// One decoded remark entry.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Remark {
    /// `MT OBSC`: mountains obscured by clouds or precipitation.
    MountainsObscured,
    /// `OBST OBSC`: obstacles obscured by clouds or precipitation.
    ObstaclesObscured,
    /// `QFE…`: field-level pressure in mm Hg, with an optional `/`-joined
    /// hectopascal alternate.
    FieldPressure {
        raw: String,
        millimeters: Option<u16>,
        hectopascals: Option<u16>,
    },
    /// `QBB…`: cloud base in meters.
    CloudBase { raw: String, meters: Option<u16> },
    Unrecognized { raw: String },
}

/// The remarks block: the raw tail of the report and its decoded entries.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Remarks {
    pub raw: String,
    pub entries: Vec<Remark>,
}

/// Scans all tokens after the `RMK` marker into output lines and entries.
pub(crate) fn scan_remarks(tokens: &[&str]) -> (Vec<String>, Remarks) {
    let mut lines = Vec::new();
    let mut entries = Vec::new();

    let mut j = 0;
    while j < tokens.len() {
        let token = tokens[j];

        // two-token phrases first, so the shared OBSC is not consumed twice
        if j + 1 < tokens.len() {
            match (token, tokens[j + 1]) {
                ("MT", "OBSC") => {
                    lines.push("  - Горы закрыты облачностью/осадками".to_owned());
                    entries.push(Remark::MountainsObscured);
                    j += 2;
                    continue;
                }
                ("OBST", "OBSC") => {
                    lines.push("  - Препятствия закрыты облачностью/осадками".to_owned());
                    entries.push(Remark::ObstaclesObscured);
                    j += 2;
                    continue;
                }
                _ => {}
            }
        }

        if let Some(value) = token.strip_prefix("QFE") {
            let (millimeters_raw, hectopascals_raw) = match value.split_once('/') {
                Some((mm, hpa)) => (mm, Some(hpa)),
                None => (value, None),
            };
            let millimeters = parse_digits(millimeters_raw).ok();
            let hectopascals = hectopascals_raw.and_then(|hpa| parse_digits(hpa).ok());

            let mut line = format!("  - Давление QFE {millimeters_raw} мм рт.ст.");
            match (hectopascals, hectopascals_raw) {
                (Some(hpa), _) => line.push_str(&format!(" ({hpa} гПа)")),
                (None, Some(raw)) => line.push_str(&format!(" ({raw})")),
                (None, None) => {}
            }
            lines.push(line);
            entries.push(Remark::FieldPressure {
                raw: token.to_owned(),
                millimeters,
                hectopascals,
            });
        } else if let Some(value) = token.strip_prefix("QBB") {
            lines.push(format!("  - Нижняя граница облаков {value} м"));
            entries.push(Remark::CloudBase {
                raw: token.to_owned(),
                meters: parse_digits(value).ok(),
            });
        } else {
            lines.push(format!("  - (неизвестная ремарка) {token}"));
            entries.push(Remark::Unrecognized {
                raw: token.to_owned(),
            });
        }

        j += 1;
    }

    let remarks = Remarks {
        raw: tokens.join(" "),
        entries,
    };
    (lines, remarks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_token_phrases_share_no_tokens() {
        let (lines, remarks) = scan_remarks(&["MT", "OBSC", "OBST", "OBSC", "QFE739/0986"]);
        assert_eq!(
            lines,
            vec![
                "  - Горы закрыты облачностью/осадками",
                "  - Препятствия закрыты облачностью/осадками",
                "  - Давление QFE 739 мм рт.ст. (986 гПа)",
            ]
        );
        assert_eq!(remarks.entries.len(), 3);
        assert_eq!(
            remarks.entries[2],
            Remark::FieldPressure {
                raw: "QFE739/0986".to_owned(),
                millimeters: Some(739),
                hectopascals: Some(986),
            }
        );
    }

    #[test]
    fn field_pressure_without_alternate() {
        let (lines, _) = scan_remarks(&["QFE744"]);
        assert_eq!(lines, vec!["  - Давление QFE 744 мм рт.ст."]);
    }

    #[test]
    fn cloud_base_remark() {
        let (lines, remarks) = scan_remarks(&["QBB120"]);
        assert_eq!(lines, vec!["  - Нижняя граница облаков 120 м"]);
        assert_eq!(
            remarks.entries[0],
            Remark::CloudBase {
                raw: "QBB120".to_owned(),
                meters: Some(120),
            }
        );
    }

    #[test]
    fn unrecognized_remarks_stay_visible() {
        let (lines, remarks) = scan_remarks(&["OBST", "QFE744"]);
        assert_eq!(
            lines,
            vec![
                "  - (неизвестная ремарка) OBST",
                "  - Давление QFE 744 мм рт.ст.",
            ]
        );
        assert!(matches!(remarks.entries[0], Remark::Unrecognized { .. }));
    }
}
