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

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::lexicon::{self, Descriptor, Intensity, Phenomenon};
use crate::phrase;
use crate::Error;

/// Composite 4-letter codes, matched as whole substrings before 2-letter
/// decomposition so they are not split into two spurious codes.
const COMPOSITES: &[&str] = &["BLSN", "DRSN"];

/// One decoded weather-phenomenon group, e.g. `-SHRASN`.
///
/// The token is decomposed into an optional leading intensity marker and an
/// ordered run of 2-letter codes (composites first), classified as
/// descriptors or phenomena via the [lexicon](crate::lexicon). The agreed
/// natural-language phrase is synthesized on decode.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PhenomenonGroup {
    pub raw: String,
    pub intensity: Intensity,
    pub descriptors: Vec<&'static Descriptor>,
    pub phenomena: Vec<&'static Phenomenon>,
    pub phrase: String,
}

impl PhenomenonGroup {
    /// The `NSW` marker decoded as an empty group with a fixed phrase.
    pub fn no_significant_weather(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            intensity: Intensity::Moderate,
            descriptors: Vec::new(),
            phenomena: Vec::new(),
            phrase: "без значимых явлений".to_owned(),
        }
    }
}

impl FromStr for PhenomenonGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let unmatched = || Error::UnmatchedToken {
            token: s.to_owned(),
            expected: "weather phenomena",
        };

        let (intensity, codes) = match s.as_bytes().first() {
            Some(b'+') => (Intensity::Intensified, &s[1..]),
            Some(b'-') => (Intensity::Diminished, &s[1..]),
            _ => (Intensity::Moderate, s),
        };

        // The group shape: a non-empty run of known 2-letter codes. Anything
        // else is some other kind of token.
        if codes.is_empty()
            || codes.len() % 2 != 0
            || !codes.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(unmatched());
        }
        let chunks: Vec<&str> = (0..codes.len())
            .step_by(2)
            .map(|i| &codes[i..i + 2])
            .collect();
        if !chunks.iter().all(|chunk| lexicon::is_code(chunk)) {
            return Err(unmatched());
        }

        let mut descriptors: Vec<&'static Descriptor> = Vec::new();
        let mut phenomena: Vec<&'static Phenomenon> = Vec::new();

        // Composite codes come out first, as whole substrings.
        let mut remainder = codes.to_owned();
        for composite in COMPOSITES {
            if remainder.contains(composite) {
                if let Some(p) = lexicon::phenomenon(composite) {
                    phenomena.push(p);
                }
                remainder = remainder.replace(composite, "");
            }
        }

        for i in (0..remainder.len()).step_by(2) {
            let chunk = &remainder[i..i + 2];
            if let Some(d) = lexicon::descriptor(chunk) {
                descriptors.push(d);
            } else if let Some(p) = lexicon::phenomenon(chunk) {
                phenomena.push(p);
            }
            // unrecognized chunks inside a matched group are dropped
        }

        let phrase = phrase::synthesize(intensity, &descriptors, &phenomena);

        Ok(Self {
            raw: s.to_owned(),
            intensity,
            descriptors,
            phenomena,
            phrase,
        })
    }
}
