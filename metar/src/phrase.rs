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

//! Grammatical-agreement phrase synthesis.
//!
//! Turns the intensity marker, descriptors and phenomena extracted from one
//! weather group into a single Russian phrase in which every inflected word
//! agrees in gender and number with the head of the phrase. The phrase is
//! assembled from ordered word slots (intensity, descriptors, head phrase)
//! joined by single spaces.

use crate::lexicon::{self, Descriptor, Gender, Intensity, Number, Phenomenon};

/// Synthesizes a single agreed phrase for one weather-phenomenon group.
///
/// The head of the phrase is the first phenomenon if any exist, otherwise the
/// first descriptor; its gender and number govern the inflection of the
/// intensity word and of every descriptor. A thunderstorm descriptor is
/// promoted to the head of the phenomena before agreement is determined.
///
/// Returns the empty string when there is nothing to say, signaling the
/// caller to suppress the phenomena line entirely.
pub fn synthesize(
    intensity: Intensity,
    descriptors: &[&'static Descriptor],
    phenomena: &[&'static Phenomenon],
) -> String {
    let mut events: Vec<&'static Phenomenon> = phenomena.to_vec();
    let mut modifiers: Vec<&'static Descriptor> = descriptors.to_vec();

    if events.is_empty() && modifiers.is_empty() {
        return String::new();
    }

    // Thunderstorm stands alone as a phenomenon, not a modifier.
    if let Some(i) = modifiers
        .iter()
        .position(|d| d.code == lexicon::THUNDERSTORM.code)
    {
        modifiers.remove(i);
        events.insert(0, &lexicon::THUNDERSTORM);
    }

    // The agreement source fixes gender and number for the whole phrase. A
    // descriptor-only group agrees as masculine singular.
    let (gender, number) = match events.first() {
        Some(head) => (head.gender, head.number),
        None => (Gender::Masculine, Number::Singular),
    };

    let modifier_words: Vec<&str> = modifiers
        .iter()
        .map(|d| d.agreed(gender, number))
        .collect();

    if events
        .first()
        .is_some_and(|p| p.code == lexicon::THUNDERSTORM.code)
    {
        return thunderstorm_phrase(intensity, &modifier_words, &events);
    }

    let head_phrase = match events.as_slice() {
        [] => String::new(),
        [only] => only.name.to_owned(),
        [first, second] => format!(
            "{} {} {}",
            first.name,
            preposition(second.instrumental),
            second.instrumental
        ),
        all => enumerate(&all.iter().map(|p| p.name).collect::<Vec<_>>()),
    };

    let mut slots: Vec<&str> = Vec::new();
    if matches!(intensity, Intensity::Diminished | Intensity::Intensified) {
        slots.push(intensity.forms().agreed(gender, number));
    }
    slots.extend(modifier_words.iter().copied());
    if !head_phrase.is_empty() {
        slots.push(&head_phrase);
    }

    slots.join(" ").trim().to_owned()
}

/// Thunderstorm-with-precipitation composition.
///
/// The head noun "гроза" is grammatically feminine, so a surfacing intensity
/// word takes its feminine singular form. Precipitation-like phenomena from
/// the same group are appended as a "с"-joined instrumental enumeration.
fn thunderstorm_phrase(
    intensity: Intensity,
    modifier_words: &[&str],
    events: &[&'static Phenomenon],
) -> String {
    let mut base = lexicon::THUNDERSTORM.name.to_owned();
    if matches!(intensity, Intensity::Diminished | Intensity::Intensified) {
        base = format!(
            "{} {}",
            intensity.forms().agreed(Gender::Feminine, Number::Singular),
            base
        );
    }

    let precipitation: Vec<&str> = events
        .iter()
        .filter(|p| p.precipitation)
        .map(|p| p.instrumental)
        .collect();

    let mut slots: Vec<&str> = modifier_words.to_vec();
    let combined;
    if precipitation.is_empty() {
        slots.push(&base);
    } else {
        combined = format!(
            "{} {} {}",
            base,
            preposition(precipitation[0]),
            enumerate(&precipitation)
        );
        slots.push(&combined);
    }

    slots.join(" ").trim().to_owned()
}

/// Joins items with commas and a final "и".
fn enumerate(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_owned(),
        _ => format!(
            "{} и {}",
            items[..items.len() - 1].join(", "),
            items[items.len() - 1]
        ),
    }
}

/// Selects the "с"/"со" allomorph of the linking preposition.
///
/// The elongated form is required before words starting with с or ш.
fn preposition(word: &str) -> &'static str {
    match word.chars().next() {
        Some('с') | Some('ш') => "со",
        _ => "с",
    }
}
