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

//! Immutable Russian lexicon for weather phenomena and their modifiers.
//!
//! Every phenomenon and descriptor code used by the classifier has exactly one
//! entry here, together with the grammatical data the phrase synthesis needs:
//! gender, number and the instrumental ("with X") form for phenomena, a
//! four-form agreement paradigm for descriptors and intensity markers.
//!
//! The tables are process-wide constants. Nothing in the crate writes back to
//! them, so they are safe to share between any number of concurrent decodes.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Grammatical gender of a noun.
///
/// Pluralia tantum like "снежные зерна" have no singular and therefore no
/// gender of their own; they agree through the plural forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    PluralOnly,
}

/// Grammatical number of a noun.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Number {
    Singular,
    Plural,
}

/// A four-form agreement paradigm keyed by gender, with a shared plural.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Paradigm {
    pub masculine: &'static str,
    pub feminine: &'static str,
    pub neuter: &'static str,
    pub plural: &'static str,
}

impl Paradigm {
    /// Returns the form agreeing with the given gender and number.
    ///
    /// Number takes precedence: any plural agreement source selects the
    /// plural form regardless of gender.
    pub fn agreed(&self, gender: Gender, number: Number) -> &'static str {
        match (gender, number) {
            (_, Number::Plural) => self.plural,
            (Gender::Feminine, _) => self.feminine,
            (Gender::Neuter, _) => self.neuter,
            _ => self.masculine,
        }
    }
}

/// Intensity marker of a weather-phenomenon group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Intensity {
    /// `-` prefix: слабый.
    Diminished,
    /// No prefix: умеренный. The word itself is elided from synthesized
    /// phrases.
    Moderate,
    /// `+` prefix: сильный.
    Intensified,
}

impl Intensity {
    /// Returns the agreement paradigm of the intensity word.
    pub fn forms(&self) -> &'static Paradigm {
        match self {
            Self::Diminished => &Paradigm {
                masculine: "слабый",
                feminine: "слабая",
                neuter: "слабое",
                plural: "слабые",
            },
            Self::Moderate => &Paradigm {
                masculine: "умеренный",
                feminine: "умеренная",
                neuter: "умеренное",
                plural: "умеренные",
            },
            Self::Intensified => &Paradigm {
                masculine: "сильный",
                feminine: "сильная",
                neuter: "сильное",
                plural: "сильные",
            },
        }
    }
}

/// A weather phenomenon as named by a 2-letter (or composite 4-letter) code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Phenomenon {
    pub code: &'static str,
    /// Canonical nominative surface name.
    pub name: &'static str,
    pub gender: Gender,
    pub number: Number,
    /// Instrumental-case form used in "с X" constructions.
    pub instrumental: &'static str,
    /// Whether this phenomenon counts as precipitation for
    /// thunderstorm-with-precipitation composition.
    pub precipitation: bool,
}

/// A 2-letter modifier code qualifying a phenomenon.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Descriptor {
    pub code: &'static str,
    pub name: &'static str,
    /// Agreement forms; `None` for words that do not inflect.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub forms: Option<Paradigm>,
}

impl Descriptor {
    /// Returns the descriptor form agreeing with the given gender and number.
    pub fn agreed(&self, gender: Gender, number: Number) -> &'static str {
        match &self.forms {
            Some(paradigm) => paradigm.agreed(gender, number),
            None => self.name,
        }
    }
}

/// Thunderstorm as a phenomenon.
///
/// The `TS` code enters a group as a descriptor but, unlike other
/// descriptors, is promoted to act as the head phenomenon during phrase
/// synthesis.
pub static THUNDERSTORM: Phenomenon = Phenomenon {
    code: "TS",
    name: "гроза",
    gender: Gender::Feminine,
    number: Number::Singular,
    instrumental: "грозой",
    precipitation: false,
};

const PHENOMENA: &[Phenomenon] = &[
    // precipitation
    Phenomenon {
        code: "DZ",
        name: "морось",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "моросью",
        precipitation: true,
    },
    Phenomenon {
        code: "RA",
        name: "дождь",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "дождём",
        precipitation: true,
    },
    Phenomenon {
        code: "SN",
        name: "снег",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "снегом",
        precipitation: true,
    },
    Phenomenon {
        code: "SG",
        name: "снежные зерна",
        gender: Gender::PluralOnly,
        number: Number::Plural,
        instrumental: "снежными зёрнами",
        precipitation: true,
    },
    Phenomenon {
        code: "IC",
        name: "ледяные иглы",
        gender: Gender::PluralOnly,
        number: Number::Plural,
        instrumental: "ледяными иглами",
        precipitation: true,
    },
    Phenomenon {
        code: "PL",
        name: "ледяные шарики",
        gender: Gender::PluralOnly,
        number: Number::Plural,
        instrumental: "ледяными шариками",
        precipitation: true,
    },
    Phenomenon {
        code: "GR",
        name: "град",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "градом",
        precipitation: true,
    },
    Phenomenon {
        code: "GS",
        name: "мелкий град/снежная крупа",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "мелким градом/снежной крупой",
        precipitation: true,
    },
    Phenomenon {
        code: "UP",
        name: "неопределенные осадки",
        gender: Gender::PluralOnly,
        number: Number::Plural,
        instrumental: "неопределёнными осадками",
        precipitation: true,
    },
    // obscuration
    Phenomenon {
        code: "BR",
        name: "дымка",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "дымкой",
        precipitation: false,
    },
    Phenomenon {
        code: "FG",
        name: "туман",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "туманом",
        precipitation: false,
    },
    Phenomenon {
        code: "FU",
        name: "дым",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "дымом",
        precipitation: false,
    },
    Phenomenon {
        code: "VA",
        name: "вулканический пепел",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "вулканическим пеплом",
        precipitation: false,
    },
    Phenomenon {
        code: "DU",
        name: "пыль",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "пылью",
        precipitation: false,
    },
    Phenomenon {
        code: "SA",
        name: "песок",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "песком",
        precipitation: false,
    },
    Phenomenon {
        code: "HZ",
        name: "мгла",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "мглой",
        precipitation: false,
    },
    Phenomenon {
        code: "PY",
        name: "водяная пыль",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "водяной пылью",
        precipitation: false,
    },
    // other
    Phenomenon {
        code: "PO",
        name: "пыльные/песчаные вихри",
        gender: Gender::PluralOnly,
        number: Number::Plural,
        instrumental: "пыльными/песчаными вихрями",
        precipitation: false,
    },
    Phenomenon {
        code: "SQ",
        name: "шквал",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "шквалом",
        precipitation: false,
    },
    Phenomenon {
        code: "DS",
        name: "пыльная буря",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "пыльной бурей",
        precipitation: false,
    },
    Phenomenon {
        code: "SS",
        name: "песчаная буря",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "песчаной бурей",
        precipitation: false,
    },
    // composite codes, matched as whole substrings before 2-letter
    // decomposition
    Phenomenon {
        code: "DRSN",
        name: "поземок",
        gender: Gender::Masculine,
        number: Number::Singular,
        instrumental: "поземком",
        precipitation: false,
    },
    Phenomenon {
        code: "BLSN",
        name: "низовая метель",
        gender: Gender::Feminine,
        number: Number::Singular,
        instrumental: "низовой метелью",
        precipitation: false,
    },
];

const DESCRIPTORS: &[Descriptor] = &[
    Descriptor {
        code: "MI",
        name: "тонкий",
        forms: Some(Paradigm {
            masculine: "тонкий",
            feminine: "тонкая",
            neuter: "тонкое",
            plural: "тонкие",
        }),
    },
    Descriptor {
        code: "BC",
        name: "клочья",
        forms: Some(Paradigm {
            masculine: "клочковый",
            feminine: "клочковая",
            neuter: "клочковое",
            plural: "клочковые",
        }),
    },
    Descriptor {
        code: "PR",
        name: "частичный",
        forms: Some(Paradigm {
            masculine: "частичный",
            feminine: "частичная",
            neuter: "частичное",
            plural: "частичные",
        }),
    },
    Descriptor {
        code: "DR",
        name: "поземок",
        forms: Some(Paradigm {
            masculine: "поземный",
            feminine: "поземная",
            neuter: "поземное",
            plural: "поземные",
        }),
    },
    Descriptor {
        code: "BL",
        name: "низовая метель",
        forms: Some(Paradigm {
            masculine: "низовой",
            feminine: "низовая",
            neuter: "низовое",
            plural: "низовые",
        }),
    },
    Descriptor {
        code: "SH",
        name: "ливневой",
        forms: Some(Paradigm {
            masculine: "ливневый",
            feminine: "ливневая",
            neuter: "ливневое",
            plural: "ливневые",
        }),
    },
    // thunderstorm; promoted to a phenomenon, never rendered as a modifier
    Descriptor {
        code: "TS",
        name: "гроза",
        forms: None,
    },
    Descriptor {
        code: "FZ",
        name: "переохлажденный",
        forms: Some(Paradigm {
            masculine: "переохлажденный",
            feminine: "переохлажденная",
            neuter: "переохлажденное",
            plural: "переохлажденные",
        }),
    },
    // proximity marker; does not inflect
    Descriptor {
        code: "VC",
        name: "вблизи",
        forms: None,
    },
    Descriptor {
        code: "RE",
        name: "недавний",
        forms: Some(Paradigm {
            masculine: "недавний",
            feminine: "недавняя",
            neuter: "недавнее",
            plural: "недавние",
        }),
    },
];

/// Looks up a phenomenon by its code.
pub fn phenomenon(code: &str) -> Option<&'static Phenomenon> {
    if code == THUNDERSTORM.code {
        return Some(&THUNDERSTORM);
    }
    PHENOMENA.iter().find(|p| p.code == code)
}

/// Looks up a descriptor by its code.
pub fn descriptor(code: &str) -> Option<&'static Descriptor> {
    DESCRIPTORS.iter().find(|d| d.code == code)
}

/// Returns `true` if `chunk` is a known descriptor or phenomenon code.
pub fn is_code(chunk: &str) -> bool {
    descriptor(chunk).is_some() || phenomenon(chunk).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_once() {
        for p in PHENOMENA {
            assert_eq!(phenomenon(p.code).map(|e| e.name), Some(p.name));
        }
        for d in DESCRIPTORS {
            assert_eq!(descriptor(d.code).map(|e| e.name), Some(d.name));
        }
    }

    #[test]
    fn composite_codes_resolve_as_whole() {
        assert_eq!(phenomenon("BLSN").map(|p| p.name), Some("низовая метель"));
        assert_eq!(phenomenon("DRSN").map(|p| p.name), Some("поземок"));
    }

    #[test]
    fn thunderstorm_is_feminine_singular() {
        assert_eq!(phenomenon("TS"), Some(&THUNDERSTORM));
        assert_eq!(THUNDERSTORM.gender, Gender::Feminine);
        assert_eq!(THUNDERSTORM.number, Number::Singular);
    }

    #[test]
    fn paradigm_agreement() {
        let forms = Intensity::Intensified.forms();
        assert_eq!(forms.agreed(Gender::Masculine, Number::Singular), "сильный");
        assert_eq!(forms.agreed(Gender::Feminine, Number::Singular), "сильная");
        assert_eq!(forms.agreed(Gender::PluralOnly, Number::Plural), "сильные");
    }

    #[test]
    fn invariant_descriptor_never_inflects() {
        let vc = descriptor("VC").unwrap();
        assert_eq!(vc.agreed(Gender::Feminine, Number::Singular), "вблизи");
        assert_eq!(vc.agreed(Gender::PluralOnly, Number::Plural), "вблизи");
    }
}
