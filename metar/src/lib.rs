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

//! METAR/SPECI/TAF weather report decoder with Russian output.
//!
//! This crate splits a raw report into whitespace tokens, classifies each
//! token by priority-ordered pattern matching against the [fields], and
//! produces both a list of human-readable Russian lines and a structured
//! [`DecodedReport`]. Decoding never fails: tokens matching no known field
//! are passed through verbatim as unknown entries.
//!
//! Weather phenomenon groups such as `-SHRASN` are rendered with full
//! Russian agreement (gender, number, instrumental case) by the [phrase]
//! synthesizer over the [lexicon].
//!
//! # Examples
//!
//! Decode a report and print its lines:
//!
//! ```
//! let decoded = metar::decode("METAR ULLI 261330Z 22005MPS 9999 -SHRASN 03/M02 Q1000=");
//!
//! for line in &decoded.text {
//!     println!("{line}");
//! }
//!
//! assert_eq!(decoded.text[0], "Аэродром: ULLI");
//! assert_eq!(decoded.text[4], "Явления: слабый ливневый дождь со снегом");
//! ```
//!
//! The structured record keeps typed values alongside the text:
//!
//! ```
//! let decoded = metar::decode("ULLI 261330Z 22005MPS 9999 03/M02 Q1000");
//!
//! let temperature = decoded.report.temperature.unwrap();
//! assert_eq!(temperature.air, Some(3));
//! assert_eq!(temperature.dew_point, Some(-2));
//! ```

mod error;
pub mod fields;
pub mod lexicon;
pub mod phrase;
mod report;

pub use error::Error;
pub use report::{
    decode, Decoded, DecodedField, DecodedReport, ObservationTime, Station, WindShear,
    WindShearScope,
};
