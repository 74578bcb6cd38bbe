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

//! Decoders for the individual report groups.
//!
//! Each decoder is a pure mapping from one token to a typed value. Parsing
//! goes through [`FromStr`](std::str::FromStr): an `Err` simply means "not
//! this kind of group" and the classifier tries the next pattern.

use std::str::FromStr;

use crate::Error;

mod cloud;
mod phenomena;
mod pressure;
mod remarks;
mod runway;
mod temperature;
mod trend;
mod visibility;
mod wind;

pub use cloud::{CloudAmount, CloudBase, CloudLayer, ConvectiveType};
pub use phenomena::PhenomenonGroup;
pub use pressure::Pressure;
pub use remarks::{Remark, Remarks};
pub use runway::{BrakingAction, RunwayDesignator, RunwayState, Thickness};
pub use temperature::Temperature;
pub use trend::{Trend, TrendKind};
pub use visibility::{RunwayVisualRange, RvrTendency, RvrValue, VerticalVisibility, Visibility};
pub use wind::{SpeedUnit, Wind, WindDirection, WindVariability};

pub(crate) use remarks::scan_remarks;

/// Parses a run of ASCII digits, rejecting empty or mixed substrings.
pub(crate) fn parse_digits<T: FromStr>(s: &str) -> Result<T, Error> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().map_err(|_| Error::NotANumber { text: s.to_owned() })
    } else {
        Err(Error::NotANumber { text: s.to_owned() })
    }
}
