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

use metar::decode;

#[test]
fn full_metar_murmansk() {
    let report = "METAR ULMM 261330Z 22005G12MPS 180V250 9999 -SHRASN BKN028CB 03/M02 Q1000 R13/290051 NOSIG RMK QFE744=";
    let decoded = decode(report);

    assert_eq!(
        decoded.text,
        vec![
            "Аэродром: ULMM",
            "Время наблюдения: 261330Z UTC",
            "Ветер 220° 5 м/с, порывы 12 м/с",
            "Вариабельность ветра: 180°–250°",
            "Видимость ≥10 км",
            "Явления: слабый ливневый дождь со снегом",
            "Облачность: значительная (5–7/8) основание ~840 м (2800 ft) кучево-дождевые (CB)",
            "Температура 03°C, точка росы -02°C",
            "Давление QNH 1000 гПа",
            "Состояние ВПП 13:",
            "  Тип покрытия: мокро/лужи",
            "  Степень покрытия: 51–100%",
            "  Толщина: <1 мм",
            "  Сцепление: коэффициент ≈ 0.51",
            "Тренд NOSIG",
            "Ремарки:",
            "  - Давление QFE 744 мм рт.ст.",
        ]
    );

    let record = &decoded.report;
    assert_eq!(record.station.as_ref().unwrap().code, "ULMM");
    assert_eq!(record.time.as_ref().unwrap().day, 26);
    assert_eq!(record.wind.as_ref().unwrap().gust, Some(12));
    assert_eq!(record.clouds.len(), 1);
    assert_eq!(record.trends.len(), 1);
    assert_eq!(record.runway_states.len(), 1);
    assert!(record.unknown.is_empty());
}

#[test]
fn thunderstorm_with_mixed_precipitation() {
    let decoded = decode("METAR ULLI 261330Z +TSRASNGR");
    assert_eq!(
        decoded.text.last().unwrap(),
        "Явления: сильная гроза с дождём, снегом и градом"
    );
}

#[test]
fn vicinity_descriptor_stays_uninflected() {
    let decoded = decode("METAR ULLI 261330Z VCTS");
    assert_eq!(decoded.text.last().unwrap(), "Явления: вблизи гроза");
}

#[test]
fn directional_visibility_merges_into_one_line() {
    let decoded = decode("METAR ULLI 191700Z 24003MPS 2200 0900SE FZFG");
    assert!(decoded
        .text
        .contains(&"Видимость минимальная 2200 м, в направлении SE — 900 м".to_owned()));
    assert_eq!(decoded.report.visibility.len(), 2);
    assert!(decoded
        .text
        .contains(&"Явления: переохлажденный туман".to_owned()));
}

#[test]
fn runway_visual_range_with_tendency() {
    let decoded = decode("METAR ULLI 191700Z R28L/P2000U R10/M0050D R06/0800V1200N R88/////");
    let lines: Vec<&str> = decoded.text.iter().map(String::as_str).collect();
    assert!(lines.contains(&"RVR ВПП 28L: >2000 м улучшалась"));
    assert!(lines.contains(&"RVR ВПП 10: <50 м ухудшалась"));
    assert!(lines.contains(&"RVR ВПП 06: 800 м без изменений"));
    assert!(lines.contains(&"RVR ВПП 88: нет данных"));
    assert_eq!(decoded.report.rvr.len(), 4);
}

#[test]
fn vertical_visibility_and_obscuration() {
    let decoded = decode("METAR ULLI 191700Z 0200 FG VV002");
    assert!(decoded.text.contains(&"Явления: туман".to_owned()));
    assert!(decoded
        .text
        .contains(&"Вертикальная видимость 60 м".to_owned()));

    let decoded = decode("METAR ULLI 191700Z VV///");
    assert!(decoded
        .text
        .contains(&"Вертикальная видимость: нет данных".to_owned()));
}

#[test]
fn cavok_short_circuits_cloud_rendering() {
    let decoded = decode("METAR ULLI 261330Z 22005MPS CAVOK 10/05 Q1013");
    assert!(decoded
        .text
        .contains(&"Облачность: CAVOK (видимость ≥10 км, без облаков и явлений)".to_owned()));
}

#[test]
fn runway_state_specials() {
    let decoded = decode("METAR ULLI 261330Z R24/CLRD70 R06/CLSD// R/SNOCLO");
    let lines: Vec<&str> = decoded.text.iter().map(String::as_str).collect();
    assert!(lines.iter().any(|l| l.contains("24") && l.contains("очищена")));
    assert!(lines.iter().any(|l| l.contains("06") && l.contains("закрыта")));
    assert!(lines.contains(&"Аэродром закрыт снегом"));
}

#[test]
fn taf_trends_and_forecast_nsw() {
    let decoded = decode("TAF ULLI 261100Z 22005MPS TEMPO 0800 FZFG BECMG NSW");
    let lines: Vec<&str> = decoded.text.iter().map(String::as_str).collect();
    assert!(lines.contains(&"Тренд TEMPO"));
    assert!(lines.contains(&"Явления: переохлажденный туман"));
    assert!(lines.contains(&"Тренд BECMG"));
    assert!(lines.contains(&"В прогнозе: без значимых явлений"));
}

#[test]
fn remark_phrases_and_qfe_pair() {
    let decoded = decode("METAR ULLI 261330Z RMK MT OBSC OBST OBSC QFE739/0986 QBB120");
    assert_eq!(
        decoded.text,
        vec![
            "Аэродром: ULLI",
            "Время наблюдения: 261330Z UTC",
            "Ремарки:",
            "  - Горы закрыты облачностью/осадками",
            "  - Препятствия закрыты облачностью/осадками",
            "  - Давление QFE 739 мм рт.ст. (986 гПа)",
            "  - Нижняя граница облаков 120 м",
        ]
    );
}

#[test]
fn calm_wind_and_exact_visibility() {
    let decoded = decode("METAR ULLI 261330Z 00000MPS 4500 BR SCT015 05/04 Q1021");
    let lines: Vec<&str> = decoded.text.iter().map(String::as_str).collect();
    assert!(lines.contains(&"Штиль, 0 м/с"));
    assert!(lines.contains(&"Видимость минимальная 4500 м"));
    assert!(lines.contains(&"Явления: дымка"));
    assert!(lines.contains(&"Облачность: рассеянные (3–4/8) основание ~450 м (1500 ft)"));
}

#[test]
fn inches_of_mercury_pressure() {
    let decoded = decode("METAR KJFK 261330Z 18012G20KT 9999 FEW045 24/18 A2992");
    let lines: Vec<&str> = decoded.text.iter().map(String::as_str).collect();
    assert!(lines.contains(&"Ветер 180° 12 уз., порывы 20 уз."));
    assert!(lines.contains(&"Давление 29.92 inHg"));
}

#[test]
fn unknown_tokens_are_reported_in_place() {
    let decoded = decode("METAR ULLI 261330Z FOO123 Q1000");
    let lines: Vec<&str> = decoded.text.iter().map(String::as_str).collect();
    assert!(lines.contains(&"(неизвестно) FOO123"));
    assert!(lines.contains(&"Давление QNH 1000 гПа"));
    assert_eq!(decoded.report.unknown, vec!["FOO123"]);
}

#[test]
fn fields_preserve_source_order() {
    let decoded = decode("METAR ULMM 261330Z 22005G12MPS 9999 03/M02 Q1000");
    use metar::DecodedField;
    let kinds: Vec<&str> = decoded
        .report
        .fields
        .iter()
        .map(|f| match f {
            DecodedField::Station(_) => "station",
            DecodedField::ObservationTime(_) => "time",
            DecodedField::Wind(_) => "wind",
            DecodedField::Visibility(_) => "visibility",
            DecodedField::Temperature(_) => "temperature",
            DecodedField::Pressure(_) => "pressure",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["station", "time", "wind", "visibility", "temperature", "pressure"]
    );
}
