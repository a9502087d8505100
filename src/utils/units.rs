// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Unit string normalisation and equivalence

/// Synonym table: every spelling on the right maps to the canonical symbol on
/// the left. Lookups happen after lowercasing and stripping whitespace.
const UNIT_SYNONYMS: &[(&str, &[&str])] = &[
    ("n", &["n", "newton", "newtons"]),
    ("kn", &["kn", "kilonewton", "kilonewtons"]),
    (
        "n·m",
        &[
            "n·m",
            "nm",
            "n*m",
            "n-m",
            "n.m",
            "newton-meter",
            "newton-meters",
            "newtonmeter",
            "newtonmeters",
        ],
    ),
    (
        "kn·m",
        &["kn·m", "knm", "kn*m", "kn-m", "kn.m", "kilonewton-meter", "kilonewton-meters"],
    ),
    ("m", &["m", "meter", "meters", "metre", "metres"]),
    ("mm", &["mm", "millimeter", "millimeters", "millimetre", "millimetres"]),
    ("cm", &["cm", "centimeter", "centimeters", "centimetre", "centimetres"]),
    ("km", &["km", "kilometer", "kilometers", "kilometre", "kilometres"]),
    ("kg", &["kg", "kilogram", "kilograms"]),
    ("s", &["s", "sec", "secs", "second", "seconds"]),
    ("hz", &["hz", "hertz", "1/s", "s^-1", "s⁻¹"]),
    ("m/s", &["m/s", "ms^-1", "ms⁻¹", "meterspersecond", "meter/second"]),
    ("m/s²", &["m/s²", "m/s^2", "m/s2", "ms^-2", "ms⁻²"]),
    ("pa", &["pa", "pascal", "pascals", "n/m²", "n/m^2", "n/m2"]),
    ("kpa", &["kpa", "kilopascal", "kilopascals"]),
    ("mpa", &["mpa", "megapascal", "megapascals", "n/mm²", "n/mm^2", "n/mm2"]),
    ("j", &["j", "joule", "joules"]),
    ("w", &["w", "watt", "watts"]),
    ("rad", &["rad", "rads", "radian", "radians"]),
    ("°", &["°", "deg", "degree", "degrees"]),
];

/// Lowercase the unit and drop all whitespace
pub fn normalize_unit(unit: &str) -> String {
    unit.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonical symbol for a unit string, or the normalised string itself when
/// the unit is not in the synonym table
pub fn canonical_unit(unit: &str) -> String {
    let normalized = normalize_unit(unit);
    UNIT_SYNONYMS
        .iter()
        .find(|(_, spellings)| spellings.contains(&normalized.as_str()))
        .map(|(canonical, _)| (*canonical).to_string())
        .unwrap_or(normalized)
}

/// Check whether two unit strings denote the same unit
pub fn units_equivalent(submitted: &str, expected: &str) -> bool {
    canonical_unit(submitted) == canonical_unit(expected)
}
