//! Free-text requirement extraction.
//!
//! Turns a tender line like "3 core 95 sq mm copper XLPE cable 11kV
//! armoured" into a canonical [`RequirementSpec`]. Each attribute has an
//! ordered rule list; the first matching rule wins and anything no rule
//! matches stays unset rather than being defaulted to a guess.

use regex::Regex;

use crate::domain::requirement::{
    ApplicationClass, ConductorMaterial, InsulationMaterial, RequirementSpec,
};

/// Numeric tokens followed by a bare `C` are ambiguous between a core count
/// and a temperature. Plausibility windows keep each rule from claiming the
/// other's numbers: no cable has more than 48 cores, and temperature ratings
/// live in 50–150 °C.
const CORE_COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=48;
const TEMPERATURE_RANGE: std::ops::RangeInclusive<u32> = 50..=150;

/// Explicit volt figures below this are size/core noise, not a rating.
const MIN_EXPLICIT_VOLTS: u32 = 100;

/// Requirement text parser with its rule regexes compiled once up front.
#[derive(Debug)]
pub struct RequirementParser {
    kilovolts: Regex,
    volts: Regex,
    cross_section: Regex,
    cores_word: Regex,
    cores_suffix: Regex,
    temperature: Regex,
    standalone_cu: Regex,
    standalone_al: Regex,
    standalone_ht: Regex,
    swa: Regex,
}

impl RequirementParser {
    pub fn new() -> Self {
        Self {
            kilovolts: compile(r"(\d+(?:\.\d+)?)\s*kv\b"),
            volts: compile(r"(\d+)\s*v(?:olts?)?\b"),
            cross_section: compile(r"(\d+(?:\.\d+)?)\s*(?:sq\.?\s*mm|sqmm|mm2|mm²)"),
            cores_word: compile(r"(\d+)\s*cores?\b"),
            cores_suffix: compile(r"\b(\d+)\s*c\b"),
            temperature: compile(r"(\d+)\s*°?\s*c\b"),
            standalone_cu: compile(r"\bcu\b"),
            standalone_al: compile(r"\bal\b"),
            standalone_ht: compile(r"\bht\b"),
            swa: compile(r"\bswa\b"),
        }
    }

    /// Extract canonical attributes from requirement text. Pure; empty or
    /// unparseable text yields a spec with every attribute unset.
    pub fn parse(&self, text: &str) -> RequirementSpec {
        let lowered = text.to_lowercase();

        RequirementSpec {
            raw_text: text.to_string(),
            voltage_volts: self.parse_voltage(&lowered),
            cross_section_sqmm: self.parse_cross_section(&lowered),
            core_count: self.parse_core_count(&lowered),
            conductor: self.parse_conductor(&lowered),
            insulation: parse_insulation(&lowered),
            armoured: self.parse_armour(&lowered),
            temperature_c: self.parse_temperature(&lowered),
            application: self.parse_application(&lowered),
        }
    }

    fn parse_voltage(&self, text: &str) -> Option<u32> {
        if let Some(captures) = self.kilovolts.captures(text) {
            let kilovolts: f64 = captures[1].parse().ok()?;
            return Some((kilovolts * 1000.0).round() as u32);
        }
        // Explicit volt figures, e.g. "415V"; small numbers are not ratings.
        self.volts
            .captures_iter(text)
            .filter_map(|captures| captures[1].parse::<u32>().ok())
            .find(|volts| *volts >= MIN_EXPLICIT_VOLTS)
    }

    fn parse_cross_section(&self, text: &str) -> Option<f64> {
        let captures = self.cross_section.captures(text)?;
        captures[1].parse().ok()
    }

    fn parse_core_count(&self, text: &str) -> Option<u32> {
        for pattern in [&self.cores_word, &self.cores_suffix] {
            let hit = pattern
                .captures_iter(text)
                .filter_map(|captures| captures[1].parse::<u32>().ok())
                .find(|count| CORE_COUNT_RANGE.contains(count));
            if hit.is_some() {
                return hit;
            }
        }
        None
    }

    fn parse_conductor(&self, text: &str) -> Option<ConductorMaterial> {
        if text.contains("copper") || self.standalone_cu.is_match(text) {
            return Some(ConductorMaterial::Copper);
        }
        if text.contains("aluminium") || text.contains("aluminum") || self.standalone_al.is_match(text)
        {
            return Some(ConductorMaterial::Aluminium);
        }
        None
    }

    fn parse_armour(&self, text: &str) -> Option<bool> {
        // "unarmoured" contains "armoured"; check the negation first.
        if text.contains("unarmoured") || text.contains("unarmored") {
            return Some(false);
        }
        if text.contains("armoured") || text.contains("armored") || self.swa.is_match(text) {
            return Some(true);
        }
        None
    }

    fn parse_temperature(&self, text: &str) -> Option<u32> {
        self.temperature
            .captures_iter(text)
            .filter_map(|captures| captures[1].parse::<u32>().ok())
            .find(|degrees| TEMPERATURE_RANGE.contains(degrees))
    }

    fn parse_application(&self, text: &str) -> ApplicationClass {
        if ["control", "plc", "automation"].iter().any(|keyword| text.contains(keyword)) {
            return ApplicationClass::Control;
        }
        if ["instrument", "signal", "transmitter"].iter().any(|keyword| text.contains(keyword)) {
            return ApplicationClass::Instrumentation;
        }
        if text.contains("power") || text.contains("distribution") || self.standalone_ht.is_match(text)
        {
            return ApplicationClass::PowerDistribution;
        }
        ApplicationClass::General
    }
}

impl Default for RequirementParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_insulation(text: &str) -> Option<InsulationMaterial> {
    if text.contains("xlpe") {
        return Some(InsulationMaterial::Xlpe);
    }
    if text.contains("pvc") {
        return Some(InsulationMaterial::Pvc);
    }
    None
}

fn compile(pattern: &str) -> Regex {
    // Rule patterns are fixed string literals; a failure here is a defect in
    // this file, not in caller input.
    Regex::new(pattern).expect("hard-coded rule pattern compiles")
}
