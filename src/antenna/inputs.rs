//! Design inputs: raw text fields and validated parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::antenna::error::{AntennaError, AntennaResult};

/// One of the five design input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Resonant frequency (GHz).
    Frequency,
    /// Substrate relative permittivity εr.
    DielectricConstant,
    /// Substrate height (mm).
    SubstrateHeight,
    /// Target feedline impedance (Ω).
    TargetImpedance,
    /// Reflection coefficient magnitude Γ.
    ReflectionCoefficient,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 5] = [
        Self::Frequency,
        Self::DielectricConstant,
        Self::SubstrateHeight,
        Self::TargetImpedance,
        Self::ReflectionCoefficient,
    ];

    /// Parses a field name.
    ///
    /// Accepts long and short names (case-insensitive): `frequency`/`f`,
    /// `permittivity`/`er`, `height`/`h`, `impedance`/`z0`, `gamma`/`g`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "frequency" | "freq" | "f" => Some(Self::Frequency),
            "permittivity" | "dielectric" | "er" => Some(Self::DielectricConstant),
            "height" | "h" => Some(Self::SubstrateHeight),
            "impedance" | "z0" => Some(Self::TargetImpedance),
            "gamma" | "reflection" | "g" => Some(Self::ReflectionCoefficient),
            _ => None,
        }
    }

    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "resonant frequency",
            Self::DielectricConstant => "dielectric constant",
            Self::SubstrateHeight => "substrate height",
            Self::TargetImpedance => "target impedance",
            Self::ReflectionCoefficient => "reflection coefficient",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "Resonant Frequency (GHz)"),
            Self::DielectricConstant => write!(f, "Dielectric Constant (er)"),
            Self::SubstrateHeight => write!(f, "Substrate Height (mm)"),
            Self::TargetImpedance => write!(f, "Target Impedance (Ohm)"),
            Self::ReflectionCoefficient => write!(f, "Reflection Coefficient"),
        }
    }
}

/// Input fields as entered by the user, before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawInputs {
    /// Resonant frequency in GHz.
    #[serde(default = "default_frequency")]
    pub frequency_ghz: String,

    /// Substrate dielectric constant.
    #[serde(default = "default_dielectric_constant")]
    pub dielectric_constant: String,

    /// Substrate height in mm.
    #[serde(default = "default_substrate_height")]
    pub substrate_height_mm: String,

    /// Target feedline impedance in Ω.
    #[serde(default = "default_target_impedance")]
    pub target_impedance_ohm: String,

    /// Reflection coefficient magnitude.
    #[serde(default = "default_reflection_coefficient")]
    pub reflection_coefficient: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            frequency_ghz: default_frequency(),
            dielectric_constant: default_dielectric_constant(),
            substrate_height_mm: default_substrate_height(),
            target_impedance_ohm: default_target_impedance(),
            reflection_coefficient: default_reflection_coefficient(),
        }
    }
}

fn default_frequency() -> String {
    "2.45".to_string()
}

fn default_dielectric_constant() -> String {
    "4.4".to_string()
}

fn default_substrate_height() -> String {
    "1.6".to_string()
}

fn default_target_impedance() -> String {
    "50".to_string()
}

fn default_reflection_coefficient() -> String {
    "0.3".to_string()
}

impl RawInputs {
    /// Creates a set of empty fields.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            frequency_ghz: String::new(),
            dielectric_constant: String::new(),
            substrate_height_mm: String::new(),
            target_impedance_ohm: String::new(),
            reflection_coefficient: String::new(),
        }
    }

    /// Returns the text of one field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Frequency => &self.frequency_ghz,
            Field::DielectricConstant => &self.dielectric_constant,
            Field::SubstrateHeight => &self.substrate_height_mm,
            Field::TargetImpedance => &self.target_impedance_ohm,
            Field::ReflectionCoefficient => &self.reflection_coefficient,
        }
    }

    /// Replaces the text of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Frequency => &mut self.frequency_ghz,
            Field::DielectricConstant => &mut self.dielectric_constant,
            Field::SubstrateHeight => &mut self.substrate_height_mm,
            Field::TargetImpedance => &mut self.target_impedance_ohm,
            Field::ReflectionCoefficient => &mut self.reflection_coefficient,
        };
        *slot = value.into();
    }

    /// Parses every field into [`InputParameters`].
    ///
    /// Only checks that each field is a finite number; domain checks are left
    /// to [`InputParameters::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`AntennaError::Parse`] for the first field that is not a
    /// finite real number.
    pub fn parse(&self) -> AntennaResult<InputParameters> {
        Ok(InputParameters {
            frequency_ghz: parse_field(Field::Frequency, &self.frequency_ghz)?,
            dielectric_constant: parse_field(Field::DielectricConstant, &self.dielectric_constant)?,
            substrate_height_mm: parse_field(Field::SubstrateHeight, &self.substrate_height_mm)?,
            target_impedance_ohm: parse_field(Field::TargetImpedance, &self.target_impedance_ohm)?,
            reflection_coefficient: parse_field(
                Field::ReflectionCoefficient,
                &self.reflection_coefficient,
            )?,
        })
    }
}

fn parse_field(field: Field, text: &str) -> AntennaResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AntennaError::parse(field.name(), text)),
    }
}

/// Validated numeric design inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputParameters {
    /// Resonant frequency in GHz (> 0).
    pub frequency_ghz: f64,
    /// Substrate dielectric constant (> 1).
    pub dielectric_constant: f64,
    /// Substrate height in mm (> 0).
    pub substrate_height_mm: f64,
    /// Target feedline impedance in Ω (> 0).
    pub target_impedance_ohm: f64,
    /// Reflection coefficient magnitude, strictly between 0 and 1.
    pub reflection_coefficient: f64,
}

impl InputParameters {
    /// Checks every field against the range the design equations accept.
    ///
    /// # Errors
    ///
    /// Returns [`AntennaError::Parse`] for non-finite values and
    /// [`AntennaError::Domain`] for values outside their range.
    pub fn validate(&self) -> AntennaResult<()> {
        let fields = [
            (Field::Frequency, self.frequency_ghz),
            (Field::DielectricConstant, self.dielectric_constant),
            (Field::SubstrateHeight, self.substrate_height_mm),
            (Field::TargetImpedance, self.target_impedance_ohm),
            (Field::ReflectionCoefficient, self.reflection_coefficient),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(AntennaError::parse(field.name(), value.to_string()));
            }
        }

        if self.frequency_ghz <= 0.0 {
            return Err(AntennaError::domain(
                Field::Frequency.name(),
                "must be greater than 0 GHz",
            ));
        }
        if self.dielectric_constant <= 1.0 {
            return Err(AntennaError::domain(
                Field::DielectricConstant.name(),
                "must be greater than 1",
            ));
        }
        if self.substrate_height_mm <= 0.0 {
            return Err(AntennaError::domain(
                Field::SubstrateHeight.name(),
                "must be greater than 0 mm",
            ));
        }
        if self.target_impedance_ohm <= 0.0 {
            return Err(AntennaError::domain(
                Field::TargetImpedance.name(),
                "must be greater than 0 Ohm",
            ));
        }
        if self.reflection_coefficient <= 0.0 || self.reflection_coefficient >= 1.0 {
            return Err(AntennaError::domain(
                Field::ReflectionCoefficient.name(),
                "must be strictly between 0 and 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fields_parse() {
        let params = RawInputs::default().parse().unwrap();
        assert!((params.frequency_ghz - 2.45).abs() < f64::EPSILON);
        assert!((params.dielectric_constant - 4.4).abs() < f64::EPSILON);
        assert!((params.substrate_height_mm - 1.6).abs() < f64::EPSILON);
        assert!((params.target_impedance_ohm - 50.0).abs() < f64::EPSILON);
        assert!((params.reflection_coefficient - 0.3).abs() < f64::EPSILON);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let mut raw = RawInputs::default();
        raw.set(Field::Frequency, "  5.8 ");
        assert!((raw.parse().unwrap().frequency_ghz - 5.8).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_field_is_parse_error() {
        let mut raw = RawInputs::default();
        raw.set(Field::SubstrateHeight, "thick");
        let err = raw.parse().unwrap_err();
        assert!(matches!(
            err,
            AntennaError::Parse { field: "substrate height", ref value } if value == "thick"
        ));
    }

    #[test]
    fn empty_and_non_finite_fields_are_parse_errors() {
        for text in ["", "NaN", "inf", "-infinity"] {
            let mut raw = RawInputs::default();
            raw.set(Field::ReflectionCoefficient, text);
            assert!(
                matches!(raw.parse(), Err(AntennaError::Parse { .. })),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn out_of_range_values_are_domain_errors() {
        let base = RawInputs::default().parse().unwrap();

        let cases = [
            InputParameters { frequency_ghz: 0.0, ..base },
            InputParameters { dielectric_constant: 1.0, ..base },
            InputParameters { substrate_height_mm: -1.6, ..base },
            InputParameters { target_impedance_ohm: 0.0, ..base },
            InputParameters { reflection_coefficient: 0.0, ..base },
            InputParameters { reflection_coefficient: 1.0, ..base },
            InputParameters { reflection_coefficient: 1.5, ..base },
        ];
        for params in cases {
            assert!(matches!(params.validate(), Err(AntennaError::Domain { .. })));
        }
    }

    #[test]
    fn field_names_parse_loosely() {
        assert_eq!(Field::from_str_loose("F"), Some(Field::Frequency));
        assert_eq!(Field::from_str_loose("er"), Some(Field::DielectricConstant));
        assert_eq!(Field::from_str_loose("Height"), Some(Field::SubstrateHeight));
        assert_eq!(Field::from_str_loose("z0"), Some(Field::TargetImpedance));
        assert_eq!(Field::from_str_loose("gamma"), Some(Field::ReflectionCoefficient));
        assert_eq!(Field::from_str_loose("width"), None);
    }

    #[test]
    fn set_and_get_round_trip_every_field() {
        let mut raw = RawInputs::empty();
        for field in Field::ALL {
            raw.set(field, "1.5");
            assert_eq!(raw.get(field), "1.5");
        }
    }
}
