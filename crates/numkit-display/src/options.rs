//! Print option values and partial overrides

use serde::{Deserialize, Serialize};

/// How the sign of non-negative values is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    /// Only negative values get a sign
    #[default]
    #[serde(rename = "-")]
    Minus,
    /// Non-negative values get a `+`
    #[serde(rename = "+")]
    Plus,
    /// Non-negative values get a space
    #[serde(rename = " ")]
    Space,
}

/// Options controlling how arrays are rendered as text
///
/// Defaults follow numpy's `get_printoptions()`. Missing fields fall back to
/// their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Maximum number of fractional digits for floats
    pub precision: usize,
    /// Arrays with more elements than this are summarized
    pub threshold: usize,
    /// Elements shown at each end of a summarized array
    pub edgeitems: usize,
    /// Characters per line before wrapping
    pub linewidth: usize,
    /// Always use fixed notation, printing tiny values as zero
    pub suppress: bool,
    pub nanstr: String,
    pub infstr: String,
    pub sign: Sign,
    /// Text between elements
    pub separator: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 8,
            threshold: 1000,
            edgeitems: 3,
            linewidth: 75,
            suppress: false,
            nanstr: "nan".to_string(),
            infstr: "inf".to_string(),
            sign: Sign::Minus,
            separator: " ".to_string(),
        }
    }
}

/// A partial update of [`PrintOptions`]
///
/// Only the fields that are set replace the current values, so
/// `PrintOptionsOverride::new().precision(2)` changes the precision and
/// nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptionsOverride {
    pub precision: Option<usize>,
    pub threshold: Option<usize>,
    pub edgeitems: Option<usize>,
    pub linewidth: Option<usize>,
    pub suppress: Option<bool>,
    pub nanstr: Option<String>,
    pub infstr: Option<String>,
    pub sign: Option<Sign>,
    pub separator: Option<String>,
}

impl PrintOptionsOverride {
    /// An override that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn edgeitems(mut self, edgeitems: usize) -> Self {
        self.edgeitems = Some(edgeitems);
        self
    }

    pub fn linewidth(mut self, linewidth: usize) -> Self {
        self.linewidth = Some(linewidth);
        self
    }

    pub fn suppress(mut self, suppress: bool) -> Self {
        self.suppress = Some(suppress);
        self
    }

    pub fn nanstr(mut self, nanstr: impl Into<String>) -> Self {
        self.nanstr = Some(nanstr.into());
        self
    }

    pub fn infstr(mut self, infstr: impl Into<String>) -> Self {
        self.infstr = Some(infstr.into());
        self
    }

    pub fn sign(mut self, sign: Sign) -> Self {
        self.sign = Some(sign);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce a copy of `base` with the set fields replaced
    pub fn apply_to(&self, base: &PrintOptions) -> PrintOptions {
        PrintOptions {
            precision: self.precision.unwrap_or(base.precision),
            threshold: self.threshold.unwrap_or(base.threshold),
            edgeitems: self.edgeitems.unwrap_or(base.edgeitems),
            linewidth: self.linewidth.unwrap_or(base.linewidth),
            suppress: self.suppress.unwrap_or(base.suppress),
            nanstr: self.nanstr.clone().unwrap_or_else(|| base.nanstr.clone()),
            infstr: self.infstr.clone().unwrap_or_else(|| base.infstr.clone()),
            sign: self.sign.unwrap_or(base.sign),
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| base.separator.clone()),
        }
    }
}

impl From<PrintOptions> for PrintOptionsOverride {
    fn from(options: PrintOptions) -> Self {
        Self {
            precision: Some(options.precision),
            threshold: Some(options.threshold),
            edgeitems: Some(options.edgeitems),
            linewidth: Some(options.linewidth),
            suppress: Some(options.suppress),
            nanstr: Some(options.nanstr),
            infstr: Some(options.infstr),
            sign: Some(options.sign),
            separator: Some(options.separator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PrintOptions::default();
        assert_eq!(options.precision, 8);
        assert_eq!(options.threshold, 1000);
        assert_eq!(options.edgeitems, 3);
        assert_eq!(options.linewidth, 75);
        assert!(!options.suppress);
        assert_eq!(options.sign, Sign::Minus);
    }

    #[test]
    fn test_override_only_touches_set_fields() {
        let base = PrintOptions::default();
        let changed = PrintOptionsOverride::new()
            .precision(2)
            .suppress(true)
            .nanstr("NaN")
            .apply_to(&base);

        assert_eq!(changed.precision, 2);
        assert!(changed.suppress);
        assert_eq!(changed.nanstr, "NaN");
        assert_eq!(changed.threshold, base.threshold);
        assert_eq!(changed.infstr, base.infstr);
        assert_eq!(changed.separator, base.separator);
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = PrintOptionsOverride::new().linewidth(10).apply_to(&PrintOptions::default());
        assert!(PrintOptionsOverride::new().is_empty());
        assert_eq!(PrintOptionsOverride::new().apply_to(&base), base);
    }

    #[test]
    fn test_full_override_replaces_everything() {
        let target = PrintOptions {
            precision: 3,
            sign: Sign::Space,
            ..PrintOptions::default()
        };
        let full = PrintOptionsOverride::from(target.clone());
        assert!(!full.is_empty());

        let base = PrintOptionsOverride::new().precision(11).apply_to(&PrintOptions::default());
        assert_eq!(full.apply_to(&base), target);
    }

    #[test]
    fn test_partial_json_loads_onto_defaults() {
        let options: PrintOptions =
            serde_json::from_str(r#"{"precision": 4, "sign": "+"}"#).unwrap();
        assert_eq!(options.precision, 4);
        assert_eq!(options.sign, Sign::Plus);
        assert_eq!(options.linewidth, 75);

        let overrides: PrintOptionsOverride =
            serde_json::from_str(r#"{"threshold": 10}"#).unwrap();
        assert_eq!(overrides, PrintOptionsOverride::new().threshold(10));
    }
}
