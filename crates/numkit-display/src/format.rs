//! Text rendering of one-dimensional arrays using print options
//!
//! Output follows numpy's `repr` of a 1-D array: elements are aligned to a
//! common width, floats print at most `precision` fractional digits (trailing
//! zeros become padding), large or tiny magnitudes switch to scientific
//! notation unless `suppress` is set, and long arrays are summarized.

use crate::global::get_print_options;
use crate::options::{PrintOptions, Sign};
use ndarray::{ArrayBase, ArrayView1, Data, Ix1};
use numkit_core::{dispatch_array, Element, Error, NumericArray, Result};
use std::fmt;

const SUMMARY_MARKER: &str = "...";

/// Render `values` with the current process-wide print options
pub fn format_array<T, S>(values: &ArrayBase<S, Ix1>) -> String
where
    T: Element,
    S: Data<Elem = T>,
{
    format_with(values, &get_print_options())
}

/// Render `values` with explicit print options
pub fn format_with<T, S>(values: &ArrayBase<S, Ix1>, options: &PrintOptions) -> String
where
    T: Element,
    S: Data<Elem = T>,
{
    let len = values.len();
    let summarize = len > options.threshold && len > 2 * options.edgeitems;

    let shown: Vec<T> = if summarize {
        values
            .iter()
            .take(options.edgeitems)
            .chain(values.iter().skip(len - options.edgeitems))
            .copied()
            .collect()
    } else {
        values.iter().copied().collect()
    };

    let mut items = if T::KIND.is_float() {
        format_floats(&shown, options)
    } else {
        shown
            .iter()
            .map(|v| with_sign(v.to_string(), *v < T::zero(), options.sign))
            .collect()
    };
    pad_left(&mut items);

    if summarize {
        items.insert(options.edgeitems, SUMMARY_MARKER.to_string());
    }
    wrap(&items, options)
}

/// Render an array of any element kind with the current print options
///
/// Only one-dimensional arrays are supported.
pub fn format_numeric_array(array: &NumericArray) -> Result<String> {
    if array.ndim() != 1 {
        return Err(Error::dimension_mismatch(1, array.ndim()));
    }
    let options = get_print_options();
    dispatch_array!(array, a => {
        let view = a
            .view()
            .into_dimensionality::<Ix1>()
            .map_err(|_| Error::dimension_mismatch(1, a.ndim()))?;
        Ok(format_with(&view, &options))
    })
}

/// `Display` adapter that renders a 1-D view with the current print options
pub struct ArrayDisplay<'a, T>(pub ArrayView1<'a, T>);

impl<T: Element> fmt::Display for ArrayDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_array(&self.0))
    }
}

fn with_sign(digits: String, negative: bool, sign: Sign) -> String {
    if negative {
        // Integer and float Display already carry the minus sign
        if digits.starts_with('-') {
            return digits;
        }
        return format!("-{digits}");
    }
    match sign {
        Sign::Minus => digits,
        Sign::Plus => format!("+{digits}"),
        Sign::Space => format!(" {digits}"),
    }
}

fn use_scientific<T: Element>(values: &[T], options: &PrintOptions) -> bool {
    let magnitudes: Vec<f64> = values
        .iter()
        .map(|v| v.as_f64())
        .filter(|v| v.is_finite() && *v != 0.0)
        .map(f64::abs)
        .collect();
    if magnitudes.is_empty() {
        return false;
    }

    let max = magnitudes.iter().copied().fold(f64::MIN, f64::max);
    let min = magnitudes.iter().copied().fold(f64::MAX, f64::min);
    max >= 1e8 || (!options.suppress && (min < 1e-4 || max / min > 1e3))
}

fn fraction_len(rendered: &str) -> usize {
    rendered.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Split a rendered magnitude into integer digits and trimmed fraction
fn trim_fraction(rendered: &str) -> (String, String) {
    match rendered.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.trim_end_matches('0').to_string()),
        None => (rendered.to_string(), String::new()),
    }
}

/// Digits of a finite float as (integer part, fraction, exponent suffix)
///
/// Starts from the shortest text that round-trips in the element's own type
/// and only rounds when that text carries more than `precision` digits.
fn float_parts<T: Element>(v: T, precision: usize, scientific: bool) -> (String, String, String) {
    if scientific {
        let shortest = format!("{v:e}");
        let mantissa_digits = shortest.split_once('e').map_or(shortest.as_str(), |(m, _)| m);
        let rendered = if fraction_len(mantissa_digits) > precision {
            format!("{v:.precision$e}")
        } else {
            shortest
        };
        let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
        let (int, frac) = trim_fraction(mantissa.trim_start_matches('-'));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        (int, frac, format!("e{exp_sign}{:02}", exponent.abs()))
    } else {
        let shortest = v.to_string();
        let rendered = if fraction_len(&shortest) > precision {
            format!("{v:.precision$}")
        } else {
            shortest
        };
        let (int, frac) = trim_fraction(rendered.trim_start_matches('-'));
        (int, frac, String::new())
    }
}

fn format_floats<T: Element>(values: &[T], options: &PrintOptions) -> Vec<String> {
    let scientific = use_scientific(values, options);

    // (integer part with sign, fraction, exponent) for finite values
    let parts: Vec<Option<(String, String, String)>> = values
        .iter()
        .map(|&v| {
            let wide = v.as_f64();
            if !wide.is_finite() {
                return None;
            }
            let (int, frac, exponent) = float_parts(v, options.precision, scientific);
            Some((with_sign(int, wide.is_sign_negative(), options.sign), frac, exponent))
        })
        .collect();

    let int_width = parts.iter().flatten().map(|p| p.0.chars().count()).max().unwrap_or(0);
    let frac_width = parts.iter().flatten().map(|p| p.1.len()).max().unwrap_or(0);

    values
        .iter()
        .zip(parts)
        .map(|(&v, part)| match part {
            Some((int, frac, exponent)) => format!(
                "{int:>int_width$}.{frac:<frac_width$}{exponent}"
            ),
            None if v.as_f64().is_nan() => options.nanstr.clone(),
            None => with_sign(options.infstr.clone(), v.as_f64() < 0.0, options.sign),
        })
        .collect()
}

fn pad_left(items: &mut [String]) {
    let width = items.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    for item in items.iter_mut() {
        let missing = width - item.chars().count();
        if missing > 0 {
            item.insert_str(0, &" ".repeat(missing));
        }
    }
}

fn wrap(items: &[String], options: &PrintOptions) -> String {
    let separator = options.separator.as_str();
    let separator_width = separator.chars().count();
    let line_break = separator.trim_end();

    let mut out = String::from("[");
    let mut line_len = 1;

    for (i, item) in items.iter().enumerate() {
        let closing = usize::from(i + 1 == items.len());
        if i > 0 {
            let needed = separator_width + item.chars().count() + closing;
            if line_len + needed > options.linewidth {
                out.push_str(line_break);
                out.push_str("\n ");
                line_len = 1;
            } else {
                out.push_str(separator);
                line_len += separator_width;
            }
        }
        out.push_str(item);
        line_len += item.chars().count();
    }

    out.push(']');
    out
}
