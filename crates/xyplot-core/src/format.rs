// File: crates/xyplot-core/src/format.rs
// Summary: printf-style numeric formatting for tic labels ("%g", "%.2f", "%8.3e", ...).

use std::fmt;

use tracing::warn;

use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    Fixed,
    Exp { upper: bool },
    General { upper: bool },
}

/// A parsed format with exactly one numeric conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    prefix: String,
    suffix: String,
    conversion: Conversion,
    precision: Option<usize>,
    width: usize,
    left_align: bool,
    zero_pad: bool,
    plus: bool,
    space: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            conversion: Conversion::General { upper: false },
            precision: None,
            width: 0,
            left_align: false,
            zero_pad: false,
            plus: false,
            space: false,
        }
    }
}

fn literal(src: &str, out: &mut String) -> Result<()> {
    let mut chars = src.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            if chars.next() != Some('%') {
                return Err(PlotError::InvalidFormat(format!("stray '%' in \"{src}\"")));
            }
        }
        out.push(c);
    }
    Ok(())
}

impl NumberFormat {
    /// Parse `[text]%[flags][width][.precision](f|e|E|g|G)[text]`; `%%` is a literal percent.
    pub fn parse(spec: &str) -> Result<Self> {
        let bad = |why: &str| PlotError::InvalidFormat(format!("{why} in \"{spec}\""));

        // Locate the single conversion, skipping "%%".
        let bytes = spec.as_bytes();
        let mut start = None;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                if bytes.get(i + 1) == Some(&b'%') {
                    i += 2;
                    continue;
                }
                start = Some(i);
                break;
            }
            i += 1;
        }
        let start = start.ok_or_else(|| bad("no conversion"))?;

        let mut fmt = NumberFormat::default();
        literal(&spec[..start], &mut fmt.prefix)?;

        let mut j = start + 1;
        while let Some(&b) = bytes.get(j) {
            match b {
                b'-' => fmt.left_align = true,
                b'0' => fmt.zero_pad = true,
                b'+' => fmt.plus = true,
                b' ' => fmt.space = true,
                b'#' => {}
                _ => break,
            }
            j += 1;
        }
        let digits = |from: usize| -> usize {
            bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
        };
        let n = digits(j);
        if n > 0 {
            fmt.width = spec[j..j + n].parse().map_err(|_| bad("bad width"))?;
            j += n;
        }
        if bytes.get(j) == Some(&b'.') {
            j += 1;
            let n = digits(j);
            fmt.precision = Some(if n == 0 { 0 } else { spec[j..j + n].parse().map_err(|_| bad("bad precision"))? });
            j += n;
        }
        // Length modifiers carry no meaning for doubles.
        while matches!(bytes.get(j), Some(b'l' | b'L' | b'h')) {
            j += 1;
        }
        fmt.conversion = match bytes.get(j) {
            Some(b'f' | b'F') => Conversion::Fixed,
            Some(b'e') => Conversion::Exp { upper: false },
            Some(b'E') => Conversion::Exp { upper: true },
            Some(b'g') => Conversion::General { upper: false },
            Some(b'G') => Conversion::General { upper: true },
            _ => return Err(bad("unsupported conversion")),
        };
        literal(&spec[j + 1..], &mut fmt.suffix)?;
        Ok(fmt)
    }

    /// Parse, falling back to `%g` on an invalid spec.
    pub fn parse_or_default(spec: &str) -> Self {
        Self::parse(spec).unwrap_or_else(|e| {
            warn!("{e}; falling back to %g");
            Self::default()
        })
    }

    pub fn format(&self, value: f64) -> String {
        let body = if value.is_nan() {
            "nan".to_string()
        } else if value.is_infinite() {
            "inf".to_string()
        } else {
            let p = self.precision;
            match self.conversion {
                Conversion::Fixed => format!("{:.*}", p.unwrap_or(6), value.abs()),
                Conversion::Exp { .. } => exp_form(value.abs(), p.unwrap_or(6)),
                Conversion::General { .. } => general_form(value.abs(), p.unwrap_or(6)),
            }
        };
        let body = match self.conversion {
            Conversion::Exp { upper: true } | Conversion::General { upper: true } => body.to_uppercase(),
            _ => body,
        };
        let sign = if value.is_sign_negative() && !value.is_nan() {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + body.len();
        let pad = self.width.saturating_sub(len);
        let mut out = String::with_capacity(self.prefix.len() + self.width.max(len) + self.suffix.len());
        out.push_str(&self.prefix);
        if self.left_align {
            out.push_str(sign);
            out.push_str(&body);
            out.extend(std::iter::repeat(' ').take(pad));
        } else if self.zero_pad && value.is_finite() {
            out.push_str(sign);
            out.extend(std::iter::repeat('0').take(pad));
            out.push_str(&body);
        } else {
            out.extend(std::iter::repeat(' ').take(pad));
            out.push_str(sign);
            out.push_str(&body);
        }
        out.push_str(&self.suffix);
        out
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.prefix.replace('%', "%%"))?;
        if self.left_align { f.write_str("-")?; }
        if self.plus { f.write_str("+")?; }
        if self.space { f.write_str(" ")?; }
        if self.zero_pad { f.write_str("0")?; }
        if self.width > 0 { write!(f, "{}", self.width)?; }
        if let Some(p) = self.precision { write!(f, ".{p}")?; }
        let c = match self.conversion {
            Conversion::Fixed => 'f',
            Conversion::Exp { upper } => if upper { 'E' } else { 'e' },
            Conversion::General { upper } => if upper { 'G' } else { 'g' },
        };
        write!(f, "{c}{}", self.suffix.replace('%', "%%"))
    }
}

/// Split Rust's `{:.Ne}` output into mantissa text and exponent.
fn rust_exp(v: f64, precision: usize) -> (String, i32) {
    let s = format!("{:.*e}", precision, v);
    match s.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// C-style exponent suffix: sign and at least two digits.
fn c_exponent(e: i32) -> String {
    format!("e{}{:02}", if e < 0 { '-' } else { '+' }, e.abs())
}

fn exp_form(v: f64, precision: usize) -> String {
    let (m, e) = rust_exp(v, precision);
    format!("{m}{}", c_exponent(e))
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}

/// `%g`: the shorter of fixed and exponent notation, trailing zeros removed.
fn general_form(v: f64, precision: usize) -> String {
    let p = precision.max(1);
    if v == 0.0 {
        return "0".to_string();
    }
    let (m, x) = rust_exp(v, p - 1);
    if x < -4 || x >= p as i32 {
        format!("{}{}", strip_zeros(&m), c_exponent(x))
    } else {
        let decimals = (p as i32 - 1 - x).max(0) as usize;
        strip_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}
