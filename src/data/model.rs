use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// NameToken – one run of a file name for natural ordering
// ---------------------------------------------------------------------------

/// A single run of a file name: either a run of ASCII digits or a run of
/// anything else (lower-cased).
///
/// Numbers keep their digits (leading zeros stripped) so arbitrarily long runs
/// compare by value without overflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameToken {
    Number(String),
    Text(String),
}

impl PartialOrd for NameToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NameToken {
    fn cmp(&self, other: &Self) -> Ordering {
        use NameToken::*;
        fn discriminant(t: &NameToken) -> u8 {
            match t {
                Number(_) => 0,
                Text(_) => 1,
            }
        }
        match (self, other) {
            (Number(a), Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Text(a), Text(b)) => a.cmp(b),
            // Mixed kinds at the same position: numbers first.
            _ => discriminant(self).cmp(&discriminant(other)),
        }
    }
}

/// Sort key of a file name. Compares token by token; a key that is a prefix
/// of another sorts first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaturalKey(pub Vec<NameToken>);

impl NaturalKey {
    pub fn new(name: &str) -> Self {
        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut in_digits = false;

        for ch in name.chars() {
            let is_digit = ch.is_ascii_digit();
            if !run.is_empty() && is_digit != in_digits {
                tokens.push(Self::token(&run, in_digits));
                run.clear();
            }
            in_digits = is_digit;
            run.push(ch);
        }
        if !run.is_empty() {
            tokens.push(Self::token(&run, in_digits));
        }
        NaturalKey(tokens)
    }

    fn token(run: &str, digits: bool) -> NameToken {
        if digits {
            NameToken::Number(run.trim_start_matches('0').to_string())
        } else {
            NameToken::Text(run.to_lowercase())
        }
    }
}

// ---------------------------------------------------------------------------
// Series – one monitor file
// ---------------------------------------------------------------------------

/// One file's data: x and y have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Independent variable (iteration, flow time, ...).
    pub x: Vec<f64>,
    /// Monitored quantity.
    pub y: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Last monitored value, if any.
    pub fn last_y(&self) -> Option<f64> {
        self.y.last().copied()
    }

    /// Pair up x and y for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Shift every y value from Kelvin to degrees Celsius.
    pub fn kelvin_to_celsius(&mut self) {
        for v in &mut self.y {
            *v -= KELVIN_OFFSET;
        }
    }
}

pub const KELVIN_OFFSET: f64 = 273.15;

// ---------------------------------------------------------------------------
// Header – axis labels inferred from a sample file
// ---------------------------------------------------------------------------

/// What the header scan found, and what to do with the y values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// The y label names a temperature: values are Kelvin, plot them in °C.
    CelsiusConversion,
    /// A header was found; plot values unchanged.
    AsIs,
    /// No header line matched; labels are placeholders.
    Unrecognized,
}

pub const UNKNOWN_LABEL: &str = "Unknown";
pub const CELSIUS_SUFFIX: &str = " (°C)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub mode: HeaderMode,
    pub x_label: String,
    pub y_label: String,
}

impl Header {
    pub fn unrecognized() -> Self {
        Header {
            mode: HeaderMode::Unrecognized,
            x_label: UNKNOWN_LABEL.to_string(),
            y_label: UNKNOWN_LABEL.to_string(),
        }
    }

    /// Build a header from the two quoted labels of a header line.
    ///
    /// "Temperature" only triggers the conversion when it is not the first
    /// word of the y label.
    pub fn from_labels(x_label: &str, y_label: &str) -> Self {
        match y_label.find("Temperature") {
            Some(idx) if idx > 0 => Header {
                mode: HeaderMode::CelsiusConversion,
                x_label: x_label.to_string(),
                y_label: format!("{y_label}{CELSIUS_SUFFIX}"),
            },
            _ => Header {
                mode: HeaderMode::AsIs,
                x_label: x_label.to_string(),
                y_label: y_label.to_string(),
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            HeaderMode::CelsiusConversion => "Temperature history in °C",
            HeaderMode::AsIs | HeaderMode::Unrecognized => "Solution Variable History in SI Units",
        }
    }
}

// ---------------------------------------------------------------------------
// SummaryRow – one line of the final-value table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    /// Last y value, already rounded to two decimals.
    pub value: f64,
}

impl SummaryRow {
    pub fn new(label: impl Into<String>, last_value: f64) -> Self {
        SummaryRow {
            label: label.into(),
            value: round_to(last_value, 2),
        }
    }

    /// Value as written to the table, in Python float text: shortest
    /// round-trip digits, whole numbers keep one decimal (`100.0`), huge
    /// magnitudes switch to exponent form (`1e+16`), and `nan`/`inf`.
    pub fn value_text(&self) -> String {
        let v = self.value;
        if v.is_nan() {
            "nan".to_string()
        } else if v.is_infinite() {
            if v > 0.0 { "inf" } else { "-inf" }.to_string()
        } else if v.abs() >= 1e16 {
            let repr = format!("{v:e}");
            match repr.split_once('e') {
                Some((mantissa, exp)) => {
                    let exp: i32 = exp.parse().unwrap_or(0);
                    let sign = if exp < 0 { '-' } else { '+' };
                    format!("{mantissa}e{sign}{:02}", exp.abs())
                }
                None => repr,
            }
        } else if v.fract() == 0.0 {
            format!("{v:.1}")
        } else {
            format!("{v}")
        }
    }
}

/// Round to `decimals` places on the exact binary value, ties to even.
///
/// Goes through the formatter, which rounds the exact decimal expansion, so
/// `2.675` (stored as 2.67499...) becomes `2.67` and `0.125` becomes `0.12`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
