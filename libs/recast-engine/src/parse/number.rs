use recast_api::{Culture, Decimal};

/// A number recognized in text, before it is fitted to a target type.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Digits only, separators removed.
    Finite {
        negative: bool,
        integral: String,
        fraction: String,
    },
    NaN,
    Infinity { negative: bool },
}

/// Parse text in the culture's number style.
///
/// Accepted: surrounding whitespace, one leading or trailing sign,
/// parentheses for negatives, group separators inside the integral part
/// (after its first digit), one decimal separator. No exponent. NaN and
/// infinity symbols are recognized here; integer and decimal targets reject
/// them later.
pub fn parse(text: &str, culture: &Culture) -> Option<Number> {
    let mut body = text.trim();
    let mut negative = false;

    if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        negative = true;
        body = inner.trim();
    } else if let Some(rest) = strip_sign_prefix(body, culture) {
        negative = rest.0;
        body = rest.1;
    } else if let Some(rest) = strip_sign_suffix(body, culture) {
        negative = rest.0;
        body = rest.1;
    }

    if let Some(special) = special_symbol(body, culture) {
        return Some(match special {
            Number::Infinity { .. } => Number::Infinity { negative },
            nan => nan,
        });
    }

    let mut integral = String::new();
    let mut fraction = String::new();
    let mut in_fraction = false;
    let mut rest = body;
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            if in_fraction {
                fraction.push(c);
            } else {
                integral.push(c);
            }
            rest = &rest[1..];
            continue;
        }
        if in_fraction {
            return None;
        }
        if let Some(r) = rest.strip_prefix(culture.decimal_separator) {
            in_fraction = true;
            rest = r;
        } else if !integral.is_empty() && rest.starts_with(culture.group_separator) {
            rest = &rest[culture.group_separator.len()..];
        } else if !integral.is_empty() && culture.is_group_separator_alias(c) {
            rest = &rest[c.len_utf8()..];
        } else {
            return None;
        }
    }

    if integral.is_empty() && fraction.is_empty() {
        return None;
    }
    Some(Number::Finite {
        negative,
        integral,
        fraction,
    })
}

/// Returns `(negative, rest)` when `body` starts with a sign.
fn strip_sign_prefix<'t>(body: &'t str, culture: &Culture) -> Option<(bool, &'t str)> {
    body.strip_prefix(culture.negative_sign)
        .or_else(|| body.strip_prefix('-'))
        .map(|rest| (true, rest))
        .or_else(|| body.strip_prefix(culture.positive_sign).map(|rest| (false, rest)))
}

fn strip_sign_suffix<'t>(body: &'t str, culture: &Culture) -> Option<(bool, &'t str)> {
    body.strip_suffix(culture.negative_sign)
        .or_else(|| body.strip_suffix('-'))
        .map(|rest| (true, rest))
        .or_else(|| body.strip_suffix(culture.positive_sign).map(|rest| (false, rest)))
}

fn special_symbol(body: &str, culture: &Culture) -> Option<Number> {
    let is = |symbol: &str| body.eq_ignore_ascii_case(symbol);
    if is(culture.nan_symbol) || is("NaN") {
        Some(Number::NaN)
    } else if is(culture.infinity_symbol) || is("Infinity") || is("∞") {
        Some(Number::Infinity { negative: false })
    } else {
        None
    }
}

impl Number {
    /// Exact integer value. A fractional part is accepted only when it is all
    /// zeros; specials and values beyond `i128` yield `None`.
    pub fn to_integer(&self) -> Option<i128> {
        let Number::Finite {
            negative,
            integral,
            fraction,
        } = self
        else {
            return None;
        };
        if fraction.bytes().any(|d| d != b'0') {
            return None;
        }
        let mut n: i128 = 0;
        for d in integral.bytes() {
            n = n.checked_mul(10)?.checked_add(i128::from(d - b'0'))?;
        }
        Some(if *negative { -n } else { n })
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Number::NaN => Some(f64::NAN),
            Number::Infinity { negative: false } => Some(f64::INFINITY),
            Number::Infinity { negative: true } => Some(f64::NEG_INFINITY),
            Number::Finite { .. } => self.plain().parse().ok(),
        }
    }

    /// Parsed directly as `f32` so the value is rounded once.
    pub fn to_f32(&self) -> Option<f32> {
        match self {
            Number::NaN => Some(f32::NAN),
            Number::Infinity { negative: false } => Some(f32::INFINITY),
            Number::Infinity { negative: true } => Some(f32::NEG_INFINITY),
            Number::Finite { .. } => self.plain().parse().ok(),
        }
    }

    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Number::Finite {
                negative,
                integral,
                fraction,
            } => Decimal::from_digits(*negative, integral, fraction),
            _ => None,
        }
    }

    /// Rust-parsable rendering of a finite number.
    fn plain(&self) -> String {
        match self {
            Number::Finite {
                negative,
                integral,
                fraction,
            } => {
                let sign = if *negative { "-" } else { "" };
                let integral = if integral.is_empty() { "0" } else { integral };
                let fraction = if fraction.is_empty() { "0" } else { fraction };
                format!("{sign}{integral}.{fraction}")
            }
            Number::NaN => "NaN".into(),
            Number::Infinity { negative } => {
                if *negative { "-inf".into() } else { "inf".into() }
            }
        }
    }
}
