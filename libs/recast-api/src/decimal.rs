use std::cmp::Ordering;
use std::fmt;

/// Fixed-point decimal: `mantissa * 10^-scale`.
///
/// The mantissa magnitude is limited to 96 bits and the scale to 28 digits,
/// the range of the classic 128-bit business decimal. Scale is preserved
/// (`1.50` and `1.5` compare equal but display differently).
#[derive(Debug, Clone, Copy, Default)]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

const MAX_MANTISSA: i128 = (1 << 96) - 1;

impl Decimal {
    pub const MAX_SCALE: u8 = 28;
    pub const MAX: Decimal = Decimal { mantissa: MAX_MANTISSA, scale: 0 };
    pub const MIN: Decimal = Decimal { mantissa: -MAX_MANTISSA, scale: 0 };
    pub const ZERO: Decimal = Decimal { mantissa: 0, scale: 0 };

    /// `None` when the mantissa exceeds 96 bits or the scale exceeds 28.
    pub fn new(mantissa: i128, scale: u8) -> Option<Self> {
        if mantissa.unsigned_abs() > MAX_MANTISSA as u128 || scale > Self::MAX_SCALE {
            return None;
        }
        Some(Self { mantissa, scale })
    }

    pub fn from_i128(value: i128) -> Option<Self> {
        Self::new(value, 0)
    }

    /// Build from already-split decimal digits (ASCII `0-9` only).
    ///
    /// Fractional digits beyond what fits are rounded half away from zero.
    /// Returns `None` if the integral part does not fit.
    pub fn from_digits(negative: bool, integral: &str, fraction: &str) -> Option<Self> {
        let mut mantissa: i128 = 0;
        for d in integral.bytes() {
            mantissa = mantissa.checked_mul(10)?.checked_add(i128::from(d - b'0'))?;
            if mantissa > MAX_MANTISSA {
                return None;
            }
        }

        let mut scale = 0u8;
        let mut rest = fraction.bytes();
        for d in rest.by_ref() {
            let next = mantissa * 10 + i128::from(d - b'0');
            if scale == Self::MAX_SCALE || next > MAX_MANTISSA {
                if d >= b'5' {
                    mantissa += 1;
                }
                break;
            }
            mantissa = next;
            scale += 1;
        }
        if mantissa > MAX_MANTISSA {
            return None;
        }

        Some(Self {
            mantissa: if negative { -mantissa } else { mantissa },
            scale,
        })
    }

    /// Nearest decimal to a finite float, `None` for NaN, infinities and
    /// magnitudes beyond the decimal range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let text = format!("{}", value.abs());
        let (integral, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        Self::from_digits(value.is_sign_negative(), integral, fraction)
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Integral part, truncated toward zero.
    pub fn trunc(&self) -> i128 {
        self.mantissa / pow10(self.scale)
    }

    /// Compare against an integer without loss of precision.
    pub fn cmp_int(&self, other: i128) -> Ordering {
        let whole = self.trunc();
        match whole.cmp(&other) {
            Ordering::Equal => (self.mantissa % pow10(self.scale)).cmp(&0),
            ord => ord,
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.mantissa as f64 / pow10(self.scale) as f64
    }
}

fn pow10(scale: u8) -> i128 {
    10i128.pow(u32::from(scale))
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        // Integral parts first: rescaling whole mantissas can overflow i128,
        // the fractional remainders at a common scale cannot.
        match self.trunc().cmp(&other.trunc()) {
            Ordering::Equal => {
                let scale = self.scale.max(other.scale);
                let a = (self.mantissa % pow10(self.scale)) * pow10(scale - self.scale);
                let b = (other.mantissa % pow10(other.scale)) * pow10(scale - other.scale);
                a.cmp(&b)
            }
            ord => ord,
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let scale = usize::from(self.scale);
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (integral, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{integral}.{fraction}")
    }
}

macro_rules! decimal_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(v: $t) -> Self {
                    Decimal { mantissa: i128::from(v), scale: 0 }
                }
            }
        )*
    };
}

decimal_from_int!(i8, u8, i16, u16, i32, u32, i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_keep_scale() {
        let d = Decimal::from_digits(false, "3", "50").unwrap();
        assert_eq!(d.to_string(), "3.50");
        assert_eq!(d, Decimal::from_digits(false, "3", "5").unwrap());
    }

    #[test]
    fn max_value_digits() {
        assert_eq!(Decimal::MAX.to_string(), "79228162514264337593543950335");
        assert!(Decimal::from_digits(false, "79228162514264337593543950336", "").is_none());
    }

    #[test]
    fn excess_fraction_digits_are_rounded() {
        let d = Decimal::from_digits(false, "0", "12345678901234567890123456789").unwrap();
        assert_eq!(d.scale(), 28);
        assert_eq!(d.to_string(), "0.1234567890123456789012345679");
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(Decimal::from_digits(false, "3", "65").unwrap().trunc(), 3);
        assert_eq!(Decimal::from_digits(true, "3", "65").unwrap().trunc(), -3);
    }

    #[test]
    fn exact_comparison_with_bounds() {
        let min = i128::from(i32::MIN);
        let just_below = Decimal::from_digits(true, "2147483648", "5").unwrap();
        assert_eq!(just_below.cmp_int(min), Ordering::Less);
        assert_eq!(Decimal::from(i32::MIN).cmp_int(min), Ordering::Equal);
        assert_eq!(Decimal::MAX.cmp_int(i128::from(i64::MAX)), Ordering::Greater);
    }

    #[test]
    fn new_rejects_mantissas_beyond_96_bits() {
        assert_eq!(Decimal::new(-MAX_MANTISSA, 0), Some(Decimal::MIN));
        assert!(Decimal::new(MAX_MANTISSA + 1, 0).is_none());
        assert!(Decimal::new(i128::MIN, 0).is_none());
        assert!(Decimal::new(1, 29).is_none());
    }

    #[test]
    fn small_fractions_display_with_leading_zero() {
        let d = Decimal::new(-5, 3).unwrap();
        assert_eq!(d.to_string(), "-0.005");
    }
}
