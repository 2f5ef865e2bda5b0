use std::sync::OnceLock;

/// Order of day, month and year in a culture's short date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Dmy,
    Mdy,
    Ymd,
}

/// Format context used to parse and render numbers and dates.
///
/// Cultures come from a fixed built-in table; look them up by name with
/// [`Culture::lookup`] or take the process default from [`Culture::current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    pub name: &'static str,
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
    pub negative_sign: &'static str,
    pub positive_sign: &'static str,
    pub nan_symbol: &'static str,
    pub infinity_symbol: &'static str,
    pub date_order: DateOrder,
    pub date_separator: &'static str,
    /// Short time uses AM/PM designators.
    pub twelve_hour: bool,
}

const fn culture(
    name: &'static str,
    decimal_separator: &'static str,
    group_separator: &'static str,
    date_order: DateOrder,
    date_separator: &'static str,
) -> Culture {
    Culture {
        name,
        decimal_separator,
        group_separator,
        negative_sign: "-",
        positive_sign: "+",
        nan_symbol: "NaN",
        infinity_symbol: "∞",
        date_order,
        date_separator,
        twelve_hour: false,
    }
}

const INVARIANT: Culture = Culture {
    infinity_symbol: "Infinity",
    ..culture("", ".", ",", DateOrder::Mdy, "/")
};

static CULTURES: &[Culture] = &[
    INVARIANT,
    Culture {
        twelve_hour: true,
        ..culture("en-US", ".", ",", DateOrder::Mdy, "/")
    },
    culture("en-GB", ".", ",", DateOrder::Dmy, "/"),
    culture("de-DE", ",", ".", DateOrder::Dmy, "."),
    culture("de-CH", ".", "’", DateOrder::Dmy, "."),
    culture("fr-FR", ",", "\u{202F}", DateOrder::Dmy, "/"),
    culture("es-ES", ",", ".", DateOrder::Dmy, "/"),
    culture("it-IT", ",", ".", DateOrder::Dmy, "/"),
    culture("nl-NL", ",", ".", DateOrder::Dmy, "-"),
    culture("pt-BR", ",", ".", DateOrder::Dmy, "/"),
    culture("ru-RU", ",", "\u{00A0}", DateOrder::Dmy, "."),
    culture("pl-PL", ",", "\u{00A0}", DateOrder::Dmy, "."),
    Culture {
        negative_sign: "\u{2212}",
        ..culture("sv-SE", ",", "\u{00A0}", DateOrder::Ymd, "-")
    },
    culture("ja-JP", ".", ",", DateOrder::Ymd, "/"),
];

static CURRENT: OnceLock<Culture> = OnceLock::new();

impl Culture {
    pub fn invariant() -> Culture {
        INVARIANT
    }

    /// All built-in cultures, invariant first.
    pub fn all() -> &'static [Culture] {
        CULTURES
    }

    /// Case-insensitive lookup; `_` and `-` are interchangeable.
    /// The empty name, `"C"`, `"POSIX"` and `"invariant"` resolve to the
    /// invariant culture.
    pub fn lookup(name: &str) -> Option<Culture> {
        let normalized = name.replace('_', "-");
        if matches!(
            normalized.to_ascii_lowercase().as_str(),
            "" | "c" | "posix" | "invariant"
        ) {
            return Some(INVARIANT);
        }
        CULTURES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&normalized))
            .copied()
    }

    /// Process-wide ambient culture.
    ///
    /// Resolved once from `LC_ALL`, `LC_NUMERIC` or `LANG` (first one set),
    /// e.g. `de_DE.UTF-8` → `de-DE`. Unknown locales resolve to invariant.
    pub fn current() -> Culture {
        *CURRENT.get_or_init(|| {
            ["LC_ALL", "LC_NUMERIC", "LANG"]
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
                .and_then(|locale| {
                    let name = locale.split(['.', '@']).next().unwrap_or_default();
                    Culture::lookup(name)
                })
                .unwrap_or(INVARIANT)
        })
    }

    /// Render an integer in the "N" number style: grouped integral digits and
    /// `decimals` zero fraction digits, e.g. `-123,456.00` (en-US).
    pub fn format_number(&self, value: i128, decimals: usize) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::new();
        if value < 0 {
            out.push_str(self.negative_sign);
        }
        for (i, d) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(self.group_separator);
            }
            out.push(d);
        }
        if decimals > 0 {
            out.push_str(self.decimal_separator);
            out.push_str(&"0".repeat(decimals));
        }
        out
    }

    /// Localize a plain Rust number rendering (`-1234.5`, `NaN`, `inf`):
    /// culture sign, decimal separator and special symbols, no grouping.
    pub fn localize_number(&self, plain: &str) -> String {
        let (negative, body) = match plain.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, plain),
        };
        let body = match body {
            "NaN" => return self.nan_symbol.to_string(),
            "inf" => self.infinity_symbol.to_string(),
            _ => body.replacen('.', self.decimal_separator, 1),
        };
        if negative {
            format!("{}{body}", self.negative_sign)
        } else {
            body
        }
    }

    /// Whether `c` is accepted as the group separator. Cultures grouping with
    /// a no-break space also accept a plain space, `’` also accepts `'`.
    pub fn is_group_separator_alias(&self, c: char) -> bool {
        match c {
            ' ' => matches!(self.group_separator, "\u{00A0}" | "\u{202F}"),
            '\'' => self.group_separator == "’",
            _ => false,
        }
    }

    /// Display name; the invariant culture is unnamed.
    pub fn display_name(&self) -> &'static str {
        if self.name.is_empty() { "invariant" } else { self.name }
    }
}

impl Default for Culture {
    fn default() -> Self {
        INVARIANT
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
