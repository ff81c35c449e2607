//! Score display formatting: compact suffix notation and English words.

/// Suffix tiers from million up to octillion, largest first.
const TIERS: [(f64, &str); 8] = [
    (1e27, "Oc"),
    (1e24, "Sp"),
    (1e21, "Sx"),
    (1e18, "Qi"),
    (1e15, "Qa"),
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
];

const UNITS: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Magnitude names matching the compact tiers, largest first.
const SCALES: [(f64, &str); 9] = [
    (1e27, "octillion"),
    (1e24, "septillion"),
    (1e21, "sextillion"),
    (1e18, "quintillion"),
    (1e15, "quadrillion"),
    (1e12, "trillion"),
    (1e9, "billion"),
    (1e6, "million"),
    (1e3, "thousand"),
];

/// Render a score compactly: `2_500_000` becomes `"2.5 M"`, values below a
/// million keep comma separators, zero is `"0"`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_string();
    }
    for (threshold, suffix) in TIERS {
        if value >= threshold {
            let scaled = value / threshold;
            if scaled.fract() == 0.0 {
                return format!("{scaled:.0} {suffix}");
            }
            return format!("{scaled:.1} {suffix}");
        }
    }
    group_thousands(value.floor())
}

/// Render the full integer part with comma separators and no suffix, for the
/// main counter where every digit matters.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_string();
    }
    group_thousands(value.floor())
}

/// Comma-group the integer part of a value.
fn group_thousands(value: f64) -> String {
    let digits = format!("{value:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Spell a non-negative number in English words, capitalized:
/// `1_000_000` becomes `"One million"`, `45` becomes `"Forty-five"`,
/// zero is `"Zero"`. Negative or non-finite input renders empty.
#[must_use]
pub fn number_to_words(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return String::new();
    }
    let mut remaining = value.floor();
    if remaining == 0.0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    for (scale, name) in SCALES {
        if remaining >= scale {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = (remaining / scale).floor() as u16;
            if count > 0 {
                parts.push(format!("{} {name}", chunk_to_words(count)));
            }
            remaining %= scale;
        }
    }
    if remaining >= 1.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        parts.push(chunk_to_words(remaining as u16));
    }

    capitalize(&parts.join(" "))
}

/// Words for a value below one thousand.
fn chunk_to_words(value: u16) -> String {
    debug_assert!(value < 1_000);
    let mut words = String::new();
    let mut rest = value as usize;
    if rest >= 100 {
        words.push_str(UNITS[rest / 100]);
        words.push_str(" hundred");
        rest %= 100;
        if rest > 0 {
            words.push(' ');
        }
    }
    if rest > 0 {
        if rest < 20 {
            words.push_str(UNITS[rest]);
        } else {
            words.push_str(TENS[rest / 10]);
            if rest % 10 > 0 {
                words.push('-');
                words.push_str(UNITS[rest % 10]);
            }
        }
    }
    words
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
