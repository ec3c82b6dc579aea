//! Ingredient line parser.
//!
//! Turns free-text ingredient lines ("2 Tablespoons olive oil") into
//! [`ParsedIngredient`] records with a normalized unit token and a decimal
//! count. Parsing is a pure function of its input and never fails: a line
//! that does not fit the quantity-unit-description shape is kept verbatim
//! as the description.

use crate::model::ParsedIngredient;

/// Synonym -> canonical unit spellings, ported verbatim from the upstream
/// data set. Matched case-insensitively.
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "lb"),
    ("pound", "lb"),
];

/// Closed set of canonical unit tokens.
const UNITS: &[&str] = &["tbsp", "tsp", "oz", "cup", "lb", "kg", "g"];

/// Unicode vulgar fraction glyphs and their decimal values.
const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Parse a batch of raw ingredient lines.
pub fn parse_lines(lines: &[String]) -> Vec<ParsedIngredient> {
    lines.iter().map(|line| parse_line(line)).collect()
}

/// Parse a single free-text ingredient line.
///
/// The line is tokenized on whitespace, unit synonyms are replaced by their
/// canonical spelling, then an optional leading quantity and an optional
/// unit token are split off. Whatever remains is the description.
pub fn parse_line(line: &str) -> ParsedIngredient {
    let tokens: Vec<String> = line.split_whitespace().map(normalize_token).collect();

    let count = tokens.first().and_then(|token| parse_quantity(token));
    let mut rest: &[String] = if count.is_some() { &tokens[1..] } else { &tokens };

    let unit = match rest.first() {
        Some(token) if UNITS.contains(&token.as_str()) => {
            let unit = token.clone();
            rest = &rest[1..];
            unit
        }
        _ => String::new(),
    };

    let ingredient = rest.join(" ");
    if ingredient.is_empty() {
        // Malformed input is never dropped: keep the original line as the
        // description so it still shows up on screen and in the list.
        return ParsedIngredient {
            count: None,
            unit: String::new(),
            ingredient: line.trim().to_string(),
        };
    }

    ParsedIngredient {
        count,
        unit,
        ingredient,
    }
}

/// Replace unit synonyms with their canonical spelling and case-fold
/// canonical units. Any other token passes through untouched.
fn normalize_token(token: &str) -> String {
    let folded = token.to_lowercase();
    if let Some((_, canonical)) = UNIT_SYNONYMS.iter().find(|(synonym, _)| *synonym == folded) {
        return (*canonical).to_string();
    }
    if UNITS.contains(&folded.as_str()) {
        return folded;
    }
    token.to_string()
}

/// Extract a quantity from a single token, in one of three forms: a plain
/// non-negative decimal, a vulgar fraction glyph (optionally preceded by a
/// whole number, "1½"), or an ASCII fraction `a/b` / mixed number `a+b/c`.
/// Returns `None` when the token is not numeric, including division by
/// zero and other non-finite results.
fn parse_quantity(token: &str) -> Option<f64> {
    if let Some(value) = parse_vulgar(token) {
        return Some(value);
    }
    if token.contains('/') {
        return parse_ascii_fraction(token);
    }
    let value: f64 = token.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

fn parse_vulgar(token: &str) -> Option<f64> {
    let (idx, last) = token.char_indices().last()?;
    let fraction = VULGAR_FRACTIONS
        .iter()
        .find(|(glyph, _)| *glyph == last)?
        .1;
    let prefix = &token[..idx];
    if prefix.is_empty() {
        return Some(fraction);
    }
    let whole: u32 = prefix.parse().ok()?;
    Some(f64::from(whole) + fraction)
}

fn parse_ascii_fraction(token: &str) -> Option<f64> {
    // "1+1/2" is a mixed number; the upstream data also writes it "1-1/2"
    let (whole, fraction) = match token.split_once(['+', '-']) {
        Some((whole, fraction)) if !whole.is_empty() => (whole.parse::<f64>().ok()?, fraction),
        _ => (0.0, token),
    };
    let (numer, denom) = fraction.split_once('/')?;
    let numer: f64 = numer.parse().ok()?;
    let denom: f64 = denom.parse().ok()?;
    let value = whole + numer / denom;
    (value.is_finite() && value >= 0.0).then_some(value)
}
