/// Turn a `PascalCase` field name into words: `ZeroToSixtyMph` becomes `Zero To Sixty Mph`.
///
/// Runs of capitals stay together (`VinLast5` is `Vin Last5`, `DvlaCO2` is `Dvla CO2`), and underscores
/// become spaces.
#[must_use]
pub fn humanize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !result.ends_with(' ') && !result.is_empty() {
                result.push(' ');
            }
            continue;
        }

        if i > 0 && c.is_uppercase() && !result.ends_with(' ') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                result.push(' ');
            }
        }

        result.push(c);
    }

    result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_pascal_case() {
        assert_eq!(humanize("ZeroToSixtyMph"), "Zero To Sixty Mph");
        assert_eq!(humanize("Co2Emissions"), "Co2 Emissions");
        assert_eq!(humanize("Vrm"), "Vrm");
    }

    #[test]
    fn test_humanize_acronyms_and_digits() {
        assert_eq!(humanize("VinLast5"), "Vin Last5");
        assert_eq!(humanize("DvlaCO2"), "Dvla CO2");
        assert_eq!(humanize("NCAPRating"), "NCAP Rating");
    }

    #[test]
    fn test_humanize_underscores_and_empty() {
        assert_eq!(humanize("fuel_type"), "fuel type");
        assert_eq!(humanize(""), "");
    }
}
