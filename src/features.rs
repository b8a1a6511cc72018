//! The fixed 12-column feature contract shared by fitting and the dashboard.

/// Number of features the scaler is fitted on and the dashboard collects.
pub const FEATURE_COUNT: usize = 12;

/// Feature column names in contract order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "flowering_start",
    "flowering_end",
    "flowering_times",
    "flowers_m2",
    "nectar_ml",
    "sugar_concentration_mol",
    "sugar_concentration_perc",
    "nectar_sugar_content_mg",
    "pollen_mg",
    "corolla_mm",
    "protein",
    "sugar_perc",
];

/// Owned copy of the contract names, as stored in the scaler artifact.
pub fn feature_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|name| (*name).to_string()).collect()
}

/// Human-friendly label: underscores become spaces and the first letter is
/// upper-cased.
pub fn display_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check that `names` matches the contract exactly, in order.
pub fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<(), String> {
    if names.len() != FEATURE_COUNT {
        return Err(format!(
            "expected {FEATURE_COUNT} features, found {}",
            names.len()
        ));
    }
    for (idx, (found, expected)) in names.iter().zip(FEATURE_NAMES).enumerate() {
        if found.as_ref() != expected {
            return Err(format!(
                "feature {} is {:?}, expected {expected:?}",
                idx + 1,
                found.as_ref()
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_spaced_and_capitalized() {
        assert_eq!(display_label("flowering_start"), "Flowering start");
        assert_eq!(display_label("flowers_m2"), "Flowers m2");
        assert_eq!(display_label("protein"), "Protein");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn contract_names_validate() {
        validate_names(&FEATURE_NAMES).unwrap();
        validate_names(&feature_names()).unwrap();
    }

    #[test]
    fn reordered_or_short_names_are_rejected() {
        let mut swapped = feature_names();
        swapped.swap(0, 1);
        let err = validate_names(&swapped).unwrap_err();
        assert!(err.contains("feature 1"), "{err}");

        let short = &FEATURE_NAMES[..11];
        let err = validate_names(short).unwrap_err();
        assert!(err.contains("found 11"), "{err}");
    }
}
