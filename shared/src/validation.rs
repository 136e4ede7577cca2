use validator::ValidationError;

pub fn validate_option_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::new("empty_option"));
    }
    Ok(())
}

/// Labels compare case-sensitively after trimming.
pub fn validate_unique_option(label: &str, existing: &[String]) -> Result<(), ValidationError> {
    let label = label.trim();
    if existing.iter().any(|option| option == label) {
        return Err(ValidationError::new("duplicate_option"));
    }
    Ok(())
}
