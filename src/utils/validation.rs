use crate::utils::error::{GameError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_keys<'a, I>(field_name: &str, present: I, required: &[&str]) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let present: Vec<&String> = present.into_iter().collect();
    for key in required {
        if !present.iter().any(|k| k.as_str() == *key) {
            return Err(GameError::MissingConfigError {
                field: format!("{}.{}", field_name, key),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.data_dir", "files").is_ok());
        assert!(validate_path("input.data_dir", "").is_err());
        assert!(validate_path("input.data_dir", "fi\0les").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("table.rows", 5, 1, 10).is_ok());
        assert!(validate_range("table.rows", 0, 1, 10).is_err());
        assert!(validate_range("table.rows", 11, 1, 10).is_err());
        assert!(validate_range("table.start_x", 0, 0, 10).is_ok());
        assert!(validate_range("robot.step", i64::MAX, 1, 1_000).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("game.prompt", "> ").is_ok());
        assert!(validate_non_empty_string("game.prompt", "   ").is_err());
    }

    #[test]
    fn test_validate_required_keys() {
        let keys = vec!["welcome".to_string(), "position".to_string()];
        assert!(validate_required_keys("messages", &keys, &["welcome"]).is_ok());

        let err = validate_required_keys("messages", &keys, &["wrong_move"]).unwrap_err();
        assert!(matches!(
            err,
            GameError::MissingConfigError { ref field } if field == "messages.wrong_move"
        ));
    }
}
