use super::*;
use crate::ast::Value;

impl OmflConfig {
    /// Get a value checked by a caller-supplied predicate. Failures carry
    /// the line declaring the value when it can be located.
    pub fn get_validated<T, F>(
        &self,
        path: &str,
        validator: F,
        valid_values: &str,
    ) -> Result<T, OmflError>
    where
        T: TryFrom<Value, Error = OmflError>,
        F: FnOnce(&T) -> bool,
    {
        let value = self.get_value(path)?;
        let typed_value = T::try_from(value)?;

        if !validator(&typed_value) {
            let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
            return Err(OmflError::ValidationError {
                message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                line,
                hint: Some(format!("Valid values are: {}\n  -> {}", valid_values, snippet)),
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and check it is one of the allowed values,
    /// case-insensitively.
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, OmflError> {
        let value: String = self.get(path)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|&v| v.to_lowercase() == lower_value) {
            let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
            return Err(OmflError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                line,
                hint: Some(format!(
                    "Expected one of: {}\n  -> {}",
                    allowed_values.join(", "),
                    snippet
                )),
            });
        }

        Ok(value)
    }
}
