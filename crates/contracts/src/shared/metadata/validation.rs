//! Validation rules for form fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
    pub integer: bool,
    /// Message shown next to the field when any rule fails
    pub message: &'static str,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
            integer: false,
            message: "",
        }
    }

    /// Create validation rules for required field
    pub const fn required(message: &'static str) -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            max_length: None,
            integer: false,
            message,
        }
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Validate a string value against the rules.
    ///
    /// Presence is checked on the trimmed value, length on the raw value in
    /// characters (not bytes).
    pub fn validate_string(&self, value: &str) -> Result<(), &'static str> {
        if self.required && value.trim().is_empty() {
            return Err(self.message);
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(self.message);
            }
        }

        Ok(())
    }

    /// Parse and validate a numeric value typed into a text input.
    ///
    /// Returns `Ok(None)` for an empty optional field.
    pub fn validate_number(&self, raw: &str) -> Result<Option<f64>, &'static str> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required { Err(self.message) } else { Ok(None) };
        }

        let value: f64 = raw.parse().map_err(|_| self.message)?;
        if !value.is_finite() {
            return Err(self.message);
        }
        if self.integer && value.fract() != 0.0 {
            return Err(self.message);
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(self.message);
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(self.message);
            }
        }

        Ok(Some(value))
    }
}
