use std::fmt::Write;
use validator::ValidationErrors;

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut result = String::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "email" => "invalid email format".to_string(),
                    "length" => "invalid length".to_string(),
                    "range" => "value out of range".to_string(),
                    "required" => "required".to_string(),
                    _ => "invalid value".to_string(),
                });

            let _ = writeln!(&mut result, "{field}: {message}");
        }
    }

    if result.is_empty() {
        "Validation failed".to_string()
    } else {
        result.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email)]
        email: String,
        #[validate(length(min = 1, message = "First name is required"))]
        first_name: String,
    }

    #[test]
    fn flattens_field_errors_into_lines() {
        let probe = Probe {
            email: "not-an-email".to_string(),
            first_name: String::new(),
        };
        let errors = probe.validate().unwrap_err();
        let formatted = format_validation_errors(&errors);

        assert!(formatted.contains("email"));
        assert!(formatted.contains("First name is required"));
    }

    #[test]
    fn valid_input_produces_no_errors() {
        let probe = Probe {
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
        };
        assert!(probe.validate().is_ok());
    }
}
