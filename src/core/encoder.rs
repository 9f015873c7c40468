use crate::models::{FeatureVector, FieldError, PredictionRequest};
use thiserror::Error;

/// Fixed label-to-code table for one categorical field
#[derive(Debug, Clone, Copy)]
pub struct CategoryEncoding {
    pub field: &'static str,
    entries: &'static [(&'static str, u8)],
}

impl CategoryEncoding {
    /// Exact, case-sensitive lookup
    #[inline]
    pub fn lookup(&self, label: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, code)| *code)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(label, _)| *label)
    }

    fn encode(&self, label: &str, invalid: &mut Vec<InvalidCategory>) -> u8 {
        match self.lookup(label) {
            Some(code) => code,
            None => {
                invalid.push(InvalidCategory {
                    field: self.field,
                    value: label.to_string(),
                    allowed: self.labels().collect(),
                });
                0
            }
        }
    }
}

pub const GENDER: CategoryEncoding = CategoryEncoding {
    field: "Gender",
    entries: &[("Female", 0), ("Male", 1)],
};

pub const ACTIVITY_LEVEL: CategoryEncoding = CategoryEncoding {
    field: "ActivityLevel",
    entries: &[("Low", 0), ("Moderate", 1), ("High", 2)],
};

pub const WEATHER: CategoryEncoding = CategoryEncoding {
    field: "Weather",
    entries: &[("Cool", 0), ("Moderate", 1), ("Hot", 2)],
};

/// A categorical value that is not present in its table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCategory {
    pub field: &'static str,
    pub value: String,
    pub allowed: Vec<&'static str>,
}

impl From<&InvalidCategory> for FieldError {
    fn from(invalid: &InvalidCategory) -> Self {
        FieldError {
            field: invalid.field.to_string(),
            value: invalid.value.clone(),
            allowed: invalid.allowed.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Invalid input values for categorical fields: {}", field_list(.0))]
    InvalidCategory(Vec<InvalidCategory>),
}

impl EncodingError {
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            EncodingError::InvalidCategory(fields) => fields.iter().map(FieldError::from).collect(),
        }
    }
}

fn field_list(fields: &[InvalidCategory]) -> String {
    fields
        .iter()
        .map(|f| f.field)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Encode a request into the model's feature vector
///
/// All three categorical fields are checked before anything is returned, so
/// a request with several bad labels reports every one of them. No partially
/// encoded vector ever leaves this function.
pub fn encode(request: &PredictionRequest) -> Result<FeatureVector, EncodingError> {
    let mut invalid = Vec::new();

    let gender_code = GENDER.encode(&request.gender, &mut invalid);
    let activity_code = ACTIVITY_LEVEL.encode(&request.activity_level, &mut invalid);
    let weather_code = WEATHER.encode(&request.weather, &mut invalid);

    if !invalid.is_empty() {
        return Err(EncodingError::InvalidCategory(invalid));
    }

    Ok(FeatureVector::new(
        request.age as f64,
        gender_code,
        request.weight,
        activity_code,
        weather_code,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(gender: &str, activity: &str, weather: &str) -> PredictionRequest {
        PredictionRequest {
            age: 30,
            gender: gender.to_string(),
            weight: 65.5,
            activity_level: activity.to_string(),
            weather: weather.to_string(),
        }
    }

    #[test]
    fn test_table_codes() {
        assert_eq!(GENDER.lookup("Female"), Some(0));
        assert_eq!(GENDER.lookup("Male"), Some(1));
        assert_eq!(ACTIVITY_LEVEL.lookup("High"), Some(2));
        assert_eq!(WEATHER.lookup("Moderate"), Some(1));
        assert_eq!(WEATHER.lookup("hot"), None);
    }

    #[test]
    fn test_encode_order() {
        let features = encode(&request("Male", "Moderate", "Hot")).unwrap();
        assert_eq!(features.as_slice(), &[30.0, 1.0, 65.5, 1.0, 2.0]);
    }

    #[test]
    fn test_encode_reports_every_invalid_field() {
        let err = encode(&request("Unknown", "Extreme", "Hot")).unwrap_err();
        let EncodingError::InvalidCategory(fields) = &err;
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "Gender");
        assert_eq!(fields[0].value, "Unknown");
        assert_eq!(fields[0].allowed, vec!["Female", "Male"]);
        assert_eq!(fields[1].field, "ActivityLevel");
        assert!(err.to_string().contains("Gender, ActivityLevel"));
    }
}
