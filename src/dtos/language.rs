//! Language DTOs - Data Transfer Objects for the Languages classifier

use crate::core::UniqueRule;
use crate::entities::Language;
use crate::repositories::FieldValue;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref ALPHA2_RE: Regex = Regex::new(r"^[a-z]{2}$").unwrap();
    static ref DIGITAL_CODE_RE: Regex = Regex::new(r"^$|^[0-9]{3}$").unwrap();
}

/// View model for one Languages row. Field for field the same data as the
/// entity; all input validation happens here, at the HTTP boundary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDTO {
    /// Unset (zero) on create; must match the path ID on replace.
    #[serde(default)]
    pub id: i16,

    /// ISO language name.
    #[validate(length(
        min = 1,
        max = 50,
        message = "The name is required and must be at most 50 characters."
    ))]
    pub name: String,

    /// ISO 639-1 alpha-2 code.
    #[validate(regex(
        path = *ALPHA2_RE,
        message = "This value must contains only 2 lower case English letters."
    ))]
    pub alpha2: String,

    /// Language notes.
    pub notes: Option<String>,

    /// The digital code consisting of 3 Arabic numerals, assigned to
    /// languages arranged in the order of Russian names.
    #[validate(regex(
        path = *DIGITAL_CODE_RE,
        message = "This value must be zero or contains only 3 Arabic numerals."
    ))]
    pub digital_code: Option<String>,
}

impl LanguageDTO {
    /// Every data field of the classifier is table-wide unique on its own.
    pub const UNIQUE_RULES: &'static [UniqueRule<LanguageDTO>] = &[
        UniqueRule {
            field: "name",
            value: |dto| FieldValue::from(dto.name.clone()),
        },
        UniqueRule {
            field: "alpha2",
            value: |dto| FieldValue::from(dto.alpha2.clone()),
        },
        UniqueRule {
            field: "notes",
            value: |dto| FieldValue::from(dto.notes.clone()),
        },
        UniqueRule {
            field: "digital_code",
            value: |dto| FieldValue::from(dto.digital_code.clone()),
        },
    ];
}

impl From<Language> for LanguageDTO {
    fn from(value: Language) -> Self {
        Self {
            id: value.id,
            name: value.name,
            alpha2: value.alpha2,
            notes: value.notes,
            digital_code: value.digital_code,
        }
    }
}

impl From<LanguageDTO> for Language {
    fn from(value: LanguageDTO) -> Self {
        Self {
            id: value.id,
            name: value.name,
            alpha2: value.alpha2,
            notes: value.notes,
            digital_code: value.digital_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> LanguageDTO {
        LanguageDTO {
            id: 0,
            name: "Esperanto".to_string(),
            alpha2: "eo".to_string(),
            notes: None,
            digital_code: Some("129".to_string()),
        }
    }

    #[test]
    fn a_well_formed_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn alpha2_must_be_two_lowercase_letters() {
        for bad in ["EO", "e", "eng", "e1", ""] {
            let mut dto = valid_dto();
            dto.alpha2 = bad.to_string();

            let errors = dto.validate().expect_err("alpha2 must be rejected");
            assert!(errors.field_errors().contains_key("alpha2"), "{bad:?}");
        }
    }

    #[test]
    fn name_is_required_and_bounded() {
        let mut dto = valid_dto();
        dto.name = String::new();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.name = "x".repeat(51);
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.name = "x".repeat(50);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn digital_code_allows_empty_or_three_digits() {
        let mut dto = valid_dto();
        dto.digital_code = Some(String::new());
        assert!(dto.validate().is_ok());

        let mut dto = valid_dto();
        dto.digital_code = None;
        assert!(dto.validate().is_ok());

        for bad in ["12", "1234", "12a"] {
            let mut dto = valid_dto();
            dto.digital_code = Some(bad.to_string());
            assert!(dto.validate().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn mapping_is_structural_both_ways() {
        let dto = valid_dto();
        let entity = Language::from(dto.clone());
        let back = LanguageDTO::from(entity);

        assert_eq!(back, dto);
    }

    #[test]
    fn unique_rules_read_the_submitted_values() {
        let dto = valid_dto();

        let values: Vec<FieldValue> = LanguageDTO::UNIQUE_RULES
            .iter()
            .map(|rule| (rule.value)(&dto))
            .collect();

        assert_eq!(
            values,
            vec![
                FieldValue::Text("Esperanto".to_string()),
                FieldValue::Text("eo".to_string()),
                FieldValue::Null,
                FieldValue::Text("129".to_string()),
            ]
        );
    }
}
