//! Trip request model: the input tuple gathered from the form

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Placeholder rendered for an empty label group ("not selected")
pub const NOT_SELECTED: &str = "未选择";

/// All parameters for a single plan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Departure city (free text, may be empty)
    #[serde(default)]
    pub origin: String,
    /// Destination city (free text, may be empty)
    #[serde(default)]
    pub destination: String,
    /// Start date, expected as `YYYY-MM-DD` but not validated
    #[serde(default)]
    pub start_date: String,
    /// End date, expected as `YYYY-MM-DD` but not validated
    #[serde(default)]
    pub end_date: String,
    /// Total budget in yuan
    pub budget: f64,
    /// Party size, echoed in the overview only
    pub people_count: u32,
    #[serde(default)]
    pub transport_modes: LabelSet,
    #[serde(default)]
    pub travel_styles: LabelSet,
    #[serde(default)]
    pub travel_themes: LabelSet,
    #[serde(default)]
    pub special_requirements: SpecialRequirements,
}

impl TripRequest {
    /// Check the values a caller outside the form could get wrong.
    ///
    /// The plan builder itself never fails; this guards the HTTP boundary.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.budget.is_finite() {
            return Err(crate::TripGenieError::validation(
                "budget must be a finite number",
            ));
        }
        if self.budget < 0.0 {
            return Err(crate::TripGenieError::validation(format!(
                "budget cannot be negative, got: {}",
                self.budget
            )));
        }
        if self.people_count == 0 {
            return Err(crate::TripGenieError::validation(
                "people_count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Ordered group of short labels picked from a checkbox group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str(NOT_SELECTED)
        } else {
            f.write_str(&self.0.join(", "))
        }
    }
}

/// Free-text special requirements, either given or left blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SpecialRequirements {
    #[default]
    Absent,
    Present(String),
}

impl SpecialRequirements {
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            SpecialRequirements::Absent => None,
            SpecialRequirements::Present(text) => Some(text),
        }
    }
}

impl From<Option<String>> for SpecialRequirements {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) if !text.is_empty() => SpecialRequirements::Present(text),
            _ => SpecialRequirements::Absent,
        }
    }
}

impl From<String> for SpecialRequirements {
    fn from(value: String) -> Self {
        Some(value).into()
    }
}

impl From<&str> for SpecialRequirements {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<SpecialRequirements> for Option<String> {
    fn from(value: SpecialRequirements) -> Self {
        match value {
            SpecialRequirements::Absent => None,
            SpecialRequirements::Present(text) => Some(text),
        }
    }
}

/// Fields identifying a trip inside an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripMetadata {
    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
}

impl From<&TripRequest> for TripMetadata {
    fn from(request: &TripRequest) -> Self {
        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            budget: request.budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], "未选择")]
    #[case(vec!["🚄 高铁"], "🚄 高铁")]
    #[case(vec!["🚄 高铁", "✈️ 飞机", "🚌 大巴"], "🚄 高铁, ✈️ 飞机, 🚌 大巴")]
    fn test_label_set_display(#[case] labels: Vec<&str>, #[case] expected: &str) {
        let set: LabelSet = labels.into_iter().collect();
        assert_eq!(set.to_string(), expected);
    }

    #[test]
    fn test_label_set_keeps_supplied_order() {
        let set: LabelSet = ["🌿 自然游", "🍜 美食之旅"].into_iter().collect();
        assert_eq!(set.first(), Some("🌿 自然游"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["🌿 自然游", "🍜 美食之旅"]);
    }

    #[rstest]
    #[case("", SpecialRequirements::Absent)]
    #[case("素食", SpecialRequirements::Present("素食".to_string()))]
    #[case("  ", SpecialRequirements::Present("  ".to_string()))]
    fn test_special_requirements_from_text(
        #[case] text: &str,
        #[case] expected: SpecialRequirements,
    ) {
        assert_eq!(SpecialRequirements::from(text), expected);
    }

    #[test]
    fn test_special_requirements_deserialize() {
        let absent: SpecialRequirements = serde_json::from_str("null").unwrap();
        assert_eq!(absent, SpecialRequirements::Absent);

        let empty: SpecialRequirements = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty, SpecialRequirements::Absent);

        let present: SpecialRequirements = serde_json::from_str("\"带宠物\"").unwrap();
        assert_eq!(present.as_deref(), Some("带宠物"));
    }

    #[test]
    fn test_trip_request_deserialize_with_missing_optionals() {
        let json = r#"{"origin":"北京","destination":"上海","start_date":"2024-03-15",
            "end_date":"2024-03-17","budget":3000,"people_count":2}"#;
        let request: TripRequest = serde_json::from_str(json).unwrap();
        assert!(request.transport_modes.is_empty());
        assert_eq!(request.special_requirements, SpecialRequirements::Absent);
        assert_eq!(request.budget, 3000.0);
    }

    #[rstest]
    #[case(3000.0, 2, true)]
    #[case(0.0, 1, true)]
    #[case(-1.0, 2, false)]
    #[case(f64::NAN, 2, false)]
    #[case(3000.0, 0, false)]
    fn test_trip_request_validate(
        #[case] budget: f64,
        #[case] people_count: u32,
        #[case] ok: bool,
    ) {
        let request = TripRequest {
            origin: "北京".to_string(),
            destination: "上海".to_string(),
            start_date: "2024-03-15".to_string(),
            end_date: "2024-03-17".to_string(),
            budget,
            people_count,
            transport_modes: LabelSet::default(),
            travel_styles: LabelSet::default(),
            travel_themes: LabelSet::default(),
            special_requirements: SpecialRequirements::Absent,
        };
        assert_eq!(request.validate().is_ok(), ok);
    }
}
