//! Section model of a plan and its text rendering
//!
//! A plan is composed as a list of sections first and only rendered to text
//! at the end, so each section can be inspected on its own.

use std::fmt::{self, Display};

use super::budget::BudgetBreakdown;
use super::duration::ParsedDuration;

/// Fully composed plan, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub title: String,
    pub overview: Overview,
    pub days: Vec<DayPlan>,
    pub budget: BudgetBreakdown,
    pub reminders: Vec<String>,
    pub personalization: Personalization,
}

/// Labelled summary of the request
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub duration: ParsedDuration,
    pub fields: Vec<OverviewField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewField {
    pub label: &'static str,
    pub value: String,
}

impl Overview {
    /// Value of the field with the given label
    #[must_use]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

/// One day of the fixed skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub number: u8,
    pub title: String,
    pub slots: Vec<TimeSlot>,
}

/// Morning, afternoon or evening block within a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub heading: &'static str,
    pub activities: Vec<String>,
}

/// Closing recommendations; each part is omitted when its source is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Personalization {
    pub theme_sentence: Option<String>,
    pub special_requirements: Option<String>,
}

impl Personalization {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.theme_sentence
            .as_deref()
            .into_iter()
            .chain(self.special_requirements.as_deref())
    }
}

pub const OVERVIEW_HEADING: &str = "## 📋 行程概览";
pub const SCHEDULE_HEADING: &str = "## 🗓️ 详细行程安排";
pub const BUDGET_HEADING: &str = "## 💰 预算分配建议";
pub const REMINDERS_HEADING: &str = "## ⚠️ 贴心提醒";
pub const PERSONALIZATION_HEADING: &str = "## 🎯 个性化推荐";
pub const TRAILER: &str = "*本计划由TripGenie AI智能生成，可根据实际情况灵活调整*";

impl Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{OVERVIEW_HEADING}")?;
        for field in &self.fields {
            writeln!(f, "- **{}**: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", self.heading)?;
        for activity in &self.activities {
            writeln!(f, "- {activity}")?;
        }
        Ok(())
    }
}

impl Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Day {}: {}", self.number, self.title)?;
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

impl Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.overview)?;

        writeln!(f, "{SCHEDULE_HEADING}")?;
        writeln!(f)?;
        for day in &self.days {
            writeln!(f, "{day}")?;
        }

        writeln!(f, "{BUDGET_HEADING}")?;
        writeln!(f, "{}", self.budget)?;

        writeln!(f, "{REMINDERS_HEADING}")?;
        for reminder in &self.reminders {
            writeln!(f, "- {reminder}")?;
        }
        writeln!(f)?;

        writeln!(f, "{PERSONALIZATION_HEADING}")?;
        for line in self.personalization.lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;

        writeln!(f, "---")?;
        writeln!(f, "{TRAILER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(heading: &'static str, activities: &[&str]) -> TimeSlot {
        TimeSlot {
            heading,
            activities: activities.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_day_plan_render() {
        let day = DayPlan {
            number: 2,
            title: "深度体验".to_string(),
            slots: vec![
                slot("上午 09:00-12:00", &["🎨 文化景点深度游览"]),
                slot("晚上 18:00-21:00", &["🍽️ 高档餐厅晚餐"]),
            ],
        };
        assert_eq!(
            day.to_string(),
            "### Day 2: 深度体验\n**上午 09:00-12:00**\n- 🎨 文化景点深度游览\n\n**晚上 18:00-21:00**\n- 🍽️ 高档餐厅晚餐\n"
        );
    }

    #[test]
    fn test_personalization_omits_absent_parts() {
        let empty = Personalization::default();
        assert_eq!(empty.lines().count(), 0);

        let only_requirements = Personalization {
            theme_sentence: None,
            special_requirements: Some("素食餐厅推荐".to_string()),
        };
        assert_eq!(only_requirements.lines().collect::<Vec<_>>(), vec!["素食餐厅推荐"]);
    }

    #[test]
    fn test_overview_field_lookup() {
        let overview = Overview {
            duration: ParsedDuration::Derived(2),
            fields: vec![OverviewField {
                label: "出发地",
                value: "北京".to_string(),
            }],
        };
        assert_eq!(overview.field("出发地"), Some("北京"));
        assert_eq!(overview.field("目的地"), None);
        assert_eq!(overview.to_string(), "## 📋 行程概览\n- **出发地**: 北京\n");
    }
}
