//! Plan synthesis: turns a trip request into a templated itinerary

use tracing::{debug, instrument};

use super::budget::BudgetBreakdown;
use super::duration::ParsedDuration;
use super::itinerary::{DayPlan, Itinerary, Overview, OverviewField, Personalization, TimeSlot};
use crate::models::{PlanDocument, TripRequest};

const REMINDERS: [&str; 5] = [
    "📱 提前下载当地地图和翻译APP",
    "🆔 携带身份证件和必要证明",
    "🌤️ 关注天气预报，准备合适衣物",
    "💊 准备常用药品和急救用品",
    "📞 保存当地紧急联系方式",
];

/// Builds plan documents from trip requests.
///
/// The day skeleton is fixed at three days whatever the requested duration;
/// the derived duration only appears in the overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanBuilder;

impl PlanBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the plan document for a request
    #[instrument(skip_all, fields(destination = %request.destination))]
    pub fn build(&self, request: &TripRequest) -> PlanDocument {
        let itinerary = self.compose(request);
        debug!(
            days = itinerary.overview.duration.days(),
            defaulted = itinerary.overview.duration.is_defaulted(),
            "Composed itinerary"
        );
        PlanDocument::new(itinerary.to_string())
    }

    /// Compose the section list without rendering it
    #[must_use]
    pub fn compose(&self, request: &TripRequest) -> Itinerary {
        let duration = ParsedDuration::derive(&request.start_date, &request.end_date);

        Itinerary {
            title: format!("# 🌟 {} 精品旅行计划", request.destination),
            overview: overview(request, duration),
            days: vec![
                arrival_day(&request.origin, &request.destination),
                exploration_day(),
                return_day(&request.origin),
            ],
            budget: BudgetBreakdown::new(request.budget),
            reminders: REMINDERS.iter().map(|r| (*r).to_string()).collect(),
            personalization: personalization(request),
        }
    }
}

fn overview(request: &TripRequest, duration: ParsedDuration) -> Overview {
    let field = |label: &'static str, value: String| OverviewField { label, value };

    Overview {
        duration,
        fields: vec![
            field("出发地", request.origin.clone()),
            field("目的地", request.destination.clone()),
            field(
                "出行时间",
                format!(
                    "{} 至 {} ({duration})",
                    request.start_date, request.end_date
                ),
            ),
            field("预算范围", format!("¥{}", request.budget)),
            field("出行人数", format!("{}人", request.people_count)),
            field("交通方式", request.transport_modes.to_string()),
            field("旅行风格", request.travel_styles.to_string()),
            field("主题偏好", request.travel_themes.to_string()),
        ],
    }
}

fn slot(heading: &'static str, activities: Vec<String>) -> TimeSlot {
    TimeSlot {
        heading,
        activities,
    }
}

fn fixed(activities: &[&str]) -> Vec<String> {
    activities.iter().map(|a| (*a).to_string()).collect()
}

fn arrival_day(origin: &str, destination: &str) -> DayPlan {
    DayPlan {
        number: 1,
        title: format!("抵达{destination}"),
        slots: vec![
            slot(
                "上午 09:00-12:00",
                vec![
                    format!("🚄 从{origin}出发，抵达{destination}"),
                    "🏨 酒店入住：推荐市中心精品酒店".to_string(),
                    "☕ 附近咖啡厅休息调整".to_string(),
                ],
            ),
            slot(
                "下午 14:00-18:00",
                vec![
                    format!("🏛️ 参观{destination}标志性景点"),
                    "📸 网红打卡点拍照留念".to_string(),
                    "🛍️ 当地特色商业街购物".to_string(),
                ],
            ),
            slot(
                "晚上 19:00-21:00",
                vec![
                    format!("🍜 品尝{destination}特色美食"),
                    "🌃 夜景观赏，感受城市魅力".to_string(),
                ],
            ),
        ],
    }
}

fn exploration_day() -> DayPlan {
    DayPlan {
        number: 2,
        title: "深度体验".to_string(),
        slots: vec![
            slot(
                "上午 09:00-12:00",
                fixed(&[
                    "🎨 文化景点深度游览",
                    "🏛️ 博物馆/艺术馆参观",
                    "📚 了解当地历史文化",
                ]),
            ),
            slot(
                "下午 14:00-17:00",
                fixed(&["🌳 自然风光游览", "🚶‍♀️ 徒步/休闲活动", "🎯 根据兴趣定制活动"]),
            ),
            slot(
                "晚上 18:00-21:00",
                fixed(&["🍽️ 高档餐厅晚餐", "🎭 当地特色表演/夜生活"]),
            ),
        ],
    }
}

fn return_day(origin: &str) -> DayPlan {
    DayPlan {
        number: 3,
        title: "返程准备".to_string(),
        slots: vec![
            slot(
                "上午 09:00-11:00",
                fixed(&["🛒 最后购物时间", "🎁 纪念品采购", "✅ 行李整理"]),
            ),
            slot(
                "下午 12:00-15:00",
                vec![format!("🚄 返程{origin}"), "💭 美好回忆收藏".to_string()],
            ),
        ],
    }
}

fn personalization(request: &TripRequest) -> Personalization {
    Personalization {
        theme_sentence: request
            .travel_themes
            .first()
            .map(|theme| format!("根据您选择的【{theme}】主题，特别推荐相关活动和景点。")),
        special_requirements: request.special_requirements.as_deref().map(str::to_string),
    }
}
