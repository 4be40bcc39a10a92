//! Form shell: widget catalogues, page copy and the embedded page
//!
//! The shell only gathers inputs and displays results; all plan logic lives
//! in [`crate::planner`].

use serde::Serialize;

use crate::config::{FormDefaults, MIN_BUDGET, MIN_PEOPLE};

/// Page title
pub const TITLE: &str = "TripGenie - AI智能旅行策划助手";

/// Text shown in the output panel before the first plan
pub const PLACEHOLDER_OUTPUT: &str = "点击上方按钮生成您的旅行计划...";

pub const TRANSPORT_CHOICES: [&str; 4] = ["🚄 高铁", "✈️ 飞机", "🚗 自驾", "🚌 大巴"];

pub const STYLE_CHOICES: [&str; 5] = ["📸 网红打卡", "🏛️ 深度游", "🌟 奢华游", "💰 经济游", "🎒 背包游"];

pub const THEME_CHOICES: [&str; 6] = [
    "🍜 美食之旅",
    "👨‍👩‍👧‍👦 亲子游",
    "🌃 夜生活",
    "📷 摄影游",
    "🏛️ 文化游",
    "🌿 自然游",
];

pub const INTRO: &str = "# 🚀 TripGenie - AI智能旅行策划助手\n\n\
**让AI为你定制专属旅行计划！** 输入你的旅行需求，获得个性化的行程安排。";

pub const ROADMAP: &str = "### 🔮 未来功能预告\n\
- 🌐 **实时数据抓取**: 集成小红书、知乎等平台的真实推荐\n\
- 🧠 **AI智能推理**: 基于大语言模型的个性化规划\n\
- 🔍 **语义检索**: RAG技术提供精准的目的地信息\n\
- 🎨 **多风格文案**: 不同风格的行程描述（专业/俏皮/详细）\n\
- 💾 **用户记忆**: 保存偏好，提供更智能的推荐\n\n\
*当前版本为演示框架，核心AI功能开发中...*";

/// The single-page form
pub const INDEX_HTML: &str = include_str!("index.html");

/// One checkbox group
#[derive(Debug, Clone, Serialize)]
pub struct Catalogue {
    pub label: &'static str,
    pub choices: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalogues {
    pub transport_modes: Catalogue,
    pub travel_styles: Catalogue,
    pub travel_themes: Catalogue,
}

#[derive(Debug, Clone, Serialize)]
pub struct Limits {
    pub min_budget: f64,
    pub min_people: u32,
}

/// Everything the page needs to lay out its widgets
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub title: &'static str,
    pub intro: &'static str,
    pub roadmap: &'static str,
    pub placeholder: &'static str,
    pub defaults: FormDefaults,
    pub catalogues: Catalogues,
    pub limits: Limits,
}

impl FormSchema {
    #[must_use]
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            title: TITLE,
            intro: INTRO,
            roadmap: ROADMAP,
            placeholder: PLACEHOLDER_OUTPUT,
            defaults,
            catalogues: Catalogues {
                transport_modes: Catalogue {
                    label: "交通方式",
                    choices: TRANSPORT_CHOICES.to_vec(),
                },
                travel_styles: Catalogue {
                    label: "旅行风格",
                    choices: STYLE_CHOICES.to_vec(),
                },
                travel_themes: Catalogue {
                    label: "旅行主题",
                    choices: THEME_CHOICES.to_vec(),
                },
            },
            limits: Limits {
                min_budget: MIN_BUDGET,
                min_people: MIN_PEOPLE,
            },
        }
    }
}
