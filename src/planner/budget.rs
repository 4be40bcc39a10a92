//! Fixed-share budget breakdown

use std::fmt::{self, Display};

/// Spending categories with their fixed share of the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetCategory {
    Lodging,
    Meals,
    Transport,
    Admissions,
    Leisure,
}

impl BudgetCategory {
    /// Categories in the order they are listed in a plan
    pub const ALL: [BudgetCategory; 5] = [
        BudgetCategory::Lodging,
        BudgetCategory::Meals,
        BudgetCategory::Transport,
        BudgetCategory::Admissions,
        BudgetCategory::Leisure,
    ];

    /// Share of the total budget, in whole percent
    #[must_use]
    pub fn percent(self) -> u32 {
        match self {
            BudgetCategory::Lodging => 30,
            BudgetCategory::Meals => 25,
            BudgetCategory::Transport => 20,
            BudgetCategory::Admissions => 15,
            BudgetCategory::Leisure => 10,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BudgetCategory::Lodging => "🏨 住宿费用",
            BudgetCategory::Meals => "🍽️ 餐饮费用",
            BudgetCategory::Transport => "🚄 交通费用",
            BudgetCategory::Admissions => "🎫 景点门票",
            BudgetCategory::Leisure => "🛍️ 购物娱乐",
        }
    }
}

/// One line of the breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetLine {
    pub category: BudgetCategory,
    /// `floor(budget * share)`
    pub amount: i64,
}

impl Display for BudgetLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: {}元 ({}%)",
            self.category.label(),
            self.amount,
            self.category.percent()
        )
    }
}

/// Budget split across all categories
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetBreakdown {
    pub total: f64,
    pub lines: Vec<BudgetLine>,
}

impl BudgetBreakdown {
    #[must_use]
    pub fn new(total: f64) -> Self {
        let lines = BudgetCategory::ALL
            .iter()
            .map(|&category| BudgetLine {
                category,
                amount: share_of(total, category.percent()),
            })
            .collect();
        Self { total, lines }
    }

    #[must_use]
    pub fn amount(&self, category: BudgetCategory) -> Option<i64> {
        self.lines
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.amount)
    }
}

// Integer percent keeps whole-yuan budgets exact: `total * percent` is exact
// and a correctly rounded division cannot cross an integer boundary.
fn share_of(total: f64, percent: u32) -> i64 {
    (total * f64::from(percent) / 100.0).floor() as i64
}

impl Display for BudgetBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_shares_sum_to_whole_budget() {
        let total: u32 = BudgetCategory::ALL.iter().map(|c| c.percent()).sum();
        assert_eq!(total, 100);
    }

    #[rstest]
    #[case(3000.0, [900, 750, 600, 450, 300])]
    #[case(0.0, [0, 0, 0, 0, 0])]
    #[case(500.0, [150, 125, 100, 75, 50])]
    #[case(3001.0, [900, 750, 600, 450, 300])]
    #[case(3006.0, [901, 751, 601, 450, 300])]
    #[case(99.0, [29, 24, 19, 14, 9])]
    #[case(1234.5, [370, 308, 246, 185, 123])]
    fn test_breakdown_amounts_are_floored(#[case] budget: f64, #[case] expected: [i64; 5]) {
        let breakdown = BudgetBreakdown::new(budget);
        let amounts: Vec<i64> = breakdown.lines.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, expected);
    }

    #[test]
    fn test_breakdown_lookup_and_render() {
        let breakdown = BudgetBreakdown::new(3000.0);
        assert_eq!(breakdown.amount(BudgetCategory::Meals), Some(750));

        let text = breakdown.to_string();
        assert!(text.contains("- 🏨 住宿费用: 900元 (30%)"));
        assert!(text.contains("- 🛍️ 购物娱乐: 300元 (10%)"));
        assert_eq!(text.lines().count(), 5);
    }

    proptest! {
        #[test]
        fn whole_yuan_amounts_are_exact_floors(budget in 0u32..1_000_000_000) {
            let breakdown = BudgetBreakdown::new(f64::from(budget));
            for line in &breakdown.lines {
                let expected = i64::from(budget) * i64::from(line.category.percent()) / 100;
                prop_assert_eq!(line.amount, expected);
            }
        }

        #[test]
        fn fractional_amounts_stay_within_one_yuan(budget in 0.0f64..1e9) {
            let breakdown = BudgetBreakdown::new(budget);
            for line in &breakdown.lines {
                let share = budget * f64::from(line.category.percent()) / 100.0;
                let amount = line.amount as f64;
                prop_assert!(amount <= share + 1e-6);
                prop_assert!(share < amount + 1.0 + 1e-6);
            }
        }
    }
}
