//! Rule-based financial insights
//!
//! A small pluggable engine: each [`InsightRule`] looks at the analysis
//! context and optionally produces one [`FinancialInsight`]. Rules run in
//! registration order and never suppress each other, so the output order
//! is the rule order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::budget::{budget_comparisons, BudgetStatus};
use super::categories::category_expenses;
use super::monthly::monthly_expenses;
use super::totals::{current_month_expenses, current_month_income};
use super::AnalysisContext;

/// Classification tag of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A short textual observation about the user's finances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    /// Magnitude the insight is about, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl FinancialInsight {
    pub fn new(kind: InsightKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            value: None,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(InsightKind::Warning, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(InsightKind::Success, title, message)
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// A single insight heuristic
pub trait InsightRule {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Evaluate the rule, producing at most one insight
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<FinancialInsight>;
}

/// Current-month income against current-month expenses
pub struct MonthlyBalanceRule;

impl InsightRule for MonthlyBalanceRule {
    fn name(&self) -> &'static str {
        "monthly_balance"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<FinancialInsight> {
        let balance = current_month_income(ctx.transactions, ctx.today)
            - current_month_expenses(ctx.transactions, ctx.today);

        if balance < 0.0 {
            Some(
                FinancialInsight::warning(
                    "Monthly Deficit",
                    "You're spending more than you earn this month",
                )
                .with_value(balance.abs()),
            )
        } else if balance > 0.0 {
            Some(
                FinancialInsight::success(
                    "Monthly Surplus",
                    "Great job! You're saving money this month",
                )
                .with_value(balance),
            )
        } else {
            None
        }
    }
}

/// Flags a single category taking a large share of all-time spending
pub struct CategoryConcentrationRule {
    /// Share (percent) the top category must exceed
    pub threshold: f64,
}

impl Default for CategoryConcentrationRule {
    fn default() -> Self {
        Self { threshold: 40.0 }
    }
}

impl InsightRule for CategoryConcentrationRule {
    fn name(&self) -> &'static str {
        "category_concentration"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<FinancialInsight> {
        let rows = category_expenses(ctx.transactions, ctx.categories);
        let top = rows.first()?;

        let total: f64 = rows.iter().map(|r| r.amount).sum();
        if total <= 0.0 {
            return None;
        }

        let share = top.share_of(total);
        if share <= self.threshold {
            return None;
        }

        Some(
            FinancialInsight::warning(
                "High Category Spending",
                format!("{} accounts for {:.1}% of your expenses", top.category, share),
            )
            .with_value(top.amount),
        )
    }
}

/// Counts budgets for the current month that have been exceeded
pub struct BudgetOverrunRule;

impl InsightRule for BudgetOverrunRule {
    fn name(&self) -> &'static str {
        "budget_overrun"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<FinancialInsight> {
        let over = budget_comparisons(
            ctx.transactions,
            ctx.categories,
            ctx.budgets,
            ctx.current_month(),
        )
        .into_iter()
        .filter(|c| c.status == BudgetStatus::Over)
        .count();

        if over == 0 {
            return None;
        }

        let noun = if over == 1 { "category" } else { "categories" };
        Some(FinancialInsight::warning(
            "Over Budget",
            format!("You're over budget in {} {}", over, noun),
        ))
    }
}

/// Compares the two most recent months of the monthly summary
pub struct SpendingTrendRule {
    /// Change (percent) either way that is worth reporting
    pub threshold: f64,
}

impl Default for SpendingTrendRule {
    fn default() -> Self {
        Self { threshold: 20.0 }
    }
}

impl InsightRule for SpendingTrendRule {
    fn name(&self) -> &'static str {
        "spending_trend"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<FinancialInsight> {
        let months = monthly_expenses(ctx.transactions);
        let [.., previous, last] = months.as_slice() else {
            return None;
        };

        if previous.amount <= 0.0 {
            tracing::debug!(month = %previous.period, "No spending in previous month, skipping trend");
            return None;
        }

        let change = last.amount - previous.amount;
        let change_pct = change / previous.amount * 100.0;

        if change_pct > self.threshold {
            Some(
                FinancialInsight::warning(
                    "Spending Increase",
                    format!("Your spending increased by {:.1}% from last month", change_pct),
                )
                .with_value(change),
            )
        } else if change_pct < -self.threshold {
            Some(
                FinancialInsight::success(
                    "Spending Decrease",
                    format!(
                        "Great! Your spending decreased by {:.1}% from last month",
                        change_pct.abs()
                    ),
                )
                .with_value(change.abs()),
            )
        } else {
            None
        }
    }
}

/// Runs the registered rules in order and collects what they produce
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(MonthlyBalanceRule));
        engine.register(Box::new(CategoryConcentrationRule::default()));
        engine.register(Box::new(BudgetOverrunRule));
        engine.register(Box::new(SpendingTrendRule::default()));

        engine
    }

    /// Create an engine with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it runs after every rule registered before it
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn run(&self, ctx: &AnalysisContext<'_>) -> Vec<FinancialInsight> {
        let mut insights = Vec::new();

        for rule in &self.rules {
            match rule.evaluate(ctx) {
                Some(insight) => {
                    tracing::debug!(rule = rule.name(), title = %insight.title, "Insight produced");
                    insights.push(insight);
                }
                None => tracing::debug!(rule = rule.name(), "No insight"),
            }
        }

        insights
    }
}

/// Evaluate the built-in rules against `ctx`
pub fn financial_insights(ctx: &AnalysisContext<'_>) -> Vec<FinancialInsight> {
    InsightEngine::new().run(ctx)
}
