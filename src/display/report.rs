//! Report formatting for terminal output
//!
//! Renders the derived views from the analytics engine. Amounts arrive
//! unformatted; currency and date presentation happen here.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analytics::{
    BudgetComparison, BudgetStatus, CategoryExpense, Dashboard, FinancialInsight, InsightKind,
    MonthlyExpense, Totals,
};
use crate::models::{Category, YearMonth};

use super::format::{format_bar, format_percentage, separator, truncate, DisplayOptions};
use super::transaction::format_transaction_table;

const BAR_WIDTH: usize = 30;
const WIDTH: usize = 64;

/// Spending per month as a bar listing, oldest first
pub fn format_monthly_expenses(months: &[MonthlyExpense], opts: &DisplayOptions) -> String {
    let mut output = String::new();
    output.push_str("Monthly Expenses\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if months.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    let max = months.iter().map(|m| m.amount).fold(0.0, f64::max);
    for m in months {
        output.push_str(&format!(
            "{:<9} {} {:>12} ({})\n",
            m.month,
            format_bar(m.amount, max, BAR_WIDTH),
            opts.money(m.amount),
            m.count
        ));
    }

    output
}

/// Spending per category as a bar listing, largest first
pub fn format_category_expenses(rows: &[CategoryExpense], opts: &DisplayOptions) -> String {
    let mut output = String::new();
    output.push_str("Expenses by Category\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    let total: f64 = rows.iter().map(|r| r.amount).sum();
    let max = rows.first().map(|r| r.amount).unwrap_or(0.0);

    for row in rows {
        output.push_str(&format!(
            "{:<18} {} {:>12} {:>6}\n",
            truncate(&row.category, 18),
            format_bar(row.amount, max, 20),
            opts.money(row.amount),
            format_percentage(row.share_of(total))
        ));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<39} {:>12}\n", "Total", opts.money(total)));

    output
}

/// The four scalar totals plus the derived balances
pub fn format_totals(totals: &Totals, month: YearMonth, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<24}{:>16}\n", "", month.label()));
    output.push_str(&format!(
        "{:<24}{:>16}\n",
        "Income",
        opts.money(totals.current_month_income)
    ));
    output.push_str(&format!(
        "{:<24}{:>16}\n",
        "Expenses",
        opts.money(totals.current_month_expenses)
    ));
    output.push_str(&format!(
        "{:<24}{:>16}\n",
        "Balance",
        opts.money(totals.current_month_balance())
    ));
    output.push('\n');
    output.push_str(&format!("{:<24}{:>16}\n", "", "All time"));
    output.push_str(&format!(
        "{:<24}{:>16}\n",
        "Income",
        opts.money(totals.total_income)
    ));
    output.push_str(&format!(
        "{:<24}{:>16}\n",
        "Expenses",
        opts.money(totals.total_expenses)
    ));
    output.push_str(&format!(
        "{:<24}{:>16}\n",
        "Balance",
        opts.money(totals.balance())
    ));

    output
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budgeted")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    actual: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    percentage: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn status_marker(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Under => "✓",
        BudgetStatus::OnTrack => "~",
        BudgetStatus::Over => "!",
    }
}

/// Budget versus actual as a table
pub fn format_budget_comparisons(
    rows: &[BudgetComparison],
    month: YearMonth,
    opts: &DisplayOptions,
) -> String {
    if rows.is_empty() {
        return format!("No budgets set for {}.\n", month.label());
    }

    let table_rows = rows.iter().map(|c| BudgetRow {
        category: c.category_name.clone(),
        budgeted: opts.money(c.budgeted),
        actual: opts.money(c.actual),
        remaining: opts.money(c.remaining()),
        percentage: format_percentage(c.percentage),
        status: format!("{} {}", status_marker(c.status), c.status),
    });

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    format!("Budgets for {}\n{}\n", month.label(), table)
}

fn insight_marker(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "⚠",
        InsightKind::Success => "✓",
        InsightKind::Info => "ℹ",
    }
}

/// Insights as a list, in the order the rules produced them
pub fn format_insights(insights: &[FinancialInsight], opts: &DisplayOptions) -> String {
    if insights.is_empty() {
        return "No insights right now.\n".to_string();
    }

    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!("{} {}\n", insight_marker(insight.kind), insight.title));
        output.push_str(&format!("  {}", insight.message));
        if let Some(value) = insight.value {
            output.push_str(&format!(" ({})", opts.money(value)));
        }
        output.push('\n');
    }

    output
}

/// Everything on one screen
pub fn format_dashboard(
    dashboard: &Dashboard,
    categories: &[Category],
    opts: &DisplayOptions,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Dashboard ({})\n", opts.date(dashboard.generated_for)));
    output.push_str(&"═".repeat(WIDTH));
    output.push_str("\n\n");

    output.push_str(&format_totals(&dashboard.totals, dashboard.current_month, opts));
    output.push('\n');

    output.push_str("Insights\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_insights(&dashboard.insights, opts));
    output.push('\n');

    output.push_str(&format_budget_comparisons(
        &dashboard.budget_comparisons,
        dashboard.current_month,
        opts,
    ));
    output.push('\n');

    output.push_str(&format_monthly_expenses(&dashboard.monthly_expenses, opts));
    output.push('\n');
    output.push_str(&format_category_expenses(&dashboard.category_expenses, opts));
    output.push('\n');

    output.push_str("Recent Transactions\n");
    output.push_str(&format_transaction_table(
        &dashboard.recent_transactions,
        categories,
        opts,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{budget_comparisons, category_expenses, monthly_expenses, AnalysisContext};
    use crate::models::{default_categories, Budget, Kind, Transaction};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(Kind::Expense, 900.0, date(2025, 3, 2), "1", "Groceries"),
            Transaction::new(Kind::Expense, 300.0, date(2025, 3, 3), "3", "Shoes"),
            Transaction::new(Kind::Expense, 800.0, date(2025, 2, 10), "2", "Car repair"),
            Transaction::new(Kind::Income, 1000.0, date(2025, 3, 1), "10", "Salary"),
        ]
    }

    #[test]
    fn test_monthly_listing() {
        let out = format_monthly_expenses(&monthly_expenses(&sample()), &DisplayOptions::default());
        let feb = out.find("Feb 2025").unwrap();
        let mar = out.find("Mar 2025").unwrap();
        assert!(feb < mar);
        assert!(out.contains("$1,200.00"));

        let empty = format_monthly_expenses(&[], &DisplayOptions::default());
        assert!(empty.contains("No expenses recorded."));
    }

    #[test]
    fn test_category_listing() {
        let rows = category_expenses(&sample(), &default_categories());
        let out = format_category_expenses(&rows, &DisplayOptions::default());

        assert!(out.contains("Food & Dining"));
        assert!(out.contains("45.0%"));
        assert!(out.contains("$2,000.00"));
    }

    #[test]
    fn test_totals_block() {
        let totals = Totals::compute(&sample(), date(2025, 3, 15));
        let out = format_totals(&totals, YearMonth::of(date(2025, 3, 15)), &DisplayOptions::default());

        assert!(out.contains("Mar 2025"));
        assert!(out.contains("-$200.00"));
        assert!(out.contains("-$1,000.00"));
    }

    #[test]
    fn test_budget_table() {
        let month = YearMonth::new(2025, 3).unwrap();
        let budgets = vec![Budget::new("3", 200.0, month)];
        let rows = budget_comparisons(&sample(), &default_categories(), &budgets, month);
        let out = format_budget_comparisons(&rows, month, &DisplayOptions::default());

        assert!(out.contains("Shopping"));
        assert!(out.contains("150.0%"));
        assert!(out.contains("Over"));

        let none = format_budget_comparisons(&[], month, &DisplayOptions::default());
        assert_eq!(none, "No budgets set for Mar 2025.\n");
    }

    #[test]
    fn test_insights_and_dashboard() {
        let transactions = sample();
        let categories = default_categories();
        let ctx = AnalysisContext::new(&transactions, &categories, &[], date(2025, 3, 15));
        let dashboard = Dashboard::build(&ctx, 5);
        let opts = DisplayOptions::default();

        let insights = format_insights(&dashboard.insights, &opts);
        assert!(insights.contains("Monthly Deficit"));
        assert!(insights.contains("($200.00)"));

        let out = format_dashboard(&dashboard, &categories, &opts);
        assert!(out.contains("Dashboard (2025-03-15)"));
        assert!(out.contains("Recent Transactions"));
        assert!(out.contains("Car repair"));

        assert_eq!(format_insights(&[], &opts), "No insights right now.\n");
    }
}
