//! Built-in product module catalog.
//!
//! Each dashboard area declares its static configuration here; the service
//! registers them at startup before any configured overrides.

use entitlements_sdk::{Feature, ModuleConfig, Tier};

#[must_use]
pub fn builtin_modules() -> Vec<ModuleConfig> {
    vec![
        ModuleConfig::new("dashboard", "Dashboard", "/dashboard")
            .with_description("Monthly overview of income, spending and goals")
            .with_icon("layout-dashboard")
            .with_features(&[Feature::BasicTracking]),
        ModuleConfig::new("income", "Income", "/income")
            .with_description("Track salary and other income sources")
            .with_icon("wallet")
            .with_features(&[Feature::BasicTracking]),
        ModuleConfig::new("expenses", "Expenses", "/expenses")
            .with_description("Record and categorize spending")
            .with_icon("receipt")
            .with_features(&[Feature::BasicTracking]),
        ModuleConfig::new("budgets", "Budgets", "/budgets")
            .with_description("Monthly spending limits per category")
            .with_icon("piggy-bank")
            .with_features(&[Feature::BasicTracking])
            .with_dependencies(["expenses"]),
        ModuleConfig::new("goals", "Savings Goals", "/goals")
            .with_description("Save towards targets with deadlines")
            .with_icon("target")
            .with_features(&[Feature::BasicTracking]),
        ModuleConfig::new("insights", "AI Insights", "/insights")
            .with_description("Automatic categorization and spending patterns")
            .with_icon("sparkles")
            .open_from(Tier::Growth)
            .with_features(&[Feature::AiCategorization])
            .with_dependencies(["expenses"]),
        ModuleConfig::new("investments", "Investments", "/investments")
            .with_description("Portfolio and net worth tracking")
            .with_icon("trending-up")
            .open_from(Tier::Wealth)
            .with_features(&[Feature::InvestmentTracking]),
        ModuleConfig::new("reports", "Tax Reports", "/reports")
            .with_description("Yearly tax summaries and exports")
            .with_icon("file-text")
            .open_from(Tier::Wealth)
            .with_features(&[Feature::TaxReports, Feature::CsvExport])
            .with_dependencies(["income", "expenses"]),
    ]
}
