//! Navigation and widget visibility map.

use entitlements_sdk::{EntitlementContext, Feature, NavItem, Widget};

use super::resolver::EntitlementResolver;

/// Feature a navigation entry requires to be shown.
#[must_use]
pub const fn nav_requirement(item: NavItem) -> Feature {
    match item {
        NavItem::Dashboard
        | NavItem::Income
        | NavItem::Expenses
        | NavItem::Budgets
        | NavItem::Goals
        | NavItem::Settings => Feature::BasicTracking,
        NavItem::Insights => Feature::AiCategorization,
        NavItem::Investments => Feature::InvestmentTracking,
        NavItem::Reports => Feature::TaxReports,
    }
}

/// Feature a dashboard widget requires to be shown.
#[must_use]
pub const fn widget_requirement(widget: Widget) -> Feature {
    match widget {
        Widget::SpendingChart => Feature::BasicTracking,
        Widget::CategoryBreakdown => Feature::AiCategorization,
        Widget::BudgetProgress => Feature::BudgetAlerts,
        Widget::RecurringBills => Feature::RecurringDetection,
        Widget::NetWorth => Feature::InvestmentTracking,
        Widget::TaxSummary => Feature::TaxReports,
    }
}

#[must_use]
pub fn visible_nav_items(resolver: &EntitlementResolver, ctx: EntitlementContext) -> Vec<NavItem> {
    NavItem::ALL
        .iter()
        .copied()
        .filter(|item| resolver.allows(ctx, nav_requirement(*item)))
        .collect()
}

#[must_use]
pub fn visible_widgets(resolver: &EntitlementResolver, ctx: EntitlementContext) -> Vec<Widget> {
    Widget::ALL
        .iter()
        .copied()
        .filter(|widget| resolver.allows(ctx, widget_requirement(*widget)))
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use entitlements_sdk::{Role, Tier};

    use super::*;

    #[test]
    fn test_starter_sees_basic_navigation_only() {
        let resolver = EntitlementResolver::default();
        let items = visible_nav_items(&resolver, EntitlementContext::member(Tier::Starter));
        assert_eq!(
            items,
            vec![
                NavItem::Dashboard,
                NavItem::Income,
                NavItem::Expenses,
                NavItem::Budgets,
                NavItem::Goals,
                NavItem::Settings,
            ]
        );
    }

    #[test]
    fn test_growth_unlocks_insights_but_not_reports() {
        let resolver = EntitlementResolver::default();
        let items = visible_nav_items(&resolver, EntitlementContext::member(Tier::Growth));
        assert!(items.contains(&NavItem::Insights));
        assert!(!items.contains(&NavItem::Investments));
        assert!(!items.contains(&NavItem::Reports));
    }

    #[test]
    fn test_wealth_and_admin_see_everything() {
        let resolver = EntitlementResolver::default();
        let wealth = EntitlementContext::member(Tier::Wealth);
        let admin = EntitlementContext::new(Tier::Starter, Role::Admin);

        assert_eq!(visible_nav_items(&resolver, wealth), NavItem::ALL.to_vec());
        assert_eq!(visible_widgets(&resolver, wealth), Widget::ALL.to_vec());
        assert_eq!(visible_nav_items(&resolver, admin), NavItem::ALL.to_vec());
    }

    #[test]
    fn test_widgets_per_tier() {
        let resolver = EntitlementResolver::default();
        assert_eq!(
            visible_widgets(&resolver, EntitlementContext::member(Tier::Starter)),
            vec![Widget::SpendingChart]
        );
        assert_eq!(
            visible_widgets(&resolver, EntitlementContext::member(Tier::Growth)),
            vec![
                Widget::SpendingChart,
                Widget::CategoryBreakdown,
                Widget::BudgetProgress,
                Widget::RecurringBills,
            ]
        );
    }
}
