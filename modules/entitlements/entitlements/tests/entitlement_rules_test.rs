//! Rule-table properties checked over every tier, feature and resource kind.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use entitlements::domain::features::{has_feature_access, required_tier_for};
use entitlements::domain::usage_limits::{can_add_more, limit_for};
use entitlements::{Feature, ModuleConfig, ModuleRegistry, ResourceKind, Tier, UsageLimit};

fn module(key: &str, deps: &[&str]) -> ModuleConfig {
    ModuleConfig::new(key, key, format!("/{key}")).with_dependencies(deps.iter().copied())
}

#[test]
fn caps_never_shrink_with_a_higher_tier() {
    for (i, lower) in Tier::ALL.iter().enumerate() {
        for higher in &Tier::ALL[i + 1..] {
            for kind in ResourceKind::ALL {
                let lo = limit_for(*lower, kind.as_str());
                let hi = limit_for(*higher, kind.as_str());
                assert!(hi >= lo, "{kind}: {higher}={hi} < {lower}={lo}");
            }
        }
    }
}

#[test]
fn required_tier_is_the_true_minimum() {
    for feature in Feature::ALL {
        let key = feature.as_str();
        let required = required_tier_for(key);

        assert!(
            has_feature_access(required, key),
            "{key} not granted at its required tier {required}"
        );
        if let Some(below) = required.previous() {
            assert!(
                !has_feature_access(below, key),
                "{key} already granted at {below}, below {required}"
            );
        }
    }
}

#[test]
fn unknown_keys_fail_closed_for_every_tier() {
    for tier in Tier::ALL {
        assert!(!has_feature_access(tier, "nonexistent_feature"));
        assert_eq!(limit_for(tier, "nonexistent_kind"), UsageLimit::Capped(0));
    }
    assert_eq!(required_tier_for("nonexistent_feature"), Tier::Wealth);
}

#[test]
fn key_lookup_is_exact() {
    assert!(!has_feature_access(Tier::Wealth, "AI_Categorization"));
    assert!(!has_feature_access(Tier::Wealth, " tax_reports"));
    assert_eq!(limit_for(Tier::Wealth, "Expenses"), UsageLimit::NONE);
}

#[test]
fn can_add_more_matches_strict_less_than() {
    for tier in Tier::ALL {
        for kind in ResourceKind::ALL {
            let limit = limit_for(tier, kind.as_str());
            for count in [0, 1, 2, 9, 10, 11, 29, 30, 31, 1_000_000] {
                let expected = match limit {
                    UsageLimit::Capped(max) => count < max,
                    UsageLimit::Unbounded => true,
                };
                assert_eq!(
                    can_add_more(tier, kind.as_str(), count),
                    expected,
                    "{tier}/{kind} at {count}"
                );
            }
        }
    }
}

#[test]
fn ai_categorization_scenario() {
    assert!(!has_feature_access(Tier::Starter, "ai_categorization"));
    assert_eq!(required_tier_for("ai_categorization"), Tier::Growth);
    assert!(has_feature_access(Tier::Growth, "ai_categorization"));
}

#[test]
fn expenses_scenario() {
    assert!(!can_add_more(Tier::Starter, "expenses", 10));
    assert!(can_add_more(Tier::Wealth, "expenses", 1_000_000));
}

#[test]
fn tier_parsing_at_the_session_boundary() {
    assert_eq!(Tier::parse(" Growth ").unwrap(), Tier::Growth);
    assert!(Tier::parse("platinum").is_err());
    assert_eq!(Tier::normalize("platinum"), Tier::Starter);
    assert!(Tier::Starter < Tier::Growth && Tier::Growth < Tier::Wealth);
}

#[test]
fn registry_round_trip_and_unknown_access() {
    let mut registry = ModuleRegistry::new();
    let cfg = ModuleConfig::new("income", "Income", "/income").open_from(Tier::Growth);

    registry.register(cfg.clone());
    assert_eq!(registry.get("income"), Some(&cfg));

    assert_eq!(registry.unregister("income"), Some(cfg));
    assert_eq!(registry.get("income"), None);

    assert_eq!(registry.unregister("income"), None);
    assert!(registry.is_empty());

    for tier in Tier::ALL {
        assert!(!registry.has_access("income", tier));
    }
}

#[test]
fn unregistering_an_absent_key_keeps_the_rest() {
    let mut registry = ModuleRegistry::new();
    registry.register(module("income", &[]));
    registry.register(module("budgets", &["income"]));

    assert_eq!(registry.unregister("expenses"), None);
    assert_eq!(registry.len(), 2);
    assert!(registry.get("income").is_some());
    assert!(registry.get("budgets").is_some());
    assert!(registry.check_dependencies("budgets"));
}

#[test]
fn one_hop_dependency_check_semantics() {
    let mut registry = ModuleRegistry::new();
    registry.register(module("solo", &[]));
    registry.register(module("a", &["b"]));
    registry.register(module("b", &["a"]));
    registry.register(module("orphan", &["gone"]));
    registry.register(module("off", &[]).enabled(false));
    registry.register(module("needs_off", &["off"]));

    assert!(registry.check_dependencies("solo"));
    assert!(!registry.check_dependencies("orphan"));
    assert!(!registry.check_dependencies("needs_off"));

    // Mutual pair passes the shallow check; the transitive check catches it.
    assert!(registry.check_dependencies("a"));
    assert!(registry.check_dependencies("b"));
    let err = registry.check_dependencies_transitive("a").unwrap_err();
    assert_eq!(err.to_string(), "Cyclic module dependency: a -> b -> a");
}
