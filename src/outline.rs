//! Static outline of the calculator model's public symbols.
//!
//! Code-intelligence tooling resolves hover text, definitions and override
//! chains against this model. The outline lists the public types, traits and
//! free functions, the methods each one declares, which traits each type
//! implements, and the base method each override replaces.
//!
//! The variants wrap a `Calculator` and forward the arithmetic they do not
//! change to it. Those forwarding methods are listed once, under
//! `Calculator`; a variant lists a base method only when it overrides it.

use serde::Serialize;

use crate::types::{SymbolId, SymbolKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineSymbol {
    pub id: SymbolId,
    pub name: &'static str,
    pub kind: SymbolKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<&'static str>,
    /// Qualified name of the method this one replaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<&'static str>,
    /// Traits a type implements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<&'static str>,
    pub summary: &'static str,
}

impl OutlineSymbol {
    /// `Container::name`, or just `name` for top-level symbols.
    pub fn qualified_name(&self) -> String {
        match self.container {
            Some(container) => format!("{container}::{}", self.name),
            None => self.name.to_string(),
        }
    }
}

type Entry = (
    &'static str,
    SymbolKind,
    Option<&'static str>,
    Option<&'static str>,
    &'static str,
);

const ENTRIES: &[Entry] = &[
    ("Arithmetic", SymbolKind::Trait, None, None, "Capability set shared by every calculator variant."),
    ("add", SymbolKind::Method, Some("Arithmetic"), None, "Add a number to the current value."),
    ("subtract", SymbolKind::Method, Some("Arithmetic"), None, "Subtract a number from the current value."),
    ("multiply", SymbolKind::Method, Some("Arithmetic"), None, "Multiply the current value by a number."),
    ("divide", SymbolKind::Method, Some("Arithmetic"), None, "Divide the current value by a number."),
    ("value", SymbolKind::Method, Some("Arithmetic"), None, "Get the current value."),
    ("reset", SymbolKind::Method, Some("Arithmetic"), None, "Reset the accumulator."),
    ("Computable", SymbolKind::Trait, None, None, "Something that yields a single computed result and can be reset."),
    ("compute", SymbolKind::Method, Some("Computable"), None, "Produce the computed result."),
    ("reset", SymbolKind::Method, Some("Computable"), None, "Return to the initial state."),
    ("SqrtPolicy", SymbolKind::Enum, None, None, "What the square root does with a negative value."),
    ("Calculator", SymbolKind::Struct, None, None, "A simple calculator holding one integer accumulator."),
    ("new", SymbolKind::Method, Some("Calculator"), None, "Create a calculator seeded with an initial value."),
    ("add", SymbolKind::Method, Some("Calculator"), None, "Add a number to the current value."),
    ("subtract", SymbolKind::Method, Some("Calculator"), None, "Subtract a number from the current value."),
    ("multiply", SymbolKind::Method, Some("Calculator"), None, "Multiply the current value by a number."),
    ("divide", SymbolKind::Method, Some("Calculator"), None, "Divide the current value by a number."),
    ("value", SymbolKind::Method, Some("Calculator"), None, "Get the current value."),
    ("reset", SymbolKind::Method, Some("Calculator"), None, "Reset the calculator to zero."),
    ("ScientificCalculator", SymbolKind::Struct, None, None, "A calculator with memory functionality."),
    ("new", SymbolKind::Method, Some("ScientificCalculator"), None, "Create a calculator with empty memory."),
    ("with_sqrt_policy", SymbolKind::Method, Some("ScientificCalculator"), None, "Choose the negative square root policy."),
    ("store_memory", SymbolKind::Method, Some("ScientificCalculator"), None, "Store current value in memory."),
    ("recall_memory", SymbolKind::Method, Some("ScientificCalculator"), None, "Recall value from memory."),
    ("clear_memory", SymbolKind::Method, Some("ScientificCalculator"), None, "Clear the memory."),
    ("reset", SymbolKind::Method, Some("ScientificCalculator"), Some("Calculator::reset"), "Reset calculator and memory."),
    ("compute_square_root", SymbolKind::Method, Some("ScientificCalculator"), None, "Compute square root of current value."),
    ("AdvancedCalculator", SymbolKind::Struct, None, None, "A calculator with operation history."),
    ("new", SymbolKind::Method, Some("AdvancedCalculator"), None, "Create a calculator with an empty history."),
    ("add", SymbolKind::Method, Some("AdvancedCalculator"), Some("Calculator::add"), "Add and log the operation."),
    ("subtract", SymbolKind::Method, Some("AdvancedCalculator"), Some("Calculator::subtract"), "Subtract and log the operation."),
    ("history", SymbolKind::Method, Some("AdvancedCalculator"), None, "Get the operation history."),
    ("calculate_sum", SymbolKind::Function, None, None, "Calculate the sum of a list of numbers."),
    ("calculate_product", SymbolKind::Function, None, None, "Calculate the product of a list of numbers."),
    ("run_demo", SymbolKind::Function, None, None, "Demonstrate calculator usage."),
    ("self_check", SymbolKind::Function, None, None, "Run basic tests."),
];

const IMPLEMENTS: &[(&str, &str)] = &[
    ("Calculator", "Arithmetic"),
    ("ScientificCalculator", "Arithmetic"),
    ("ScientificCalculator", "Computable"),
    ("AdvancedCalculator", "Arithmetic"),
];

fn traits_of(type_name: &str) -> Vec<&'static str> {
    IMPLEMENTS
        .iter()
        .filter(|(implementor, _)| *implementor == type_name)
        .map(|&(_, trait_name)| trait_name)
        .collect()
}

/// All public symbols of the model, in declaration order.
pub fn model_outline() -> Vec<OutlineSymbol> {
    ENTRIES
        .iter()
        .zip(1u32..)
        .filter_map(|(&(name, kind, container, overrides, summary), id)| {
            let implements = match (kind, container) {
                (SymbolKind::Struct, None) => traits_of(name),
                _ => Vec::new(),
            };
            Some(OutlineSymbol {
                id: SymbolId::new(id)?,
                name,
                kind,
                container,
                overrides,
                implements,
                summary,
            })
        })
        .collect()
}

/// Look up a symbol by qualified name, e.g. `AdvancedCalculator::add`.
pub fn find_symbol(qualified_name: &str) -> Option<OutlineSymbol> {
    model_outline()
        .into_iter()
        .find(|symbol| symbol.qualified_name() == qualified_name)
}

/// Types that implement `trait_name`, in declaration order.
pub fn implementors_of(trait_name: &str) -> Vec<OutlineSymbol> {
    model_outline()
        .into_iter()
        .filter(|symbol| symbol.implements.contains(&trait_name))
        .collect()
}

/// Symbols that override `qualified_name`.
pub fn overriders_of(qualified_name: &str) -> Vec<OutlineSymbol> {
    model_outline()
        .into_iter()
        .filter(|symbol| symbol.overrides == Some(qualified_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_qualified_names_are_unique() {
        let outline = model_outline();
        let names: HashSet<String> = outline.iter().map(|s| s.qualified_name()).collect();
        assert_eq!(names.len(), outline.len());
    }

    #[test]
    fn test_override_targets_exist() {
        for symbol in model_outline() {
            if let Some(target) = symbol.overrides {
                let base = find_symbol(target)
                    .unwrap_or_else(|| panic!("{} overrides missing {target}", symbol.qualified_name()));
                assert_eq!(base.kind, SymbolKind::Method);
                assert_eq!(base.name, symbol.name);
            }
        }
    }

    #[test]
    fn test_overriders() {
        let names: Vec<String> = overriders_of("Calculator::add")
            .iter()
            .map(|s| s.qualified_name())
            .collect();
        assert_eq!(names, vec!["AdvancedCalculator::add"]);
        assert_eq!(overriders_of("Calculator::reset").len(), 1);
        assert!(overriders_of("Calculator::multiply").is_empty());
    }

    #[test]
    fn test_containers_are_types_or_traits() {
        for symbol in model_outline() {
            if let Some(container) = symbol.container {
                let kind = find_symbol(container).map(|s| s.kind);
                assert!(
                    matches!(kind, Some(SymbolKind::Struct | SymbolKind::Trait)),
                    "{} has container kind {kind:?}",
                    symbol.qualified_name()
                );
            }
        }
    }

    #[test]
    fn test_implementations() {
        let names = |trait_name: &str| -> Vec<&'static str> {
            implementors_of(trait_name).iter().map(|s| s.name).collect()
        };
        assert_eq!(
            names("Arithmetic"),
            vec!["Calculator", "ScientificCalculator", "AdvancedCalculator"]
        );
        assert_eq!(names("Computable"), vec!["ScientificCalculator"]);

        for &(implementor, trait_name) in IMPLEMENTS {
            assert_eq!(find_symbol(implementor).map(|s| s.kind), Some(SymbolKind::Struct));
            assert_eq!(find_symbol(trait_name).map(|s| s.kind), Some(SymbolKind::Trait));
        }
    }

    #[test]
    fn test_public_surface_is_listed() {
        for qualified in [
            "SqrtPolicy",
            "ScientificCalculator::with_sqrt_policy",
            "Computable::compute",
            "Computable::reset",
            "Arithmetic::divide",
        ] {
            assert!(find_symbol(qualified).is_some(), "{qualified} missing");
        }
        assert_eq!(find_symbol("SqrtPolicy").map(|s| s.kind), Some(SymbolKind::Enum));
    }

    #[test]
    fn test_ids_are_sequential() {
        let ids: Vec<u32> = model_outline().iter().map(|s| s.id.value()).collect();
        let expected: Vec<u32> = (1..=ENTRIES.len() as u32).collect();
        assert_eq!(ids, expected);
    }
}
