//! # Plugin Load Order Flow
//!
//! Drives the sorter with the rules a master-file game declares for its
//! plugins:
//!
//! 1. **Base game files**: fixed chain, the first one declares `First`
//! 2. **Masters**: every plugin loads after the masters it lists
//! 3. **File kinds**: `.esl` after every `.esm`, `.esp` after every non-`.esp`
//! 4. **Missing masters**: rejected up front with reference validation

#[cfg(test)]
mod tests {
    use lo_sorter::domain::invariants::{invariant_after_law, invariant_before_law};
    use lo_sorter::{Rule, SortApi, SortError, SortableEntry, Sorter, SorterConfig};
    use std::cmp::Ordering;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const BASE_GAME: [&str; 5] = [
        "Skyrim.esm",
        "Update.esm",
        "Dawnguard.esm",
        "HearthFires.esm",
        "Dragonborn.esm",
    ];

    #[derive(Clone, Debug)]
    struct Plugin {
        name: String,
        masters: Vec<String>,
    }

    fn plugin(name: &str, masters: &[&str]) -> Plugin {
        Plugin {
            name: name.to_string(),
            masters: masters.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn extension(name: &str) -> String {
        name.rsplit('.').next().unwrap_or_default().to_lowercase()
    }

    /// Rules for `target`, given every plugin taking part.
    fn plugin_rules(all: &[Plugin], target: &Plugin) -> Vec<Rule<String>> {
        let mut rules = Vec::new();

        match BASE_GAME.iter().position(|b| *b == target.name) {
            Some(0) => rules.push(Rule::First),
            Some(position) => {
                rules.extend(BASE_GAME[..position].iter().map(|b| Rule::After(b.to_string())));
                rules.extend(
                    all.iter()
                        .filter(|p| !BASE_GAME.contains(&p.name.as_str()))
                        .map(|p| Rule::Before(p.name.clone())),
                );
            }
            None => {
                rules.extend(target.masters.iter().cloned().map(Rule::After));

                match extension(&target.name).as_str() {
                    "esl" => rules.extend(
                        all.iter()
                            .filter(|p| extension(&p.name) == "esm")
                            .map(|p| Rule::After(p.name.clone())),
                    ),
                    "esp" => rules.extend(
                        all.iter()
                            .filter(|p| extension(&p.name) != "esp")
                            .map(|p| Rule::After(p.name.clone())),
                    ),
                    _ => {}
                }
            }
        }

        rules
    }

    fn case_insensitive(a: &String, b: &String) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }

    fn entries(plugins: &[Plugin]) -> Vec<SortableEntry<String>> {
        plugins
            .iter()
            .map(|p| SortableEntry::new(p.name.clone()).with_rules(plugin_rules(plugins, p)))
            .collect()
    }

    fn sort_plugins(sorter: &Sorter, plugins: &[Plugin]) -> Result<Vec<String>, SortError<String>> {
        let sorted = sorter.sort(
            entries(plugins),
            |e| e.id.clone(),
            |e| e.rules.clone(),
            Some(&case_insensitive),
        )?;
        Ok(sorted.into_iter().map(|e| e.id).collect())
    }

    fn load_order() -> Vec<Plugin> {
        vec![
            plugin("Dragonborn.esm", &[]),
            plugin("MyMod.esp", &["Skyrim.esm"]),
            plugin("Skyrim.esm", &[]),
            plugin("HearthFires.esm", &[]),
            plugin("Update.esm", &[]),
            plugin("Lib.esm", &["Skyrim.esm"]),
            plugin("Light.esl", &[]),
            plugin("Other.esp", &["Lib.esm"]),
            plugin("Dawnguard.esm", &[]),
        ]
    }

    // =============================================================================
    // INTEGRATION TESTS: PLUGIN RULES → SORTER
    // =============================================================================

    #[test]
    fn test_plugin_load_order() {
        lo_telemetry::init_test_logging();

        let order = sort_plugins(&Sorter::new(), &load_order()).unwrap();

        assert_eq!(
            order,
            vec![
                "Skyrim.esm",
                "Update.esm",
                "Dawnguard.esm",
                "HearthFires.esm",
                "Dragonborn.esm",
                "Lib.esm",
                "Light.esl",
                "MyMod.esp",
                "Other.esp",
            ]
        );
    }

    #[test]
    fn test_plugin_rules_hold() {
        let plugins = load_order();
        let order = sort_plugins(&Sorter::new(), &plugins).unwrap();
        let entries = entries(&plugins);

        assert!(invariant_after_law(&entries, &order));
        assert!(invariant_before_law(&entries, &order));
    }

    #[test]
    fn test_plugin_order_independent_of_input_order() {
        let mut plugins = load_order();
        let expected = sort_plugins(&Sorter::new(), &plugins).unwrap();

        plugins.reverse();
        assert_eq!(sort_plugins(&Sorter::new(), &plugins).unwrap(), expected);
    }

    #[test]
    fn test_missing_master_rejected_with_validation() {
        let sorter = Sorter::with_config(SorterConfig {
            validate_references: true,
            ..Default::default()
        });
        let mut plugins = load_order();
        plugins.push(plugin("Broken.esp", &["Missing.esm"]));

        let err = sort_plugins(&sorter, &plugins).unwrap_err();
        match err {
            SortError::UnknownDependency { item, missing } => {
                assert_eq!(item, "Broken.esp");
                assert_eq!(missing, "Missing.esm");
            }
            other => panic!("expected unknown dependency, got {other}"),
        }
    }

    #[test]
    fn test_missing_master_reported_as_cycle_without_validation() {
        let mut plugins = load_order();
        plugins.push(plugin("Broken.esp", &["Missing.esm"]));

        let err = sort_plugins(&Sorter::new(), &plugins).unwrap_err();
        assert_eq!(err.unplaced_ids(), vec![&"Broken.esp".to_string()]);
    }

    #[test]
    fn test_circular_masters_is_cycle() {
        let mut plugins = load_order();
        plugins.push(plugin("A.esp", &["B.esp"]));
        plugins.push(plugin("B.esp", &["A.esp"]));

        let err = sort_plugins(&Sorter::new(), &plugins).unwrap_err();
        let mut stuck: Vec<&String> = err.unplaced_ids();
        stuck.sort();
        assert_eq!(stuck, vec!["A.esp", "B.esp"]);
    }
}
