//! Property-based tests for declared states and their instances.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated declaration lists.

use possible_states::{
    possible_states, Cases, ConfigurationError, StateDescriptor, TransitionError,
};
use proptest::prelude::*;
use serde_json::Value;
use std::collections::BTreeSet;

/// A declared state: name plus its fields.
#[derive(Clone, Debug)]
struct Declared {
    name: String,
    fields: Vec<String>,
}

impl Declared {
    fn declaration(&self) -> String {
        if self.fields.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, self.fields.join(", "))
        }
    }

    fn values(&self) -> Vec<Value> {
        (0..self.fields.len()).map(|i| Value::from(i as u64)).collect()
    }
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

prop_compose! {
    fn arbitrary_machine()(
        names in prop::collection::hash_set(identifier(), 1..6),
        fields in prop::collection::vec(prop::collection::vec(identifier(), 0..4), 6),
    ) -> Vec<Declared> {
        names
            .into_iter()
            .zip(fields)
            .enumerate()
            .map(|(i, (name, fields))| Declared {
                name,
                // the initial state never carries data
                fields: if i == 0 { Vec::new() } else { fields },
            })
            .collect()
    }
}

fn declarations(machine: &[Declared]) -> Vec<String> {
    machine.iter().map(Declared::declaration).collect()
}

proptest! {
    #[test]
    fn initial_state_is_first_declaration(machine in arbitrary_machine()) {
        let ui = possible_states(declarations(&machine)).unwrap();

        prop_assert_eq!(ui.current(), machine[0].name.as_str());
        prop_assert!(ui.data().is_none());
    }

    #[test]
    fn every_state_exposes_generated_operations(machine in arbitrary_machine()) {
        let ui = possible_states(declarations(&machine)).unwrap();

        for declared in &machine {
            let descriptor = ui.state(&declared.name).unwrap().descriptor();
            prop_assert!(ui.method(&descriptor.transition_method()).is_some());
            prop_assert!(ui.method(&descriptor.when_method()).is_some());
        }
    }

    #[test]
    fn transition_reaches_target(
        machine in arbitrary_machine(),
        pick in any::<prop::sample::Index>(),
    ) {
        let ui = possible_states(declarations(&machine)).unwrap();
        let target = pick.get(&machine);

        let next = ui.to_with(&target.name, target.values()).unwrap();

        prop_assert_eq!(next.current(), target.name.as_str());
        prop_assert_eq!(next.data().is_some(), !target.fields.is_empty());
        // the source instance is never touched
        prop_assert_eq!(ui.current(), machine[0].name.as_str());
    }

    #[test]
    fn payload_holds_declared_fields(
        machine in arbitrary_machine(),
        pick in any::<prop::sample::Index>(),
    ) {
        let ui = possible_states(declarations(&machine)).unwrap();
        let target = pick.get(&machine);

        let next = ui.to_with(&target.name, target.values()).unwrap();

        let declared: BTreeSet<&str> = target.fields.iter().map(String::as_str).collect();
        let held: BTreeSet<&str> = next
            .data()
            .map(|payload| payload.fields().collect())
            .unwrap_or_default();

        // no extras, no omissions
        prop_assert_eq!(held, declared);
    }

    #[test]
    fn arity_mismatch_fails(
        machine in arbitrary_machine(),
        pick in any::<prop::sample::Index>(),
        extra in 1..3usize,
    ) {
        let ui = possible_states(declarations(&machine)).unwrap();
        let target = pick.get(&machine);
        prop_assume!(!target.fields.is_empty());

        let mut values = target.values();
        values.extend((0..extra).map(|_| Value::Null));

        let result = ui.to_with(&target.name, values);
        let is_arity_error = matches!(result, Err(TransitionError::Arity { .. }));
        prop_assert!(is_arity_error);
    }

    #[test]
    fn when_runs_exactly_for_current_state(
        machine in arbitrary_machine(),
        pick in any::<prop::sample::Index>(),
    ) {
        let ui = possible_states(declarations(&machine)).unwrap();
        let target = pick.get(&machine);
        let next = ui.to_with(&target.name, target.values()).unwrap();

        let mut ran = 0;
        for declared in &machine {
            if next.when(&declared.name, |_| ()).is_some() {
                ran += 1;
                prop_assert_eq!(&declared.name, &target.name);
            }
        }
        prop_assert_eq!(ran, 1);
    }

    #[test]
    fn case_of_runs_exactly_one_handler(
        machine in arbitrary_machine(),
        pick in any::<prop::sample::Index>(),
        with_exact in any::<bool>(),
    ) {
        let ui = possible_states(declarations(&machine)).unwrap();
        let target = pick.get(&machine);
        let next = ui.to_with(&target.name, target.values()).unwrap();

        let mut cases = Cases::new().otherwise(|| "catch all".to_string());
        for declared in &machine {
            if with_exact || declared.name != target.name {
                let name = declared.name.clone();
                cases = cases.on(declared.name.clone(), move |_| name);
            }
        }

        let hit = next.case_of(cases).unwrap();
        if with_exact {
            prop_assert_eq!(hit, target.name.clone());
        } else {
            prop_assert_eq!(hit, "catch all");
        }
    }

    #[test]
    fn descriptor_display_parses_back(machine in arbitrary_machine()) {
        for declared in &machine {
            let descriptor = StateDescriptor::parse(&declared.declaration()).unwrap();
            let reparsed = StateDescriptor::parse(&descriptor.to_string()).unwrap();
            prop_assert_eq!(descriptor, reparsed);
        }
    }

    #[test]
    fn capitalized_sibling_names_are_rejected(name in identifier()) {
        let sibling = StateDescriptor::parse(&name).unwrap().suffix();

        let result = possible_states([name.clone(), sibling.clone()]);

        prop_assert_eq!(
            result.unwrap_err(),
            ConfigurationError::GeneratedNameCollision {
                method: format!("to{sibling}"),
                first: name,
                second: sibling,
            }
        );
    }
}
