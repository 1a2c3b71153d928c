//! Property tests for token partitioning.

use proptest::prelude::*;

use actgen::domain::services::{is_marker, parse_invocation, ArgumentPartitioner};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("-in".to_string()),
        3 => Just("-out".to_string()),
        1 => Just("-resx".to_string()),
        10 => proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,8}").unwrap(),
    ]
}

fn tokens() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(token(), 0..16)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Partitioning any token list never panics and never yields a marker.
    #[test]
    fn property_groups_never_contain_markers(tokens in tokens()) {
        let groups = ArgumentPartitioner::partition(&tokens);

        prop_assert!(groups.inputs.iter().all(|t| !is_marker(t)));
        prop_assert!(groups.outputs.iter().all(|t| !is_marker(t)));
    }

    /// PROPERTY: Each group is the contiguous run after the first marker occurrence.
    #[test]
    fn property_input_group_is_contiguous_run(tokens in tokens()) {
        let groups = ArgumentPartitioner::partition(&tokens);

        match tokens.iter().position(|t| t == "-in") {
            None => prop_assert!(groups.inputs.is_empty()),
            Some(index) => {
                let expected: Vec<String> = tokens[index + 1..]
                    .iter()
                    .take_while(|t| !is_marker(t))
                    .cloned()
                    .collect();
                prop_assert_eq!(groups.inputs, expected);
            }
        }
    }

    /// PROPERTY: Swapping the `-in` and `-out` markers swaps the groups.
    #[test]
    fn property_markers_are_symmetric(tokens in tokens()) {
        let swapped: Vec<String> = tokens
            .iter()
            .map(|t| match t.as_str() {
                "-in" => "-out".to_string(),
                "-out" => "-in".to_string(),
                _ => t.clone(),
            })
            .collect();

        let groups = ArgumentPartitioner::partition(&tokens);
        let swapped_groups = ArgumentPartitioner::partition(&swapped);

        prop_assert_eq!(groups.inputs, swapped_groups.outputs);
        prop_assert_eq!(groups.outputs, swapped_groups.inputs);
    }

    /// PROPERTY: Parsing either fails or yields non-marker positional names.
    #[test]
    fn property_parse_invocation_never_panics(tokens in tokens()) {
        if let Ok(invocation) = parse_invocation(&tokens) {
            prop_assert!(!is_marker(&invocation.namespace_name));
            prop_assert!(!is_marker(&invocation.class_name));
            prop_assert!(invocation.ignored.iter().all(|t| !is_marker(t)));
        }
    }
}
