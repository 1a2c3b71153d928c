//! Property tests for the TOML and ResX resource store formats.

use std::path::Path;

use proptest::prelude::*;

use actgen::domain::entities::{ResourceEntry, ResourceStore};
use actgen::infrastructure::{ResxResourceRepository, TomlResourceRepository};

fn text() -> impl Strategy<Value = String> {
    // Quotes, backslashes and newlines exercise TOML escaping
    proptest::string::string_regex("[A-Za-z0-9 \"\\\\\n.=#\\[\\]]{0,12}").unwrap()
}

fn markup() -> impl Strategy<Value = String> {
    // Markup characters and entity look-alikes exercise XML escaping
    proptest::string::string_regex("[A-Za-z0-9 <>&;'\"\n/=]{0,12}").unwrap()
}

fn entry() -> impl Strategy<Value = ResourceEntry> {
    (text(), text(), proptest::option::of(text()))
        .prop_map(|(key, value, comment)| ResourceEntry::new(key, value).with_comment(comment))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A saved store reads back with the same entries in the same order.
    #[test]
    fn property_store_survives_serialization(
        entries in proptest::collection::vec(entry(), 0..8)
    ) {
        let store = ResourceStore::from_entries(entries);

        let content = TomlResourceRepository::serialize(&store).unwrap();
        let parsed = TomlResourceRepository::parse(&content, Path::new("Resources.toml")).unwrap();

        prop_assert_eq!(parsed, store);
    }

    /// PROPERTY: Parsing arbitrary text returns a result instead of panicking.
    #[test]
    fn property_parse_never_panics(content in "\\PC{0,64}") {
        let _ = TomlResourceRepository::parse(&content, Path::new("Resources.toml"));
    }

    /// PROPERTY: A ResX document reads back with the same entries in the same order.
    #[test]
    fn property_resx_survives_rendering(
        entries in proptest::collection::vec(
            (markup(), markup(), proptest::option::of(markup()))
                .prop_map(|(k, v, c)| ResourceEntry::new(k, v).with_comment(c)),
            0..8,
        )
    ) {
        let store = ResourceStore::from_entries(entries);
        let path = Path::new("Resources.resx");

        let content = ResxResourceRepository::render(None, &store, path).unwrap();
        let parsed = ResxResourceRepository::parse(&content, path).unwrap();

        prop_assert_eq!(parsed, store);
    }

    /// PROPERTY: Appending to a ResX document never touches the text before `</root>`.
    #[test]
    fn property_resx_append_keeps_prefix(
        existing in proptest::collection::vec(entry(), 0..4),
        added in proptest::collection::vec(entry(), 1..4),
    ) {
        let path = Path::new("Resources.resx");
        let before = ResourceStore::from_entries(existing.clone());
        let original = ResxResourceRepository::render(None, &before, path).unwrap();

        let after = ResourceStore::from_entries(existing.into_iter().chain(added).collect());
        let content = ResxResourceRepository::render(Some(&original), &after, path).unwrap();

        let kept = original.strip_suffix("</root>\n").unwrap();
        prop_assert!(content.starts_with(kept));
        prop_assert_eq!(ResxResourceRepository::parse(&content, path).unwrap(), after);
    }
}
