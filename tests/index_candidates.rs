//! End-to-end blocking scenarios: index a corpus, commit, rank
//! candidates, persist and reload.

use std::fs::File;

use cognate::analysis::tokenizer::UnicodeWordTokenizer;
use cognate::entity::{Entity, Property};
use cognate::index::{Index, IndexConfig};

fn sanctions_corpus() -> Vec<Entity> {
    vec![
        Entity::builder("ru-putin")
            .schema("Person")
            .property(Property::Name, "Vladimir Vladimirovich Putin")
            .property(Property::Date, "1952-10-07")
            .property(Property::Country, "ru")
            .build(),
        Entity::builder("wd-putin")
            .schema("Person")
            .property(Property::Name, "Vladimir Putin")
            .property(Property::Name, "Wladimir Putin")
            .property(Property::Country, "ru")
            .build(),
        Entity::builder("ru-medvedev")
            .schema("Person")
            .property(Property::Name, "Dmitri Anatolyevich Medvedev")
            .property(Property::Country, "ru")
            .build(),
        Entity::builder("de-acme")
            .schema("Company")
            .property(Property::Name, "Acme Handels GmbH")
            .property(Property::Identifier, "HRB 12345")
            .property(Property::Country, "de")
            .build(),
        Entity::builder("de-acme-alias")
            .schema("Company")
            .property(Property::Name, "ACME Handels")
            .property(Property::Country, "de")
            .build(),
    ]
}

fn build_index(entities: &[Entity]) -> Index {
    let mut index = Index::new(
        Box::new(UnicodeWordTokenizer::new()),
        IndexConfig { min_terms: 1.0 },
    );
    for entity in entities {
        index.index_entity(entity).unwrap();
    }
    index.commit();
    index
}

#[test]
fn candidates_surface_the_matching_record_first() {
    let corpus = sanctions_corpus();
    let index = build_index(&corpus);

    let ranked = index.candidates(&corpus[0], None).unwrap();
    assert_eq!(ranked[0].0, "wd-putin");
    assert!(ranked[0].1 > 0.0);

    let ranked = index.candidates(&corpus[3], Some(1)).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].0, "de-acme-alias");
}

#[test]
fn scores_decrease_down_the_ranking() {
    let corpus = sanctions_corpus();
    let index = build_index(&corpus);
    let ranked = index.candidates(&corpus[0], None).unwrap();
    for pair in ranked.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn query_for_unindexed_entity_works() {
    let corpus = sanctions_corpus();
    let index = build_index(&corpus);

    // A probe record that was never indexed can still be blocked
    // against the corpus; nothing is excluded.
    let probe = Entity::builder("probe")
        .schema("Person")
        .property(Property::Name, "V. Putin")
        .build();
    let ranked = index.candidates(&probe, None).unwrap();
    assert!(!ranked.is_empty());
    assert!(ranked.iter().any(|(id, _)| id.starts_with("ru-") || id.starts_with("wd-")));
}

#[test]
fn snapshot_round_trips_through_disk() {
    let corpus = sanctions_corpus();
    let index = build_index(&corpus);
    let expected = index.candidates(&corpus[0], None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.json");
    index.save(File::create(&path).unwrap()).unwrap();

    let mut reloaded = Index::load(
        Box::new(UnicodeWordTokenizer::new()),
        File::open(&path).unwrap(),
    )
    .unwrap();
    assert!(!reloaded.is_committed());
    assert_eq!(reloaded.corpus_size(), index.corpus_size());

    reloaded.commit();
    assert_eq!(reloaded.candidates(&corpus[0], None).unwrap(), expected);
}

#[test]
fn growing_the_corpus_requires_recommit() {
    let corpus = sanctions_corpus();
    let mut index = build_index(&corpus);

    let newcomer = Entity::builder("uk-new")
        .schema("Person")
        .property(Property::Name, "Vladimir Novak")
        .build();
    index.index_entity(&newcomer).unwrap();
    assert!(index.candidates(&corpus[0], None).is_err());

    index.commit();
    let ranked = index.candidates(&newcomer, None).unwrap();
    assert!(ranked.iter().any(|(id, _)| id == "wd-putin"));
}
