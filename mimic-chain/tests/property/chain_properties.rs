use mimic_chain::ChainModel;
use proptest::prelude::*;
use test_fixtures::chain_config;

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "The", "CAT", "e."]).prop_map(String::from)
}

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..8).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn removed_term_never_generated(
        messages in prop::collection::vec(message(), 1..20),
        later in prop::collection::vec(message(), 0..5),
        order in 1usize..=2,
    ) {
        let mut model = ChainModel::new(chain_config(order));
        for m in &messages {
            model.ingest(m);
        }
        model.remove("cat");
        for m in &later {
            model.ingest(m);
        }
        for _ in 0..10 {
            let out = model.generate(&[]);
            prop_assert!(!out.split(' ').any(|t| t == "cat"), "generated {}", out);
        }
    }

    #[test]
    fn remove_count_equals_occurrence_drop(
        messages in prop::collection::vec(message(), 1..20),
        term in word(),
    ) {
        let mut model = ChainModel::new(chain_config(2));
        for m in &messages {
            model.ingest(m);
        }
        let before = model.table().occurrences();
        let removed = model.remove(&term);
        prop_assert_eq!(before - removed, model.table().occurrences());
        prop_assert!(!model.table().mentions(&term.to_lowercase()));
    }

    #[test]
    fn render_restore_preserves_table(
        messages in prop::collection::vec(message(), 0..20),
        order in 1usize..=2,
    ) {
        let mut model = ChainModel::new(chain_config(order));
        for m in &messages {
            model.ingest(m);
        }
        let restored = ChainModel::restore(chain_config(order), &model.render().unwrap()).unwrap();
        prop_assert_eq!(restored.table(), model.table());
    }

    #[test]
    fn output_is_bounded(messages in prop::collection::vec(message(), 1..20)) {
        let mut model = ChainModel::new(chain_config(1));
        for m in &messages {
            model.ingest(m);
        }
        let max = model.config().max_output_tokens;
        let out = model.generate(&[]);
        prop_assert!(out.is_empty() || out.split(' ').count() <= max);
    }
}
