//! Serialization and isolation under concurrent load.

use std::sync::Arc;
use std::time::Duration;

use mimic_chain::ChainModel;
use mimic_core::{CommunityId, KnowledgeBase};
use mimic_registry::ModelRegistry;
use proptest::prelude::*;
use test_fixtures::{chain_config, mimic_config};

fn replay(ops: &[Op]) -> KnowledgeBase {
    let mut model = ChainModel::new(chain_config(2));
    for op in ops {
        match op {
            Op::Ingest(text) => model.ingest(text),
            Op::Remove(term) => {
                model.remove(term);
            }
        }
    }
    model.knowledge_base()
}

#[derive(Debug, Clone)]
enum Op {
    Ingest(String),
    Remove(String),
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_ingest_and_remove_match_a_serial_order() {
    for round in 0..25 {
        let reg = Arc::new(ModelRegistry::new(&mimic_config(2)));
        let id = CommunityId(round);
        reg.add_guild(id);
        reg.ingest(id, "the cat sat").await.unwrap();

        let ingest = Op::Ingest("the cat ran far".to_string());
        let remove = Op::Remove("cat".to_string());

        let r1 = Arc::clone(&reg);
        let r2 = Arc::clone(&reg);
        let a = tokio::spawn(async move { r1.ingest(id, "the cat ran far").await });
        let b = tokio::spawn(async move { r2.remove(id, "cat").await });
        a.await.unwrap().unwrap();
        let removed = b.await.unwrap().unwrap();

        let observed = reg.snapshot(id).await.unwrap();
        let base = Op::Ingest("the cat sat".to_string());
        let ingest_first = replay(&[base.clone(), ingest.clone(), remove.clone()]);
        let remove_first = replay(&[base, remove, ingest]);

        match removed {
            3 => assert_eq!(observed, ingest_first, "round {round}: torn state"),
            1 => assert_eq!(observed, remove_first, "round {round}: torn state"),
            n => panic!("round {round}: removed {n} occurrences"),
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn busy_community_does_not_block_others() {
    let mut config = mimic_config(2);
    config.registry.mailbox_capacity = 4;
    let reg = Arc::new(ModelRegistry::new(&config));
    let busy = CommunityId(1);
    let quiet = CommunityId(2);
    reg.add_guild(busy);
    reg.add_guild(quiet);
    reg.ingest(quiet, "hello quiet world").await.unwrap();

    let flood = {
        let reg = Arc::clone(&reg);
        tokio::spawn(async move {
            for i in 0..5_000 {
                reg.ingest(busy, format!("spam spam spam {i}")).await.unwrap();
            }
        })
    };

    let out = tokio::time::timeout(
        Duration::from_secs(5),
        reg.generate(quiet, &["hello".to_string(), "quiet".to_string()]),
    )
    .await
    .expect("quiet community stalled")
    .unwrap();
    assert_eq!(out, "hello quiet world");

    flood.await.unwrap();
    assert_eq!(reg.stats(busy).await.unwrap().messages_ingested, 5_000);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ingest_on_one_community_never_changes_another(
        messages in prop::collection::vec("[a-c ]{0,12}", 0..30),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let reg = ModelRegistry::new(&mimic_config(1));
            let (a, b) = (CommunityId(1), CommunityId(2));
            reg.add_guild(a);
            reg.add_guild(b);
            reg.ingest(b, "b c a").await.unwrap();
            let before = reg.snapshot(b).await.unwrap();
            for m in &messages {
                reg.ingest(a, m.clone()).await.unwrap();
            }
            reg.remove(a, "a").await.unwrap();
            assert_eq!(reg.snapshot(b).await.unwrap(), before);
        });
    }
}
