use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mimic_bot::{driver, Bot};
use mimic_chain::{FrequencyWeighted, ISamplingPolicy};
use mimic_registry::{ModelRegistry, PolicyFactory};
use rand::RngCore;
use test_fixtures::{mimic_config, RecordingSink};

struct PanicOnPick;

impl ISamplingPolicy for PanicOnPick {
    fn pick(&self, _weights: &[u64], _rng: &mut dyn RngCore) -> Option<usize> {
        panic!("sampling failed");
    }

    fn name(&self) -> &str {
        "panic_on_pick"
    }
}

fn first_model_panics() -> PolicyFactory {
    let created = Arc::new(AtomicUsize::new(0));
    Arc::new(move || {
        if created.fetch_add(1, Ordering::SeqCst) == 0 {
            Box::new(PanicOnPick) as Box<dyn ISamplingPolicy>
        } else {
            Box::new(FrequencyWeighted)
        }
    })
}

async fn drive(registry: ModelRegistry, input: &str) -> String {
    let bot = Bot::new(Arc::new(registry), RecordingSink::new(), Default::default(), 999);
    let mut output = Vec::new();
    driver::run(&bot, input.as_bytes(), &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn replies_are_written_per_line() {
    let input = "1 5 the cat sat\n\nnot a message\n1 5 !chat\n1 5 !dance\n";
    let output = drive(ModelRegistry::new(&mimic_config(2)), input).await;
    assert_eq!(output, "the cat sat\nUnknown command.\n");
}

#[tokio::test]
async fn failing_guild_does_not_stop_the_others() {
    let registry = ModelRegistry::new(&mimic_config(2)).with_policy_factory(first_model_panics());
    let input = "\
1 5 the cat sat
1 5 !chat
2 5 the dog ran
2 5 !chat
1 5 !chat
2 5 !chat about the dog
";
    let output = drive(registry, input).await;
    assert_eq!(output, "the dog ran\nthe dog ran\n");
}
