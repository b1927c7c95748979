use mimic_core::config::{MimicConfig, SamplingKind};
use mimic_core::constants::{MAX_CHAIN_ORDER, MIN_CHAIN_ORDER};
use proptest::prelude::*;

fn sampling() -> impl Strategy<Value = SamplingKind> {
    prop_oneof![Just(SamplingKind::FrequencyWeighted), Just(SamplingKind::Uniform)]
}

proptest! {
    #[test]
    fn validate_accepts_exactly_supported_orders(order in 0usize..8, max_output in 0usize..8) {
        let mut config = MimicConfig::default();
        config.chain.order = order;
        config.chain.max_output_tokens = max_output;
        let supported = (MIN_CHAIN_ORDER..=MAX_CHAIN_ORDER).contains(&order) && max_output >= order;
        prop_assert_eq!(config.validate().is_ok(), supported);
    }

    #[test]
    fn valid_configs_survive_toml_roundtrip(
        order in MIN_CHAIN_ORDER..=MAX_CHAIN_ORDER,
        extra_output in 0usize..64,
        kind in sampling(),
        seed in proptest::option::of(any::<u32>()),
        capacity in 1usize..1024,
        trigger in "[!?.$a-z]{1,4}",
    ) {
        let mut config = MimicConfig::default();
        config.chain.order = order;
        config.chain.max_output_tokens = order + extra_output;
        config.chain.sampling = kind;
        config.chain.rng_seed = seed.map(u64::from);
        config.registry.mailbox_capacity = capacity;
        config.commands.default_trigger = trigger.clone();

        let text = toml::to_string(&config).unwrap();
        let parsed = MimicConfig::from_toml(&text).unwrap();
        prop_assert_eq!(parsed.chain.order, order);
        prop_assert_eq!(parsed.chain.max_output_tokens, order + extra_output);
        prop_assert_eq!(parsed.chain.sampling, kind);
        prop_assert_eq!(parsed.chain.rng_seed, config.chain.rng_seed);
        prop_assert_eq!(parsed.registry.mailbox_capacity, capacity);
        prop_assert_eq!(parsed.commands.default_trigger, trigger);
    }
}
