//! Tests for sweep configuration.

use std::io::Write;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        name = "Bubble"
        algorithm = "bubble_sort"
        sizes = [10, 50, -1, 100]
        distributions = ["ascending", "reverse"]
        unseeded = true
        ordered_style = "sorted_draw"
        warmup_count = 2

        [value_range]
        min = 1
        max = 10000
    "#;

    let config = SweepConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.name, "Bubble");
    assert_eq!(config.algorithm, SortAlgorithm::BubbleSort);
    assert_eq!(config.sizes, vec![10, 50, -1, 100]);
    assert_eq!(
        config.distributions,
        vec![DistributionKind::Ascending, DistributionKind::Descending]
    );
    assert_eq!(config.effective_seed(), None);
    assert_eq!(config.ordered_style, OrderedStyle::SortedDraw);
    assert_eq!(config.value_range, ValueRange { min: 1, max: 10_000 });
    assert_eq!(config.warmup_count, 2);
    assert!(config.verify);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        algorithm: heap_sort
        sizes: [100, 1000]
        distributions: [random]
        seed: 9
        csv_output: out.csv
    "#;

    let config = SweepConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.algorithm, SortAlgorithm::HeapSort);
    assert_eq!(config.effective_seed(), Some(9));
    assert_eq!(config.csv_output.as_deref(), Some("out.csv"));
    assert_eq!(config.value_range, ValueRange::default());
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = SweepConfig::from_toml_str("").unwrap();
    assert_eq!(config, SweepConfig::default());
    assert_eq!(config.effective_seed(), Some(DEFAULT_SEED));
    assert_eq!(config.distributions.len(), 3);
}

#[test]
fn test_unknown_distribution_rejected() {
    let err = SweepConfig::from_toml_str(r#"distributions = ["gaussian"]"#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_original_distribution_tags() {
    let config =
        SweepConfig::from_toml_str(r#"distributions = ["aleatorio", "ordenado", "inverso"]"#)
            .unwrap();
    assert_eq!(config.distributions, DistributionKind::ALL.to_vec());

    let yaml = "distributions: [sorted, reverse]\n";
    let config = SweepConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(
        config.distributions,
        vec![DistributionKind::Ascending, DistributionKind::Descending]
    );
}

#[test]
fn test_inverted_range_has_no_generator() {
    let config = SweepConfig::new().with_value_range(ValueRange { min: 9, max: -9 });
    assert!(matches!(
        config.generator(),
        Err(SortBenchError::InvalidArgument(_))
    ));
}

#[test]
fn test_validate() {
    assert!(SweepConfig::new().with_sizes(vec![]).validate().is_err());
    assert!(SweepConfig::new()
        .with_distributions(vec![])
        .validate()
        .is_err());
    assert!(SweepConfig::new()
        .with_value_range(ValueRange { min: 5, max: 1 })
        .validate()
        .is_err());
    assert!(SweepConfig::new().with_sizes(vec![-5]).validate().is_ok());
}

#[test]
fn test_builder() {
    let config = SweepConfig::new()
        .with_algorithm(SortAlgorithm::HeapSort)
        .with_seed(123)
        .with_warmup_count(1)
        .with_markdown_output("report.md")
        .with_verify(false);

    assert_eq!(config.algorithm, SortAlgorithm::HeapSort);
    assert!(!config.verify);
    assert_eq!(config.effective_seed(), Some(123));
    assert_eq!(config.markdown_output.as_deref(), Some("report.md"));

    let config = config.without_seed();
    assert_eq!(config.effective_seed(), None);
}

#[test]
fn test_profiles() {
    let quick = SweepConfig::profile(SortAlgorithm::QuickSort);
    assert_eq!(quick.sizes, vec![100, 500, 1000, 5000, 10000]);
    assert_eq!(quick.effective_seed(), Some(DEFAULT_SEED));
    assert_eq!(quick.generator().unwrap().style(), OrderedStyle::Progression);

    let heap = SweepConfig::profile(SortAlgorithm::HeapSort);
    assert_eq!(heap.sizes.last(), Some(&100_000));

    let bubble = SweepConfig::profile(SortAlgorithm::BubbleSort);
    assert_eq!(bubble.effective_seed(), None);
    let generator = bubble.generator().unwrap();
    assert_eq!(generator.style(), OrderedStyle::SortedDraw);
    assert_eq!(generator.range(), ValueRange { min: 1, max: 10_000 });
}

#[test]
fn test_load_dispatches_on_extension() {
    let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(yaml, "algorithm: bubble_sort\nsizes: [3]").unwrap();
    let config = SweepConfig::load(yaml.path()).unwrap();
    assert_eq!(config.algorithm, SortAlgorithm::BubbleSort);

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, "sizes = []").unwrap();
    assert!(matches!(
        SweepConfig::load(toml.path()),
        Err(ConfigError::Invalid(_))
    ));

    assert!(matches!(
        SweepConfig::load("does/not/exist.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_toml_round_trip() {
    let config = SweepConfig::bubble_sort_profile().with_csv_output("bubble.csv");
    let text = config.to_toml_string().unwrap();
    assert_eq!(SweepConfig::from_toml_str(&text).unwrap(), config);
}
