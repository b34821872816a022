use super::*;

use clap::Parser;

fn parse_search(extra: &[&str]) -> SearchArgs {
    let mut argv = vec![
        "placescout",
        "search",
        "--type",
        "restaurant",
        "--location",
        "Lyon",
    ];
    argv.extend_from_slice(extra);
    let cli = Cli::try_parse_from(argv).expect("expected valid cli args");
    match cli.command {
        Commands::Search(args) => args,
    }
}

#[test]
fn parses_search_with_defaults() {
    let args = parse_search(&[]);
    assert_eq!(args.business_type, "restaurant");
    assert_eq!(args.location, "Lyon");
    assert!(args.exclude.is_empty());
    assert!(args.exclude_file.is_none());
    assert_eq!(args.min_reviews, 0);
    assert_eq!(args.max_results, 20);
    assert_eq!(args.language, "fr");
    assert!(!args.details);
    assert!(!args.emails);
    assert!(args.output.is_none());
}

#[test]
fn parses_repeated_excludes_and_flags() {
    let args = parse_search(&[
        "--exclude",
        "KFC",
        "--exclude",
        "McDonald",
        "--min-reviews",
        "50",
        "--max-results",
        "60",
        "--language",
        "en",
        "--details",
        "--emails",
        "--output",
        "-",
    ]);
    assert_eq!(args.exclude, vec!["KFC", "McDonald"]);
    assert_eq!(args.min_reviews, 50);
    assert_eq!(args.max_results, 60);
    assert_eq!(args.language, "en");
    assert!(args.details);
    assert!(args.emails);
    assert_eq!(args.output.as_deref(), Some("-"));
}

#[test]
fn rejects_max_results_out_of_range() {
    for value in ["4", "61"] {
        let result = Cli::try_parse_from([
            "placescout",
            "search",
            "--type",
            "restaurant",
            "--location",
            "Lyon",
            "--max-results",
            value,
        ]);
        assert!(result.is_err(), "--max-results {value} should be rejected");
    }
}

#[test]
fn rejects_min_reviews_above_limit() {
    let result = Cli::try_parse_from([
        "placescout",
        "search",
        "--type",
        "bar",
        "--location",
        "Paris",
        "--min-reviews",
        "501",
    ]);
    assert!(result.is_err());
}

#[test]
fn rejects_unsupported_language() {
    let result = Cli::try_parse_from([
        "placescout",
        "search",
        "--type",
        "bar",
        "--location",
        "Paris",
        "--language",
        "pt",
    ]);
    assert!(result.is_err());
}

#[test]
fn requires_type_and_location() {
    assert!(Cli::try_parse_from(["placescout", "search", "--type", "bar"]).is_err());
    assert!(Cli::try_parse_from(["placescout", "search", "--location", "Paris"]).is_err());
}

#[test]
fn requires_a_subcommand() {
    assert!(Cli::try_parse_from(["placescout"]).is_err());
}
