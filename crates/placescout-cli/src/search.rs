//! `placescout search`: query, aggregate, enrich, export.
//!
//! Search failures abort the run with a message naming the failure class.
//! Enrichment never fails the run; per-business misses are logged by the
//! enrichers themselves.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use placescout_core::{AppConfig, BusinessRecord, SearchQuery};
use placescout_places::{PaginationOptions, PlacesClient, PlacesError};
use placescout_scraper::EmailDiscoverer;

use crate::export;

/// Arguments for the `search` subcommand.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArgs {
    /// Business type, e.g. "restaurant" or "coiffeur"
    #[arg(long = "type", value_name = "TYPE")]
    pub business_type: String,

    /// City, district or postcode
    #[arg(long, value_name = "LOCATION")]
    pub location: String,

    /// Drop businesses whose name contains this keyword (repeatable)
    #[arg(long = "exclude", value_name = "KEYWORD")]
    pub exclude: Vec<String>,

    /// File of exclusion keywords, one per line
    #[arg(long, value_name = "PATH")]
    pub exclude_file: Option<PathBuf>,

    /// Minimum number of reviews (0 disables the filter)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=500))]
    pub min_reviews: u32,

    /// Maximum number of businesses to return
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(5..=60))]
    pub max_results: u16,

    /// Result language
    #[arg(long, default_value = "fr", value_parser = ["fr", "en", "de", "es", "it"])]
    pub language: String,

    /// Fetch per-business details (phone, website)
    #[arg(long)]
    pub details: bool,

    /// Visit business websites to find a contact email
    #[arg(long)]
    pub emails: bool,

    /// Output CSV path, or "-" for stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Aggregate figures logged at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunSummary {
    pub found: usize,
    pub mean_rating: Option<f64>,
    pub with_phone: usize,
    pub with_website: usize,
    pub with_email: usize,
}

impl RunSummary {
    pub(crate) fn from_records(records: &[BusinessRecord]) -> Self {
        let ratings: Vec<f64> = records.iter().filter_map(|r| r.rating).collect();
        #[allow(clippy::cast_precision_loss)]
        let mean_rating =
            (!ratings.is_empty()).then(|| ratings.iter().sum::<f64>() / ratings.len() as f64);

        Self {
            found: records.len(),
            mean_rating,
            with_phone: records.iter().filter(|r| r.phone().is_some()).count(),
            with_website: records.iter().filter(|r| r.website().is_some()).count(),
            with_email: records.iter().filter(|r| r.email.is_some()).count(),
        }
    }
}

/// Run a full search, optionally enrich, and write the CSV.
///
/// # Errors
///
/// Returns an error if the query is invalid, the exclusion file cannot be
/// read, the search fails at any page, or the CSV cannot be written.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let mut excluded = args.exclude.clone();
    if let Some(path) = &args.exclude_file {
        excluded.extend(read_exclude_file(path)?);
    }

    let query = SearchQuery::new(
        &args.business_type,
        &args.location,
        &excluded,
        usize::from(args.max_results),
        args.min_reviews,
        &args.language,
    )?;

    let client = PlacesClient::with_base_url(
        &config.places_api_key,
        config.api_timeout_secs,
        &config.places_base_url,
    )
    .context("configuration error: failed to build Places client")?;

    tracing::info!(
        query = %query.text_query,
        language = %query.language,
        max_results = query.max_results,
        min_reviews = query.min_reviews,
        excluded = query.excluded_keywords.len(),
        "starting search"
    );

    let options = PaginationOptions {
        inter_page_delay_ms: config.page_delay_ms,
        ..PaginationOptions::default()
    };
    let mut records = client
        .search_all(&query, options)
        .await
        .map_err(describe_search_failure)?;

    if records.is_empty() {
        tracing::warn!(query = %query.text_query, "no businesses matched; nothing to export");
        return Ok(());
    }

    if args.details {
        client
            .enrich_with_details(
                &mut records,
                &query.language,
                config.detail_delay_ms,
                |done, total| tracing::info!("details {done}/{total}"),
            )
            .await;
    }

    if args.emails {
        let discoverer = EmailDiscoverer::new(
            config.website_timeout_secs,
            &config.user_agent,
            &config.accept_language,
        )
        .context("configuration error: failed to build website client")?;
        discoverer
            .enrich_with_emails(&mut records, config.email_delay_ms, |done, total| {
                tracing::info!("emails {done}/{total}");
            })
            .await;
    }

    let summary = RunSummary::from_records(&records);
    tracing::info!(
        found = summary.found,
        mean_rating = ?summary.mean_rating.map(|m| (m * 10.0).round() / 10.0),
        with_phone = summary.with_phone,
        with_website = summary.with_website,
        with_email = summary.with_email,
        "search complete"
    );

    let bytes = export::to_csv_bytes(&records)?;
    let target = args
        .output
        .clone()
        .unwrap_or_else(|| export::default_file_name(&args.business_type, &args.location));
    write_output(&target, &bytes)?;
    Ok(())
}

fn describe_search_failure(e: PlacesError) -> anyhow::Error {
    let class = if e.is_network() {
        "network failure during search"
    } else {
        "upstream failure during search"
    };
    anyhow::Error::new(e).context(class)
}

fn read_exclude_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exclusion file {}", path.display()))?;
    Ok(parse_exclude_lines(&contents))
}

/// One keyword per line; blank lines dropped. Normalization happens in the query.
pub(crate) fn parse_exclude_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn write_output(target: &str, bytes: &[u8]) -> anyhow::Result<()> {
    if target == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(bytes)
            .and_then(|()| stdout.flush())
            .context("failed to write CSV to stdout")?;
        return Ok(());
    }

    std::fs::write(target, bytes).with_context(|| format!("failed to write CSV to {target}"))?;
    tracing::info!(path = target, bytes = bytes.len(), "CSV written");
    Ok(())
}
