use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gittitan::models::TitanReport;
use gittitan::{AnalysisPipeline, Config, FixtureSource, GitHubClient, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "gittitan")]
#[command(version)]
#[command(about = "Find out which Titan a GitHub user is, based on their public activity")]
struct Args {
    /// GitHub username to classify
    #[arg(short, long)]
    username: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Read the user and repositories from a JSON file instead of the GitHub API
    #[arg(long)]
    fixture: Option<String>,

    /// Maximum pages of repositories to fetch (100 per page)
    #[arg(long)]
    max_pages: Option<u32>,

    /// Hide the progress spinner
    #[arg(long)]
    no_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gittitan=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(max_pages) = args.max_pages {
        config.max_pages = max_pages;
        config.validate()?;
    }

    let pipeline_config = PipelineConfig {
        show_progress: !args.no_progress,
        ..PipelineConfig::from(&config)
    };

    let pipeline = match args.fixture {
        Some(ref path) => AnalysisPipeline::new(FixtureSource::from_path(path)?, pipeline_config),
        None => AnalysisPipeline::new(GitHubClient::new(&config)?, pipeline_config),
    };

    tracing::info!("Starting classification for GitHub user: {}", args.username);
    let report = match pipeline.analyze_user(&args.username).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            if e.is_retryable() {
                eprintln!("This error is temporary, please try again shortly.");
            }
            return Err(e.into());
        }
    };

    output_report(&report, &args)?;

    Ok(())
}

fn output_report(report: &TitanReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Markdown => format_markdown(report),
        OutputFormat::Text => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &TitanReport) -> String {
    let result = &report.classification;
    let profile = result.primary_titan.profile();
    let stats = &report.statistics;
    let mut output = String::new();

    output.push_str(&format!("\n=== Titan Diagnosis: {} ===\n\n", report.user.login));

    if let Some(ref name) = report.user.name {
        output.push_str(&format!("Name: {}\n", name));
    }

    output.push_str(&format!(
        "{} {} ({})\n\n{}\n\n",
        profile.icon, profile.name, profile.native_name, result.explanation
    ));

    output.push_str(&format!("Titan traits: {}\n", profile.traits.join(", ")));
    if !result.traits.is_empty() {
        output.push_str(&format!("Your traits: {}\n", result.trait_labels().join(", ")));
    }

    output.push_str("\nStatistics:\n");
    output.push_str(&format!("  Followers: {}\n", stats.follower_count));
    output.push_str(&format!(
        "  Public repositories: {} ({} analyzed)\n",
        stats.public_repo_count, stats.analyzed_repository_count
    ));
    output.push_str(&format!("  Account age: {:.1} years\n", stats.account_age_years));
    output.push_str(&format!("  Languages: {}\n", stats.language_count()));
    output.push_str(&format!(
        "  Average repository size: {:.0} KB\n",
        stats.average_repository_size
    ));
    match stats.days_since_last_update {
        Some(days) => output.push_str(&format!("  Last repository update: {:.0} days ago\n", days)),
        None => output.push_str("  Last repository update: never\n"),
    }
    output.push_str(&format!(
        "  Continuity period: {:.0} days\n",
        stats.continuity_period_days
    ));

    output.push_str("\nScores:\n");
    for score in &result.scores {
        let marker = if score.titan == result.primary_titan { " <" } else { "" };
        output.push_str(&format!(
            "  {} {:<18} {:>3}/100{}\n",
            score.titan.profile().icon,
            score.titan.name(),
            score.score,
            marker
        ));
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &TitanReport) -> String {
    let result = &report.classification;
    let profile = result.primary_titan.profile();
    let stats = &report.statistics;
    let mut output = String::new();

    output.push_str(&format!("# Titan Diagnosis: {}\n\n", report.user.login));
    output.push_str(&format!(
        "## {} {} ({})\n\n> {}\n\n",
        profile.icon, profile.name, profile.native_name, result.explanation
    ));

    output.push_str(&format!("**Titan traits:** {}\n\n", profile.traits.join(", ")));
    if !result.traits.is_empty() {
        output.push_str(&format!("**Your traits:** {}\n\n", result.trait_labels().join(", ")));
    }

    output.push_str("## Statistics\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Followers | {} |\n", stats.follower_count));
    output.push_str(&format!("| Public Repositories | {} |\n", stats.public_repo_count));
    output.push_str(&format!("| Account Age | {:.1} years |\n", stats.account_age_years));
    output.push_str(&format!("| Languages | {} |\n", stats.language_count()));
    output.push_str(&format!(
        "| Average Repository Size | {:.0} KB |\n",
        stats.average_repository_size
    ));
    if let Some(days) = stats.days_since_last_update {
        output.push_str(&format!("| Last Repository Update | {:.0} days ago |\n", days));
    }
    output.push_str(&format!(
        "| Continuity Period | {:.0} days |\n",
        stats.continuity_period_days
    ));

    output.push_str("\n## Scores\n\n");
    output.push_str("| Titan | Score | Top Factors |\n");
    output.push_str("|-------|-------|-------------|\n");

    for score in &result.scores {
        let mut factors: Vec<_> = score.breakdown.iter().filter(|(_, v)| **v > 0.0).collect();
        factors.sort_by(|a, b| b.1.total_cmp(a.1));
        let top: Vec<String> = factors
            .iter()
            .take(3)
            .map(|(k, v)| format!("{} ({:.1})", k, v))
            .collect();

        output.push_str(&format!(
            "| {} {} | {}/100 | {} |\n",
            score.titan.profile().icon,
            score.titan.name(),
            score.score,
            top.join(", ")
        ));
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        report.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
