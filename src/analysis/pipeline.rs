use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::aggregator::aggregate_at;
use crate::analysis::classifier::Classifier;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::ProfileSource;
use crate::models::TitanReport;

pub struct AnalysisPipeline {
    source: Arc<dyn ProfileSource>,
    classifier: Classifier,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    pub fn new(source: impl ProfileSource + 'static, config: PipelineConfig) -> Self {
        Self {
            source: Arc::new(source),
            classifier: Classifier::with_config(config.scoring),
            config,
        }
    }

    pub async fn analyze_user(&self, username: &str) -> Result<TitanReport> {
        let spinner = self.spinner();

        // Step 1: Fetch user and repositories together
        spinner.set_message(format!("Fetching {} from {}...", username, self.source.name()));
        tracing::info!("Fetching profile for: {} (source: {})", username, self.source.name());
        let fetched = futures::try_join!(
            self.source.fetch_user(username),
            self.source.fetch_repositories(username),
        );
        let (user, repositories) = match fetched {
            Ok(pair) => pair,
            Err(e) => {
                spinner.finish_and_clear();
                tracing::warn!("Could not fetch {}: {}", username, e);
                return Err(e);
            }
        };

        let private_count = repositories.iter().filter(|r| r.is_private).count();
        tracing::info!(
            "Found {} repositories ({} private, excluded)",
            repositories.len(),
            private_count
        );

        // Step 2: Aggregate against a single clock reading
        spinner.set_message("Aggregating statistics...");
        let analysis_date = Utc::now();
        let statistics = aggregate_at(&user, &repositories, analysis_date);
        tracing::debug!(
            languages = statistics.language_count(),
            account_age_years = statistics.account_age_years,
            continuity_days = statistics.continuity_period_days,
            "Statistics ready"
        );

        // Step 3: Classify
        spinner.set_message("Classifying...");
        let classification = self.classifier.classify(&statistics);
        spinner.finish_and_clear();

        tracing::info!(
            "{} classified as {} ({} traits)",
            user.login,
            classification.primary_titan,
            classification.traits.len()
        );

        Ok(TitanReport {
            user,
            statistics,
            classification,
            analysis_date,
        })
    }

    fn spinner(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
