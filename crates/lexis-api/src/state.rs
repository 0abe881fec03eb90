use std::sync::Arc;

use lexis_common::config::AppConfig;
use lexis_core::{Locale, ReadingSpeedModel, TextAnalyzer};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<TextAnalyzer>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let locale: Locale = config
            .locale
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let speed = match config.reading_speed.as_str() {
            "adaptive" => ReadingSpeedModel::Adaptive,
            "fixed" => ReadingSpeedModel::Fixed {
                wpm: config.fixed_wpm,
            },
            other => anyhow::bail!("unknown reading speed model: {other}"),
        };

        tracing::info!(%locale, ?speed, "Analyzer configured");

        Ok(Self {
            analyzer: Arc::new(TextAnalyzer::new(locale, speed)),
        })
    }
}
