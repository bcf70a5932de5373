use crate::common::*;

use crate::enums::render_outcome::*;
use crate::model::stats::stats_snapshot::*;

#[async_trait]
pub trait ReportService: Send + Sync {
    async fn load_stats(&self) -> anyhow::Result<StatsSnapshot>;
    async fn render_report(&self, snapshot: &StatsSnapshot) -> anyhow::Result<RenderOutcome>;
}
