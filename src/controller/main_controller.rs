use crate::common::*;

use crate::enums::render_outcome::*;
use crate::model::stats::stats_snapshot::*;
use crate::traits::service_traits::report_service::*;

#[derive(Debug, new)]
pub struct MainController<R: ReportService> {
    report_service: R,
}

impl<R: ReportService> MainController<R> {
    #[doc = r#"
        한 번의 보고서 생성 작업을 수행하는 핵심 함수.

        1. 누적 통계 파일을 읽어 스냅샷을 만든다
        2. 스냅샷을 2단 그래프로 렌더링한다 (데이터가 없으면 Skipped)
        3. 최종 결과를 로깅한다

        실패 시 해당 오류를 그대로 전파하며, 재시도나 부분 복구는 하지 않는다.

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        /* 1. 통계 스냅샷 로드 */
        let snapshot: StatsSnapshot = self.report_service.load_stats().await?;

        info!(
            "Loaded traffic snapshot: {} view samples, {} clone samples",
            snapshot.views().len(),
            snapshot.clones().len()
        );

        /* 2. 그래프 렌더링 */
        let outcome: RenderOutcome = self.report_service.render_report(&snapshot).await?;

        /* 3. 결과 로깅 */
        match outcome {
            RenderOutcome::Rendered => {
                info!("Traffic report generation completed");
            }
            RenderOutcome::Skipped => {
                info!("Traffic report generation skipped: no data");
            }
        }

        Ok(())
    }
}
