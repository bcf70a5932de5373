use crate::common::*;

use crate::dto::panel_series::*;
use crate::enums::{marker_shape::*, render_outcome::*, report_error::*};
use crate::model::stats::{data_point::*, stats_snapshot::*};
use crate::traits::service_traits::{chart_service::*, report_service::*};
use crate::utils_modules::{format_utils::*, io_utils::*, time_utils::*};

/* Material 팔레트: views 는 파란색, clones 는 초록색 */
const VIEWS_COLOR: (u8, u8, u8) = (33, 150, 243);
const CLONES_COLOR: (u8, u8, u8) = (76, 175, 80);

const FIGURE_TITLE: &str = "Repository Traffic Statistics";

#[derive(Debug, new)]
pub struct ReportServiceImpl<C: ChartService> {
    chart_service: C,
    stats_file_path: PathBuf,
    output_file_path: PathBuf,
}

impl<C: ChartService> ReportServiceImpl<C> {
    #[doc = r#"
        시리즈 하나를 패널 데이터로 변환하는 함수.

        비어있는 시리즈는 Ok(None) 을 반환하고 해당 패널은 빈 채로 남는다.
        timestamp 파싱 실패는 ParseError 로 전파한다.

        # Arguments
        * `label` - 패널 Y축 라벨 겸 제목의 시리즈명
        * `points` - 관측치 목록 (입력 순서 유지)
        * `total` - 제목에 표기할 누계
        * `marker` - 패널 마커 모양
        * `color` - 패널 색상
        * `with_x_desc` - 하단 패널에만 날짜축 라벨을 붙인다

        # Returns
        * `anyhow::Result<Option<PanelSeries>>`
    "#]
    fn build_panel_series(
        &self,
        label: &str,
        points: &[DataPoint],
        total: u64,
        marker: MarkerShape,
        color: (u8, u8, u8),
        with_x_desc: bool,
    ) -> anyhow::Result<Option<PanelSeries>> {
        if points.is_empty() {
            return Ok(None);
        }

        let mut series: Vec<(DateTime<Utc>, i64)> = Vec::with_capacity(points.len());

        for point in points {
            let timestamp: DateTime<Utc> = parse_utc_from_str(point.timestamp()).map_err(|e| {
                ReportError::Parse(format!(
                    "invalid timestamp '{}' in {} series: {}",
                    point.timestamp(),
                    label,
                    e
                ))
            })?;

            series.push((timestamp, *point.count() as i64));
        }

        let title: String = format!("Total {}: {}", label, format_with_commas(total as i64));
        let x_desc: Option<String> = with_x_desc.then(|| "Date".to_string());

        Ok(Some(PanelSeries::new(
            title,
            label.to_string(),
            x_desc,
            marker,
            color,
            series,
        )))
    }
}

#[async_trait]
impl<C: ChartService> ReportService for ReportServiceImpl<C> {
    #[doc = "누적 통계 파일을 읽어서 스냅샷으로 역직렬화 해주는 함수"]
    async fn load_stats(&self) -> anyhow::Result<StatsSnapshot> {
        let snapshot: StatsSnapshot = read_json_from_file::<StatsSnapshot>(&self.stats_file_path)?;
        Ok(snapshot)
    }

    #[doc = r#"
        스냅샷을 2단 그래프로 렌더링 해주는 함수.

        views/clones 가 모두 비어있으면 파일을 쓰지 않고 Skipped 를 반환한다.
        하나라도 데이터가 있으면 그래프를 그리고 Rendered 를 반환한다.
    "#]
    async fn render_report(&self, snapshot: &StatsSnapshot) -> anyhow::Result<RenderOutcome> {
        if snapshot.has_no_traffic() {
            info!("No data to plot");
            return Ok(RenderOutcome::Skipped);
        }

        let views_panel: Option<PanelSeries> = self.build_panel_series(
            "Views",
            snapshot.views(),
            *snapshot.total_views(),
            MarkerShape::Circle,
            VIEWS_COLOR,
            false,
        )?;

        let clones_panel: Option<PanelSeries> = self.build_panel_series(
            "Clones",
            snapshot.clones(),
            *snapshot.total_clones(),
            MarkerShape::Square,
            CLONES_COLOR,
            true,
        )?;

        self.chart_service
            .generate_traffic_chart(
                FIGURE_TITLE,
                views_panel,
                clones_panel,
                &self.output_file_path,
            )
            .await?;

        info!("Graph saved to {}", self.output_file_path.display());

        Ok(RenderOutcome::Rendered)
    }
}
