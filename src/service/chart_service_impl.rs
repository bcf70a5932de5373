use crate::common::*;
use crate::dto::panel_series::*;
use crate::enums::{marker_shape::*, report_error::*};
use crate::model::configs::total_config::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{format_utils::*, time_utils::*};
use plotters::coord::Shift;
use plotters::prelude::*;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding. The lower bound stays at zero so the area fill reaches the baseline."]
    fn calc_y_range(points: &[(DateTime<Utc>, i64)]) -> (i64, i64) {
        if points.is_empty() {
            return (0, 100);
        }

        let max_val: i64 = points.iter().map(|(_, y)| *y).max().unwrap_or(100);
        let padding: i64 = ((max_val as f64) * 0.1).max(1.0) as i64;

        (0, max_val + padding)
    }

    #[doc = "Helper function to determine the date range shared by both panels"]
    fn calc_x_range(
        views_panel: Option<&PanelSeries>,
        clones_panel: Option<&PanelSeries>,
    ) -> (DateTime<Utc>, DateTime<Utc>) {
        let mut timestamps: Vec<DateTime<Utc>> = Vec::new();

        if let Some(panel) = views_panel {
            timestamps.extend(panel.points().iter().map(|(x, _)| *x));
        }
        if let Some(panel) = clones_panel {
            timestamps.extend(panel.points().iter().map(|(x, _)| *x));
        }

        /* 입력이 정렬되어 있다고 가정하지 않는다 */
        let x_min: DateTime<Utc> = timestamps
            .iter()
            .min()
            .copied()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let x_max: DateTime<Utc> = timestamps
            .iter()
            .max()
            .copied()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        /* 단일 관측치는 축 범위가 퇴화하므로 앞뒤로 벌려준다 */
        if x_min == x_max {
            return (
                x_min - chrono::Duration::hours(12),
                x_max + chrono::Duration::hours(12),
            );
        }

        (x_min, x_max)
    }

    fn draw_panel(
        area: &DrawingArea<BitMapBackend, Shift>,
        panel: &PanelSeries,
        x_min: DateTime<Utc>,
        x_max: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let (y_min, y_max) = Self::calc_y_range(panel.points());
        let line_color: RGBColor = RGBColor(panel.color.0, panel.color.1, panel.color.2);
        let grid_color: RGBAColor = BLACK.mix(0.12);
        let text_color: RGBColor = RGBColor(60, 60, 60);

        let mut chart = ChartBuilder::on(area)
            .caption(
                panel.title(),
                ("sans-serif", 24).into_font().color(&text_color),
            )
            .margin(20)
            .x_label_area_size(80)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        /* 라벨 포매터는 mesh 가 그려질 때까지 살아있어야 한다 */
        let x_label_fmt = |x: &DateTime<Utc>| convert_date_to_day_str(*x);
        let y_label_fmt = |y: &i64| format_with_commas(*y);

        let mut mesh = chart.configure_mesh();

        mesh.y_desc(panel.y_desc().as_str())
            .x_labels(8)
            .y_labels(10)
            .axis_style(ShapeStyle::from(&BLACK.mix(0.6)).stroke_width(1))
            .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
            .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(2))
            .x_label_formatter(&x_label_fmt)
            .y_label_formatter(&y_label_fmt)
            .x_label_style(
                ("sans-serif", 16)
                    .into_font()
                    .transform(FontTransform::Rotate90)
                    .color(&text_color),
            )
            .y_label_style(("sans-serif", 16).into_font().color(&text_color));

        if let Some(x_desc) = panel.x_desc() {
            mesh.x_desc(x_desc.as_str());
        }

        mesh.draw()?;

        /* 0 기준선까지 반투명 면 채우기 + 본선 */
        chart.draw_series(AreaSeries::new(
            panel.points().iter().cloned(),
            0,
            &line_color.mix(0.3),
        ))?;

        chart.draw_series(LineSeries::new(
            panel.points().iter().cloned(),
            ShapeStyle::from(&line_color).stroke_width(2),
        ))?;

        match panel.marker() {
            MarkerShape::Circle => {
                chart.draw_series(
                    panel
                        .points()
                        .iter()
                        .map(|(x, y)| Circle::new((*x, *y), 4, line_color.filled())),
                )?;
            }
            MarkerShape::Square => {
                chart.draw_series(PointSeries::of_element(
                    panel.points().iter().cloned(),
                    4,
                    ShapeStyle::from(&line_color).filled(),
                    &|coord, size, style| {
                        EmptyElement::at(coord) + Rectangle::new([(-size, -size), (size, size)], style)
                    },
                ))?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_traffic_chart(
        &self,
        title: &str,
        views_panel: Option<PanelSeries>,
        clones_panel: Option<PanelSeries>,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        if views_panel.is_none() && clones_panel.is_none() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_traffic_chart] Cannot generate chart with no panel data"
            ));
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ReportError::Render(format!(
                        "cannot create output directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();

        let image_width: u32 = *get_chart_config_info().image_width();
        let image_height: u32 = *get_chart_config_info().image_height();

        /* Calculate the shared date range before moving into closure */
        let (x_min, x_max) = Self::calc_x_range(views_panel.as_ref(), clones_panel.as_ref());

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let root = BitMapBackend::new(&output_path_str, (image_width, image_height))
                    .into_drawing_area();
                root.fill(&WHITE)?;

                let titled = root.titled(
                    &title,
                    FontDesc::new(FontFamily::SansSerif, 36.0, FontStyle::Bold),
                )?;

                /* 상단 패널(views), 하단 패널(clones)이 날짜축을 공유한다 */
                let panels = titled.split_evenly((2, 1));

                if let Some(panel) = views_panel {
                    Self::draw_panel(&panels[0], &panel, x_min, x_max)?;
                }

                if let Some(panel) = clones_panel {
                    Self::draw_panel(&panels[1], &panel, x_min, x_max)?;
                }

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_traffic_chart] blocking task join failed (panic/cancelled)",
        )?;

        if let Err(e) = drawing_result {
            return Err(ReportError::Render(format!("{:?}", e)).into());
        }

        info!("Traffic chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils_modules::time_utils::*;

    fn point(ts: &str, count: i64) -> (DateTime<Utc>, i64) {
        (parse_utc_from_str(ts).unwrap(), count)
    }

    #[test]
    fn y_range_pads_max_and_floors_at_zero() {
        let points = vec![point("2024-01-01T00:00:00Z", 50), point("2024-01-02T00:00:00Z", 100)];
        assert_eq!(ChartServiceImpl::calc_y_range(&points), (0, 110));
    }

    #[test]
    fn y_range_fallback_for_empty_points() {
        assert_eq!(ChartServiceImpl::calc_y_range(&[]), (0, 100));
    }

    #[test]
    fn x_range_spans_both_panels_unsorted() {
        let views = PanelSeries::new(
            "Total Views: 3".to_string(),
            "Views".to_string(),
            None,
            MarkerShape::Circle,
            (33, 150, 243),
            vec![point("2024-01-05T00:00:00Z", 1), point("2024-01-02T00:00:00Z", 2)],
        );
        let clones = PanelSeries::new(
            "Total Clones: 1".to_string(),
            "Clones".to_string(),
            Some("Date".to_string()),
            MarkerShape::Square,
            (76, 175, 80),
            vec![point("2024-01-09T00:00:00Z", 1)],
        );

        let (x_min, x_max) = ChartServiceImpl::calc_x_range(Some(&views), Some(&clones));
        assert_eq!(x_min, parse_utc_from_str("2024-01-02T00:00:00Z").unwrap());
        assert_eq!(x_max, parse_utc_from_str("2024-01-09T00:00:00Z").unwrap());
    }

    #[test]
    fn x_range_widens_single_observation() {
        let views = PanelSeries::new(
            "Total Views: 5".to_string(),
            "Views".to_string(),
            None,
            MarkerShape::Circle,
            (33, 150, 243),
            vec![point("2024-01-01T12:00:00Z", 5)],
        );

        let (x_min, x_max) = ChartServiceImpl::calc_x_range(Some(&views), None);
        assert_eq!(x_min, parse_utc_from_str("2024-01-01T00:00:00Z").unwrap());
        assert_eq!(x_max, parse_utc_from_str("2024-01-02T00:00:00Z").unwrap());
    }
}
