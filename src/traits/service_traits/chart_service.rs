use crate::common::*;

use crate::dto::panel_series::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Draw the two-panel traffic figure and save it as an image file
        # Arguments
        * `title` - Overall figure title
        * `views_panel` - Upper panel data, None leaves the panel blank
        * `clones_panel` - Lower panel data, None leaves the panel blank
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_traffic_chart(
        &self,
        title: &str,
        views_panel: Option<PanelSeries>,
        clones_panel: Option<PanelSeries>,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
