use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ReportConfig {
    pub stats_file: String,
    pub output_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stats_file: "stats_data.json".to_string(),
            output_file: "docs/stats_graph.png".to_string(),
        }
    }
}
