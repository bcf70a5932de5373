use crate::common::*;

use crate::model::configs::{chart_config::*, report_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_report_config);

#[doc = "Function to initialize Report configuration information instances"]
pub fn initialize_report_config() -> TotalConfig {
    info!("initialize_report_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Default, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[doc = "보고서 경로 설정 정보"]
pub fn get_report_config_info() -> &'static ReportConfig {
    &TOTAL_CONFIG.report
}

#[doc = "그래프 이미지 설정 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    fn new() -> Self {
        /* 설정 파일이 없으면 기본 설정으로 동작한다 */
        if !Path::new(REPORT_CONFIG_PATH.as_str()).exists() {
            info!(
                "Config file '{}' not found. Using default configuration.",
                REPORT_CONFIG_PATH.as_str()
            );
            return TotalConfig::default();
        }

        match read_toml_from_file::<TotalConfig>(&REPORT_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from REPORT_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
