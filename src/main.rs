/*
Author      : Seunghwan Shin
Create date : 2026-08-00
Description :

History     : 2026-08-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod controller;
use controller::main_controller::*;

mod dto;

mod enums;

mod env_configuration;

mod model;
use model::configs::{report_config::*, total_config::*};

mod service;
use service::{chart_service_impl::*, report_service_impl::*};

mod traits;

mod utils_modules;
use utils_modules::logger_utils::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Traffic report program start!");

    let report_config: &ReportConfig = get_report_config_info();

    /* 의존 주입 */
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let report_service: ReportServiceImpl<ChartServiceImpl> = ReportServiceImpl::new(
        chart_service,
        PathBuf::from(report_config.stats_file()),
        PathBuf::from(report_config.output_file()),
    );

    let main_controller: MainController<ReportServiceImpl<ChartServiceImpl>> =
        MainController::new(report_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
