use crate::common::*;

use crate::model::stats::data_point::*;

#[doc = r#"
    외부 수집기가 쌓아준 트래픽 통계 문서 전체.

    필수 키(views, clones, total_views, total_clones)가 하나라도 빠지면
    역직렬화 단계에서 실패한다. 로드 이후에는 변경되지 않는다.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct StatsSnapshot {
    pub views: Vec<DataPoint>,
    pub clones: Vec<DataPoint>,
    pub total_views: u64,
    pub total_clones: u64,
}

impl StatsSnapshot {
    #[doc = "두 시리즈가 모두 비어있는지 여부. 모두 비어있으면 그래프를 그리지 않는다."]
    pub fn has_no_traffic(&self) -> bool {
        self.views.is_empty() && self.clones.is_empty()
    }
}
