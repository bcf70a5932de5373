use crate::common::*;

#[doc = "특정 시각에 관측된 트래픽 카운트. timestamp 는 ISO-8601 문자열로 보관하고 사용 시점에 변환한다."]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct DataPoint {
    pub timestamp: String,
    pub count: u64,
}
