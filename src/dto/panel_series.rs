use crate::common::*;

use crate::enums::marker_shape::*;

#[doc = r#"
    그래프 한 패널을 그리는 데 필요한 데이터 묶음.

    비어있는 시리즈는 PanelSeries 를 만들지 않고 None 으로 전달되며,
    해당 패널은 아무것도 그리지 않은 채로 남는다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct PanelSeries {
    pub title: String,
    pub y_desc: String,
    pub x_desc: Option<String>,
    pub marker: MarkerShape,
    pub color: (u8, u8, u8),
    pub points: Vec<(DateTime<Utc>, i64)>,
}
