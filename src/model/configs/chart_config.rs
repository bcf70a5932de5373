use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub image_width: u32,
    pub image_height: u32,
}

impl Default for ChartConfig {
    /* 150dpi 기준 12x8인치 */
    fn default() -> Self {
        Self {
            image_width: 1800,
            image_height: 1200,
        }
    }
}
