use crate::common::*;

#[doc = "ISO-8601 형식의 문자열을 UTC 시각으로 파싱해주는 함수"]
pub fn parse_utc_from_str(datetime_str: &str) -> anyhow::Result<DateTime<Utc>> {
    let dt_utc: DateTime<Utc> = datetime_str.parse::<DateTime<Utc>>()?;
    Ok(dt_utc)
}

#[doc = ""]
pub fn convert_date_to_day_str(utc_time: DateTime<Utc>) -> String {
    utc_time.format("%Y-%m-%d").to_string()
}
