use thiserror::Error;

#[doc = "실행을 중단시키는 오류 분류. 재시도/부분 복구 없이 즉시 전파된다."]
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("stats file not found: {0}")]
    NotFound(String),
    #[error("failed to parse stats data: {0}")]
    Parse(String),
    #[error("failed to render traffic graph: {0}")]
    Render(String),
}
