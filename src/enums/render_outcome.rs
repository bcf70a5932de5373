#[doc = "한 번의 실행이 끝나는 두 가지 정상 종료 상태"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    Skipped,
}
