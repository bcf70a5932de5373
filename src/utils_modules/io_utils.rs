use crate::common::*;

use crate::enums::report_error::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    # Arguments
    * `file_path` - 읽을 대상 toml 파일이 존재하는 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    JSON 형식의 데이터 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    실패는 둘로 구분한다:
    - 파일이 존재하지 않는 경우 `ReportError::NotFound`
    - 내용이 JSON 이 아니거나 필수 키가 빠진 경우 `ReportError::Parse`

    # Arguments
    * `file_path` - 읽을 대상 json 파일이 존재하는 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_json_from_file<T: DeserializeOwned>(file_path: &Path) -> Result<T, anyhow::Error> {
    let json_content: String = std::fs::read_to_string(file_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ReportError::NotFound(file_path.display().to_string()),
        _ => ReportError::Parse(format!("failed to read '{}': {}", file_path.display(), e)),
    })?;

    let parsed: T = serde_json::from_str(&json_content)
        .map_err(|e| ReportError::Parse(format!("'{}': {}", file_path.display(), e)))?;

    Ok(parsed)
}
