use crate::common::*;

#[doc = r#"
    전역 로거를 설정해주는 함수.

    로그는 `logs/` 디렉토리에 일 단위로 롤링하며 보관하고,
    운영자가 실행 결과를 바로 볼 수 있도록 stdout 에도 복제한다.

    # Panics
    로거 초기화에 실패한 경우 애플리케이션 종료
"#]
pub fn set_global_logger() {
    let logger_handle: LoggerHandle = Logger::try_with_str("info")
        .expect("Failed to build logger spec")
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .expect("Failed to start logger");

    /* 핸들이 drop 되면 로거가 종료되므로 프로세스 수명 동안 유지한다 */
    std::mem::forget(logger_handle);
}

fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        &record.args()
    )
}
