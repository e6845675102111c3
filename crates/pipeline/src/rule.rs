//! 내장 규칙 테이블 및 분류기
//!
//! 규칙은 프로세스 전역 상수이며 선언 순서가 곧 우선순위입니다.
//! 분류는 메시지를 소문자로 변환한 뒤 지표 부분 문자열 포함 여부를
//! 검사하는 순수 함수로, 첫 번째로 매칭된 규칙 하나만 반환합니다.
//!
//! 규칙 추가는 [`BUILTIN_RULES`] 테이블에 항목을 더하는 데이터 변경이며,
//! 제어 흐름 변경이 아닙니다.

use serde_json::Value;

use logsynth_core::types::Confidence;

/// 공격 탐지 규칙
///
/// 지표 부분 문자열 하나와 매칭 시 부여할 공격 메타데이터의 쌍입니다.
/// 불변이며 `'static` 수명으로 테이블에 상주합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRule {
    /// 대소문자 무시 포함 검사에 쓰이는 지표 문자열 (소문자로 선언)
    pub indicator: &'static str,
    /// 공격 이름 (출력의 event.action)
    pub name: &'static str,
    /// ATT&CK 기법 ID
    pub technique: &'static str,
    /// ATT&CK 전술명
    pub tactic: &'static str,
    /// 탐지 신뢰도
    pub confidence: Confidence,
    /// 공격 대상 서비스명
    pub service: &'static str,
}

/// 내장 규칙 테이블 (선언 순서 = 평가 순서)
pub const BUILTIN_RULES: &[AttackRule] = &[
    // DVWA command execution
    AttackRule {
        indicator: "/vulnerabilities/exec",
        name: "Command Execution",
        technique: "T1059",
        tactic: "Execution",
        confidence: Confidence::High,
        service: "DVWA",
    },
    // Juice Shop SQL injection (login)
    AttackRule {
        indicator: "/rest/user/login",
        name: "SQL Injection (Auth Bypass)",
        technique: "T1190",
        tactic: "Initial Access",
        confidence: Confidence::Medium,
        service: "OWASP Juice Shop",
    },
];

/// 문서에서 메시지 텍스트를 추출합니다.
///
/// `_source.message` 경로가 없거나 문자열이 아니면 빈 문자열입니다.
pub fn message_of(doc: &Value) -> &str {
    doc.pointer("/_source/message")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// 문서 하나를 분류합니다.
///
/// 메시지를 소문자로 변환한 뒤 [`BUILTIN_RULES`]를 선언 순서대로
/// 평가하여 첫 매칭 규칙을 반환합니다. 순수 함수이며 어떤 문서에
/// 대해서도 패닉하지 않습니다.
pub fn classify(doc: &Value) -> Option<&'static AttackRule> {
    let message = message_of(doc).to_lowercase();
    BUILTIN_RULES
        .iter()
        .find(|rule| message.contains(rule.indicator))
}
