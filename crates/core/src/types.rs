//! 도메인 타입 — 시스템 전역에서 사용되는 공통 타입

use std::fmt;

use serde::{Deserialize, Serialize};

/// 탐지 신뢰도 레벨
///
/// 규칙 매칭 결과의 확신 정도를 나타냅니다.
/// `Ord` 구현으로 신뢰도 비교가 가능합니다 (`Low < Medium < High`).
/// 출력 레코드에는 소문자 문자열(`"low"`, `"medium"`, `"high"`)로 직렬화됩니다.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// 낮은 신뢰도
    Low,
    /// 중간 신뢰도
    #[default]
    Medium,
    /// 높은 신뢰도
    High,
}

impl Confidence {
    /// 문자열에서 신뢰도를 파싱합니다.
    ///
    /// 대소문자를 구분하지 않습니다.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// 실행 요약 — 한 번의 파이프라인 실행 동안 유지되는 카운터
///
/// 드라이버가 소유하며 실행 종료 시 보고됩니다. 두 카운터 모두
/// 단조 증가하며, `matched <= processed`가 항상 성립합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// 읽어들인 문서 수
    pub processed: u64,
    /// 규칙에 매칭되어 출력된 문서 수
    pub matched: u64,
}

impl RunSummary {
    /// 문서 하나를 처리했음을 기록합니다.
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    /// 문서 하나가 매칭되었음을 기록합니다.
    pub fn record_matched(&mut self) {
        self.matched += 1;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "processed={} matched={}", self.processed, self.matched)
    }
}
