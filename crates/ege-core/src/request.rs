//! 单次求解请求
use crate::document::InputDocument;
use crate::error::SolveError;
use crate::registry::{Ordinal, QuestionId, Registry};

/// 一次调用的全部参数；校验后只被一个扫描器消费
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub question: QuestionId,
    pub ordinal: Option<Ordinal>,
    pub target: Option<String>,
    pub document: Option<InputDocument>,
}

/// 用内置注册表求解
pub fn solve(request: SolveRequest) -> Result<usize, SolveError> {
    solve_with(Registry::builtin(), request)
}

/// 用指定注册表求解（请求在此被消费）
pub fn solve_with(registry: &Registry, request: SolveRequest) -> Result<usize, SolveError> {
    registry.dispatch(
        request.question,
        request.ordinal,
        request.target.as_deref(),
        request.document.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingParameter;
    use crate::registry::{Question, Scanner, SubType};

    fn request(ordinal: Option<Ordinal>, target: Option<&str>, text: Option<&str>) -> SolveRequest {
        SolveRequest {
            question: 24,
            ordinal,
            target: target.map(str::to_string),
            document: text.map(InputDocument::from),
        }
    }

    #[test]
    fn full_request_is_solved() {
        assert_eq!(solve(request(Some(3), Some("a"), Some("aabcaaa"))), Ok(3));
    }

    #[test]
    fn bare_request_reports_missing_type() {
        assert_eq!(
            solve(request(None, None, None)),
            Err(SolveError::MissingParameter(MissingParameter::SubType))
        );
    }

    #[test]
    fn request_without_document_reports_missing_data() {
        assert_eq!(
            solve(request(Some(1), None, None)),
            Err(SolveError::MissingParameter(MissingParameter::Data))
        );
    }

    #[test]
    fn custom_registry_is_used() {
        const ONLY_24_ALT: &[Question] = &[Question {
            id: 24,
            subtypes: &[SubType { ordinal: 1, description: "alt", scanner: Scanner::AlternatingRun }],
        }];
        let registry = Registry::new(ONLY_24_ALT).unwrap();
        assert_eq!(solve_with(&registry, request(Some(1), None, Some("abab"))), Ok(4));
        assert_eq!(
            solve_with(&registry, request(Some(2), None, Some("abab"))),
            Err(SolveError::InvalidSubType { question: 24, ordinal: 2 })
        );
    }
}
