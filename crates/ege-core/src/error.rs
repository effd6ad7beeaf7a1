//! 错误类型（核心库只返回错误，不负责打印/退出）
use std::fmt;
use thiserror::Error;

use crate::registry::{Ordinal, QuestionId};

/// 缺失的调用参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParameter {
    /// 未提供题型编号
    SubType,
    /// 未提供输入数据（文件）
    Data,
    /// 未提供（或为空的）目标字符
    Target,
}

impl fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MissingParameter::SubType => "No type provided.",
            MissingParameter::Data => "No file provided.",
            MissingParameter::Target => "No character to count provided.",
        };
        f.write_str(msg)
    }
}

/// 求解失败；每一种都终止本次调用
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("Can't solve this question.")]
    NotImplemented { question: QuestionId },

    #[error("{0}")]
    MissingParameter(MissingParameter),

    #[error("Can't solve question with given type.")]
    InvalidSubType { question: QuestionId, ordinal: Ordinal },

    #[error("Character to count must be a single character, got {target:?}.")]
    InvalidTarget { target: String },
}

/// 静态题目表不满足约束
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("question {0} is registered more than once")]
    DuplicateQuestion(QuestionId),

    #[error("question {question}: type at position {position} has ordinal {found}, expected {expected}")]
    NonContiguousOrdinals {
        question: QuestionId,
        position: usize,
        expected: Ordinal,
        found: Ordinal,
    },
}
