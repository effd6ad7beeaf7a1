//! 题目注册表：静态题目表 + 参数校验 + 分派到扫描器
//!
//! 题目表在编译期写死，进程内只读；题型编号必须从 1 开始连续，
//! `Registry::new` 会显式检查这一点，查找时按 `ordinal - 1` 下标取值。
use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::document::InputDocument;
use crate::error::{MissingParameter, RegistryError, SolveError};
use crate::scanner::{longest_alternating_run, longest_repeating_run, longest_run_of};

/// 题号
pub type QuestionId = i64;
/// 题型编号（题内从 1 开始）
pub type Ordinal = i64;

/// 扫描器种类（替代按名字动态查找函数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanner {
    /// 相同字符的最长连续段
    RepeatingRun,
    /// 相邻字符两两不同的最长连续段
    AlternatingRun,
    /// 指定字符的最长连续段
    RunOfChar,
}

impl Scanner {
    pub fn needs_target(self) -> bool {
        matches!(self, Scanner::RunOfChar)
    }

    /// 绑定目标字符；`RunOfChar` 要求恰好一个字符，其余扫描器忽略 `target`
    pub fn bind(self, target: Option<&str>) -> Result<BoundScanner, SolveError> {
        Ok(match self {
            Scanner::RepeatingRun => BoundScanner::RepeatingRun,
            Scanner::AlternatingRun => BoundScanner::AlternatingRun,
            Scanner::RunOfChar => BoundScanner::RunOfChar(single_char(target)?),
        })
    }
}

/// 参数已齐全、可直接运行的扫描器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundScanner {
    RepeatingRun,
    AlternatingRun,
    RunOfChar(char),
}

impl BoundScanner {
    pub fn run(self, data: &[char]) -> usize {
        match self {
            BoundScanner::RepeatingRun => longest_repeating_run(data),
            BoundScanner::AlternatingRun => longest_alternating_run(data),
            BoundScanner::RunOfChar(target) => longest_run_of(data, &target),
        }
    }
}

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubType {
    pub ordinal: Ordinal,
    pub description: &'static str,
    pub scanner: Scanner,
}

/// 题目及其题型列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub subtypes: &'static [SubType],
}

const QUESTION_24_TYPES: &[SubType] = &[
    SubType {
        ordinal: 1,
        description: "find the longest substring with the same letter",
        scanner: Scanner::RepeatingRun,
    },
    SubType {
        ordinal: 2,
        description: "find the longest substring with different letters",
        scanner: Scanner::AlternatingRun,
    },
    SubType {
        ordinal: 3,
        description: "find the longest substring with the same given letter",
        scanner: Scanner::RunOfChar,
    },
];

/// 内置题目表（按题号升序）
pub const BUILTIN_QUESTIONS: &[Question] = &[Question { id: 24, subtypes: QUESTION_24_TYPES }];

static BUILTIN: Registry = Registry { questions: BUILTIN_QUESTIONS };

/// 只读题目注册表
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    questions: &'static [Question],
}

impl Registry {
    /// 校验并构建注册表：题号不可重复，题型编号须为 1..=n 且按序排列
    pub fn new(questions: &'static [Question]) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for q in questions {
            if !seen.insert(q.id) {
                return Err(RegistryError::DuplicateQuestion(q.id));
            }
            for (position, st) in q.subtypes.iter().enumerate() {
                let expected = position as Ordinal + 1;
                if st.ordinal != expected {
                    return Err(RegistryError::NonContiguousOrdinals {
                        question: q.id,
                        position,
                        expected,
                        found: st.ordinal,
                    });
                }
            }
        }
        Ok(Self { questions })
    }

    /// 进程级内置注册表（表内容由单元测试保证满足 `new` 的约束）
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    fn question(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn is_question_implemented(&self, id: QuestionId) -> bool {
        self.question(id).is_some()
    }

    /// 已实现题号，顺序与题目表一致
    pub fn implemented_questions(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id).collect()
    }

    pub fn is_subtype_valid(&self, id: QuestionId, ordinal: Ordinal) -> bool {
        match self.question(id) {
            Some(q) => 0 < ordinal && ordinal <= q.subtypes.len() as Ordinal,
            None => false,
        }
    }

    pub fn subtype(&self, id: QuestionId, ordinal: Ordinal) -> Option<&'static SubType> {
        if !self.is_subtype_valid(id, ordinal) { return None; }
        let st = self.question(id)?.subtypes.get((ordinal - 1) as usize)?;
        debug_assert_eq!(st.ordinal, ordinal);
        Some(st)
    }

    /// 题型编号 → 描述；未实现的题目返回空表
    pub fn subtypes(&self, id: QuestionId) -> BTreeMap<Ordinal, &'static str> {
        self.question(id)
            .map(|q| q.subtypes.iter().map(|st| (st.ordinal, st.description)).collect())
            .unwrap_or_default()
    }

    /// 校验参数并调用对应扫描器
    ///
    /// 校验顺序：题号 → 题型缺失 → 题型范围 → 数据 → 目标字符。
    pub fn dispatch(
        &self,
        id: QuestionId,
        ordinal: Option<Ordinal>,
        target: Option<&str>,
        data: Option<&InputDocument>,
    ) -> Result<usize, SolveError> {
        if !self.is_question_implemented(id) {
            return Err(SolveError::NotImplemented { question: id });
        }
        let ordinal = ordinal.ok_or(SolveError::MissingParameter(MissingParameter::SubType))?;
        let subtype = self
            .subtype(id, ordinal)
            .ok_or(SolveError::InvalidSubType { question: id, ordinal })?;
        // 所有扫描器都需要输入数据
        let data = data.ok_or(SolveError::MissingParameter(MissingParameter::Data))?;
        let scanner = subtype.scanner.bind(target)?;

        let result = scanner.run(data.chars());
        debug!(question = id, ordinal, ?scanner, len = data.len(), result, "dispatched");
        Ok(result)
    }
}

/// 目标字符必须恰好是一个字符
fn single_char(target: Option<&str>) -> Result<char, SolveError> {
    let target = target.unwrap_or_default();
    let mut it = target.chars();
    match (it.next(), it.next()) {
        (None, _) => Err(SolveError::MissingParameter(MissingParameter::Target)),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => Err(SolveError::InvalidTarget { target: target.to_string() }),
    }
}
