//! 公共输出类型（`--json` 模式下直接序列化）
use serde::Serialize;
use std::collections::BTreeMap;

use crate::registry::{Ordinal, QuestionId, Registry};

/// `solve` 的结果
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub question: QuestionId,
    #[serde(rename = "type")]
    pub ordinal: Ordinal,
    pub result: usize,
}

/// `available` 的结果
#[derive(Debug, Clone, Serialize)]
pub struct AvailableReport {
    pub questions_available: Vec<QuestionId>,
}

/// `types` 的结果；题型编号作为 JSON 键
#[derive(Debug, Clone, Serialize)]
pub struct TypesReport {
    pub question: QuestionId,
    pub types_available: BTreeMap<Ordinal, String>,
}

impl AvailableReport {
    pub fn from_registry(registry: &Registry) -> Self {
        Self { questions_available: registry.implemented_questions() }
    }

    /// 纯文本形式：`24` / `24, 25`
    pub fn to_line(&self) -> String {
        self.questions_available.iter().map(|q| q.to_string()).collect::<Vec<_>>().join(", ")
    }
}

impl TypesReport {
    pub fn from_registry(registry: &Registry, question: QuestionId) -> Self {
        let types_available = registry
            .subtypes(question)
            .into_iter()
            .map(|(ordinal, desc)| (ordinal, capitalize(desc)))
            .collect();
        Self { question, types_available }
    }

    /// 纯文本形式：每行 `<编号> <描述>`；为空时返回 None
    pub fn to_lines(&self) -> Option<Vec<String>> {
        if self.types_available.is_empty() { return None; }
        Some(self.types_available.iter().map(|(k, v)| format!("{k} {v}")).collect())
    }
}

/// 首字母大写、其余小写
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
