//! 考试字符串题求解核心库
//!
//! 组成：
//! - 扫描器：最长连续段的三种统计（相同 / 交替 / 指定字符），纯函数。
//! - 注册表：静态题目表，负责校验题号、题型、参数并分派到扫描器。
//! - 输入、请求与输出类型：供 CLI 组装一次调用并格式化结果。

mod document;
mod error;
mod registry;
mod request;
mod scanner;
mod types;

pub use document::InputDocument;
pub use error::{MissingParameter, RegistryError, SolveError};
pub use registry::{BoundScanner, Ordinal, Question, QuestionId, Registry, Scanner, SubType, BUILTIN_QUESTIONS};
pub use request::{solve, solve_with, SolveRequest};
pub use scanner::{longest_alternating_run, longest_repeating_run, longest_run_of};
pub use types::{capitalize, AvailableReport, SolveReport, TypesReport};
