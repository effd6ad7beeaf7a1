//! 输入文档：一次性整读进内存的不可变字符序列
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 单次调用读取的文本；空文档合法，所有扫描结果为 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDocument {
    chars: Vec<char>,
}

impl InputDocument {
    /// 从文件整读（需为 UTF-8 文本）
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        Self::from_reader(BufReader::new(file)).with_context(|| format!("read {}", path.display()))
    }

    /// 从任意 reader 整读；按文本模式统一换行（`\r\n` 与单独的 `\r` 都视为 `\n`）
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf).context("input is not valid UTF-8 text")?;
        Ok(Self::from(normalize_newlines(&buf).as_str()))
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for InputDocument {
    fn from(text: &str) -> Self {
        Self { chars: text.chars().collect() }
    }
}

/// 先合并 `\r\n`，再把剩余的 `\r` 改为 `\n`
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
