//! 最长连续段扫描（线性单遍）
//!
//! 三种相邻规则共用同一套“当前段长度 + 历史最大值”的滑动计数：
//! - 相同：每个元素等于前一个元素；
//! - 交替：每个元素不等于前一个元素；
//! - 指定字符：每个元素都等于给定目标。
//!
//! 段只在“断开”时提交，因此扫描结束后必须再把最后一段并入结果。

/// 最长的“相邻元素全部相同”连续段长度；空序列返回 0
pub fn longest_repeating_run<T: PartialEq>(data: &[T]) -> usize {
    longest_adjacent_run(data, |prev, cur| cur == prev)
}

/// 最长的“相邻元素两两不同”连续段长度；空序列返回 0
pub fn longest_alternating_run<T: PartialEq>(data: &[T]) -> usize {
    longest_adjacent_run(data, |prev, cur| cur != prev)
}

/// 最长的“只由 `target` 组成”的连续段长度
pub fn longest_run_of<T: PartialEq>(data: &[T], target: &T) -> usize {
    let mut cur_len = 0usize;
    let mut max_len = 0usize;
    for item in data {
        if item == target {
            cur_len += 1;
        } else {
            max_len = max_len.max(cur_len);
            cur_len = 0;
        }
    }
    max_len.max(cur_len)
}

/// 相邻比较型扫描：`extends(prev, cur)` 为真则延长当前段，否则提交并从 1 重新计数
fn longest_adjacent_run<T, F>(data: &[T], extends: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if data.is_empty() { return 0; }
    let mut cur_len = 1usize;
    let mut max_len = 0usize;
    for pair in data.windows(2) {
        if extends(&pair[0], &pair[1]) {
            cur_len += 1;
        } else {
            max_len = max_len.max(cur_len);
            cur_len = 1;
        }
    }
    max_len.max(cur_len)
}
