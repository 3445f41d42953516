//! JSON 字段防御性读取：按点分路径取值，路径缺失或类型不符一律回退为零值。

use serde_json::Value;

/// 按点分路径（如 `novel.data`）逐层取值，任何一层缺失返回 `None`。
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// 路径处的字符串，缺失或类型不符返回空串。数字字段容忍为其十进制表示
/// （部分接口会把 id 输出为数字）。
pub fn string_at(value: &Value, path: &str) -> String {
    match get_path(value, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// 路径处的整数，缺失或类型不符返回 0。容忍字符串形式的数字。
pub fn int_at(value: &Value, path: &str) -> i64 {
    match get_path(value, path) {
        Some(v) => v
            .as_i64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
            .unwrap_or(0),
        None => 0,
    }
}

/// 路径处的字符串数组，缺失或非数组返回空 Vec。保持元素顺序（含重复），
/// 非字符串元素投影为其字符串值。
pub fn strings_at(value: &Value, path: &str) -> Vec<String> {
    match get_path(value, path) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => String::new(),
            })
            .collect(),
        _ => Vec::new(),
    }
}
