use chrono::NaiveDateTime;

/// 记录时间戳在线路上的固定字面形式（不带时区）。
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// # Summary
/// 将线路时间戳转换为 Unix 纪元毫秒。
///
/// # Logic
/// 1. 按 `TIMESTAMP_FORMAT` 解析。
/// 2. 将解析结果按同一格式重新格式化，必须与输入逐字节一致；
///    `chrono` 本身接受省略补零、带符号年份、前导空白和两位年份，这些都视为非法。
/// 3. 墙上时间直接按 UTC 读取，不做时区换算。
///
/// # Arguments
/// * `timestamp`: 形如 `2024-01-01T08:00:00` 的文本。
///
/// # Returns
/// 纪元毫秒；文本不符合固定形式时返回 `None`。
pub fn epoch_millis(timestamp: &str) -> Option<i64> {
    let time = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
    if time.format(TIMESTAMP_FORMAT).to_string() != timestamp {
        return None;
    }
    Some(time.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_millis_reads_wall_clock_as_utc() {
        assert_eq!(epoch_millis("1970-01-01T00:00:00"), Some(0));
        assert_eq!(epoch_millis("2024-01-01T09:00:00"), Some(1_704_099_600_000));
        assert_eq!(epoch_millis("2024-01-01T13:00:00"), Some(1_704_114_000_000));
    }

    #[test]
    fn test_epoch_millis_rejects_other_forms() {
        assert_eq!(epoch_millis(""), None);
        assert_eq!(epoch_millis("2024-01-01"), None);
        assert_eq!(epoch_millis("2024-01-01 09:00:00"), None);
        assert_eq!(epoch_millis("2024-01-01T09:00:00Z"), None);
        assert_eq!(epoch_millis("2024-13-01T09:00:00"), None);
        // chrono 宽松接受、但不属于固定形式的写法
        assert_eq!(epoch_millis("2024-1-1T9:0:0"), None);
        assert_eq!(epoch_millis("+2024-01-01T09:00:00"), None);
        assert_eq!(epoch_millis(" 2024-01-01T09:00:00"), None);
        assert_eq!(epoch_millis("24-01-01T09:00:00"), None);
    }
}
