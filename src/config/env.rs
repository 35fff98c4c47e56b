use std::time::Duration;

pub fn addr() -> String {
    get_key_or("addr", "127.0.0.1:8080")
}

pub fn get_key_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// A millisecond duration from `key`, `default` when absent or unparsable.
pub fn millis(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}

pub fn seconds(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        assert_eq!(get_key_or("BYTE_ARENA_UNSET_KEY", "x"), "x");
        assert_eq!(millis("BYTE_ARENA_UNSET_MS", 250), Duration::from_millis(250));
        assert_eq!(seconds("BYTE_ARENA_UNSET_SECS", 60), 60);
    }

    #[test]
    fn ignores_garbage_values() {
        std::env::set_var("BYTE_ARENA_BAD_MS", "soon");
        assert_eq!(millis("BYTE_ARENA_BAD_MS", 10), Duration::from_millis(10));
        std::env::set_var("BYTE_ARENA_GOOD_MS", " 40 ");
        assert_eq!(millis("BYTE_ARENA_GOOD_MS", 10), Duration::from_millis(40));
    }
}
