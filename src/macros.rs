/// Builds a `JsonMap` from `key => value` pairs, e.g. crud conditions or a
/// challenge patch: `json_map!("email" => email, "points" => 150)`.
#[macro_export]
macro_rules! json_map {
    () => {
        serde_json::Map::new()
    };
    ($($key: expr => $value: expr),+ $(,)?) => {{
        let mut mp = serde_json::Map::new();
        $(mp.insert($key.into(), serde_json::json!($value));)+
        mp
    }};
}
