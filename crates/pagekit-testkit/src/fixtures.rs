use serde_json::{json, Value};

/// Simple data object with basic scalar values
pub fn simple_data() -> Value {
    json!({
        "title": "My Page",
        "count": 42,
        "ratio": 0.5,
        "enabled": true,
        "subtitle": null
    })
}

/// Nested data object with objects and arrays
pub fn nested_data() -> Value {
    json!({
        "page": {
            "title": "Scenario Notes",
            "lang": "en"
        },
        "comments": [
            { "author": "alice", "text": "First!" },
            { "author": "bob", "text": "Looks <b>bold</b>" }
        ]
    })
}
