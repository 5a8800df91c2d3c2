//! Conditional rendering tests for the template engine

use super::*;
use serde_json::json;

#[test]
fn test_if_renders_body_when_truthy() {
    let data = json!({ "logged_in": true, "name": "alice" });
    let result = render("{{if logged_in}}Hello, {{name}}{{/if}}", &data).unwrap();
    assert_eq!(result, "Hello, alice");
}

#[test]
fn test_if_skips_body_when_false() {
    let data = json!({ "logged_in": false });
    let result = render("{{if logged_in}}secret{{/if}}public", &data).unwrap();
    assert_eq!(result, "public");
}

#[test]
fn test_if_missing_key_is_falsy() {
    let result = render("{{if missing}}never{{/if}}", &json!({})).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_if_null_is_falsy() {
    let data = json!({ "subtitle": null });
    let result = render("{{if subtitle}}sub{{/if}}", &data).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_if_empty_string_is_falsy() {
    let data = json!({ "note": "" });
    let result = render("{{if note}}has note{{/if}}", &data).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_if_empty_array_is_falsy() {
    let data = json!({ "comments": [] });
    let result = render("{{if comments}}has comments{{/if}}", &data).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_if_nonempty_array_is_truthy() {
    let data = json!({ "comments": [1] });
    let result = render("{{if comments}}has comments{{/if}}", &data).unwrap();
    assert_eq!(result, "has comments");
}

#[test]
fn test_if_zero_is_falsy() {
    let data = json!({ "count": 0 });
    let result = render("{{if count}}nonzero{{/if}}", &data).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_if_nested_key() {
    let data = json!({ "page": { "draft": true } });
    let result = render("{{if page.draft}}DRAFT{{/if}}", &data).unwrap();
    assert_eq!(result, "DRAFT");
}

#[test]
fn test_if_inside_each() {
    let data = json!({
        "comments": [
            { "author": "alice", "pinned": true },
            { "author": "bob", "pinned": false }
        ]
    });
    let template = "{{each comments |c|}}{{if c.pinned}}* {{/if}}{{c.author}} {{/each}}";
    let result = render(template, &data).unwrap();
    assert_eq!(result, "* alice bob ");
}

#[test]
fn test_each_inside_if() {
    let data = json!({ "show": true, "tags": ["a", "b"] });
    let template = "{{if show}}{{each tags |t|}}{{t}}{{/each}}{{/if}}";
    let result = render(template, &data).unwrap();
    assert_eq!(result, "ab");
}
