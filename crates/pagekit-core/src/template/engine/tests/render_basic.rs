//! Basic rendering tests for the template engine

use super::*;
use pagekit_testkit::{nested_data, simple_data};
use serde_json::json;

#[test]
fn test_render_simple_placeholder() {
    let data = simple_data();
    let result = render("Title: {{title}}", &data).unwrap();
    assert_eq!(result, "Title: My Page");
}

#[test]
fn test_render_placeholder_with_spaces() {
    let data = simple_data();
    let result = render("Title: {{ title }}", &data).unwrap();
    assert_eq!(result, "Title: My Page");
}

#[test]
fn test_render_placeholder_with_many_spaces() {
    let data = simple_data();
    let result = render("Title: {{  title  }}", &data).unwrap();
    assert_eq!(result, "Title: My Page");
}

#[test]
fn test_render_nested_key() {
    let data = nested_data();
    let result = render("Page: {{page.title}}", &data).unwrap();
    assert_eq!(result, "Page: Scenario Notes");
}

#[test]
fn test_render_integer_value() {
    let data = simple_data();
    let result = render("Count: {{count}}", &data).unwrap();
    assert_eq!(result, "Count: 42");
}

#[test]
fn test_render_float_value() {
    let data = simple_data();
    let result = render("Ratio: {{ratio}}", &data).unwrap();
    assert_eq!(result, "Ratio: 0.5");
}

#[test]
fn test_render_boolean_value() {
    let data = simple_data();
    let result = render("Enabled: {{enabled}}", &data).unwrap();
    assert_eq!(result, "Enabled: true");
}

#[test]
fn test_render_null_as_empty() {
    let data = simple_data();
    let result = render("Subtitle: [{{subtitle}}]", &data).unwrap();
    assert_eq!(result, "Subtitle: []");
}

#[test]
fn test_render_multiple_placeholders() {
    let data = nested_data();
    let result = render("{{page.title}} ({{page.lang}})", &data).unwrap();
    assert_eq!(result, "Scenario Notes (en)");
}

#[test]
fn test_render_no_placeholders() {
    // Literal-only templates pass through unchanged regardless of data
    let template = "This is plain text with no placeholders.";
    let result = render(template, &json!({})).unwrap();
    assert_eq!(result, template);

    let result = render(template, &nested_data()).unwrap();
    assert_eq!(result, template);
}

#[test]
fn test_render_does_not_escape_values() {
    // Escaping is the caller's responsibility
    let data = json!({ "name": "<b>" });
    let result = render("Hello, {{name}}", &data).unwrap();
    assert_eq!(result, "Hello, <b>");
}

#[test]
fn test_render_hello_world() {
    let result = render("Hello, {{name}}", &json!({ "name": "World" })).unwrap();
    assert_eq!(result, "Hello, World");
}

#[test]
fn test_compiled_template_is_reusable() {
    let template = Template::compile("Hi {{name}}").unwrap();
    assert_eq!(template.render(&json!({ "name": "alice" })).unwrap(), "Hi alice");
    assert_eq!(template.render(&json!({ "name": "bob" })).unwrap(), "Hi bob");
}

#[test]
fn test_compilation_is_idempotent() {
    let first = Template::compile("{{each comments |c|}}{{c.author}} {{/each}}").unwrap();
    let second = Template::compile("{{each comments |c|}}{{c.author}} {{/each}}").unwrap();
    assert_eq!(first, second);

    let data = nested_data();
    assert_eq!(first.render(&data).unwrap(), second.render(&data).unwrap());
}

#[test]
fn test_render_empty_template() {
    let result = render("", &json!({})).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_render_single_brace_is_literal() {
    let data = simple_data();
    let result = render("a {b} c {{title}}", &data).unwrap();
    assert_eq!(result, "a {b} c My Page");
}
