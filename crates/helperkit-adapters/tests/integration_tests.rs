//! Integration tests for the debug and replace helpers wired to real adapters.

use helperkit_adapters::{Fixture, InMemoryRegistry, PlainTextDumper, RecordObject};
use helperkit_core::{
    application::{ApplicationError, HelperService},
    domain::{HostObject, PropertyError},
    error::HelperError,
    prelude::*,
};
use pretty_assertions::assert_eq;

fn debug_helper() -> DebugHelper {
    let registry = InMemoryRegistry::with_builtin().unwrap();
    DebugHelper::new(IntrospectionReporter::new(
        Box::new(registry),
        Box::new(PlainTextDumper::new()),
    ))
}

fn render(nodes: Vec<RenderNode>, scope: &Scope) -> String {
    let mut helper = debug_helper();
    helper.set_child_nodes(nodes);
    helper.render(scope).unwrap()
}

#[test]
fn empty_children_render_only_delimiters() {
    assert_eq!(render(vec![], &Scope::new()), "<pre></pre>");
}

#[test]
fn string_variable_report() {
    let scope = Scope::new().with_variable("form", Value::from_iter([("title", "Hello")]));

    assert_eq!(
        render(vec![RenderNode::variable("form.title")], &scope),
        "<pre>[VARIABLE ACCESSORS]

Path: {form.title}
Value type: string
Dump of variable \"form.title\"
string 'Hello' (5 chars)</pre>"
    );
}

#[test]
fn object_variable_lists_accessible_properties() {
    let post = RecordObject::new("Post")
        .with_property("uid", 7)
        .with_property("title", "Hello")
        .with_hidden("password", "x");
    let scope = Scope::new().with_variable("post", post.into_value());

    assert_eq!(
        render(
            vec![
                RenderNode::variable("post"),
                RenderNode::variable("post.password"),
            ],
            &scope
        ),
        "<pre>[VARIABLE ACCESSORS]

Path: {post}
Value type: object
Accessible properties on {post}:
   {post.uid} (integer)
   {post.title} (string)

Path: {post.password}
Value type: UNDEFINED/INACCESSIBLE</pre>"
    );
}

#[test]
fn helper_section_describes_replace_helper() {
    let reference = ChildHelperReference::new(HelperId::new("format.replace"))
        .with_argument("substring", "a")
        .with_expression("content", "{post.title}");

    let out = render(vec![RenderNode::helper(reference)], &Scope::new());

    let class = out.find("[CLASS DOC]").unwrap();
    let arguments = out.find("[ARGUMENTS]").unwrap();
    let current = out.find("[CURRENT ARGUMENTS]").unwrap();
    let render_doc = out.find("[RENDER METHOD DOC]").unwrap();
    assert!(class < arguments && arguments < current && current < render_doc);

    assert!(out.contains("   substring => array(5 items)"));
    assert!(out.contains("      required => boolean true"));
    assert!(out.contains("[CURRENT ARGUMENTS]\narray(2 items)\n   substring => string 'a' (1 chars)"));
    assert!(out.contains("   content => string '{post.title}' (12 chars)"));
    assert!(!out.contains("[VARIABLE ACCESSORS]"));
}

#[test]
fn debug_helper_can_describe_itself() {
    let out = render(
        vec![RenderNode::helper(ChildHelperReference::new(HelperId::new("debug")))],
        &Scope::new(),
    );

    assert!(out.contains("[ARGUMENTS]\narray(0 items)"));
    assert!(out.contains("&lt;debug&gt;"));
    assert!(!out.contains("<debug>"));
}

#[test]
fn helpers_come_before_variables_in_encounter_order() {
    let scope = Scope::new().with_variable("n", 1);
    let out = render(
        vec![
            RenderNode::variable("n"),
            RenderNode::text("plain text node"),
            RenderNode::helper(ChildHelperReference::new(HelperId::new("debug"))),
        ],
        &scope,
    );

    assert!(out.find("[CLASS DOC]").unwrap() < out.find("[VARIABLE ACCESSORS]").unwrap());
    assert!(!out.contains("plain text node"));
}

#[test]
fn unregistered_child_helper_fails() {
    let mut helper = debug_helper();
    helper.set_child_nodes([RenderNode::helper(ChildHelperReference::new(HelperId::new(
        "custom.unknown",
    )))]);

    let err = helper.render(&Scope::new()).unwrap_err();
    assert_eq!(
        err,
        HelperError::Application(ApplicationError::HelperNotRegistered {
            id: "custom.unknown".into()
        })
    );
}

#[derive(Debug)]
struct Exploding;

impl HostObject for Exploding {
    fn type_name(&self) -> &str {
        "Exploding"
    }

    fn gettable_property_names(&self) -> Result<Vec<String>, PropertyError> {
        Err(PropertyError::failure("reflection unavailable"))
    }

    fn property(&self, name: &str) -> Result<Value, PropertyError> {
        Err(PropertyError::not_accessible(name, "Exploding"))
    }
}

#[test]
fn host_failure_propagates_from_nested_dump() {
    let scope = Scope::new().with_variable(
        "list",
        Value::from(vec![Value::object(Exploding)]),
    );
    let mut helper = debug_helper();
    helper.set_child_nodes([RenderNode::variable("list")]);

    let err = helper.render(&scope).unwrap_err();
    assert!(matches!(
        err,
        HelperError::Application(ApplicationError::IntrospectionFailure { .. })
    ));
}

#[test]
fn fixture_drives_full_report() {
    let fixture = Fixture::from_json(
        r#"{
            "scope": { "post": { "$object": "Post", "properties": { "title": "Hi" } } },
            "nodes": [ { "variable": "post.title" }, { "variable": "post.missing.deep" } ]
        }"#,
    )
    .unwrap();

    let out = render(fixture.nodes, &fixture.scope);
    assert_eq!(
        out,
        "<pre>[VARIABLE ACCESSORS]

Path: {post.title}
Value type: string
Dump of variable \"post.title\"
string 'Hi' (2 chars)

Path: {post.missing.deep}
Value type: UNDEFINED/INACCESSIBLE</pre>"
    );
}

#[test]
fn custom_options_change_delimiters_and_depth() {
    let registry = InMemoryRegistry::with_builtin().unwrap();
    let reporter = IntrospectionReporter::new(Box::new(registry), Box::new(PlainTextDumper::new()))
        .with_options(ReportOptions {
            open_delimiter: "```\n".into(),
            close_delimiter: "\n```".into(),
            dump_depth: 0,
        });
    let mut helper = DebugHelper::new(reporter);
    helper.set_child_nodes([RenderNode::variable("tags")]);

    let scope = Scope::new().with_variable("tags", Value::from(vec![Value::from("a")]));
    let out = helper.render(&scope).unwrap();

    assert!(out.starts_with("```\n[VARIABLE ACCESSORS]"));
    assert!(out.contains("array(1 items) ..."));
    assert!(out.ends_with("\n```"));
}

#[test]
fn replace_helper_through_service() {
    let service = HelperService::new(Box::new(InMemoryRegistry::with_builtin().unwrap()));
    let ids: Vec<_> = service
        .list()
        .unwrap()
        .iter()
        .map(|d| d.id().to_string())
        .collect();
    assert_eq!(ids, ["debug", "format.replace"]);

    let helper = ReplaceHelper::new().unwrap();
    let supplied: Arguments = [
        ("substring".to_string(), Value::from("a")),
        ("replacement".to_string(), Value::from("X")),
        ("caseSensitive".to_string(), Value::from(false)),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        helper.render(&supplied, || "aAbBaA".to_string()).unwrap(),
        "XXbBXX"
    );
}
