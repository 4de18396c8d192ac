//! Snapshot tests for the generated TypeScript module.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use tsbind_codegen::{ModelIndex, ReferenceResolver};
use tsbind_codegen_typescript::Generator;
use tsbind_ir::{
    API_CONTROLLER_ATTRIBUTE, Attribute, ROUTE_ATTRIBUTE, SourceClass, SourceEnum, SourceMethod,
    SourceModule,
};
use tsbind_manifest::{Templates, parse_module};

fn route(value: &str) -> Attribute {
    Attribute::new(ROUTE_ATTRIBUTE).arg(value)
}

/// One enum, one class and a controller with a single routed endpoint.
fn orders_model() -> Vec<SourceModule> {
    vec![
        SourceModule::new()
            .enumeration(
                SourceEnum::new("Status")
                    .member("Active", "0")
                    .member("Inactive", "1"),
            )
            .class(
                SourceClass::new("Order")
                    .property("Id", "int")
                    .property("Status", "Status"),
            )
            .class(
                SourceClass::new("OrdersController")
                    .with_attribute(Attribute::new(API_CONTROLLER_ATTRIBUTE))
                    .with_attribute(route("\"[controller]\""))
                    .method(
                        SourceMethod::new("GetById", "Task<ActionResult<Order>>")
                            .param("int")
                            .attribute(route("\"{id}\"")),
                    ),
            ),
    ]
}

fn generate(modules: &[SourceModule], include: &[&str], templates: &Templates) -> String {
    let index = ModelIndex::new(modules);
    let resolution = ReferenceResolver::new(&index)
        .resolve(include.iter().copied())
        .expect("Resolution failed");
    Generator::new(&index, &resolution, templates)
        .expect("Generator setup failed")
        .render()
}

#[test]
fn test_orders_scenario() {
    let output = generate(&orders_model(), &[], &Templates::builtin());
    insta::assert_snapshot!("orders_scenario", output);
}

#[test]
fn test_orders_scenario_minimal_templates() {
    let templates = Templates::new(
        "export namespace {CONTROLLER_SHORT_NAME}Api {\n{API_FUNCTIONS}\n}\n",
        "\t// {ENDPOINT_NAME} {ENDPOINT_ROUTE} {ENDPOINT_PARAM_TYPE_NAME} -> {ENDPOINT_RESPONSE_TYPE_NAME}\n",
    );

    let output = generate(&orders_model(), &[], &templates);

    assert_eq!(
        output,
        "/* This file was automatically generated by tsbind */\n\
         \n\
         export enum Status {\n\
         \tActive = 0,\n\
         \tInactive = 1,\n\
         }\n\
         \n\
         export class Order {\n\
         \tpublic Id?: number;\n\
         \tpublic Status?: Status;\n\
         }\n\
         \n\
         export namespace OrdersApi {\n\
         \t// GetById Orders/{id} int -> Order\n\
         }\n"
    );
}

#[test]
fn test_output_is_idempotent() {
    let modules = orders_model();
    let templates = Templates::builtin();

    let first = generate(&modules, &["Status"], &templates);
    let second = generate(&modules, &["Status"], &templates);

    assert_eq!(first, second);
}

#[test]
fn test_include_list_orders_sections() {
    // Seeds come before controller-derived names
    let output = generate(&orders_model(), &["Status"], &Templates::builtin());

    let status = output.find("export enum Status").unwrap();
    let order = output.find("export class Order").unwrap();
    let client = output.find("export namespace OrdersApi").unwrap();
    assert!(status < order && order < client);
}

#[test]
fn test_multiple_controllers_and_modules() {
    let shared = parse_module(
        r#"{
            "enums": [
                { "name": "Role", "members": [{ "name": "Admin", "value": "1" }, { "name": "User", "value": "2" }] }
            ],
            "classes": [
                {
                    "name": "UserDto",
                    "fields": [{ "name": "_audit", "typeName": "AuditInfo" }],
                    "properties": [
                        { "name": "Name", "typeName": "string" },
                        { "name": "Roles", "typeName": "List<Role>" },
                        { "name": "Age", "typeName": "int?" }
                    ]
                },
                { "name": "AuditInfo", "properties": [{ "name": "At", "typeName": "DateTime" }] },
                { "name": "LookupRequest", "properties": [{ "name": "Id", "typeName": "Guid" }] }
            ]
        }"#,
        "shared.json",
    )
    .unwrap();

    let api = parse_module(
        r#"{
            "classes": [
                {
                    "name": "UsersController",
                    "attributes": [
                        { "name": "ApiController" },
                        { "name": "Route", "arguments": [{ "value": "\"api/[controller]\"" }] }
                    ],
                    "methods": [
                        {
                            "name": "Lookup",
                            "returnTypeName": "Task<ActionResult<UserDto>>",
                            "parameterTypes": ["LookupRequest"],
                            "attributes": [{ "name": "Route", "arguments": [{ "value": "\"lookup\"" }] }]
                        },
                        {
                            "name": "Count",
                            "returnTypeName": "int",
                            "attributes": [{ "name": "Route", "arguments": [{ "value": "\"count\"" }] }]
                        },
                        {
                            "name": "Rename",
                            "returnTypeName": "ActionResult<UserDto>",
                            "parameterTypes": ["UserDto", "string"],
                            "attributes": [
                                { "name": "HttpPost" },
                                { "name": "Route", "arguments": [{ "value": "\"rename\"" }] }
                            ]
                        }
                    ]
                },
                {
                    "name": "InternalController",
                    "attributes": [{ "name": "ApiController" }],
                    "methods": [
                        {
                            "name": "Reset",
                            "returnTypeName": "void",
                            "parameterTypes": ["int"],
                            "attributes": [{ "name": "Route", "arguments": [{ "value": "\"reset\"" }] }]
                        }
                    ]
                }
            ]
        }"#,
        "api.json",
    )
    .unwrap();

    let templates = Templates::new(
        "export namespace {CONTROLLER_SHORT_NAME}Api {\n{API_FUNCTIONS}\n}\n",
        "\texport const {ENDPOINT_NAME} = (request: {ENDPOINT_PARAM_TYPE_NAME}) => post<{ENDPOINT_RESPONSE_TYPE_NAME}>(\"{ENDPOINT_ROUTE}\", request);\n",
    );
    let output = generate(&[shared, api], &["Role"], &templates);

    insta::assert_snapshot!("multiple_controllers", output);
}
