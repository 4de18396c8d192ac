//! API client blocks rendered from controller classes.

use tsbind_codegen::{Diagnostic, Substitutions, Template, TypeNameError, strip_return_type_name};
use tsbind_core::{strip_quotes, strip_suffix};
use tsbind_ir::{CONTROLLER_PLACEHOLDER, SourceClass, SourceMethod};
use tsbind_manifest::Templates;

/// Suffix removed from controller class names to get the short name.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Controller template: the controller short name.
pub const CONTROLLER_SHORT_NAME: &str = "CONTROLLER_SHORT_NAME";
/// Controller template: the rendered endpoint functions.
pub const API_FUNCTIONS: &str = "API_FUNCTIONS";
/// Endpoint template: the method name.
pub const ENDPOINT_NAME: &str = "ENDPOINT_NAME";
/// Endpoint template: the composed route.
pub const ENDPOINT_ROUTE: &str = "ENDPOINT_ROUTE";
/// Endpoint template: the first parameter's source type name.
pub const ENDPOINT_PARAM_TYPE_NAME: &str = "ENDPOINT_PARAM_TYPE_NAME";
/// Endpoint template: the unwrapped return type name.
pub const ENDPOINT_RESPONSE_TYPE_NAME: &str = "ENDPOINT_RESPONSE_TYPE_NAME";

const PHASE: &str = "emit";

/// One routed, parameterized controller method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub route: String,
    /// Source type name of the first parameter, not translated.
    pub param_type: String,
    pub response_type: String,
}

impl Endpoint {
    /// Render through the endpoint template, trailing newlines removed.
    pub fn render(&self, template: &str) -> String {
        let substitutions = Substitutions::new()
            .set(ENDPOINT_NAME, &self.name)
            .set(ENDPOINT_ROUTE, &self.route)
            .set(ENDPOINT_PARAM_TYPE_NAME, &self.param_type)
            .set(ENDPOINT_RESPONSE_TYPE_NAME, &self.response_type);
        Template::new(template)
            .render(&substitutions)
            .trim_end_matches('\n')
            .to_string()
    }
}

/// The client functions generated for one controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    pub controller: String,
    pub short_name: String,
    pub route: String,
    pub endpoints: Vec<Endpoint>,
}

impl ApiClient {
    /// Build the client for `controller`.
    ///
    /// Returns `Ok(None)` when the controller has no usable route. Methods
    /// without parameters or without their own route are left out. Every skip
    /// is recorded in `diagnostics`.
    pub fn from_controller(
        controller: &SourceClass,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<Self>, TypeNameError> {
        let short_name = strip_suffix(&controller.name, CONTROLLER_SUFFIX).to_string();

        let Some(route_template) = controller.route() else {
            diagnostics.push(
                Diagnostic::info(PHASE, "controller has no route, no client generated")
                    .at(&controller.name),
            );
            return Ok(None);
        };
        let route = controller_route(route_template, &short_name);

        let mut endpoints = Vec::new();
        for method in &controller.methods {
            if let Some(endpoint) = Self::endpoint(controller, method, &route, diagnostics)? {
                endpoints.push(endpoint);
            }
        }

        Ok(Some(Self {
            controller: controller.name.clone(),
            short_name,
            route,
            endpoints,
        }))
    }

    fn endpoint(
        controller: &SourceClass,
        method: &SourceMethod,
        route: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<Endpoint>, TypeNameError> {
        let location = format!("{}.{}", controller.name, method.name);

        let Some(param_type) = method.parameter_types.first() else {
            diagnostics
                .push(Diagnostic::info(PHASE, "method has no parameters, skipped").at(location));
            return Ok(None);
        };
        let Some(method_route) = method.route() else {
            diagnostics.push(Diagnostic::info(PHASE, "method has no route, skipped").at(location));
            return Ok(None);
        };

        Ok(Some(Endpoint {
            name: method.name.clone(),
            route: compose_route(route, method_route),
            param_type: param_type.clone(),
            response_type: strip_return_type_name(&method.return_type_name)?,
        }))
    }

    /// Render through the controller template, trailing newlines removed.
    ///
    /// Endpoint functions are separated by one blank line.
    pub fn render(&self, templates: &Templates) -> String {
        let functions = self
            .endpoints
            .iter()
            .map(|e| e.render(&templates.endpoint))
            .collect::<Vec<_>>()
            .join("\n\n");

        let substitutions = Substitutions::new()
            .set(CONTROLLER_SHORT_NAME, &self.short_name)
            .set(API_FUNCTIONS, functions);
        Template::new(&templates.controller)
            .render(&substitutions)
            .trim_end_matches('\n')
            .to_string()
    }
}

/// Controller-level route with quotes removed and `[controller]` replaced.
pub fn controller_route(route_template: &str, short_name: &str) -> String {
    strip_quotes(route_template).replace(CONTROLLER_PLACEHOLDER, short_name)
}

/// Join a controller route and a raw method route with `/`.
pub fn compose_route(controller_route: &str, method_route: &str) -> String {
    format!("{}/{}", controller_route, strip_quotes(method_route))
}
