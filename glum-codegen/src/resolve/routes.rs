use puddleglum_ir::{ClassKind, DiscoveredClass, MethodInfo, RouteDescriptor, RouteEntry, Snapshot};

use crate::Classifier;

const INVOKE_METHOD: &str = "__invoke";

/// Routes of the snapshot's route table that carry a given middleware.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable<'a> {
    snapshot: &'a Snapshot,
    middleware: &'a str,
}

impl<'a> RouteTable<'a> {
    pub fn new(snapshot: &'a Snapshot, middleware: &'a str) -> Self {
        Self {
            snapshot,
            middleware,
        }
    }

    /// Routes bound to `controller`, in route table order.
    pub fn routes_for(
        &self,
        controller: &DiscoveredClass,
        classifier: &Classifier<'_>,
    ) -> Vec<RouteDescriptor> {
        let info = self.snapshot.class(&controller.name);
        self.snapshot
            .routes
            .iter()
            .filter(|route| route.middleware.iter().any(|m| m == self.middleware))
            .filter_map(|route| {
                let (class, method) = split_binding(route.controller.as_deref()?);
                (class == controller.name).then_some((route, method))
            })
            .map(|(route, method)| {
                let bound = info.and_then(|info| info.method(method));
                self.describe(route, &controller.name, method, bound, classifier)
            })
            .collect()
    }

    fn describe(
        &self,
        route: &RouteEntry,
        controller: &str,
        method: &str,
        bound: Option<&MethodInfo>,
        classifier: &Classifier<'_>,
    ) -> RouteDescriptor {
        let action = if method == INVOKE_METHOD {
            "invoke"
        } else {
            method
        };

        RouteDescriptor {
            http_method: route
                .methods
                .first()
                .map(|m| m.to_ascii_lowercase())
                .unwrap_or_else(|| "get".to_string()),
            uri: route.uri.clone(),
            path_parameters: RouteDescriptor::parse_path_parameters(&route.uri),
            controller: controller.to_string(),
            action: action.to_string(),
            request_class: bound.and_then(|m| self.request_class(m, classifier)),
            request_shape: bound.and_then(|m| m.request_shape.clone()),
            response_shape: bound.and_then(|m| m.response_shape.clone()),
        }
    }

    /// First parameter whose type classifies as a validated request.
    fn request_class(&self, method: &MethodInfo, classifier: &Classifier<'_>) -> Option<String> {
        method.parameters.iter().find_map(|param| {
            let ty = param.ty.as_deref()?.trim().trim_start_matches(['?', '\\']);
            let info = self.snapshot.class(ty)?;
            let class = DiscoveredClass::new(ty, info);
            (classifier.classify(&class) == Some(ClassKind::Request)).then_some(class.name)
        })
    }
}

/// `Class@method` → (`Class`, `method`); an invokable `Class` binds `__invoke`.
fn split_binding(binding: &str) -> (&str, &str) {
    let binding = binding.trim().trim_start_matches('\\');
    match binding.split_once('@') {
        Some((class, method)) => (class, method),
        None => (binding, INVOKE_METHOD),
    }
}

#[cfg(test)]
mod tests {
    use puddleglum_ir::Shape;

    use super::*;
    use crate::GeneratorConfig;

    fn snapshot() -> Snapshot {
        serde_json::from_str(
            r#"{
                "classes": {
                    "App\\Http\\Controllers\\ProductController": {
                        "ancestors": ["App\\Http\\Controllers\\Controller"],
                        "methods": [
                            { "name": "show", "response_shape": { "name": "string" } },
                            { "name": "store", "parameters": [
                                { "name": "request", "type": "\\App\\Http\\Requests\\StoreProduct" }
                            ] }
                        ]
                    },
                    "App\\Http\\Controllers\\PingController": {
                        "ancestors": ["App\\Http\\Controllers\\Controller"]
                    },
                    "App\\Http\\Requests\\StoreProduct": {
                        "ancestors": ["Illuminate\\Foundation\\Http\\FormRequest"]
                    }
                },
                "routes": [
                    { "uri": "api/products/{id}", "methods": ["GET", "HEAD"], "middleware": ["api"],
                      "controller": "App\\Http\\Controllers\\ProductController@show" },
                    { "uri": "api/products", "methods": ["POST"], "middleware": ["api", "auth"],
                      "controller": "App\\Http\\Controllers\\ProductController@store" },
                    { "uri": "products", "methods": ["GET"], "middleware": ["web"],
                      "controller": "App\\Http\\Controllers\\ProductController@index" },
                    { "uri": "api/products-extra", "methods": ["GET"], "middleware": ["api"],
                      "controller": "App\\Http\\Controllers\\ProductControllerExtra@index" },
                    { "uri": "api/ping", "methods": ["GET"], "middleware": ["api"],
                      "controller": "App\\Http\\Controllers\\PingController" },
                    { "uri": "api/closure", "methods": ["GET"], "middleware": ["api"] }
                ]
            }"#,
        )
        .unwrap()
    }

    fn controller(snapshot: &Snapshot, name: &str) -> DiscoveredClass {
        DiscoveredClass::new(name, snapshot.class(name).unwrap())
    }

    #[test]
    fn test_routes_for_controller() {
        let snapshot = snapshot();
        let config = GeneratorConfig::default();
        let classifier = Classifier::new(&config);
        let table = RouteTable::new(&snapshot, "api");

        let routes = table.routes_for(
            &controller(&snapshot, "App\\Http\\Controllers\\ProductController"),
            &classifier,
        );

        assert_eq!(routes.len(), 2);

        let show = &routes[0];
        assert_eq!(show.http_method, "get");
        assert_eq!(show.action, "show");
        assert_eq!(show.path_parameters[0].name, "id");
        assert_eq!(show.request_class, None);
        assert!(matches!(show.response_shape, Some(Shape::Fields(_))));

        let store = &routes[1];
        assert_eq!(store.http_method, "post");
        assert_eq!(
            store.request_class.as_deref(),
            Some("App\\Http\\Requests\\StoreProduct")
        );
    }

    #[test]
    fn test_invokable_controller() {
        let snapshot = snapshot();
        let config = GeneratorConfig::default();
        let classifier = Classifier::new(&config);
        let table = RouteTable::new(&snapshot, "api");

        let routes = table.routes_for(
            &controller(&snapshot, "App\\Http\\Controllers\\PingController"),
            &classifier,
        );

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].action, "invoke");
    }

    #[test]
    fn test_split_binding() {
        assert_eq!(split_binding("\\App\\C@show"), ("App\\C", "show"));
        assert_eq!(split_binding("App\\C"), ("App\\C", "__invoke"));
    }
}
