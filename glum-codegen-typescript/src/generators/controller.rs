use puddleglum_codegen::{Classifier, NamingRules, resolve::RouteTable};
use puddleglum_ir::{DiscoveredClass, RouteDescriptor};

use super::TypeGenerator;
use crate::{
    API_DIR, FragmentBody, GeneratedFragment,
    ast::{ClientClass, ClientMethod, Param, Payload},
    type_mapper::ShapeTranslator,
};

/// Controllers → client classes with one static method per API route.
pub struct ControllerGenerator<'a> {
    routes: RouteTable<'a>,
    classifier: Classifier<'a>,
    naming: &'a NamingRules,
}

impl<'a> ControllerGenerator<'a> {
    pub fn new(routes: RouteTable<'a>, classifier: Classifier<'a>, naming: &'a NamingRules) -> Self {
        Self {
            routes,
            classifier,
            naming,
        }
    }

    pub fn client(&self, class: &DiscoveredClass) -> ClientClass {
        let methods = self
            .routes
            .routes_for(class, &self.classifier)
            .iter()
            .map(|route| self.method(route))
            .collect();

        ClientClass {
            name: class.short_name().to_string(),
            methods,
        }
    }

    fn method(&self, route: &RouteDescriptor) -> ClientMethod {
        let translator = ShapeTranslator::new(self.naming);

        let mut params: Vec<Param> = route
            .path_parameters
            .iter()
            .map(|p| Param::new(&p.name, "string|number"))
            .collect();

        let request = match (&route.request_class, &route.request_shape) {
            (Some(class), _) => {
                let ty = self.naming.class_reference(class);
                Some(Param::new("request", &ty).with_default(format!("{{}} as {}", ty)))
            }
            (None, Some(shape)) => {
                let param = Param::new("request", translator.shape(shape));
                Some(if shape.all_optional() {
                    param.with_default("{}")
                } else {
                    param
                })
            }
            (None, None) => None,
        };

        let payload = match (&request, route.http_method.as_str()) {
            (None, _) => Payload::None,
            (Some(_), "get") => Payload::Query,
            (Some(_), _) => Payload::Body,
        };
        params.extend(request);

        ClientMethod {
            action: route.action.clone(),
            http_method: route.http_method.clone(),
            path: template_path(&route.uri),
            params,
            payload,
            generic: route.response_shape.as_ref().map(|s| translator.shape(s)),
        }
    }

    /// `api/<kebab namespace path>/<ClassName>.ts`
    pub fn filename(&self, class: &DiscoveredClass) -> String {
        let mut segments = vec![API_DIR.to_string()];
        segments.extend(self.naming.api_path(&class.namespace));
        segments.push(format!("{}.ts", class.short_name()));
        segments.join("/")
    }
}

/// `api/products/{id}/{slug?}` → `/api/products/${id}/${slug}`
fn template_path(uri: &str) -> String {
    let path = uri.replace('{', "${").replace('?', "");
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

impl TypeGenerator for ControllerGenerator<'_> {
    fn generate(&self, class: &DiscoveredClass) -> Option<GeneratedFragment> {
        let client = self.client(class);
        if client.methods.is_empty() {
            tracing::debug!(class = %class.name, "no api routes, skipping");
            return None;
        }
        Some(GeneratedFragment {
            owner: class.name.clone(),
            filename: self.filename(class),
            namespace: None,
            body: FragmentBody::Client(client),
        })
    }
}
