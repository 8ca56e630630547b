//! Groups generator output into the files of one run.

use crate::{
    FragmentBody, GeneratedFragment,
    ast::{ClientClass, Namespace},
};

/// A client class together with the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFile {
    /// Relative to the output root, `/`-separated.
    pub filename: String,
    pub client: ClientClass,
}

impl ApiFile {
    /// Directories between the output root and this file.
    pub fn depth(&self) -> usize {
        self.filename.matches('/').count()
    }
}

/// Everything one run writes, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// Namespace blocks of the aggregate file, first appearance first.
    pub namespaces: Vec<Namespace>,
    pub api_files: Vec<ApiFile>,
}

impl Assembly {
    /// Partition fragments by target file.
    ///
    /// Empty fragments are dropped. Interfaces sharing an output namespace
    /// merge into one block, in fragment order.
    pub fn from_fragments(fragments: impl IntoIterator<Item = GeneratedFragment>) -> Self {
        let mut assembly = Self::default();

        for fragment in fragments {
            if fragment.is_empty() {
                tracing::trace!(owner = %fragment.owner, "dropping empty fragment");
                continue;
            }
            match fragment.body {
                FragmentBody::Interface(interface) => {
                    let name = fragment.namespace.unwrap_or_default();
                    assembly.namespace_mut(&name).interfaces.push(interface);
                }
                FragmentBody::Client(client) => assembly.api_files.push(ApiFile {
                    filename: fragment.filename,
                    client,
                }),
            }
        }

        assembly
    }

    fn namespace_mut(&mut self, name: &str) -> &mut Namespace {
        let idx = match self.namespaces.iter().position(|ns| ns.name == name) {
            Some(idx) => idx,
            None => {
                self.namespaces.push(Namespace::new(name));
                self.namespaces.len() - 1
            }
        };
        &mut self.namespaces[idx]
    }

    /// Whether the aggregate file has anything to hold.
    pub fn has_index(&self) -> bool {
        !self.namespaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{INDEX_FILE, ast::Interface};

    fn interface(owner: &str, namespace: &str) -> GeneratedFragment {
        let short = owner.rsplit('\\').next().unwrap_or(owner);
        GeneratedFragment {
            owner: owner.to_string(),
            filename: INDEX_FILE.to_string(),
            namespace: Some(namespace.to_string()),
            body: FragmentBody::Interface(Interface::new(short)),
        }
    }

    fn client(filename: &str, methods: usize) -> GeneratedFragment {
        let method = crate::ast::ClientMethod {
            action: "index".into(),
            http_method: "get".into(),
            path: "/api".into(),
            params: Vec::new(),
            payload: crate::ast::Payload::None,
            generic: None,
        };
        GeneratedFragment {
            owner: filename.to_string(),
            filename: filename.to_string(),
            namespace: None,
            body: FragmentBody::Client(ClientClass {
                name: "C".into(),
                methods: vec![method; methods],
            }),
        }
    }

    #[test]
    fn test_namespaces_grouped_by_first_appearance() {
        let assembly = Assembly::from_fragments([
            interface("App\\Models\\Product", "Puddleglum.Models"),
            interface("App\\Http\\Requests\\StoreProduct", "Puddleglum.Requests"),
            interface("App\\Models\\Category", "Puddleglum.Models"),
        ]);

        let names: Vec<&str> = assembly.namespaces.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Puddleglum.Models", "Puddleglum.Requests"]);

        let models: Vec<&str> = assembly.namespaces[0]
            .interfaces
            .iter()
            .map(|i| i.name())
            .collect();
        assert_eq!(models, ["Product", "Category"]);
        assert!(assembly.has_index());
    }

    #[test]
    fn test_empty_clients_dropped() {
        let assembly = Assembly::from_fragments([
            client("api/shop/ProductController.ts", 2),
            client("api/IdleController.ts", 0),
        ]);

        assert!(!assembly.has_index());
        assert_eq!(assembly.api_files.len(), 1);
        assert_eq!(assembly.api_files[0].filename, "api/shop/ProductController.ts");
        assert_eq!(assembly.api_files[0].depth(), 2);
    }
}
