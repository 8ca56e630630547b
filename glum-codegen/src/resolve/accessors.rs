use puddleglum_core::to_snake_case;
use puddleglum_ir::{AccessorDescriptor, ClassInfo, ColumnDescriptor, MethodInfo};

/// Return type marking a modern attribute accessor.
pub const ATTRIBUTE_MARKER: &str = "Illuminate\\Database\\Eloquent\\Casts\\Attribute";

/// Accessor properties a model exposes, in method order.
///
/// Accessors whose property name matches a column are dropped; the column
/// wins.
pub fn accessors(info: &ClassInfo, columns: &[ColumnDescriptor]) -> Vec<AccessorDescriptor> {
    info.methods
        .iter()
        .filter(|m| !m.is_static && m.parameters.is_empty())
        .filter_map(accessor)
        .filter(|a| !columns.iter().any(|c| c.name == a.property))
        .collect()
}

fn accessor(method: &MethodInfo) -> Option<AccessorDescriptor> {
    let returns = method
        .returns
        .as_deref()
        .map(|r| r.trim().trim_start_matches(['?', '\\']));

    if returns == Some(ATTRIBUTE_MARKER) {
        return Some(AccessorDescriptor {
            property: to_snake_case(&method.name),
            declared_type: method.accessor_type.clone(),
            is_computed: true,
        });
    }

    let name = method
        .name
        .strip_prefix("get")?
        .strip_suffix("Attribute")?;
    if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    Some(AccessorDescriptor {
        property: to_snake_case(name),
        declared_type: method.accessor_type.clone().or_else(|| method.returns.clone()),
        is_computed: true,
    })
}
