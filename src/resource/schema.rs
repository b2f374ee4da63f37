//! Resource field metadata
//!
//! Static field tables for the two resource types, consumed by the host
//! integration layer (to declare schemas) and by the controllers (to run the
//! required-field validation gate). Table order is validation order: the
//! first empty required field, scanning top to bottom, is the one reported.

/// Default value for an optional field when the configuration omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Bool(bool),
    Str(&'static str),
}

/// Declarative metadata for a single configuration field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Must be present and non-empty at create time.
    pub required: bool,
    /// Any change forces destroy-then-recreate by the host runtime.
    pub force_new: bool,
    pub default: Option<FieldDefault>,
    pub description: &'static str,
}

/// Inventory filter fields. Every field is force-new: filters have no update
/// call, so any change recreates the resource.
pub const FILTER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        required: true,
        force_new: true,
        default: None,
        description: "User-specified name for the inventory filter.",
    },
    FieldSpec {
        name: "app_scope_id",
        required: true,
        force_new: true,
        default: None,
        description: "ID of the scope associated with the filter.",
    },
    FieldSpec {
        name: "query",
        required: true,
        force_new: true,
        default: None,
        description: "JSON object representation of an inventory filter query.",
    },
    FieldSpec {
        name: "primary",
        required: false,
        force_new: true,
        default: Some(FieldDefault::Bool(false)),
        description: "When true, the filter is restricted to the ownership scope.",
    },
    FieldSpec {
        name: "public",
        required: false,
        force_new: true,
        default: Some(FieldDefault::Bool(false)),
        description: "When true the filter provides a service for its scope. \
                      Must also be primary/scope restricted.",
    },
];

/// Inventory label fields. `attributes` is the only mutable field; changing
/// it re-runs the same upsert call.
pub const LABEL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "ip",
        required: true,
        force_new: true,
        default: None,
        description: "IPv4/IPv6 address or subnet.",
    },
    FieldSpec {
        name: "attributes",
        required: true,
        force_new: false,
        default: None,
        description: "Key/value map for tagging matching flows and inventory items. \
                      The full set is replaced on every update.",
    },
    FieldSpec {
        name: "root_scope_name",
        required: false,
        force_new: true,
        default: Some(FieldDefault::Str("")),
        description: "Root app scope name. Defaults to the subdomain of the API endpoint.",
    },
];

/// Scan `fields` in table order and return the name of the first required
/// field reported empty by `is_empty`.
pub fn first_missing_required(
    fields: &[FieldSpec],
    is_empty: impl Fn(&str) -> bool,
) -> Option<&'static str> {
    fields
        .iter()
        .filter(|f| f.required)
        .find(|f| is_empty(f.name))
        .map(|f| f.name)
}

/// Look up a field by name.
pub fn field<'a>(fields: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    fields.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_required_fields_in_validation_order() {
        let required: Vec<_> = FILTER_FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, ["name", "app_scope_id", "query"]);
    }

    #[test]
    fn label_required_fields_in_validation_order() {
        let required: Vec<_> = LABEL_FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, ["ip", "attributes"]);
    }

    #[test]
    fn filter_booleans_default_false() {
        for name in ["primary", "public"] {
            let spec = field(FILTER_FIELDS, name).unwrap();
            assert_eq!(spec.default, Some(FieldDefault::Bool(false)));
        }
    }

    #[test]
    fn every_filter_field_is_force_new() {
        assert!(FILTER_FIELDS.iter().all(|f| f.force_new));
    }

    #[test]
    fn label_attributes_are_mutable() {
        assert!(!field(LABEL_FIELDS, "attributes").unwrap().force_new);
    }

    #[test]
    fn first_missing_respects_table_order() {
        // Everything empty: the first required field wins.
        let missing = first_missing_required(FILTER_FIELDS, |_| true);
        assert_eq!(missing, Some("name"));

        let missing = first_missing_required(FILTER_FIELDS, |name| name != "name");
        assert_eq!(missing, Some("app_scope_id"));

        assert_eq!(first_missing_required(FILTER_FIELDS, |_| false), None);
    }
}
