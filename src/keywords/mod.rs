//! Explicit keyword dispatch table (`spec.md` §9 "Validator-method discovery
//! by reflection" -> replaced here with a plain `match` keyed by keyword
//! name, iterated in the fixed Pass-1 order from `spec.md` §4.1.1).
pub(crate) mod additional_items;
pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod composition;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod content;
pub(crate) mod dependencies;
pub(crate) mod dependent_required;
pub(crate) mod dependent_schemas;
pub(crate) mod dynamic_ref;
pub(crate) mod enum_;
pub(crate) mod equality;
pub(crate) mod exclusive_maximum;
pub(crate) mod exclusive_minimum;
pub(crate) mod format;
pub(crate) mod helpers;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod prefix_items;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod recursive_ref;
pub(crate) mod ref_;
pub(crate) mod required;
pub(crate) mod type_;
pub(crate) mod unevaluated;
pub(crate) mod unevaluated_items;
pub(crate) mod unevaluated_properties;
pub(crate) mod unique_items;

use crate::{
    engine::{Ctx, Engine, EngineResult, Outcome},
    options::Draft,
};
use serde_json::Value;

/// Fixed Pass-1 dispatch order. `spec.md` §4.1.1: "the order matters only
/// because some keywords *mark* annotations consumed by later keywords in
/// the same pass".
pub(crate) const PASS1_ORDER: &[&str] = &[
    "$ref",
    "$recursiveRef",
    "$dynamicRef",
    "type",
    "minLength",
    "maxLength",
    "pattern",
    "format",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
    "required",
    "minProperties",
    "maxProperties",
    "properties",
    "additionalProperties",
    "dependencies",
    "patternProperties",
    "propertyNames",
    "dependentRequired",
    "dependentSchemas",
    "items",
    "prefixItems",
    "additionalItems",
    "contains",
    "minItems",
    "maxItems",
    "uniqueItems",
    "enum",
    "const",
    "contentEncoding",
    "contentMediaType",
];

/// Is `keyword` active in `draft`, optionally narrowed further by a
/// declared `$vocabulary` (2019-09+)?
#[must_use]
pub(crate) fn is_applicable(
    keyword: &str,
    draft: Draft,
    _vocab: Option<&ahash::AHashSet<String>>,
) -> bool {
    match keyword {
        "$recursiveRef" => draft.has_recursive_ref(),
        "$dynamicRef" => draft.has_dynamic_ref(),
        "dependencies" => !draft.has_split_dependencies(),
        "dependentRequired" | "dependentSchemas" => draft.has_split_dependencies(),
        "prefixItems" => draft.has_prefix_items(),
        "additionalItems" => !draft.has_prefix_items(),
        "contentEncoding" | "contentMediaType" => draft.has_content_keywords(),
        _ => true,
    }
}

/// Route one Pass-1 keyword to its handler.
pub(crate) fn dispatch<'s>(
    engine: &mut Engine<'s>,
    ctx: &Ctx<'_, 's>,
    keyword: &str,
    value: &'s Value,
) -> EngineResult<Outcome> {
    match keyword {
        "$ref" => ref_::validate_ref(engine, ctx, value),
        "$recursiveRef" => recursive_ref::validate(engine, ctx, value),
        "$dynamicRef" => dynamic_ref::validate(engine, ctx, value),
        "type" => Ok(type_::validate(engine, ctx, value)),
        "minLength" => Ok(min_length::validate(engine, ctx, value)),
        "maxLength" => Ok(max_length::validate(engine, ctx, value)),
        "pattern" => Ok(pattern::validate(engine, ctx, value)),
        "format" => Ok(format::validate(engine, ctx, value)),
        "minimum" => Ok(minimum::validate(engine, ctx, value)),
        "maximum" => Ok(maximum::validate(engine, ctx, value)),
        "exclusiveMinimum" => Ok(exclusive_minimum::validate(engine, ctx, value)),
        "exclusiveMaximum" => Ok(exclusive_maximum::validate(engine, ctx, value)),
        "multipleOf" => Ok(multiple_of::validate(engine, ctx, value)),
        "required" => Ok(required::validate(engine, ctx, value)),
        "minProperties" => Ok(min_properties::validate(engine, ctx, value)),
        "maxProperties" => Ok(max_properties::validate(engine, ctx, value)),
        "properties" => properties::validate(engine, ctx, value),
        "additionalProperties" => additional_properties::validate(engine, ctx, value),
        "dependencies" => dependencies::validate(engine, ctx, value),
        "patternProperties" => pattern_properties::validate(engine, ctx, value),
        "propertyNames" => property_names::validate(engine, ctx, value),
        "dependentRequired" => Ok(dependent_required::validate(engine, ctx, value)),
        "dependentSchemas" => dependent_schemas::validate(engine, ctx, value),
        "items" => items::validate(engine, ctx, value),
        "prefixItems" => prefix_items::validate(engine, ctx, value),
        "additionalItems" => additional_items::validate(engine, ctx, value),
        "contains" => contains::validate(engine, ctx, value),
        "minItems" => Ok(min_items::validate(engine, ctx, value)),
        "maxItems" => Ok(max_items::validate(engine, ctx, value)),
        "uniqueItems" => Ok(unique_items::validate(engine, ctx, value)),
        "enum" => Ok(enum_::validate(engine, ctx, value)),
        "const" => Ok(const_::validate(engine, ctx, value)),
        "contentEncoding" => Ok(content::validate_encoding(engine, ctx, value)),
        "contentMediaType" => Ok(content::validate_media_type(engine, ctx, value)),
        _ => Ok(Outcome::valid()),
    }
}
