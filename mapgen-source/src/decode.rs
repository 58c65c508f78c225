//! Type expression decoding.

use mapgen_ir::FieldType;

/// Decode a Go type expression into a canonical [`FieldType`].
///
/// Recognised shapes, in any valid combination: `T`, `ns.T`, `*T`, `[]T`,
/// `[]*T` and `map[K]V` where `V` is any of the former. Anything else
/// (arrays, channels, functions, nested collections, generics, inline
/// structs) is returned as a verbatim type carrying the original text.
pub fn decode_type_expr(text: &str) -> FieldType {
    let text = text.trim();
    decode_shape(text).unwrap_or_else(|| FieldType::verbatim(text))
}

fn decode_shape(text: &str) -> Option<FieldType> {
    let Some(rest) = text.strip_prefix("map[") else {
        return decode_value(text);
    };

    let close = matching_bracket(rest)?;
    let key = decode_value(rest[..close].trim())?;
    if key.is_slice {
        return None;
    }
    let value = decode_value(rest[close + 1..].trim())?;
    Some(value.keyed_by(key))
}

/// `T`, `*T`, `[]T` or `[]*T`.
fn decode_value(text: &str) -> Option<FieldType> {
    match text.strip_prefix("[]") {
        Some(element) => decode_element(element.trim()).map(FieldType::slice),
        None => decode_element(text),
    }
}

/// `T` or `*T`.
fn decode_element(text: &str) -> Option<FieldType> {
    match text.strip_prefix('*') {
        Some(base) => decode_name(base.trim()).map(FieldType::pointer),
        None => decode_name(text),
    }
}

/// `T` or `ns.T`, split on the first `.`.
fn decode_name(text: &str) -> Option<FieldType> {
    match text.split_once('.') {
        Some((ns, name)) if is_ident(ns) && is_ident(name) => Some(FieldType::qualified(ns, name)),
        Some(_) => None,
        None if is_ident(text) => Some(FieldType::named(text)),
        None => None,
    }
}

/// Index of the `]` closing a `map[` key, accounting for nested brackets.
fn matching_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn is_ident(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_qualified() {
        assert_eq!(decode_type_expr("string"), FieldType::named("string"));
        assert_eq!(
            decode_type_expr("uuid.UUID"),
            FieldType::qualified("uuid", "UUID")
        );
    }

    #[test]
    fn test_pointer_and_slice() {
        assert_eq!(decode_type_expr("*Money"), FieldType::named("Money").pointer());
        assert_eq!(
            decode_type_expr("[]uuid.UUID"),
            FieldType::qualified("uuid", "UUID").slice()
        );
    }

    #[test]
    fn test_slice_of_pointers_collapses_onto_element() {
        let ty = decode_type_expr("[]*RestaurantThumbnail");
        assert!(ty.is_slice);
        assert!(ty.is_pointer);
        assert_eq!(ty.name, "RestaurantThumbnail");
        assert_eq!(ty.namespace, None);
    }

    #[test]
    fn test_map_shapes() {
        assert_eq!(
            decode_type_expr("map[string]int"),
            FieldType::named("int").keyed_by(FieldType::named("string"))
        );
        assert_eq!(
            decode_type_expr("map[uuid.UUID][]*Item"),
            FieldType::named("Item")
                .pointer()
                .slice()
                .keyed_by(FieldType::qualified("uuid", "UUID"))
        );
    }

    #[test]
    fn test_unsupported_shapes_are_verbatim() {
        for text in [
            "[4]int",
            "[][]string",
            "chan int",
            "func() error",
            "map[string]map[string]int",
            "*[]int",
            "List[int]",
            "struct{ x int }",
            "a.b.C",
        ] {
            let ty = decode_type_expr(text);
            assert!(ty.verbatim, "{text} should be verbatim");
            assert_eq!(ty.name, text);
        }
    }
}
