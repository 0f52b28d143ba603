use crate::models::{truncate_at_char_boundary, Properties};

/// Truncates each property key to 150 bytes and each property value to 8192 bytes, following
/// Application Insights' documented field limits. Returns one diagnostic per truncated field.
pub(crate) fn sanitize_properties(properties: &mut Option<Properties>) -> Vec<String> {
    let Some(properties) = properties.as_mut() else {
        return Vec::new();
    };

    let mut diagnostics = Vec::new();

    let oversize_keys: Vec<_> = properties
        .keys()
        .filter(|k| k.len() > 150)
        .cloned()
        .collect();
    for mut key in oversize_keys {
        let value = properties
            .remove(&key)
            .expect("key was just read from this map");
        truncate_at_char_boundary(&mut key, 150);
        diagnostics.push(format!("property key truncated to 150 bytes: `{key}`"));
        properties.insert(key, value);
    }

    for (key, value) in properties.iter_mut() {
        if truncate_at_char_boundary(value, 8192) {
            diagnostics.push(format!("property `{key}` value truncated to 8192 bytes"));
        }
    }

    diagnostics
}
