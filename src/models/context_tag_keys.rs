use crate::models::truncate_at_char_boundary;
use std::collections::BTreeMap;

fn max_len_for(key: &str) -> Option<usize> {
    Some(match key {
        "ai.application.ver" => 1024,
        "ai.device.id" => 1024,
        "ai.device.locale" => 64,
        "ai.device.model" => 256,
        "ai.device.oemName" => 256,
        "ai.device.osVersion" => 256,
        "ai.device.type" => 64,
        "ai.location.ip" => 46,
        "ai.location.country" => 256,
        "ai.location.province" => 256,
        "ai.location.city" => 256,
        "ai.operation.id" => 128,
        "ai.operation.name" => 1024,
        "ai.operation.parentId" => 128,
        "ai.operation.syntheticSource" => 1024,
        "ai.operation.correlationVector" => 64,
        "ai.session.id" => 64,
        "ai.session.isFirst" => 5,
        "ai.user.accountId" => 1024,
        "ai.user.id" => 128,
        "ai.user.authUserId" => 1024,
        "ai.cloud.role" => 256,
        "ai.cloud.roleInstance" => 256,
        "ai.internal.sdkVersion" => 64,
        "ai.internal.agentVersion" => 64,
        "ai.internal.nodeName" => 256,
        _ => return None,
    })
}

/// Truncates values of known tag keys to their prescribed cap. Unknown keys pass through
/// unmodified. Returns one diagnostic message per truncated value.
pub(crate) fn sanitize_tags(tags: &mut BTreeMap<String, String>) -> Vec<String> {
    let mut diagnostics = Vec::new();
    for (key, value) in tags.iter_mut() {
        if let Some(max_len) = max_len_for(key) {
            if truncate_at_char_boundary(value, max_len) {
                diagnostics.push(format!("tag `{key}` truncated to {max_len} bytes"));
            }
        }
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_known_tag_and_reports_it() {
        let mut tags = BTreeMap::new();
        tags.insert("ai.session.id".to_string(), "x".repeat(100));
        let diagnostics = sanitize_tags(&mut tags);
        assert_eq!(tags["ai.session.id"].len(), 64);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn leaves_unknown_tag_untouched() {
        let mut tags = BTreeMap::new();
        tags.insert("custom.tag".to_string(), "x".repeat(10_000));
        let diagnostics = sanitize_tags(&mut tags);
        assert_eq!(tags["custom.tag"].len(), 10_000);
        assert!(diagnostics.is_empty());
    }
}
