use serde_json::Value;

use crate::error::DocsError;

/// Heading that delimits the response-example section of a
/// documentation page.
const SECTION_MARKER: &str = "JSON Response";

const FENCE: &str = "```";

/// Extract the example response value from a documentation page: the
/// first fenced code block after the "JSON Response" heading, parsed as
/// JSON. The fence's language tag, if any, is skipped.
pub fn extract_response_example(page: &str) -> Result<Value, DocsError> {
    let section_start = page.find(SECTION_MARKER).ok_or(DocsError::MissingSection)?;
    let section = &page[section_start..];

    let fence_open = section.find(FENCE).ok_or(DocsError::MissingFence)?;
    let fence_line = &section[fence_open..];
    let body_start = fence_line.find('\n').ok_or(DocsError::MissingFence)?;
    let body = &fence_line[body_start + 1..];

    let fence_close = body.find(FENCE).ok_or(DocsError::MissingFence)?;
    let example = &body[..fence_close];

    Ok(serde_json::from_str(example)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_fenced_block_after_marker() {
        let page = "\
# getChannelId

Some prose, maybe with an unrelated ```code``` fence later.

## JSON Response

```json
{ \"status\": 200, \"data\": { \"channelId\": \"gl:valid\" } }
```

## Error handling
";
        let value = extract_response_example(page).unwrap();
        assert_eq!(
            value,
            json!({ "status": 200, "data": { "channelId": "gl:valid" } })
        );
    }

    #[test]
    fn test_fence_without_language_tag() {
        let page = "JSON Response\n```\n{ \"ok\": true }\n```\n";
        let value = extract_response_example(page).unwrap();
        assert_eq!(value, json!({ "ok": true }));
    }

    #[test]
    fn test_missing_section() {
        let err = extract_response_example("no markers here").unwrap_err();
        assert!(matches!(err, DocsError::MissingSection));
    }

    #[test]
    fn test_missing_fence() {
        let err = extract_response_example("JSON Response\nbut no fence").unwrap_err();
        assert!(matches!(err, DocsError::MissingFence));
    }

    #[test]
    fn test_unterminated_fence() {
        let err = extract_response_example("JSON Response\n```json\n{}").unwrap_err();
        assert!(matches!(err, DocsError::MissingFence));
    }

    #[test]
    fn test_malformed_embedded_json() {
        let page = "JSON Response\n```json\n{ not json\n```\n";
        let err = extract_response_example(page).unwrap_err();
        assert!(matches!(err, DocsError::Json(_)));
    }
}
