use anyhow::{anyhow, Result};
use url::Url;

/// A resolved Figma document locator: file key plus optional node.
#[derive(Debug, Clone)]
pub struct FigmaLocator {
    pub file_key: String,
    pub node_id: Option<String>,
    pub file_name: Option<String>,
}

impl FigmaLocator {
    /// Parse a Figma URL or a bare file key.
    ///
    /// Supported forms:
    /// - `https://www.figma.com/file/abc123/My-File`
    /// - `https://www.figma.com/design/abc123/My-File?node-id=1-234`
    /// - `abc123` (just the file key)
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(anyhow!("empty file key"));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Self::parse_url(input);
        }

        Ok(Self {
            file_key: input.to_string(),
            node_id: None,
            file_name: None,
        })
    }

    fn parse_url(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;

        let host = url.host_str().ok_or_else(|| anyhow!("invalid URL: no host"))?;
        if !host.contains("figma.com") {
            return Err(anyhow!("not a Figma URL: {}", host));
        }

        // Path shapes: /file/<key>/<name>, /design/<key>/<name>, etc.
        let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 {
            return Err(anyhow!("invalid Figma URL: missing file key"));
        }
        if !["file", "design", "proto", "board"].contains(&segments[0]) {
            return Err(anyhow!("invalid Figma URL type: {}", segments[0]));
        }

        let file_key = segments[1].to_string();
        let file_name = segments.get(2).map(|s| {
            urlencoding::decode(s)
                .map(|d| d.replace('-', " "))
                .unwrap_or_else(|_| s.to_string())
        });

        // node-id query params use 1-234; the API wants 1:234
        let node_id = url.query_pairs().find_map(|(key, value)| {
            (key == "node-id").then(|| value.replace('-', ":"))
        });

        Ok(Self {
            file_key,
            node_id,
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_design_url_with_node() {
        let loc = FigmaLocator::parse("https://www.figma.com/design/abc123/Test?node-id=1-234")
            .unwrap();
        assert_eq!(loc.file_key, "abc123");
        assert_eq!(loc.node_id.as_deref(), Some("1:234"));
    }

    #[test]
    fn parses_file_url_and_name() {
        let loc = FigmaLocator::parse("https://www.figma.com/file/abc123/My-Design").unwrap();
        assert_eq!(loc.file_key, "abc123");
        assert_eq!(loc.file_name.as_deref(), Some("My Design"));
        assert_eq!(loc.node_id, None);
    }

    #[test]
    fn accepts_bare_file_key() {
        let loc = FigmaLocator::parse("abc123xyz").unwrap();
        assert_eq!(loc.file_key, "abc123xyz");
        assert_eq!(loc.node_id, None);
    }

    #[test]
    fn rejects_foreign_hosts() {
        assert!(FigmaLocator::parse("https://example.com/file/abc").is_err());
    }
}
