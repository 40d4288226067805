use wgraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Edge given on the command line, before its endpoints are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source: String,
    pub destination: String,
    pub weight: f64,
}

/// Parse an edge of the form `SOURCE:DESTINATION:WEIGHT`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [source, destination, weight] = parts.as_slice() else {
        return Err(format!(
            "invalid edge '{}' (expected SOURCE:DESTINATION:WEIGHT)",
            s
        ));
    };

    if source.is_empty() || destination.is_empty() {
        return Err(format!("invalid edge '{}' (vertex names cannot be empty)", s));
    }

    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid edge weight '{}' in '{}'", weight, s))?;

    Ok(EdgeSpec {
        source: source.to_string(),
        destination: destination.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("yaml").unwrap_err().contains("unknown format"));
    }

    #[test]
    fn test_parse_edge() {
        let edge = parse_edge("A:B:2.5").unwrap();
        assert_eq!(
            edge,
            EdgeSpec {
                source: "A".to_string(),
                destination: "B".to_string(),
                weight: 2.5,
            }
        );
    }

    #[test]
    fn test_parse_edge_keeps_negative_weight_for_graph_validation() {
        let edge = parse_edge("A:B:-1").unwrap();
        assert_eq!(edge.weight, -1.0);
    }

    #[test]
    fn test_parse_edge_rejects_malformed() {
        assert!(parse_edge("A:B").is_err());
        assert!(parse_edge("A:B:1:2").is_err());
        assert!(parse_edge(":B:1").is_err());
        assert!(parse_edge("A:B:heavy").is_err());
    }
}
