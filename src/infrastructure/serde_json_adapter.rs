use crate::domain::traits::EdgeSource;
use crate::infrastructure::schema_validator::validate_graph_document;
use crate::infrastructure::text_input::read_input;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `{"vertices": n, "edges": [[u, v], ...]}` with 0-based vertex ids.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GraphFileDto {
    pub vertices: i64,

    #[serde(default)]
    pub edges: Vec<Vec<i64>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl EdgeSource for GraphFileDto {
    fn vertex_count(&self) -> i64 {
        self.vertices
    }

    fn edges(&self) -> &[Vec<i64>] {
        &self.edges
    }
}

pub fn parse_graph_document(raw: &str) -> Result<GraphFileDto> {
    let value: Value = serde_json::from_str(raw)?;
    validate_graph_document(&value)?;
    let dto: GraphFileDto = serde_json::from_value(value)?;
    Ok(dto)
}

pub async fn read_graph_file(path: Option<&str>) -> Result<GraphFileDto> {
    let raw = read_input(path).await?;
    parse_graph_document(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_keeps_unknown_keys() {
        let dto = parse_graph_document(r#"{"vertices": 2, "edges": [[0, 1]], "name": "pair"}"#)
            .expect("parse");
        assert_eq!(dto.vertex_count(), 2);
        assert_eq!(dto.edges(), &[vec![0, 1]]);
        assert_eq!(
            dto.extra.get("name"),
            Some(&Value::String("pair".to_string()))
        );
    }

    #[test]
    fn parse_rejects_invalid_json_and_schema_violations() {
        assert!(parse_graph_document("{ not json").is_err());

        let err = parse_graph_document(r#"{"vertices": 2}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("validation failed"));
    }

    #[tokio::test]
    async fn read_graph_file_from_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("graph.json");

        let dto = GraphFileDto {
            vertices: 3,
            edges: vec![vec![0, 1], vec![1, 2], vec![2, 0]],
            ..GraphFileDto::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&dto).expect("serialize"))
            .expect("write");

        let reread = read_graph_file(path.to_str()).await.expect("read");
        assert_eq!(reread, dto);
    }
}
