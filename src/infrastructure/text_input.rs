//! Plain-text graph input: `<vertices> <edges>` followed by that many
//! `<u> <v>` pairs, whitespace separated, with 1-based vertex labels.

use crate::domain::traits::EdgeSource;
use anyhow::{anyhow, Context, Result};
use tokio::fs;
use tokio::io::{self, AsyncReadExt};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEdgeSource {
    vertex_count: i64,
    edges: Vec<Vec<i64>>,
}

impl TextEdgeSource {
    /// Parses the text form. Labels are shifted to 0-based ids but not range
    /// checked; the graph factory owns that rule.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut tokens = raw.split_whitespace();
        let mut next_int = |what: &str| -> Result<i64> {
            let tok = tokens
                .next()
                .ok_or_else(|| anyhow!("invalid input: expected {what}, found end of input"))?;
            tok.parse::<i64>()
                .map_err(|_| anyhow!("invalid input: expected {what}, found {tok:?}"))
        };

        let vertex_count = next_int("vertex count")?;
        let edge_count = next_int("edge count")?;
        let edge_count = usize::try_from(edge_count)
            .map_err(|_| anyhow!("invalid input: negative edge count {edge_count}"))?;

        let mut edges = Vec::with_capacity(edge_count.min(1 << 20));
        for i in 1..=edge_count {
            let u = next_int(&format!("source of edge {i}"))?;
            let v = next_int(&format!("target of edge {i}"))?;
            edges.push(vec![to_zero_based(u)?, to_zero_based(v)?]);
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }
}

impl EdgeSource for TextEdgeSource {
    fn vertex_count(&self) -> i64 {
        self.vertex_count
    }

    fn edges(&self) -> &[Vec<i64>] {
        &self.edges
    }
}

fn to_zero_based(label: i64) -> Result<i64> {
    label
        .checked_sub(1)
        .ok_or_else(|| anyhow!("invalid input: vertex label {label} out of range"))
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub async fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .await
            .with_context(|| format!("reading graph input: {p}")),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("reading graph input from stdin")?;
            Ok(raw)
        }
    }
}

pub async fn read_text_source(path: Option<&str>) -> Result<TextEdgeSource> {
    let raw = read_input(path).await?;
    TextEdgeSource::parse(&raw)
}
