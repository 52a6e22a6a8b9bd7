//! In-memory backend for testing without network calls.

use super::{Backend, BackendError, Query};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Tables {
    rows: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
    requests: usize,
}

/// Mock backend holding rows per table.
///
/// Filtering, ordering and single-row semantics follow the remote service:
/// NULLs sort after every value, so they come last ascending and first
/// descending.
#[derive(Debug, Default)]
pub struct MockBackend {
    tables: Mutex<Tables>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to `table`.
    pub fn with_row(self, table: &str, row: Value) -> Self {
        self.lock().rows.entry(table.to_string()).or_default().push(row);
        self
    }

    /// Add several rows to `table`.
    pub fn with_rows(self, table: &str, rows: Vec<Value>) -> Self {
        self.lock()
            .rows
            .entry(table.to_string())
            .or_default()
            .extend(rows);
        self
    }

    /// Make every request against `table` fail with a server error.
    pub fn failing_on(self, table: &str) -> Self {
        self.lock().failing.insert(table.to_string());
        self
    }

    /// Snapshot of the rows currently stored in `table`.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.lock().rows.get(table).cloned().unwrap_or_default()
    }

    /// Number of requests served so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.lock().requests
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn run(&self, query: &Query) -> Result<Vec<Value>, BackendError> {
        let mut tables = self.lock();
        tables.requests += 1;
        check_failing(&tables, query.table())?;

        let mut rows: Vec<Value> = tables
            .rows
            .get(query.table())
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filters().iter().all(|f| f.matches(row)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = query.ordering() {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.column), b.get(&order.column));
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        Ok(rows)
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn fetch(&self, query: &Query) -> Result<Vec<Value>, BackendError> {
        let rows = self.run(query)?;
        if query.is_single() && rows.len() != 1 {
            return Err(BackendError::NotSingle(rows.len()));
        }
        Ok(rows)
    }

    async fn fetch_single(&self, query: &Query) -> Result<Value, BackendError> {
        let mut rows = self.run(query)?;
        if rows.len() != 1 {
            return Err(BackendError::NotSingle(rows.len()));
        }
        Ok(rows.remove(0))
    }

    async fn insert_single(&self, table: &str, row: Value) -> Result<Value, BackendError> {
        let mut tables = self.lock();
        tables.requests += 1;
        check_failing(&tables, table)?;

        let Value::Object(mut fields) = row else {
            return Err(BackendError::Other(
                "insert payload must be a JSON object".to_string(),
            ));
        };
        fields
            .entry("id")
            .or_insert_with(|| Value::from(uuid::Uuid::new_v4().to_string()));
        fields
            .entry("created_at")
            .or_insert_with(|| Value::from(Utc::now().to_rfc3339()));

        let stored = Value::Object(fields);
        tables
            .rows
            .entry(table.to_string())
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }
}

fn check_failing(tables: &Tables, table: &str) -> Result<(), BackendError> {
    if tables.failing.contains(table) {
        return Err(BackendError::Http {
            status: 500,
            message: format!("mock failure on {}", table),
        });
    }
    Ok(())
}

/// Total order over JSON column values; missing and NULL sort last.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::String(x)), Some(Value::String(y))) => {
            match (parse_timestamp(x), parse_timestamp(y)) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}
