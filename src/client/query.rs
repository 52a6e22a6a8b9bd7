//! Parameter-driven query construction for the REST query API.

use serde_json::Value;

/// Sort direction for an ordered query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// Equality filter on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    /// Whether a row satisfies this filter.
    ///
    /// Values compare by their rendered text, as the remote side does, so
    /// `"17"` matches an integer column holding `17`.
    pub fn matches(&self, row: &Value) -> bool {
        match row.get(&self.column) {
            None | Some(Value::Null) => false,
            Some(value) => value == &self.value || render_value(value) == render_value(&self.value),
        }
    }
}

/// A read query against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table: String,
    columns: String,
    filters: Vec<Filter>,
    order: Option<Order>,
    single: bool,
}

impl Query {
    /// Start a query against `table`, selecting every column.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            single: false,
        }
    }

    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.into(),
            ascending,
        });
        self
    }

    /// Expect exactly one row back.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &str {
        &self.columns
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Render as REST query parameters, in a stable order:
    /// projection, then filters in insertion order, then ordering.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        params.push(("select".to_string(), self.columns.clone()));

        for filter in &self.filters {
            params.push((
                filter.column.clone(),
                format!("eq.{}", render_value(&filter.value)),
            ));
        }

        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
        }

        params
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
