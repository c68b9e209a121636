use crate::store::{StoreError, TabSpec};
use common::model::table::TableSnapshot;
use std::collections::HashMap;

/// Rows of one tab, each aligned to the tab's declared columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    spec: TabSpec,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn empty(spec: TabSpec) -> Self {
        Self { spec, rows: Vec::new() }
    }

    pub(crate) fn from_aligned(spec: TabSpec, rows: Vec<Vec<String>>) -> Self {
        Self { spec, rows }
    }

    /// Builds a table from rows keyed by column name. Missing cells are empty;
    /// keys that are not declared columns are rejected.
    pub fn from_records(spec: TabSpec, records: &[HashMap<String, String>]) -> Result<Self, StoreError> {
        let mut table = Self::empty(spec);
        for record in records {
            let cells = record.iter().map(|(column, value)| (column.as_str(), value.clone()));
            let row = table.row_from(cells)?;
            table.rows.push(row);
        }
        Ok(table)
    }

    pub fn spec(&self) -> TabSpec {
        self.spec
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize, StoreError> {
        self.spec
            .columns
            .iter()
            .position(|declared| *declared == column)
            .ok_or_else(|| StoreError::UnknownColumn { tab: self.spec.name, column: column.to_owned() })
    }

    /// Value of `column` in `row`; empty for unknown columns.
    pub fn cell<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.column_index(column)
            .ok()
            .and_then(|index| row.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Lays out named cells in declared column order.
    pub(crate) fn row_from<'c>(
        &self,
        cells: impl IntoIterator<Item = (&'c str, String)>,
    ) -> Result<Vec<String>, StoreError> {
        let mut row = vec![String::new(); self.spec.columns.len()];
        for (column, value) in cells {
            row[self.column_index(column)?] = value;
        }
        Ok(row)
    }

    pub(crate) fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<String>> {
        &mut self.rows
    }

    /// Keeps the rows accepted by `keep`.
    pub fn filtered(&self, keep: impl Fn(&Table, &[String]) -> bool) -> Table {
        let rows = self.rows.iter().filter(|row| keep(self, row)).cloned().collect();
        Table { spec: self.spec, rows }
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            tab: self.spec.name.to_owned(),
            columns: self.spec.columns.iter().map(|column| column.to_string()).collect(),
            rows: self.rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tabs::EVALUATIONS;

    #[test]
    fn records_are_laid_out_in_declared_order() {
        let record = HashMap::from([
            ("N° DE EVALUACIÓN".to_string(), "121".to_string()),
            ("NOMBRES Y APELLIDOS".to_string(), "ANA PEREZ".to_string()),
        ]);
        let table = Table::from_records(EVALUATIONS, &[record]).unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.len(), EVALUATIONS.columns.len());
        assert_eq!(row[2], "ANA PEREZ");
        assert_eq!(row[3], "121");
        assert_eq!(table.cell(row, "FECHA"), "");
    }

    #[test]
    fn undeclared_columns_are_rejected() {
        let record = HashMap::from([("COLOR".to_string(), "rojo".to_string())]);
        let error = Table::from_records(EVALUATIONS, &[record]).unwrap_err();
        assert!(matches!(error, StoreError::UnknownColumn { tab: "Evaluaciones_CA", .. }));
    }
}
