use crate::store::{StoreError, TabSpec, Table};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

/// A directory of CSV tabs.
///
/// Every operation holds the workbook lock, so read-modify-write sequences
/// from this process never interleave. Other processes writing the same files
/// are not coordinated with.
pub struct Workbook {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl Workbook {
    pub fn open(data_dir: &Path, key: &str) -> Result<Self, StoreError> {
        let dir = data_dir.join(key);
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io { path: dir.clone(), source })?;
        Ok(Self { dir, lock: Mutex::new(()) })
    }

    pub fn read(&self, spec: TabSpec) -> Result<Table, StoreError> {
        let _guard = self.guard()?;
        self.load(spec)
    }

    /// Replaces the whole tab with `table`.
    pub fn write(&self, table: &Table) -> Result<(), StoreError> {
        let _guard = self.guard()?;
        self.persist(table)?;
        info!("Hoja {} reescrita con {} filas", table.spec().name, table.len());
        Ok(())
    }

    /// Appends one row built from named cells and returns its 1-based number.
    /// Columns not given are stored empty; the auto-number column, if the tab
    /// has one, receives the row number.
    pub fn append<'c>(
        &self,
        spec: TabSpec,
        cells: impl IntoIterator<Item = (&'c str, String)>,
    ) -> Result<usize, StoreError> {
        let _guard = self.guard()?;
        let mut table = self.load(spec)?;
        let mut row = table.row_from(cells)?;
        let number = table.len() + 1;
        if let Some(column) = spec.auto_number {
            row[table.column_index(column)?] = number.to_string();
        }
        table.push(row);
        self.persist(&table)?;
        info!("Fila {} agregada a {}", number, spec.name);
        Ok(number)
    }

    /// Sets `updates` on every row whose `key_column` equals `key_value`, both
    /// trimmed. Returns how many rows matched.
    pub fn update_where(
        &self,
        spec: TabSpec,
        key_column: &str,
        key_value: &str,
        updates: &[(&str, String)],
    ) -> Result<usize, StoreError> {
        let _guard = self.guard()?;
        let mut table = self.load(spec)?;
        let key_index = table.column_index(key_column)?;
        let updates = updates
            .iter()
            .map(|(column, value)| Ok((table.column_index(column)?, value)))
            .collect::<Result<Vec<_>, StoreError>>()?;

        let wanted = key_value.trim();
        let mut touched = 0;
        for row in table.rows_mut().iter_mut().filter(|row| row[key_index].trim() == wanted) {
            for (index, value) in &updates {
                row[*index] = (*value).clone();
            }
            touched += 1;
        }

        if touched > 0 {
            self.persist(&table)?;
            info!("{} fila(s) de {} actualizadas ({} = {})", touched, spec.name, key_column, wanted);
        }
        Ok(touched)
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.lock
            .lock()
            .map_err(|_| StoreError::Poisoned(self.dir.display().to_string()))
    }

    fn tab_path(&self, spec: TabSpec) -> PathBuf {
        self.dir.join(format!("{}.csv", spec.name))
    }

    /// Reads a tab and maps its stored columns onto the declared ones. A tab
    /// that does not exist yet is created with its header.
    fn load(&self, spec: TabSpec) -> Result<Table, StoreError> {
        let path = self.tab_path(spec);
        if !path.exists() {
            let table = Table::empty(spec);
            self.persist(&table)?;
            return Ok(table);
        }

        let csv_error = |source: csv::Error| StoreError::Csv { path: path.clone(), source };
        let records: Vec<csv::StringRecord> = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .map_err(csv_error)?
            .records()
            .collect::<Result<_, _>>()
            .map_err(csv_error)?;

        let Some((header, body)) = records.split_first() else {
            let table = Table::empty(spec);
            self.persist(&table)?;
            return Ok(table);
        };

        let positions: Vec<Option<usize>> = spec
            .columns
            .iter()
            .map(|column| {
                header
                    .iter()
                    .position(|stored| stored.trim_start_matches('\u{feff}') == *column)
            })
            .collect();
        let rows = body
            .iter()
            .map(|record| {
                positions
                    .iter()
                    .map(|position| position.and_then(|i| record.get(i)).unwrap_or("").to_owned())
                    .collect()
            })
            .collect();

        Ok(Table::from_aligned(spec, rows))
    }

    /// Writes header and rows to a temporary file next to the tab and renames
    /// it over the tab.
    fn persist(&self, table: &Table) -> Result<(), StoreError> {
        let path = self.tab_path(table.spec());
        let io_error = |source: std::io::Error| StoreError::Io { path: path.clone(), source };
        let csv_error = |source: csv::Error| StoreError::Csv { path: path.clone(), source };

        let file = NamedTempFile::new_in(&self.dir).map_err(io_error)?;
        {
            let mut writer = csv::Writer::from_writer(file.as_file());
            writer.write_record(table.spec().columns).map_err(csv_error)?;
            for row in table.rows() {
                writer.write_record(row).map_err(csv_error)?;
            }
            writer.flush().map_err(io_error)?;
        }
        file.persist(&path).map_err(|error| io_error(error.error))?;
        Ok(())
    }
}
