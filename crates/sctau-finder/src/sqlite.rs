//! SQLite implementation of the query-execution collaborator.

use std::path::Path;

use rusqlite::types::{ToSqlOutput, Value};
use rusqlite::{params_from_iter, Connection, OpenFlags, Row, ToSql};

use crate::{FinderError, FinderResult, SqlExecutor, SqlParam, SqlRow, SqlValue};

/// A [`SqlExecutor`] backed by a single SQLite connection.
///
/// The connection is held for the lifetime of the executor and closed when
/// it is dropped. It is not thread-safe in this design: concurrent queries
/// are out of scope and must be serialized by the caller.
pub struct SqliteExecutor {
    conn: Connection,
    max_rows: usize,
}

impl SqliteExecutor {
    /// Opens the database at `path` read-only.
    ///
    /// `max_rows` is the default cap applied to find operations.
    pub fn open(path: impl AsRef<Path>, max_rows: usize) -> FinderResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
                | OpenFlags::SQLITE_OPEN_URI,
        )
        .map_err(data_access)?;
        Ok(Self::new(conn, max_rows))
    }

    /// Wraps an already-open connection.
    pub fn new(conn: Connection, max_rows: usize) -> Self {
        Self { conn, max_rows }
    }

    /// Returns the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SqlExecutor for SqliteExecutor {
    fn execute(&self, sql: &str, params: &[SqlParam], max_rows: usize) -> FinderResult<Vec<SqlRow>> {
        let mut stmt = self.conn.prepare(sql).map_err(data_access)?;
        let column_count = stmt.column_count();

        let mut rows = stmt
            .query(params_from_iter(params.iter()))
            .map_err(data_access)?;

        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(data_access)? {
            if max_rows != 0 && result.len() == max_rows {
                break;
            }
            let mut values = Vec::with_capacity(column_count);
            for index in 0..column_count {
                values.push(read_value(row, index)?);
            }
            result.push(values);
        }

        Ok(result)
    }

    fn max_rows(&self) -> usize {
        self.max_rows
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::Id(id) => {
                let id = i64::try_from(*id)
                    .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
                Ok(ToSqlOutput::Owned(Value::Integer(id)))
            }
            SqlParam::Text(text) => text.to_sql(),
        }
    }
}

fn read_value(row: &Row<'_>, index: usize) -> FinderResult<SqlValue> {
    let value: Value = row.get(index).map_err(data_access)?;
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Integer(i) => u64::try_from(i).map(SqlValue::Id).map_err(|_| {
            FinderError::DataAccess(format!("negative SCTID value {i} in column {index}"))
        }),
        Value::Text(text) => Ok(SqlValue::Text(text)),
        other => Err(FinderError::DataAccess(format!(
            "unsupported column type {} at column {index}",
            other.data_type()
        ))),
    }
}

fn data_access(err: rusqlite::Error) -> FinderError {
    FinderError::DataAccess(err.to_string())
}
