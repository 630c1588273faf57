// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pet CRUD operations.
//!
//! SQL is assembled from the contract's column names and the caller's
//! projection/sort strings; every value travels as a positional `?`
//! parameter, never interpolated into the statement text.

use rusqlite::types::Value;
use shelter_core::contract;
use shelter_core::{FieldValue, PetValues, ShelterError};

use crate::database::{map_tr_err, Database};

/// Query pets with an optional projection, filter, and sort order.
///
/// Returns one [`PetValues`] per row holding exactly the projected columns.
pub async fn query_pets(
    db: &Database,
    projection: Option<Vec<String>>,
    selection: Option<String>,
    selection_args: Vec<FieldValue>,
    sort_order: Option<String>,
) -> Result<Vec<PetValues>, ShelterError> {
    db.connection()
        .call(move |conn| {
            let columns = match &projection {
                Some(cols) if !cols.is_empty() => cols.join(", "),
                _ => contract::ALL_COLUMNS.join(", "),
            };
            let mut sql = format!("SELECT {columns} FROM {}", contract::TABLE_PETS);
            if let Some(filter) = &selection {
                sql.push_str(" WHERE ");
                sql.push_str(filter);
            }
            if let Some(order) = &sort_order {
                sql.push_str(" ORDER BY ");
                sql.push_str(order);
            }

            let mut stmt = conn.prepare(&sql)?;
            let names: Vec<String> = stmt
                .column_names()
                .iter()
                .map(|name| name.to_string())
                .collect();
            let params: Vec<Value> = selection_args.iter().map(to_sql_value).collect();

            let mut rows = stmt.query(rusqlite::params_from_iter(params))?;
            let mut result = Vec::new();
            while let Some(row) = rows.next()? {
                let mut values = PetValues::new();
                for (i, name) in names.iter().enumerate() {
                    let raw: Value = row.get(i)?;
                    values.put(name, field_from_sql(i, raw)?);
                }
                result.push(values);
            }
            Ok(result)
        })
        .await
        .map_err(map_tr_err)
}

/// Insert a pet. Returns the auto-assigned row id.
pub async fn insert_pet(db: &Database, values: &PetValues) -> Result<i64, ShelterError> {
    let values = values.clone();
    db.connection()
        .call(move |conn| {
            let columns: Vec<&str> = values.columns().collect();
            let placeholders = vec!["?"; columns.len()].join(", ");
            let sql = format!(
                "INSERT INTO {} ({}) VALUES ({})",
                contract::TABLE_PETS,
                columns.join(", "),
                placeholders,
            );
            let params: Vec<Value> = values.iter().map(|(_, v)| to_sql_value(v)).collect();
            conn.execute(&sql, rusqlite::params_from_iter(params))?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(map_tr_err)
}

/// Update pets matching the filter with a sparse payload.
///
/// Filter placeholders are bare `?` and bind after the payload values.
/// Returns the affected row count.
pub async fn update_pets(
    db: &Database,
    values: &PetValues,
    selection: Option<String>,
    selection_args: Vec<FieldValue>,
) -> Result<u64, ShelterError> {
    let values = values.clone();
    db.connection()
        .call(move |conn| {
            let assignments: Vec<String> = values
                .columns()
                .map(|column| format!("{column} = ?"))
                .collect();
            let mut sql = format!(
                "UPDATE {} SET {}",
                contract::TABLE_PETS,
                assignments.join(", "),
            );
            if let Some(filter) = &selection {
                sql.push_str(" WHERE ");
                sql.push_str(filter);
            }
            let params: Vec<Value> = values
                .iter()
                .map(|(_, v)| to_sql_value(v))
                .chain(selection_args.iter().map(to_sql_value))
                .collect();
            let affected = conn.execute(&sql, rusqlite::params_from_iter(params))?;
            Ok(affected as u64)
        })
        .await
        .map_err(map_tr_err)
}

/// Delete pets matching the filter (all pets when no filter is given).
/// Returns the affected row count.
pub async fn delete_pets(
    db: &Database,
    selection: Option<String>,
    selection_args: Vec<FieldValue>,
) -> Result<u64, ShelterError> {
    db.connection()
        .call(move |conn| {
            let mut sql = format!("DELETE FROM {}", contract::TABLE_PETS);
            if let Some(filter) = &selection {
                sql.push_str(" WHERE ");
                sql.push_str(filter);
            }
            let params: Vec<Value> = selection_args.iter().map(to_sql_value).collect();
            let affected = conn.execute(&sql, rusqlite::params_from_iter(params))?;
            Ok(affected as u64)
        })
        .await
        .map_err(map_tr_err)
}

fn to_sql_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => Value::Null,
        FieldValue::Integer(v) => Value::Integer(*v),
        FieldValue::Text(s) => Value::Text(s.clone()),
    }
}

fn field_from_sql(idx: usize, value: Value) -> Result<FieldValue, rusqlite::Error> {
    match value {
        Value::Null => Ok(FieldValue::Null),
        Value::Integer(v) => Ok(FieldValue::Integer(v)),
        Value::Text(s) => Ok(FieldValue::Text(s)),
        other => Err(rusqlite::Error::FromSqlConversionFailure(
            idx,
            other.data_type(),
            "pets columns are integer or text".into(),
        )),
    }
}
