use crate::model::traits::*;
use crate::types::error::Error;
use crate::types::links::{Db, JsonMap};
use anyhow::Result;

fn not_found<T: Model>(id: i64) -> anyhow::Error {
    Error::none_error(format!("{} {} not found", T::table_name(), id).as_str()).into()
}

pub fn check_fields<T: Model>(fields: &[&str]) -> Result<()> {
    match fields.iter().find(|f| !T::field_names().contains(*f)) {
        Some(f) => Err(Error::bad_request(format!("unknown field {} of {}", f, T::table_name()).as_str()).into()),
        None => Ok(()),
    }
}

/// Every condition is an exact match on the row's json value.
pub fn matches(mp: &JsonMap, conditions: &JsonMap) -> bool {
    conditions.iter().all(|(k, v)| mp.get(k) == Some(v))
}

pub fn project(mut mp: JsonMap, fields: &[&str]) -> JsonMap {
    if fields.is_empty() {
        return mp;
    }
    fields
        .iter()
        .filter_map(|f| mp.remove(*f).map(|v| (f.to_string(), v)))
        .collect()
}

/// Overlays `patch` onto `x`. Unknown fields are rejected and `id` is kept.
pub fn merge<T: Model>(x: T, patch: &JsonMap) -> Result<T> {
    let keys: Vec<&str> = patch.keys().map(|k| k.as_str()).collect();
    check_fields::<T>(&keys)?;
    let id = x.id();
    let mut mp: JsonMap = x.into();
    for (k, v) in patch.iter().filter(|(k, _)| k.as_str() != "id") {
        mp.insert(k.clone(), v.clone());
    }
    let mut merged = T::try_from(mp).map_err(|e| Error::bad_request(e.as_str()))?;
    merged.set_id(id);
    Ok(merged)
}

pub async fn insert<T: Model>(db: &Db, mut x: T) -> Result<T> {
    let mut db = db.write().await;
    let table = T::table_mut(&mut db);
    let id = table.issue_id();
    x.set_id(id);
    table.rows.push(x.clone());
    Ok(x)
}

pub async fn list<T: Model>(db: &Db) -> Vec<T> {
    T::table(&*db.read().await).rows.clone()
}

pub async fn get_object<T: Model>(db: &Db, id: i64) -> Result<T> {
    T::table(&*db.read().await)
        .get(id)
        .cloned()
        .ok_or_else(|| not_found::<T>(id))
}

pub async fn find<T: Model>(db: &Db, conditions: JsonMap, fields: &[&str]) -> Result<Vec<JsonMap>> {
    let keys: Vec<&str> = conditions.keys().map(|k| k.as_str()).collect();
    check_fields::<T>(&keys)?;
    check_fields::<T>(fields)?;
    Ok(list::<T>(db)
        .await
        .into_iter()
        .map(|x| -> JsonMap { x.into() })
        .filter(|mp| matches(mp, &conditions))
        .map(|mp| project(mp, fields))
        .collect())
}

pub async fn count<T: Model>(db: &Db, conditions: JsonMap) -> Result<i64> {
    Ok(find::<T>(db, conditions, &["id"]).await?.len() as i64)
}

pub async fn get_id<T: Model>(db: &Db, conditions: JsonMap) -> Result<i64> {
    find::<T>(db, conditions, &["id"])
        .await?
        .first()
        .and_then(|mp| mp.get("id"))
        .and_then(|v| v.as_i64())
        .ok_or_else(|| Error::none_error(format!("no such {}", T::table_name()).as_str()).into())
}

/// Replaces the row carrying `x`'s id.
pub async fn replace<T: Model>(db: &Db, x: T) -> Result<()> {
    let mut db = db.write().await;
    match T::table_mut(&mut db).get_mut(x.id()) {
        Some(row) => {
            *row = x;
            Ok(())
        }
        None => Err(not_found::<T>(x.id())),
    }
}

pub async fn update_by_map<T: Model>(db: &Db, id: i64, columns: &JsonMap) -> Result<T> {
    let mut db = db.write().await;
    let row = T::table_mut(&mut db).get_mut(id).ok_or_else(|| not_found::<T>(id))?;
    let merged = merge(row.clone(), columns)?;
    *row = merged.clone();
    Ok(merged)
}

pub async fn delete<T: Model>(db: &Db, id: i64) -> Result<T> {
    let mut db = db.write().await;
    let table = T::table_mut(&mut db);
    match table.position(id) {
        Some(i) => Ok(table.rows.remove(i)),
        None => Err(not_found::<T>(id)),
    }
}
