use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::store::keys;
use crate::store::operations::topics::Topic;
use crate::store::{Store, StoreError};

const VERSION_KEY: &str = "_meta:version";

type MigrationFn = fn(&Store) -> Result<(), StoreError>;

fn migrations() -> Vec<(&'static str, MigrationFn)> {
    vec![
        ("001_initial", m001_initial),
        ("002_topic_title_index", m002_topic_title_index),
    ]
}

/// 执行所有未应用的迁移。
///
/// - 每个迁移必须幂等：进程可能在迁移完成但版本号写入前崩溃，重启后会再次执行。
/// - 版本号在每个迁移成功后立即持久化。
/// - 仅向前：set_version 拒绝降级。
pub fn run(store: &Store) -> Result<(), StoreError> {
    let current = get_current_version(store)?;
    let all = migrations();

    for (index, (name, func)) in all.iter().enumerate() {
        let version = (index + 1) as u32;
        if version > current {
            tracing::info!(version, name, "Running migration");
            func(store)?;
            set_version(store, version)?;
            tracing::info!(version, name, "Migration complete");
        } else {
            tracing::debug!(version, name, "Migration already applied, skipping");
        }
    }

    Ok(())
}

pub fn get_current_version(store: &Store) -> Result<u32, StoreError> {
    match store.meta.get(VERSION_KEY.as_bytes())? {
        Some(raw) => {
            let bytes: [u8; 4] = raw.as_ref().try_into().map_err(|_| StoreError::Migration {
                version: 0,
                message: format!("corrupt version marker ({} bytes)", raw.len()),
            })?;
            Ok(u32::from_be_bytes(bytes))
        }
        None => Ok(0),
    }
}

pub fn set_version(store: &Store, version: u32) -> Result<(), StoreError> {
    let current = get_current_version(store)?;
    if version < current {
        return Err(StoreError::Migration {
            version,
            message: format!("Refuse to downgrade from {} to {}", current, version),
        });
    }

    store
        .meta
        .insert(VERSION_KEY.as_bytes(), &version.to_be_bytes())?;
    Ok(())
}

fn m001_initial(_store: &Store) -> Result<(), StoreError> {
    Ok(())
}

/// 同名主题只能有一个索引项：有讲解的优先，其次取最新创建的
fn m002_topic_title_index(store: &Store) -> Result<(), StoreError> {
    let mut best: HashMap<String, (bool, DateTime<Utc>, String)> = HashMap::new();

    for item in store.topics.iter() {
        let (_, value) = item?;
        let topic: Topic = Store::deserialize(&value)?;
        let prefix = keys::explanation_prefix(&topic.id);
        let has_explanation = store
            .explanations
            .scan_prefix(prefix.as_bytes())
            .next()
            .transpose()?
            .is_some();

        let index_key = keys::topic_title_index_key(&topic.title);
        let rank = (has_explanation, topic.created_at);
        match best.get(&index_key) {
            Some((has, created, _)) if (*has, *created) >= rank => {}
            _ => {
                best.insert(index_key, (has_explanation, topic.created_at, topic.id));
            }
        }
    }

    for (index_key, (_, _, topic_id)) in best {
        store
            .topics_by_title
            .insert(index_key.as_bytes(), topic_id.as_bytes())?;
    }

    Ok(())
}
