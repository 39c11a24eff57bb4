// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-memory metric storage.

use hudshift_core::telemetry::{MetricId, MetricValue, MetricsError, MetricsResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe metric storage backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    storage: RwLock<HashMap<MetricId, MetricValue>>,
}

impl InMemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new metric, failing if the id is taken.
    pub fn insert(&self, id: MetricId, value: MetricValue) -> MetricsResult<()> {
        let mut storage = self.storage.write().map_err(|_| MetricsError::Poisoned)?;
        if storage.contains_key(&id) {
            return Err(MetricsError::AlreadyRegistered(id));
        }
        storage.insert(id, value);
        Ok(())
    }

    /// Reads the current value of a metric.
    pub fn get(&self, id: &MetricId) -> MetricsResult<MetricValue> {
        let storage = self.storage.read().map_err(|_| MetricsError::Poisoned)?;
        storage
            .get(id)
            .copied()
            .ok_or_else(|| MetricsError::MetricNotFound(id.clone()))
    }

    /// Applies `update` to a stored value in place.
    pub fn update<F>(&self, id: &MetricId, update: F) -> MetricsResult<MetricValue>
    where
        F: FnOnce(&mut MetricValue) -> MetricsResult<()>,
    {
        let mut storage = self.storage.write().map_err(|_| MetricsError::Poisoned)?;
        let value = storage
            .get_mut(id)
            .ok_or_else(|| MetricsError::MetricNotFound(id.clone()))?;
        update(value)?;
        Ok(*value)
    }

    /// Number of stored metrics.
    pub fn len(&self) -> usize {
        self.storage.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every metric in `namespace`.
    pub fn namespace(&self, namespace: &str) -> Vec<(MetricId, MetricValue)> {
        self.storage
            .read()
            .map(|storage| {
                storage
                    .iter()
                    .filter(|(id, _)| id.namespace == namespace)
                    .map(|(id, value)| (id.clone(), *value))
                    .collect()
            })
            .unwrap_or_default()
    }
}
