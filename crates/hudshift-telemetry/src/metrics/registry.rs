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

//! Registry for managing metrics.

use super::storage::InMemoryStorage;
use hudshift_core::telemetry::{MetricId, MetricValue, MetricsError, MetricsResult};
use std::sync::Arc;

/// Central registry for shifter metrics.
///
/// Registration hands out typed handles that can be stored by the owning
/// subsystem and updated without looking the metric up again.
#[derive(Debug, Clone, Default)]
pub struct MetricsRegistry {
    storage: Arc<InMemoryStorage>,
}

impl MetricsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a counter starting at zero.
    pub fn register_counter(&self, id: MetricId) -> MetricsResult<CounterHandle> {
        self.storage.insert(id.clone(), MetricValue::Counter(0))?;
        Ok(CounterHandle {
            id,
            storage: self.storage.clone(),
        })
    }

    /// Registers a gauge starting at zero.
    pub fn register_gauge(&self, id: MetricId) -> MetricsResult<GaugeHandle> {
        self.storage.insert(id.clone(), MetricValue::Gauge(0.0))?;
        Ok(GaugeHandle {
            id,
            storage: self.storage.clone(),
        })
    }

    /// Reads a metric by id.
    pub fn get(&self, id: &MetricId) -> MetricsResult<MetricValue> {
        self.storage.get(id)
    }

    /// Snapshot of every metric in `namespace`.
    pub fn namespace_metrics(&self, namespace: &str) -> Vec<(MetricId, MetricValue)> {
        self.storage.namespace(namespace)
    }

    /// Number of registered metrics.
    pub fn metric_count(&self) -> usize {
        self.storage.len()
    }
}

/// Handle to a registered counter.
#[derive(Debug, Clone)]
pub struct CounterHandle {
    id: MetricId,
    storage: Arc<InMemoryStorage>,
}

impl CounterHandle {
    /// The counter's id.
    pub fn id(&self) -> &MetricId {
        &self.id
    }

    /// Increments the counter by one, returning the new count.
    pub fn increment(&self) -> MetricsResult<u64> {
        self.increment_by(1)
    }

    /// Increments the counter by `delta`, returning the new count.
    pub fn increment_by(&self, delta: u64) -> MetricsResult<u64> {
        let value = self.storage.update(&self.id, |value| match value {
            MetricValue::Counter(count) => {
                *count = count.saturating_add(delta);
                Ok(())
            }
            other => Err(MetricsError::TypeMismatch {
                expected: "counter",
                found: other.kind(),
            }),
        })?;
        match value {
            MetricValue::Counter(count) => Ok(count),
            other => Err(MetricsError::TypeMismatch {
                expected: "counter",
                found: other.kind(),
            }),
        }
    }
}

/// Handle to a registered gauge.
#[derive(Debug, Clone)]
pub struct GaugeHandle {
    id: MetricId,
    storage: Arc<InMemoryStorage>,
}

impl GaugeHandle {
    /// The gauge's id.
    pub fn id(&self) -> &MetricId {
        &self.id
    }

    /// Sets the gauge to `value`.
    pub fn set(&self, value: f64) -> MetricsResult<()> {
        self.storage
            .update(&self.id, |stored| match stored {
                MetricValue::Gauge(gauge) => {
                    *gauge = value;
                    Ok(())
                }
                other => Err(MetricsError::TypeMismatch {
                    expected: "gauge",
                    found: other.kind(),
                }),
            })
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_increments() {
        let registry = MetricsRegistry::new();
        let counter = registry
            .register_counter(MetricId::new("shifter", "shake_triggers").with_label("source", "wall"))
            .unwrap();

        assert_eq!(counter.increment().unwrap(), 1);
        assert_eq!(counter.increment_by(4).unwrap(), 5);
        assert_eq!(registry.get(counter.id()).unwrap(), MetricValue::Counter(5));
    }

    #[test]
    fn test_gauge_set() {
        let registry = MetricsRegistry::new();
        let gauge = registry
            .register_gauge(MetricId::new("shifter", "active_shakes"))
            .unwrap();
        gauge.set(2.0).unwrap();
        assert_eq!(registry.get(gauge.id()).unwrap(), MetricValue::Gauge(2.0));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let registry = MetricsRegistry::new();
        let id = MetricId::new("shifter", "registered_panels");
        registry.register_gauge(id.clone()).unwrap();
        assert_eq!(
            registry.register_counter(id.clone()).unwrap_err(),
            MetricsError::AlreadyRegistered(id)
        );
        assert_eq!(registry.metric_count(), 1);
    }

    #[test]
    fn test_namespace_snapshot() {
        let registry = MetricsRegistry::new();
        registry
            .register_gauge(MetricId::new("shifter", "a"))
            .unwrap();
        registry.register_gauge(MetricId::new("other", "b")).unwrap();
        let shifter = registry.namespace_metrics("shifter");
        assert_eq!(shifter.len(), 1);
        assert_eq!(shifter[0].0.name, "a");
    }
}
