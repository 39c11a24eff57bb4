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

//! Metric identifiers and values.

use std::fmt::{self, Display};
use std::hash::Hash;

/// A structured identifier for a metric: `namespace:name[k=v,...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricId {
    /// The broad category of the metric (e.g. "shifter").
    pub namespace: String,
    /// The specific name of the metric (e.g. "active_shakes").
    pub name: String,
    /// Key-value labels, kept sorted by key.
    pub labels: Vec<(String, String)>,
}

impl MetricId {
    /// Creates a new `MetricId` with a namespace and a name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            labels: Vec::new(),
        }
    }

    /// Adds a dimensional label, returning the extended id.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.push((key.into(), value.into()));
        self.labels.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }
}

impl Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)?;
        if !self.labels.is_empty() {
            let labels = self
                .labels
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(",");
            write!(f, "[{labels}]")?;
        }
        Ok(())
    }
}

/// The current value of a metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// A monotonically increasing count.
    Counter(u64),
    /// A value that can go up or down.
    Gauge(f64),
}

impl MetricValue {
    /// Returns a short name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            MetricValue::Counter(_) => "counter",
            MetricValue::Gauge(_) => "gauge",
        }
    }
}

/// Errors raised by metric storage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// The requested metric was never registered.
    #[error("metric not found: {0}")]
    MetricNotFound(MetricId),
    /// A metric with this id is already registered.
    #[error("metric already registered: {0}")]
    AlreadyRegistered(MetricId),
    /// An update targeted a metric of another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind the operation expected.
        expected: &'static str,
        /// The kind actually stored.
        found: &'static str,
    },
    /// The storage lock was poisoned by a panicking writer.
    #[error("metrics storage is poisoned")]
    Poisoned,
}

/// Result type for metric operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
