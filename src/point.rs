//! The point pool handed to the clustering core
//!
//! A point is one row of the pool: a value for every declared attribute plus a
//! mutable cluster assignment. Points are identified by their row index, so
//! two seats with identical measurements are still distinct points.

use crate::error::DataShapeError;
use ndarray::{Array2, ArrayView1};
use std::collections::BTreeMap;

/// Finite, indexable collection of points sharing one attribute set
#[derive(Debug, Clone, PartialEq)]
pub struct PointPool {
    /// Attribute names, one per column of `values`
    attributes: Vec<String>,
    /// Measurements as (n_points, n_attributes)
    values: Array2<f64>,
    /// Cluster id of each point, `None` until a run assigns it
    assignments: Vec<Option<usize>>,
}

impl PointPool {
    /// Build a pool from a value matrix whose columns follow `attributes`.
    ///
    /// Every value must be finite; a NaN or infinity would poison every
    /// centroid it touches.
    pub fn new(attributes: Vec<String>, values: Array2<f64>) -> Result<Self, DataShapeError> {
        if attributes.is_empty() {
            return Err(DataShapeError::NoAttributes);
        }
        if values.ncols() != attributes.len() {
            return Err(DataShapeError::ShapeMismatch {
                expected: attributes.len(),
                found: values.ncols(),
            });
        }
        for (point, row) in values.outer_iter().enumerate() {
            if let Some(col) = row.iter().position(|v| !v.is_finite()) {
                return Err(DataShapeError::NonFiniteValue {
                    point,
                    attribute: attributes[col].clone(),
                });
            }
        }

        let assignments = vec![None; values.nrows()];
        Ok(Self {
            attributes,
            values,
            assignments,
        })
    }

    /// Build a pool from name-to-value records.
    ///
    /// Each record must carry every name in `attributes`; extra keys are
    /// ignored.
    pub fn from_records(
        attributes: Vec<String>,
        records: &[BTreeMap<String, f64>],
    ) -> Result<Self, DataShapeError> {
        let mut flat = Vec::with_capacity(records.len() * attributes.len());
        for (point, record) in records.iter().enumerate() {
            for attribute in &attributes {
                let value =
                    record
                        .get(attribute)
                        .ok_or_else(|| DataShapeError::MissingAttribute {
                            point,
                            attribute: attribute.clone(),
                        })?;
                flat.push(*value);
            }
        }

        let values = Array2::from_shape_vec((records.len(), attributes.len()), flat).map_err(
            |_| DataShapeError::ShapeMismatch {
                expected: attributes.len(),
                found: 0,
            },
        )?;
        Self::new(attributes, values)
    }

    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Measurements of one point, ordered like `attributes()`
    pub fn point(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.row(index)
    }

    /// Value of a named attribute for one point
    pub fn value(&self, index: usize, attribute: &str) -> Option<f64> {
        let col = self.attributes.iter().position(|a| a == attribute)?;
        self.values.get((index, col)).copied()
    }

    pub fn cluster_id(&self, index: usize) -> Option<usize> {
        self.assignments[index]
    }

    pub fn assignments(&self) -> &[Option<usize>] {
        &self.assignments
    }

    pub(crate) fn assign(&mut self, index: usize, cluster_id: usize) {
        self.assignments[index] = Some(cluster_id);
    }

    /// Forget every cluster assignment before a fresh run
    pub(crate) fn clear_assignments(&mut self) {
        self.assignments.iter_mut().for_each(|a| *a = None);
    }
}
