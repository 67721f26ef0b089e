//! Labeled multi-dimensional datasets.
//!
//! A [`Dataset`] associates named arrays with named dimensions. Coordinates
//! and data variables share one dimension table, so every array that uses
//! `y` agrees on its length.

use std::collections::BTreeMap;

use ndarray::{Array, ArrayD, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A named-dimension array.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Dimension names, one per array axis.
    pub dims: Vec<String>,
    /// The values.
    pub data: ArrayD<f64>,
}

impl Variable {
    /// Wrap an array of any rank with its dimension names.
    pub fn new<D: Dimension>(dims: &[&str], data: Array<f64, D>) -> Self {
        Self {
            dims: dims.iter().map(|d| d.to_string()).collect(),
            data: data.into_dyn(),
        }
    }

    /// Array shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Smallest and largest value, ignoring NaN. `None` for empty arrays.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    fn summary(&self) -> VariableSummary {
        let range = self.value_range();
        VariableSummary {
            dims: self.dims.clone(),
            shape: self.shape().to_vec(),
            min: range.map(|(lo, _)| lo),
            max: range.map(|(_, hi)| hi),
        }
    }
}

/// In-memory labeled dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    dims: BTreeMap<String, usize>,
    coords: BTreeMap<String, Variable>,
    data_vars: BTreeMap<String, Variable>,
    attrs: BTreeMap<String, String>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coordinate variable, registering its dimensions.
    pub fn with_coord(mut self, name: &str, var: Variable) -> Result<Self> {
        self.register_dims(name, &var)?;
        self.coords.insert(name.to_string(), var);
        Ok(self)
    }

    /// Add a data variable, registering its dimensions.
    pub fn with_data_var(mut self, name: &str, var: Variable) -> Result<Self> {
        self.register_dims(name, &var)?;
        self.data_vars.insert(name.to_string(), var);
        Ok(self)
    }

    /// Attach a string attribute.
    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    fn register_dims(&mut self, name: &str, var: &Variable) -> Result<()> {
        if var.dims.len() != var.ndim() {
            return Err(GridError::RankMismatch {
                name: name.to_string(),
                dims: var.dims.len(),
                rank: var.ndim(),
            });
        }

        // Check everything first so a failed insert leaves the table untouched.
        for (dim, &len) in var.dims.iter().zip(var.shape()) {
            if let Some(&existing) = self.dims.get(dim) {
                if existing != len {
                    return Err(GridError::DimensionConflict {
                        dim: dim.clone(),
                        existing,
                        requested: len,
                    });
                }
            }
        }

        for (dim, &len) in var.dims.iter().zip(var.shape()) {
            self.dims.insert(dim.clone(), len);
        }
        Ok(())
    }

    /// Dimension table.
    pub fn dims(&self) -> &BTreeMap<String, usize> {
        &self.dims
    }

    /// Length of a dimension, if registered.
    pub fn dim_len(&self, dim: &str) -> Option<usize> {
        self.dims.get(dim).copied()
    }

    /// All coordinates.
    pub fn coords(&self) -> &BTreeMap<String, Variable> {
        &self.coords
    }

    /// All data variables.
    pub fn data_vars(&self) -> &BTreeMap<String, Variable> {
        &self.data_vars
    }

    /// Attributes.
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    /// Look up an attribute.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Look up a coordinate.
    pub fn coord(&self, name: &str) -> Result<&Variable> {
        self.coords
            .get(name)
            .ok_or_else(|| GridError::VariableNotFound(name.to_string()))
    }

    /// Look up a data variable.
    pub fn data_var(&self, name: &str) -> Result<&Variable> {
        self.data_vars
            .get(name)
            .ok_or_else(|| GridError::VariableNotFound(name.to_string()))
    }

    /// Look up a coordinate or data variable, coordinates first.
    pub fn variable(&self, name: &str) -> Result<&Variable> {
        self.coords
            .get(name)
            .or_else(|| self.data_vars.get(name))
            .ok_or_else(|| GridError::VariableNotFound(name.to_string()))
    }

    /// Shape of a named variable.
    pub fn shape_of(&self, name: &str) -> Result<Vec<usize>> {
        Ok(self.variable(name)?.shape().to_vec())
    }

    /// Names of 1D coordinates indexed by the dimension of the same name.
    pub fn dimension_coords(&self) -> Vec<&str> {
        self.coords
            .iter()
            .filter(|(name, var)| var.dims.len() == 1 && var.dims[0] == **name)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Names of coordinates that are not dimension coordinates.
    pub fn auxiliary_coords(&self) -> Vec<&str> {
        self.coords
            .iter()
            .filter(|(name, var)| !(var.dims.len() == 1 && var.dims[0] == **name))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Serializable overview of the dataset's structure and value ranges.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            dims: self.dims.clone(),
            coords: self
                .coords
                .iter()
                .map(|(name, var)| (name.clone(), var.summary()))
                .collect(),
            data_vars: self
                .data_vars
                .iter()
                .map(|(name, var)| (name.clone(), var.summary()))
                .collect(),
            attrs: self.attrs.clone(),
        }
    }
}

/// Structure of a single variable, without its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSummary {
    pub dims: Vec<String>,
    pub shape: Vec<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Structure of a dataset, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dims: BTreeMap<String, usize>,
    pub coords: BTreeMap<String, VariableSummary>,
    pub data_vars: BTreeMap<String, VariableSummary>,
    pub attrs: BTreeMap<String, String>,
}
