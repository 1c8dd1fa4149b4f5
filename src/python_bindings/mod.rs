//! Python bindings that let a Python workflow host drive cursors via PyO3.
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyDict, PyModule, PyTuple},
    IntoPyObject,
};

use crate::{CursorConfig, CursorId, CursorRegistry, Extensions, Mode, Value};

/// Python-facing range iterator node.
///
/// One instance serves every node id in a workflow; state is kept per
/// `unique_id`.
#[pyclass(name = "RangeIterator")]
#[derive(Debug)]
pub struct PyRangeIterator {
    registry: CursorRegistry,
}

#[pymethods]
impl PyRangeIterator {
    /// Output names in tuple order.
    #[classattr]
    const RETURN_NAMES: (&'static str, &'static str, &'static str) =
        ("current_value", "next_value", "cycle_completed");

    #[new]
    /// Create an iterator with no cursors.
    pub fn new() -> Self {
        Self {
            registry: CursorRegistry::new(),
        }
    }

    /// Always `NaN`, which the host treats as "changed" on every run.
    ///
    /// The host passes the node inputs as arguments; they are ignored.
    #[staticmethod]
    #[pyo3(signature = (*_args, **_kwargs))]
    #[allow(non_snake_case)]
    pub fn IS_CHANGED(
        _args: &Bound<'_, PyTuple>,
        _kwargs: Option<&Bound<'_, PyDict>>,
    ) -> f64 {
        f64::NAN
    }

    /// Advance the cursor for `unique_id` by one step.
    ///
    /// Returns:
    ///     Tuple `(current_value, next_value, cycle_completed)`; whole
    ///     numbers come back as `int`.
    #[pyo3(signature = (
        unique_id,
        start,
        end,
        step,
        reset_counter,
        custom_values,
        mode = "cycle",
        value_list = None,
        **kwargs
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn range_iterator(
        &mut self,
        py: Python<'_>,
        unique_id: String,
        start: i64,
        end: i64,
        step: i64,
        reset_counter: bool,
        custom_values: String,
        mode: &str,
        value_list: Option<Vec<Bound<'_, PyAny>>>,
        kwargs: Option<&Bound<'_, PyDict>>,
    ) -> PyResult<(PyObject, PyObject, bool)> {
        let mode: Mode = mode
            .parse()
            .map_err(|err: crate::CursorError| PyValueError::new_err(err.to_string()))?;

        let mut config = CursorConfig::range(start, end, step, mode)
            .with_custom_values(custom_values)
            .with_reset(reset_counter);
        if let Some(values) = value_list {
            let values = values.iter().map(value_from_py).collect::<PyResult<Vec<_>>>()?;
            config = config.with_value_list(values);
        }

        let mut extensions = Extensions::new();
        if let Some(kwargs) = kwargs {
            for (key, value) in kwargs.iter() {
                extensions.insert(key.extract::<String>()?, Box::new(value.unbind()));
            }
        }

        let id = CursorId::new(unique_id);
        self.registry.ensure(id.clone());
        let out = self
            .registry
            .advance(&id, &config, &extensions)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;

        Ok((to_py(py, out.current)?, to_py(py, out.next)?, out.cycle_completed))
    }

    /// Drop the cursor for `unique_id`; returns whether one existed.
    pub fn evict(&mut self, unique_id: String) -> bool {
        self.registry.evict(&CursorId::new(unique_id)).is_some()
    }

    /// Number of live cursors.
    pub fn __len__(&self) -> usize {
        self.registry.len()
    }
}

/// Python `int` stays exact; anything else goes through `float`.
fn value_from_py(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    match obj.extract::<i64>() {
        Ok(i) => Ok(Value::Int(i)),
        Err(_) => Ok(Value::from_f64(obj.extract::<f64>()?)),
    }
}

fn to_py(py: Python<'_>, value: Value) -> PyResult<PyObject> {
    Ok(match value {
        Value::Int(i) => i.into_pyobject(py)?.into_any().unbind(),
        Value::Float(x) => x.into_pyobject(py)?.into_any().unbind(),
    })
}

/// Create Python module.
#[pymodule]
pub fn range_iter_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRangeIterator>()?;
    Ok(())
}
