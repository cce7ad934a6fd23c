//! Python bindings for driving matches from Python.
//!
//! Exposes a gym-style environment over the rule engine:
//!
//! ```python
//! import morris_engine as me
//!
//! env = me.MorrisEnv()
//! obs = env.reset()
//! mask = env.legal_action_mask()
//! obs, reward, done, capture_owed, mill_formed = env.step(index)
//! ```

use numpy::{IntoPyArray, PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Action;
use crate::nn::encode;
use crate::rules::{self, Outcome, Session};

/// Python wrapper around a [`Session`] plus the step loop.
#[pyclass(name = "MorrisEnv")]
pub struct PyMorrisEnv {
    session: Session,
}

fn observation_array<'py>(py: Python<'py>, session: &Session) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let encoded = encode(session);
    let rows = encoded.shape[0];
    let cols = encoded.shape[1];
    encoded
        .tensor
        .into_pyarray_bound(py)
        .reshape([rows, cols])
        .map_err(Into::into)
}

#[pymethods]
impl PyMorrisEnv {
    /// Create a fresh environment.
    #[new]
    fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Start a new match and return the initial observation.
    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        self.session = Session::new();
        observation_array(py, &self.session)
    }

    /// Current observation (7x24, current actor's perspective).
    fn observation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        observation_array(py, &self.session)
    }

    /// 624-slot 0/1 mask over the flat action space.
    fn legal_action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        rules::legal_action_mask(&self.session).into_pyarray_bound(py)
    }

    /// Apply the action at `index`.
    ///
    /// Returns `(observation, reward, done, capture_owed, mill_formed)`.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        index: usize,
    ) -> PyResult<(Bound<'py, PyArray2<f32>>, f32, bool, bool, bool)> {
        let action = Action::from_index(index)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let result = rules::apply(&mut self.session, action)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok((
            observation_array(py, &self.session)?,
            result.reward,
            result.done,
            result.capture_owed,
            result.mill_formed,
        ))
    }

    /// Move counter (completed actions).
    #[getter]
    fn move_count(&self) -> u32 {
        self.session.move_count()
    }

    /// `"white"`, `"black"`, `"draw"`, or `None` while the match runs.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        match self.session.outcome() {
            Some(Outcome::Winner(crate::core::Player::White)) => Some("white"),
            Some(Outcome::Winner(crate::core::Player::Black)) => Some("black"),
            Some(Outcome::Draw) => Some("draw"),
            None => None,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "MorrisEnv(moves={}, current={}, over={})",
            self.session.move_count(),
            self.session.current_player(),
            self.session.is_over()
        )
    }
}

/// morris_engine: Nine Men's Morris rules engine for RL drivers.
#[pymodule]
fn morris_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMorrisEnv>()?;
    m.add("ACTION_SPACE", crate::core::ACTION_SPACE)?;
    Ok(())
}
