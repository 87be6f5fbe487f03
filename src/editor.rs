//! Editing session for a single B-spline.
//!
//! A [`SplineEditor`] owns the control points, the degree, the knot mode and
//! a memoized knot vector. Every edit marks the knot vector stale; reading the
//! knot vector or the sampled curve rebuilds it first when needed. The sampled
//! curve itself is never cached.
//!
//! # Example
//!
//! ```
//! use knotwork::{Degree, KnotState, SplineEditor};
//!
//! let mut editor: SplineEditor<f64> = SplineEditor::new(Degree::Quadratic, true);
//! editor.add_point(0.0, 0.0);
//! editor.add_point(50.0, 0.0);
//! assert!(!editor.has_sufficient_points());
//!
//! editor.add_point(100.0, 50.0);
//! assert_eq!(editor.knot_state(), KnotState::Stale);
//! assert_eq!(editor.knot_vector().as_slice(), &[0, 1, 2, 3, 4, 5]);
//! assert_eq!(editor.knot_state(), KnotState::Fresh);
//! assert_eq!(editor.sampled_curve().len(), 21);
//! ```

use crate::config::{EditorConfig, DEFAULT_HANDLE_SIZE};
use crate::curves::{evaluate, try_evaluate, Degree, KnotMode, KnotVector, SampleOptions};
use crate::error::EditorError;
use crate::primitives::Point2;
use num_traits::Float;

/// Whether the memoized knot vector matches the current session inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnotState {
    /// Points, degree or mode changed since the last rebuild.
    Stale,
    /// The knot vector reflects the current inputs.
    Fresh,
}

/// An interactive B-spline editing session.
#[derive(Debug, Clone)]
pub struct SplineEditor<F> {
    points: Vec<Point2<F>>,
    degree: Degree,
    mode: KnotMode,
    knots: KnotVector,
    state: KnotState,
    selected: Option<usize>,
    handle_size: F,
    options: SampleOptions<F>,
}

impl<F: Float> SplineEditor<F> {
    /// Creates an empty session.
    pub fn new(degree: Degree, uniform: bool) -> Self {
        Self {
            points: Vec::new(),
            degree,
            mode: KnotMode::from_uniform(uniform),
            knots: KnotVector::default(),
            state: KnotState::Stale,
            selected: None,
            handle_size: F::from(DEFAULT_HANDLE_SIZE).unwrap_or_else(F::zero),
            options: SampleOptions::default(),
        }
    }

    /// Creates a session from a configuration, including its seed points.
    pub fn from_config(config: &EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;

        let mut editor = Self::new(config.degree, config.uniform);
        editor.handle_size = cast(config.handle_size, "handle_size")?;
        editor.options = SampleOptions::new(cast(config.sampling_step, "sampling_step")?)?;
        for &[x, y] in &config.seed_points {
            editor.add_point(cast(x, "seed point")?, cast(y, "seed point")?);
        }

        log::info!(
            "Editor ready: {} points, mode {}, {}",
            editor.points.len(),
            editor.degree,
            editor.mode
        );
        Ok(editor)
    }

    // ── Inbound edits ──────────────────────────────────────────────────

    /// Appends a control point and selects it.
    pub fn add_point(&mut self, x: F, y: F) -> usize {
        self.points.push(Point2::new(x, y));
        let index = self.points.len() - 1;
        self.selected = Some(index);
        self.invalidate();
        index
    }

    /// Moves the control point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn move_point(&mut self, index: usize, x: F, y: F) {
        assert!(
            index < self.points.len(),
            "Control point index {} out of range for {} points",
            index,
            self.points.len()
        );
        self.points[index] = Point2::new(x, y);
        self.invalidate();
    }

    /// Moves the control point at `index`, returning an error if it does not exist.
    pub fn try_move_point(&mut self, index: usize, x: F, y: F) -> Result<(), EditorError> {
        self.check_index(index)?;
        self.move_point(index, x, y);
        Ok(())
    }

    /// Removes the control point at `index`; later points shift down.
    ///
    /// The selection moves to the last remaining point, or to none when the
    /// set becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_point(&mut self, index: usize) -> Point2<F> {
        assert!(
            index < self.points.len(),
            "Control point index {} out of range for {} points",
            index,
            self.points.len()
        );
        let removed = self.points.remove(index);
        self.selected = self.points.len().checked_sub(1);
        self.invalidate();
        removed
    }

    /// Removes the control point at `index`, returning an error if it does not exist.
    pub fn try_remove_point(&mut self, index: usize) -> Result<Point2<F>, EditorError> {
        self.check_index(index)?;
        Ok(self.remove_point(index))
    }

    /// Removes the selected control point, if any.
    pub fn remove_selected(&mut self) -> Option<Point2<F>> {
        let index = self.selected?;
        Some(self.remove_point(index))
    }

    /// Changes the degree. Setting the current degree is a no-op.
    pub fn set_degree(&mut self, degree: Degree) {
        if degree == self.degree {
            return;
        }
        self.degree = degree;
        log::info!("Mode: {}", degree);
        self.invalidate();
    }

    /// Advances to the next degree, wrapping from Quintic to Linear.
    pub fn cycle_degree(&mut self) -> Degree {
        self.set_degree(self.degree.next());
        self.degree
    }

    /// Selects the knot-spacing policy. Setting the current mode is a no-op.
    pub fn set_mode(&mut self, mode: KnotMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        log::info!("{}", mode);
        self.invalidate();
    }

    /// Switches between uniform (`true`) and clamped (`false`) knots.
    pub fn set_uniform(&mut self, uniform: bool) {
        self.set_mode(KnotMode::from_uniform(uniform));
    }

    /// Flips between uniform and clamped knots.
    pub fn toggle_uniform(&mut self) -> KnotMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Replaces the sampling resolution. The knot vector stays valid.
    pub fn set_sample_options(&mut self, options: SampleOptions<F>) {
        self.options = options;
    }

    // ── Selection and hit testing ──────────────────────────────────────

    /// Returns the selected control point index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Sets or clears the selection.
    ///
    /// # Panics
    ///
    /// Panics if `index` is `Some` and out of range.
    pub fn select(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            assert!(
                i < self.points.len(),
                "Control point index {} out of range for {} points",
                i,
                self.points.len()
            );
        }
        self.selected = index;
    }

    /// Returns the first control point whose grab handle contains `(x, y)`.
    pub fn point_at(&self, x: F, y: F) -> Option<usize> {
        let pos = Point2::new(x, y);
        self.points
            .iter()
            .position(|&p| pos.within_square(p, self.handle_size))
    }

    // ── Outbound queries ───────────────────────────────────────────────

    /// Returns the control points in index order.
    pub fn control_points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the current degree.
    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Returns the current knot-spacing policy.
    pub fn mode(&self) -> KnotMode {
        self.mode
    }

    /// Returns true when knots are uniform.
    pub fn is_uniform(&self) -> bool {
        self.mode.is_uniform()
    }

    /// Returns the half-size of the control point grab handles.
    pub fn handle_size(&self) -> F {
        self.handle_size
    }

    /// Returns the sampling resolution.
    pub fn sample_options(&self) -> &SampleOptions<F> {
        &self.options
    }

    /// Returns whether the memoized knot vector is up to date.
    pub fn knot_state(&self) -> KnotState {
        self.state
    }

    /// Returns true when there are at least as many points as the degree.
    pub fn has_sufficient_points(&self) -> bool {
        self.points.len() >= self.degree.value()
    }

    /// Returns the knot vector, rebuilding it first if stale.
    pub fn knot_vector(&mut self) -> &KnotVector {
        self.refresh();
        &self.knots
    }

    /// Samples the curve from the current points.
    ///
    /// Returns an empty vector when [`has_sufficient_points`](Self::has_sufficient_points)
    /// is false.
    pub fn sampled_curve(&mut self) -> Vec<Point2<F>> {
        self.refresh();
        evaluate(&self.points, &self.knots, self.degree.value(), &self.options)
    }

    /// Samples the curve, reporting too few control points or an unusably
    /// small sampling step as an error.
    pub fn try_sampled_curve(&mut self) -> Result<Vec<Point2<F>>, EditorError> {
        self.refresh();
        try_evaluate(&self.points, &self.knots, self.degree.value(), &self.options)
    }

    fn invalidate(&mut self) {
        self.state = KnotState::Stale;
    }

    fn refresh(&mut self) {
        if self.state == KnotState::Fresh {
            return;
        }
        self.knots = KnotVector::build(self.points.len(), self.degree.value(), self.mode);
        self.state = KnotState::Fresh;
        log::debug!("Knot vector: {}", self.knots);
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(EditorError::InvalidIndex {
                index,
                len: self.points.len(),
            })
        }
    }
}

impl<F: Float> Default for SplineEditor<F> {
    fn default() -> Self {
        Self::new(Degree::default(), true)
    }
}

fn cast<F: Float>(value: f64, what: &str) -> Result<F, EditorError> {
    F::from(value).ok_or_else(|| {
        EditorError::InvalidConfig(format!("{} out of range: {}", what, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::MAX_SAMPLE_STEPS;
    use approx::assert_relative_eq;

    fn editor_with(points: &[(f64, f64)], degree: Degree, uniform: bool) -> SplineEditor<f64> {
        let mut editor = SplineEditor::new(degree, uniform);
        for &(x, y) in points {
            editor.add_point(x, y);
        }
        editor
    }

    #[test]
    fn test_new_is_empty_and_stale() {
        let editor: SplineEditor<f64> = SplineEditor::default();
        assert!(editor.control_points().is_empty());
        assert_eq!(editor.degree(), Degree::Quadratic);
        assert!(editor.is_uniform());
        assert_eq!(editor.knot_state(), KnotState::Stale);
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn test_every_edit_marks_stale() {
        let mut editor = editor_with(
            &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)],
            Degree::Quadratic,
            true,
        );

        let edits: [fn(&mut SplineEditor<f64>); 5] = [
            |e| {
                e.add_point(3.0, 3.0);
            },
            |e| e.move_point(0, 5.0, 5.0),
            |e| {
                e.remove_point(0);
            },
            |e| e.set_degree(Degree::Linear),
            |e| {
                e.toggle_uniform();
            },
        ];

        for edit in edits {
            editor.knot_vector();
            assert_eq!(editor.knot_state(), KnotState::Fresh);
            edit(&mut editor);
            assert_eq!(editor.knot_state(), KnotState::Stale);
        }
    }

    #[test]
    fn test_redundant_settings_stay_fresh() {
        let mut editor = editor_with(
            &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)],
            Degree::Quadratic,
            true,
        );
        editor.knot_vector();

        editor.set_degree(Degree::Quadratic);
        editor.set_uniform(true);
        assert_eq!(editor.knot_state(), KnotState::Fresh);

        editor.set_sample_options(SampleOptions::new(0.1).unwrap());
        assert_eq!(editor.knot_state(), KnotState::Fresh);
    }

    #[test]
    fn test_knot_vector_follows_mode_and_degree() {
        let points = [(0.0, 0.0), (50.0, 0.0), (100.0, 50.0)];
        let mut editor = editor_with(&points, Degree::Quadratic, true);
        assert_eq!(editor.knot_vector().as_slice(), &[0, 1, 2, 3, 4, 5]);

        editor.set_uniform(false);
        assert_eq!(editor.knot_vector().as_slice(), &[0, 0, 0, 1, 1, 1]);
        assert_eq!(editor.knot_vector().mode(), KnotMode::Clamped);

        editor.set_degree(Degree::Linear);
        assert_eq!(editor.knot_vector().as_slice(), &[0, 0, 1, 2, 2]);
    }

    #[test]
    fn test_clamped_curve_reaches_last_point() {
        let mut editor = editor_with(
            &[(0.0, 0.0), (50.0, 0.0), (100.0, 50.0)],
            Degree::Quadratic,
            false,
        );
        let curve = editor.sampled_curve();
        assert_eq!(curve.first(), Some(&Point2::new(0.0, 0.0)));
        assert_eq!(curve.last(), Some(&Point2::new(100.0, 50.0)));
    }

    #[test]
    fn test_sampled_curve_tracks_moves() {
        let points = [(0.0, 0.0), (50.0, 0.0), (100.0, 50.0)];
        let mut editor = editor_with(&points, Degree::Quadratic, true);
        let before = editor.sampled_curve();

        editor.move_point(1, 50.0, 100.0);
        let after = editor.sampled_curve();

        assert_eq!(before.len(), after.len());
        assert_relative_eq!(before[0].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(after[0].y, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_insufficient_points() {
        let mut editor = editor_with(&[(0.0, 0.0), (1.0, 1.0)], Degree::Quadratic, true);
        assert!(!editor.has_sufficient_points());
        assert!(editor.sampled_curve().is_empty());
        assert_eq!(
            editor.try_sampled_curve(),
            Err(EditorError::InsufficientControlPoints {
                count: 2,
                required: 3
            })
        );
        // The knot vector is still built.
        assert_eq!(editor.knot_vector().len(), 5);
    }

    #[test]
    fn test_empty_session_knots() {
        let mut editor: SplineEditor<f64> = SplineEditor::new(Degree::Cubic, false);
        assert_eq!(editor.knot_vector().as_slice(), &[0, 0, 0, 0]);
        assert!(editor.sampled_curve().is_empty());
    }

    #[test]
    fn test_selection_follows_add_and_remove() {
        let mut editor = editor_with(
            &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)],
            Degree::Quadratic,
            true,
        );
        assert_eq!(editor.selected(), Some(2));

        editor.select(Some(0));
        let removed = editor.remove_selected();
        assert_eq!(removed, Some(Point2::new(0.0, 0.0)));
        assert_eq!(editor.control_points(), &[Point2::new(10.0, 0.0), Point2::new(20.0, 0.0)]);
        assert_eq!(editor.selected(), Some(1));

        editor.remove_point(1);
        editor.remove_point(0);
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.remove_selected(), None);
    }

    #[test]
    fn test_point_at_uses_handle_square() {
        let editor = editor_with(
            &[(100.0, 100.0), (105.0, 100.0), (300.0, 300.0)],
            Degree::Quadratic,
            true,
        );

        // Overlapping handles resolve to the lowest index.
        assert_eq!(editor.point_at(103.0, 95.0), Some(0));
        assert_eq!(editor.point_at(112.0, 100.0), Some(1));
        assert_eq!(editor.point_at(290.0, 310.0), Some(2));
        assert_eq!(editor.point_at(200.0, 200.0), None);
    }

    #[test]
    fn test_cycle_degree_wraps() {
        let mut editor: SplineEditor<f64> = SplineEditor::new(Degree::Quartic, true);
        assert_eq!(editor.cycle_degree(), Degree::Quintic);
        assert_eq!(editor.cycle_degree(), Degree::Linear);
    }

    #[test]
    fn test_try_variants_report_invalid_index() {
        let mut editor = editor_with(&[(0.0, 0.0)], Degree::Quadratic, true);
        editor.knot_vector();

        assert_eq!(
            editor.try_move_point(3, 1.0, 1.0),
            Err(EditorError::InvalidIndex { index: 3, len: 1 })
        );
        assert_eq!(
            editor.try_remove_point(1),
            Err(EditorError::InvalidIndex { index: 1, len: 1 })
        );
        // Rejected edits leave the session untouched.
        assert_eq!(editor.knot_state(), KnotState::Fresh);

        assert_eq!(editor.try_remove_point(0), Ok(Point2::new(0.0, 0.0)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_move_invalid_index_panics() {
        let mut editor = editor_with(&[(0.0, 0.0)], Degree::Quadratic, true);
        editor.move_point(1, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_invalid_index_panics() {
        let mut editor: SplineEditor<f64> = SplineEditor::default();
        editor.remove_point(0);
    }

    #[test]
    fn test_from_config() {
        let config = EditorConfig {
            degree: Degree::Linear,
            uniform: false,
            sampling_step: 0.25,
            handle_size: 4.0,
            seed_points: vec![[0.0, 0.0], [10.0, 10.0]],
        };
        let mut editor: SplineEditor<f32> = SplineEditor::from_config(&config).unwrap();

        assert_eq!(editor.control_points().len(), 2);
        assert_eq!(editor.degree(), Degree::Linear);
        assert_eq!(editor.mode(), KnotMode::Clamped);
        assert_eq!(editor.handle_size(), 4.0);
        assert_eq!(editor.sample_options().step(), 0.25);
        assert_eq!(editor.selected(), Some(1));

        // Degree 2 over [0, 0, 1, 1]: a straight segment, 4 samples + closing point.
        let curve = editor.sampled_curve();
        assert_eq!(curve.len(), 5);
        assert_eq!(*curve.last().unwrap(), Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_from_config_rejects_bad_step() {
        let config = EditorConfig {
            sampling_step: -1.0,
            ..EditorConfig::default()
        };
        assert_eq!(
            SplineEditor::<f64>::from_config(&config).unwrap_err(),
            EditorError::InvalidSamplingStep
        );
    }

    #[test]
    fn test_tiny_step_through_session() {
        let points = [(0.0, 0.0), (50.0, 0.0), (100.0, 50.0)];
        let mut editor = editor_with(&points, Degree::Quadratic, true);
        editor.set_sample_options(SampleOptions::new(1e-300).unwrap());

        assert_eq!(editor.try_sampled_curve(), Err(EditorError::InvalidSamplingStep));

        let curve = editor.sampled_curve();
        assert_eq!(curve.len(), MAX_SAMPLE_STEPS + 1);
        assert_relative_eq!(curve.last().unwrap().x, 75.0, epsilon = 1e-6);
    }
}
