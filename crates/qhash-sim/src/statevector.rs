//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use qhash_ir::{Gate, Instruction, InstructionKind, QubitId};

use crate::error::{SimError, SimResult};

/// A statevector representing a quantum state.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

/// Index pairs `(i, j)` that differ only in `qubit`, with that bit clear in `i`.
fn pairs(size: usize, qubit: usize) -> impl Iterator<Item = (usize, usize)> {
    let stride = 1usize << qubit;
    (0..size)
        .step_by(stride << 1)
        .flat_map(move |block| (block..block + stride).map(move |i| (i, i + stride)))
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        match instruction.kind {
            InstructionKind::Gate(gate) => self.apply_gate(gate, &instruction.qubits),
            // Sampling happens on the final distribution.
            InstructionKind::Measure => Ok(()),
        }
    }

    /// Apply a gate to its operands. `CX` takes `[control, target]`.
    ///
    /// The state is left untouched when the operands do not fit the gate
    /// or the register.
    pub fn apply_gate(&mut self, gate: Gate, qubits: &[QubitId]) -> SimResult<()> {
        let expected = gate.num_qubits() as usize;
        if qubits.len() != expected {
            return Err(SimError::QubitCountMismatch {
                gate_name: gate.name(),
                expected,
                got: qubits.len(),
            });
        }
        if let Some(q) = qubits.iter().find(|q| q.index() >= self.num_qubits) {
            return Err(SimError::QubitNotFound {
                qubit: q.index(),
                num_qubits: self.num_qubits,
                gate_name: gate.name(),
            });
        }

        match gate {
            Gate::X => self.apply_x(qubits[0].index()),
            Gate::H => self.apply_h(qubits[0].index()),
            Gate::Rx(theta) => self.apply_rx(qubits[0].index(), theta),
            Gate::Ry(theta) => self.apply_ry(qubits[0].index(), theta),
            Gate::Rz(theta) => self.apply_rz(qubits[0].index(), theta),
            Gate::CX => {
                let (control, target) = (qubits[0].index(), qubits[1].index());
                if control == target {
                    return Err(SimError::DuplicateQubit {
                        qubit: control,
                        gate_name: gate.name(),
                    });
                }
                self.apply_cx(control, target);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        for (i, j) in pairs(self.amplitudes.len(), qubit) {
            self.amplitudes.swap(i, j);
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for (i, j) in pairs(self.amplitudes.len(), qubit) {
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = sqrt2_inv * (a + b);
            self.amplitudes[j] = sqrt2_inv * (a - b);
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        for (i, j) in pairs(self.amplitudes.len(), qubit) {
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = c * a + neg_i_s * b;
            self.amplitudes[j] = neg_i_s * a + c * b;
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for (i, j) in pairs(self.amplitudes.len(), qubit) {
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = c * a - s * b;
            self.amplitudes[j] = s * a + c * b;
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, j) in pairs(self.amplitudes.len(), qubit) {
            self.amplitudes[i] *= phase_0;
            self.amplitudes[j] *= phase_1;
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        for (i, j) in pairs(self.amplitudes.len(), target) {
            if i & ctrl_mask != 0 {
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Probability of each basis state, `|amplitude|²`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of all basis-state probabilities.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Whether the total probability is within `tolerance` of 1.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= tolerance
    }

    /// Draw one measurement outcome using `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        let mut last_nonzero = 0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > 0.0 {
                last_nonzero = i;
            }
            cumulative += p;
            if r < cumulative {
                return i;
            }
        }

        // Rounding left the cumulative sum just below r.
        last_nonzero
    }

    /// The most probable basis state; ties go to the lowest index.
    pub fn most_probable(&self) -> usize {
        let mut best = 0;
        let mut best_p = f64::NEG_INFINITY;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > best_p {
                best = i;
                best_p = p;
            }
        }
        best
    }

    /// Render an outcome as an `n`-bit string, most significant bit first.
    ///
    /// Qubit `n-1` is the leftmost character and qubit 0 the rightmost, so
    /// reading the string as a binary number gives back `outcome`.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        if self.num_qubits == 0 {
            return String::new();
        }
        format!("{:0width$b}", outcome, width = self.num_qubits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_pairs_cover_every_index_once() {
        let mut seen = vec![0u32; 16];
        for (i, j) in pairs(16, 2) {
            assert_eq!(j - i, 4);
            assert_eq!(i & 4, 0);
            seen[i] += 1;
            seen[j] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_cx(0, 1);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply_x(0);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_x_on_high_qubit() {
        let mut sv = Statevector::new(3);
        sv.apply_x(2);
        assert!(approx_eq(sv.amplitudes[4], Complex64::new(1.0, 0.0)));
        assert_eq!(sv.most_probable(), 4);
    }

    #[test]
    fn test_cx_requires_control() {
        // Control clear: target untouched.
        let mut sv = Statevector::new(2);
        sv.apply_cx(0, 1);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));

        // Control set: |01⟩ → |11⟩.
        let mut sv = Statevector::new(2);
        sv.apply_x(0);
        sv.apply_cx(0, 1);
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_ry_quarter_turn() {
        let mut sv = Statevector::new(1);
        sv.apply_ry(0, PI / 2.0);
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_rx_pi_flips_with_phase() {
        let mut sv = Statevector::new(1);
        sv.apply_rx(0, PI);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, -1.0)));
    }

    #[test]
    fn test_rz_is_diagonal() {
        let theta = PI / 7.0;
        let mut sv = Statevector::new(1);
        sv.apply_h(0);
        sv.apply_rz(0, theta);

        // Rz(θ) = diag(e^{-iθ/2}, e^{+iθ/2})
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        let expected_0 = sqrt2_inv * Complex64::from_polar(1.0, -theta / 2.0);
        let expected_1 = sqrt2_inv * Complex64::from_polar(1.0, theta / 2.0);
        assert!(approx_eq(sv.amplitudes[0], expected_0));
        assert!(approx_eq(sv.amplitudes[1], expected_1));

        let probs = sv.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rz_phase_sign_on_one() {
        // A swapped sign convention would give e^{-iπ/4} here.
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        sv.apply_rz(0, PI / 2.0);
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, sqrt2_inv)));
    }

    #[test]
    fn test_apply_gate_rejects_short_operands() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        let before = sv.amplitudes.clone();

        let err = sv.apply_gate(Gate::CX, &[QubitId(0)]).unwrap_err();
        assert!(matches!(
            err,
            SimError::QubitCountMismatch {
                gate_name: "cx",
                expected: 2,
                got: 1
            }
        ));
        assert!(matches!(
            sv.apply_gate(Gate::H, &[]),
            Err(SimError::QubitCountMismatch { got: 0, .. })
        ));
        assert!(matches!(
            sv.apply_gate(Gate::X, &[QubitId(0), QubitId(1)]),
            Err(SimError::QubitCountMismatch { expected: 1, got: 2, .. })
        ));
        assert_eq!(sv.amplitudes, before);
    }

    #[test]
    fn test_apply_gate_rejects_missing_qubit() {
        let mut sv = Statevector::new(2);
        let err = sv.apply_gate(Gate::X, &[QubitId(2)]).unwrap_err();
        assert!(matches!(
            err,
            SimError::QubitNotFound {
                qubit: 2,
                num_qubits: 2,
                ..
            }
        ));
        assert!(matches!(
            sv.apply_gate(Gate::CX, &[QubitId(0), QubitId(5)]),
            Err(SimError::QubitNotFound { qubit: 5, .. })
        ));
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_apply_gate_rejects_repeated_cx_qubit() {
        let mut sv = Statevector::new(2);
        assert!(matches!(
            sv.apply_gate(Gate::CX, &[QubitId(1), QubitId(1)]),
            Err(SimError::DuplicateQubit { qubit: 1, .. })
        ));
    }

    #[test]
    fn test_apply_gate_matches_kernels() {
        let mut via_gate = Statevector::new(2);
        via_gate.apply_gate(Gate::H, &[QubitId(0)]).unwrap();
        via_gate.apply_gate(Gate::CX, &[QubitId(0), QubitId(1)]).unwrap();

        let mut direct = Statevector::new(2);
        direct.apply_h(0);
        direct.apply_cx(0, 1);
        assert_eq!(via_gate.amplitudes, direct.amplitudes);
    }

    #[test]
    fn test_ry_zero_is_identity() {
        let mut sv = Statevector::new(2);
        sv.apply_h(1);
        let before = sv.amplitudes.clone();
        sv.apply_ry(0, 0.0);
        for (a, b) in before.iter().zip(&sv.amplitudes) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut sv = Statevector::new(1);
        sv.apply_x(0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sv.sample(&mut rng), 1);
        }
    }

    #[test]
    fn test_sample_reproducible_with_seed() {
        let mut sv = Statevector::new(3);
        for q in 0..3 {
            sv.apply_h(q);
        }
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..32).map(|_| sv.sample(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(draws(11), draws(11));
    }

    #[test]
    fn test_most_probable_breaks_ties_low() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_h(1);
        assert_eq!(sv.most_probable(), 0);
    }

    #[test]
    fn test_outcome_to_bitstring_msb_first() {
        let sv = Statevector::new(4);
        assert_eq!(sv.outcome_to_bitstring(1), "0001");
        assert_eq!(sv.outcome_to_bitstring(10), "1010");
        assert_eq!(Statevector::new(0).outcome_to_bitstring(0), "");
    }
}
