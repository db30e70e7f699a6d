//! Classical simulation of reversible circuits.
//!
//! The gates here (NOT, CNOT, Toffoli and multi-controlled NOT) permute basis
//! states, so running them on plain bits gives exactly the result a quantum
//! circuit made of the same gates produces on a basis-state input. That is
//! enough to check the arithmetic and oracle circuits bit-for-bit with the
//! [equivalence checker][crate::equivalence].
//!
//! Every gate is its own inverse, so a circuit is undone by running its gates
//! in reverse order ([`Circuit::inverse`]).

use std::fmt;

use log::debug;

use crate::assignment::Assignment;
use crate::equivalence::{check_equivalence_by, EquivalenceReport};
use crate::error::{Error, Result};
use crate::oracle::oracle_original;

/// Index of a wire (qubit) in a circuit.
pub type Wire = usize;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Gate {
    /// Unconditional flip.
    X(Wire),
    Cnot { control: Wire, target: Wire },
    Toffoli { controls: [Wire; 2], target: Wire },
    /// Flips the target iff all controls are set.
    Mcx { controls: Box<[Wire]>, target: Wire },
}

// Constructors
impl Gate {
    pub fn x(target: Wire) -> Gate {
        Gate::X(target)
    }

    pub fn cnot(control: Wire, target: Wire) -> Gate {
        Gate::Cnot { control, target }
    }

    pub fn toffoli(c1: Wire, c2: Wire, target: Wire) -> Gate {
        Gate::Toffoli {
            controls: [c1, c2],
            target,
        }
    }

    pub fn mcx(controls: &[Wire], target: Wire) -> Gate {
        Gate::Mcx {
            controls: controls.into(),
            target,
        }
    }
}

// Getters
impl Gate {
    pub fn controls(&self) -> &[Wire] {
        match self {
            Gate::X(_) => &[],
            Gate::Cnot { control, .. } => std::slice::from_ref(control),
            Gate::Toffoli { controls, .. } => controls.as_slice(),
            Gate::Mcx { controls, .. } => &controls[..],
        }
    }

    pub fn target(&self) -> Wire {
        match self {
            Gate::X(target) => *target,
            Gate::Cnot { target, .. } | Gate::Toffoli { target, .. } | Gate::Mcx { target, .. } => *target,
        }
    }

    /// All wires touched by the gate, controls first.
    pub fn wires(&self) -> Vec<Wire> {
        let mut wires = self.controls().to_vec();
        wires.push(self.target());
        wires
    }

    fn apply(&self, register: &mut Register) {
        if self.controls().iter().all(|&c| register.get(c)) {
            register.flip(self.target());
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gate::X(_) => "x",
            Gate::Cnot { .. } => "cx",
            Gate::Toffoli { .. } => "ccx",
            Gate::Mcx { .. } => "mcx",
        };
        write!(f, "{}", name)?;
        for wire in self.wires() {
            write!(f, " {}", wire)?;
        }
        Ok(())
    }
}

/// A fixed-width vector of classical bits, one per wire.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Register {
    width: usize,
    words: Vec<u64>,
}

impl Register {
    const BITS_PER_WORD: usize = 64;

    /// Creates an all-zero register.
    pub fn new(width: usize) -> Self {
        let num_words = (width + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD;
        Self {
            width,
            words: vec![0; num_words],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn get(&self, wire: Wire) -> bool {
        assert!(wire < self.width, "Wire {} out of range for width {}", wire, self.width);
        let (word, bit) = (wire / Self::BITS_PER_WORD, wire % Self::BITS_PER_WORD);
        (self.words[word] >> bit) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, wire: Wire, value: bool) {
        if self.get(wire) != value {
            self.flip(wire);
        }
    }

    #[inline]
    pub fn flip(&mut self, wire: Wire) {
        assert!(wire < self.width, "Wire {} out of range for width {}", wire, self.width);
        let (word, bit) = (wire / Self::BITS_PER_WORD, wire % Self::BITS_PER_WORD);
        self.words[word] ^= 1 << bit;
    }

    /// Stores the low `len` bits of `value` on wires `offset..offset+len`,
    /// least significant bit first.
    pub fn load_word(&mut self, offset: Wire, len: usize, value: u64) {
        assert!(len <= 64, "Words are at most 64 bits wide");
        for i in 0..len {
            self.set(offset + i, (value >> i) & 1 == 1);
        }
    }

    /// Reads wires `offset..offset+len` as a word, least significant bit first.
    pub fn word(&self, offset: Wire, len: usize) -> u64 {
        assert!(len <= 64, "Words are at most 64 bits wide");
        (0..len).fold(0, |acc, i| acc | ((self.get(offset + i) as u64) << i))
    }

    /// Number of set wires.
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for wire in 0..self.width {
            write!(f, "{}", self.get(wire) as u8)?;
        }
        Ok(())
    }
}

/// A sequence of gates over a fixed number of wires.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Circuit {
    width: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(width: usize) -> Self {
        Self { width, gates: Vec::new() }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Appends a gate after checking that its wires exist and are distinct.
    pub fn push(&mut self, gate: Gate) -> Result<()> {
        let wires = gate.wires();
        for (i, &wire) in wires.iter().enumerate() {
            if wire >= self.width {
                return Err(Error::WireOutOfRange {
                    wire,
                    width: self.width,
                });
            }
            if wires[..i].contains(&wire) {
                return Err(Error::DuplicateWire(wire));
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    pub fn extend(&mut self, gates: impl IntoIterator<Item = Gate>) -> Result<()> {
        for gate in gates {
            self.push(gate)?;
        }
        Ok(())
    }

    /// Appends all gates of `other`, which must not be wider than `self`.
    pub fn append(&mut self, other: &Circuit) -> Result<()> {
        self.extend(other.gates.iter().cloned())
    }

    /// The circuit undoing this one.
    pub fn inverse(&self) -> Circuit {
        Circuit {
            width: self.width,
            gates: self.gates.iter().rev().cloned().collect(),
        }
    }

    /// Runs all gates in order.
    ///
    /// # Panics
    ///
    /// Panics if the register width differs from the circuit width.
    pub fn apply(&self, register: &mut Register) {
        assert_eq!(register.width(), self.width, "Register width mismatch");
        for gate in &self.gates {
            gate.apply(register);
        }
    }

    pub fn run(&self, mut register: Register) -> Register {
        self.apply(&mut register);
        register
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circuit({} wires, {} gates)", self.width, self.gates.len())?;
        for gate in &self.gates {
            write!(f, "\n  {}", gate)?;
        }
        Ok(())
    }
}

// ─── Grover oracle ───

pub const ORACLE_INPUTS: usize = 3;
pub const ORACLE_ANCILLAS: usize = 3;
/// Wire receiving `y ^ f(q)`.
pub const ORACLE_OUTPUT: Wire = ORACLE_INPUTS + ORACLE_ANCILLAS;

/// Computes each oracle clause into its own ancilla.
///
/// Clauses are computed through De Morgan: `a ∨ b = ¬(¬a ∧ ¬b)`, so each one
/// is an X-conjugated multi-controlled NOT followed by a flip of the ancilla.
fn oracle_clauses() -> Result<Circuit> {
    let mut circuit = Circuit::new(ORACLE_OUTPUT + 1);
    let (a0, a1, a2) = (ORACLE_INPUTS, ORACLE_INPUTS + 1, ORACLE_INPUTS + 2);

    // q0 ∨ ¬q1 = ¬(¬q0 ∧ q1)
    circuit.extend([Gate::x(0), Gate::toffoli(0, 1, a0), Gate::x(0), Gate::x(a0)])?;

    // ¬q0 ∨ q1 ∨ q2 = ¬(q0 ∧ ¬q1 ∧ ¬q2)
    circuit.extend([Gate::x(1), Gate::x(2), Gate::mcx(&[0, 1, 2], a1), Gate::x(1), Gate::x(2), Gate::x(a1)])?;

    // q0 ∨ q2 = ¬(¬q0 ∧ ¬q2)
    circuit.extend([Gate::x(0), Gate::x(2), Gate::toffoli(0, 2, a2), Gate::x(0), Gate::x(2), Gate::x(a2)])?;

    Ok(circuit)
}

/// The oracle circuit: `|q⟩|0⟩|y⟩ → |q⟩|0⟩|y ⊕ f(q)⟩`.
///
/// Wires `0..3` are the inputs, `3..6` ancillas and `6` the output. The
/// clauses are ANDed into the output and then uncomputed, leaving the
/// ancillas clean.
pub fn oracle_circuit() -> Result<Circuit> {
    let clauses = oracle_clauses()?;
    let mut circuit = Circuit::new(clauses.width());
    circuit.append(&clauses)?;
    let ancillas: Vec<Wire> = (ORACLE_INPUTS..ORACLE_OUTPUT).collect();
    circuit.push(Gate::mcx(&ancillas, ORACLE_OUTPUT))?;
    circuit.append(&clauses.inverse())?;
    debug!("oracle_circuit: {} gates on {} wires", circuit.len(), circuit.width());
    Ok(circuit)
}

/// Observable effect of the oracle circuit on a basis state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OracleOutput {
    pub output: bool,
    pub inputs: u64,
    pub ancillas: u64,
}

impl fmt::Display for OracleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "out={} inputs={:03b} ancillas={:03b}",
            self.output as u8, self.inputs, self.ancillas
        )
    }
}

/// Checks the oracle circuit against [`oracle_original`].
///
/// The domain has four bits: `q0, q1, q2` and the initial output bit `y`.
/// Inputs must pass through unchanged and the ancillas must end up zero.
pub fn verify_oracle_circuit() -> Result<EquivalenceReport<OracleOutput>> {
    let circuit = oracle_circuit()?;
    let inputs_of = |a: &Assignment| a.index() & 0b111;

    check_equivalence_by(
        ORACLE_INPUTS as u32 + 1,
        |a| {
            let mut register = Register::new(circuit.width());
            register.load_word(0, ORACLE_INPUTS, inputs_of(a));
            register.set(ORACLE_OUTPUT, a.bit(3));
            circuit.apply(&mut register);
            OracleOutput {
                output: register.get(ORACLE_OUTPUT),
                inputs: register.word(0, ORACLE_INPUTS),
                ancillas: register.word(ORACLE_INPUTS, ORACLE_ANCILLAS),
            }
        },
        |a| OracleOutput {
            output: a.bit(3) ^ oracle_original(a.bit(0), a.bit(1), a.bit(2)),
            inputs: inputs_of(a),
            ancillas: 0,
        },
    )
}

// ─── Ripple-carry adder ───

/// Wire layout of the `n`-bit adder circuits.
///
/// Operand words are stored least significant bit first.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AdderLayout {
    pub digits: usize,
}

impl AdderLayout {
    pub fn a(&self, i: usize) -> Wire {
        i
    }

    pub fn b(&self, i: usize) -> Wire {
        self.digits + i
    }

    /// Carry-in of each cell; holds the carry-out at the end.
    pub fn carry(&self) -> Wire {
        2 * self.digits
    }

    pub fn sum(&self, i: usize) -> Wire {
        2 * self.digits + 1 + i
    }

    /// Selects subtraction in [`adder_subtractor`].
    pub fn control(&self) -> Wire {
        3 * self.digits + 1
    }

    pub fn adder_width(&self) -> usize {
        3 * self.digits + 1
    }

    pub fn adder_subtractor_width(&self) -> usize {
        3 * self.digits + 2
    }
}

/// One full-adder cell for bit `i`.
///
/// Expects `sum(i) = 0` and the incoming carry on the carry wire. Leaves
/// `sum(i) = a ^ b ^ cin` and the carry wire holding `maj(a, b, cin)`.
fn adder_cell(layout: &AdderLayout, i: usize) -> [Gate; 6] {
    let (a, b, c, s) = (layout.a(i), layout.b(i), layout.carry(), layout.sum(i));
    [
        Gate::cnot(c, s),
        Gate::cnot(s, c),
        Gate::toffoli(b, s, c),
        Gate::cnot(b, s),
        Gate::toffoli(a, s, c),
        Gate::cnot(a, s),
    ]
}

fn push_adder_cells(circuit: &mut Circuit, layout: &AdderLayout) -> Result<()> {
    for i in 0..layout.digits {
        circuit.extend(adder_cell(layout, i))?;
    }
    Ok(())
}

/// `n`-bit ripple-carry adder: `sum = (a + b) mod 2^n`, carry wire = carry-out.
pub fn adder(digits: usize) -> Result<Circuit> {
    let layout = AdderLayout { digits };
    let mut circuit = Circuit::new(layout.adder_width());
    push_adder_cells(&mut circuit, &layout)?;
    debug!("adder({}): {} gates on {} wires", digits, circuit.len(), circuit.width());
    Ok(circuit)
}

/// `n`-bit adder/subtractor.
///
/// With the control wire clear it adds. With the control wire set it computes
/// `!(!a + b) = a - b (mod 2^n)` by complementing `a` before the adder and the
/// sum after it. The carry wire then holds the borrow (`b > a`). `a` is
/// restored before the circuit ends.
pub fn adder_subtractor(digits: usize) -> Result<Circuit> {
    let layout = AdderLayout { digits };
    let mut circuit = Circuit::new(layout.adder_subtractor_width());
    let ctrl = layout.control();
    circuit.extend((0..digits).map(|i| Gate::cnot(ctrl, layout.a(i))))?;
    push_adder_cells(&mut circuit, &layout)?;
    circuit.extend((0..digits).map(|i| Gate::cnot(ctrl, layout.sum(i))))?;
    circuit.extend((0..digits).map(|i| Gate::cnot(ctrl, layout.a(i))))?;
    debug!("adder_subtractor({}): {} gates on {} wires", digits, circuit.len(), circuit.width());
    Ok(circuit)
}

/// Observable effect of an adder circuit on a basis state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AdderOutput {
    pub a: u64,
    pub b: u64,
    pub sum: u64,
    pub carry: bool,
}

impl fmt::Display for AdderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={} b={} sum={} carry={}", self.a, self.b, self.sum, self.carry as u8)
    }
}

fn read_adder(register: &Register, layout: &AdderLayout) -> AdderOutput {
    let n = layout.digits;
    AdderOutput {
        a: register.word(layout.a(0), n),
        b: register.word(layout.b(0), n),
        sum: register.word(layout.sum(0), n),
        carry: register.get(layout.carry()),
    }
}

/// Reference adder: `(a + b) mod 2^n` with the carry-out.
fn add_reference(a: u64, b: u64, digits: usize) -> AdderOutput {
    let mask = (1u64 << digits) - 1;
    let total = a + b;
    AdderOutput {
        a,
        b,
        sum: total & mask,
        carry: total > mask,
    }
}

/// Reference subtractor: `(a - b) mod 2^n` with the borrow.
fn sub_reference(a: u64, b: u64, digits: usize) -> AdderOutput {
    let mask = (1u64 << digits) - 1;
    AdderOutput {
        a,
        b,
        sum: a.wrapping_sub(b) & mask,
        carry: b > a,
    }
}

/// Checks [`adder`] against integer addition for every pair of `n`-bit words.
pub fn verify_adder(digits: usize) -> Result<EquivalenceReport<AdderOutput>> {
    let circuit = adder(digits)?;
    let layout = AdderLayout { digits };
    let operands = |a: &Assignment| {
        let mask = (1u64 << digits) - 1;
        (a.index() & mask, (a.index() >> digits) & mask)
    };

    check_equivalence_by(
        2 * digits as u32,
        |input| {
            let (a, b) = operands(input);
            let mut register = Register::new(circuit.width());
            register.load_word(layout.a(0), digits, a);
            register.load_word(layout.b(0), digits, b);
            circuit.apply(&mut register);
            read_adder(&register, &layout)
        },
        |input| {
            let (a, b) = operands(input);
            add_reference(a, b, digits)
        },
    )
}

/// Checks [`adder_subtractor`] against integer addition and subtraction.
///
/// The domain is `a`, `b` and the control bit (most significant).
pub fn verify_adder_subtractor(digits: usize) -> Result<EquivalenceReport<AdderOutput>> {
    let circuit = adder_subtractor(digits)?;
    let layout = AdderLayout { digits };
    let operands = |input: &Assignment| {
        let mask = (1u64 << digits) - 1;
        let index = input.index();
        (index & mask, (index >> digits) & mask, (index >> (2 * digits)) & 1 == 1)
    };

    check_equivalence_by(
        2 * digits as u32 + 1,
        |input| {
            let (a, b, subtract) = operands(input);
            let mut register = Register::new(circuit.width());
            register.load_word(layout.a(0), digits, a);
            register.load_word(layout.b(0), digits, b);
            register.set(layout.control(), subtract);
            circuit.apply(&mut register);
            read_adder(&register, &layout)
        },
        |input| {
            let (a, b, subtract) = operands(input);
            if subtract {
                sub_reference(a, b, digits)
            } else {
                add_reference(a, b, digits)
            }
        },
    )
}
