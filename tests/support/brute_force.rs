//! A small DPLL-style `FormulaEngine` for the integration tests: builds an
//! AST, then decides satisfiability by unit-propagating forced variables and
//! backtracking over whatever is left undetermined. No solver is in scope
//! for this crate (§2, §6); this is standing in for one, not implementing
//! one — the scenarios in spec.md §8 run to a few dozen variables, well
//! past what plain `2^n` enumeration could finish in any reasonable time.

use std::collections::HashMap;

use tunnel_routing_sat::FormulaEngine;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BfAtom(usize);

enum Node {
    True,
    Var(usize),
    Not(BfAtom),
    And(Vec<BfAtom>),
    Or(Vec<BfAtom>),
}

#[derive(Default)]
pub struct BruteForceEngine {
    nodes: Vec<Node>,
    var_names: Vec<String>,
    var_ids: HashMap<String, usize>,
    var_atoms: HashMap<String, BfAtom>,
}

impl BruteForceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> BfAtom {
        let id = BfAtom(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn num_vars(&self) -> usize {
        self.var_names.len()
    }

    /// The set of distinct variable names created so far, for checking that
    /// two builds of the same (network, length) produce the same variables.
    pub fn variable_names(&self) -> std::collections::BTreeSet<String> {
        self.var_names.iter().cloned().collect()
    }

    /// Three-valued evaluation under a partial assignment: `None` means the
    /// node's value isn't determined yet by the variables fixed so far.
    /// `And`/`Or` short-circuit on a known-false/known-true child without
    /// needing every child decided, which is what lets propagation resolve
    /// most of a formula like this one from only a handful of fixed `x` vars.
    fn eval3(&self, atom: BfAtom, assignment: &[Option<bool>]) -> Option<bool> {
        match &self.nodes[atom.0] {
            Node::True => Some(true),
            Node::Var(v) => assignment[*v],
            Node::Not(a) => self.eval3(*a, assignment).map(|v| !v),
            Node::And(atoms) => {
                let mut undetermined = false;
                for &a in atoms {
                    match self.eval3(a, assignment) {
                        Some(false) => return Some(false),
                        Some(true) => {}
                        None => undetermined = true,
                    }
                }
                if undetermined {
                    None
                } else {
                    Some(true)
                }
            }
            Node::Or(atoms) => {
                let mut undetermined = false;
                for &a in atoms {
                    match self.eval3(a, assignment) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => undetermined = true,
                    }
                }
                if undetermined {
                    None
                } else {
                    Some(false)
                }
            }
        }
    }

    /// Fixes every variable whose value is forced (setting it one way makes
    /// `goal` false no matter what the rest of the formula says), repeating
    /// until a fixpoint. Returns `false` as soon as a conflict is detected
    /// (both values of some variable force `goal` false, or `goal` itself
    /// evaluates false).
    fn propagate(&self, goal: BfAtom, assignment: &mut [Option<bool>]) -> bool {
        loop {
            match self.eval3(goal, assignment) {
                Some(false) => return false,
                Some(true) => return true,
                None => {}
            }
            let mut changed = false;
            for v in 0..assignment.len() {
                if assignment[v].is_some() {
                    continue;
                }
                assignment[v] = Some(false);
                let false_conflicts = self.eval3(goal, assignment) == Some(false);
                assignment[v] = Some(true);
                let true_conflicts = self.eval3(goal, assignment) == Some(false);
                assignment[v] = None;

                match (false_conflicts, true_conflicts) {
                    (true, true) => return false,
                    (true, false) => {
                        assignment[v] = Some(true);
                        changed = true;
                    }
                    (false, true) => {
                        assignment[v] = Some(false);
                        changed = true;
                    }
                    (false, false) => {}
                }
            }
            if !changed {
                return true;
            }
        }
    }

    /// Tries to extend `assignment` to a full satisfying one, branching on an
    /// undetermined variable and recursing on its own copy of the assignment
    /// so a failed branch never leaks its propagated values into the other.
    fn search(&self, goal: BfAtom, mut assignment: Vec<Option<bool>>) -> Option<Vec<Option<bool>>> {
        if !self.propagate(goal, &mut assignment) {
            return None;
        }
        match self.eval3(goal, &assignment) {
            Some(true) => return Some(assignment),
            Some(false) => return None,
            None => {}
        }

        let v = assignment
            .iter()
            .position(|a| a.is_none())
            .expect("goal is undetermined, so some variable must still be unassigned");

        let mut try_true = assignment.clone();
        try_true[v] = Some(true);
        if let Some(solved) = self.search(goal, try_true) {
            return Some(solved);
        }

        let mut try_false = assignment;
        try_false[v] = Some(false);
        self.search(goal, try_false)
    }

    /// Decides satisfiability of `goal` by unit propagation and backtracking
    /// search, returning a satisfying model if one exists.
    pub fn solve(&self, goal: BfAtom) -> Option<BruteForceModel> {
        let atom_var: Vec<Option<usize>> = self
            .nodes
            .iter()
            .map(|node| match node {
                Node::Var(v) => Some(*v),
                _ => None,
            })
            .collect();

        let assignment = vec![None; self.num_vars()];
        self.search(goal, assignment).map(|assignment| {
            let assignment = assignment.into_iter().map(|v| v.unwrap_or(false)).collect();
            BruteForceModel {
                var_ids: self.var_ids.clone(),
                atom_var,
                assignment,
            }
        })
    }
}

impl FormulaEngine for BruteForceEngine {
    type Atom = BfAtom;

    fn mk_bool_var(&mut self, name: &str) -> BfAtom {
        if let Some(&a) = self.var_atoms.get(name) {
            return a;
        }
        let v = self.var_names.len();
        self.var_names.push(name.to_string());
        self.var_ids.insert(name.to_string(), v);
        let a = self.push(Node::Var(v));
        self.var_atoms.insert(name.to_string(), a);
        a
    }

    fn mk_true(&mut self) -> BfAtom {
        self.push(Node::True)
    }

    fn mk_not(&mut self, a: BfAtom) -> BfAtom {
        self.push(Node::Not(a))
    }

    fn mk_and(&mut self, atoms: &[BfAtom]) -> BfAtom {
        if atoms.is_empty() {
            return self.mk_true();
        }
        self.push(Node::And(atoms.to_vec()))
    }

    fn mk_or(&mut self, atoms: &[BfAtom]) -> BfAtom {
        self.push(Node::Or(atoms.to_vec()))
    }

    fn mk_implies(&mut self, a: BfAtom, b: BfAtom) -> BfAtom {
        let not_a = self.mk_not(a);
        self.mk_or(&[not_a, b])
    }

    fn mk_eq(&mut self, a: BfAtom, b: BfAtom) -> BfAtom {
        let a_implies_b = self.mk_implies(a, b);
        let b_implies_a = self.mk_implies(b, a);
        self.mk_and(&[a_implies_b, b_implies_a])
    }

    fn exactly_one(&mut self, atoms: &[BfAtom]) -> BfAtom {
        let at_least_one = self.mk_or(atoms);
        let mut conjuncts = vec![at_least_one];
        for i in 0..atoms.len() {
            for j in i + 1..atoms.len() {
                let both = self.mk_and(&[atoms[i], atoms[j]]);
                conjuncts.push(self.mk_not(both));
            }
        }
        self.mk_and(&conjuncts)
    }
}

/// A model found by [`BruteForceEngine::solve`]. Variable lookups that were
/// never created (no clause ever mentioned them) read as `false`. `value_of`
/// only accepts atoms that are themselves variables (as every atom produced
/// by this crate's `naming` module is); a compound atom has no fixed value
/// independent of a full-engine re-evaluation and isn't something the
/// decoder/dumper ever asks about.
pub struct BruteForceModel {
    var_ids: HashMap<String, usize>,
    atom_var: Vec<Option<usize>>,
    assignment: Vec<bool>,
}

impl BruteForceModel {
    pub fn value_of_named(&self, name: &str) -> bool {
        self.var_ids.get(name).map(|&v| self.assignment[v]).unwrap_or(false)
    }
}

impl tunnel_routing_sat::ModelReader<BfAtom> for BruteForceModel {
    fn value_of(&self, atom: BfAtom) -> bool {
        match self.atom_var.get(atom.0).copied().flatten() {
            Some(v) => self.assignment[v],
            None => panic!("value_of called on a non-variable atom"),
        }
    }
}
