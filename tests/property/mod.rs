mod history_invariants;
