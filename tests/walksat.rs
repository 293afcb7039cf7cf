use phasesat::{
    algs::walksat::{walksat, WalkSatError},
    generators::random_kcnf,
    instances::Cnf,
    lit,
    types::TernaryVal,
};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

#[test]
fn unit_clause_solved_within_one_flip() {
    // a single positive unit clause must be solved with at most one flip,
    // regardless of the noise setting
    for noise in [0.0, 0.5, 1.0] {
        for seed in 0..10 {
            let mut cnf = Cnf::new();
            cnf.add_unit(lit![0]);
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let (model, flips) = walksat(&cnf, 100, noise, &mut rng).unwrap();
            let model = model.expect("unit clause is satisfiable");
            assert!(flips <= 1);
            assert_eq!(model.lit_value(lit![0]), TernaryVal::True);
        }
    }
}

#[test]
fn complementary_units_exhaust_budget() {
    // P ∧ ¬P has no model; the search must spend the whole budget and
    // report failure as a value, not an error
    let mut cnf = Cnf::new();
    cnf.add_unit(lit![0]);
    cnf.add_unit(!lit![0]);
    for seed in 0..5 {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let (model, flips) = walksat(&cnf, 50, 0.5, &mut rng).unwrap();
        assert_eq!(model, None);
        assert_eq!(flips, 50);
    }
}

#[test]
fn independent_units_solved_within_unit_count() {
    // every flip satisfies one unit clause for good, so the search needs at
    // most as many flips as there are clauses
    let mut cnf = Cnf::new();
    for v in 0..5 {
        cnf.add_unit(lit![v]);
    }
    for noise in [0.0, 0.5, 1.0] {
        for seed in 0..10 {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let (model, flips) = walksat(&cnf, 6, noise, &mut rng).unwrap();
            let model = model.expect("conjunction of positive units is satisfiable");
            assert!(flips <= 5);
            assert!(cnf.iter().all(|cl| cl.is_sat(&model)));
        }
    }
}

#[test]
fn seeded_search_is_deterministic() {
    let cnf = random_kcnf(15, 45, 3, &mut ChaCha12Rng::seed_from_u64(11)).unwrap();
    let res1 = walksat(&cnf, 500, 0.5, &mut ChaCha12Rng::seed_from_u64(99)).unwrap();
    let res2 = walksat(&cnf, 500, 0.5, &mut ChaCha12Rng::seed_from_u64(99)).unwrap();
    assert_eq!(res1, res2);
}

#[test]
fn returned_model_satisfies_formula() {
    // ratio 2.0, far below the 3-SAT phase transition
    let mut rng = ChaCha12Rng::seed_from_u64(5);
    let cnf = random_kcnf(20, 40, 3, &mut rng).unwrap();
    let (model, flips) = walksat(&cnf, 10_000, 0.5, &mut rng).unwrap();
    assert!(flips <= 10_000);
    if let Some(model) = model {
        assert!(cnf.iter().all(|cl| cl.is_sat(&model)));
        assert!(cnf
            .iter()
            .all(|cl| cl.evaluate(&model) == TernaryVal::True));
    }
}

#[test]
fn model_covers_occurring_symbols_only() {
    // symbol B does not occur in the formula and must stay unassigned
    let mut cnf = Cnf::new();
    cnf.add_unit(lit![0]);
    cnf.add_unit(lit![2]);
    let mut rng = ChaCha12Rng::seed_from_u64(1);
    let (model, _) = walksat(&cnf, 100, 0.5, &mut rng).unwrap();
    let model = model.unwrap();
    assert_eq!(model.lit_value(lit![0]), TernaryVal::True);
    assert_eq!(model.lit_value(lit![1]), TernaryVal::DontCare);
    assert_eq!(model.lit_value(lit![2]), TernaryVal::True);
}

#[test]
fn parameter_validation() {
    let mut cnf = Cnf::new();
    cnf.add_unit(lit![0]);
    let mut rng = ChaCha12Rng::seed_from_u64(0);
    assert_eq!(
        walksat(&cnf, 10, 1.5, &mut rng),
        Err(WalkSatError::NoiseOutOfRange(1.5))
    );
    assert_eq!(
        walksat(&cnf, 0, 0.5, &mut rng),
        Err(WalkSatError::ZeroFlipBudget)
    );
}
