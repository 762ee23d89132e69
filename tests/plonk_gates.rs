use insta::assert_snapshot;
use zk_marshalling::field::{Bls12381Fr, FieldCodec, Goldilocks};
use zk_marshalling::marshal::{
    fill_copy_constraints, fill_gate, fill_gates, make_copy_constraints, make_gate, make_gates,
    CopyConstraintsNode, GateNode, GatesNode,
};
use zk_marshalling::plonk::{ColumnType, CopyConstraint, Gate, NonLinearTerm, Variable};
use zk_marshalling::ser::{decode, encode, Node, SerError, SerKind, Status};
use zk_marshalling::utils::hex::to_spaced_hex;
use zk_marshalling::utils::sample::{self, CircuitShape};
use zk_marshalling::utils::DeterministicRng;
use zk_marshalling::{BigEndian, LittleEndian};

fn tiny_gate() -> Gate<Goldilocks> {
    let term = NonLinearTerm::new(Goldilocks::new(2), vec![Variable::witness(3, -1)]);
    Gate::new(1, vec![vec![term].into()])
}

fn scenario_gate<F: FieldCodec>() -> Gate<F> {
    let shape = CircuitShape {
        constraints_per_gate: 2,
        terms_per_constraint: 3,
        vars_per_term: 2,
        ..CircuitShape::default()
    };
    let mut rng = DeterministicRng::from_u64(42);
    sample::gate(&mut rng, 42, &shape)
}

#[test]
fn tiny_gate_big_endian_layout() {
    let node = fill_gate::<_, BigEndian>(&tiny_gate());
    let bytes = encode(&node).unwrap();
    assert_eq!(bytes.len(), 42);
    assert_snapshot!(
        to_spaced_hex(&bytes),
        @"00 00 00 00 00 00 00 01 00 00 00 01 00 00 00 01 00 00 00 00 00 00 00 02 00 00 00 01 00 00 00 00 00 00 00 03 ff ff ff ff 01 00"
    );
}

#[test]
fn tiny_gate_little_endian_layout() {
    let node = fill_gate::<_, LittleEndian>(&tiny_gate());
    let bytes = encode(&node).unwrap();
    assert_snapshot!(
        to_spaced_hex(&bytes),
        @"01 00 00 00 00 00 00 00 01 00 00 00 01 00 00 00 02 00 00 00 00 00 00 00 01 00 00 00 03 00 00 00 00 00 00 00 ff ff ff ff 01 00"
    );
    let decoded = decode::<GateNode<Goldilocks, LittleEndian>>(&bytes).unwrap();
    assert_eq!(make_gate(decoded), tiny_gate());
}

#[test]
fn selector_42_gate_sizes() {
    let gate = scenario_gate::<Goldilocks>();
    assert_eq!(gate.selector_index, 42);
    let node = fill_gate::<_, BigEndian>(&gate);
    assert_eq!(node.length(), 260);
    let bytes = encode(&node).unwrap();
    assert_eq!(bytes.len(), 260);
    assert_eq!(&bytes[..8], &[0, 0, 0, 0, 0, 0, 0, 42]);
    assert_eq!(&bytes[8..12], &[0, 0, 0, 2]);
    let decoded = make_gate(decode::<GateNode<Goldilocks, BigEndian>>(&bytes).unwrap());
    assert_eq!(decoded, gate);

    let wide = scenario_gate::<Bls12381Fr>();
    let node = fill_gate::<_, LittleEndian>(&wide);
    assert_eq!(node.length(), 404);
    let bytes = encode(&node).unwrap();
    let decoded = make_gate(decode::<GateNode<Bls12381Fr, LittleEndian>>(&bytes).unwrap());
    assert_eq!(decoded, wide);
}

#[test]
fn every_truncation_is_rejected() {
    let bytes = encode(&fill_gate::<_, BigEndian>(&scenario_gate::<Goldilocks>())).unwrap();
    for cut in 0..bytes.len() {
        let err = decode::<GateNode<Goldilocks, BigEndian>>(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err.status(), Status::NotEnoughData | Status::InvalidMsgData),
            "cut at {cut}: {err}"
        );
    }
}

#[test]
fn gate_list_roundtrip() {
    let mut rng = DeterministicRng::from_u64(7);
    let shape = CircuitShape::default();
    let gates: Vec<Gate<Goldilocks>> = (0..5)
        .map(|index| sample::gate(&mut rng, index, &shape))
        .collect();
    let bytes = encode(&fill_gates::<_, BigEndian>(&gates)).unwrap();
    let decoded = make_gates(decode::<GatesNode<Goldilocks, BigEndian>>(&bytes).unwrap());
    assert_eq!(decoded, gates);

    let empty = encode(&fill_gates::<Goldilocks, BigEndian>(&[])).unwrap();
    assert_eq!(empty, [0, 0, 0, 0]);
}

#[test]
fn copy_constraints_roundtrip() {
    let constraints = vec![
        CopyConstraint::new(
            Variable::witness(0, 0),
            Variable::new(2, 0, false, ColumnType::PublicInput),
        ),
        CopyConstraint::new(
            Variable::new(1, 3, true, ColumnType::Constant),
            Variable::new(u64::MAX, i32::MIN, false, ColumnType::Selector),
        ),
    ];
    let node = fill_copy_constraints::<LittleEndian>(&constraints);
    assert_eq!(node.length(), 4 + 2 * 28);
    let bytes = encode(&node).unwrap();
    let decoded =
        make_copy_constraints(decode::<CopyConstraintsNode<LittleEndian>>(&bytes).unwrap());
    assert_eq!(decoded, constraints);
}

#[test]
fn unknown_column_tag_is_invalid() {
    let mut bytes = encode(&fill_gate::<_, BigEndian>(&tiny_gate())).unwrap();
    let last = bytes.len() - 1;
    bytes[last] = 4;
    let err = decode::<GateNode<Goldilocks, BigEndian>>(&bytes).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::Integral, "value"));

    bytes[last] = 0;
    bytes[last - 1] = 2;
    let err = decode::<GateNode<Goldilocks, BigEndian>>(&bytes).unwrap_err();
    assert_eq!(err.status(), Status::InvalidMsgData);
}
