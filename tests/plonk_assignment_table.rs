use insta::assert_snapshot;
use zk_marshalling::compare::compare_assignment_table;
use zk_marshalling::field::{Bls12381Fr, Goldilocks};
use zk_marshalling::marshal::{
    fill_assignment_table, make_assignment_table, AssignmentTableNode,
};
use zk_marshalling::plonk::{AssignmentTable, TableDescription};
use zk_marshalling::ser::{decode, encode, Node, SerKind, Status};
use zk_marshalling::utils::hex::to_spaced_hex;
use zk_marshalling::utils::sample::{self, TableShape};
use zk_marshalling::utils::DeterministicRng;
use zk_marshalling::{BigEndian, LittleEndian};

fn small_table() -> AssignmentTable<Goldilocks> {
    let g = Goldilocks::new;
    AssignmentTable::new(vec![vec![g(1), g(2)]], vec![], vec![vec![g(5)]], vec![])
}

#[test]
fn small_table_layout() {
    let node = fill_assignment_table::<_, BigEndian>(13, &small_table());
    let bytes = encode(&node).unwrap();
    assert_eq!(bytes.len(), 56);
    assert_snapshot!(
        to_spaced_hex(&bytes),
        @"00 00 00 00 00 00 00 0d 00 00 00 01 00 00 00 02 00 00 00 00 00 00 00 01 00 00 00 00 00 00 00 02 00 00 00 00 00 00 00 01 00 00 00 01 00 00 00 00 00 00 00 05 00 00 00 00"
    );

    let node = decode::<AssignmentTableNode<Goldilocks, BigEndian>>(&bytes).unwrap();
    let (usable_rows, table) = make_assignment_table(node);
    assert_eq!(usable_rows, 13);
    assert_eq!(table, small_table());
}

#[test]
fn description_summarises_layout() {
    let description = small_table().description(13);
    assert_eq!(description.total_columns(), 2);
    assert_eq!(description.rows_amount, 2);
    let json = serde_json::to_string(&description).unwrap();
    assert_snapshot!(
        json,
        @r#"{"witness_columns":1,"public_input_columns":0,"constant_columns":1,"selector_columns":0,"usable_rows":13,"rows_amount":2}"#
    );
    let parsed: TableDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, description);
}

#[test]
fn sampled_tables_roundtrip() {
    let mut rng = DeterministicRng::from_u64(11);
    let shape = TableShape::default();

    let table = sample::assignment_table::<Goldilocks>(&mut rng, &shape);
    let node = fill_assignment_table::<_, LittleEndian>(shape.rows as u64, &table);
    let expected = 8 + 4 * 4 + 8 * 4 + 8 * shape.rows * 8;
    assert_eq!(node.length(), expected);
    let bytes = encode(&node).unwrap();
    let node = decode::<AssignmentTableNode<Goldilocks, LittleEndian>>(&bytes).unwrap();
    let (rows, decoded) = make_assignment_table(node);
    assert_eq!(rows, shape.rows as u64);
    compare_assignment_table(&table, &decoded).unwrap();

    let table = sample::assignment_table::<Bls12381Fr>(&mut rng, &shape);
    let bytes = encode(&fill_assignment_table::<_, BigEndian>(7, &table)).unwrap();
    let node = decode::<AssignmentTableNode<Bls12381Fr, BigEndian>>(&bytes).unwrap();
    let (rows, decoded) = make_assignment_table(node);
    assert_eq!(rows, 7);
    assert_eq!(decoded, table);
}

#[test]
fn empty_table_is_four_empty_groups() {
    let table = AssignmentTable::<Goldilocks>::new(vec![], vec![], vec![], vec![]);
    let bytes = encode(&fill_assignment_table::<_, LittleEndian>(0, &table)).unwrap();
    assert_eq!(bytes, [0u8; 24]);
    assert_eq!(table.description(0).rows_amount, 0);
}

#[test]
fn non_canonical_cell_is_rejected() {
    let mut bytes = encode(&fill_assignment_table::<_, BigEndian>(13, &small_table())).unwrap();
    // first witness cell
    bytes[16..24].copy_from_slice(&[0xff; 8]);
    let err = decode::<AssignmentTableNode<Goldilocks, BigEndian>>(&bytes).unwrap_err();
    assert_eq!(err.status(), Status::InvalidMsgData);
    assert_eq!(err.kind(), SerKind::FieldElement);
}
