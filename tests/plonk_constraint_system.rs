use zk_marshalling::compare::{compare_constraint_system, compare_gates, compare_lookup_tables};
use zk_marshalling::field::{Bn254Fr, FieldCodec, Goldilocks, PallasFp};
use zk_marshalling::marshal::{
    fill_constraint_system, fill_lookup_gates, fill_lookup_tables, make_constraint_system,
    make_lookup_gates, make_lookup_tables, ConstraintSystemNode, LookupGatesNode,
    LookupTablesNode,
};
use zk_marshalling::plonk::{ConstraintSystem, LookupTable, Variable};
use zk_marshalling::ser::{decode, encode, Node};
use zk_marshalling::utils::sample::{self, CircuitShape};
use zk_marshalling::utils::DeterministicRng;
use zk_marshalling::{BigEndian, Endian, LittleEndian};

fn roundtrip<F: FieldCodec, E: Endian>(system: &ConstraintSystem<F>) -> ConstraintSystem<F> {
    let node = fill_constraint_system::<F, E>(system);
    let bytes = encode(&node).unwrap();
    assert_eq!(bytes.len(), node.length());
    make_constraint_system(decode::<ConstraintSystemNode<F, E>>(&bytes).unwrap())
}

#[test]
fn sampled_systems_roundtrip_in_both_orders() {
    let shape = CircuitShape::default();
    let mut rng = DeterministicRng::from_u64(1);
    let system = sample::constraint_system::<Goldilocks>(&mut rng, &shape);
    assert!(system.has_lookups());
    assert_eq!(roundtrip::<_, BigEndian>(&system), system);
    assert_eq!(roundtrip::<_, LittleEndian>(&system), system);

    let system = sample::constraint_system::<Bn254Fr>(&mut rng, &shape);
    let decoded = roundtrip::<_, LittleEndian>(&system);
    compare_constraint_system(&system, &decoded).unwrap();

    let system = sample::constraint_system::<PallasFp>(&mut rng, &shape);
    assert_eq!(roundtrip::<_, BigEndian>(&system), system);
}

#[test]
fn byte_orders_produce_different_images() {
    let mut rng = DeterministicRng::from_u64(2);
    let system = sample::constraint_system::<Goldilocks>(&mut rng, &CircuitShape::default());
    let big = encode(&fill_constraint_system::<_, BigEndian>(&system)).unwrap();
    let little = encode(&fill_constraint_system::<_, LittleEndian>(&system)).unwrap();
    assert_eq!(big.len(), little.len());
    assert_ne!(big, little);
}

#[test]
fn system_without_lookups_ends_with_empty_lists() {
    let shape = CircuitShape {
        lookup_gates: 0,
        lookup_tables: 0,
        ..CircuitShape::default()
    };
    let mut rng = DeterministicRng::from_u64(3);
    let sampled = sample::constraint_system::<Goldilocks>(&mut rng, &shape);
    let (gates, copies, _, _) = sampled.into_parts();
    let system = ConstraintSystem::without_lookups(gates, copies);
    assert!(!system.has_lookups());

    let bytes = encode(&fill_constraint_system::<_, BigEndian>(&system)).unwrap();
    assert_eq!(&bytes[bytes.len() - 8..], &[0u8; 8]);
    let decoded = roundtrip::<_, BigEndian>(&system);
    assert!(decoded.lookup_gates().is_empty());
    assert!(decoded.lookup_tables().is_empty());
    assert_eq!(decoded, system);
}

#[test]
fn lookup_parts_roundtrip_alone() {
    let shape = CircuitShape::default();
    let mut rng = DeterministicRng::from_u64(4);
    let gates: Vec<_> = (0..3)
        .map(|tag| sample::lookup_gate::<Goldilocks>(&mut rng, tag, &shape))
        .collect();
    let tables: Vec<_> = (0..3).map(|tag| sample::lookup_table(&mut rng, tag)).collect();

    let bytes = encode(&fill_lookup_gates::<_, LittleEndian>(&gates)).unwrap();
    let decoded =
        make_lookup_gates(decode::<LookupGatesNode<Goldilocks, LittleEndian>>(&bytes).unwrap());
    assert_eq!(decoded, gates);

    let bytes = encode(&fill_lookup_tables::<BigEndian>(&tables)).unwrap();
    let decoded = make_lookup_tables(decode::<LookupTablesNode<BigEndian>>(&bytes).unwrap());
    compare_lookup_tables(&tables, &decoded).unwrap();
}

#[test]
fn lookup_table_layout() {
    let table = LookupTable::new(5, 1, vec![vec![Variable::witness(2, 0)]]);
    let node = fill_lookup_tables::<BigEndian>(&[table]);
    // count + tag + columns + options count + one option of one variable
    assert_eq!(node.length(), 4 + 8 + 8 + 4 + 4 + 14);
}

#[test]
fn mismatch_names_the_differing_field() {
    let mut rng = DeterministicRng::from_u64(5);
    let system = sample::constraint_system::<Goldilocks>(&mut rng, &CircuitShape::default());
    let mut changed = system.gates().to_vec();
    changed[1].constraints[0].terms[2].vars[0].rotation += 1;

    let mismatch = compare_gates(system.gates(), &changed).unwrap_err();
    assert_eq!(mismatch.path, "gates[1].constraints[0].terms[2].vars[0].rotation");

    changed.pop();
    let mismatch = compare_gates(system.gates(), &changed).unwrap_err();
    assert_eq!(mismatch.path, "gates");
    assert_eq!(mismatch.detail, "length 4 != 3");
}
