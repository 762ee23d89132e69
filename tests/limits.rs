use zk_marshalling::config::DEFAULT_MAX_LIST_LEN;
use zk_marshalling::field::Goldilocks;
use zk_marshalling::marshal::{fill_gates, GatesNode};
use zk_marshalling::ser::{
    decode, decode_prefix_with_limits, decode_with_limits, encode, Integral, List, SerError,
    SerKind,
};
use zk_marshalling::utils::sample::{self, CircuitShape};
use zk_marshalling::utils::DeterministicRng;
use zk_marshalling::{BigEndian, LittleEndian, ReadLimits};

type Words = List<BigEndian, Integral<u32, BigEndian>>;

fn words(count: u32) -> Vec<u8> {
    encode(&(0..count).map(Integral::new).collect::<Words>()).unwrap()
}

#[test]
fn small_counts_decode() {
    for count in [0u32, 1, 17] {
        let bytes = words(count);
        assert_eq!(bytes.len(), 4 + 4 * count as usize);
        assert_eq!(decode::<Words>(&bytes).unwrap().len(), count as usize);
    }
}

#[test]
fn count_larger_than_payload_is_invalid() {
    let mut bytes = words(2);
    bytes[3] = 5;
    let err = decode::<Words>(&bytes).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::List, "count"));
}

#[test]
fn huge_count_is_rejected_before_allocation() {
    let bytes = [0xff, 0xff, 0xff, 0xff];
    let err = decode::<Words>(&bytes).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::List, "count"));

    let err = decode_with_limits::<Words>(&bytes, ReadLimits::UNBOUNDED).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::List, "count"));

    // nested: a gate claiming a million constraints
    let mut bytes = vec![0u8; 4 + 8];
    bytes[3] = 1;
    bytes.extend_from_slice(&1_000_000u32.to_be_bytes());
    let err = decode::<GatesNode<Goldilocks, BigEndian>>(&bytes).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::List, "count"));
}

#[test]
fn max_list_len_is_enforced() {
    let bytes = words(3);
    let tight = ReadLimits::new().with_max_list_len(2);
    let err = decode_with_limits::<Words>(&bytes, tight).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::List, "count"));

    let exact = ReadLimits::new().with_max_list_len(3);
    assert_eq!(decode_with_limits::<Words>(&bytes, exact).unwrap().len(), 3);
    assert_eq!(ReadLimits::default().max_list_len, DEFAULT_MAX_LIST_LEN);
}

#[test]
fn max_list_len_applies_to_nested_lists() {
    let shape = CircuitShape {
        terms_per_constraint: 4,
        ..CircuitShape::default()
    };
    let mut rng = DeterministicRng::from_u64(41);
    let gates: Vec<_> = (0..2)
        .map(|index| sample::gate::<Goldilocks>(&mut rng, index, &shape))
        .collect();
    let bytes = encode(&fill_gates::<_, LittleEndian>(&gates)).unwrap();

    let limits = ReadLimits::new().with_max_list_len(3);
    let err =
        decode_with_limits::<GatesNode<Goldilocks, LittleEndian>>(&bytes, limits).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::List, "count"));

    let limits = ReadLimits::new().with_max_list_len(4);
    assert!(decode_with_limits::<GatesNode<Goldilocks, LittleEndian>>(&bytes, limits).is_ok());
}

#[test]
fn max_input_bytes_is_enforced() {
    let bytes = words(4);
    let limits = ReadLimits::new().with_max_input_bytes(bytes.len() - 1);
    let err = decode_with_limits::<Words>(&bytes, limits).unwrap_err();
    assert_eq!(err, SerError::invalid_msg_data(SerKind::Stream, "input length"));

    let err = decode_prefix_with_limits::<Words>(&bytes, limits).unwrap_err();
    assert_eq!(err.kind(), SerKind::Stream);

    let limits = ReadLimits::new().with_max_input_bytes(bytes.len());
    assert!(decode_with_limits::<Words>(&bytes, limits).is_ok());
}

#[test]
fn limits_load_from_partial_json() {
    let limits: ReadLimits = serde_json::from_str(r#"{"max_list_len": 64}"#).unwrap();
    assert_eq!(limits, ReadLimits::new().with_max_list_len(64));
    let limits: ReadLimits = serde_json::from_str("{}").unwrap();
    assert_eq!(limits, ReadLimits::default());
}
