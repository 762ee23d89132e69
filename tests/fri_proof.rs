use std::collections::BTreeMap;

use zk_marshalling::commitment::{
    BatchedCommitments, CommitmentScheme, FriProof, Lpc, LpcProof, MerklePathElement,
    MerkleProof, DIGEST_SIZE,
};
use zk_marshalling::field::{Goldilocks, PallasFp};
use zk_marshalling::marshal::{
    fill_commitment, fill_eval_proof, fill_fri_proof, fill_merkle_proof, make_commitment,
    make_eval_proof, make_fri_proof, make_merkle_proof, FriProofNode, MerkleProofNode,
};
use zk_marshalling::ser::{decode, encode, Node, Status};
use zk_marshalling::utils::sample;
use zk_marshalling::utils::DeterministicRng;
use zk_marshalling::{BigEndian, LittleEndian};

#[test]
fn merkle_proof_layout() {
    let proof = MerkleProof::new(
        5,
        [0xaa; DIGEST_SIZE],
        vec![
            vec![MerklePathElement {
                position: 1,
                hash: [0x11; DIGEST_SIZE],
            }],
            vec![],
        ],
    );
    let node = fill_merkle_proof::<BigEndian, DIGEST_SIZE>(&proof);
    // leaf + root + layer count + (count + element) + empty layer
    assert_eq!(node.length(), 8 + 32 + 4 + (4 + 40) + 4);
    let bytes = encode(&node).unwrap();
    assert_eq!(&bytes[..8], &[0, 0, 0, 0, 0, 0, 0, 5]);
    assert_eq!(&bytes[8..40], &[0xaa; 32]);
    let decoded =
        make_merkle_proof(decode::<MerkleProofNode<BigEndian, DIGEST_SIZE>>(&bytes).unwrap());
    assert_eq!(decoded, proof);
    assert_eq!(decoded.depth(), 2);
}

#[test]
fn short_digests_are_supported() {
    let mut rng = DeterministicRng::from_u64(31);
    let proof: MerkleProof<16> = sample::merkle_proof(&mut rng, 4, 4);
    let node = fill_merkle_proof::<LittleEndian, 16>(&proof);
    assert_eq!(node.length(), 8 + 16 + 4 + 4 * (4 + 3 * (8 + 16)));
    let bytes = encode(&node).unwrap();
    let decoded = make_merkle_proof(decode::<MerkleProofNode<LittleEndian, 16>>(&bytes).unwrap());
    assert_eq!(decoded, proof);
}

#[test]
fn fri_proof_roundtrip() {
    let mut rng = DeterministicRng::from_u64(32);
    let proof: FriProof<Goldilocks, DIGEST_SIZE> = sample::fri_proof(&mut rng, 3, 4, 2);
    assert_eq!(proof.num_rounds(), 3);
    let node = fill_fri_proof::<_, BigEndian, DIGEST_SIZE>(&proof);
    let bytes = encode(&node).unwrap();
    assert_eq!(bytes.len(), node.length());
    // round roots follow their count
    assert_eq!(&bytes[..4], &[0, 0, 0, 3]);
    assert_eq!(&bytes[4..36], &proof.fri_roots[0]);
    let node = decode::<FriProofNode<Goldilocks, BigEndian, DIGEST_SIZE>>(&bytes).unwrap();
    let decoded = make_fri_proof(node);
    assert_eq!(decoded, proof);
}

#[test]
fn fri_truncations_are_rejected() {
    let mut rng = DeterministicRng::from_u64(33);
    let proof: FriProof<Goldilocks, DIGEST_SIZE> = sample::fri_proof(&mut rng, 1, 1, 1);
    let bytes = encode(&fill_fri_proof::<_, LittleEndian, DIGEST_SIZE>(&proof)).unwrap();
    for cut in [0, 3, 4, 35, bytes.len() / 2, bytes.len() - 1] {
        let err = decode::<FriProofNode<Goldilocks, LittleEndian, DIGEST_SIZE>>(&bytes[..cut])
            .unwrap_err();
        assert!(matches!(
            err.status(),
            Status::NotEnoughData | Status::InvalidMsgData
        ));
    }
}

#[test]
fn lpc_proof_through_scheme() {
    type Scheme = Lpc<PallasFp, DIGEST_SIZE>;
    let mut rng = DeterministicRng::from_u64(34);
    let proof = LpcProof {
        z: sample::eval_storage::<PallasFp>(&mut rng, 2, 3, 3),
        fri_proof: sample::fri_proof(&mut rng, 2, 2, 2),
    };
    let node = fill_eval_proof::<Scheme, BigEndian>(&proof);
    let bytes = encode(&node).unwrap();
    assert_eq!(bytes.len(), node.length());
    let decoded = make_eval_proof::<Scheme, BigEndian>(
        decode::<<Scheme as CommitmentScheme>::ProofNode<BigEndian>>(&bytes).unwrap(),
    );
    assert_eq!(decoded, proof);
}

#[test]
fn lpc_commitments_are_keyed_roots() {
    type Scheme = Lpc<Goldilocks, DIGEST_SIZE>;
    let roots: BatchedCommitments<[u8; DIGEST_SIZE]> =
        [(0u64, [1u8; DIGEST_SIZE]), (4, [2u8; DIGEST_SIZE])]
            .into_iter()
            .collect();
    let bytes = encode(&fill_commitment::<Scheme, LittleEndian>(&roots)).unwrap();
    assert_eq!(bytes.len(), 4 + 2 * (8 + 32));
    assert_eq!(&bytes[..4], &[2, 0, 0, 0]);
    assert_eq!(&bytes[44..52], &[4, 0, 0, 0, 0, 0, 0, 0]);
    let decoded = make_commitment::<Scheme, LittleEndian>(
        decode::<<Scheme as CommitmentScheme>::CommitmentNode<LittleEndian>>(&bytes).unwrap(),
    );
    assert_eq!(decoded, roots);
}

#[test]
fn initial_proofs_keep_batch_order() {
    let mut rng = DeterministicRng::from_u64(35);
    let mut proof: FriProof<Goldilocks, DIGEST_SIZE> = sample::fri_proof(&mut rng, 1, 1, 1);
    let opening = proof.query_proofs[0].initial_proof[&0].clone();
    proof.query_proofs[0].initial_proof = BTreeMap::from([(7, opening.clone()), (2, opening)]);
    let bytes = encode(&fill_fri_proof::<_, BigEndian, DIGEST_SIZE>(&proof)).unwrap();
    let node = decode::<FriProofNode<Goldilocks, BigEndian, DIGEST_SIZE>>(&bytes).unwrap();
    let decoded = make_fri_proof(node);
    let batches: Vec<u64> = decoded.query_proofs[0].initial_proof.keys().copied().collect();
    assert_eq!(batches, [2, 7]);
}
