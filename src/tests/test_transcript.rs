use bls12_381::G1Projective;
use curve25519_dalek::RistrettoPoint;
use group::Group;
use hex_literal::hex;
use rand::rngs::OsRng;

use crate::codec::AlgebraicCodec;
use crate::duplex_sponge::keccak::KeccakDuplexSponge;
use crate::duplex_sponge::DuplexSpongeInterface;
use crate::errors::Error;
use crate::transcript::{Transcript, TranscriptCodec};

const LABEL: [u8; 32] = *b"yellow submarineyellow submarine";

#[allow(non_snake_case)]
#[test]
fn ristretto_generator_challenge_vector() {
    let G = RistrettoPoint::generator();
    let challenge = Transcript::<RistrettoPoint>::new(LABEL)
        .prover_message(&[G])
        .verifier_challenge();
    assert_eq!(
        challenge.to_bytes(),
        hex!("fd7e7e43512ac1d3ae952693607a7e68153088ec1b41b52bf0dceefe6a96bf0b")
    );
}

#[allow(non_snake_case)]
#[test]
fn bls12_381_generator_challenge_vector() {
    let G = G1Projective::generator();
    let challenge = Transcript::<G1Projective>::new(LABEL)
        .prover_message(&[G])
        .verifier_challenge();
    assert_eq!(
        challenge.to_bytes(),
        hex!("d4c262b92ab21440d7543a1a5ffdfd9e850e79674007c9f87b7b91fea6230269")
    );
}

#[allow(non_snake_case)]
#[test]
fn successive_challenges_continue_the_stream() {
    let G = RistrettoPoint::generator();
    let mut transcript = Transcript::<RistrettoPoint>::new(LABEL);
    transcript.prover_message(&[G]);
    let first = transcript.verifier_challenge();
    let second = transcript.verifier_challenge();

    assert_eq!(
        first.to_bytes(),
        hex!("fd7e7e43512ac1d3ae952693607a7e68153088ec1b41b52bf0dceefe6a96bf0b")
    );
    assert_eq!(
        second.to_bytes(),
        hex!("843b53dad58cbd3c76308a654e47c8afc8f83d06ff05d57efd4b9a4b3c2d8c00")
    );

    let mut batched = Transcript::<RistrettoPoint>::new(LABEL);
    batched.prover_message(&[G]);
    assert_eq!(batched.verifier_challenges(2), vec![first, second]);
}

#[test]
fn challenges_are_deterministic() {
    let elements = [
        RistrettoPoint::random(&mut OsRng),
        RistrettoPoint::random(&mut OsRng),
    ];

    let mut prover = Transcript::<RistrettoPoint>::new(LABEL);
    let mut verifier = Transcript::<RistrettoPoint>::new(LABEL);
    for _ in 0..3 {
        assert_eq!(
            prover.prover_message(&elements).verifier_challenge(),
            verifier.prover_message(&elements).verifier_challenge()
        );
    }
}

#[allow(non_snake_case)]
#[test]
fn challenges_depend_on_message_order() {
    let A = RistrettoPoint::random(&mut OsRng);
    let B = RistrettoPoint::random(&mut OsRng);

    let ab = Transcript::<RistrettoPoint>::new(LABEL)
        .prover_message(&[A, B])
        .verifier_challenge();
    let ba = Transcript::<RistrettoPoint>::new(LABEL)
        .prover_message(&[B, A])
        .verifier_challenge();
    assert_ne!(ab, ba);
}

#[allow(non_snake_case)]
#[test]
fn challenges_depend_on_label() {
    let G = RistrettoPoint::generator();
    let c1 = Transcript::<RistrettoPoint>::new(LABEL)
        .prover_message(&[G])
        .verifier_challenge();
    let c2 = Transcript::<RistrettoPoint>::new(*b"another label, same length......")
        .prover_message(&[G])
        .verifier_challenge();
    assert_ne!(c1, c2);
}

#[allow(non_snake_case)]
#[test]
fn cloned_transcripts_fork_independently() {
    let G = RistrettoPoint::generator();
    let mut transcript = Transcript::<RistrettoPoint>::new(LABEL);
    transcript.prover_message(&[G]);

    let mut fork = transcript.clone();
    assert_eq!(transcript.verifier_challenge(), fork.verifier_challenge());

    transcript.prover_message(&[G]);
    fork.prover_message(&[G + G]);
    assert_ne!(transcript.verifier_challenge(), fork.verifier_challenge());
}

#[allow(non_snake_case)]
#[test]
fn transcript_matches_codec_composition() {
    let G = RistrettoPoint::generator();
    let s = curve25519_dalek::Scalar::from(42u64);

    let mut transcript = Transcript::<RistrettoPoint>::new(LABEL);
    transcript.prover_message(&[G]).absorb_scalars(&[s]);
    let challenge = transcript.verifier_challenge();

    let mut sponge = KeccakDuplexSponge::new(LABEL);
    sponge.absorb_elements(&[G]);
    AlgebraicCodec::<RistrettoPoint>::absorb_scalars(&mut sponge, &[s]);
    let expected = AlgebraicCodec::<RistrettoPoint>::squeeze_scalars(&mut sponge, 1);
    assert_eq!(vec![challenge], expected);
}

#[test]
fn try_new_checks_label_length() {
    let err = Transcript::<RistrettoPoint>::try_new(b"short label").unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLabelLength {
            expected: 32,
            actual: 11
        }
    );

    let mut from_slice = Transcript::<RistrettoPoint>::try_new(LABEL.as_slice()).unwrap();
    let mut from_array = Transcript::<RistrettoPoint>::new(LABEL);
    assert_eq!(
        from_slice.verifier_challenge(),
        from_array.verifier_challenge()
    );
}
