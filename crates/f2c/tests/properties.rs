//! Property tests over generated claims.

use f2c::core::verify_transport;
use f2c::{ClaimRejection, F2cConfig, Verifier};
use f2c_testkit::generators::{envelope_from_params, RequestParams};
use proptest::prelude::*;

fn lenient_verifier() -> Verifier {
    Verifier::new(F2cConfig {
        enforce_expiry: false,
        ..F2cConfig::default()
    })
}

proptest! {
    #[test]
    fn generated_claims_accepted_exactly_once(params: RequestParams) {
        let text = envelope_from_params(&params).to_transport();
        let verifier = lenient_verifier();

        let first = verifier.accept(&text, 0).unwrap();
        prop_assert_eq!(first.signer, params.keypair.public_key());
        prop_assert_eq!(
            verifier.accept(&text, 0).unwrap_err(),
            ClaimRejection::Replayed(first.id)
        );
    }

    #[test]
    fn any_bit_flip_in_signature_rejected(
        params in any::<RequestParams>(),
        index in 0usize..64,
        bit in 0u8..8,
    ) {
        let envelope = envelope_from_params(&params);

        let mut sig = *envelope.signature().unwrap().as_bytes();
        sig[index] ^= 1 << bit;
        let mut tampered = envelope;
        tampered.sig = f2c::core::encode(&sig);

        prop_assert!(!verify_transport(&tampered.to_transport()));
    }

    #[test]
    fn expiry_boundary(params: RequestParams) {
        let envelope = envelope_from_params(&params);
        let expiry = envelope.payload.e;
        let verifier = Verifier::default();

        prop_assert!(matches!(
            verifier.accept_envelope(envelope.clone(), expiry),
            Err(ClaimRejection::Expired { .. })
        ), "expected ClaimRejection::Expired");
        if expiry > 0 {
            prop_assert!(verifier.accept_envelope(envelope, expiry - 1).is_ok());
        }
    }
}
