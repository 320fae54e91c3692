//! Proptest generators for property-based testing.

use proptest::prelude::*;

use f2c_core::{
    build_envelope, normalize, AuxData, CanonicalPayload, ChainId, Ed25519PublicKey, Envelope,
    Keypair, RawRequest, SchemeId,
};
use serde_json::Value;

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random Ed25519PublicKey.
pub fn public_key() -> impl Strategy<Value = Ed25519PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate a seller identifier: usually an address, sometimes free text.
pub fn seller() -> impl Strategy<Value = String> {
    prop_oneof![
        "0x[0-9a-f]{1,64}".prop_map(String::from),
        "\\PC{0,24}".prop_map(String::from),
    ]
}

/// Generate a reward percentage, including values outside `[3, 100]`.
pub fn reward_pct() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0f64..1000.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

/// Generate an expiry in Unix milliseconds.
pub fn expires_at_ms() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..=4_102_444_800_000, any::<u64>()]
}

/// Generate a nonce of any length, including empty and multi-byte.
pub fn nonce() -> impl Strategy<Value = String> {
    "\\PC{0,12}".prop_map(String::from)
}

/// Generate integer-only metadata values.
pub fn aux_data() -> impl Strategy<Value = AuxData> {
    prop::collection::btree_map(
        "[a-z]{1,8}",
        prop_oneof![
            any::<i64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
            "\\PC{0,16}".prop_map(Value::from),
            Just(Value::Null),
        ],
        0..4,
    )
    .prop_map(|entries| {
        let mut aux = AuxData::new();
        for (key, value) in entries {
            aux.insert(key, value);
        }
        aux
    })
}

/// Parameters for generating a claim.
#[derive(Debug, Clone)]
pub struct RequestParams {
    pub keypair: Keypair,
    pub request: RawRequest,
}

impl Arbitrary for RequestParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<[u8; 32]>(), // seed
            seller(),
            reward_pct(),
            expires_at_ms(),
            nonce(),
            aux_data(),
        )
            .prop_map(|(seed, seller, reward_pct, expires_at_ms, nonce, metadata)| {
                RequestParams {
                    keypair: Keypair::from_seed(&seed),
                    request: RawRequest {
                        chain: ChainId::SuiMainnet,
                        seller,
                        scheme: SchemeId::Default,
                        reward_pct,
                        metadata,
                        expires_at_ms,
                        nonce,
                    },
                }
            })
            .boxed()
    }
}

/// Generate a normalized payload.
pub fn canonical_payload() -> impl Strategy<Value = CanonicalPayload> {
    any::<RequestParams>().prop_map(|params| normalize(&params.request))
}

/// Normalize and sign the request, attaching its metadata.
pub fn envelope_from_params(params: &RequestParams) -> Envelope {
    build_envelope(normalize(&params.request), &params.keypair)
        .with_aux(params.request.metadata.clone())
}
