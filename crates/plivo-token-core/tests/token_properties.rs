//! End-to-end checks of generated tokens through the public API.

#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use plivo_token_core::{
    Claims, Credentials, DEFAULT_APP_ID, Error, Permissions, TOKEN_VALIDITY_SECS, TokenSigner,
    TokenTimes, decode_header, decode_unverified, generate_token, generate_token_at, verify,
};

fn decode_json(token: &str) -> serde_json::Value {
    let claims: Claims = decode_unverified(token).unwrap();
    serde_json::to_value(claims).unwrap()
}

#[test]
fn reference_credentials_decode_to_expected_claims() {
    let token = generate_token("AID1", "SECRET", "user1", "APP1", &Permissions::default()).unwrap();
    let json = decode_json(&token);

    assert_eq!(json["iss"], "AID1");
    assert_eq!(json["sub"], "user1");
    assert_eq!(json["app"], "APP1");

    let nbf = json["nbf"].as_i64().unwrap();
    let exp = json["exp"].as_i64().unwrap();
    let iat = json["iat"].as_i64().unwrap();
    assert_eq!(nbf, iat);
    assert!(nbf < exp);
    assert_eq!(exp - nbf, TOKEN_VALIDITY_SECS);
}

#[test]
fn varied_inputs_keep_structure_and_window() {
    let inputs = [
        ("MAODUZYTQ0Y2FMYJBLOW", "s3cr3t", "alice0123", DEFAULT_APP_ID),
        ("x", "y", "z", "w"),
        ("AID-üñí", "pässwörd", "user@example", "app/1"),
    ];
    for (iss, secret, sub, app) in inputs {
        let token = generate_token(iss, secret, sub, app, &Permissions::voice(true, false)).unwrap();
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3, "{token}");
        assert!(segments.iter().all(|s| !s.is_empty()));

        let claims: Claims = decode_unverified(&token).unwrap();
        assert_eq!(claims.iss, iss);
        assert_eq!(claims.sub, sub);
        assert_eq!(claims.app, app);
        assert_eq!(claims.validity_secs(), TOKEN_VALIDITY_SECS);
        assert!(!claims.per.voice.outgoing_allow);

        let verified: Claims = verify(&token, secret).unwrap();
        assert_eq!(verified, claims);
    }
}

#[test]
fn empty_secret_fails_before_signing() {
    let err = generate_token("AID1", "", "user1", "APP1", &Permissions::default()).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err:?}");
}

#[test]
fn one_second_apart_differs_only_in_time() {
    let per = Permissions::default();
    let a = generate_token_at("AID1", "SECRET", "user1", "APP1", &per, 1_700_000_000).unwrap();
    let b = generate_token_at("AID1", "SECRET", "user1", "APP1", &per, 1_700_000_001).unwrap();
    assert_ne!(a, b);

    let (a, b) = (decode_json(&a), decode_json(&b));
    assert_ne!(a["iat"], b["iat"]);
    assert_ne!(a["exp"], b["exp"]);
    for field in ["sub", "iss", "app", "per"] {
        assert_eq!(a[field], b[field], "{field}");
    }
}

#[test]
fn signer_from_credentials_produces_verifiable_token() {
    let creds = Credentials::new(
        Some("AID1".into()),
        Some("SECRET".into()),
        Some("user1".into()),
    )
    .unwrap();
    let signer = TokenSigner::new(creds, DEFAULT_APP_ID, Permissions::default()).unwrap();
    let token = signer.sign().unwrap();

    let header = decode_header(&token).unwrap();
    assert_eq!(header.cty.as_deref(), Some("plivo;v=1"));

    let claims: Claims = verify(&token, "SECRET").unwrap();
    assert_eq!(claims.app, DEFAULT_APP_ID);
    assert_eq!(TokenTimes::from_claims(&claims).unwrap().validity_display(), "24:00:00");

    assert!(verify::<Permissions>(&token, "secret").is_err());
}

#[test]
fn tampered_claims_fail_verification_but_still_decode() {
    let token = generate_token("AID1", "SECRET", "user1", "APP1", &Permissions::default()).unwrap();
    let forged = generate_token("AID1", "SECRET", "mallory", "APP1", &Permissions::default())
        .unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let forged_parts: Vec<&str> = forged.split('.').collect();
    let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

    let claims: Claims = decode_unverified(&spliced).unwrap();
    assert_eq!(claims.sub, "mallory");
    assert!(matches!(
        verify::<Permissions>(&spliced, "SECRET"),
        Err(Error::Verification(_))
    ));
}
