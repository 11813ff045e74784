//! End-to-end tests for the wallet authentication gate.
//!
//! These tests sign claims with real Ed25519 key pairs, push them
//! through the same wire types the HTTP handlers use, and assert on the
//! client-visible rejections.

use base64::Engine;
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use serde_json::json;

use next_teacher_auth::auth::{
    signing_message, Action, Endpoint, SignatureValidator, VerifiedClaim,
};
use next_teacher_auth::config::Settings;
use next_teacher_auth::error::{AuthErrorKind, GateError};
use next_teacher_auth::policy::{
    authorize_comment_delete, authorize_teacher_delete, AdminWallets,
};
use next_teacher_auth::protocol::{AuthClaim, Rejection, VerificationResult};

const NOW: i64 = 1_700_000_000_000;
const FIVE_MINUTES: i64 = 300_000;

/// A test wallet: a real key pair plus its base58 address.
struct TestWallet {
    key: SigningKey,
    address: String,
}

impl TestWallet {
    fn generate() -> Self {
        let key = SigningKey::generate(&mut OsRng);
        let address = bs58::encode(key.verifying_key().as_bytes()).into_string();
        Self { key, address }
    }

    /// Sign a claim the way the browser wallet does: build the canonical
    /// message, sign its UTF-8 bytes, base64-encode the signature.
    fn sign(&self, timestamp: i64, action: Action) -> String {
        let message = signing_message(&self.address, timestamp, action);
        let signature = self.key.sign(message.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(signature.to_bytes())
    }

    /// Build the request body a mutating endpoint would receive.
    fn request_body(&self, timestamp: i64, action: Action, action_type: Option<&str>) -> Vec<u8> {
        let mut body = json!({
            "walletAddress": self.address,
            "signature": self.sign(timestamp, action),
            "timestamp": timestamp,
            "content": "a thoughtful review of this mentor, at least ten characters",
            "rating": 5,
        });
        if let Some(label) = action_type {
            body["actionType"] = json!(label);
        }
        serde_json::to_vec(&body).unwrap()
    }
}

fn verify(
    body: &[u8],
    endpoint: Endpoint,
    now: i64,
) -> Result<VerifiedClaim, GateError> {
    let claim = AuthClaim::from_slice(body)?;
    SignatureValidator::new(FIVE_MINUTES).verify_claim_at(&claim, endpoint, now)
}

// ============================================================================
// Authentication scenarios
// ============================================================================

#[test]
fn test_valid_comment_post_accepted() {
    let wallet = TestWallet::generate();
    let body = wallet.request_body(NOW, Action::Comment, None);

    // Server verifies 10 seconds after signing.
    let verified = verify(&body, Endpoint::CommentCreate, NOW + 10_000).unwrap();
    assert_eq!(verified.action, Action::Comment);
    assert_eq!(verified.wallet_address, wallet.address);
}

#[test]
fn test_replay_across_actions_rejected() {
    let wallet = TestWallet::generate();
    // Captured from a like request...
    let body = wallet.request_body(NOW, Action::Like, None);

    // ...accepted where it was meant to go...
    assert!(verify(&body, Endpoint::CommentLike, NOW).is_ok());

    // ...but refused when presented against the dislike endpoint, even
    // with the same wallet and timestamp.
    let result = verify(&body, Endpoint::CommentDislike, NOW);
    assert!(matches!(
        result,
        Err(GateError::Auth {
            kind: AuthErrorKind::SignatureInvalid
        })
    ));
}

#[test]
fn test_expired_claim_rejected_with_expired_reason() {
    let wallet = TestWallet::generate();
    let body = wallet.request_body(NOW, Action::DeleteTeacher, None);

    // Six minutes later, with a five minute tolerance.
    let result = verify(&body, Endpoint::TeacherDelete, NOW + 6 * 60 * 1000);
    let error = result.unwrap_err();
    assert!(matches!(
        error,
        GateError::Auth {
            kind: AuthErrorKind::SignatureExpired { skew_ms: 360_000 }
        }
    ));

    // The client sees an expiry prompt, distinct from a crypto failure.
    let rejection = Rejection::from(&error);
    assert_eq!(rejection.status, 400);
    assert_eq!(rejection.code, "SIGNATURE_EXPIRED");
    assert_eq!(rejection.message, "Signature expired, please re-sign");
}

#[test]
fn test_resubmission_needs_fresh_signature() {
    let wallet = TestWallet::generate();
    let stale = wallet.request_body(NOW, Action::Comment, None);
    let later = NOW + 6 * 60 * 1000;

    // Resending the old claim cannot succeed.
    assert!(verify(&stale, Endpoint::CommentCreate, later).is_err());

    // Re-signing with a fresh timestamp does.
    let fresh = wallet.request_body(later, Action::Comment, None);
    assert!(verify(&fresh, Endpoint::CommentCreate, later).is_ok());
}

#[test]
fn test_tampered_signature_rejected() {
    let wallet = TestWallet::generate();
    let message = signing_message(&wallet.address, NOW, Action::Comment);
    let mut bytes = wallet.key.sign(message.as_bytes()).to_bytes();
    bytes[17] ^= 0x40;

    let body = json!({
        "walletAddress": wallet.address,
        "signature": base64::engine::general_purpose::STANDARD.encode(bytes),
        "timestamp": NOW,
    });
    let result = verify(&serde_json::to_vec(&body).unwrap(), Endpoint::CommentCreate, NOW);
    assert!(matches!(
        result,
        Err(GateError::Auth {
            kind: AuthErrorKind::SignatureInvalid
        })
    ));
}

#[test]
fn test_impersonation_rejected() {
    let signer = TestWallet::generate();
    let victim = TestWallet::generate();

    // Signed with the attacker's key but claiming the victim's address.
    let message = signing_message(&victim.address, NOW, Action::Comment);
    let signature = signer.key.sign(message.as_bytes());
    let body = json!({
        "walletAddress": victim.address,
        "signature": base64::engine::general_purpose::STANDARD.encode(signature.to_bytes()),
        "timestamp": NOW,
    });

    let result = verify(&serde_json::to_vec(&body).unwrap(), Endpoint::CommentCreate, NOW);
    assert!(matches!(
        result,
        Err(GateError::Auth {
            kind: AuthErrorKind::SignatureInvalid
        })
    ));
}

#[test]
fn test_missing_fields_rejected_individually() {
    let wallet = TestWallet::generate();

    let no_signature = json!({ "walletAddress": wallet.address, "timestamp": NOW });
    let result = verify(
        &serde_json::to_vec(&no_signature).unwrap(),
        Endpoint::CommentCreate,
        NOW,
    );
    assert!(matches!(
        result,
        Err(GateError::Auth {
            kind: AuthErrorKind::MissingSignature
        })
    ));

    let no_timestamp = json!({ "walletAddress": wallet.address, "signature": "c2ln" });
    let result = verify(
        &serde_json::to_vec(&no_timestamp).unwrap(),
        Endpoint::CommentCreate,
        NOW,
    );
    assert!(matches!(
        result,
        Err(GateError::Auth {
            kind: AuthErrorKind::MissingTimestamp
        })
    ));
}

// ============================================================================
// Authorization scenarios
// ============================================================================

#[test]
fn test_author_deletes_own_comment() {
    let author = TestWallet::generate();
    let admins = AdminWallets::default();

    let body = author.request_body(NOW, Action::DeleteComment, None);
    let verified = verify(&body, Endpoint::CommentDelete, NOW).unwrap();

    // Stored addresses are lowercased by the persistence layer.
    let stored_author = author.address.to_lowercase();
    assert!(authorize_comment_delete(&verified, &stored_author, &admins).is_ok());
}

#[test]
fn test_admin_deletes_someone_elses_comment() {
    let author = TestWallet::generate();
    let admin = TestWallet::generate();
    let admins = AdminWallets::from_config(&next_teacher_auth::config::AdminConfig {
        wallets: vec![admin.address.clone()],
    });

    let body = admin.request_body(NOW, Action::AdminDeleteComment, Some("admin-delete-comment"));
    let verified = verify(&body, Endpoint::CommentDelete, NOW).unwrap();
    assert!(authorize_comment_delete(&verified, &author.address, &admins).is_ok());
}

#[test]
fn test_stranger_cannot_delete_comment() {
    let author = TestWallet::generate();
    let stranger = TestWallet::generate();
    let admins = AdminWallets::default();

    let body = stranger.request_body(NOW, Action::DeleteComment, None);
    let verified = verify(&body, Endpoint::CommentDelete, NOW).unwrap();

    let error = authorize_comment_delete(&verified, &author.address, &admins).unwrap_err();
    let rejection = Rejection::from(&error);
    assert_eq!(rejection.status, 403);
}

#[test]
fn test_non_admin_cannot_delete_teacher() {
    let wallet = TestWallet::generate();
    let admins = AdminWallets::default();

    // The signature itself is genuine; only the policy layer refuses.
    let body = wallet.request_body(NOW, Action::DeleteTeacher, None);
    let verified = verify(&body, Endpoint::TeacherDelete, NOW).unwrap();

    let error = authorize_teacher_delete(&verified, &admins).unwrap_err();
    assert_eq!(Rejection::from(&error).status, 403);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_settings_round_trip_from_file() {
    let admin = TestWallet::generate();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gate.toml");
    std::fs::write(
        &path,
        format!(
            "[auth]\ntolerance_ms = 60000\n\n[admin]\nwallets = [\"{}\"]\n",
            admin.address
        ),
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.auth.tolerance_ms, 60_000);

    let admins = AdminWallets::from_config(&settings.admin);
    assert!(admins.is_admin(&admin.address));

    // A one-minute tolerance rejects a two-minute-old claim.
    let validator = SignatureValidator::from_settings(&settings);
    let wallet = TestWallet::generate();
    let claim = AuthClaim::from_slice(&wallet.request_body(NOW, Action::Comment, None)).unwrap();
    assert!(validator
        .verify_claim_at(&claim, Endpoint::CommentCreate, NOW + 120_000)
        .is_err());
}

#[test]
fn test_settings_reject_bad_admin_wallet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gate.toml");
    std::fs::write(&path, "[admin]\nwallets = [\"tooshort\"]\n").unwrap();

    assert!(matches!(
        Settings::load(&path),
        Err(GateError::Config { .. })
    ));
}

// ============================================================================
// Wire summary
// ============================================================================

#[test]
fn test_verification_result_summary() {
    let wallet = TestWallet::generate();
    let validator = SignatureValidator::new(FIVE_MINUTES);

    let claim = AuthClaim::from_slice(&wallet.request_body(NOW, Action::Comment, None)).unwrap();
    let outcome = validator.verify_claim_at(&claim, Endpoint::CommentCreate, NOW);
    let summary = VerificationResult::from(&outcome);
    assert!(summary.valid);

    let outcome = validator.verify_claim_at(&claim, Endpoint::CommentCreate, NOW + 600_000);
    let summary = VerificationResult::from(&outcome);
    assert!(!summary.valid);
    assert_eq!(summary.reason, Some("Signature expired, please re-sign"));
}
