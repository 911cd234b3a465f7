//! Unit tests for user domain values.

use crate::user::domain::{Email, Nickname, Password, PasswordDigest, UserDomainError};
use rstest::rstest;

#[rstest]
#[case("  Bride@Example.COM ", "bride@example.com")]
#[case("groom@wedding.kr", "groom@wedding.kr")]
fn email_is_trimmed_and_lowercased(#[case] raw: &str, #[case] expected: &str) {
    let email = Email::new(raw).expect("email should be valid");
    assert_eq!(email.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("no-at-sign")]
#[case("@example.com")]
#[case("bride@")]
#[case("a@b@c")]
#[case("bride groom@example.com")]
fn malformed_email_is_rejected(#[case] raw: &str) {
    assert!(matches!(
        Email::new(raw),
        Err(UserDomainError::InvalidEmail(_))
    ));
}

#[rstest]
fn blank_nickname_is_rejected() {
    assert_eq!(Nickname::new("  "), Err(UserDomainError::EmptyNickname));
}

#[rstest]
fn overlong_nickname_reports_its_length() {
    assert_eq!(
        Nickname::new("n".repeat(31)),
        Err(UserDomainError::NicknameTooLong(31))
    );
}

#[rstest]
#[case(7, false)]
#[case(8, true)]
#[case(64, true)]
#[case(65, false)]
fn password_length_policy(#[case] length: usize, #[case] accepted: bool) {
    assert_eq!(Password::new("p".repeat(length)).is_ok(), accepted);
}

#[rstest]
fn password_debug_output_is_redacted() {
    let password = Password::new("correct horse").expect("valid password");
    assert_eq!(format!("{password:?}"), "Password(***)");
}

#[rstest]
fn hash_verifies_only_the_original_password() {
    let password = Password::new("correct horse").expect("valid password");
    let digest = PasswordDigest::generate(&password).expect("hashing succeeds");

    assert!(digest.verify("correct horse"));
    assert!(!digest.verify("correct horsf"));
}

#[rstest]
fn hash_is_stored_as_argon2id_phc_string() {
    let password = Password::new("correct horse").expect("valid password");
    let digest = PasswordDigest::generate(&password).expect("hashing succeeds");

    assert!(digest.as_str().starts_with("$argon2id$"));
    assert!(!digest.as_str().contains("correct horse"));
}

#[rstest]
fn same_password_gets_different_hashes() {
    let password = Password::new("correct horse").expect("valid password");

    let first = PasswordDigest::generate(&password).expect("hashing succeeds");
    let second = PasswordDigest::generate(&password).expect("hashing succeeds");

    assert_ne!(first.as_str(), second.as_str());
    assert!(second.verify("correct horse"));
}

#[rstest]
fn hash_round_trips_through_stored_phc_string() {
    let password = Password::new("correct horse").expect("valid password");
    let digest = PasswordDigest::generate(&password).expect("hashing succeeds");

    let restored = PasswordDigest::from_phc(digest.as_str());

    assert!(restored.verify("correct horse"));
}

#[rstest]
#[case("")]
#[case("not-a-phc-string")]
fn unparsable_stored_hash_never_verifies(#[case] stored: &str) {
    let digest = PasswordDigest::from_phc(stored);

    assert!(!digest.verify("correct horse"));
}
