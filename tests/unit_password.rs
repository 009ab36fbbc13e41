use todoapp_core::password::{hash_password, verify_password};

#[test]
fn test_hash_password_produces_bcrypt_hash() {
    let hash = hash_password("mypassword123").unwrap();

    assert_ne!(hash, "mypassword123");
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_verify_password_correct() {
    let hash = hash_password("mypassword123").unwrap();

    assert!(verify_password("mypassword123", &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("mypassword123").unwrap();

    assert!(!verify_password("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_case_sensitive() {
    let hash = hash_password("MyPassword").unwrap();

    assert!(!verify_password("mypassword", &hash).unwrap());
}

#[test]
fn test_hash_password_unique_salts() {
    let hash1 = hash_password("samepassword").unwrap();
    let hash2 = hash_password("samepassword").unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password("samepassword", &hash1).unwrap());
    assert!(verify_password("samepassword", &hash2).unwrap());
}

#[test]
fn test_verify_password_invalid_hash_errors() {
    let result = verify_password("password", "not-a-bcrypt-hash");

    assert!(result.is_err());
}
