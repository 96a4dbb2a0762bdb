use crate::UserId;

#[test]
fn test_user_id_from_number_and_string_agree() {
    let from_number: UserId = serde_json::from_str("7").unwrap();
    let from_string: UserId = serde_json::from_str("\"7\"").unwrap();

    assert_eq!(from_number, from_string);
    assert_eq!(from_number.to_string(), "7");
}

#[test]
fn test_user_id_serializes_as_string() {
    let json = serde_json::to_string(&UserId::from(7)).unwrap();
    assert_eq!(json, "\"7\"");
}
