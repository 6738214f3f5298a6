use crate::models::feedback::{validate_rating, MAX_RATING, MIN_RATING};
use crate::{CoreError, Feedback};

use uuid::Uuid;

#[test]
fn test_feedback_new_accepts_valid_rating() {
    let feedback = Feedback::new(Uuid::new_v4(), Uuid::new_v4(), 4, Some("Great".to_string()));

    let feedback = feedback.unwrap();
    assert_eq!(feedback.rating, 4);
    assert_eq!(feedback.comment.as_deref(), Some("Great"));
}

#[test]
fn test_feedback_new_rejects_out_of_range_rating() {
    for rating in [MIN_RATING - 1, MAX_RATING + 1] {
        let result = Feedback::new(Uuid::new_v4(), Uuid::new_v4(), rating, None);
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }
}

#[test]
fn test_validate_rating_bounds() {
    assert!(validate_rating(MIN_RATING).is_ok());
    assert!(validate_rating(MAX_RATING).is_ok());
    assert!(validate_rating(0).is_err());
    assert!(validate_rating(6).is_err());
}
