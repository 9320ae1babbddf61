use serde::Serialize;
use std::borrow::Cow;
use validator::ValidationError;

pub(crate) fn fail_validation_on_duplicates<T: Serialize>(
    duplicates: &[T],
    error_id: &'static str,
    reason: &str,
) -> Result<(), ValidationError> {
    if duplicates.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new(error_id);
        error.add_param(Cow::from("duplicates"), &duplicates);
        Err(error.with_message(Cow::Owned(reason.to_string())))
    }
}

pub(crate) fn fail_validation_on_empty<T: Serialize>(
    offenders: &[T],
    error_id: &'static str,
    reason: &str,
) -> Result<(), ValidationError> {
    if offenders.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new(error_id);
        error.add_param(Cow::from("datasets"), &offenders);
        Err(error.with_message(Cow::Owned(reason.to_string())))
    }
}
