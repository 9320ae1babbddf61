pub(crate) mod report_config_validation;
mod validation_utils;
