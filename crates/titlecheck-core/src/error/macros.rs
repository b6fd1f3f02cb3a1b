//! Error macros for titlecheck

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::TitlecheckError::invalid_value(
            $context, $value,
        ))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TitlecheckError::UsageError($msg.to_string()))
    };
}

/// Macro for mapping artifact load errors
#[macro_export]
macro_rules! map_load_err {
    ($artifact:expr, $path:expr) => {
        |e| $crate::error::TitlecheckError::artifact_load($artifact, $path, e)
    };
}
