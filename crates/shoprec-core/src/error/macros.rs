//! Error macros for shoprec

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::ShoprecError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ShoprecError::UsageError($msg.to_string()))
    };
}

/// Macro for mapping interaction store errors
#[macro_export]
macro_rules! map_store_err {
    ($op:expr, $error:expr) => {
        $crate::error::ShoprecError::store_operation($op, $error)
    };
}
