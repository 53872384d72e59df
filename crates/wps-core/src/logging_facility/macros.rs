//! Operation logging macros
//!
//! Every operation boundary logs `component`, `op` and `event`; extra
//! `tracing` fields may follow the fixed arguments.

/// Log the start of an operation
///
/// ```
/// # use wps_core::log_op_start;
/// log_op_start!("put_snippet");
/// log_op_start!("put_snippet", snippet = "sale-badge");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START
            $(, $($field)+)?
        )
    };
}

/// Log the successful end of an operation
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// Log a failed operation
///
/// The error goes through `ExError` so every failure carries `err.kind` and
/// `err.code`.
///
/// ```
/// # use wps_core::{log_op_error, errors::WpsError};
/// let err = WpsError::SnippetNotFound { name: "sale-badge".to_string() };
/// log_op_error!("show_snippet", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)+)?
        );
    }};
}
