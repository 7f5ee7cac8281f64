//! Operation boundary macros
//!
//! Every public comparison entry point brackets its work with exactly one
//! start and one end event. Both carry the canonical `component`, `op` and
//! `event` fields; the comparison's own fields (`comparison_id`, `tier`,
//! `equal`, report sizes) follow the op name.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($event:expr, $op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        );
    };
}

/// Mark the start of a comparison
///
/// # Example
///
/// ```
/// # use scenematch_core::log_op_start;
/// log_op_start!("compare_nodes");
/// log_op_start!("compare_nodes", subject = "node 'Door' (#1)", comparison_id = "c-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            scenematch_core_types::schema::EVENT_START,
            $op
            $(, $($field)*)?
        )
    };
}

/// Mark the end of a comparison; the elapsed time is mandatory
///
/// # Example
///
/// ```
/// # use scenematch_core::log_op_end;
/// log_op_end!("compare_nodes", duration_ms = 3);
/// log_op_end!("compare_values", duration_ms = 0, tier = "equal");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            scenematch_core_types::schema::EVENT_END,
            $op,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}
