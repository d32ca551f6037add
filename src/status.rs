//! Status codes and the diagnostic message slot used at the binding boundary.
//!
//! Inside the crate failures travel as [`LerpError`]. A binding layer that
//! speaks integer status codes calls [`eval_status`] or
//! [`total_differential_status`] instead: these flatten the error into a
//! [`Status`] and leave its human-readable text in a thread-local slot for
//! [`get_error_message`]. The message is advisory only; never branch on it.

use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LerpError;
use crate::eval;
use crate::method::{ExtrapMethod, InterpMethod};
use crate::table::GridTable;

/// Closed set of evaluation outcomes, with the integer codes of the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Status {
    /// Evaluation succeeded; outputs are populated.
    Ok = 0,
    /// The point lies outside the grid and extrapolation is disabled.
    OutOfBounds = -1,
    /// Point or delta vector length differs from the table's axis count.
    WrongNParams = -2,
    /// The table handle is absent or unusable.
    DatasetNotFound = -3,
    /// An interpolation or extrapolation tag is not recognized.
    UnknownMethod = -4,
}

impl Status {
    /// Integer code of this status.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Status for an integer code, if it is one of the five known codes.
    pub fn from_code(code: i32) -> Option<Status> {
        match code {
            0 => Some(Status::Ok),
            -1 => Some(Status::OutOfBounds),
            -2 => Some(Status::WrongNParams),
            -3 => Some(Status::DatasetNotFound),
            -4 => Some(Status::UnknownMethod),
            _ => None,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "ok",
            Status::OutOfBounds => "out of bounds",
            Status::WrongNParams => "wrong number of parameters",
            Status::DatasetNotFound => "dataset not found",
            Status::UnknownMethod => "unknown method",
        };
        f.write_str(name)
    }
}

thread_local! {
    static LAST_ERROR: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Store a diagnostic message for the current thread, replacing the previous one.
///
/// Accepts anything displayable, including `format_args!(..)`.
pub fn set_error_message(message: impl fmt::Display) {
    let message = message.to_string();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = message);
}

/// The current thread's diagnostic message (empty if none).
pub fn get_error_message() -> String {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

/// Return the current thread's diagnostic message and clear the slot.
pub fn take_error_message() -> String {
    LAST_ERROR.with(|slot| std::mem::take(&mut *slot.borrow_mut()))
}

pub fn clear_error_message() {
    LAST_ERROR.with(|slot| slot.borrow_mut().clear());
}

fn report<T>(result: crate::error::Result<T>) -> std::result::Result<T, Status> {
    match result {
        Ok(v) => {
            clear_error_message();
            Ok(v)
        }
        Err(err) => {
            set_error_message(&err);
            Err(err.status())
        }
    }
}

fn require_table<'t, 'a>(
    table: Option<&'t GridTable<'a>>,
) -> crate::error::Result<&'t GridTable<'a>> {
    table.ok_or_else(|| LerpError::DatasetNotFound {
        message: "no table handle was supplied".into(),
    })
}

/// Evaluate `table` at `point` with raw integer method tags.
///
/// On success writes the value to `value` and, when supplied, the partial
/// derivatives to `gradient` (which must hold one entry per axis). On
/// failure neither output is touched and the message slot holds the reason.
pub fn eval_status(
    table: Option<&GridTable<'_>>,
    point: &[f64],
    interp_code: i32,
    extrap_code: i32,
    value: &mut f64,
    gradient: Option<&mut [f64]>,
) -> Status {
    let result = (|| {
        let table = require_table(table)?;
        let interp = InterpMethod::try_from(interp_code)?;
        let extrap = ExtrapMethod::try_from(extrap_code)?;
        if let Some(out) = &gradient {
            crate::validate::validate_len(out.len(), table.ndim())?;
        }
        eval::eval(table, point, interp, extrap)
    })();

    match report(result) {
        Ok(evaluation) => {
            *value = evaluation.value;
            if let Some(out) = gradient {
                out.copy_from_slice(&evaluation.gradient);
            }
            Status::Ok
        }
        Err(status) => status,
    }
}

/// Total differential of `table` at `point` along `deltas`, with raw method tags.
pub fn total_differential_status(
    table: Option<&GridTable<'_>>,
    point: &[f64],
    deltas: &[f64],
    interp_code: i32,
    extrap_code: i32,
    dvalue: &mut f64,
) -> Status {
    let result = (|| {
        let table = require_table(table)?;
        let interp = InterpMethod::try_from(interp_code)?;
        let extrap = ExtrapMethod::try_from(extrap_code)?;
        eval::total_differential(table, point, deltas, interp, extrap)
    })();

    match report(result) {
        Ok(d) => {
            *dvalue = d;
            Status::Ok
        }
        Err(status) => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    static COORDS: [f64; 3] = [0.0, 1.0, 2.0];
    static DATA: [f64; 3] = [0.0, 10.0, 0.0];

    fn table() -> GridTable<'static> {
        GridTable::new(&DATA, &[3], vec![&COORDS[..]]).unwrap()
    }

    #[test]
    fn codes_match_abi() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::OutOfBounds.code(), -1);
        assert_eq!(Status::WrongNParams.code(), -2);
        assert_eq!(Status::DatasetNotFound.code(), -3);
        assert_eq!(Status::UnknownMethod.code(), -4);
        for code in -4..=0 {
            assert_eq!(Status::from_code(code).unwrap().code(), code);
        }
        assert!(Status::from_code(1).is_none());
        assert!(Status::Ok.is_ok());
        assert!(!Status::OutOfBounds.is_ok());
        assert!(Status::from_code(-5).is_none());
    }

    #[test]
    fn message_slot_set_get_take() {
        set_error_message(format_args!("axis {} broken", 3));
        assert_eq!(get_error_message(), "axis 3 broken");
        assert_eq!(take_error_message(), "axis 3 broken");
        assert!(get_error_message().is_empty());
    }

    #[test]
    fn message_slot_is_thread_local() {
        set_error_message("main thread");
        let other = std::thread::spawn(get_error_message).join().unwrap();
        assert!(other.is_empty());
        assert_eq!(get_error_message(), "main thread");
        clear_error_message();
    }

    #[test]
    fn eval_status_success_writes_outputs() {
        let t = table();
        let mut value = f64::NAN;
        let mut gradient = [f64::NAN];
        let status = eval_status(Some(&t), &[0.5], 3, 1, &mut value, Some(&mut gradient[..]));
        assert!(status.is_ok());
        assert_abs_diff_eq!(value, 5.0, epsilon = 1e-14);
        assert_abs_diff_eq!(gradient[0], 10.0, epsilon = 1e-14);
        assert!(get_error_message().is_empty());
    }

    #[test]
    fn eval_status_out_of_bounds_leaves_value_untouched() {
        let t = table();
        let mut value = 42.0;
        let status = eval_status(Some(&t), &[-1.0], 3, 3, &mut value, None);
        assert_eq!(status, Status::OutOfBounds);
        assert_eq!(value, 42.0);
        assert!(get_error_message().contains("outside"));
    }

    #[test]
    fn eval_status_missing_table() {
        let mut value = 0.0;
        let status = eval_status(None, &[0.5], 3, 1, &mut value, None);
        assert_eq!(status, Status::DatasetNotFound);
    }

    #[test]
    fn eval_status_unknown_methods() {
        let t = table();
        let mut value = 0.0;
        assert_eq!(
            eval_status(Some(&t), &[0.5], 0, 1, &mut value, None),
            Status::UnknownMethod
        );
        assert_eq!(
            eval_status(Some(&t), &[0.5], 3, 9, &mut value, None),
            Status::UnknownMethod
        );
        assert!(get_error_message().contains('9'));
    }

    #[test]
    fn eval_status_wrong_nparams() {
        let t = table();
        let mut value = 0.0;
        assert_eq!(
            eval_status(Some(&t), &[0.5, 0.5], 3, 1, &mut value, None),
            Status::WrongNParams
        );
        let mut gradient = [0.0; 2];
        assert_eq!(
            eval_status(Some(&t), &[0.5], 3, 1, &mut value, Some(&mut gradient[..])),
            Status::WrongNParams
        );
    }

    #[test]
    fn total_differential_status_roundtrip() {
        let t = table();
        let mut d = f64::NAN;
        let status = total_differential_status(Some(&t), &[1.5], &[0.5], 3, 1, &mut d);
        assert_eq!(status, Status::Ok);
        assert_abs_diff_eq!(d, -5.0, epsilon = 1e-14);

        let status = total_differential_status(Some(&t), &[1.5], &[], 3, 1, &mut d);
        assert_eq!(status, Status::WrongNParams);
    }
}
