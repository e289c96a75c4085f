//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct VectorError {
    err: String,
}

impl VectorError {
    pub fn new(err: &str) -> VectorError {
        VectorError {
            err: err.to_string(),
        }
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError]: {}", self.err)
    }
}

impl Error for VectorError {}

#[macro_export]
macro_rules! vec_err {
    ( $x:expr ) => {{
        $crate::vec_error::VectorError::new(
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
